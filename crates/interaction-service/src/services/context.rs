//! Service context - dependency container for services
//!
//! Holds one interaction repository per subject kind plus the JWT service.

use std::sync::Arc;

use interaction_common::auth::JwtService;
use interaction_core::traits::InteractionRepository;
use interaction_core::SubjectKind;
use interaction_db::{MemoryInteractionRepository, PgInteractionRepository, PgPool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// The pool is optional: a context backed by in-process repositories has none.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    post_repo: Arc<dyn InteractionRepository>,
    comment_repo: Arc<dyn InteractionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        post_repo: Arc<dyn InteractionRepository>,
        comment_repo: Arc<dyn InteractionRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            post_repo,
            comment_repo,
            jwt_service,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the repositories use one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the interaction repository for a subject kind
    pub fn interaction_repo(&self, kind: SubjectKind) -> &dyn InteractionRepository {
        match kind {
            SubjectKind::Post => self.post_repo.as_ref(),
            SubjectKind::Comment => self.comment_repo.as_ref(),
        }
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    post_repo: Option<Arc<dyn InteractionRepository>>,
    comment_repo: Option<Arc<dyn InteractionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back both subject kinds with PostgreSQL
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.post_repo = Some(Arc::new(PgInteractionRepository::new(
            pool.clone(),
            SubjectKind::Post,
        )));
        self.comment_repo = Some(Arc::new(PgInteractionRepository::new(
            pool.clone(),
            SubjectKind::Comment,
        )));
        self.pool = Some(pool);
        self
    }

    /// Back both subject kinds with fresh in-process stores
    pub fn in_memory(mut self) -> Self {
        self.post_repo = Some(Arc::new(MemoryInteractionRepository::new()));
        self.comment_repo = Some(Arc::new(MemoryInteractionRepository::new()));
        self.pool = None;
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if a repository or the JWT service was not set
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.post_repo
                .ok_or(ServiceError::MissingDependency("post_repo"))?,
            self.comment_repo
                .ok_or(ServiceError::MissingDependency("comment_repo"))?,
            self.jwt_service
                .ok_or(ServiceError::MissingDependency("jwt_service"))?,
        ))
    }
}
