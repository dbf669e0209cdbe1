//! Service layer error types

use interaction_common::{domain_status_code, AppError};
use interaction_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Rejected reaction, bad input, or a storage failure
    Domain(DomainError),

    /// `ServiceContext` was built without one of its dependencies
    MissingDependency(&'static str),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::MissingDependency(name) => write!(f, "Service context is missing {name}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::MissingDependency(_) => None,
        }
    }
}

impl ServiceError {
    /// The interaction tables are not provisioned
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_storage_unavailable())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::MissingDependency(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::MissingDependency(_) => "MISSING_DEPENDENCY",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            missing @ ServiceError::MissingDependency(_) => AppError::Config(missing.to_string()),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use interaction_core::{ReactionKind, SubjectKind};

    #[test]
    fn test_duplicate_reaction_is_bad_request() {
        let err = ServiceError::from(DomainError::DuplicateReaction {
            kind: ReactionKind::Like,
            subject: SubjectKind::Post,
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "DUPLICATE_REACTION");
        assert_eq!(err.to_string(), "You have already liked this post");
    }

    #[test]
    fn test_storage_unavailable() {
        let err = ServiceError::from(DomainError::StorageUnavailable(
            "relation \"post_interactions\" does not exist".to_string(),
        ));
        assert!(err.is_storage_unavailable());
        assert_eq!(err.status_code(), 503);

        assert!(!ServiceError::MissingDependency("post_repo").is_storage_unavailable());
    }

    #[test]
    fn test_constraint_violation_is_server_error() {
        let err = ServiceError::from(DomainError::ConstraintViolation);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::from(DomainError::missing_subject_id(SubjectKind::Comment));
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(app_err.to_string(), "Comment ID is required");

        let app_err: AppError = ServiceError::MissingDependency("jwt_service").into();
        assert_eq!(app_err.error_code(), "CONFIG_ERROR");
        assert_eq!(
            app_err.to_string(),
            "Configuration error: Service context is missing jwt_service"
        );
    }
}
