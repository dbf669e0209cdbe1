//! Interaction handlers
//!
//! Like/dislike endpoints shared by posts and comments. The subject kind comes
//! from the router (`Extension<SubjectKind>`), not from the request.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use interaction_core::entities::InteractionStats;
use interaction_core::{DomainError, SubjectKind, UserId};
use interaction_service::{
    ApiResponse, InteractionRecordResponse, InteractionService, InteractionStatsResponse,
    ReactRequest, StatsQuery,
};
use tracing::warn;

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

type StatsResponse = Json<ApiResponse<InteractionStatsResponse>>;

/// Message returned when the interaction tables are not provisioned
pub fn coming_soon(kind: SubjectKind) -> String {
    format!("{} interactions feature coming soon", kind.title())
}

/// Get like/dislike stats for a subject
///
/// GET /{posts|comments}/interactions/stats?{postId|commentId}=..&userId=..
///
/// Without `userId` the caller's token (if any) decides `currentUserReaction`.
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(kind): Extension<SubjectKind>,
    auth: OptionalAuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<StatsResponse> {
    let query = StatsQuery::from_params(kind, &params)?;
    let user_id = query.user_id.or_else(|| auth.user_id());

    let service = InteractionService::new(state.service_context(), kind);
    match service.stats(&query.subject_id, user_id.as_ref()).await {
        Ok(stats) => Ok(Json(ApiResponse::ok(
            format!("{} interaction stats retrieved successfully", kind.title()),
            stats.into(),
        ))),
        Err(e) if e.is_storage_unavailable() => {
            warn!(kind = %kind, error = %e, "Interaction storage unavailable, returning empty stats");
            Ok(Json(ApiResponse::ok(
                coming_soon(kind),
                InteractionStats::empty(query.subject_id).into(),
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Like or dislike a subject
///
/// POST /{posts|comments}/interactions
pub async fn react(
    State(state): State<AppState>,
    Extension(kind): Extension<SubjectKind>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<ReactRequest>,
) -> ApiResult<StatsResponse> {
    let subject_id = body.subject_id(kind)?;
    let reaction = body.reaction()?;

    let service = InteractionService::new(state.service_context(), kind);
    let stats = service.react(&subject_id, &auth.user_id, reaction).await?;

    Ok(Json(ApiResponse::ok(
        format!("{} {} successfully", kind.title(), reaction.past_tense()),
        stats.into(),
    )))
}

/// List a user's reactions on this subject kind
///
/// GET /{posts|comments}/interactions/user/{user_id}
pub async fn get_user_interactions(
    State(state): State<AppState>,
    Extension(kind): Extension<SubjectKind>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<InteractionRecordResponse>>>> {
    let user_id = UserId::parse(&user_id)
        .map_err(|_| DomainError::MissingParameter("User ID".to_string()))?;

    let service = InteractionService::new(state.service_context(), kind);
    match service.user_interactions(&user_id).await {
        Ok(records) => Ok(Json(ApiResponse::ok(
            format!("User {} interactions retrieved successfully", kind.label()),
            records.iter().map(InteractionRecordResponse::from).collect(),
        ))),
        Err(e) if e.is_storage_unavailable() => {
            warn!(kind = %kind, error = %e, "Interaction storage unavailable, returning no records");
            Ok(Json(ApiResponse::ok(coming_soon(kind), Vec::new())))
        }
        Err(e) => Err(e.into()),
    }
}
