//! # interaction-service
//!
//! Application layer: the reaction use case, stats aggregation, the service
//! dependency container and request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, HealthResponse, InteractionRecordResponse, InteractionStatsResponse,
    ReactRequest, ReadinessResponse, StatsQuery,
};
pub use services::{
    InteractionAggregator, InteractionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
