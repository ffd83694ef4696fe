//! Request and Response models for the front-end API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{OrderingRequest, PlatformsRequest, QueryRequest};
pub use responses::{
    CacheStatsResponse, ClearCacheResponse, ErrorResponse, GameCard, GameDetailResponse,
    HealthResponse, SearchStateResponse, SearchUpdateResponse, StatsResponse,
};
