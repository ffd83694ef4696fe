//! API Module
//!
//! HTTP handlers and routing for the front-end JSON API.
//!
//! # Endpoints
//! - `GET /search` - Current search state
//! - `PUT /search/query` - Change the search text
//! - `PUT /search/platforms` - Change the platform filter
//! - `PUT /search/ordering` - Change the sort order
//! - `POST /search/more` - Load the next page
//! - `POST /search/refresh` - Re-run the current search from page 1
//! - `GET /games/:id` - Detail view with screenshots
//! - `GET /platforms` - Platform filter options
//! - `GET /stats` - Cache statistics
//! - `DELETE /cache` - Clear all caches
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
