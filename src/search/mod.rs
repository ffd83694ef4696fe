//! Search Module
//!
//! User-facing search state and the controller that turns state changes into
//! debounced catalog queries.

mod controller;
mod state;

pub use controller::SearchController;
pub use state::SearchState;
