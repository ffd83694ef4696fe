//! Background Tasks Module
//!
//! Delayed, cancellable jobs on the tokio runtime.
//!
//! # Tasks
//! - Scheduled task: runs a job once after a delay unless cancelled first
//! - Debouncer: keeps only the latest of a burst of scheduled jobs

mod scheduler;

pub use scheduler::{schedule, Debouncer, ScheduledTask};
