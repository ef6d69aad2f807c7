//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod show;
pub mod status;

pub use show::{show_task, Machine};
pub use status::status_task;
