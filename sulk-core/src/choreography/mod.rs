//! Choreography model and playback
//!
//! A choreography program is a fixed list of motion commands authored on the
//! logical scale. The library holds the catalog and picks one per wake; the
//! player walks it command by command.

pub mod catalog;
pub mod command;
pub mod library;
pub mod player;
pub mod program;

pub use catalog::{library, CATALOG};
pub use command::MotionCommand;
pub use library::{ChoreographyLibrary, Selection};
pub use player::{execute, PlaybackSummary, MAX_RECORDED_FAULTS};
pub use program::ChoreographyProgram;
