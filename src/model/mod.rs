//! Data model for image reports.
//!
//! Entries pair an image reference with a caption; layout types hold the
//! page geometry that positions them.

mod entry;
mod layout;

pub use entry::{Entry, GridEntry};
pub use layout::{GridLayout, GridPosition, PageSize, SingleLayout};
