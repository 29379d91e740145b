//! Dioxus UI components for stemdrop.
//!
//! Provides the drag-and-drop upload zone with its visible task queue,
//! the status banner, and the downloadable stems list.

mod status;
mod stem_list;
mod upload;

pub use status::StatusBanner;
pub use stem_list::StemList;
pub use stem_list::StemListPhase;
pub use upload::DropZone;
