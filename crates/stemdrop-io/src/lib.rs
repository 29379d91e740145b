//! stemdrop-io: Browser I/O and Dioxus components for stemdrop.
//!
//! Talks to the stem separation server over fetch (multipart upload
//! with a timeout, stems listing) and provides the drop zone, status
//! banner, and stems list components. Code here requires a browser
//! environment (`wasm32-unknown-unknown` target); the pure workflow
//! logic lives in `stemdrop-core`.

pub mod api;
pub mod components;

pub use api::ApiError;
pub use components::{DropZone, StatusBanner, StemList, StemListPhase};
