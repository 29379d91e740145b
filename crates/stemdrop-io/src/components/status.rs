//! The status banner above the drop zone.

use dioxus::prelude::*;
use stemdrop_core::Status;

/// Props for the [`StatusBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    /// Latest upload lifecycle event, or `None` before any activity.
    status: Option<Status>,
}

/// The single status line shared by all uploads.
///
/// Hidden until the first lifecycle event; afterwards it always shows
/// the most recent one. With several uploads in flight the last event
/// to land wins.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    match props.status {
        Some(status) => rsx! {
            p { class: "{status.kind.css_class()}", role: "status", "{status.text}" }
        },
        None => rsx! {},
    }
}
