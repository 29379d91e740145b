//! The downloadable stems panel.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use stemdrop_core::StemEntry;

/// Render state of the stems panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StemListPhase {
    /// The first refresh has not answered yet.
    #[default]
    Loading,
    /// The server answered; the list may be empty.
    Ready(Vec<StemEntry>),
    /// The last refresh failed. A later refresh may still succeed.
    Failed,
}

/// Props for the [`StemList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StemListProps {
    /// Current render state.
    phase: StemListPhase,
}

/// List of downloadable stems, one anchor per entry in server order.
///
/// Each refresh replaces the whole panel body; nothing is diffed
/// against the previous list.
#[component]
pub fn StemList(props: StemListProps) -> Element {
    rsx! {
        section { class: "stems-panel",
            h2 { "Available Stems" }
            {panel_body(&props.phase)}
        }
    }
}

/// Render the panel body for one phase.
fn panel_body(phase: &StemListPhase) -> Element {
    match phase {
        StemListPhase::Loading => rsx! {
            p { class: "stems-note", "Loading stems..." }
        },
        StemListPhase::Ready(entries) if entries.is_empty() => rsx! {
            p { class: "stems-note",
                "No stems available yet. Upload a song to generate stems."
            }
        },
        StemListPhase::Ready(entries) => rsx! {
            ul { class: "stems-list",
                for entry in entries.iter() {
                    li { key: "{entry.name()}", class: "stem-item",
                        a { href: "{entry.download_href()}",
                            Icon { class: "stem-glyph", width: 16, height: 16, icon: LdDownload }
                            "{entry.name()}"
                        }
                    }
                }
            }
        },
        StemListPhase::Failed => rsx! {
            p { class: "stems-note error",
                "Error loading stems. Please refresh the page and try again."
            }
        },
    }
}
