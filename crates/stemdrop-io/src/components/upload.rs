//! Drag-and-drop upload zone with file picker and visible task queue.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdMusic, LdX};
use stemdrop_core::{TaskOutcome, UploadConfig, UploadTask};

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Acceptance rules and placeholder text.
    config: UploadConfig,
    /// Tasks rendered inside the zone, in queue order.
    tasks: Vec<UploadTask>,
    /// Called with the raw bytes and filename for each accepted file.
    on_file: EventHandler<(Vec<u8>, String)>,
    /// Called with the filename and message for each rejected file.
    on_reject: EventHandler<(String, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts the configured audio extensions; several files may be
/// dropped at once and each is validated and forwarded independently.
/// Rejections (wrong extension, oversized) fire `on_reject` without
/// touching the network.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let config = props.config;
    let on_file = props.on_file;
    let on_reject = props.on_reject;

    // Validate and forward every file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the acceptance rules live in one place.
    let process_files = move |files: Vec<FileData>| async move {
        for file in files {
            let name = file.name();
            if let Err(err) = config.check_file(&name, file.size()) {
                on_reject.call((name, err.to_string()));
                continue;
            }
            match file.read_bytes().await {
                Ok(bytes) => on_file.call((bytes.to_vec(), name)),
                Err(e) => on_reject.call((name, format!("Failed to read file: {e}"))),
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "drop-zone dragging"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            Icon { class: "drop-zone-glyph", width: 32, height: 32, icon: LdMusic }

            p { class: "drop-zone-hint", "{config.placeholder}" }

            label { class: "picker-button",
                input {
                    r#type: "file",
                    accept: "{config.accept_attr()}",
                    multiple: true,
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose Files"
            }

            p { class: "drop-zone-note",
                "MP3, WAV, FLAC, OGG, M4A, AAC (up to {config.max_file_size_mb} MB)"
            }

            if !props.tasks.is_empty() {
                ul { class: "upload-queue",
                    for task in props.tasks.iter() {
                        li {
                            key: "{task.id()}",
                            class: "upload-task {outcome_class(task.outcome())}",
                            {outcome_glyph(task.outcome())}
                            span { class: "task-name", "{task.filename()}" }
                        }
                    }
                }
            }
        }
    }
}

/// CSS modifier class for one task row.
const fn outcome_class(outcome: TaskOutcome) -> &'static str {
    match outcome {
        TaskOutcome::InFlight => "in-flight",
        TaskOutcome::Succeeded => "succeeded",
        TaskOutcome::Failed => "failed",
    }
}

/// Leading glyph for one task row.
fn outcome_glyph(outcome: TaskOutcome) -> Element {
    match outcome {
        TaskOutcome::InFlight => rsx! {
            span { class: "task-spinner" }
        },
        TaskOutcome::Succeeded => rsx! {
            Icon { class: "task-glyph", width: 16, height: 16, icon: LdCheck }
        },
        TaskOutcome::Failed => rsx! {
            Icon { class: "task-glyph", width: 16, height: 16, icon: LdX }
        },
    }
}
