use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use stemdrop_core::{Status, TaskOutcome, UploadConfig, UploadQueue};
use stemdrop_io::{DropZone, StatusBanner, StemList, StemListPhase, api};

/// How long a finished upload stays in the visible queue.
const QUEUE_CLEAR_DELAY_MS: u32 = 2000;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the page-level state via Dioxus signals and wires together the
/// drop zone, status banner, and stems list. The status banner is
/// shared by all uploads: every lifecycle event overwrites it, and with
/// several files in flight the last event to land wins.
fn app() -> Element {
    // --- Application state ---
    let config = UploadConfig::default();
    let mut status = use_signal(|| Option::<Status>::None);
    let mut queue = use_signal(UploadQueue::new);
    let mut stems = use_signal(|| StemListPhase::Loading);
    let mut refresh_generation = use_signal(|| 0u64);

    // --- Stems list refresh effect ---
    // Runs once on mount and again on every generation bump (one bump
    // per successful upload). A fetch that completes after a newer one
    // started discards its result.
    use_effect(move || {
        let my_generation = refresh_generation();
        spawn(async move {
            let phase = match api::fetch_stems().await {
                Ok(entries) => StemListPhase::Ready(entries),
                Err(e) => {
                    error!("failed to load stems list: {e}");
                    StemListPhase::Failed
                }
            };
            if *refresh_generation.peek() != my_generation {
                return;
            }
            stems.set(phase);
        });
    });

    // --- Accepted file handler ---
    // The pending banner is set before the request goes out. On success
    // the stems list refreshes and the finished row is cleared from the
    // queue shortly after; failed rows stay until the user re-drops.
    let on_file = move |(bytes, name): (Vec<u8>, String)| {
        let task_id = queue.write().push(name.clone());
        status.set(Some(Status::sending()));
        spawn(async move {
            match api::upload(config, &bytes, &name).await {
                Ok(()) => {
                    queue.write().settle(task_id, TaskOutcome::Succeeded);
                    status.set(Some(Status::success()));
                    refresh_generation += 1;

                    gloo_timers::future::TimeoutFuture::new(QUEUE_CLEAR_DELAY_MS).await;
                    queue.write().remove(task_id);
                }
                Err(e) => {
                    queue.write().settle(task_id, TaskOutcome::Failed);
                    status.set(Some(Status::error(e.upload_message())));
                }
            }
        });
    };

    // --- Rejected file handler ---
    // Client-side rejections (wrong extension, oversized) never reach
    // the network; they surface as a failed row plus an error banner.
    let on_reject = move |(name, message): (String, String)| {
        queue.write().push_failed(name);
        status.set(Some(Status::error(message)));
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "stemdrop" }
                p { class: "tagline",
                    "Split a track into vocals, drums, bass, and more."
                }
            }

            StatusBanner { status: status() }

            DropZone {
                config: config,
                tasks: queue().tasks().to_vec(),
                on_file: on_file,
                on_reject: on_reject,
            }

            StemList { phase: stems() }
        }
    }
}
