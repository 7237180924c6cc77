//! Sequential upload of several files through one controller.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info};

use crate::render::{button_label, render, RenderOptions, SPINNER_FRAMES};
use crate::upload::{SelectedFile, SubmitOutcome, UploadController};

/// Selects and submits each file in order, printing the view after every upload.
/// Returns how many files failed, counting refused selections.
pub async fn run_batch(
    controller: &UploadController,
    files: &[PathBuf],
    options: &RenderOptions,
) -> usize {
    let mut failed = 0usize;

    for path in files {
        let file = match SelectedFile::from_path(path).await {
            Ok(file) => file,
            Err(e) => {
                error!("Skipping {}: {}", path.display(), e.user_message());
                failed += 1;
                continue;
            }
        };

        controller.select_file(file);
        if submit_with_spinner(controller).await != SubmitOutcome::Succeeded {
            failed += 1;
        }

        let state = controller.snapshot();
        info!("{} finished: {:?}", path.display(), state.phase());
        print!("{}", render(&state, options));
    }

    failed
}

/// Runs `submit()` and animates a spinner on stderr while the watched state
/// reports loading. Nothing is drawn when stderr is not a terminal.
async fn submit_with_spinner(controller: &UploadController) -> SubmitOutcome {
    let animate = std::io::stderr().is_terminal();
    let mut rx = controller.subscribe();
    let submit = controller.submit();
    tokio::pin!(submit);

    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    let mut loading = false;
    let mut label = button_label(&rx.borrow());
    let mut frame = 0usize;

    loop {
        tokio::select! {
            outcome = &mut submit => {
                if animate && frame > 0 {
                    eprint!("\r\x1b[K");
                }
                return outcome;
            }
            Ok(()) = rx.changed() => {
                let state = rx.borrow_and_update();
                loading = state.is_loading;
                label = button_label(&state);
            }
            _ = ticker.tick(), if loading => {
                if animate {
                    eprint!("\r{} {}", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()], label);
                    frame += 1;
                }
            }
        }
    }
}
