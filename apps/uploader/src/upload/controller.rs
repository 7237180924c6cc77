use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::upload::client::ParseClient;
use crate::upload::file::SelectedFile;
use crate::upload::state::{SubmitRejected, UploadState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing selected; no request was made.
    NoFileSelected,
    /// A request is already running; this call was dropped.
    AlreadyInFlight,
    Succeeded,
    Failed,
}

/// Owns the upload state and performs one request per accepted `submit()`.
///
/// State is published through a `watch` channel so a view can re-render on every
/// transition, including the switch into loading.
pub struct UploadController {
    client: Arc<dyn ParseClient>,
    state: watch::Sender<UploadState>,
}

impl UploadController {
    pub fn new(client: Arc<dyn ParseClient>) -> Self {
        let (state, _) = watch::channel(UploadState::default());
        Self { client, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn select_file(&self, file: SelectedFile) {
        debug!("Selected {} ({} bytes)", file.file_name, file.bytes.len());
        self.state.send_modify(|state| state.select_file(file));
    }

    /// Uploads the selected file. Every failure ends in the generic error state;
    /// nothing propagates to the caller beyond the outcome tag.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut started = Err(SubmitRejected::NoFileSelected);
        self.state.send_if_modified(|state| {
            started = state.begin_submit();
            started.is_ok()
        });

        let file = match started {
            Ok(file) => file,
            Err(SubmitRejected::NoFileSelected) => {
                debug!("Submit ignored: no file selected");
                return SubmitOutcome::NoFileSelected;
            }
            Err(SubmitRejected::AlreadyInFlight) => {
                warn!("Submit ignored: an upload is already in progress");
                return SubmitOutcome::AlreadyInFlight;
            }
        };

        info!("Uploading {} ({} bytes)", file.file_name, file.bytes.len());

        match self.client.parse(&file).await {
            Ok(result) => {
                info!("Parsed {}", file.file_name);
                self.state.send_modify(|state| state.on_success(result));
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                warn!("Upload of {} failed [{}]: {e}", file.file_name, e.kind());
                self.state.send_modify(|state| state.on_error());
                SubmitOutcome::Failed
            }
        }
    }
}
