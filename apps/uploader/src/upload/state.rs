//! Upload state and its transitions.
//!
//! Every mutation goes through one of the four transition methods below so the
//! state machine can be exercised without a network or a view.

use serde_json::Value;

use crate::errors::GENERIC_FAILURE_MESSAGE;
use crate::upload::file::SelectedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Why `begin_submit` refused to start a request. State is untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    NoFileSelected,
    AlreadyInFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
    pub parse_result: Option<Value>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl UploadState {
    /// Replaces the selection and clears any previous outcome. Loading is left alone.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.parse_result = None;
        self.error_message = None;
    }

    /// Enters `Loading` and hands back the file to send.
    pub fn begin_submit(&mut self) -> Result<SelectedFile, SubmitRejected> {
        if self.is_loading {
            return Err(SubmitRejected::AlreadyInFlight);
        }
        let file = self
            .selected_file
            .clone()
            .ok_or(SubmitRejected::NoFileSelected)?;

        self.is_loading = true;
        self.error_message = None;
        Ok(file)
    }

    pub fn on_success(&mut self, result: Value) {
        self.parse_result = Some(result);
        self.error_message = None;
        self.is_loading = false;
    }

    pub fn on_error(&mut self) {
        self.parse_result = None;
        self.error_message = Some(GENERIC_FAILURE_MESSAGE.to_string());
        self.is_loading = false;
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Error
        } else if self.parse_result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Whether the upload control should accept a click.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && self.selected_file.is_some()
    }
}
