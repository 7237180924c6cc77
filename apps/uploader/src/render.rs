//! Text view of an `UploadState`: title, selection, upload control, error banner, result.

use serde_json::Value;

use crate::upload::state::UploadState;

pub const TITLE: &str = "Resume Parser";
pub const UPLOAD_LABEL: &str = "Upload & Parse";
pub const LOADING_LABEL: &str = "Parsing...";

/// Frames cycled on stderr while a request is in flight.
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Print the result on one line instead of indented.
    pub compact: bool,
}

pub fn button_label(state: &UploadState) -> &'static str {
    if state.is_loading {
        LOADING_LABEL
    } else {
        UPLOAD_LABEL
    }
}

pub fn render(state: &UploadState, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');

    match &state.selected_file {
        Some(file) => out.push_str(&format!("File: {}\n", file.file_name)),
        None => out.push_str("File: (none selected)\n"),
    }

    out.push_str(&format!("[ {} ]", button_label(state)));
    if !state.can_submit() {
        out.push_str(" (disabled)");
    }
    out.push('\n');

    if let Some(message) = &state.error_message {
        out.push_str(&format!("Error: {message}\n"));
    }

    if let Some(result) = &state.parse_result {
        out.push('\n');
        out.push_str(&format_result(result, options.compact));
        out.push('\n');
    }

    out
}

/// Two-space indented JSON, or a single line when `compact`.
pub fn format_result(result: &Value, compact: bool) -> String {
    if compact {
        return result.to_string();
    }
    serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string())
}
