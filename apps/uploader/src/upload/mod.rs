// Upload flow: file selection, state transitions, the parse client, and the
// controller that ties them together. Rendering lives in crate::render.

pub mod client;
pub mod controller;
pub mod file;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::HttpParseClient;
pub use controller::{SubmitOutcome, UploadController};
pub use file::SelectedFile;
