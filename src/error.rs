//! Error types for browser interop.

use thiserror::Error;

/// Failures while reaching into the browser environment. None of these are
/// ever surfaced to the user; callers in `dom` log and fall back.
#[derive(Error, Debug)]
pub enum DomError {
    #[error("browser window is not available")]
    WindowUnavailable,

    #[error("document is not available")]
    DocumentUnavailable,
}
