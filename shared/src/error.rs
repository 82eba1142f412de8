//! Errors raised while decoding site configuration.

use thiserror::Error;

/// Failures the site script can actually observe. Missing DOM anchors are
/// not errors and never show up here.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Post data was not valid JSON or did not match the post schema.
    #[error("invalid blog post data: {0}")]
    PostData(#[from] serde_json::Error),

    /// A theme name outside the two supported values.
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}
