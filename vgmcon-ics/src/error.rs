use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The schedule server answered with a non-success status. The message is
    /// the response body.
    #[error("{body}")]
    Fetch { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Schedule cache I/O failed: {0}")]
    Io(#[from] io::Error),
}
