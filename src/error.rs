//! Error taxonomy for checklist.
//!
//! The state machines themselves cannot fail. Everything here comes from
//! the collaborators around them: the terminal, the log file, stdout.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The terminal could not be put into TUI mode (no tty, raw mode refused).
    #[error("failed to initialize terminal: {0}")]
    Startup(#[source] io::Error),

    /// Input or display failed mid-session, including input that ran dry.
    #[error("terminal I/O failed: {0}")]
    RuntimeIo(#[source] io::Error),

    /// The user cancelled a form before submitting it.
    #[error("form aborted by user")]
    Aborted,

    /// The log file given on the command line could not be opened.
    #[error("cannot open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = Error::Startup(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "failed to initialize terminal: not a tty");

        let err = Error::RuntimeIo(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.to_string().starts_with("terminal I/O failed"));

        assert_eq!(Error::Aborted.to_string(), "form aborted by user");
    }

    #[test]
    fn logging_error_names_the_path() {
        let err = Error::Logging {
            path: PathBuf::from("/nope/app.log"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nope/app.log"));
    }
}
