//! Errors raised at the process boundary (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Application failures plus I/O that happens outside any service, such as
/// resolving the working directory the local `.lineage.toml` is looked up in.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("cannot access {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// I/O failure while accessing `context`.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
