//! Error types for the CLI and IO boundary.
//!
//! The scoring path itself is total and never fails; errors only arise
//! where the process touches the outside world (reading snapshots,
//! loading reference sets, resolving slugs). Commands bubble these
//! through `anyhow::Result` at the binary entry point.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpaceScoreError {
    #[error("failed to read company snapshot {}", path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid company snapshot {}", path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read reference set {}", path.display())]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid reference set {}", path.display())]
    ReferenceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reference set: {0}")]
    InvalidReference(String),

    #[error("unknown company slug '{0}'")]
    UnknownCompany(String),
}
