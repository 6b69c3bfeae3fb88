//! Error taxonomy for project and slot operations
//!
//! Every failure names the invariant that was violated and the path or name
//! that violated it. Raw I/O errors are always wrapped with the operation
//! and path they came from.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, DirmanError>;

/// Why a path was rejected as a link target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTargetReason {
    /// Nothing exists at the path
    Missing,
    /// The path exists but is not inside the project root
    OutsideRoot,
    /// The path is inside the project root but is not a direct child
    NotTopLevel,
}

impl fmt::Display for InvalidTargetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Missing => "does it exist?",
            Self::OutsideRoot => "path is not inside the project directory",
            Self::NotTopLevel => "path must be at the root of a project directory",
        };
        f.write_str(text)
    }
}

/// Plain error classification, for callers that only need to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTarget,
    SlotOccupied,
    AlreadyLinked,
    LinkedElsewhere,
    AlreadyExists,
    NotFound,
    InvalidArgument,
    Io,
    Config,
}

#[derive(Debug, Error)]
pub enum DirmanError {
    #[error("invalid target project {path:?}: {reason}")]
    InvalidTarget {
        path: PathBuf,
        reason: InvalidTargetReason,
    },

    #[error("slot {slot:?} already exists and points elsewhere")]
    SlotOccupied { slot: PathBuf },

    #[error("project {project} already linked at {slot:?}")]
    AlreadyLinked { project: String, slot: PathBuf },

    #[error("project {project} is already linked elsewhere: {links:?}")]
    LinkedElsewhere {
        project: String,
        links: Vec<PathBuf>,
    },

    #[error("{path:?} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("{what} not found at {path:?}")]
    NotFound { what: &'static str, path: PathBuf },

    #[error("invalid argument {path:?}: {reason}")]
    InvalidArgument { path: PathBuf, reason: String },

    #[error("failed to {op} {path:?}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("could not determine the home directory")]
    NoHomeDirectory,
}

impl DirmanError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            Self::SlotOccupied { .. } => ErrorKind::SlotOccupied,
            Self::AlreadyLinked { .. } => ErrorKind::AlreadyLinked,
            Self::LinkedElsewhere { .. } => ErrorKind::LinkedElsewhere,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Io { .. } => ErrorKind::Io,
            Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid(_)
            | Self::NoHomeDirectory => ErrorKind::Config,
        }
    }

    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_argument(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
