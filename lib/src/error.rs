use std::path::PathBuf;

/// Error types for the reap library.
///
/// Everything that can fail is file I/O: the roadmap document and the
/// changelog are the only external inputs. Extraction itself tolerates
/// malformed roadmap structure and never fails.
#[derive(Debug, thiserror::Error)]
pub enum ReapError {
    /// The roadmap HTML document could not be read.
    #[error("failed to read roadmap {}: {source}", .path.display())]
    RoadmapRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The existing changelog could not be read.
    ///
    /// The changelog is read in full before anything is written, so this
    /// error never leaves a partially updated file behind.
    #[error("failed to read changelog {}: {source}", .path.display())]
    ChangelogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The merged changelog could not be written back.
    #[error("failed to write changelog {}: {source}", .path.display())]
    ChangelogWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience Result type for reap operations.
pub type Result<T> = std::result::Result<T, ReapError>;
