// Runtime state module
// Immutable per-process state shared across connections

use super::types::Config;
use crate::http::mime::ContentTypeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Immutable application state, fixed at startup and shared via `Arc`.
///
/// Holds the loaded configuration, the canonicalized serving root, and the
/// normalized content-type override table. Nothing here is mutated after
/// construction, so request handlers need no locking.
pub struct AppState {
    pub config: Config,
    root: PathBuf,
    content_types: ContentTypeMap,
}

impl AppState {
    /// Build state from configuration, resolving the serving root.
    ///
    /// The root is the configured directory when set, otherwise the directory
    /// containing the server executable. The process working directory is
    /// never consulted or changed.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = match config.server.root.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => default_root()?,
        };
        Self::with_root(config, root)
    }

    /// Build state with an explicit serving root (tests pass a temp dir here).
    pub fn with_root(config: Config, root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        let content_types = ContentTypeMap::new(&config.content_types.overrides);
        Ok(Self {
            config,
            root,
            content_types,
        })
    }

    /// Canonical serving root; every served file must resolve beneath it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content_types(&self) -> &ContentTypeMap {
        &self.content_types
    }
}

/// Directory containing the running executable
fn default_root() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}
