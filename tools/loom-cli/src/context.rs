//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use loom_cache::{Cache, DirStorage, SessionId};
use loom_commerce::cart::CartStore;
use loom_commerce::catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Storage key remembering which session the CLI is working in.
pub const CURRENT_SESSION_KEY: &str = "loom:current-session";

const CONFIG_NAMES: [&str; 3] = ["loom.toml", ".loom.toml", "loom.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session given on the command line.
    session_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        session: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self::new(config, output, cwd, session.map(str::to_string)))
    }

    /// Build a context from parts.
    pub fn new(
        config: CliConfig,
        output: Output,
        cwd: PathBuf,
        session_override: Option<String>,
    ) -> Self {
        Self {
            config,
            output,
            cwd,
            session_override,
        }
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        start.ancestors().find_map(|dir| {
            CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .filter(|path| path.exists())
                .find_map(|path| CliConfig::load(&path).ok())
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the session storage directory.
    pub fn storage(&self) -> Result<DirStorage> {
        let dir = self.resolve_path(&self.config.storage.dir);
        DirStorage::open(&dir)
            .with_context(|| format!("Failed to open session storage: {}", dir.display()))
    }

    /// Load the product catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let path = self.resolve_path(&self.config.catalog.path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }

    /// Pick the session to work in.
    ///
    /// Command line first, then config, then the remembered current session.
    /// With none of those a new session is started and remembered.
    pub fn session_id(&self, storage: &DirStorage) -> Result<SessionId> {
        if let Some(id) = self
            .session_override
            .as_deref()
            .or(self.config.session.id.as_deref())
        {
            return Ok(SessionId::from(id));
        }

        let cache = Cache::new(storage);
        match cache.get::<SessionId>(CURRENT_SESSION_KEY) {
            Ok(Some(id)) => return Ok(id),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable current session"),
        }

        self.start_session(storage)
    }

    /// Start a fresh session and remember it as current.
    pub fn start_session(&self, storage: &DirStorage) -> Result<SessionId> {
        let id = SessionId::generate();
        Cache::new(storage)
            .set(CURRENT_SESSION_KEY, &id)
            .context("Failed to remember current session")?;
        tracing::info!(session = %id, "started session");
        Ok(id)
    }

    /// Open the cart of the selected session.
    pub fn open_cart(&self) -> Result<CartStore<DirStorage>> {
        let storage = self.storage()?;
        let session = self.session_id(&storage)?;
        self.output.debug(&format!("Session: {}", session));
        Ok(CartStore::open(storage, session))
    }
}
