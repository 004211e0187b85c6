//! File-backed token cache, for sharing tokens across processes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::{CachedToken, TokenCache};
use crate::error::{Error, ErrorKind, Result};

/// One JSON file per cache key, with the expiry stored alongside the token.
#[derive(Debug, Clone)]
pub struct FileTokenCache {
    base_path: PathBuf,
}

impl FileTokenCache {
    /// Create a file cache under the default directory.
    ///
    /// Default path: `~/.tcapi/tokens/`
    pub fn new() -> Result<Self> {
        let base_path = default_token_dir()?;
        Ok(Self { base_path })
    }

    /// Create a file cache with a custom directory.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            base_path: path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the cache files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn token_path(&self, key: &str) -> PathBuf {
        let safe_key = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect::<String>();

        self.base_path.join(format!("{}.json", safe_key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }
        Ok(())
    }
}

impl TokenCache for FileTokenCache {
    fn get(&self, key: &str) -> Result<Option<CachedToken>> {
        let path = self.token_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)?;
        let stored: StoredToken = serde_json::from_str(&json)?;

        if stored.expires_at <= Utc::now() {
            std::fs::remove_file(&path)?;
            return Ok(None);
        }

        Ok(Some(stored.token))
    }

    fn put(&self, key: &str, token: CachedToken, ttl: Duration) -> Result<()> {
        self.ensure_dir()?;

        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| Error::new(ErrorKind::Cache(format!("invalid ttl: {e}"))))?;
        let stored_at = Utc::now();
        let stored = StoredToken {
            token,
            stored_at,
            expires_at: stored_at + ttl,
        };

        let path = self.token_path(key);
        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&path, json)?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.token_path(key);

        if path.exists() {
            std::fs::remove_file(&path)?;
        }

        Ok(())
    }
}

/// Token with storage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: CachedToken,
    stored_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Get the default token cache directory.
pub fn default_token_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::new(ErrorKind::Config("Could not find home directory".to_string())))?;

    Ok(home.join(".tcapi").join("tokens"))
}
