use crate::{GatewayError, GatewayResult};

use pd_core::Session;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use log::{info, warn};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
/// The file holds bearer tokens: owner read/write only
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Holds the current session in memory and, optionally, in a JSON file so a
/// later run can pick it up again.
pub struct SessionStorage {
    path: Option<PathBuf>,
    current: RwLock<Option<Session>>,
}

impl SessionStorage {
    /// Storage that forgets everything when the process exits
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: RwLock::new(None),
        }
    }

    /// Storage backed by a session file
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            current: RwLock::new(None),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Session currently held in memory
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Access token of the current session, if any
    pub fn access_token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    /// Refresh the in-memory session from the file.
    ///
    /// Returns:
    /// - `Ok(Some(..))` - a stored session was found
    /// - `Ok(None)` - no file, or the file was corrupted (it is moved aside)
    pub fn load(&self) -> GatewayResult<Option<Session>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(self.current());
        };

        if !path.exists() {
            info!("No session file at {path:?}");
            self.replace(None);
            return Ok(None);
        }

        let contents =
            fs::read_to_string(path).map_err(|e| GatewayError::storage(path.to_path_buf(), e))?;

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Loaded stored session for user {}", session.user_id());
                self.replace(Some(session.clone()));
                Ok(Some(session))
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                self.backup_corrupted(path)?;
                self.replace(None);
                Ok(None)
            }
        }
    }

    /// Keep `session` as the current session.
    ///
    /// The file is written to a temp file, synced, then renamed into place.
    pub fn store(&self, session: &Session) -> GatewayResult<()> {
        if let Some(path) = self.path.as_deref() {
            Self::write_atomic(path, session)?;
        }

        self.replace(Some(session.clone()));
        Ok(())
    }

    /// Forget the current session
    pub fn clear(&self) -> GatewayResult<()> {
        if let Some(path) = self.path.as_deref()
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| GatewayError::storage(path.to_path_buf(), e))?;
        }

        self.replace(None);
        Ok(())
    }

    fn replace(&self, session: Option<Session>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn write_atomic(path: &Path, session: &Session) -> GatewayResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| GatewayError::storage(dir.to_path_buf(), e))?;
        }

        let temp_path = path.with_extension(format!("tmp.{}", std::process::id()));
        let json = serde_json::to_string_pretty(session)?;

        // Leftover from a crashed write by a process with the same pid
        match fs::remove_file(&temp_path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                return Err(GatewayError::storage(temp_path, e));
            }
            _ => {}
        }

        {
            let mut options = OpenOptions::new();
            options.write(true).create_new(true);
            #[cfg(unix)]
            options.mode(SESSION_FILE_MODE);

            let mut file = options
                .open(&temp_path)
                .map_err(|e| GatewayError::storage(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| GatewayError::storage(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| GatewayError::storage(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            GatewayError::storage(path.to_path_buf(), e)
        })?;

        info!("Stored session for user {}", session.user_id());
        Ok(())
    }

    /// Renames the file to `<name>.corrupted.{timestamp}`.
    fn backup_corrupted(&self, path: &Path) -> GatewayResult<()> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        fs::rename(path, &backup_path)
            .map_err(|e| GatewayError::storage(path.to_path_buf(), e))?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(())
    }
}
