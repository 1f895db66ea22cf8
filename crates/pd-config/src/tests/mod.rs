mod gateway;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set PD_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PD_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every PD_* override the host environment might carry
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "PD_GATEWAY_URL",
        "PD_GATEWAY_API_KEY",
        "PD_PROFILES_TABLE",
        "PD_GATEWAY_TIMEOUT_SECS",
        "PD_PUBLIC_PATH",
        "PD_PROTECTED_PATH",
        "PD_SESSION_FILE",
        "PD_LOG_LEVEL",
        "PD_LOG_COLORED",
        "PD_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
