
use std::env;

use tempfile::TempDir;

/// Variables that would leak host settings into a test.
const AMBIENT_VARS: &[&str] = &[
    "PORT",
    "GOOGLE_CLOUD_PROJECT",
    "FIRESTORE_EMULATOR_HOST",
    "LRP_SERVER_HOST",
    "LRP_SERVER_PORT",
    "LRP_STORE_BACKEND",
    "LRP_SQLITE_PATH",
    "LRP_FIRESTORE_PROJECT_ID",
    "LRP_FIRESTORE_BASE_URL",
    "LRP_FIRESTORE_DATABASE",
    "LRP_FIRESTORE_ACCESS_TOKEN",
    "LRP_FIRESTORE_USE_METADATA_SERVER",
    "LRP_LOG_LEVEL",
    "LRP_LOG_COLORED",
    "LRP_LOG_FILE",
];

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

/// Temp config directory pointed to by LRP_CONFIG_DIR, with ambient
/// overrides cleared. Dropping it restores the environment.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = AMBIENT_VARS.iter().map(|key| EnvGuard::remove(*key)).collect();
    guards.push(EnvGuard::set(
        "LRP_CONFIG_DIR",
        dir.path().to_str().unwrap(),
    ));
    TestEnv {
        dir,
        _guards: guards,
    }
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }
}
