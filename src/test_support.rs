use crate::error::Result;
use crate::requirements::Host;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Host with a fixed environment, search path and working directory.
#[derive(Debug, Clone)]
pub(crate) struct FakeHost {
    env: HashMap<String, String>,
    path: Vec<PathBuf>,
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl FakeHost {
    pub(crate) fn new(cwd: &Path) -> Self {
        Self {
            env: HashMap::new(),
            path: Vec::new(),
            cwd: cwd.to_path_buf(),
            home: None,
        }
    }

    pub(crate) fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_path_dir(mut self, dir: &Path) -> Self {
        self.path.push(dir.to_path_buf());
        self
    }

    pub(crate) fn with_home(mut self, home: &Path) -> Self {
        self.home = Some(home.to_path_buf());
        self
    }
}

impl Host for FakeHost {
    fn lookup_env(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn search_path(&self) -> Vec<PathBuf> {
        self.path.clone()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a shell script and mark it executable.
pub(crate) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    let path = write_file(dir, name, "#!/bin/sh\nexit 0\n");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}
