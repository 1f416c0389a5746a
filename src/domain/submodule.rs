use std::path::{Component, Path, PathBuf};

/// A submodule denoted by its directory within the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    dir: PathBuf,
}

impl Submodule {
    /// Create a submodule handle from a repository-relative directory.
    ///
    /// Root, prefix and `.` components are dropped so config keys and command
    /// arguments always name the same relative path.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let raw: PathBuf = dir.into();
        let dir = raw
            .components()
            .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
            .collect();
        Submodule { dir }
    }

    /// Directory with `/` separators, as git stores it in `.gitmodules`
    pub fn posix_path(&self) -> String {
        self.dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Config key in the `submodule.<path>.<key>` namespace
    pub fn config_key(&self, key: &str) -> String {
        format!("submodule.{}.{}", self.posix_path(), key)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl From<&str> for Submodule {
    fn from(dir: &str) -> Self {
        Submodule::new(dir)
    }
}

impl From<&Path> for Submodule {
    fn from(dir: &Path) -> Self {
        Submodule::new(dir)
    }
}

impl From<PathBuf> for Submodule {
    fn from(dir: PathBuf) -> Self {
        Submodule::new(dir)
    }
}
