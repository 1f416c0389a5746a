//! Recursive directory removal that copes with read-only entries.

use crate::error::{MakeUtilsError, Result};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively remove `directory` and everything below it.
///
/// When an entry cannot be removed its read-only attribute is cleared and the
/// removal is attempted once more. Git-managed trees such as submodules leave
/// read-only files behind that block deletion on some platforms. A second
/// failure is returned as an error.
///
/// A symbolic link given as `directory` is refused and left untouched; links
/// inside the tree are removed without following them.
pub fn remove_directory(directory: &Path) -> Result<()> {
    if fs::symlink_metadata(directory)?.file_type().is_symlink() {
        return Err(MakeUtilsError::SymlinkRoot(directory.to_path_buf()));
    }
    remove_tree(directory, remove_path)
}

fn remove_tree<F>(directory: &Path, mut remove: F) -> Result<()>
where
    F: FnMut(&Path, bool) -> io::Result<()>,
{
    for entry in WalkDir::new(directory).contents_first(true) {
        let entry = entry.map_err(io::Error::from)?;
        let is_dir = entry.file_type().is_dir();
        remove_entry(entry.path(), is_dir, &mut remove)?;
    }
    Ok(())
}

fn remove_path(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

fn remove_entry<F>(path: &Path, is_dir: bool, remove: &mut F) -> io::Result<()>
where
    F: FnMut(&Path, bool) -> io::Result<()>,
{
    match remove(path, is_dir) {
        Ok(()) => Ok(()),
        Err(_) => {
            clear_readonly(path)?;
            remove(path, is_dir)
        }
    }
}

#[cfg(unix)]
fn clear_readonly(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o200);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn clear_readonly(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    let mut permissions = metadata.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
