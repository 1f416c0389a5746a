//! Version header parsing.
//!
//! The header is scanned line by line for `#define BLENDER_VERSION<SUFFIX> <value>`
//! where the suffix is uppercase letters or underscores and the value is
//! alphanumeric. Every other line is ignored.

use crate::domain::BlenderVersion;
use crate::error::{MakeUtilsError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the version header relative to the source root
pub const VERSION_HEADER: &str = "source/blender/blenkernel/BKE_blender_version.h";

const DEFINE_PATTERN: &str = r"^#define (BLENDER_VERSION[A-Z_]*)\s+([0-9A-Za-z]+)$";

/// Path of the version header under `source_root`
pub fn version_header_path(source_root: &Path) -> PathBuf {
    source_root.join(VERSION_HEADER)
}

/// Collect `BLENDER_VERSION*` defines from header text.
///
/// Lines are trimmed before matching. If a name is defined more than once the
/// first definition is kept.
pub fn parse_defines(contents: &str) -> Result<HashMap<String, String>> {
    let line_re = Regex::new(DEFINE_PATTERN)
        .map_err(|e| MakeUtilsError::config(format!("Invalid define pattern: {}", e)))?;

    let mut defines = HashMap::new();
    for line in contents.lines() {
        if let Some(captures) = line_re.captures(line.trim()) {
            if let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) {
                defines
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| value.as_str().to_string());
            }
        }
    }
    Ok(defines)
}

/// Parse header text into a [BlenderVersion]
pub fn parse_version_str(contents: &str) -> Result<BlenderVersion> {
    let defines = parse_defines(contents)?;
    BlenderVersion::from_defines(&defines)
}

/// Read and parse the version header at `header_path`.
///
/// # Returns
/// * `Ok(BlenderVersion)` - The header declares all required macros
/// * `Err(Io)` - The file cannot be read
/// * `Err(MissingVersionKey)` - A required macro is absent
pub fn parse_version(header_path: &Path) -> Result<BlenderVersion> {
    let contents = fs::read_to_string(header_path)?;
    parse_version_str(&contents)
}
