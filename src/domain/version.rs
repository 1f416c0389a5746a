use crate::error::{MakeUtilsError, Result};
use std::collections::HashMap;
use std::fmt;

/// Macro holding `major * 100 + minor`
pub const VERSION_KEY: &str = "BLENDER_VERSION";
pub const VERSION_PATCH_KEY: &str = "BLENDER_VERSION_PATCH";
pub const VERSION_CYCLE_KEY: &str = "BLENDER_VERSION_CYCLE";

/// Cycle label of a final release
pub const RELEASE_CYCLE: &str = "release";

/// Blender version as declared in the version header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlenderVersion {
    /// 293 for 2.93.1
    pub version: u32,
    /// 1 for 2.93.1
    pub patch: u32,
    /// "alpha", "beta", "release", maybe others
    pub cycle: String,
}

impl BlenderVersion {
    pub fn new(version: u32, patch: u32, cycle: impl Into<String>) -> Self {
        BlenderVersion {
            version,
            patch,
            cycle: cycle.into(),
        }
    }

    /// Build a version from the `#define` values of a version header.
    ///
    /// All three of `BLENDER_VERSION`, `BLENDER_VERSION_PATCH` and
    /// `BLENDER_VERSION_CYCLE` must be present.
    ///
    /// # Returns
    /// * `Ok(BlenderVersion)` - All keys present and numeric keys parse
    /// * `Err(MissingVersionKey)` - A required key is absent
    /// * `Err(InvalidVersionValue)` - A numeric key is not an integer
    pub fn from_defines(defines: &HashMap<String, String>) -> Result<Self> {
        let lookup = |key: &str| {
            defines
                .get(key)
                .ok_or_else(|| MakeUtilsError::MissingVersionKey(key.to_string()))
        };
        let parse_int = |key: &str| -> Result<u32> {
            let value = lookup(key)?;
            value
                .parse::<u32>()
                .map_err(|_| MakeUtilsError::InvalidVersionValue {
                    key: key.to_string(),
                    value: value.clone(),
                })
        };

        Ok(BlenderVersion {
            version: parse_int(VERSION_KEY)?,
            patch: parse_int(VERSION_PATCH_KEY)?,
            cycle: lookup(VERSION_CYCLE_KEY)?.clone(),
        })
    }

    pub fn major(&self) -> u32 {
        self.version / 100
    }

    pub fn minor(&self) -> u32 {
        self.version % 100
    }

    pub fn is_release(&self) -> bool {
        self.cycle == RELEASE_CYCLE
    }

    /// Semantic version with the cycle as pre-release identifier
    pub fn to_semver(&self) -> Result<semver::Version> {
        let mut version = semver::Version::new(
            u64::from(self.major()),
            u64::from(self.minor()),
            u64::from(self.patch),
        );
        if !self.is_release() {
            version.pre = semver::Prerelease::new(&self.cycle)?;
        }
        Ok(version)
    }
}

impl fmt::Display for BlenderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch)?;
        if !self.is_release() {
            write!(f, "-{}", self.cycle)?;
        }
        Ok(())
    }
}
