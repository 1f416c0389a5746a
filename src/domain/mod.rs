//! Domain values - independent of process execution

pub mod submodule;
pub mod version;

pub use submodule::Submodule;
pub use version::BlenderVersion;
