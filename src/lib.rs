//! ignition_platform_launch library
//!
//! Programmatic launch description for the Aerostack ignition platform node:
//! a pure builder producing the ordered action list (argument declarations
//! followed by the node directive), plus the machinery to resolve it into a
//! concrete node record.

pub mod actions;
pub mod ament;
pub mod context;
pub mod description;
pub mod error;
pub mod params;
pub mod platform;
pub mod record;
pub mod substitution;

use error::Result;
use record::LaunchRecord;
use std::collections::HashMap;

pub use description::LaunchDescription;
pub use platform::platform_launch_description;

/// Resolve the platform launch description with the given overrides.
pub fn resolve_platform_launch(overrides: HashMap<String, String>) -> Result<LaunchRecord> {
    platform_launch_description().resolve(overrides)
}
