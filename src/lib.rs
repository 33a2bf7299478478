//! Heliocentric planet positions and Hohmann launch-window planning.
//!
//! The workspace crates are re-exported here so front-ends (the `planner` CLI, tests,
//! other tools) can depend on a single library.

pub use solar_config as config;
pub use solar_core::{angle, constants, time};
pub use solar_ephemeris as ephemeris;
pub use solar_export as export;
pub use solar_impulsive as impulsive;
pub use solar_transfer as transfer;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
