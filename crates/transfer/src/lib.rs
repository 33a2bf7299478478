//! Transfer façade crate consolidating mission planning and exposing supporting crates.

pub mod mission;

pub use facade::*;
pub use solar_ephemeris as ephemeris;
pub use solar_impulsive as impulsive;

mod facade;
