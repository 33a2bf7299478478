//! Circular-orbit ephemeris: turns an instant into planar heliocentric positions.
//!
//! Every body moves uniformly on a circle of radius `a` with period `T`, starting from
//! its phase offset at the epoch. Results are pure functions of the body table, the
//! time scale, and the instant.

mod body;
mod propagate;

pub use body::{Body, BodyTable};
pub use propagate::{Ephemeris, Position, TimeScale, propagate};

use thiserror::Error;

/// Errors surfaced while building the body table or resolving bodies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("body '{0}' is not in the reference table")]
    UnknownBody(String),
    #[error("body '{name}' has invalid {field}: {value}")]
    InvalidBody {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("body '{0}' appears more than once in the reference table")]
    DuplicateBody(String),
    #[error("reference table is empty")]
    EmptyTable,
}
