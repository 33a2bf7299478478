//! Impulsive transfer utilities: normalised Hohmann geometry and physical burn estimates.

pub mod transfers;

pub use transfers::{
    HohmannResult, TransferDirection, TransferOrbit, checked_sqrt, hohmann, solve_transfer,
};

use thiserror::Error;

/// Errors raised by the transfer solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("invalid transfer from r = {source_radius} to r = {target_radius}: {reason}")]
    InvalidTransfer {
        source_radius: f64,
        target_radius: f64,
        reason: &'static str,
    },
    #[error("degenerate geometry: {quantity} evaluated to {value}")]
    DegenerateGeometry { quantity: &'static str, value: f64 },
}
