//! Launch-window estimate for a Hohmann transfer between two circular orbits.
//!
//! The craft arrives 180° from its departure longitude after `tof`. During that time the
//! target sweeps `n_tgt · tof`, so at departure it must lead the source by
//! `Δ = π − n_tgt · tof = π (1 − sqrt((r_src + r_tgt)³ / (8 r_tgt³)))`.
//! Nothing in that argument depends on which orbit is larger: outer targets need a
//! positive lead, inner targets a negative one (they trail the source).

use serde::Serialize;
use solar_core::angle;
use solar_core::constants::DAYS_PER_YEAR;
use solar_core::time::days_to_years;
use solar_ephemeris::Position;
use solar_impulsive::{TransferError, TransferOrbit, checked_sqrt};
use std::f64::consts::{PI, TAU};

/// Departure timing and arrival geometry for one transfer opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchWindow {
    /// Signed angle the target must lead the source by at departure.
    pub phase_lead_rad: f64,
    /// Source angle at which the lead is reached, in `[0, 2π)`.
    pub optimal_source_angle_rad: f64,
    /// Wait until the source reaches the optimal angle, in `[0, 365.25)` days.
    pub days_to_launch: f64,
    /// Target position after propagating it forward by the time of flight.
    pub arrival: Position,
    /// Time between repeats of the source/target geometry; `None` for equal periods.
    pub synodic_period_days: Option<f64>,
}

/// Phase lead `Δ` for `transfer`; positive for outer targets, negative for inner ones.
pub fn phase_lead_angle(transfer: &TransferOrbit) -> Result<f64, TransferError> {
    let r_src = transfer.source_radius_au;
    let r_tgt = transfer.target_radius_au;
    let ratio = (r_src + r_tgt).powi(3) / (8.0 * r_tgt.powi(3));
    Ok(PI * (1.0 - checked_sqrt("phase lead radicand", ratio)?))
}

/// Estimate the next launch opportunity from the current source and target positions.
///
/// The angle still to travel is read on a one-year clock, so the wait is always
/// within `[0, 365.25)` days whatever the origin.
pub fn launch_window(
    transfer: &TransferOrbit,
    src_pos: &Position,
    tgt_pos: &Position,
    tgt_period: f64,
) -> Result<LaunchWindow, TransferError> {
    let src_period = positive_period("source period", src_pos.period_years)?;
    let tgt_period = positive_period("target period", tgt_period)?;

    let phase_lead_rad = phase_lead_angle(transfer)?;
    let optimal_source_angle_rad = angle::normalize(tgt_pos.angle_rad - phase_lead_rad);

    let angle_to_travel = angle::normalize(optimal_source_angle_rad - src_pos.angle_rad);
    let mut days_to_launch = angle_to_travel / TAU * DAYS_PER_YEAR;
    if days_to_launch >= DAYS_PER_YEAR {
        days_to_launch = 0.0;
    }

    let arrival_angle = tgt_pos.angle_rad + days_to_years(transfer.tof_days) * (TAU / tgt_period);
    let arrival = Position::on_circle(
        &tgt_pos.body,
        transfer.target_radius_au,
        tgt_period,
        arrival_angle,
    );

    let relative_rate = (1.0 / src_period - 1.0 / tgt_period).abs();
    let synodic_period_days = (relative_rate > 0.0).then(|| DAYS_PER_YEAR / relative_rate);

    Ok(LaunchWindow {
        phase_lead_rad,
        optimal_source_angle_rad,
        days_to_launch,
        arrival,
        synodic_period_days,
    })
}

fn positive_period(quantity: &'static str, value: f64) -> Result<f64, TransferError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransferError::DegenerateGeometry { quantity, value })
    }
}
