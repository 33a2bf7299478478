//! Analytic estimators for impulsive transfers in the coplanar, circular limit.
//!
//! [`solve_transfer`] works in normalised heliocentric units (AU, μ = 1) and yields the
//! geometry the launch-window calculator needs. [`hohmann`] evaluates the same transfer
//! with a physical gravitational parameter and returns signed burns in km/s.
//!
//! Both assume impulsive, tangential, coplanar burns between circular orbits.

use serde::Serialize;
use solar_core::constants::DAYS_PER_YEAR;
use std::f64::consts::{PI, TAU};

use crate::TransferError;

/// Whether the transfer climbs away from or falls toward the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    Outward,
    Inward,
}

/// Hohmann transfer in normalised units (AU, μ = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferOrbit {
    pub source_radius_au: f64,
    pub target_radius_au: f64,
    /// `(r_src + r_tgt) / 2`.
    pub semi_major_axis_au: f64,
    /// Departure speed proxy in normalised units; not a physical Δv.
    pub departure_speed: f64,
    /// Half the transfer ellipse period, in days.
    pub tof_days: f64,
}

impl TransferOrbit {
    pub fn direction(&self) -> TransferDirection {
        if self.target_radius_au > self.source_radius_au {
            TransferDirection::Outward
        } else {
            TransferDirection::Inward
        }
    }

    pub fn perihelion_au(&self) -> f64 {
        self.source_radius_au.min(self.target_radius_au)
    }

    pub fn aphelion_au(&self) -> f64 {
        self.source_radius_au.max(self.target_radius_au)
    }

    pub fn eccentricity(&self) -> f64 {
        (self.aphelion_au() - self.perihelion_au()) / (self.aphelion_au() + self.perihelion_au())
    }

    /// `sqrt(r_peri · r_apo)`.
    pub fn semi_minor_axis_au(&self) -> f64 {
        (self.perihelion_au() * self.aphelion_au()).sqrt()
    }
}

/// Square root that rejects negative or non-finite radicands instead of producing NaN.
pub fn checked_sqrt(quantity: &'static str, value: f64) -> Result<f64, TransferError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value.sqrt())
    } else {
        Err(TransferError::DegenerateGeometry { quantity, value })
    }
}

/// Solve the normalised Hohmann transfer between circular orbits of radius `r_src` and `r_tgt` (AU).
pub fn solve_transfer(r_src: f64, r_tgt: f64) -> Result<TransferOrbit, TransferError> {
    let invalid = |reason| TransferError::InvalidTransfer {
        source_radius: r_src,
        target_radius: r_tgt,
        reason,
    };
    if !(r_src.is_finite() && r_tgt.is_finite()) {
        return Err(invalid("radii must be finite"));
    }
    if r_src <= 0.0 || r_tgt <= 0.0 {
        return Err(invalid("radii must be positive"));
    }
    if r_src == r_tgt {
        return Err(invalid("source and target orbits coincide"));
    }

    let sum = r_src + r_tgt;
    let semi_major_axis_au = sum / 2.0;
    let departure_speed = checked_sqrt("departure speed radicand", 2.0 * r_tgt / sum * r_src)?;
    let tof = PI * checked_sqrt("transfer period radicand", semi_major_axis_au.powi(3))?;
    let tof_days = tof * DAYS_PER_YEAR / TAU;

    Ok(TransferOrbit {
        source_radius_au: r_src,
        target_radius_au: r_tgt,
        semi_major_axis_au,
        departure_speed,
        tof_days,
    })
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HohmannResult {
    pub dv1_km_s: f64,      // signed: negative for inward (retro) burn
    pub dv2_km_s: f64,      // signed: negative for retro capture when arriving inward
    pub dv_total_km_s: f64, // |dv1| + |dv2|
    pub tof_seconds: f64,
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_km`: initial circular orbit radius (km)
/// - `r2_km`: target circular orbit radius (km)
/// - `mu_km3_s2`: gravitational parameter of central body (km^3/s^2)
pub fn hohmann(r1_km: f64, r2_km: f64, mu_km3_s2: f64) -> Result<HohmannResult, TransferError> {
    if !(r1_km > 0.0 && r2_km > 0.0 && r1_km.is_finite() && r2_km.is_finite()) {
        return Err(TransferError::InvalidTransfer {
            source_radius: r1_km,
            target_radius: r2_km,
            reason: "radii must be positive",
        });
    }
    if !(mu_km3_s2.is_finite() && mu_km3_s2 > 0.0) {
        return Err(TransferError::DegenerateGeometry {
            quantity: "gravitational parameter",
            value: mu_km3_s2,
        });
    }

    let v1 = checked_sqrt("circular speed at r1", mu_km3_s2 / r1_km)?;
    let v2 = checked_sqrt("circular speed at r2", mu_km3_s2 / r2_km)?;
    let a_t = 0.5 * (r1_km + r2_km);
    let tof = PI * checked_sqrt("transfer period radicand", a_t.powi(3) / mu_km3_s2)?;

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = checked_sqrt("vis-viva at r1", mu_km3_s2 * (2.0 / r1_km - 1.0 / a_t))?;
    let v_t2 = checked_sqrt("vis-viva at r2", mu_km3_s2 * (2.0 / r2_km - 1.0 / a_t))?;

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;

    Ok(HohmannResult {
        dv1_km_s: dv1,
        dv2_km_s: dv2,
        dv_total_km_s: dv1.abs() + dv2.abs(),
        tof_seconds: tof,
    })
}
