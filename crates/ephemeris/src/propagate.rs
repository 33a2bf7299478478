//! Time scale conversion and circular-orbit propagation.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use solar_config::{PlannerConfig, TimeBasis};
use solar_core::angle;
use solar_core::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};
use std::f64::consts::TAU;

use crate::{Body, BodyTable, EphemerisError};

/// Planar heliocentric position of a body at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub body: String,
    /// Orbital angle in `[0, 2π)`.
    pub angle_rad: f64,
    pub x_au: f64,
    pub y_au: f64,
    pub radius_au: f64,
    pub period_years: f64,
}

impl Position {
    /// Place a body on its circle at `angle_rad` (wrapped into `[0, 2π)`).
    pub fn on_circle(body: &str, radius_au: f64, period_years: f64, angle_rad: f64) -> Self {
        let angle_rad = angle::normalize(angle_rad);
        let (x_au, y_au) = angle::to_cartesian(radius_au, angle_rad);
        Self {
            body: body.to_string(),
            angle_rad,
            x_au,
            y_au,
            radius_au,
            period_years,
        }
    }
}

/// Converts instants into fractional years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    epoch: DateTime<Utc>,
    basis: TimeBasis,
}

impl TimeScale {
    pub fn new(epoch: DateTime<Utc>, basis: TimeBasis) -> Self {
        Self { epoch, basis }
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    pub fn basis(&self) -> TimeBasis {
        self.basis
    }

    /// Fractional Julian years represented by `instant`. Negative before the epoch.
    pub fn elapsed_years(&self, instant: DateTime<Utc>) -> f64 {
        match self.basis {
            TimeBasis::SinceEpoch => {
                let millis = (instant - self.epoch).num_milliseconds() as f64;
                millis / 1_000.0 / SECONDS_PER_DAY / DAYS_PER_YEAR
            }
            TimeBasis::DayOfYear => f64::from(instant.ordinal()) / DAYS_PER_YEAR,
        }
    }
}

/// Position of `body` after `elapsed_years` of uniform circular motion.
pub fn propagate(body: &Body, elapsed_years: f64) -> Position {
    let theta = elapsed_years / body.period_years() * TAU + body.phase_offset_rad();
    Position::on_circle(
        body.name(),
        body.semi_major_axis_au(),
        body.period_years(),
        theta,
    )
}

/// Body table paired with a time scale.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    table: BodyTable,
    scale: TimeScale,
}

impl Ephemeris {
    pub fn new(table: BodyTable, scale: TimeScale) -> Self {
        Self { table, scale }
    }

    /// Validate the configured body table and build the ephemeris.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, EphemerisError> {
        let table = BodyTable::from_configs(&config.bodies)?;
        Ok(Self::new(
            table,
            TimeScale::new(config.epoch, config.time_basis),
        ))
    }

    pub fn table(&self) -> &BodyTable {
        &self.table
    }

    pub fn scale(&self) -> &TimeScale {
        &self.scale
    }

    /// Position of `body` at `instant`.
    pub fn position_of(&self, body: &Body, instant: DateTime<Utc>) -> Position {
        propagate(body, self.scale.elapsed_years(instant))
    }

    /// Position of the body called `name` at `instant`.
    pub fn position_named(
        &self,
        name: &str,
        instant: DateTime<Utc>,
    ) -> Result<Position, EphemerisError> {
        Ok(self.position_of(self.table.get(name)?, instant))
    }

    /// Positions of every body, in table order.
    pub fn positions_at(&self, instant: DateTime<Utc>) -> Vec<Position> {
        let years = self.scale.elapsed_years(instant);
        self.table.iter().map(|body| propagate(body, years)).collect()
    }
}
