//! Read-only mission report assembled from already-computed values.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use solar_core::time::days_to_seconds;
use solar_ephemeris::Position;
use solar_impulsive::{HohmannResult, TransferOrbit};

use super::MissionError;
use super::launch_window::LaunchWindow;

/// Calendar dates for one launch opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionTimeline {
    pub launch: DateTime<Utc>,
    pub travel_days: f64,
    pub arrival: DateTime<Utc>,
}

impl MissionTimeline {
    /// Launch after `days_to_launch`, arrive `tof_days` later. Millisecond resolution.
    pub fn from_window(
        instant: DateTime<Utc>,
        window: &LaunchWindow,
        transfer: &TransferOrbit,
    ) -> Result<Self, MissionError> {
        let launch_days = window.days_to_launch;
        let arrival_days = window.days_to_launch + transfer.tof_days;
        Ok(Self {
            launch: add_days(instant, launch_days)?,
            travel_days: transfer.tof_days,
            arrival: add_days(instant, arrival_days)?,
        })
    }
}

fn add_days(start: DateTime<Utc>, days: f64) -> Result<DateTime<Utc>, MissionError> {
    let overflow = || MissionError::Timeline { start, days };
    if !days.is_finite() {
        return Err(overflow());
    }
    let millis = (days_to_seconds(days) * 1_000.0).round() as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(overflow)
}

/// Everything computed for one instant: positions and, when requested, the transfer leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    pub computed_at: DateTime<Utc>,
    pub origin: String,
    pub positions: Vec<Position>,
    pub target: Option<String>,
    pub transfer: Option<TransferOrbit>,
    pub launch_window: Option<LaunchWindow>,
    pub timeline: Option<MissionTimeline>,
    /// Physical Hohmann burns for the same radii, for callers that need km/s.
    pub delta_v_estimate: Option<HohmannResult>,
}

impl MissionReport {
    pub fn position(&self, body: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|pos| pos.body.eq_ignore_ascii_case(body.trim()))
    }

    pub fn has_mission(&self) -> bool {
        self.transfer.is_some()
    }

    /// Largest orbital radius in the report, used to size plots.
    pub fn max_radius_au(&self) -> f64 {
        self.positions
            .iter()
            .map(|pos| pos.radius_au)
            .fold(0.0, f64::max)
    }
}

/// Collects report parts; performs no computation.
#[derive(Debug, Clone)]
pub struct MissionReportBuilder {
    report: MissionReport,
}

impl MissionReportBuilder {
    pub fn new(computed_at: DateTime<Utc>, origin: impl Into<String>) -> Self {
        Self {
            report: MissionReport {
                computed_at,
                origin: origin.into(),
                positions: Vec::new(),
                target: None,
                transfer: None,
                launch_window: None,
                timeline: None,
                delta_v_estimate: None,
            },
        }
    }

    pub fn positions(mut self, positions: Vec<Position>) -> Self {
        self.report.positions = positions;
        self
    }

    pub fn mission(
        mut self,
        target: impl Into<String>,
        transfer: TransferOrbit,
        launch_window: LaunchWindow,
        timeline: MissionTimeline,
    ) -> Self {
        self.report.target = Some(target.into());
        self.report.transfer = Some(transfer);
        self.report.launch_window = Some(launch_window);
        self.report.timeline = Some(timeline);
        self
    }

    pub fn delta_v_estimate(mut self, estimate: HohmannResult) -> Self {
        self.report.delta_v_estimate = Some(estimate);
        self
    }

    pub fn build(self) -> MissionReport {
        self.report
    }
}
