//! Mission planning orchestrator: ephemeris, transfer solver, launch window, report.

pub mod launch_window;
pub mod report;

use chrono::{DateTime, Utc};
use solar_config::PlannerConfig;
use solar_core::constants::{AU_KM, MU_SUN_KM3_S2};
use solar_ephemeris::{Body, Ephemeris, EphemerisError, Position};
use solar_impulsive::{HohmannResult, TransferError, TransferOrbit, hohmann, solve_transfer};

use self::launch_window::{LaunchWindow, launch_window};
use self::report::{MissionReport, MissionReportBuilder, MissionTimeline};

/// Top-level mission planning error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MissionError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("transfer planning failed: {0}")]
    Transfer(#[from] TransferError),
    #[error("mission timeline overflows the calendar ({days} days after {start})")]
    Timeline { start: DateTime<Utc>, days: f64 },
}

impl MissionError {
    /// True when the request named a body missing from the reference table.
    pub fn is_unknown_body(&self) -> bool {
        matches!(self, MissionError::Ephemeris(EphemerisError::UnknownBody(_)))
    }
}

/// Plans transfers from a fixed origin body over one ephemeris.
#[derive(Debug, Clone)]
pub struct Planner {
    ephemeris: Ephemeris,
    origin: Body,
}

impl Planner {
    /// The origin must be present in the ephemeris table.
    pub fn new(ephemeris: Ephemeris, origin: &str) -> Result<Self, MissionError> {
        let origin = ephemeris.table().get(origin)?.clone();
        Ok(Self { ephemeris, origin })
    }

    pub fn from_config(config: &PlannerConfig) -> Result<Self, MissionError> {
        Self::new(Ephemeris::from_config(config)?, &config.origin)
    }

    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    pub fn origin(&self) -> &Body {
        &self.origin
    }

    /// Names of bodies that can be targeted from the origin.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.ephemeris
            .table()
            .names()
            .filter(move |name| !name.eq_ignore_ascii_case(self.origin.name()))
    }

    /// Positions of all bodies at `instant`; never fails.
    pub fn positions(&self, instant: DateTime<Utc>) -> Vec<Position> {
        self.ephemeris.positions_at(instant)
    }

    /// Resolve a target name before any transfer arithmetic runs.
    pub fn resolve_target(&self, name: &str) -> Result<&Body, MissionError> {
        Ok(self.ephemeris.table().get(name)?)
    }

    /// Build the report for `instant`, including the transfer leg when `target` is given.
    ///
    /// An unknown target is returned as an error; [`Planner::plan_or_positions`] keeps the
    /// positions computed by the same call.
    pub fn plan(
        &self,
        instant: DateTime<Utc>,
        target: Option<&str>,
    ) -> Result<MissionReport, MissionError> {
        self.plan_or_positions(instant, target).map_err(|rejected| rejected.error)
    }

    /// Like [`Planner::plan`], but a rejected target still yields the positions-only report.
    pub fn plan_or_positions(
        &self,
        instant: DateTime<Utc>,
        target: Option<&str>,
    ) -> Result<MissionReport, RejectedTarget> {
        let builder = MissionReportBuilder::new(instant, self.origin.name())
            .positions(self.positions(instant));
        let Some(name) = target else {
            return Ok(builder.build());
        };

        match self.transfer_leg(instant, name) {
            Ok(leg) => Ok(builder
                .mission(leg.target, leg.transfer, leg.window, leg.timeline)
                .delta_v_estimate(leg.estimate)
                .build()),
            Err(error) => Err(RejectedTarget {
                report: Box::new(builder.build()),
                error,
            }),
        }
    }

    fn transfer_leg(
        &self,
        instant: DateTime<Utc>,
        name: &str,
    ) -> Result<TransferLeg, MissionError> {
        let target = self.resolve_target(name)?;
        tracing::debug!(
            origin = self.origin.name(),
            destination = target.name(),
            %instant,
            "planning transfer"
        );

        let r_src = self.origin.semi_major_axis_au();
        let r_tgt = target.semi_major_axis_au();
        let transfer = solve_transfer(r_src, r_tgt)?;

        let src_pos = self.ephemeris.position_of(&self.origin, instant);
        let tgt_pos = self.ephemeris.position_of(target, instant);
        let window = launch_window(&transfer, &src_pos, &tgt_pos, target.period_years())?;
        let timeline = MissionTimeline::from_window(instant, &window, &transfer)?;
        let estimate = hohmann(r_src * AU_KM, r_tgt * AU_KM, MU_SUN_KM3_S2)?;

        tracing::debug!(
            tof_days = transfer.tof_days,
            days_to_launch = window.days_to_launch,
            "transfer solved"
        );

        Ok(TransferLeg {
            target: target.name().to_string(),
            transfer,
            window,
            timeline,
            estimate,
        })
    }
}

/// A target the planner refused, with the positions-only report for the same instant.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedTarget {
    pub report: Box<MissionReport>,
    pub error: MissionError,
}

struct TransferLeg {
    target: String,
    transfer: TransferOrbit,
    window: LaunchWindow,
    timeline: MissionTimeline,
    estimate: HohmannResult,
}
