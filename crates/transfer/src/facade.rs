//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::launch_window::{LaunchWindow, launch_window, phase_lead_angle};
pub use crate::mission::report::{MissionReport, MissionReportBuilder, MissionTimeline};
pub use crate::mission::{MissionError, Planner, RejectedTarget};
pub use solar_ephemeris::{Body, BodyTable, Ephemeris, EphemerisError, Position, TimeScale};
pub use solar_impulsive::{HohmannResult, TransferDirection, TransferError, TransferOrbit};
