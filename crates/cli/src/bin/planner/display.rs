//! Plain-text rendering of a mission report.

use std::io::{self, Write};

use solar_mission_planner::time::seconds_to_days;
use solar_mission_planner::transfer::{BodyTable, MissionReport, TransferDirection};

pub fn render(
    out: &mut dyn Write,
    report: &MissionReport,
    table: &BodyTable,
    show_delta_v: bool,
) -> io::Result<()> {
    writeln!(out, "Solar System Planet Positions")?;
    let stamp = report.computed_at.format("%Y-%m-%d %H:%M:%S");
    match &report.target {
        Some(target) => writeln!(out, "{stamp} - Mission Planning to {target}")?,
        None => writeln!(out, "{stamp}")?,
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<10} {:<11} {:>8} {:>10} {:>9} {:>9} {:>11}",
        "Body", "Color", "a (AU)", "Angle (°)", "X (AU)", "Y (AU)", "Period (yr)"
    )?;
    for pos in &report.positions {
        let color = table.get(&pos.body).map(|b| b.color()).unwrap_or("-");
        writeln!(
            out,
            "{:<10} {:<11} {:>8.3} {:>10.2} {:>9.3} {:>9.3} {:>11.2}",
            pos.body,
            color,
            pos.radius_au,
            pos.angle_rad.to_degrees(),
            pos.x_au,
            pos.y_au,
            pos.period_years
        )?;
    }
    writeln!(out, "View extent     : ±{:.2} AU", report.max_radius_au() * 1.2)?;

    let (Some(target), Some(transfer), Some(window), Some(timeline)) = (
        &report.target,
        &report.transfer,
        &report.launch_window,
        &report.timeline,
    ) else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "Mission to {target}:")?;
    writeln!(out, "Optimal launch: {}", timeline.launch.format("%Y-%m-%d"))?;
    writeln!(out, "Travel time: {:.1} days", timeline.travel_days)?;
    writeln!(out, "Arrival: {}", timeline.arrival.format("%Y-%m-%d"))?;
    writeln!(out)?;

    let direction = match transfer.direction() {
        TransferDirection::Outward => "outward",
        TransferDirection::Inward => "inward",
    };
    writeln!(
        out,
        "Transfer orbit  : a = {:.3} AU, e = {:.3}, b = {:.3} AU ({direction})",
        transfer.semi_major_axis_au,
        transfer.eccentricity(),
        transfer.semi_minor_axis_au()
    )?;
    writeln!(
        out,
        "Phase lead      : {:.2}° (target {} {})",
        window.phase_lead_rad.to_degrees(),
        if window.phase_lead_rad >= 0.0 { "ahead of" } else { "behind" },
        report.origin
    )?;
    writeln!(
        out,
        "Launch angle    : {:.2}° in {:.1} days",
        window.optimal_source_angle_rad.to_degrees(),
        window.days_to_launch
    )?;
    writeln!(
        out,
        "Arrival point   : ({:.3}, {:.3}) AU at {:.2}°",
        window.arrival.x_au,
        window.arrival.y_au,
        window.arrival.angle_rad.to_degrees()
    )?;
    if let Some(synodic) = window.synodic_period_days {
        writeln!(out, "Synodic period  : {synodic:.1} days")?;
    }
    writeln!(
        out,
        "Departure proxy : {:.4} (normalised units, not km/s)",
        transfer.departure_speed
    )?;

    if let Some(estimate) = report.delta_v_estimate.as_ref().filter(|_| show_delta_v) {
        writeln!(
            out,
            "Hohmann est.    : Δv_total = {:.3} km/s (dv1={:.3}, dv2={:.3}), TOF = {:.2} days",
            estimate.dv_total_km_s,
            estimate.dv1_km_s,
            estimate.dv2_km_s,
            seconds_to_days(estimate.tof_seconds)
        )?;
    }

    Ok(())
}
