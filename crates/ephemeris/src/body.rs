//! Validated body descriptors and the reference table.

use serde::Serialize;
use solar_config::BodyConfig;
use std::f64::consts::TAU;

use solar_core::time::years_to_days;

use crate::EphemerisError;

/// Immutable body descriptor. Radius and period are positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    name: String,
    semi_major_axis_au: f64,
    period_years: f64,
    phase_offset_rad: f64,
    color: String,
    marker_size: u32,
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite radius and period.
    pub fn new(
        name: impl Into<String>,
        semi_major_axis_au: f64,
        period_years: f64,
        phase_offset_rad: f64,
    ) -> Result<Self, EphemerisError> {
        let name = name.into();
        let invalid = |field, value| EphemerisError::InvalidBody {
            name: name.clone(),
            field,
            value,
        };
        if !(semi_major_axis_au.is_finite() && semi_major_axis_au > 0.0) {
            return Err(invalid("semi-major axis", semi_major_axis_au));
        }
        if !(period_years.is_finite() && period_years > 0.0) {
            return Err(invalid("period", period_years));
        }
        if !phase_offset_rad.is_finite() {
            return Err(invalid("phase offset", phase_offset_rad));
        }
        Ok(Self {
            name,
            semi_major_axis_au,
            period_years,
            phase_offset_rad,
            color: "white".to_string(),
            marker_size: 5,
        })
    }

    /// Attach presentation metadata.
    pub fn with_style(mut self, color: impl Into<String>, marker_size: u32) -> Self {
        self.color = color.into();
        self.marker_size = marker_size;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semi_major_axis_au(&self) -> f64 {
        self.semi_major_axis_au
    }

    pub fn period_years(&self) -> f64 {
        self.period_years
    }

    pub fn phase_offset_rad(&self) -> f64 {
        self.phase_offset_rad
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn marker_size(&self) -> u32 {
        self.marker_size
    }

    /// Mean angular rate in radians per day.
    pub fn mean_motion_rad_per_day(&self) -> f64 {
        TAU / years_to_days(self.period_years)
    }
}

impl TryFrom<&BodyConfig> for Body {
    type Error = EphemerisError;

    fn try_from(config: &BodyConfig) -> Result<Self, Self::Error> {
        Ok(Body::new(
            config.name.clone(),
            config.semi_major_axis_au,
            config.period_years,
            config.phase_offset_rad,
        )?
        .with_style(config.color.clone(), config.marker_size))
    }
}

/// Ordered, non-empty set of bodies with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTable {
    bodies: Vec<Body>,
}

impl BodyTable {
    pub fn new(bodies: Vec<Body>) -> Result<Self, EphemerisError> {
        if bodies.is_empty() {
            return Err(EphemerisError::EmptyTable);
        }
        for (idx, body) in bodies.iter().enumerate() {
            if bodies[..idx]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&body.name))
            {
                return Err(EphemerisError::DuplicateBody(body.name.clone()));
            }
        }
        tracing::debug!(count = bodies.len(), "loaded body table");
        Ok(Self { bodies })
    }

    /// Validate configuration rows and build the table.
    pub fn from_configs(configs: &[BodyConfig]) -> Result<Self, EphemerisError> {
        let bodies = configs
            .iter()
            .map(Body::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bodies)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn get(&self, name: &str) -> Result<&Body, EphemerisError> {
        let wanted = name.trim();
        self.bodies
            .iter()
            .find(|body| body.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnknownBody(wanted.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(Body::name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
