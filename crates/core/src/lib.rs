//! Core constants, angle helpers, and time conversions shared across the planner workspace.

/// Physical and calendar constants.
pub mod constants {
    /// Days per Julian year; the planner's year unit.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Heliocentric gravitational parameter (km^3/s^2).
    pub const MU_SUN_KM3_S2: f64 = 1.327_124_400_18e11;
}

/// Planar angle helpers. All angles are radians.
pub mod angle {
    use std::f64::consts::TAU;

    /// Wrap an angle into `[0, 2π)`.
    #[inline]
    pub fn normalize(theta: f64) -> f64 {
        let wrapped = theta.rem_euclid(TAU);
        // rem_euclid rounds up to TAU for tiny negative inputs
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Convert polar coordinates to planar Cartesian `(x, y)`.
    #[inline]
    pub fn to_cartesian(radius: f64, theta: f64) -> (f64, f64) {
        let (sin, cos) = theta.sin_cos();
        (radius * cos, radius * sin)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::f64::consts::PI;

        #[test]
        fn normalize_wraps_into_half_open_range() {
            assert_eq!(normalize(0.0), 0.0);
            assert_eq!(normalize(TAU), 0.0);
            assert!((normalize(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
            assert!((normalize(5.0 * PI) - PI).abs() < 1e-12);
            let tiny = normalize(-1e-18);
            assert!((0.0..TAU).contains(&tiny));
        }

        #[test]
        fn cartesian_lies_on_circle() {
            let (x, y) = to_cartesian(1.524, 2.0);
            assert!((x.hypot(y) - 1.524).abs() < 1e-12);
        }
    }
}

/// Lightweight time conversions shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_YEAR
    }

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}
