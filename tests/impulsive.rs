use approx::assert_relative_eq;

use solar_mission_planner::constants::{AU_KM, MU_SUN_KM3_S2};
use solar_mission_planner::impulsive::{TransferError, hohmann, solve_transfer};

#[test]
fn earth_mars_classical_values() {
    let transfer = solve_transfer(1.0, 1.524).unwrap();
    assert_relative_eq!(transfer.semi_major_axis_au, 1.262, epsilon = 1e-12);
    assert_relative_eq!(transfer.tof_days, 258.8, epsilon = 0.2);
    assert_relative_eq!(
        transfer.departure_speed,
        (2.0 * 1.524 / 2.524_f64).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn semi_major_axis_is_mean_radius_and_tof_positive() {
    let radii = [0.387, 0.723, 1.0, 1.524, 5.203, 9.582, 19.201, 30.047];
    for &r_src in &radii {
        for &r_tgt in &radii {
            if r_src == r_tgt {
                continue;
            }
            let transfer = solve_transfer(r_src, r_tgt).unwrap();
            assert_relative_eq!(
                transfer.semi_major_axis_au,
                (r_src + r_tgt) / 2.0,
                epsilon = 1e-12
            );
            assert!(transfer.tof_days > 0.0);
            assert!(transfer.departure_speed > 0.0);
        }
    }
}

#[test]
fn identical_radii_are_invalid() {
    for r in [0.1, 1.0, 1.524, 42.0] {
        assert!(matches!(
            solve_transfer(r, r),
            Err(TransferError::InvalidTransfer { .. })
        ));
    }
}

#[test]
fn hohmann_symmetry_and_time_match() {
    let r1 = 1.0 * AU_KM;
    let r2 = 1.524 * AU_KM;
    let h12 = hohmann(r1, r2, MU_SUN_KM3_S2).unwrap();
    let h21 = hohmann(r2, r1, MU_SUN_KM3_S2).unwrap();

    assert!((h12.dv_total_km_s - h21.dv_total_km_s).abs() < 1e-9);
    assert!((h12.tof_seconds - h21.tof_seconds).abs() < 1e-6);
    assert!(h12.dv1_km_s > 0.0);
    assert!(h21.dv1_km_s < 0.0);
}

#[test]
fn hohmann_earth_mars_reasonable_numbers() {
    let h = hohmann(AU_KM, 1.523679 * AU_KM, MU_SUN_KM3_S2).unwrap();
    assert!(
        (h.dv_total_km_s - 5.6).abs() < 0.7,
        "dv_total = {}",
        h.dv_total_km_s
    );
    let days = h.tof_seconds / 86_400.0;
    assert!((250.0..=265.0).contains(&days), "tof_days = {}", days);
}

#[test]
fn physical_and_normalised_tof_agree() {
    let normalised = solve_transfer(1.0, 0.723).unwrap();
    let physical = hohmann(AU_KM, 0.723 * AU_KM, MU_SUN_KM3_S2).unwrap();
    let physical_days = physical.tof_seconds / 86_400.0;
    assert_relative_eq!(normalised.tof_days, physical_days, max_relative = 1e-3);
}
