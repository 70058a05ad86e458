//! Golden outputs for the reference heavy-vehicle scenario.

use approx::assert_abs_diff_eq;
use curvelimit_lib::{
    max_safe_speed, sweep_radii, SafeSpeed, SearchConfig, VehicleModel, REFERENCE_RADII,
};

const GOLDEN_MPS: [f64; 8] = [
    6.434342913621549,
    8.712136971098516,
    11.062748017138802,
    13.83963005764599,
    16.804988153467093,
    22.922002860923385,
    29.048231197634777,
    35.07603563321027,
];

#[test]
fn reference_radius_matches_golden_speed() {
    let outcome = max_safe_speed(&VehicleModel::default()).expect("search succeeds");
    let speed = outcome.meters_per_second().expect("reference radius is feasible");

    assert_abs_diff_eq!(speed, 8.712136971098516, epsilon = 1e-6);
    assert!(speed.is_finite() && speed > 0.0 && speed < 10_000.0);

    let kmh = outcome.kilometers_per_hour().expect("feasible");
    assert_eq!(format!("{kmh:.2}"), "31.36");
}

#[test]
fn reference_sweep_matches_golden_table() {
    let rows = sweep_radii(
        &VehicleModel::default(),
        &REFERENCE_RADII,
        &SearchConfig::default(),
    )
    .expect("sweep succeeds");

    assert_eq!(rows.len(), GOLDEN_MPS.len());
    for (row, expected) in rows.iter().zip(GOLDEN_MPS) {
        match row.max_speed_mps {
            SafeSpeed::Limit(speed) => assert_abs_diff_eq!(speed, expected, epsilon = 1e-6),
            SafeSpeed::NoSolution => panic!("radius {} unexpectedly infeasible", row.curve_radius),
        }
    }

    let table: Vec<String> = rows
        .iter()
        .map(|row| format!("{:.2}", row.max_speed_kmh.expect("feasible")))
        .collect();
    assert_eq!(
        table,
        ["23.16", "31.36", "39.83", "49.82", "60.50", "82.52", "104.57", "126.27"]
    );
}

#[test]
fn reference_speeds_are_realistic_for_heavy_vehicles() {
    let outcome = max_safe_speed(&VehicleModel::default()).expect("search succeeds");
    let kmh = outcome.kilometers_per_hour().expect("feasible");
    assert!((10.0..100.0).contains(&kmh), "got {kmh} km/h");
}
