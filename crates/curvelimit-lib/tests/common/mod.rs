use curvelimit_lib::VehicleModel;

/// Reference truck with aerodynamics switched off and no ambient wind.
///
/// Without side loading the peaks reduce to the centripetal terms, so the
/// stability boundary has a closed form.
pub fn still_air_model(curve_radius: f64) -> VehicleModel {
    VehicleModel {
        air_pressure: 0.0,
        wind_velocity: 0.0,
        ..VehicleModel::default().with_curve_radius(curve_radius)
    }
}

/// Speed (m/s) at which `still_air_model` first reaches either threshold.
pub fn still_air_boundary(model: &VehicleModel) -> f64 {
    use curvelimit_lib::GRAVITY;

    let theta = (model.wheelbase / (2.0 * model.curve_radius)).asin();
    let alpha = ((model.wheel_width * theta.cos())
        / (model.wheelbase * (1.0 + 0.5 * theta.sin())))
    .atan();

    let friction_limit = model.mass * GRAVITY * model.friction_coeff;
    let weight_torque =
        model.mass * GRAVITY * (model.width + model.wheel_width * theta.cos()) / 2.0;
    let tip_limit = 2.0 * weight_torque / (model.height * alpha.cos());

    (friction_limit.min(tip_limit) * (model.curve_radius + model.width) / model.mass).sqrt()
}
