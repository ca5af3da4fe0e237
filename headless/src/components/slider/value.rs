use super::SliderConfig;

/// Decimal places in the shortest representation of `value`.
fn decimal_places(value: f64) -> i32 {
    let text = format!("{value}");
    match text.split_once('.') {
        Some((_, decimals)) => decimals.len() as i32,
        None => 0,
    }
}

/// Decimal places needed to hit every step counted from `config.min`.
fn step_precision(config: &SliderConfig) -> i32 {
    decimal_places(config.min).max(decimal_places(config.step))
}

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    // Past this scale the float is already as precise as it can be
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}

/// Clamp into `[min, max]`. NaN maps to `min`.
pub fn clamp_value(value: f64, config: &SliderConfig) -> f64 {
    if value.is_nan() {
        return config.min;
    }
    value.clamp(config.min, config.max)
}

/// Snap to the nearest step counted from `min`, then clamp.
///
/// The result is rounded to the combined precision of `min` and `step`, so
/// a step of `0.1` yields `0.3` rather than `0.30000000000000004`, and a
/// range starting at `0.05` keeps the `.05` on every step. The result is
/// always inside `[min, max]`.
pub fn snap_to_step(value: f64, config: &SliderConfig) -> f64 {
    let precision = step_precision(config);
    let at_step = |steps: f64| round_to(config.min + steps * config.step, precision);

    let clamped = clamp_value(value, config);
    let steps = ((clamped - config.min) / config.step).round();
    let mut snapped = at_step(steps);
    // The top step may overshoot max when the range is not a step multiple
    if snapped > config.max {
        snapped = at_step(steps - 1.0);
    }
    snapped.clamp(config.min, config.max)
}

/// Position of `value` in the range, 0 to 100.
pub fn value_to_percent(value: f64, config: &SliderConfig) -> f64 {
    let clamped = clamp_value(value, config);
    (clamped - config.min) / (config.max - config.min) * 100.0
}

/// Value at `percent` of the range, snapped to a step.
pub fn percent_to_value(percent: f64, config: &SliderConfig) -> f64 {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    snap_to_step(config.min + percent / 100.0 * (config.max - config.min), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_precision() {
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(0.25), 2);
        assert_eq!(decimal_places(1e-11), 11);
        let config = SliderConfig::new().range(0.05, 10.0).step(1.0);
        assert_eq!(step_precision(&config), 2);
        let config = SliderConfig::new().step(0.1);
        assert_eq!(step_precision(&config), 1);
    }

    #[test]
    fn test_snap_avoids_float_noise() {
        let config = SliderConfig::new().range(0.0, 1.0).step(0.1);
        assert_eq!(snap_to_step(0.29, &config), 0.3);
        assert_eq!(snap_to_step(0.7000001, &config), 0.7);
    }
}
