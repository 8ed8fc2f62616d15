use crate::config::SimConfig;
use crate::constants::LIGHT_SPEED_RAMP_DELAY;

pub fn thrust_multiplier(light_speed_mode_active: bool, time_elapsed: f64, config: &SimConfig) -> f64 {
    if light_speed_mode_active && time_elapsed > LIGHT_SPEED_RAMP_DELAY {
        let time_factor = time_elapsed.max(0.0) / config.light_speed_ramp_time_scale;
        1.0 + time_factor.powf(config.light_speed_ramp_power)
    } else {
        1.0
    }
}

pub fn thrust_acceleration(
    thrust_level: f64,
    light_speed_mode_active: bool,
    time_elapsed: f64,
    config: &SimConfig,
) -> f64 {
    thrust_level
        * config.max_thrust_accel
        * thrust_multiplier(light_speed_mode_active, time_elapsed, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiplier_inactive() {
        let config = SimConfig::default();
        assert_relative_eq!(thrust_multiplier(false, 50.0, &config), 1.0);
    }

    #[test]
    fn test_multiplier_before_ramp_delay() {
        let config = SimConfig::default();
        assert_relative_eq!(thrust_multiplier(true, 0.5, &config), 1.0);
        assert_relative_eq!(thrust_multiplier(true, 1.0, &config), 1.0);
    }

    #[test]
    fn test_multiplier_ramp_at_three_seconds() {
        let config = SimConfig::default();
        let expected = 1.0 + 1.5_f64.powi(11);
        assert_relative_eq!(thrust_multiplier(true, 3.0, &config), expected, epsilon = 1e-9);
        assert_relative_eq!(thrust_multiplier(true, 3.0, &config), 87.5, epsilon = 0.01);
    }

    #[test]
    fn test_multiplier_uses_config() {
        let config = SimConfig {
            light_speed_ramp_time_scale: 1.0,
            light_speed_ramp_power: 2.0,
            ..SimConfig::default()
        };
        assert_relative_eq!(thrust_multiplier(true, 4.0, &config), 17.0);
    }

    #[test]
    fn test_thrust_acceleration() {
        let config = SimConfig::default();
        assert_relative_eq!(thrust_acceleration(1.0, false, 0.0, &config), 45.0);
        assert_relative_eq!(thrust_acceleration(0.5, false, 0.0, &config), 22.5);
        assert_relative_eq!(thrust_acceleration(0.0, true, 10.0, &config), 0.0);
    }
}
