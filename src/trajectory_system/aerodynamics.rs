use crate::control::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64) -> Self {
        Aerodynamics { drag_coefficient }
    }

    pub fn calculate_drag(&self, velocity: f64, environment: &Environment) -> f64 {
        if velocity == 0.0 {
            return 0.0;
        }
        -self.drag_coefficient * environment.air_density_factor * velocity * velocity.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_drag_calculation_at_sea_level() {
        let aero = Aerodynamics::new(0.0005);
        let environment = Environment::at_altitude(0.0, 9.81);

        let drag = aero.calculate_drag(100.0, &environment);

        assert_relative_eq!(drag, -5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_opposes_descent() {
        let aero = Aerodynamics::new(0.0005);
        let environment = Environment::at_altitude(0.0, 9.81);

        let drag = aero.calculate_drag(-100.0, &environment);

        assert_relative_eq!(drag, 5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_velocity_edge_case() {
        let aero = Aerodynamics::new(0.0005);
        let environment = Environment::at_altitude(0.0, 9.81);

        assert_eq!(aero.calculate_drag(0.0, &environment), 0.0);
    }

    #[test]
    fn test_high_altitude_drag() {
        let aero = Aerodynamics::new(0.0005);
        let environment = Environment::at_altitude(8_500.0, 9.81);

        let drag = aero.calculate_drag(100.0, &environment);

        assert_relative_eq!(drag, -5.0 * (-1.0_f64).exp(), epsilon = EPSILON);
    }

    #[test]
    fn test_space_drag() {
        let aero = Aerodynamics::new(0.0005);
        let environment = Environment::at_altitude(1_000_000.0, 9.81);

        let drag = aero.calculate_drag(7_000.0, &environment);

        assert_abs_diff_eq!(drag, 0.0, epsilon = 1e-12);
    }
}
