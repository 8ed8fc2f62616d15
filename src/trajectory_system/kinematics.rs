use crate::{
    config::SimConfig,
    constants::MAX_TIME_STEP,
    control::{environment::Environment, propulsion},
};

use super::aerodynamics::Aerodynamics;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    pub thrust_level: f64,
    pub light_speed_mode_active: bool,
}

impl ControlInput {
    pub fn new(thrust_level: f64, light_speed_mode_active: bool) -> Self {
        ControlInput {
            thrust_level,
            light_speed_mode_active,
        }
    }

    pub fn clamped_thrust(&self) -> f64 {
        if self.thrust_level.is_finite() {
            self.thrust_level.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub position_y: f64,
    pub velocity_y: f64,
    pub time_elapsed: f64,
    pub thrust_level: f64,
    pub light_speed_mode_active: bool,
    pub current_layer_index: usize,
    pub won: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    pub fn new() -> Self {
        SimulationState {
            position_y: 0.0,
            velocity_y: 0.0,
            time_elapsed: 0.0,
            thrust_level: 0.0,
            light_speed_mode_active: false,
            current_layer_index: 0,
            won: false,
        }
    }

    pub fn update(&mut self, delta_time: f64, control: &ControlInput, config: &SimConfig) {
        if self.won || !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }
        let delta_time = delta_time.min(MAX_TIME_STEP);

        self.thrust_level = control.clamped_thrust();
        self.light_speed_mode_active = control.light_speed_mode_active;

        // A bad config can make a force term non-finite; coast through it.
        let acceleration = self.net_acceleration(config);
        let acceleration = if acceleration.is_finite() {
            acceleration
        } else {
            0.0
        };

        // Semi-implicit Euler: position uses the updated velocity.
        let velocity_y = self.velocity_y + acceleration * delta_time;
        let position_y = self.position_y + velocity_y * delta_time;
        if velocity_y.is_finite() && position_y.is_finite() {
            self.velocity_y = velocity_y;
            self.position_y = position_y;
        }

        if self.position_y <= 0.0 && self.velocity_y < 0.0 {
            self.position_y = 0.0;
            self.velocity_y = 0.0;
        }
        // Only reachable from a state that started below ground.
        if self.position_y < 0.0 {
            self.position_y = 0.0;
        }

        self.time_elapsed += delta_time;
    }

    pub fn net_acceleration(&self, config: &SimConfig) -> f64 {
        let environment = Environment::at_altitude(self.position_y, config.gravity);
        let aerodynamics = Aerodynamics::new(config.drag_coefficient);

        let thrust = propulsion::thrust_acceleration(
            self.thrust_level,
            self.light_speed_mode_active,
            self.time_elapsed,
            config,
        );
        let drag = aerodynamics.calculate_drag(self.velocity_y, &environment);

        thrust - environment.gravity + drag
    }

}

pub fn advance(
    state: &SimulationState,
    delta_time: f64,
    control: &ControlInput,
    config: &SimConfig,
) -> SimulationState {
    let mut next = *state;
    next.update(delta_time, control, config);
    next
}
