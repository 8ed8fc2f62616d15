use crate::constants::{KEYBOARD_THRUST_INCREMENT, THRUSTING_THRESHOLD, THRUST_CHANGE_EPSILON};
use crate::trajectory_system::kinematics::ControlInput;

#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    level: f64,
    enabled: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new()
    }
}

impl Throttle {
    pub fn new() -> Self {
        Throttle {
            level: 0.0,
            enabled: false,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn lock(&mut self) {
        self.enabled = false;
        self.level = 0.0;
    }

    pub fn set_level(&mut self, level: f64) -> bool {
        if !self.enabled || !level.is_finite() {
            return false;
        }
        let new_level = level.clamp(0.0, 1.0);
        if (new_level - self.level).abs() > THRUST_CHANGE_EPSILON {
            self.level = new_level;
            true
        } else {
            false
        }
    }

    pub fn nudge(&mut self, up: bool, down: bool) -> bool {
        let mut change = 0.0;
        if up {
            change += KEYBOARD_THRUST_INCREMENT;
        }
        if down {
            change -= KEYBOARD_THRUST_INCREMENT;
        }
        if change == 0.0 {
            return false;
        }
        self.set_level(self.level + change)
    }

    pub fn is_thrusting(&self) -> bool {
        self.level > THRUSTING_THRESHOLD
    }

    pub fn control_input(&self, light_speed_mode_active: bool) -> ControlInput {
        ControlInput::new(self.level, light_speed_mode_active)
    }
}
