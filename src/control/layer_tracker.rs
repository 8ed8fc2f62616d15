use crate::constants::HIGH_VELOCITY_THRESHOLD;
use crate::control::layers::LayerTable;
use crate::trajectory_system::kinematics::SimulationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDecision {
    None,
    Instant,
    SmoothStart,
    SmoothInProgress,
}

#[derive(Debug, Clone)]
pub struct LayerTracker {
    table: LayerTable,
    transition_in_flight: bool,
}

impl LayerTracker {
    pub fn new(table: LayerTable) -> Self {
        LayerTracker {
            table,
            transition_in_flight: false,
        }
    }

    pub fn table(&self) -> &LayerTable {
        &self.table
    }

    pub fn transition_in_flight(&self) -> bool {
        self.transition_in_flight
    }

    pub fn complete_transition(&mut self) {
        self.transition_in_flight = false;
    }

    pub fn resolve(&self, altitude: f64, previous_index: usize) -> usize {
        let layers = self.table.layers();
        let previous_index = if previous_index < layers.len() {
            previous_index
        } else {
            0
        };
        if layers[previous_index].contains(altitude) {
            return previous_index;
        }

        // Above every band resolves to the last layer.
        let above = layers.partition_point(|layer| layer.min_alt <= altitude);
        if above == 0 {
            return 0;
        }
        above - 1
    }

    pub fn decide_transition(
        new_index: usize,
        old_index: usize,
        velocity: f64,
        transition_in_flight: bool,
    ) -> TransitionDecision {
        if new_index == old_index {
            TransitionDecision::None
        } else if velocity.abs() > HIGH_VELOCITY_THRESHOLD || transition_in_flight {
            TransitionDecision::Instant
        } else {
            TransitionDecision::SmoothStart
        }
    }

    pub fn track(&mut self, state: &mut SimulationState) -> TransitionDecision {
        let old_index = state.current_layer_index;
        let new_index = self.resolve(state.position_y, old_index);

        let decision = Self::decide_transition(
            new_index,
            old_index,
            state.velocity_y,
            self.transition_in_flight,
        );
        state.current_layer_index = new_index;

        match decision {
            TransitionDecision::Instant => {
                self.transition_in_flight = false;
                decision
            }
            TransitionDecision::SmoothStart => {
                self.transition_in_flight = true;
                decision
            }
            // Fade still running with no new crossing
            TransitionDecision::None if self.transition_in_flight => {
                TransitionDecision::SmoothInProgress
            }
            _ => decision,
        }
    }
}

impl Default for LayerTracker {
    fn default() -> Self {
        Self::new(LayerTable::standard())
    }
}
