pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod scenery;
pub mod telemetry_system;
pub mod trajectory_system;

pub use config::SimConfig;
pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from control
pub use control::environment::Environment;
pub use control::events::SimEvent;
pub use control::launch_sequence::{LaunchSequence, RunState};
pub use control::layer_tracker::{LayerTracker, TransitionDecision};
pub use control::layers::{Layer, LayerTable};
pub use control::simulation_clock::{Frame, SimulationClock, SkipReason, Snapshot};
pub use control::throttle::Throttle;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::{ControlInput, SimulationState};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::format::{format_distance, format_time, format_velocity};
pub use telemetry_system::telemetry::{Readout, Telemetry};

// Re-export scenery helpers
pub use scenery::backdrop::{Backdrop, BackdropView, GroundView};
pub use scenery::starfield::StarField;
