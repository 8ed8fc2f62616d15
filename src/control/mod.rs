pub mod environment;
pub mod events;
pub mod launch_sequence;
pub mod layer_tracker;
pub mod layers;
pub mod propulsion;
pub mod simulation_clock;
pub mod throttle;
