use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::constants::{MAX_TIME_STEP, OBSERVABLE_UNIVERSE_RADIUS, THRUSTING_THRESHOLD};
use crate::control::events::SimEvent;
use crate::control::launch_sequence::{LaunchSequence, RunState};
use crate::control::layer_tracker::{LayerTracker, TransitionDecision};
use crate::control::layers::{Layer, LayerTable};
use crate::trajectory_system::kinematics::{ControlInput, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub position_y: f64,
    pub velocity_y: f64,
    pub time_elapsed: f64,
    pub current_layer_index: usize,
    pub transition: TransitionDecision,
    pub won: bool,
    pub thrust_level: f64,
    pub run_state: RunState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    WarmUp,
    InvalidDelta,
    NotRunning,
    Won,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub events: Vec<SimEvent>,
    pub skipped: Option<SkipReason>,
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    state: SimulationState,
    config: SimConfig,
    tracker: LayerTracker,
    sequence: LaunchSequence,
    last_timestamp: Option<f64>,
    has_lifted_off: bool,
    universe_radius: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl SimulationClock {
    pub fn new(config: SimConfig) -> Self {
        Self::with_layer_table(config, LayerTable::standard())
    }

    pub fn with_layer_table(config: SimConfig, table: LayerTable) -> Self {
        SimulationClock {
            state: SimulationState::new(),
            config,
            tracker: LayerTracker::new(table),
            sequence: LaunchSequence::default(),
            last_timestamp: None,
            has_lifted_off: false,
            universe_radius: OBSERVABLE_UNIVERSE_RADIUS,
        }
    }

    pub fn with_universe_radius(mut self, universe_radius: f64) -> Self {
        self.universe_radius = universe_radius;
        self
    }

    pub fn with_launch_sequence(mut self, sequence: LaunchSequence) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.sequence.state()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: SimConfig) {
        self.config = config;
    }

    pub fn reset_config(&mut self) {
        self.config = SimConfig::default();
        info!("Config reset to defaults");
    }

    pub fn layer_table(&self) -> &LayerTable {
        self.tracker.table()
    }

    pub fn current_layer(&self) -> &Layer {
        &self.tracker.table()[self.state.current_layer_index]
    }

    pub fn universe_radius(&self) -> f64 {
        self.universe_radius
    }

    pub fn transition_in_flight(&self) -> bool {
        self.tracker.transition_in_flight()
    }

    pub fn complete_transition(&mut self) {
        self.tracker.complete_transition();
    }

    pub fn start(&mut self) -> Vec<SimEvent> {
        if self.sequence.start() {
            info!(seconds = self.sequence.remaining(), "Countdown started");
            vec![SimEvent::CountdownStarted]
        } else {
            Vec::new()
        }
    }

    // First call only records the timestamp.
    pub fn tick(&mut self, timestamp_secs: f64, control: ControlInput) -> Frame {
        match self.last_timestamp.replace(timestamp_secs) {
            Some(previous) => self.step(timestamp_secs - previous, control),
            None => self.skip(SkipReason::WarmUp, Vec::new()),
        }
    }

    pub fn step(&mut self, delta_time: f64, control: ControlInput) -> Frame {
        let valid_delta = delta_time.is_finite() && delta_time > 0.0;

        match self.sequence.state() {
            RunState::Idle => self.skip(SkipReason::NotRunning, Vec::new()),
            RunState::Won => self.skip(SkipReason::Won, Vec::new()),
            RunState::Counting => {
                if !valid_delta {
                    return self.skip(SkipReason::InvalidDelta, Vec::new());
                }
                let events = self.sequence.advance(delta_time);
                for event in &events {
                    match event {
                        SimEvent::CountdownTick { remaining } => debug!(remaining, "T-minus"),
                        SimEvent::Launched => info!("Launched"),
                        _ => {}
                    }
                }
                self.skip(SkipReason::NotRunning, events)
            }
            RunState::Launched => {
                if !valid_delta {
                    return self.skip(SkipReason::InvalidDelta, Vec::new());
                }
                self.advance_launched(delta_time.min(MAX_TIME_STEP), control)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(self.idle_decision())
    }

    // Physics, then layer tracking, then the win check, then the snapshot.
    fn advance_launched(&mut self, delta_time: f64, control: ControlInput) -> Frame {
        let mut events = Vec::new();

        // Light-speed mode is on when either the input or the config asks for it.
        let control = ControlInput {
            light_speed_mode_active: control.light_speed_mode_active
                || self.config.light_speed_mode,
            ..control
        };
        self.state.update(delta_time, &control, &self.config);

        if !self.has_lifted_off && self.state.thrust_level > THRUSTING_THRESHOLD {
            self.has_lifted_off = true;
            events.push(SimEvent::Liftoff);
        }

        let from = self.state.current_layer_index;
        let decision = self.tracker.track(&mut self.state);
        let to = self.state.current_layer_index;
        if from != to {
            debug!(
                from = %self.tracker.table()[from].name,
                to = %self.tracker.table()[to].name,
                ?decision,
                "Layer changed"
            );
            events.push(SimEvent::LayerChanged { from, to, decision });
        }

        if self.current_layer().is_final
            && self.state.position_y >= self.universe_radius
            && !self.state.won
        {
            self.state.won = true;
            self.state.thrust_level = 0.0;
            self.sequence.mark_won();
            events.push(SimEvent::Won);
            info!(
                time = self.state.time_elapsed,
                altitude = self.state.position_y,
                "Edge of the observable universe reached"
            );
        }

        Frame {
            snapshot: self.snapshot_with(decision),
            events,
            skipped: None,
        }
    }

    fn skip(&self, reason: SkipReason, events: Vec<SimEvent>) -> Frame {
        trace!(?reason, "Tick skipped");
        Frame {
            snapshot: self.snapshot(),
            events,
            skipped: Some(reason),
        }
    }

    fn idle_decision(&self) -> TransitionDecision {
        if self.tracker.transition_in_flight() {
            TransitionDecision::SmoothInProgress
        } else {
            TransitionDecision::None
        }
    }

    fn snapshot_with(&self, transition: TransitionDecision) -> Snapshot {
        Snapshot {
            position_y: self.state.position_y,
            velocity_y: self.state.velocity_y,
            time_elapsed: self.state.time_elapsed,
            current_layer_index: self.state.current_layer_index,
            transition,
            won: self.state.won,
            thrust_level: self.state.thrust_level,
            run_state: self.sequence.state(),
        }
    }
}
