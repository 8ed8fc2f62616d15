use crate::control::layer_tracker::TransitionDecision;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    CountdownStarted,
    CountdownTick {
        remaining: u32,
    },
    Launched,
    Liftoff,
    LayerChanged {
        from: usize,
        to: usize,
        decision: TransitionDecision,
    },
    Won,
}
