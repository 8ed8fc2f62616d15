use crate::constants::{COUNTDOWN_LEAD_IN, COUNTDOWN_SECONDS};
use crate::control::events::SimEvent;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RunState {
    Idle,
    Counting,
    Launched,
    Won,
}

#[derive(Debug, Clone)]
pub struct LaunchSequence {
    state: RunState,
    countdown_seconds: u32,
    lead_in: f64,
    remaining: u32,
    carry: f64,
    lead_in_done: bool,
}

impl Default for LaunchSequence {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECONDS, COUNTDOWN_LEAD_IN)
    }
}

impl LaunchSequence {
    pub fn new(countdown_seconds: u32, lead_in: f64) -> Self {
        LaunchSequence {
            state: RunState::Idle,
            countdown_seconds,
            lead_in: lead_in.max(0.0),
            remaining: countdown_seconds,
            carry: 0.0,
            lead_in_done: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn start(&mut self) -> bool {
        if self.state != RunState::Idle {
            return false;
        }
        self.state = RunState::Counting;
        self.remaining = self.countdown_seconds;
        self.carry = 0.0;
        self.lead_in_done = false;
        true
    }

    // Countdown runs on frame time, not its own timer.
    pub fn advance(&mut self, delta_time: f64) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.state != RunState::Counting || !delta_time.is_finite() || delta_time <= 0.0 {
            return events;
        }

        self.carry += delta_time;
        loop {
            let interval = if self.lead_in_done { 1.0 } else { self.lead_in };
            if self.carry < interval {
                break;
            }
            self.carry -= interval;
            self.lead_in_done = true;

            if self.remaining > 0 {
                events.push(SimEvent::CountdownTick {
                    remaining: self.remaining,
                });
                self.remaining -= 1;
            } else {
                self.state = RunState::Launched;
                events.push(SimEvent::Launched);
                break;
            }
        }
        events
    }

    pub fn mark_won(&mut self) {
        if self.state == RunState::Launched {
            self.state = RunState::Won;
        }
    }
}
