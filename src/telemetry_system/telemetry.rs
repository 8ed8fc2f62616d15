use crate::control::layers::LayerTable;
use crate::control::simulation_clock::Snapshot;

use super::format::{format_distance, format_time, format_velocity};

pub const WON_DISTANCE_TEXT: &str = "OBSERVABLE UNIVERSE LIMIT!";
pub const WON_VELOCITY_TEXT: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub distance: String,
    pub velocity: String,
    pub time: String,
    pub layer_name: String,
    pub thrust: String,
}

impl Readout {
    pub fn from_snapshot(snapshot: &Snapshot, layers: &LayerTable) -> Self {
        let (distance, velocity) = if snapshot.won {
            (WON_DISTANCE_TEXT.to_string(), WON_VELOCITY_TEXT.to_string())
        } else {
            (
                format_distance(snapshot.position_y),
                format_velocity(snapshot.velocity_y),
            )
        };
        let layer_name = layers
            .get(snapshot.current_layer_index)
            .map_or_else(String::new, |layer| layer.name.clone());

        Readout {
            distance,
            velocity,
            time: format_time(snapshot.time_elapsed),
            layer_name,
            thrust: format!("{:.0}%", snapshot.thrust_level * 100.0),
        }
    }
}

pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_altitude: f64,
    layer_times: Vec<(usize, f64)>,
    won_at: Option<f64>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            layer_times: Vec::new(),
            won_at: None,
        }
    }

    pub fn collect_data(&mut self, snapshot: &Snapshot, layers: &LayerTable) {
        let speed = snapshot.velocity_y.abs();
        if speed > self.max_velocity {
            self.max_velocity = speed;
        }
        if snapshot.position_y > self.max_altitude {
            self.max_altitude = snapshot.position_y;
        }
        if snapshot.won && self.won_at.is_none() {
            self.won_at = Some(snapshot.time_elapsed);
        }

        let readout = Readout::from_snapshot(snapshot, layers);
        self.log.push(format!(
            "Time: {} | Altitude: {} | Velocity: {} | Thrust: {} | Layer: {}",
            readout.time, readout.distance, readout.velocity, readout.thrust, readout.layer_name
        ));

        // Only the first entry into each layer is kept
        let index = snapshot.current_layer_index;
        if !self.layer_times.iter().any(|(seen, _)| *seen == index) {
            self.layer_times.push((index, snapshot.time_elapsed));
        }
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn layer_times(&self) -> &[(usize, f64)] {
        &self.layer_times
    }

    pub fn summary(&self, layers: &LayerTable) -> String {
        let mut report = String::from("--- Flight Summary ---\n");
        report.push_str(&format!("Max Velocity: {}\n", format_velocity(self.max_velocity)));
        report.push_str(&format!("Max Altitude: {}\n", format_distance(self.max_altitude)));
        match self.won_at {
            Some(time) => report.push_str(&format!(
                "Edge of the observable universe reached at {}\n",
                format_time(time)
            )),
            None => report.push_str("Run ended before the edge of the universe\n"),
        }

        report.push_str("\n--- Layer Transitions ---\n");
        for (index, time) in &self.layer_times {
            let name = layers.get(*index).map_or("?", |layer| layer.name.as_str());
            report.push_str(&format!("{} reached at: {}\n", name, format_time(*time)));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::launch_sequence::RunState;
    use crate::control::layer_tracker::TransitionDecision;

    fn snapshot(position_y: f64, velocity_y: f64, time_elapsed: f64, layer: usize) -> Snapshot {
        Snapshot {
            position_y,
            velocity_y,
            time_elapsed,
            current_layer_index: layer,
            transition: TransitionDecision::None,
            won: false,
            thrust_level: 1.0,
            run_state: RunState::Launched,
        }
    }

    #[test]
    fn test_readout() {
        let layers = LayerTable::standard();
        let readout = Readout::from_snapshot(&snapshot(1_500.0, 35.24, 12.34, 1), &layers);

        assert_eq!(readout.distance, "1.50 km");
        assert_eq!(readout.velocity, "35.2 m/s");
        assert_eq!(readout.time, "12.3s");
        assert_eq!(readout.layer_name, "Troposphere");
        assert_eq!(readout.thrust, "100%");
    }

    #[test]
    fn test_won_readout() {
        let layers = LayerTable::standard();
        let won = Snapshot {
            won: true,
            thrust_level: 0.0,
            run_state: RunState::Won,
            ..snapshot(5e26, 1e25, 222.0, 13)
        };

        let readout = Readout::from_snapshot(&won, &layers);

        assert_eq!(readout.distance, WON_DISTANCE_TEXT);
        assert_eq!(readout.velocity, WON_VELOCITY_TEXT);
        assert_eq!(readout.layer_name, "Edge of Observable Universe");
        assert_eq!(readout.thrust, "0%");
    }

    #[test]
    fn test_collect_tracks_maxima() {
        let layers = LayerTable::standard();
        let mut telemetry = Telemetry::new();

        telemetry.collect_data(&snapshot(100.0, 50.0, 1.0, 1), &layers);
        telemetry.collect_data(&snapshot(400.0, -80.0, 2.0, 1), &layers);
        telemetry.collect_data(&snapshot(300.0, 10.0, 3.0, 1), &layers);

        assert_eq!(telemetry.max_altitude(), 400.0);
        assert_eq!(telemetry.max_velocity(), 80.0);
        assert_eq!(telemetry.log.len(), 3);
    }

    #[test]
    fn test_layer_transitions_recorded_once() {
        let layers = LayerTable::standard();
        let mut telemetry = Telemetry::new();

        telemetry.collect_data(&snapshot(10.0, 5.0, 0.5, 1), &layers);
        telemetry.collect_data(&snapshot(14_000.0, 500.0, 40.0, 1), &layers);
        telemetry.collect_data(&snapshot(16_000.0, 500.0, 44.0, 2), &layers);

        assert_eq!(telemetry.layer_times(), &[(1, 0.5), (2, 44.0)]);

        let summary = telemetry.summary(&layers);
        assert!(summary.contains("Troposphere reached at: 0.5s"));
        assert!(summary.contains("Stratosphere reached at: 44.0s"));
        assert!(summary.contains("Run ended before the edge of the universe"));
    }

    #[test]
    fn test_recrossing_a_boundary_keeps_first_entry() {
        let layers = LayerTable::standard();
        let mut telemetry = Telemetry::new();

        telemetry.collect_data(&snapshot(14_900.0, 10.0, 50.0, 1), &layers);
        telemetry.collect_data(&snapshot(15_010.0, 10.0, 51.0, 2), &layers);
        telemetry.collect_data(&snapshot(14_990.0, -10.0, 53.0, 1), &layers);
        telemetry.collect_data(&snapshot(15_020.0, 10.0, 58.0, 2), &layers);

        assert_eq!(telemetry.layer_times(), &[(1, 50.0), (2, 51.0)]);
    }
}
