use crate::constants::{AU, LIGHT_YEAR, SPEED_OF_LIGHT};

pub fn format_distance(meters: f64) -> String {
    let meters = if meters > 0.0 { meters } else { 0.0 };

    if meters < 1_000.0 {
        format!("{:.0} m", meters)
    } else if meters < 1e6 {
        format!("{:.2} km", meters / 1_000.0)
    } else if meters < 1e9 {
        format!("{:.2} Million km", meters / 1e6)
    } else if meters < AU * 10.0 {
        format!("{:.3} AU", meters / AU)
    } else if meters < LIGHT_YEAR {
        format!("{:.0} AU", meters / AU)
    } else if meters < LIGHT_YEAR * 1_000.0 {
        format!("{:.3} Light Years", meters / LIGHT_YEAR)
    } else if meters < 1e6 * LIGHT_YEAR {
        format!("{:.0} Light Years", meters / LIGHT_YEAR)
    } else if meters < 1e9 * LIGHT_YEAR {
        format!("{:.3} Million LY", meters / (1e6 * LIGHT_YEAR))
    } else {
        format!("{:.3} Billion LY", meters / (1e9 * LIGHT_YEAR))
    }
}

pub fn format_velocity(meters_per_second: f64) -> String {
    // Hide jitter around zero.
    let velocity = if meters_per_second.abs() < 0.01 || meters_per_second.is_nan() {
        0.0
    } else {
        meters_per_second
    };
    let speed = velocity.abs();
    let sign = if velocity < 0.0 { "-" } else { "" };

    if speed < 1_000.0 {
        format!("{}{:.1} m/s", sign, speed)
    } else if speed < 1e6 {
        format!("{}{:.1} km/s", sign, speed / 1_000.0)
    } else if speed < SPEED_OF_LIGHT * 0.01 {
        format!("{}{:.0} km/s", sign, speed / 1_000.0)
    } else {
        format!("{}{:.4} c", sign, speed / SPEED_OF_LIGHT)
    }
}

pub fn format_time(elapsed_time: f64) -> String {
    // Round to tenths first so the seconds never read 60.0.
    let tenths = (elapsed_time.max(0.0) * 10.0).round() as u64;
    let hours = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let seconds = tenths % 600;

    if hours > 0 {
        format!("{}h {}m {}.{}s", hours, minutes, seconds / 10, seconds % 10)
    } else if minutes > 0 {
        format!("{}m {}.{}s", minutes, seconds / 10, seconds % 10)
    } else {
        format!("{}.{}s", seconds / 10, seconds % 10)
    }
}
