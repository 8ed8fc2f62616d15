// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s² at the surface
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s
pub const AIR_DENSITY_FALLOFF_ALTITUDE: f64 = 8_500.0; // m, exponential atmosphere scale height

// Distance Units
pub const AU: f64 = 1.496e11; // meters
pub const LIGHT_YEAR: f64 = 9.461e15; // meters
pub const OBSERVABLE_UNIVERSE_RADIUS: f64 = 46.5 * 1e9 * LIGHT_YEAR; // meters

// Rocket Constants
pub const MAX_THRUST_ACCELERATION: f64 = 45.0; // m/s² at full throttle
pub const DRAG_COEFFICIENT: f64 = 0.0005; // quadratic drag factor at sea level

// Light-Speed Mode
pub const LIGHT_SPEED_RAMP_DELAY: f64 = 1.0; // s before the ramp kicks in
pub const LIGHT_SPEED_RAMP_TIME_SCALE: f64 = 2.0; // s
pub const LIGHT_SPEED_RAMP_POWER: f64 = 11.0;
pub const HIGH_VELOCITY_THRESHOLD: f64 = 0.1 * SPEED_OF_LIGHT; // m/s, instant layer switch above this

// Simulation Parameters
pub const MAX_TIME_STEP: f64 = 0.1; // s
pub const COUNTDOWN_SECONDS: u32 = 10;
pub const COUNTDOWN_LEAD_IN: f64 = 1.5; // s before T-10

// Controls
pub const KEYBOARD_THRUST_INCREMENT: f64 = 0.02; // per frame
pub const THRUST_CHANGE_EPSILON: f64 = 0.001;
pub const THRUSTING_THRESHOLD: f64 = 0.01;

// Presentation
pub const STAR_PARALLAX_FACTOR: f64 = 3.0; // > 1 means stars drift slower than the sky
pub const SKY_FADE_DURATION: f64 = 2.5; // s
pub const SKY_SCROLL_HEIGHT_FACTOR: f64 = 1.0;
pub const SKY_SCROLL_EASING: f64 = 0.05;
pub const SKY_SCROLL_VELOCITY_SCALE: f64 = 70_000.0; // m/s
pub const GROUND_MAX_VISIBLE_ALTITUDE: f64 = 20_000.0; // m
pub const STAR_CHECK_INTERVAL: u64 = 3; // frames
