use crate::constants::{AIR_DENSITY_FALLOFF_ALTITUDE, EARTH_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: f64,
    pub air_density_factor: f64,
}

impl Environment {
    pub fn at_altitude(altitude: f64, surface_gravity: f64) -> Self {
        let altitude = altitude.max(0.0);
        Environment {
            gravity: gravity_at_altitude(altitude, surface_gravity),
            air_density_factor: air_density_factor(altitude),
        }
    }
}

pub fn gravity_at_altitude(altitude: f64, surface_gravity: f64) -> f64 {
    let distance_from_center = EARTH_RADIUS + altitude.max(0.0);
    surface_gravity * (EARTH_RADIUS / distance_from_center).powi(2)
}

pub fn air_density_factor(altitude: f64) -> f64 {
    (-altitude.max(0.0) / AIR_DENSITY_FALLOFF_ALTITUDE).exp()
}
