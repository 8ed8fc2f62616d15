use crate::config::SimConfig;
use crate::constants::{
    GROUND_MAX_VISIBLE_ALTITUDE, SKY_SCROLL_EASING, SKY_SCROLL_HEIGHT_FACTOR,
    SKY_SCROLL_VELOCITY_SCALE,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundView {
    pub translate_px: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropView {
    pub sky_translate_percent: f64,
    pub star_translate_percent: f64,
    pub ground: GroundView,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    sky_offset: f64,
    sky_scroll_height_factor: f64,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(SKY_SCROLL_HEIGHT_FACTOR)
    }
}

impl Backdrop {
    pub fn new(sky_scroll_height_factor: f64) -> Self {
        Backdrop {
            sky_offset: 0.0,
            sky_scroll_height_factor,
        }
    }

    pub fn sky_offset(&self) -> f64 {
        self.sky_offset
    }

    pub fn update(
        &mut self,
        velocity: f64,
        altitude: f64,
        screen_height: f64,
        config: &SimConfig,
    ) -> BackdropView {
        let target = (velocity.abs() / SKY_SCROLL_VELOCITY_SCALE).tanh()
            * (self.sky_scroll_height_factor - 1.0)
            * 100.0;
        if target.is_finite() {
            self.sky_offset += (target - self.sky_offset) * SKY_SCROLL_EASING;
        }

        BackdropView {
            sky_translate_percent: self.sky_offset,
            star_translate_percent: self.sky_offset / config.star_parallax_factor,
            ground: ground_view(altitude, screen_height),
        }
    }
}

pub fn ground_view(altitude: f64, screen_height: f64) -> GroundView {
    if altitude < GROUND_MAX_VISIBLE_ALTITUDE {
        GroundView {
            translate_px: (altitude * 1.2).min(screen_height * 1.5),
            opacity: (1.0 - altitude / GROUND_MAX_VISIBLE_ALTITUDE).clamp(0.0, 1.0),
        }
    } else {
        GroundView {
            translate_px: screen_height * 1.5,
            opacity: 0.0,
        }
    }
}
