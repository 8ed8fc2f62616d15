use rand::Rng;

use crate::constants::STAR_CHECK_INTERVAL;
use crate::control::layers::Layer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub size: f64,    // px
    pub left: f64,    // % of container width
    pub top: f64,     // px from container top
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Galaxy {
    pub rotation: f64, // degrees
    pub scale: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
    galaxies: Vec<Galaxy>,
    container_height: f64,
}

impl StarField {
    pub fn populate(
        star_count: u32,
        galaxy_count: u32,
        container_height: f64,
        rng: &mut impl Rng,
    ) -> Self {
        if !(container_height > 0.0) {
            return StarField::default();
        }

        let stars = (0..star_count)
            .map(|_| Star {
                size: rng.gen_range(0.5..2.0),
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..container_height),
                opacity: rng.gen_range(0.3..0.8),
            })
            .collect();
        let galaxies = (0..galaxy_count)
            .map(|_| Galaxy {
                rotation: rng.gen_range(0.0..90.0),
                scale: rng.gen_range(0.7..1.3),
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..container_height),
            })
            .collect();

        StarField {
            stars,
            galaxies,
            container_height,
        }
    }

    pub fn for_layer(layer: &Layer, container_height: f64, rng: &mut impl Rng) -> Self {
        Self::populate(
            layer.star_density,
            layer.galaxy_density,
            container_height,
            rng,
        )
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn change_layer(
        &mut self,
        old: &Layer,
        new: &Layer,
        rng: &mut impl Rng,
    ) -> bool {
        if !needs_repopulate(old, new) {
            return false;
        }
        *self = Self::for_layer(new, self.container_height, rng);
        true
    }

    pub fn wrap(
        &mut self,
        translate_percent: f64,
        screen_height: f64,
        rng: &mut impl Rng,
    ) -> usize {
        if !(self.container_height > 0.0) || !translate_percent.is_finite() {
            return 0;
        }
        let screen_height = screen_height.max(0.0);

        let viewport_top = -(translate_percent / 100.0) * self.container_height;
        let viewport_bottom = viewport_top + screen_height;

        let mut moved = 0;
        for star in &mut self.stars {
            if star.top + star.size < viewport_top {
                star.top = viewport_bottom + rng.gen::<f64>() * screen_height;
                moved += 1;
            } else if star.top > viewport_bottom {
                star.top = viewport_top - rng.gen::<f64>() * screen_height - star.size;
                moved += 1;
            }
        }
        moved
    }
}

pub fn needs_repopulate(old: &Layer, new: &Layer) -> bool {
    !old.same_sky_population(new)
}

pub fn should_check(frame: u64) -> bool {
    frame % STAR_CHECK_INTERVAL == 0
}
