// A single point mass homing toward its place in the silhouette, pushed away
// by the pointer and damped every frame

use crate::color::{Palette, FLASH};
use crate::point::{point, Point2D, Viewport};
use crate::surface::{Glow, Surface};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pos: Point2D,
    vel: Point2D,
    target: Point2D,
    easing: f64,
    radius: f64,
    color: Palette,
}

impl Particle {
    pub const INTERACTION_RADIUS: f64 = 120.0;
    pub const REPULSION_STRENGTH: f64 = 8.0;
    pub const SPRING_SCALE: f64 = 0.1;
    pub const DAMPING: f64 = 0.92;
    pub const MIN_EASING: f64 = 0.02;
    pub const MAX_EASING: f64 = 0.04;
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 2.0;
    pub const FLASH_PROBABILITY: f64 = 0.01;
    pub const FLASH_BLUR: f64 = 5.0;

    /// Places a particle somewhere around the viewport, homing toward the
    /// projection of `normalized` onto it.
    pub fn new<R: Rng>(
        normalized: &Point2D,
        viewport: &Viewport,
        scale_factor: f64,
        rng: &mut R,
    ) -> Particle {
        let target = viewport.project(normalized, scale_factor);
        let pos = viewport.random_spawn_point(rng);
        // Small initial swirl before the spring takes over
        let vel = point(
            (rng.gen::<f64>() - 0.5) * 2.0,
            (rng.gen::<f64>() - 0.5) * 2.0,
        );
        let easing = rng.gen_range(Particle::MIN_EASING, Particle::MAX_EASING);
        let radius = rng.gen_range(Particle::MIN_RADIUS, Particle::MAX_RADIUS);
        let color = Palette::random(rng);

        Particle {
            pos,
            vel,
            target,
            easing,
            radius,
            color,
        }
    }

    pub fn position(&self) -> &Point2D {
        &self.pos
    }

    pub fn velocity(&self) -> &Point2D {
        &self.vel
    }

    pub fn target(&self) -> &Point2D {
        &self.target
    }

    pub fn easing(&self) -> f64 {
        self.easing
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Palette {
        self.color
    }

    /// Advances one frame. Repulsion and spring both feed the velocity before
    /// damping, so the damping acts on their combined impulse.
    pub fn update(&mut self, pointer: &Point2D) {
        let to_pointer = pointer - self.pos;
        let distance = glm::length(&to_pointer);
        if distance < Particle::INTERACTION_RADIUS {
            let force = (Particle::INTERACTION_RADIUS - distance) / Particle::INTERACTION_RADIUS;
            let angle = to_pointer.y.atan2(to_pointer.x);
            self.vel.x -= angle.cos() * force * Particle::REPULSION_STRENGTH;
            self.vel.y -= angle.sin() * force * Particle::REPULSION_STRENGTH;
        }

        self.vel += (self.target - self.pos) * self.easing * Particle::SPRING_SCALE;
        self.vel *= Particle::DAMPING;
        self.pos += self.vel;
    }

    /// Draws the particle as a disc. Roughly one frame in a hundred it fires
    /// instead: drawn in the flash color with a glow, decided afresh each frame.
    pub fn render<S: Surface, R: Rng>(&self, surface: &mut S, rng: &mut R) {
        if rng.gen::<f64>() < Particle::FLASH_PROBABILITY {
            surface.set_glow(Some(Glow {
                blur: Particle::FLASH_BLUR,
                color: FLASH,
            }));
            surface.fill_circle(&self.pos, self.radius, FLASH);
            surface.set_glow(None);
        } else {
            surface.fill_circle(&self.pos, self.radius, self.color.color());
        }
    }
}

#[cfg(test)]
impl Particle {
    pub(crate) fn at(pos: Point2D, target: Point2D) -> Particle {
        Particle {
            pos,
            vel: point(0.0, 0.0),
            target,
            easing: Particle::MIN_EASING,
            radius: 1.0,
            color: Palette::Cyan,
        }
    }
}
