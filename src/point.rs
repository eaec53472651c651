// Coordinates and viewport geometry shared by the particle field and the surfaces

use rand::Rng;

/// A real-valued 2-D coordinate, used both for normalized silhouette points
/// and for absolute canvas coordinates.
pub type Point2D = glm::DVec2;

pub fn point(x: f64, y: f64) -> Point2D {
    glm::vec2(x, y)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    // Silhouette sits at 40% of the height so the text below it stays clear
    pub const VERTICAL_ANCHOR: f64 = 0.4;
    pub const SILHOUETTE_SCALE: f64 = 0.75;
    // Particles spawn in an area 1.5x the viewport, overhanging 0.25x on each side
    pub const SPAWN_SPREAD: f64 = 1.5;
    pub const SPAWN_OVERHANG: f64 = 0.25;

    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }

    /// Canvas position that the normalized origin of the silhouette maps to.
    pub fn anchor(&self) -> Point2D {
        point(self.width / 2.0, self.height * Viewport::VERTICAL_ANCHOR)
    }

    /// Uniform scale applied to normalized points, 75% of the shorter side.
    pub fn scale_factor(&self) -> f64 {
        self.width.min(self.height) * Viewport::SILHOUETTE_SCALE
    }

    pub fn project(&self, normalized: &Point2D, scale_factor: f64) -> Point2D {
        self.anchor() + *normalized * scale_factor
    }

    pub fn random_spawn_point<R: Rng>(&self, rng: &mut R) -> Point2D {
        let x = rng.gen::<f64>() * self.width * Viewport::SPAWN_SPREAD
            - self.width * Viewport::SPAWN_OVERHANG;
        let y = rng.gen::<f64>() * self.height * Viewport::SPAWN_SPREAD
            - self.height * Viewport::SPAWN_OVERHANG;
        point(x, y)
    }
}
