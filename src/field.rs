// Owns every particle of one sequence: builds them from the silhouette,
// then advances and draws them once per frame

use crate::color::BACKGROUND;
use crate::particle::Particle;
use crate::point::{Point2D, Viewport};
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn from_entropy() -> Self {
        ParticleField::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        ParticleField::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    // Alpha of the background wash; lower values leave longer trails
    pub const FADE_ALPHA: f64 = 0.1;

    pub fn with_rng(rng: R) -> Self {
        ParticleField {
            particles: Vec::new(),
            rng,
        }
    }

    /// Replaces the current particles with one per input point. An empty
    /// point set leaves the field empty.
    pub fn build_from_points(&mut self, points: &[Point2D], viewport: &Viewport) {
        self.particles.clear();
        self.particles.reserve(points.len());
        let scale_factor = viewport.scale_factor();
        for normalized in points {
            let p = Particle::new(normalized, viewport, scale_factor, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Washes the surface with translucent background, then updates and draws
    /// each particle in turn.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, pointer: &Point2D) {
        let size = surface.size();
        surface.fill_rect(
            0.0,
            0.0,
            size.width,
            size.height,
            BACKGROUND.with_alpha(Self::FADE_ALPHA),
        );

        for particle in self.particles.iter_mut() {
            particle.update(pointer);
            particle.render(surface, &mut self.rng);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::point;
    use crate::surface::recording::{DrawCall, RecordingSurface};

    fn far_pointer() -> Point2D {
        point(-1000.0, -1000.0)
    }

    #[test]
    fn targets_follow_viewport_anchor_and_scale() {
        let mut field = ParticleField::seeded(1);
        let points = [point(0.0, 0.0), point(0.1, 0.0), point(-0.1, 0.0)];
        field.build_from_points(&points, &Viewport::new(1000.0, 800.0));

        assert_eq!(field.len(), 3);
        let expected = [(500.0, 320.0), (560.0, 320.0), (440.0, 320.0)];
        for (particle, (x, y)) in field.particles().iter().zip(expected.iter()) {
            assert!((particle.target().x - x).abs() < 1e-9);
            assert!((particle.target().y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn rebuilding_replaces_previous_particles() {
        let mut field = ParticleField::seeded(2);
        let viewport = Viewport::new(640.0, 480.0);
        field.build_from_points(&[point(0.0, 0.0); 10], &viewport);
        field.build_from_points(&[point(0.2, 0.2); 4], &viewport);
        assert_eq!(field.len(), 4);
    }

    #[test]
    fn same_seed_builds_identical_fields() {
        let viewport = Viewport::new(640.0, 480.0);
        let points = [point(0.1, 0.3), point(-0.4, 0.2), point(0.0, -0.1)];
        let mut a = ParticleField::seeded(1234);
        let mut b = ParticleField::seeded(1234);
        a.build_from_points(&points, &viewport);
        b.build_from_points(&points, &viewport);

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position(), pb.position());
            assert_eq!(pa.velocity(), pb.velocity());
            assert_eq!(pa.easing(), pb.easing());
            assert_eq!(pa.radius(), pb.radius());
            assert_eq!(pa.color(), pb.color());
        }
    }

    #[test]
    fn empty_field_tick_only_fades() {
        let mut field = ParticleField::seeded(3);
        field.build_from_points(&[], &Viewport::new(300.0, 200.0));
        assert!(field.is_empty());

        let mut surface = RecordingSurface::new(300.0, 200.0);
        field.tick(&mut surface, &far_pointer());
        assert_eq!(
            surface.calls,
            vec![DrawCall::Rect {
                x: 0.0,
                y: 0.0,
                width: 300.0,
                height: 200.0,
                color: BACKGROUND.with_alpha(0.1),
            }]
        );
    }

    #[test]
    fn tick_fades_first_then_draws_every_particle() {
        let mut field = ParticleField::seeded(4);
        let points = [point(0.0, 0.0); 25];
        field.build_from_points(&points, &Viewport::new(300.0, 200.0));

        let mut surface = RecordingSurface::new(300.0, 200.0);
        field.tick(&mut surface, &far_pointer());
        assert!(matches!(surface.calls[0], DrawCall::Rect { .. }));
        assert_eq!(surface.circles().count(), 25);

        // Each circle sits where its particle ended up after this frame's update
        for (call, particle) in surface.circles().zip(field.particles()) {
            if let DrawCall::Circle { center, .. } = call {
                assert_eq!(center, particle.position());
            }
        }
    }

    #[test]
    fn fade_covers_resized_surface() {
        let mut field = ParticleField::seeded(5);
        field.build_from_points(&[point(0.0, 0.0)], &Viewport::new(300.0, 200.0));
        let mut surface = RecordingSurface::new(300.0, 200.0);
        surface.viewport = Viewport::new(800.0, 600.0);
        let target_before = *field.particles()[0].target();

        field.tick(&mut surface, &far_pointer());
        match &surface.calls[0] {
            DrawCall::Rect { width, height, .. } => {
                assert_eq!((*width, *height), (800.0, 600.0));
            }
            other => panic!("expected fade first, got {:?}", other),
        }
        // Resizing never retargets existing particles
        assert_eq!(*field.particles()[0].target(), target_before);
    }
}
