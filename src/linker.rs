// Draws the transient "neural mesh": short edges between particles that drift
// close to each other. The scan is an index-window approximation, not a true
// nearest-neighbour search: every other particle is an origin, and each
// origin only looks at the next CANDIDATE_WINDOW particles by index.

use crate::color::LINK;
use crate::particle::Particle;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Stroke opacity, 1 for coincident particles down to 0 at MAX_DISTANCE.
    pub alpha: f64,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct ProximityLinker;

impl ProximityLinker {
    pub const MAX_DISTANCE: f64 = 32.0;
    pub const ORIGIN_STRIDE: usize = 2;
    pub const CANDIDATE_WINDOW: usize = 20;
    pub const LINE_WIDTH: f64 = 0.5;

    pub fn new() -> ProximityLinker {
        ProximityLinker
    }

    /// Every edge this frame would draw. Each unordered pair is visited at
    /// most once, so no de-duplication is needed.
    pub fn edges<'a>(&self, particles: &'a [Particle]) -> impl Iterator<Item = Edge> + 'a {
        (0..particles.len())
            .step_by(ProximityLinker::ORIGIN_STRIDE)
            .flat_map(move |i| {
                let end = (i + ProximityLinker::CANDIDATE_WINDOW + 1).min(particles.len());
                (i + 1..end).filter_map(move |j| {
                    let distance = glm::distance(particles[i].position(), particles[j].position());
                    if distance < ProximityLinker::MAX_DISTANCE {
                        Some(Edge {
                            from: i,
                            to: j,
                            alpha: 1.0 - distance / ProximityLinker::MAX_DISTANCE,
                        })
                    } else {
                        None
                    }
                })
            })
    }

    pub fn connect<S: Surface>(&self, particles: &[Particle], surface: &mut S) {
        for edge in self.edges(particles) {
            surface.stroke_line(
                particles[edge.from].position(),
                particles[edge.to].position(),
                LINK.with_alpha(edge.alpha),
                ProximityLinker::LINE_WIDTH,
            );
        }
    }
}
