// Frame loop lifecycle. `step` runs one frame and reports whether another
// should be queued, so the host scheduler stays outside this module

use crate::field::ParticleField;
use crate::linker::ProximityLinker;
use crate::pointer::PointerTracker;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    /// Terminal; a new sequence builds a new loop.
    Stopped,
}

/// Start/stop surface shared by the manual loop and the browser driver.
pub trait FrameLoop {
    /// Idle -> Running. Returns false if the loop was not idle.
    fn start(&mut self) -> bool;
    /// Moves to Stopped. Returns false if it already was, so callers never
    /// release the same resources twice.
    fn stop(&mut self) -> bool;
    fn state(&self) -> LoopState;
}

pub struct AnimationLoop<S: Surface, R: Rng = StdRng> {
    field: ParticleField<R>,
    linker: ProximityLinker,
    pointer: Rc<PointerTracker>,
    surface: S,
    state: LoopState,
    frames: u64,
}

impl<S: Surface, R: Rng> AnimationLoop<S, R> {
    pub fn new(field: ParticleField<R>, pointer: Rc<PointerTracker>, surface: S) -> Self {
        AnimationLoop {
            field,
            linker: ProximityLinker::new(),
            pointer,
            surface,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Runs one frame if the loop is running. The return value tells the
    /// scheduler whether to queue another one.
    pub fn step(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        let pointer = self.pointer.position();
        self.field.tick(&mut self.surface, &pointer);
        self.linker.connect(self.field.particles(), &mut self.surface);
        self.frames += 1;
        true
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface, R: Rng> FrameLoop for AnimationLoop<S, R> {
    fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        true
    }

    fn state(&self) -> LoopState {
        self.state
    }
}
