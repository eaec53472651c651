// The fixed-duration loader presentation: load, run, hold, fade, hide.
// Transitions are idempotent because the timers outlive an early teardown

use crate::animation::{FrameLoop, LoopState};
use crate::error::LoadError;
use crate::point::Point2D;

/// Visual state of the overlay hosting the canvas. Only moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverlayState {
    Visible,
    Fading,
    Hidden,
}

pub trait Overlay {
    fn apply(&mut self, state: OverlayState);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequencePhase {
    Loading,
    Animating,
    FadingOut,
    Finished,
    Aborted,
}

pub struct SequenceController<O: Overlay, L: FrameLoop> {
    overlay: O,
    overlay_state: OverlayState,
    frame_loop: Option<L>,
    phase: SequencePhase,
}

impl<O: Overlay, L: FrameLoop> SequenceController<O, L> {
    pub const HOLD_MS: i32 = 5_000;
    pub const FADE_MS: i32 = 1_000;

    pub fn new(overlay: O) -> Self {
        SequenceController {
            overlay,
            overlay_state: OverlayState::Visible,
            frame_loop: None,
            phase: SequencePhase::Loading,
        }
    }

    /// Consumes the outcome of loading the point set. On success `build`
    /// turns the points into a frame loop, which is started; on failure the
    /// overlay is hidden at once and `build` is never called. The error is
    /// handed back so the caller can report it.
    pub fn load<F>(&mut self, result: Result<Vec<Point2D>, LoadError>, build: F) -> Result<(), LoadError>
    where
        F: FnOnce(Vec<Point2D>) -> L,
    {
        if self.phase != SequencePhase::Loading {
            return Ok(());
        }
        match result {
            Ok(points) => {
                self.run(build(points));
                Ok(())
            }
            Err(e) => {
                self.abort();
                Err(e)
            }
        }
    }

    pub fn run(&mut self, mut frame_loop: L) {
        if self.phase != SequencePhase::Loading {
            return;
        }
        frame_loop.start();
        self.frame_loop = Some(frame_loop);
        self.phase = SequencePhase::Animating;
    }

    /// End of the hold period: the overlay starts fading, the loop keeps running.
    pub fn begin_fade(&mut self) {
        if self.phase != SequencePhase::Animating {
            return;
        }
        self.set_overlay(OverlayState::Fading);
        self.phase = SequencePhase::FadingOut;
    }

    /// End of the fade: the overlay is removed and the loop released.
    pub fn finish(&mut self) {
        match self.phase {
            SequencePhase::Animating | SequencePhase::FadingOut => {
                self.teardown();
                self.phase = SequencePhase::Finished;
            }
            _ => {}
        }
    }

    /// Ends the sequence right away, whatever phase it is in.
    pub fn abort(&mut self) {
        match self.phase {
            SequencePhase::Finished | SequencePhase::Aborted => {}
            _ => {
                self.teardown();
                self.phase = SequencePhase::Aborted;
            }
        }
    }

    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay_state
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn frame_loop(&self) -> Option<&L> {
        self.frame_loop.as_ref()
    }

    pub fn loop_state(&self) -> LoopState {
        self.frame_loop
            .as_ref()
            .map(|l| l.state())
            .unwrap_or(LoopState::Idle)
    }

    fn teardown(&mut self) {
        self.set_overlay(OverlayState::Hidden);
        if let Some(frame_loop) = self.frame_loop.as_mut() {
            frame_loop.stop();
        }
    }

    fn set_overlay(&mut self, state: OverlayState) {
        if state <= self.overlay_state {
            return;
        }
        self.overlay_state = state;
        self.overlay.apply(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationLoop;
    use crate::field::ParticleField;
    use crate::point::{point, Viewport};
    use crate::point_set::points_from_response;
    use crate::pointer::PointerTracker;
    use crate::surface::recording::RecordingSurface;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingOverlay {
        applied: Vec<OverlayState>,
    }

    impl Overlay for RecordingOverlay {
        fn apply(&mut self, state: OverlayState) {
            self.applied.push(state);
        }
    }

    type Controller = SequenceController<RecordingOverlay, AnimationLoop<RecordingSurface>>;

    fn build(points: Vec<Point2D>) -> AnimationLoop<RecordingSurface> {
        let viewport = Viewport::new(400.0, 300.0);
        let mut field = ParticleField::seeded(21);
        field.build_from_points(&points, &viewport);
        AnimationLoop::new(
            field,
            Rc::new(PointerTracker::new()),
            RecordingSurface::new(viewport.width, viewport.height),
        )
    }

    #[test]
    fn not_found_hides_overlay_without_animating() {
        let mut controller = Controller::new(RecordingOverlay::default());
        let mut built = false;
        let result = controller.load(points_from_response(404, ""), |points| {
            built = true;
            build(points)
        });

        assert!(matches!(result, Err(LoadError::Status(404))));
        assert!(!built);
        assert!(controller.frame_loop().is_none());
        assert_eq!(controller.loop_state(), LoopState::Idle);
        assert_eq!(controller.overlay_state(), OverlayState::Hidden);
        assert_eq!(controller.overlay().applied, vec![OverlayState::Hidden]);
        assert_eq!(controller.phase(), SequencePhase::Aborted);
    }

    #[test]
    fn full_sequence_runs_fades_and_stops() {
        let mut controller = Controller::new(RecordingOverlay::default());
        controller
            .load(Ok(vec![point(0.0, 0.0), point(0.1, 0.1)]), build)
            .unwrap();
        assert_eq!(controller.loop_state(), LoopState::Running);
        assert_eq!(controller.overlay_state(), OverlayState::Visible);

        controller.begin_fade();
        assert_eq!(controller.overlay_state(), OverlayState::Fading);
        assert_eq!(controller.loop_state(), LoopState::Running);

        controller.finish();
        assert_eq!(controller.overlay_state(), OverlayState::Hidden);
        assert_eq!(controller.loop_state(), LoopState::Stopped);
        assert_eq!(controller.phase(), SequencePhase::Finished);
        assert_eq!(
            controller.overlay().applied,
            vec![OverlayState::Fading, OverlayState::Hidden]
        );
    }

    #[test]
    fn empty_point_set_still_animates() {
        let mut controller = Controller::new(RecordingOverlay::default());
        controller.load(Ok(Vec::new()), build).unwrap();
        assert_eq!(controller.loop_state(), LoopState::Running);
        assert!(controller.frame_loop().unwrap().field().is_empty());
    }

    #[test]
    fn late_timers_after_abort_are_no_ops() {
        let mut controller = Controller::new(RecordingOverlay::default());
        controller.load(Ok(vec![point(0.0, 0.0)]), build).unwrap();
        controller.abort();
        controller.begin_fade();
        controller.finish();
        controller.abort();

        assert_eq!(controller.phase(), SequencePhase::Aborted);
        assert_eq!(controller.loop_state(), LoopState::Stopped);
        assert_eq!(controller.overlay().applied, vec![OverlayState::Hidden]);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut controller = Controller::new(RecordingOverlay::default());
        controller.load(Ok(vec![point(0.0, 0.0)]), build).unwrap();
        controller.begin_fade();
        controller.finish();
        controller.finish();
        controller.abort();
        assert_eq!(controller.phase(), SequencePhase::Finished);
        assert_eq!(
            controller.overlay().applied,
            vec![OverlayState::Fading, OverlayState::Hidden]
        );
    }

    #[test]
    fn missing_surface_aborts_before_loading() {
        let mut controller = Controller::new(RecordingOverlay::default());
        controller.abort();
        let mut built = false;
        controller
            .load(Ok(vec![point(0.0, 0.0)]), |points| {
                built = true;
                build(points)
            })
            .unwrap();
        assert!(!built);
        assert_eq!(controller.overlay_state(), OverlayState::Hidden);
    }
}
