// Browser glue: drives the animation from requestAnimationFrame, fetches the
// point set, waits on timers and maps overlay states onto the DOM

use crate::animation::{AnimationLoop, FrameLoop, LoopState};
use crate::error::LoadError;
use crate::point::{Point2D, Viewport};
use crate::point_set::points_from_response;
use crate::pointer::PointerTracker;
use crate::sequence::{Overlay, OverlayState};
use crate::surface::{resize_canvas, CanvasSurface};
#[cfg(feature = "frame-timing")]
use crate::utils::Timer;
use js_sys::Promise;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, Response, Window};

pub fn window() -> Result<Window, LoadError> {
    web_sys::window().ok_or(LoadError::Unavailable("window"))
}

pub fn window_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs an `AnimationLoop` on `requestAnimationFrame`. Each frame steps the
/// loop and queues the next frame only while the loop reports it is running;
/// `stop` additionally cancels the frame already queued.
pub struct FrameDriver {
    animation: Rc<RefCell<AnimationLoop<CanvasSurface>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameDriver {
    pub fn new(animation: AnimationLoop<CanvasSurface>) -> Self {
        FrameDriver {
            animation: Rc::new(RefCell::new(animation)),
            frame_id: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn frames(&self) -> u64 {
        self.animation.borrow().frames()
    }

    fn request_frame(callback: &FrameCallback) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = callback.borrow();
        let closure = callback.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }
}

impl FrameLoop for FrameDriver {
    fn start(&mut self) -> bool {
        if !self.animation.borrow_mut().start() {
            return false;
        }

        // The closure re-queues itself through `callback`, which holds it
        let animation = self.animation.clone();
        let frame_id = self.frame_id.clone();
        let callback = self.callback.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_id.set(None);
            let keep_going = {
                #[cfg(feature = "frame-timing")]
                let _timer = Timer::new("AnimationLoop::step");
                animation.borrow_mut().step()
            };
            if keep_going {
                frame_id.set(FrameDriver::request_frame(&callback));
            }
        }) as Box<dyn FnMut()>));

        self.frame_id.set(FrameDriver::request_frame(&self.callback));
        true
    }

    fn stop(&mut self) -> bool {
        let stopped = self.animation.borrow_mut().stop();
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Drops the closure and with it the reference cycle
        self.callback.borrow_mut().take();
        stopped
    }

    fn state(&self) -> LoopState {
        self.animation.borrow().state()
    }
}

/// The DOM element covering the page while the loader runs. A missing
/// element turns every transition into a no-op.
pub struct ElementOverlay {
    element: Option<HtmlElement>,
}

impl ElementOverlay {
    pub const FADING_CLASS: &'static str = "hidden";

    pub fn new(element: Option<HtmlElement>) -> Self {
        ElementOverlay { element }
    }

    pub fn find(document: Option<&Document>, id: &str) -> Self {
        let element = document
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        ElementOverlay::new(element)
    }
}

impl Overlay for ElementOverlay {
    fn apply(&mut self, state: OverlayState) {
        let element = match &self.element {
            Some(element) => element,
            None => return,
        };
        match state {
            OverlayState::Visible => {
                let _ = element.class_list().remove_1(ElementOverlay::FADING_CLASS);
                let _ = element.style().remove_property("display");
            }
            OverlayState::Fading => {
                let _ = element.class_list().add_1(ElementOverlay::FADING_CLASS);
            }
            OverlayState::Hidden => {
                let _ = element.style().set_property("display", "none");
            }
        }
    }
}

/// Single GET of the point-set resource, no retries.
pub async fn fetch_point_set(url: &str) -> Result<Vec<Point2D>, LoadError> {
    let window = window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(LoadError::network)?;
    let response: Response = response.dyn_into().map_err(LoadError::network)?;

    let status = response.status();
    let body = if response.ok() {
        let text = response.text().map_err(LoadError::network)?;
        JsFuture::from(text)
            .await
            .map_err(LoadError::network)?
            .as_string()
            .unwrap_or_default()
    } else {
        String::new()
    };
    points_from_response(status, &body)
}

pub async fn sleep(ms: i32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("window is not available")?;
    let mut scheduled = Ok(0);
    let promise = Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled?;
    JsFuture::from(promise).await.map(|_| ())
}

/// Sizes the canvas to the window now and on every resize. Particles keep
/// their targets until the next full rebuild.
pub fn fit_canvas_to_window(window: &Window, canvas: HtmlCanvasElement) -> Result<(), LoadError> {
    resize_canvas(&canvas, &window_viewport(window));

    let resize_window = window.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        resize_canvas(&canvas, &window_viewport(&resize_window));
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(|_| LoadError::Unavailable("resize listener"))?;
    resize_closure.forget();
    Ok(())
}

pub fn track_pointer(window: &Window, pointer: Rc<PointerTracker>) -> Result<(), LoadError> {
    let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
        pointer.move_to(event.client_x() as f64, event.client_y() as f64);
    }) as Box<dyn FnMut(MouseEvent)>);
    window
        .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())
        .map_err(|_| LoadError::Unavailable("mousemove listener"))?;
    mousemove.forget();
    Ok(())
}
