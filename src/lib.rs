mod utils;

extern crate nalgebra_glm as glm;

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod linker;
pub mod particle;
pub mod point;
pub mod point_set;
pub mod pointer;
pub mod sequence;
pub mod silhouette;
pub mod surface;
pub mod web;

use animation::{AnimationLoop, LoopState};
use config::LoaderConfig;
use error::LoadError;
use field::ParticleField;
use pointer::PointerTracker;
use sequence::{OverlayState, SequenceController};
use silhouette::SilhouetteOptions;
use std::cell::RefCell;
use std::rc::Rc;
use surface::{CanvasSurface, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web::{ElementOverlay, FrameDriver};
use web_sys::{console, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type Sequence = SequenceController<ElementOverlay, FrameDriver>;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Handle the page keeps to observe or cut short a running loader.
#[wasm_bindgen]
pub struct LoaderHandle {
    sequence: Rc<RefCell<Sequence>>,
}

#[wasm_bindgen]
impl LoaderHandle {
    /// Hides the overlay and stops the animation now. Safe to call repeatedly.
    pub fn stop(&self) {
        self.sequence.borrow_mut().abort();
    }

    pub fn is_running(&self) -> bool {
        self.sequence.borrow().loop_state() == LoopState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.sequence.borrow().overlay_state() == OverlayState::Hidden
    }
}

/// Starts the loader sequence described by `config`. Never throws: any
/// failure hides the overlay and leaves the page without the animation.
#[wasm_bindgen]
pub fn start_loader(config: &LoaderConfig) -> LoaderHandle {
    let document = web_sys::window().and_then(|w| w.document());
    let overlay = ElementOverlay::find(document.as_ref(), &config.overlay_id());
    let sequence = Rc::new(RefCell::new(Sequence::new(overlay)));

    if let Err(e) = launch(config, sequence.clone()) {
        console::warn_1(&format!("Loader error: {}", e).into());
        sequence.borrow_mut().abort();
    }
    LoaderHandle { sequence }
}

#[wasm_bindgen]
pub fn extract_silhouette(image_bytes: &[u8], target_width: u32, threshold: u8) -> Result<String, JsValue> {
    let image = image::load_from_memory(image_bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = SilhouetteOptions {
        target_width,
        threshold,
    };
    let points = silhouette::extract_points(&image, &options);
    Ok(point_set::to_json(&points)?)
}

fn launch(config: &LoaderConfig, sequence: Rc<RefCell<Sequence>>) -> Result<(), LoadError> {
    let window = web::window()?;
    let document = window
        .document()
        .ok_or(LoadError::Unavailable("document"))?;
    let canvas = document
        .get_element_by_id(&config.canvas_id())
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or(LoadError::Unavailable("canvas"))?;
    let surface = CanvasSurface::new(canvas.clone())?;

    web::fit_canvas_to_window(&window, canvas)?;
    let pointer = Rc::new(PointerTracker::new());
    web::track_pointer(&window, pointer.clone())?;

    wasm_bindgen_futures::spawn_local(run_sequence(
        config.points_url(),
        surface,
        pointer,
        sequence,
    ));
    Ok(())
}

async fn run_sequence(
    url: String,
    surface: CanvasSurface,
    pointer: Rc<PointerTracker>,
    sequence: Rc<RefCell<Sequence>>,
) {
    let result = web::fetch_point_set(&url).await;
    let loaded = sequence.borrow_mut().load(result, |points| {
        let mut field = ParticleField::from_entropy();
        field.build_from_points(&points, &surface.size());
        console::log_1(&format!("Loader: {} particles", field.len()).into());
        FrameDriver::new(AnimationLoop::new(field, pointer, surface))
    });
    if let Err(e) = loaded {
        console::warn_1(&format!("Loader error: {}", e).into());
        return;
    }

    if web::sleep(Sequence::HOLD_MS).await.is_err() {
        sequence.borrow_mut().abort();
        return;
    }
    sequence.borrow_mut().begin_fade();

    if web::sleep(Sequence::FADE_MS).await.is_err() {
        sequence.borrow_mut().abort();
        return;
    }
    sequence.borrow_mut().finish();
}
