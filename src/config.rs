// Page wiring for the loader, settable from JavaScript before start_loader()

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    canvas_id: String,
    overlay_id: String,
    points_url: String,
}

#[wasm_bindgen]
impl LoaderConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LoaderConfig {
        LoaderConfig {
            canvas_id: LoaderConfig::DEFAULT_CANVAS_ID.to_owned(),
            overlay_id: LoaderConfig::DEFAULT_OVERLAY_ID.to_owned(),
            points_url: LoaderConfig::DEFAULT_POINTS_URL.to_owned(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_canvas_id(&mut self, id: String) {
        self.canvas_id = id;
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_id(&self) -> String {
        self.overlay_id.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_overlay_id(&mut self, id: String) {
        self.overlay_id = id;
    }

    #[wasm_bindgen(getter)]
    pub fn points_url(&self) -> String {
        self.points_url.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_points_url(&mut self, url: String) {
        self.points_url = url;
    }
}

impl LoaderConfig {
    pub const DEFAULT_CANVAS_ID: &'static str = "neuro-canvas";
    pub const DEFAULT_OVERLAY_ID: &'static str = "loader-overlay";
    pub const DEFAULT_POINTS_URL: &'static str = "face_points.json";
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig::new()
    }
}
