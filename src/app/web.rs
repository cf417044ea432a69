//! Browser entry point.
//!
//! The host page provides `<canvas id="click-area">`, which eframe takes over,
//! plus optional `points` (an `<input>`) and `info` elements. Those are looked
//! up once at start-up and kept as handles for the app's lifetime.
//!
//! The page calls `start()`, or `start_with_background(bytes)` with the
//! encoded map image it wants under the clicks. The click area fills the
//! whole canvas, so recorded points are relative to the canvas's top-left
//! corner.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::RecorderConfig;
use crate::recorder::RecorderOutputs;

use super::{AppOutputs, RecorderApp};

const CANVAS_ID: &str = "click-area";
const POINTS_ID: &str = "points";
const INFO_ID: &str = "info";

/// Handles to the host page's output elements.
pub struct DomOutputs {
    points: Option<web_sys::HtmlInputElement>,
    info: Option<web_sys::Element>,
}

impl DomOutputs {
    pub fn lookup(document: &web_sys::Document) -> Self {
        let points = document
            .get_element_by_id(POINTS_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
        let info = document.get_element_by_id(INFO_ID);
        if points.is_none() {
            log::warn!("no <input id=\"{POINTS_ID}\"> on the page; points are shown in-app only");
        }
        Self { points, info }
    }
}

impl RecorderOutputs for DomOutputs {
    fn set_points_value(&mut self, value: &str) {
        if let Some(el) = &self.points {
            el.set_value(value);
        }
    }

    fn set_info(&mut self, info: &str) {
        if let Some(el) = &self.info {
            el.set_inner_html(info);
        }
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
}

/// Mount the recorder on `<canvas id="click-area">` with a plain background.
#[wasm_bindgen]
pub fn start() {
    mount(RecorderConfig::default());
}

/// Mount the recorder with `bytes` (PNG or JPEG) painted under the markers.
#[wasm_bindgen]
pub fn start_with_background(bytes: Vec<u8>) {
    mount(RecorderConfig {
        background_bytes: Some(bytes),
        ..RecorderConfig::default()
    });
}

fn mount(cfg: RecorderConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available");
        return;
    };
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        log::error!("no <canvas id=\"{CANVAS_ID}\"> on the page");
        return;
    };

    let outputs = AppOutputs::with_mirror(DomOutputs::lookup(&document));
    let app = RecorderApp::with_outputs(&cfg, outputs);

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    super::install_fonts(&cc.egui_ctx);
                    Ok(Box::new(app))
                }),
            )
            .await;
        if let Err(e) = result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
