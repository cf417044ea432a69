//! Configuration for the recorder window and its click area.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::canvas::MarkerStyle;
use crate::controllers::RecorderController;
use crate::error::{RecorderError, Result};

/// Default click-area size: the size of the map image the recorder was built around.
pub const DEFAULT_CANVAS_SIZE: [u32; 2] = [960, 540];

// ─────────────────────────────────────────────────────────────────────────────
// RecorderConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field             | Purpose |
/// |-------------------|---------|
/// | `title`           | Native window title |
/// | `headline`        | Optional line shown above the click area |
/// | `canvas_size`     | Click-area size in points |
/// | `marker`          | Marker radius, outline width and colour |
/// | `drawing_enabled` | `false` records clicks without drawing markers |
/// | `fill_canvas`     | Click area covers the whole viewport, no toolbar or outputs |
/// | `background`      | Optional image painted under the markers |
/// | `background_bytes`| Encoded image used instead of `background` (browser builds) |
/// | `native_options`  | Optional eframe window options |
/// | `controller`      | Optional handle for observing recorded points |
#[derive(Clone)]
pub struct RecorderConfig {
    pub title: String,
    pub headline: Option<String>,
    pub canvas_size: [u32; 2],
    pub marker: MarkerStyle,
    pub drawing_enabled: bool,
    pub fill_canvas: bool,
    pub background: Option<PathBuf>,
    pub background_bytes: Option<Vec<u8>>,
    #[cfg(not(target_arch = "wasm32"))]
    pub native_options: Option<eframe::NativeOptions>,
    pub controller: Option<RecorderController>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            title: "Click-to-Point Recorder".to_string(),
            headline: None,
            canvas_size: DEFAULT_CANVAS_SIZE,
            marker: MarkerStyle::default(),
            drawing_enabled: true,
            fill_canvas: cfg!(target_arch = "wasm32"),
            background: None,
            background_bytes: None,
            #[cfg(not(target_arch = "wasm32"))]
            native_options: None,
            controller: None,
        }
    }
}

impl RecorderConfig {
    /// Parse a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let file: RecorderConfigFile = serde_yaml::from_str(s)?;
        let mut cfg = Self::default();
        file.apply_to(&mut cfg)?;
        Ok(cfg)
    }

    /// Load a YAML config file. Relative background paths resolve against the file's directory.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut cfg = Self::from_yaml_str(&text)?;
        if let (Some(bg), Some(dir)) = (cfg.background.as_mut(), path.parent()) {
            if bg.is_relative() {
                *bg = dir.join(&*bg);
            }
        }
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Serialise the file-backed fields back to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&RecorderConfigFile::from(self))?)
    }
}

// ---------- Serializable mirror types ----------

/// Serializable version of [`MarkerStyle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyleSerde {
    pub radius: f64,
    pub line_width: f64,
    pub color_rgba: [u8; 4],
}

impl From<&MarkerStyle> for MarkerStyleSerde {
    fn from(m: &MarkerStyle) -> Self {
        Self {
            radius: m.radius,
            line_width: m.line_width,
            color_rgba: m.color.to_srgba_unmultiplied(),
        }
    }
}

impl MarkerStyleSerde {
    pub fn into_style(self) -> MarkerStyle {
        let [r, g, b, a] = self.color_rgba;
        MarkerStyle {
            radius: self.radius,
            line_width: self.line_width,
            color: Color32::from_rgba_unmultiplied(r, g, b, a),
        }
    }
}

/// On-disk form of [`RecorderConfig`]; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfigFile {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub canvas_size: Option<[u32; 2]>,
    pub marker: Option<MarkerStyleSerde>,
    pub drawing_enabled: Option<bool>,
    pub fill_canvas: Option<bool>,
    pub background: Option<PathBuf>,
}

impl From<&RecorderConfig> for RecorderConfigFile {
    fn from(c: &RecorderConfig) -> Self {
        Self {
            title: Some(c.title.clone()),
            headline: c.headline.clone(),
            canvas_size: Some(c.canvas_size),
            marker: Some(MarkerStyleSerde::from(&c.marker)),
            drawing_enabled: Some(c.drawing_enabled),
            fill_canvas: Some(c.fill_canvas),
            background: c.background.clone(),
        }
    }
}

impl RecorderConfigFile {
    /// Apply stored settings to a config instance.
    pub fn apply_to(self, c: &mut RecorderConfig) -> Result<()> {
        if let Some(t) = self.title {
            c.title = t;
        }
        if self.headline.is_some() {
            c.headline = self.headline;
        }
        if let Some([width, height]) = self.canvas_size {
            if width == 0 || height == 0 {
                return Err(RecorderError::InvalidCanvasSize { width, height });
            }
            c.canvas_size = [width, height];
        }
        if let Some(m) = self.marker {
            c.marker = m.into_style();
        }
        if let Some(d) = self.drawing_enabled {
            c.drawing_enabled = d;
        }
        if let Some(f) = self.fill_canvas {
            c.fill_canvas = f;
        }
        if self.background.is_some() {
            c.background = self.background;
        }
        Ok(())
    }
}
