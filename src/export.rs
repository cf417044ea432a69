//! Export helpers: the marked-up click area as PNG, the points as JSON.

use std::path::Path;

use crate::canvas::{draw_marker, MarkerStyle, PixmapCanvas};
use crate::error::Result;
use crate::point_list::PointList;

/// Load `path` as RGBA, resized to `size` when it differs.
pub fn load_background(path: impl AsRef<Path>, size: [u32; 2]) -> Result<image::RgbaImage> {
    Ok(fit_to(image::open(path.as_ref())?.to_rgba8(), size))
}

/// Decode encoded image bytes (PNG or JPEG), resized to `size` when it differs.
pub fn decode_background(bytes: &[u8], size: [u32; 2]) -> Result<image::RgbaImage> {
    Ok(fit_to(image::load_from_memory(bytes)?.to_rgba8(), size))
}

fn fit_to(img: image::RgbaImage, size: [u32; 2]) -> image::RgbaImage {
    if img.dimensions() == (size[0], size[1]) {
        return img;
    }
    image::imageops::resize(&img, size[0], size[1], image::imageops::FilterType::Triangle)
}

/// Rasterise one marker per recorded point, over `background` if given.
pub fn render_markers(
    size: [u32; 2],
    background: Option<&image::RgbaImage>,
    points: &PointList,
    marker: &MarkerStyle,
) -> Result<PixmapCanvas> {
    let mut canvas = match background {
        Some(bg) => PixmapCanvas::with_background(bg)?,
        None => PixmapCanvas::new(size[0], size[1])?,
    };
    for p in points {
        draw_marker(&mut canvas, p.x, p.y, marker);
    }
    Ok(canvas)
}

/// Write `canvas` as a PNG file.
pub fn save_png(path: impl AsRef<Path>, canvas: &PixmapCanvas) -> Result<()> {
    let path = path.as_ref();
    canvas
        .to_rgba_image()
        .save_with_format(path, image::ImageFormat::Png)?;
    log::info!("saved click area image to {}", path.display());
    Ok(())
}

/// Points as a JSON array of `[x, y]` pairs, each coordinate rounded to three decimals.
pub fn points_json(points: &PointList) -> Result<String> {
    let pairs: Vec<[f64; 2]> = points.iter().map(|p| p.rounded()).collect();
    Ok(serde_json::to_string(&pairs)?)
}

pub fn save_points_json(path: impl AsRef<Path>, points: &PointList) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, points_json(points)?)?;
    log::info!("saved {} points to {}", points.len(), path.display());
    Ok(())
}
