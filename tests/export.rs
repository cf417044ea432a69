use clickpoints::export::*;
use clickpoints::{MarkerStyle, Point, PointList};

fn list(points: &[(f64, f64)]) -> PointList {
    let mut l = PointList::new();
    for (x, y) in points {
        l.push(Point::new(*x, *y));
    }
    l
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("clickpoints-{}-{name}", std::process::id()))
}

#[test]
fn json_uses_rounded_pairs_in_click_order() {
    let l = list(&[(1.2345, 2.0), (3.0, 4.5)]);
    assert_eq!(points_json(&l).unwrap(), "[[1.235,2.0],[3.0,4.5]]");
    assert_eq!(points_json(&PointList::new()).unwrap(), "[]");
}

#[test]
fn rendered_markers_over_background() {
    let bg = image::RgbaImage::from_pixel(40, 30, image::Rgba([255, 255, 255, 255]));
    let l = list(&[(10.0, 10.0)]);
    let canvas = render_markers([40, 30], Some(&bg), &l, &MarkerStyle::default()).unwrap();
    assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(35, 25), Some([255, 255, 255, 255]));
}

#[test]
fn png_and_json_files_are_written() {
    let l = list(&[(5.0, 14.0)]);
    let canvas = render_markers([32, 32], None, &l, &MarkerStyle::default()).unwrap();

    let png = temp_path("markers.png");
    save_png(&png, &canvas).unwrap();
    let decoded = image::open(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (32, 32));
    assert_eq!(decoded.get_pixel(5, 14).0, [255, 0, 0, 255]);

    let json = temp_path("points.json");
    save_points_json(&json, &l).unwrap();
    assert_eq!(std::fs::read_to_string(&json).unwrap(), "[[5.0,14.0]]");

    std::fs::remove_file(png).ok();
    std::fs::remove_file(json).ok();
}

#[test]
fn background_is_resized_to_canvas() {
    let path = temp_path("bg.png");
    image::RgbaImage::from_pixel(8, 4, image::Rgba([0, 128, 0, 255]))
        .save(&path)
        .unwrap();
    let bg = load_background(&path, [16, 8]).unwrap();
    assert_eq!(bg.dimensions(), (16, 8));
    assert_eq!(bg.get_pixel(3, 3).0, [0, 128, 0, 255]);
    std::fs::remove_file(path).ok();
}

#[test]
fn background_decodes_from_bytes() {
    let mut bytes = Vec::new();
    image::RgbaImage::from_pixel(8, 4, image::Rgba([0, 0, 200, 255]))
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    let bg = decode_background(&bytes, [8, 4]).unwrap();
    assert_eq!(bg.dimensions(), (8, 4));
    assert_eq!(bg.get_pixel(7, 3).0, [0, 0, 200, 255]);

    assert!(decode_background(b"not an image", [8, 4]).is_err());
}
