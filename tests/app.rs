use std::cell::RefCell;
use std::rc::Rc;

use clickpoints::*;

const SCREEN: egui::Vec2 = egui::vec2(960.0, 540.0);

/// Mirror destination that logs every write.
#[derive(Clone, Default)]
struct Writes(Rc<RefCell<Vec<String>>>);

impl RecorderOutputs for Writes {
    fn set_points_value(&mut self, value: &str) {
        self.0.borrow_mut().push(format!("points={value}"));
    }
    fn set_info(&mut self, info: &str) {
        self.0.borrow_mut().push(format!("info={info}"));
    }
}

fn frame(ctx: &egui::Context, app: &mut RecorderApp, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.ui(ctx));
}

fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Lay out once, then hover, press and release at `pos`.
fn click_at(ctx: &egui::Context, app: &mut RecorderApp, pos: egui::Pos2) {
    frame(ctx, app, vec![]);
    frame(ctx, app, vec![egui::Event::PointerMoved(pos)]);
    frame(ctx, app, vec![button(pos, true)]);
    frame(ctx, app, vec![button(pos, false)]);
    frame(ctx, app, vec![]);
}

fn fill_config() -> RecorderConfig {
    RecorderConfig {
        fill_canvas: true,
        ..RecorderConfig::default()
    }
}

#[test]
fn filled_canvas_measures_from_viewport_origin() {
    let ctx = egui::Context::default();
    let mut app = RecorderApp::new(&fill_config());
    click_at(&ctx, &mut app, egui::pos2(15.0, 24.0));

    assert_eq!(app.points().len(), 1);
    assert_eq!(app.outputs().points_value, "[15.000, 24.000]");
    assert_eq!(app.outputs().info, "You have selected 1 points.");
}

#[test]
fn windowed_layout_offsets_click_area_below_toolbar() {
    let ctx = egui::Context::default();
    let cfg = RecorderConfig {
        fill_canvas: false,
        canvas_size: [400, 300],
        ..RecorderConfig::default()
    };
    let mut app = RecorderApp::new(&cfg);
    click_at(&ctx, &mut app, egui::pos2(100.0, 100.0));

    let p = app.points().last().copied().unwrap();
    assert!(p.x < 100.0 && p.y < 100.0, "expected offset point, got {p}");
}

#[test]
fn mirror_is_untouched_until_first_click() {
    let writes = Writes::default();
    let outputs = AppOutputs::with_mirror(writes.clone());
    let mut app = RecorderApp::with_outputs(&fill_config(), outputs);

    assert_eq!(app.outputs().info, "You have selected 0 points.");
    assert!(writes.0.borrow().is_empty());

    app.click(ClickEvent::new(15.0, 24.0), &BoundingRect::new(10.0, 10.0, 960.0, 540.0));
    assert_eq!(
        *writes.0.borrow(),
        vec![
            "points=[5.000, 14.000]".to_string(),
            "info=You have selected 1 points.".to_string(),
        ]
    );
}
