use eframe_sketchpad::{
    Command, DrawingEngine, NoticeLevel, Outcome, PaintError, PromptAnswers, SketchConfig,
};
use egui::{Color32, pos2};

fn create_engine() -> DrawingEngine {
    DrawingEngine::new(&SketchConfig::default()).unwrap()
}

#[test]
fn test_save_appends_png_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = create_engine();

    let mut answers = PromptAnswers::new().with_save_path(dir.path().join("drawing"));
    assert_eq!(Command::Save.execute(&mut engine, &mut answers), Outcome::Applied);

    let written = dir.path().join("drawing.png");
    assert!(written.exists());
    assert!(!dir.path().join("drawing").exists());

    let notices = answers.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert!(notices[0].text.contains("drawing.png"));
}

#[test]
fn test_save_keeps_existing_extension() {
    let dir = tempfile::tempdir().unwrap();
    let engine = create_engine();

    let written = engine.export(&dir.path().join("shot.PNG")).unwrap();
    assert_eq!(written, dir.path().join("shot.PNG"));
    assert!(written.exists());
}

#[test]
fn test_save_cancelled_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = create_engine();

    let mut answers = PromptAnswers::new();
    assert_eq!(Command::Save.execute(&mut engine, &mut answers), Outcome::Cancelled);
    assert!(answers.notices().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_save_failure_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = create_engine();
    let target = dir.path().join("missing").join("drawing.png");

    let mut answers = PromptAnswers::new().with_save_path(&target);
    assert_eq!(Command::Save.execute(&mut engine, &mut answers), Outcome::Rejected);

    let notices = answers.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(matches!(
        engine.export(&target),
        Err(PaintError::Export { .. })
    ));
}

#[test]
fn test_exported_pixels_match_raster() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = create_engine();
    engine.set_pen_color(Color32::RED);
    engine.set_brush_size(5).unwrap();
    engine.pointer_drag(pos2(20.0, 20.0));
    engine.pointer_drag(pos2(200.0, 150.0));
    engine.pointer_release();

    let written = engine.export(&dir.path().join("lines.png")).unwrap();
    let decoded = image::open(&written).unwrap().to_rgb8();

    assert_eq!(decoded.dimensions(), (600, 400));
    assert_eq!(&decoded, engine.raster().as_image());
}

#[test]
fn test_export_after_background_change_has_only_annotations() {
    let dir = tempfile::tempdir().unwrap();
    let config = SketchConfig::default();
    let mut engine = DrawingEngine::new(&config).unwrap();

    engine.pointer_drag(pos2(10.5, 300.5));
    engine.pointer_drag(pos2(400.5, 300.5));
    engine.pointer_release();
    engine.set_pen_color(Color32::BLUE);
    engine.begin_text("Title");
    engine.primary_press(pos2(30.0, 40.0));
    engine.pointer_release();

    engine.change_background(Color32::GREEN);
    let written = engine.export(&dir.path().join("bg")).unwrap();
    let decoded = image::open(&written).unwrap().to_rgb8();

    // Same picture as a fresh canvas in that colour with the text replayed
    let mut expected = DrawingEngine::new(&config).unwrap();
    expected.change_background(Color32::GREEN);
    expected.set_pen_color(Color32::BLUE);
    expected.begin_text("Title");
    expected.primary_press(pos2(30.0, 40.0));

    assert_eq!(&decoded, expected.raster().as_image());
    assert_eq!(decoded.get_pixel(200, 300).0, [0, 255, 0]);
}

#[test]
fn test_export_after_resize() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = create_engine();
    engine.pointer_drag(pos2(0.5, 0.5));
    engine.pointer_drag(pos2(50.5, 50.5));
    engine.pointer_release();
    engine.resize(800, 100).unwrap();

    let written = engine.export(&dir.path().join("wide.png")).unwrap();
    let decoded = image::open(&written).unwrap().to_rgb8();

    assert_eq!(decoded.dimensions(), (800, 100));
    assert!(decoded.pixels().all(|p| p.0 == [255, 255, 255]));
}
