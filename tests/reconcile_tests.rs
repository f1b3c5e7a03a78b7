use bubblechart_rs::api::{ChartEngine, ChartEngineConfig};
use bubblechart_rs::core::{BubblePoint, Viewport, reconcile};
use bubblechart_rs::render::NullRenderer;

fn build_engine() -> ChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 450));
    ChartEngine::new(renderer, config).expect("engine init")
}

fn seed_points() -> Vec<BubblePoint> {
    vec![
        BubblePoint::new("Shanghai", 380.0, 800.0, 3.8),
        BubblePoint::new("London", 270.0, 400.0, 1.3),
        BubblePoint::new("Tokyo", 180.0, 300.0, 3.5),
    ]
}

#[test]
fn plan_splits_by_key_presence() {
    let prev = ["Shanghai", "London"];
    let next = vec![
        BubblePoint::new("London", 270.0, 450.0, 1.3),
        BubblePoint::new("Paris", 300.0, 220.0, 1.5),
    ];

    let plan = reconcile(prev, &next);

    assert_eq!(plan.update.len(), 1);
    assert_eq!(plan.update[0].label, "London");
    assert_eq!(plan.create.len(), 1);
    assert_eq!(plan.create[0].label, "Paris");
    assert_eq!(plan.remove, vec!["Shanghai".to_owned()]);
}

#[test]
fn identical_collections_produce_update_only_plans() {
    let next = seed_points();
    let plan = reconcile(next.iter().map(|p| p.label.as_str()), &next);

    assert_eq!(plan.update.len(), 3);
    assert!(plan.create.is_empty());
    assert!(plan.remove.is_empty());
}

#[test]
fn duplicate_labels_keep_the_last_occurrence() {
    let next = vec![
        BubblePoint::new("A", 1.0, 10.0, 1.0),
        BubblePoint::new("A", 2.0, 20.0, 1.0),
    ];
    let plan = reconcile([], &next);

    assert_eq!(plan.create.len(), 1);
    assert!((plan.create[0].x - 2.0).abs() <= 1e-9);
}

#[test]
fn empty_diff_is_empty() {
    let plan = reconcile([], &[]);
    assert!(plan.is_empty());
}

#[test]
fn chrome_is_structurally_stable_across_updates() {
    let mut engine = build_engine();
    engine.set_points(&seed_points()).expect("mount");

    let ticks_at_mount = engine.chrome_tick_counts().expect("chrome");
    let frame_at_mount = engine.build_render_frame().expect("frame");

    // Moves, a removal, and an addition, across several passes.
    let mut points = seed_points();
    points[0].y = 120.0;
    engine.set_points(&points).expect("update");

    points.remove(1);
    points.push(BubblePoint::new("Madrid", 90.0, 140.0, 0.6));
    engine.set_points(&points).expect("update");

    let ticks_after = engine.chrome_tick_counts().expect("chrome");
    assert_eq!(ticks_after, ticks_at_mount);

    // Same glyph count, so every non-glyph (chrome) primitive count must
    // match the mount frame exactly.
    let frame_after = engine.build_render_frame().expect("frame");
    assert_eq!(frame_after.lines.len(), frame_at_mount.lines.len());
    assert_eq!(frame_after.circles.len(), frame_at_mount.circles.len());
    assert_eq!(frame_after.texts.len(), frame_at_mount.texts.len());
}

#[test]
fn scene_tracks_creates_and_removes() {
    let mut engine = build_engine();
    engine.set_points(&seed_points()).expect("mount");
    assert_eq!(engine.glyph_count(), 3);

    let mut points = seed_points();
    points.pop();
    engine.set_points(&points).expect("remove one");
    assert_eq!(engine.glyph_count(), 2);

    points.push(BubblePoint::new("Seoul", 300.0, 350.0, 2.9));
    points.push(BubblePoint::new("Madrid", 90.0, 140.0, 0.6));
    engine.set_points(&points).expect("add two");
    assert_eq!(engine.glyph_count(), 4);

    let order = engine.glyph_draw_order();
    assert_eq!(order.last().map(String::as_str), Some("Madrid"));
}

#[test]
fn updates_tween_toward_new_positions() {
    let mut engine = build_engine();
    engine.set_points(&seed_points()).expect("mount");

    let before = engine.glyph_position_px("Shanghai").expect("glyph");

    let mut points = seed_points();
    points[0].x = 100.0;
    points[0].y = 100.0;
    engine.set_points(&points).expect("update");

    // Tween starts at the old position and lands after the full duration.
    let at_start = engine.glyph_position_px("Shanghai").expect("glyph");
    assert!((at_start.0 - before.0).abs() <= 1e-9);
    assert!((at_start.1 - before.1).abs() <= 1e-9);

    engine.advance(50.0);
    let mid = engine.glyph_position_px("Shanghai").expect("glyph");
    assert!(mid.0 != before.0);

    engine.advance(60.0);
    let done = engine.glyph_position_px("Shanghai").expect("glyph");
    assert!((done.0 - expected_x_px(&engine, 100.0)).abs() <= 1e-9);
}

fn expected_x_px(engine: &ChartEngine<NullRenderer>, x: f64) -> f64 {
    let domain = engine.scale_domain().expect("domain");
    let plot_width = engine.layout().plot_width();
    x / domain.x_max() * plot_width
}
