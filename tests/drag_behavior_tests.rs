use bubblechart_rs::api::{ChartEngine, ChartEngineConfig};
use bubblechart_rs::core::{BubblePoint, Viewport};
use bubblechart_rs::interaction::DragPhase;
use bubblechart_rs::render::NullRenderer;

fn build_engine() -> ChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 450));
    ChartEngine::new(renderer, config).expect("engine init")
}

fn mounted_engine() -> ChartEngine<NullRenderer> {
    let mut engine = build_engine();
    engine
        .set_points(&[
            BubblePoint::new("A", 10.0, 50.0, 5.0),
            BubblePoint::new("B", 30.0, 80.0, 2.0),
        ])
        .expect("mount");
    engine
}

#[test]
fn drag_start_transitions_to_dragging_and_reveals_overlays() {
    let mut engine = mounted_engine();
    assert_eq!(*engine.drag_phase(), DragPhase::Idle);

    engine.drag_start("A").expect("drag start");
    assert_eq!(
        *engine.drag_phase(),
        DragPhase::Dragging {
            label: "A".to_owned()
        }
    );
    assert!(engine.guides().visible);
    assert!(engine.tooltip().visible);
}

#[test]
fn drag_start_raises_the_glyph() {
    let mut engine = mounted_engine();
    assert_eq!(engine.glyph_draw_order(), vec!["A", "B"]);

    engine.drag_start("A").expect("drag start");
    assert_eq!(engine.glyph_draw_order(), vec!["B", "A"]);
}

#[test]
fn drag_start_on_unknown_label_is_an_error() {
    let mut engine = mounted_engine();
    assert!(engine.drag_start("Nowhere").is_err());
    assert_eq!(*engine.drag_phase(), DragPhase::Idle);

    let mut unmounted = build_engine();
    assert!(unmounted.drag_start("A").is_err());
}

#[test]
fn drag_move_snaps_y_and_leaves_x_unsnapped() {
    // Domain freezes to x [0, 50], y [0, 100]; plot area is 700x370.
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");

    // Pointer at data (25, 47): x pixel 350, y pixel (1 - 0.47) * 370.
    let report = engine
        .drag_move(350.0, 0.53 * 370.0)
        .expect("drag move")
        .expect("report");

    assert_eq!(report.label, "A");
    assert!((report.x - 25.0).abs() <= 1e-9);
    assert_eq!(report.y, 50.0);
    assert_eq!(engine.tooltip().text, "Y: 50km");
}

#[test]
fn drag_move_clamps_to_frozen_domain() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");

    let report = engine
        .drag_move(-250.0, 9_999.0)
        .expect("drag move")
        .expect("report");
    assert_eq!(report.x, 0.0);
    assert_eq!(report.y, 0.0);

    let report = engine
        .drag_move(5_000.0, -300.0)
        .expect("drag move")
        .expect("report");
    assert_eq!(report.x, 50.0);
    assert_eq!(report.y, 100.0);
}

#[test]
fn every_move_produces_exactly_one_report() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");

    let mut reports = 0;
    for step in 0..25 {
        let px = step as f64 * 13.0;
        let py = 370.0 - step as f64 * 7.0;
        if engine.drag_move(px, py).expect("drag move").is_some() {
            reports += 1;
        }
    }
    assert_eq!(reports, 25);
}

#[test]
fn drag_move_while_idle_is_a_silent_no_op() {
    let mut engine = mounted_engine();
    let report = engine.drag_move(100.0, 100.0).expect("drag move");
    assert!(report.is_none());
}

#[test]
fn guides_and_tooltip_follow_the_clamped_position() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");

    engine.drag_move(350.0, 185.0).expect("drag move");
    let guides = engine.guides();
    assert!((guides.x_px - 350.0).abs() <= 1e-9);
    assert!((guides.y_px - 185.0).abs() <= 1e-9);

    let tooltip = engine.tooltip();
    assert!((tooltip.y_px - (185.0 - 45.0)).abs() <= 1e-9);
}

#[test]
fn drag_end_hides_overlays_and_returns_to_idle() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");
    engine.drag_move(350.0, 185.0).expect("drag move");

    engine.drag_end();
    assert_eq!(*engine.drag_phase(), DragPhase::Idle);
    assert!(!engine.guides().visible);
    assert!(!engine.tooltip().visible);

    // Idempotent, including rapid start/end cycles.
    engine.drag_end();
    engine.drag_start("B").expect("restart");
    engine.drag_end();
    assert!(!engine.guides().visible);
    assert!(!engine.tooltip().visible);
}

#[test]
fn reconciliation_is_suppressed_while_dragging() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");
    engine.drag_move(350.0, 185.0).expect("drag move");

    let position = engine.glyph_position_px("A").expect("glyph");

    // The orchestrator echoes state back mid-drag; the scene must not move.
    engine
        .set_points(&[
            BubblePoint::new("A", 1.0, 1.0, 5.0),
            BubblePoint::new("B", 30.0, 80.0, 2.0),
        ])
        .expect("update during drag");

    let after = engine.glyph_position_px("A").expect("glyph");
    assert_eq!(after, position);
    assert_eq!(engine.glyph_count(), 2);

    // Advancing time must not move it either: the drag path cancels tweens.
    engine.advance(500.0);
    assert_eq!(engine.glyph_position_px("A").expect("glyph"), position);
}

#[test]
fn drag_updates_engine_point_collection() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");
    engine.drag_move(350.0, 0.53 * 370.0).expect("drag move");
    engine.drag_end();

    let point = engine
        .points()
        .iter()
        .find(|point| point.label == "A")
        .expect("point A");
    assert!((point.x - 25.0).abs() <= 1e-9);
    assert_eq!(point.y, 50.0);
}

#[test]
fn second_drag_start_supersedes_the_first() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");
    engine.drag_start("B").expect("second drag start");

    assert_eq!(
        *engine.drag_phase(),
        DragPhase::Dragging {
            label: "B".to_owned()
        }
    );

    let report = engine
        .drag_move(350.0, 185.0)
        .expect("drag move")
        .expect("report");
    assert_eq!(report.label, "B");
}

#[test]
fn non_finite_pointer_positions_are_discarded() {
    let mut engine = mounted_engine();
    engine.drag_start("A").expect("drag start");

    let report = engine.drag_move(f64::NAN, 100.0).expect("drag move");
    assert!(report.is_none());
    let report = engine.drag_move(100.0, f64::INFINITY).expect("drag move");
    assert!(report.is_none());
}
