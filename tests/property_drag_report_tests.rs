use bubblechart_rs::api::{ChartEngine, ChartEngineConfig};
use bubblechart_rs::core::{BubblePoint, Viewport};
use bubblechart_rs::render::NullRenderer;
use proptest::prelude::*;

fn mounted_engine() -> ChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_points(&[
            BubblePoint::new("A", 10.0, 50.0, 5.0),
            BubblePoint::new("B", 30.0, 80.0, 2.0),
        ])
        .expect("mount");
    engine
}

proptest! {
    #[test]
    fn reported_values_stay_inside_the_frozen_domain(
        pointer_positions in proptest::collection::vec((-2_000.0f64..3_000.0, -2_000.0f64..3_000.0), 1..40)
    ) {
        let mut engine = mounted_engine();
        let domain = engine.scale_domain().expect("frozen domain");
        engine.drag_start("A").expect("drag start");

        for (px, py) in pointer_positions {
            let report = engine
                .drag_move(px, py)
                .expect("drag move")
                .expect("report for every move");

            prop_assert!(report.x >= 0.0);
            prop_assert!(report.x <= domain.x_max());
            prop_assert!(report.y >= 0.0);
            prop_assert!(report.y <= domain.y_max());

            let multiple = report.y / 10.0;
            prop_assert!((multiple - multiple.round()).abs() <= 1e-9);
        }
    }

    #[test]
    fn move_sequences_preserve_call_count_and_order(
        pointer_positions in proptest::collection::vec((0.0f64..700.0, 0.0f64..370.0), 1..30)
    ) {
        let mut engine = mounted_engine();
        engine.drag_start("B").expect("drag start");

        let mut reports = Vec::new();
        for (px, py) in &pointer_positions {
            if let Some(report) = engine.drag_move(*px, *py).expect("drag move") {
                reports.push(report);
            }
        }

        // One report per move, in pointer-device order.
        prop_assert_eq!(reports.len(), pointer_positions.len());
        for (report, (px, _)) in reports.iter().zip(&pointer_positions) {
            let domain = engine.scale_domain().expect("frozen domain");
            let expected_x = (px / 700.0 * domain.x_max()).clamp(0.0, domain.x_max());
            prop_assert!((report.x - expected_x).abs() <= 1e-9);
        }
    }

    #[test]
    fn domain_stays_frozen_under_arbitrary_updates(
        updates in proptest::collection::vec(
            proptest::collection::vec((1.0f64..1_000.0, 1.0f64..1_000.0, 0.1f64..10.0), 1..6),
            1..8
        )
    ) {
        let mut engine = mounted_engine();
        let frozen = engine.scale_domain().expect("frozen domain");

        for (pass, update) in updates.iter().enumerate() {
            let points: Vec<BubblePoint> = update
                .iter()
                .enumerate()
                .map(|(i, (x, y, z))| BubblePoint::new(format!("P{pass}-{i}"), *x, *y, *z))
                .collect();
            engine.set_points(&points).expect("update");
            prop_assert_eq!(engine.scale_domain().expect("still frozen"), frozen);
        }
    }
}
