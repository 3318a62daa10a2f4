use carousel_rs::api::{CarouselConfig, CarouselEngine, CarouselEvent, RecordingSink};
use carousel_rs::core::{GestureFrame, MeasurementArena, SlideRect};

fn arena_equal_slides(count: usize, width: f64, container: f64, viewport: f64) -> MeasurementArena {
    let mut arena = MeasurementArena::new(container, viewport);
    for index in 0..count {
        arena.assign(index, SlideRect::new(index as f64 * width, width));
    }
    arena
}

fn mounted_engine(
    config: CarouselConfig,
    arena: &MeasurementArena,
    count: usize,
) -> CarouselEngine<RecordingSink> {
    let mut engine = CarouselEngine::new(RecordingSink::new(), config).expect("engine init");
    engine.mount(count, arena).expect("mount");
    engine.sink_mut().clear();
    engine
}

fn slide_move(delta_x: f64) -> GestureFrame {
    GestureFrame {
        delta_x,
        duration_ms: 0.0,
        is_slide_x: true,
        is_slide: true,
    }
}

fn slide_end(delta_x: f64, duration_ms: f64) -> GestureFrame {
    GestureFrame {
        delta_x,
        duration_ms,
        is_slide_x: true,
        is_slide: true,
    }
}

#[test]
fn drag_release_emits_events_in_order() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-80.0));
    engine.drag_move(slide_move(-160.0));
    engine.drag_end(slide_end(-160.0, 0.0));

    assert_eq!(
        engine.sink().events(),
        &[
            CarouselEvent::DragStart,
            CarouselEvent::DragEnd,
            CarouselEvent::Change { index: 1 },
            CarouselEvent::SlideSettled { target_index: 1 },
        ]
    );
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn drag_start_is_emitted_once_per_session() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-10.0));
    engine.drag_move(slide_move(-20.0));
    engine.drag_move(slide_move(-30.0));

    let starts = engine
        .sink()
        .events()
        .iter()
        .filter(|event| matches!(event, CarouselEvent::DragStart))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn unrecognized_release_still_closes_the_session() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_end(GestureFrame {
        delta_x: 0.0,
        duration_ms: 10.0,
        is_slide_x: false,
        is_slide: false,
    });

    // No Change for a tap, but DragEnd and a settle on the current slide.
    assert_eq!(
        engine.sink().events(),
        &[
            CarouselEvent::DragEnd,
            CarouselEvent::SlideSettled { target_index: 0 },
        ]
    );
    assert_eq!(engine.current_index(), 0);
    assert!(!engine.is_dragging());
}

#[test]
fn live_offset_tracks_the_gesture() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-120.0));

    let state = engine.render_state();
    assert!(state.dragging);
    assert!(!state.animated);
    assert_eq!(state.offset, -120.0);
}

#[test]
fn live_offset_is_elastic_past_the_first_slide() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(90.0));

    // 90px past max renders damped by a third.
    assert_eq!(engine.render_state().offset, 30.0);
}

#[test]
fn animation_resumes_after_release() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-160.0));
    assert!(!engine.render_state().animated);

    engine.drag_end(slide_end(-160.0, 0.0));
    assert!(engine.render_state().animated);
    assert!(!engine.render_state().dragging);
}

#[test]
fn dragging_disabled_ignores_moves() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let config = CarouselConfig::new().with_draggable(false);
    let mut engine = mounted_engine(config, &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-160.0));

    assert!(!engine.is_dragging());
    assert!(engine.sink().events().is_empty());
}

#[test]
fn fully_visible_content_ignores_moves() {
    let arena = arena_equal_slides(1, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 1);

    engine.drag_start();
    engine.drag_move(slide_move(-160.0));

    assert!(!engine.is_dragging());
    assert_eq!(engine.render_state().offset, 0.0);
}

#[test]
fn vertical_gestures_do_not_track() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(GestureFrame {
        delta_x: -160.0,
        duration_ms: 10.0,
        is_slide_x: false,
        is_slide: false,
    });

    assert!(!engine.is_dragging());
    assert_eq!(engine.render_state().offset, 0.0);
}

#[test]
fn non_finite_deltas_are_ignored() {
    let arena = arena_equal_slides(5, 300.0, 1000.0, 1000.0);
    let mut engine = mounted_engine(CarouselConfig::new(), &arena, 5);

    engine.drag_start();
    engine.drag_move(slide_move(-100.0));
    engine.drag_move(slide_move(f64::NAN));

    assert_eq!(engine.render_state().offset, -100.0);
}
