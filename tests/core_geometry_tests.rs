use carousel_rs::core::{MeasurementArena, SlideMeasurer, SlideRect, measure_layout};
use carousel_rs::error::CarouselError;

fn arena_with_slides(widths: &[f64], container: f64, viewport: f64) -> MeasurementArena {
    let mut arena = MeasurementArena::new(container, viewport);
    let mut coord = 0.0;
    for (index, width) in widths.iter().enumerate() {
        arena.assign(index, SlideRect::new(coord, *width));
        coord += width;
    }
    arena
}

#[test]
fn measure_is_idempotent() {
    let arena = arena_with_slides(&[300.0, 300.0, 300.0], 1000.0, 1000.0);

    let first = measure_layout(&arena, 3, false).expect("first measure");
    let second = measure_layout(&arena, 3, false).expect("second measure");

    assert_eq!(first, second);
}

#[test]
fn zero_slides_yield_empty_snapshot() {
    let arena = MeasurementArena::new(1000.0, 1000.0);

    let snapshot = measure_layout(&arena, 0, false).expect("empty measure");

    assert_eq!(snapshot.slide_count(), 0);
    assert_eq!(snapshot.layer_width, 0.0);
    assert!(snapshot.is_fully_visible());
}

#[test]
fn layer_width_sums_slide_widths() {
    let arena = arena_with_slides(&[200.0, 350.0, 450.0], 800.0, 800.0);

    let snapshot = measure_layout(&arena, 3, true).expect("measure");

    assert_eq!(snapshot.layer_width, 1000.0);
    assert!(snapshot.custom_width);
    assert_eq!(snapshot.slides[1].coord_x, 200.0);
    assert_eq!(snapshot.slides[2].coord_x, 550.0);
}

#[test]
fn missing_handles_measure_as_zero() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    arena.assign(0, SlideRect::new(0.0, 300.0));

    let snapshot = measure_layout(&arena, 3, false).expect("measure");

    assert_eq!(snapshot.slide_count(), 3);
    assert_eq!(snapshot.slides[1].coord_x, 0.0);
    assert_eq!(snapshot.slides[1].width, 0.0);
    assert_eq!(snapshot.layer_width, 300.0);
}

#[test]
fn arena_handles_follow_slide_lifecycle() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    arena.assign(2, SlideRect::new(600.0, 300.0));
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.slide_rect(0), None);
    assert_eq!(arena.slide_rect(2), Some(SlideRect::new(600.0, 300.0)));

    arena.clear(2);
    assert_eq!(arena.slide_rect(2), None);
    assert_eq!(arena.len(), 3);

    arena.truncate(1);
    assert_eq!(arena.len(), 1);
    assert!(!arena.is_empty());
}

#[test]
fn non_finite_slide_measurement_is_rejected() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    arena.assign(0, SlideRect::new(0.0, f64::NAN));

    let err = measure_layout(&arena, 1, false).expect_err("nan width must fail");
    assert!(matches!(
        err,
        CarouselError::InvalidSlideMeasure { index: 0, .. }
    ));
}

#[test]
fn negative_slide_width_is_rejected() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    arena.assign(0, SlideRect::new(0.0, -1.0));

    let err = measure_layout(&arena, 1, false).expect_err("negative width must fail");
    assert!(matches!(err, CarouselError::InvalidSlideMeasure { .. }));
}

#[test]
fn non_finite_container_width_is_rejected() {
    let arena = MeasurementArena::new(f64::INFINITY, 1000.0);

    let err = measure_layout(&arena, 0, false).expect_err("infinite container must fail");
    assert!(matches!(err, CarouselError::InvalidMeasure(_)));
}
