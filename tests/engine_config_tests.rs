use carousel_rs::api::{Bullets, CarouselConfig, CarouselEngine, NullSink, RecordingSink};
use carousel_rs::core::{Align, MeasurementArena, SlideRect, SlideWidth};
use carousel_rs::error::CarouselError;

#[test]
fn defaults_match_the_documented_surface() {
    let config = CarouselConfig::new();

    assert_eq!(config.align, Align::Left);
    assert_eq!(config.slide_width, SlideWidth::Full);
    assert!(config.is_draggable);
    assert_eq!(config.bullets, Bullets::None);
    assert!(!config.show_arrows);
    assert_eq!(config.autoplay_interval_ms, 0);
    assert_eq!(config.initial_index, 0);
    assert_eq!(config.controlled_index, None);
}

#[test]
fn config_round_trips_through_json() {
    let config = CarouselConfig::new()
        .with_align(Align::Center)
        .with_slide_width(SlideWidth::Custom)
        .with_bullets(Bullets::Dark)
        .with_show_arrows(true)
        .with_autoplay_interval_ms(5000)
        .with_initial_index(1);

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: CarouselConfig = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored: CarouselConfig = serde_json::from_str("{}").expect("deserialize empty");

    assert_eq!(restored, CarouselConfig::new());
}

#[test]
fn non_finite_fixed_width_is_rejected_at_init() {
    let config = CarouselConfig::new().with_slide_width(SlideWidth::Fixed(f64::INFINITY));

    let err = CarouselEngine::new(NullSink, config).expect_err("infinite width must fail");
    assert!(matches!(err, CarouselError::InvalidConfig(_)));
}

#[test]
fn zero_fixed_width_is_rejected_at_init() {
    let config = CarouselConfig::new().with_slide_width(SlideWidth::Fixed(0.0));

    assert!(CarouselEngine::new(NullSink, config).is_err());
}

#[test]
fn bullet_surface_follows_the_slide_count() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    for index in 0..3 {
        arena.assign(index, SlideRect::new(index as f64 * 300.0, 300.0));
    }

    let config = CarouselConfig::new().with_bullets(Bullets::Dark);
    let mut engine = CarouselEngine::new(RecordingSink::new(), config).expect("engine init");
    engine.mount(3, &arena).expect("mount");

    assert_eq!(engine.bullet_count(), 3);
    assert_eq!(engine.active_bullet(), Some(0));

    engine.set_index(2);
    assert_eq!(engine.active_bullet(), Some(2));
}

#[test]
fn disabled_bullets_surface_nothing() {
    let mut arena = MeasurementArena::new(1000.0, 1000.0);
    arena.assign(0, SlideRect::new(0.0, 300.0));

    let mut engine =
        CarouselEngine::new(RecordingSink::new(), CarouselConfig::new()).expect("engine init");
    engine.mount(1, &arena).expect("mount");

    assert_eq!(engine.bullet_count(), 0);
    assert_eq!(engine.active_bullet(), None);
}

#[test]
fn sink_can_be_recovered_from_the_engine() {
    let engine =
        CarouselEngine::new(RecordingSink::new(), CarouselConfig::new()).expect("engine init");

    let sink = engine.into_sink();
    assert!(sink.events().is_empty());
}
