use serde::{Deserialize, Serialize};

/// Direction of a single-step arrow move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// Notifications emitted by the engine toward its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselEvent {
    /// The committed index changed, or a controlled index was clamped and the
    /// controller is asked to self-correct.
    Change { index: usize },
    /// A horizontal slide gesture was recognized.
    DragStart,
    /// The gesture ended, whether or not a slide change resulted.
    DragEnd,
    /// A transition committed, on every path: drag, programmatic, arrow, and
    /// autoplay.
    SlideSettled { target_index: usize },
    /// An externally rendered arrow affordance requested a feasible
    /// single-step move.
    ArrowAdvance { direction: ArrowDirection },
}

/// Contract implemented by the host event receiver.
///
/// Events are delivered synchronously from within the engine call that
/// produced them, so sinks must not re-enter the engine.
pub trait EventSink {
    fn on_event(&mut self, event: CarouselEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: CarouselEvent) {}
}

/// Sink that records events in delivery order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<CarouselEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[CarouselEvent] {
        &self.events
    }

    /// Drains the recorded events, leaving the sink empty.
    pub fn take(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }
}
