use crate::core::types::{Bounds, LayoutSnapshot};

/// Reference animation window for velocity extrapolation, in milliseconds.
const EXTRAPOLATION_WINDOW_MS: f64 = 240.0;

/// Damping applied to the extrapolated displacement to avoid overshoot.
const EXTRAPOLATION_DAMPING: f64 = 0.6;

/// Fraction of the neighbor slide's width a flick must cover to advance.
const FLICK_WIDTH_RATIO: f64 = 0.05;

/// Divisor applied to the portion of the offset past either bound.
const ELASTIC_DIVISOR: f64 = 3.0;

/// Accumulated state of one drag gesture atop the last committed offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    /// Live gesture displacement; cleared to zero on release.
    pub delta_x: f64,
    /// Last committed rest offset of the layer.
    pub shift_x: f64,
    /// A horizontal slide gesture is currently recognized.
    pub dragging: bool,
}

/// One move/end notification from the host gesture primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureFrame {
    /// Accumulated displacement since gesture start.
    pub delta_x: f64,
    /// Time since gesture start, in milliseconds.
    pub duration_ms: f64,
    /// The gesture currently reads as an axis-aligned horizontal slide.
    pub is_slide_x: bool,
    /// The gesture was recognized as a slide at some point before release.
    pub is_slide: bool,
}

/// Live layer offset during a drag.
///
/// Offsets past either bound are damped by a third, signaling "end of
/// content" without a hard stop.
#[must_use]
pub fn live_offset(session: &DragSession, bounds: Bounds) -> f64 {
    let raw = session.shift_x + session.delta_x;
    if raw > bounds.max {
        bounds.max + (raw - bounds.max) / ELASTIC_DIVISOR
    } else if raw < bounds.min {
        bounds.min + (raw - bounds.min) / ELASTIC_DIVISOR
    } else {
        raw
    }
}

/// Slide index a released gesture settles on.
///
/// Projects the gesture linearly over a fixed reference window, snaps to the
/// slide boundary nearest the projected rest position, and falls back to a
/// single-slide advance in the drag direction when the projection stays on
/// the current slide and the flick covered enough of the neighbor's width.
#[must_use]
pub fn resolve_target(
    session: &DragSession,
    bounds: Bounds,
    snapshot: &LayoutSnapshot,
    current_index: usize,
    duration_ms: f64,
) -> usize {
    if snapshot.slides.is_empty() {
        return current_index;
    }
    let current = current_index.min(snapshot.slides.len() - 1);

    // Instantaneous release resolves with no extrapolation.
    let expected_delta_x = if duration_ms.is_finite() && duration_ms > 0.0 {
        (session.delta_x / duration_ms) * EXTRAPOLATION_WINDOW_MS * EXTRAPOLATION_DAMPING
    } else {
        0.0
    };
    let shift = session.shift_x + session.delta_x + expected_delta_x - bounds.max;

    // Nearest slide boundary to the projected rest position, scanning in
    // ascending index order seeded at the current slide. The best candidate
    // survives only while strictly closer.
    let mut target = current;
    for (index, slide) in snapshot.slides.iter().enumerate() {
        let best = (snapshot.slides[target].coord_x + shift).abs();
        let candidate = (slide.coord_x + shift).abs();
        if best >= candidate {
            target = index;
        }
    }

    if target == current {
        let neighbor = if session.delta_x < 0.0 {
            current.checked_add(1)
        } else {
            current.checked_sub(1)
        };
        if let Some(neighbor) = neighbor {
            if let Some(slide) = snapshot.slide(neighbor) {
                if session.delta_x.abs() > slide.width * FLICK_WIDTH_RATIO {
                    target = neighbor;
                }
            }
        }
    }

    target
}
