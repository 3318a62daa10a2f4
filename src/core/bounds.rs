use crate::core::types::{Align, Bounds, LayoutSnapshot};

/// Lower bound of the layer offset.
///
/// `Left` and `Right` anchor the layer's trailing edge to the container or
/// viewport respectively. `Center` with custom-width slides centers the last
/// slide by its own midpoint; centering total content width would misplace a
/// single prominent slide when widths vary.
#[must_use]
pub fn offset_min(snapshot: &LayoutSnapshot, align: Align) -> f64 {
    match align {
        Align::Left => snapshot.container_width - snapshot.layer_width,
        Align::Right => snapshot.viewport_width - snapshot.layer_width,
        Align::Center => {
            if snapshot.custom_width {
                if let Some(last) = snapshot.slides.last() {
                    return snapshot.viewport_width / 2.0 - last.coord_x - last.width / 2.0;
                }
            }
            snapshot.viewport_width
                - (snapshot.container_width - snapshot.viewport_width) / 2.0
                - snapshot.layer_width
        }
    }
}

/// Upper bound of the layer offset.
///
/// Zero except for center-aligned custom-width slides, where the first slide
/// is centered by its own midpoint.
#[must_use]
pub fn offset_max(snapshot: &LayoutSnapshot, align: Align) -> f64 {
    if align == Align::Center && snapshot.custom_width {
        if let Some(first) = snapshot.slides.first() {
            return snapshot.viewport_width / 2.0 - first.coord_x - first.width / 2.0;
        }
    }
    0.0
}

/// Offset bounds for the snapshot; empty geometry yields the `{0, 0}`
/// fallback.
#[must_use]
pub fn compute_bounds(snapshot: &LayoutSnapshot, align: Align) -> Bounds {
    if snapshot.slides.is_empty() {
        return Bounds::default();
    }
    Bounds::new(offset_min(snapshot, align), offset_max(snapshot, align))
}
