use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    Align, Bounds, DragSession, GestureFrame, LayoutSnapshot, SlideMeasurer, SlideWidth,
    compute_bounds, indent_for, live_offset, measure_layout, resolve_target,
};
use crate::error::CarouselResult;

use super::autoplay::{AutoplayDriver, AutoplayScheduler};
use super::engine_config::{Bullets, CarouselConfig, validate_slide_width};
use super::events::{ArrowDirection, CarouselEvent, EventSink};
use super::index_owner::SlideIndexOwner;

/// Eased transition time applied to committed offset changes, in seconds.
const SETTLE_DURATION_S: f64 = 0.24;

/// Whether offset changes are eased, and the eased transition time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub animated: bool,
    pub duration_s: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            animated: true,
            duration_s: SETTLE_DURATION_S,
        }
    }
}

/// Everything the host needs to position the layer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Horizontal translation of the layer.
    pub offset: f64,
    pub animated: bool,
    pub duration_s: f64,
    pub dragging: bool,
}

/// Main orchestration facade consumed by host components.
///
/// `CarouselEngine` arbitrates between drag-driven, programmatic, arrow, and
/// autoplay slide transitions over measured slide geometry. Measurement,
/// rendering, pointer translation, and real timers stay on the host side: the
/// engine consumes a [`SlideMeasurer`], gesture frames, and an
/// [`AutoplayScheduler`], and reports back through an [`EventSink`].
#[derive(Debug)]
pub struct CarouselEngine<S: EventSink> {
    sink: S,
    align: Align,
    slide_width: SlideWidth,
    is_draggable: bool,
    bullets: Bullets,
    show_arrows: bool,
    slide_count: usize,
    snapshot: LayoutSnapshot,
    bounds: Bounds,
    session: DragSession,
    index: SlideIndexOwner,
    animation: AnimationState,
    animation_restore_pending: bool,
    correction_reported: bool,
    /// Controlled-mode request already reported as settled, awaiting the
    /// controller's echo through `set_index`.
    pending_settle: Option<usize>,
    autoplay: AutoplayDriver,
    started: bool,
}

impl<S: EventSink> CarouselEngine<S> {
    pub fn new(sink: S, config: CarouselConfig) -> CarouselResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            sink,
            align: config.align,
            slide_width: config.slide_width,
            is_draggable: config.is_draggable,
            bullets: config.bullets,
            show_arrows: config.show_arrows,
            slide_count: 0,
            snapshot: LayoutSnapshot::empty(),
            bounds: Bounds::default(),
            session: DragSession::default(),
            index: SlideIndexOwner::new(config.controlled_index, config.initial_index),
            animation: AnimationState::default(),
            animation_restore_pending: false,
            correction_reported: false,
            pending_settle: None,
            autoplay: AutoplayDriver::new(config.autoplay_interval_ms),
            started: false,
        })
    }

    /// First measurement, once the host has laid the slides out. Snaps to the
    /// rest offset without animating.
    pub fn mount<M: SlideMeasurer>(
        &mut self,
        slide_count: usize,
        measurer: &M,
    ) -> CarouselResult<()> {
        self.slide_count = slide_count;
        self.remeasure(measurer, Some(false))?;
        self.rearm_autoplay();
        Ok(())
    }

    /// Activates external resources (the autoplay schedule). Idempotent.
    pub fn start(&mut self) {
        self.started = true;
        self.rearm_autoplay();
    }

    /// Releases external resources unconditionally; safe to call repeatedly
    /// and from any exit path.
    pub fn stop(&mut self) {
        self.started = false;
        self.autoplay.disarm();
    }

    // ---- structural paths ----------------------------------------------

    /// Slides were added or removed.
    pub fn set_slide_count<M: SlideMeasurer>(
        &mut self,
        slide_count: usize,
        measurer: &M,
    ) -> CarouselResult<()> {
        self.slide_count = slide_count;
        self.remeasure(measurer, None)?;
        self.rearm_autoplay();
        Ok(())
    }

    /// The slide width mode changed.
    pub fn set_slide_width<M: SlideMeasurer>(
        &mut self,
        slide_width: SlideWidth,
        measurer: &M,
    ) -> CarouselResult<()> {
        validate_slide_width(slide_width)?;
        self.slide_width = slide_width;
        self.remeasure(measurer, None)
    }

    /// Content changed in a way that can move custom-width slides; a no-op
    /// for the other width modes, whose geometry cannot shift under it.
    pub fn touch_layout<M: SlideMeasurer>(&mut self, measurer: &M) -> CarouselResult<()> {
        if !self.slide_width.is_custom() {
            return Ok(());
        }
        self.remeasure(measurer, None)
    }

    /// Host resize notification; re-measures and snaps without animating.
    pub fn notify_resize<M: SlideMeasurer>(&mut self, measurer: &M) -> CarouselResult<()> {
        self.remeasure(measurer, Some(false))
    }

    /// Restores easing after a snap. The host calls this once a frame with
    /// the snapped offset has actually been rendered.
    pub fn frame_rendered(&mut self) {
        if self.animation_restore_pending && !self.session.dragging {
            self.animation.animated = true;
            self.animation_restore_pending = false;
        }
    }

    // ---- index paths ---------------------------------------------------

    /// Supplies a new index: the controller prop in controlled mode, a
    /// direct programmatic jump in uncontrolled mode.
    pub fn set_index(&mut self, index: usize) {
        let before = self.effective_index();

        if self.index.is_controlled() {
            self.index.set_controlled(index);
            self.correction_reported = false;
        } else {
            let clamped = self.clamp_to_slides(index);
            self.index.store(clamped);
            if clamped != before {
                self.sink.on_event(CarouselEvent::Change { index: clamped });
            }
        }

        self.session.delta_x = 0.0;
        self.animation.animated = true;
        self.animation_restore_pending = false;
        self.reconcile_index();

        let effective = self.effective_index();
        self.session.shift_x = indent_for(effective, &self.snapshot, self.bounds, self.align);
        // A transition already settled at request time must not settle again
        // when the controller echoes it back.
        let already_settled = self.pending_settle.take() == Some(effective);
        if effective != before && !already_settled {
            self.sink.on_event(CarouselEvent::SlideSettled {
                target_index: effective,
            });
        }
        self.rearm_autoplay();
    }

    /// Single-step move requested by an externally rendered arrow
    /// affordance. Ignored when the move is not feasible.
    pub fn advance(&mut self, direction: ArrowDirection) {
        let current = self.effective_index();
        let target = match direction {
            ArrowDirection::Left => {
                if !self.can_slide_left() {
                    return;
                }
                current.saturating_sub(1)
            }
            ArrowDirection::Right => {
                if !self.can_slide_right() {
                    return;
                }
                current + 1
            }
        };
        self.sink.on_event(CarouselEvent::ArrowAdvance { direction });
        self.commit_index(target);
    }

    /// Host callback for an elapsed autoplay schedule.
    pub fn autoplay_tick(&mut self) {
        // A stale schedule racing a gesture must not commit over it.
        if self.session.dragging {
            return;
        }
        let count = self.snapshot.slide_count();
        if !self.started || count < 2 || self.autoplay.interval_ms() == 0 {
            return;
        }
        self.commit_index((self.effective_index() + 1) % count);
    }

    pub fn set_autoplay_interval_ms(&mut self, interval_ms: u64) {
        self.autoplay.set_interval_ms(interval_ms);
        self.rearm_autoplay();
    }

    /// Installs the host scheduler; any schedule pending on the previous one
    /// is canceled first.
    pub fn set_scheduler(&mut self, scheduler: Box<dyn AutoplayScheduler>) {
        self.autoplay.set_scheduler(scheduler);
        self.rearm_autoplay();
    }

    // ---- drag paths ----------------------------------------------------

    /// Gesture start: freeze easing and wait for the first recognized move.
    pub fn drag_start(&mut self) {
        self.animation.animated = false;
        self.animation_restore_pending = false;
    }

    /// Gesture move: live tracking, while the gesture reads as a horizontal
    /// slide and dragging is permitted.
    pub fn drag_move(&mut self, frame: GestureFrame) {
        if !self.is_draggable || self.snapshot.is_fully_visible() {
            return;
        }
        if !frame.is_slide_x || !frame.delta_x.is_finite() {
            return;
        }
        if !self.session.dragging {
            self.session.dragging = true;
            self.sink.on_event(CarouselEvent::DragStart);
        }
        self.session.delta_x = frame.delta_x;
    }

    /// Gesture release: close the session and commit the resolved target.
    ///
    /// Unrecognized gestures (taps, vertical scrolls) still close the session
    /// and settle back on the current slide.
    pub fn drag_end(&mut self, frame: GestureFrame) {
        let target = if frame.is_slide && self.session.dragging {
            resolve_target(
                &self.session,
                self.bounds,
                &self.snapshot,
                self.effective_index(),
                frame.duration_ms,
            )
        } else {
            self.effective_index()
        };

        self.session.dragging = false;
        self.sink.on_event(CarouselEvent::DragEnd);
        self.commit_index(target);
    }

    // ---- feasibility ---------------------------------------------------

    /// Reachable rest offsets are `<= 0`; strictly negative means content
    /// extends to the left.
    #[must_use]
    pub fn can_slide_left(&self) -> bool {
        !self.snapshot.is_fully_visible() && self.session.shift_x < 0.0
    }

    #[must_use]
    pub fn can_slide_right(&self) -> bool {
        if self.snapshot.is_fully_visible() {
            return false;
        }
        match self.align {
            // Left-aligned layers stop when fully scrolled right.
            Align::Left => {
                self.snapshot.container_width - self.session.shift_x < self.snapshot.layer_width
            }
            // Right/center check the index instead.
            _ => self.effective_index() + 1 < self.snapshot.slide_count(),
        }
    }

    // ---- accessors -----------------------------------------------------

    /// Layer offset, easing, and drag flag for the current frame. Drags read
    /// the live elastically-resisted offset; everything else reads the rest
    /// indent for the current index.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        let offset = if self.session.dragging {
            live_offset(&self.session, self.bounds)
        } else {
            indent_for(
                self.effective_index(),
                &self.snapshot,
                self.bounds,
                self.align,
            )
        };
        RenderState {
            offset,
            animated: self.animation.animated,
            duration_s: self.animation.duration_s,
            dragging: self.session.dragging,
        }
    }

    /// Index used for rendering, clamped whenever slides exist.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.effective_index()
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.index.is_controlled()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.dragging
    }

    #[must_use]
    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    #[must_use]
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn align(&self) -> Align {
        self.align
    }

    #[must_use]
    pub fn slide_width(&self) -> SlideWidth {
        self.slide_width
    }

    #[must_use]
    pub fn show_arrows(&self) -> bool {
        self.show_arrows
    }

    #[must_use]
    pub fn bullets(&self) -> Bullets {
        self.bullets
    }

    /// Number of bullet indicators the host should render.
    #[must_use]
    pub fn bullet_count(&self) -> usize {
        if self.bullets == Bullets::None {
            0
        } else {
            self.slide_count
        }
    }

    #[must_use]
    pub fn active_bullet(&self) -> Option<usize> {
        (self.bullets != Bullets::None && self.slide_count > 0).then(|| self.effective_index())
    }

    #[must_use]
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ---- internals -----------------------------------------------------

    fn effective_index(&self) -> usize {
        self.index.effective(self.snapshot.slide_count())
    }

    fn clamp_to_slides(&self, index: usize) -> usize {
        let count = self.snapshot.slide_count();
        if count == 0 { index } else { index.min(count - 1) }
    }

    /// Commits `target` through the change path shared by drag release,
    /// arrows, and autoplay.
    fn commit_index(&mut self, target: usize) {
        let settled = self.clamp_to_slides(target);
        let before = self.effective_index();
        debug!(target = settled, from = before, "committing slide index");

        if self.index.is_controlled() {
            // Request only; the controller answers through `set_index`.
            if settled != before {
                self.sink.on_event(CarouselEvent::Change { index: settled });
                self.pending_settle = Some(settled);
            }
        } else {
            self.index.store(settled);
            if settled != before {
                self.sink.on_event(CarouselEvent::Change { index: settled });
            }
        }

        self.session.delta_x = 0.0;
        self.animation.animated = true;
        self.animation_restore_pending = false;
        self.session.shift_x = indent_for(
            self.effective_index(),
            &self.snapshot,
            self.bounds,
            self.align,
        );
        self.sink.on_event(CarouselEvent::SlideSettled {
            target_index: settled,
        });
        self.rearm_autoplay();
    }

    /// Rebuilds geometry, bounds, and the rest offset for the current index.
    ///
    /// Without an override, easing is kept only when the previously rendered
    /// offset was already exactly at a valid position; otherwise the layer
    /// snaps for one cycle and `frame_rendered` restores easing.
    fn remeasure<M: SlideMeasurer>(
        &mut self,
        measurer: &M,
        animation_override: Option<bool>,
    ) -> CarouselResult<()> {
        self.snapshot = measure_layout(measurer, self.slide_count, self.slide_width.is_custom())?;
        self.bounds = compute_bounds(&self.snapshot, self.align);
        trace!(
            slides = self.snapshot.slide_count(),
            layer_width = self.snapshot.layer_width,
            min = self.bounds.min,
            max = self.bounds.max,
            "layout re-measured"
        );
        self.reconcile_index();

        let shift_x = indent_for(
            self.effective_index(),
            &self.snapshot,
            self.bounds,
            self.align,
        );
        if self.session.shift_x != shift_x {
            let was_valid = self.session.shift_x == self.bounds.clamp(self.session.shift_x);
            let animated = animation_override.unwrap_or(was_valid);
            self.session.shift_x = shift_x;
            self.animation.animated = animated;
            self.animation_restore_pending = !animated;
        }
        Ok(())
    }

    /// Clamps an out-of-range index. Uncontrolled owners are fixed in place;
    /// controlled owners are asked to self-correct through one `Change`
    /// notification per divergence.
    fn reconcile_index(&mut self) {
        let count = self.snapshot.slide_count();
        // With no slides there is no valid target; leave the index as is.
        if count == 0 {
            self.correction_reported = false;
            return;
        }

        let raw = self.index.raw();
        let clamped = raw.min(count - 1);
        if raw == clamped {
            self.correction_reported = false;
            return;
        }

        if self.index.is_controlled() {
            if !self.correction_reported {
                self.correction_reported = true;
                warn!(supplied = raw, clamped, "controlled index out of range");
                self.sink.on_event(CarouselEvent::Change { index: clamped });
            }
        } else {
            self.index.store(clamped);
            self.sink.on_event(CarouselEvent::Change { index: clamped });
        }
    }

    fn rearm_autoplay(&mut self) {
        self.autoplay
            .rearm(self.snapshot.slide_count(), self.session.dragging, self.started);
    }
}
