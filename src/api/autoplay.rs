use std::cell::RefCell;
use std::rc::Rc;

/// Cancelable one-shot scheduler owned by the host.
///
/// `arm` replaces any pending schedule; `disarm` must be idempotent. The host
/// callback is expected to call `CarouselEngine::autoplay_tick` when the
/// schedule fires.
pub trait AutoplayScheduler {
    fn arm(&mut self, after_ms: u64);

    fn disarm(&mut self);
}

/// Scheduler that never fires; the default for hosts without autoplay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScheduler;

impl AutoplayScheduler for NullScheduler {
    fn arm(&mut self, _after_ms: u64) {}

    fn disarm(&mut self) {}
}

/// Observable schedule snapshot of a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManualScheduleState {
    /// Delay of the pending one-shot, `None` when disarmed.
    pub pending_ms: Option<u64>,
    pub arm_count: usize,
    pub disarm_count: usize,
}

/// Recording scheduler for deterministic hosts and tests.
///
/// Clones share state, so a host can keep one handle while the engine owns
/// another and drive the "timer" from a test clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualScheduleState>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ManualScheduleState {
        *self.state.borrow()
    }
}

impl AutoplayScheduler for ManualScheduler {
    fn arm(&mut self, after_ms: u64) {
        let mut state = self.state.borrow_mut();
        state.pending_ms = Some(after_ms);
        state.arm_count += 1;
    }

    fn disarm(&mut self) {
        let mut state = self.state.borrow_mut();
        state.pending_ms = None;
        state.disarm_count += 1;
    }
}

/// Schedules periodic advancement through the engine commit path.
///
/// Armed only while advancing is meaningful: a positive interval, at least
/// two slides, the engine started, and no drag in flight. Re-armed after
/// every committed index change and on interval changes, so the interval
/// always measures from the most recent settle.
pub(super) struct AutoplayDriver {
    scheduler: Box<dyn AutoplayScheduler>,
    interval_ms: u64,
    armed: bool,
}

impl core::fmt::Debug for AutoplayDriver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoplayDriver")
            .field("interval_ms", &self.interval_ms)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

impl AutoplayDriver {
    pub(super) fn new(interval_ms: u64) -> Self {
        Self {
            scheduler: Box::new(NullScheduler),
            interval_ms,
            armed: false,
        }
    }

    pub(super) fn set_scheduler(&mut self, scheduler: Box<dyn AutoplayScheduler>) {
        // A schedule pending on the previous scheduler must not fire against
        // a replaced one.
        self.disarm();
        self.scheduler = scheduler;
    }

    #[must_use]
    pub(super) fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub(super) fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    pub(super) fn rearm(&mut self, slide_count: usize, dragging: bool, started: bool) {
        if started && !dragging && self.interval_ms > 0 && slide_count >= 2 {
            self.scheduler.arm(self.interval_ms);
            self.armed = true;
        } else {
            self.disarm();
        }
    }

    /// Unconditional cancel; idempotent so every teardown path can call it.
    pub(super) fn disarm(&mut self) {
        self.scheduler.disarm();
        self.armed = false;
    }

    #[must_use]
    pub(super) fn is_armed(&self) -> bool {
        self.armed
    }
}
