use gloo_timers::callback::Interval;

use crate::config;
use crate::countdown::CountdownAction;

/// Something that can call back on a fixed period until the returned handle
/// is dropped.
pub trait IntervalScheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers. Dropping the [`Interval`] clears it.
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || callback())
    }
}

/// Starts the once-per-second countdown ticks. Ticks stop as soon as the
/// returned handle is dropped.
pub fn schedule_ticks<S, F>(scheduler: &S, sink: F) -> S::Handle
where
    S: IntervalScheduler,
    F: Fn(CountdownAction) + 'static,
{
    scheduler.every(
        config::TICK_PERIOD_MS,
        Box::new(move || sink(CountdownAction::Tick)),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::countdown::Countdown;

    type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

    struct Timer {
        period: u64,
        next_due: u64,
        callback: Weak<RefCell<Box<dyn FnMut()>>>,
    }

    /// Fake clock: time only moves when the test calls `advance`.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<u64>,
        timers: RefCell<Vec<Timer>>,
    }

    impl IntervalScheduler for ManualScheduler {
        type Handle = Callback;

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Callback {
            let handle = Rc::new(RefCell::new(callback));
            self.timers.borrow_mut().push(Timer {
                period: u64::from(period_ms),
                next_due: self.now.get() + u64::from(period_ms),
                callback: Rc::downgrade(&handle),
            });
            handle
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let due = {
                    let mut timers = self.timers.borrow_mut();
                    timers.retain(|t| t.callback.strong_count() > 0);
                    let next = timers
                        .iter_mut()
                        .filter(|t| t.next_due <= target)
                        .min_by_key(|t| t.next_due);
                    match next {
                        Some(timer) => {
                            let at = timer.next_due;
                            timer.next_due += timer.period;
                            timer.callback.upgrade().map(|cb| (at, cb))
                        }
                        None => None,
                    }
                };
                match due {
                    Some((at, callback)) => {
                        self.now.set(at);
                        let mut call = callback.borrow_mut();
                        (*call)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    fn mounted_clock(
        scheduler: &ManualScheduler,
        start: Countdown,
    ) -> (Rc<Cell<Countdown>>, Callback) {
        let state = Rc::new(Cell::new(start));
        let sink_state = state.clone();
        let handle = schedule_ticks(scheduler, move |action| match action {
            CountdownAction::Tick => sink_state.set(sink_state.get().tick()),
        });
        (state, handle)
    }

    #[test]
    fn ticks_once_per_elapsed_second() {
        let scheduler = ManualScheduler::default();
        let (state, _handle) = mounted_clock(&scheduler, Countdown::new(2, 14, 45, 0));

        scheduler.advance(999);
        assert_eq!(state.get(), Countdown::new(2, 14, 45, 0));
        scheduler.advance(1);
        assert_eq!(state.get(), Countdown::new(2, 14, 44, 59));
        scheduler.advance(2_700 * 1_000);
        assert_eq!(state.get(), Countdown::new(2, 13, 59, 59));
    }

    #[test]
    fn no_ticks_after_teardown() {
        let scheduler = ManualScheduler::default();
        let (state, handle) = mounted_clock(&scheduler, Countdown::new(0, 0, 10, 0));

        scheduler.advance(3_000);
        assert_eq!(state.get(), Countdown::new(0, 0, 9, 57));

        drop(handle);
        scheduler.advance(60_000);
        assert_eq!(state.get(), Countdown::new(0, 0, 9, 57));
        assert!(scheduler.timers.borrow().is_empty());
    }

    #[test]
    fn instances_tick_independently() {
        let scheduler = ManualScheduler::default();
        let (first, first_handle) = mounted_clock(&scheduler, Countdown::new(0, 0, 1, 0));
        scheduler.advance(5_000);
        let (second, _second_handle) = mounted_clock(&scheduler, Countdown::new(0, 0, 1, 0));
        scheduler.advance(5_000);

        assert_eq!(first.get(), Countdown::new(0, 0, 0, 50));
        assert_eq!(second.get(), Countdown::new(0, 0, 0, 55));

        drop(first_handle);
        scheduler.advance(5_000);
        assert_eq!(first.get(), Countdown::new(0, 0, 0, 50));
        assert_eq!(second.get(), Countdown::new(0, 0, 0, 50));
    }

    #[test]
    fn finished_clock_holds_at_zero() {
        let scheduler = ManualScheduler::default();
        let (state, _handle) = mounted_clock(&scheduler, Countdown::new(0, 0, 0, 3));
        scheduler.advance(30_000);
        assert_eq!(state.get(), Countdown::ZERO);
    }
}
