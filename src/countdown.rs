use std::rc::Rc;

use yew::Reducible;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Time left on the offer, kept as the four fields the clock shows.
///
/// Fields stay within their display ranges (`hours < 24`, `minutes < 60`,
/// `seconds < 60`) and the total never grows: [`Countdown::tick`] only ever
/// moves towards [`Countdown::ZERO`], which it never leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown::new(0, 0, 0, 0);

    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.days) * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }

    pub fn is_finished(&self) -> bool {
        *self == Self::ZERO
    }

    /// One second of borrow-style decrement. Each field only borrows from the
    /// next larger one when it is already at zero.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
                ..self
            }
        } else if self.days > 0 {
            Self::new(self.days - 1, 23, 59, 59)
        } else {
            self
        }
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Handing back the same Rc once finished keeps the clock from
            // re-rendering every second at zero.
            CountdownAction::Tick if self.is_finished() => self,
            CountdownAction::Tick => {
                let next = self.tick();
                if next.is_finished() {
                    log::debug!("Offer countdown reached zero");
                }
                Rc::new(next)
            }
        }
    }
}

/// Two-digit rendering used by the clock faces.
pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Countdown {
        fn from_total_seconds(total: u64) -> Self {
            let rest = total % SECONDS_PER_DAY;
            Self {
                days: (total / SECONDS_PER_DAY) as u32,
                hours: (rest / SECONDS_PER_HOUR) as u32,
                minutes: (rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
                seconds: (rest % SECONDS_PER_MINUTE) as u32,
            }
        }
    }

    fn tick_n(mut countdown: Countdown, n: u64) -> Countdown {
        for _ in 0..n {
            countdown = countdown.tick();
        }
        countdown
    }

    #[test]
    fn first_tick_borrows_a_minute() {
        let start = Countdown::new(2, 14, 45, 0);
        assert_eq!(start.tick(), Countdown::new(2, 14, 44, 59));
    }

    #[test]
    fn borrows_across_the_hour_boundary() {
        let start = Countdown::new(2, 14, 45, 0);
        let at_hour = tick_n(start, 45 * 60);
        assert_eq!(at_hour, Countdown::new(2, 14, 0, 0));
        assert_eq!(at_hour.tick(), Countdown::new(2, 13, 59, 59));
    }

    #[test]
    fn borrows_a_day_when_hours_run_out() {
        assert_eq!(Countdown::new(1, 0, 0, 0).tick(), Countdown::new(0, 23, 59, 59));
    }

    #[test]
    fn total_after_n_ticks_saturates_at_zero() {
        let start = Countdown::new(0, 1, 2, 3);
        let total = start.total_seconds();
        for n in [0, 1, 59, 60, 61, 3_722, 3_723, 3_724, 10_000] {
            let after = tick_n(start, n);
            assert_eq!(after.total_seconds(), total.saturating_sub(n), "after {} ticks", n);
            assert_eq!(after, Countdown::from_total_seconds(after.total_seconds()));
        }
    }

    #[test]
    fn from_total_seconds_splits_into_fields() {
        assert_eq!(Countdown::from_total_seconds(90), Countdown::new(0, 0, 1, 30));
        assert_eq!(
            Countdown::from_total_seconds(Countdown::new(2, 14, 45, 0).total_seconds()),
            Countdown::new(2, 14, 45, 0)
        );
    }

    #[test]
    fn zero_is_absorbing() {
        assert_eq!(Countdown::ZERO.tick(), Countdown::ZERO);
        assert_eq!(tick_n(Countdown::new(0, 0, 0, 2), 50), Countdown::ZERO);
        assert!(tick_n(Countdown::new(0, 0, 0, 2), 2).is_finished());
    }

    #[test]
    fn reducer_keeps_the_same_state_once_finished() {
        let finished = Rc::new(Countdown::ZERO);
        let next = finished.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&finished, &next));

        let running = Rc::new(Countdown::new(0, 0, 1, 0));
        assert_eq!(*running.reduce(CountdownAction::Tick), Countdown::new(0, 0, 0, 59));
    }

    #[test]
    fn pad2_zero_pads_single_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(45), "45");
    }

    #[test]
    fn full_run_from_the_offer_start_tracks_the_total() {
        let start = Countdown::new(2, 14, 45, 0);
        let total = start.total_seconds();
        let mut current = start;
        for n in 0..=total + 5 {
            assert_eq!(current.total_seconds(), total.saturating_sub(n), "after {} ticks", n);
            assert!(current.days <= start.days);
            assert!(current.hours < 24 && current.minutes < 60 && current.seconds < 60);
            current = current.tick();
        }
        assert!(current.is_finished());
    }
}
