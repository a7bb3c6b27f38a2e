use yew::prelude::*;

use crate::config;
use crate::countdown::{pad2, Countdown};
use crate::scheduler::{schedule_ticks, BrowserScheduler};

#[derive(Properties, PartialEq)]
struct TimerUnitProps {
    value: u32,
    label: &'static str,
}

#[function_component(TimerUnit)]
fn timer_unit(props: &TimerUnitProps) -> Html {
    html! {
        <div class="timer-unit">
            <div class="timer-face">
                <span class="timer-value">{pad2(props.value)}</span>
            </div>
            <span class="timer-label">{props.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub countdown: Countdown,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let Countdown {
        days,
        hours,
        minutes,
        seconds,
    } = props.countdown;

    html! {
        <div
            class="countdown"
            role="timer"
            aria-live="off"
            data-remaining-seconds={props.countdown.total_seconds().to_string()}
        >
            <TimerUnit value={days} label="Días" />
            <TimerUnit value={hours} label="Horas" />
            <TimerUnit value={minutes} label="Min" />
            <TimerUnit value={seconds} label="Seg" />
            <style>
                {r#"
                .countdown {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .timer-unit {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .timer-face {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    margin-bottom: 0.5rem;
                    background-color: #0f172a;
                }

                .timer-value {
                    font-size: 1.5rem;
                    font-weight: 900;
                    color: #eab308;
                    font-family: ui-monospace, monospace;
                    letter-spacing: -0.05em;
                }

                .timer-label {
                    font-size: 10px;
                    text-transform: uppercase;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    color: #94a3b8;
                }

                @media (min-width: 768px) {
                    .countdown {
                        gap: 1rem;
                    }

                    .timer-face {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 1rem;
                    }

                    .timer-value {
                        font-size: 1.875rem;
                    }

                    .timer-label {
                        font-size: 0.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

/// Offer clock. Starts from [`config::INITIAL_COUNTDOWN`] on every mount and
/// ticks down once a second until it holds at zero.
#[function_component(CountdownClock)]
pub fn countdown_clock() -> Html {
    let countdown = use_reducer(|| config::INITIAL_COUNTDOWN);

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |_| {
                log::debug!("Starting offer countdown");
                let interval = schedule_ticks(&BrowserScheduler, move |action| {
                    dispatcher.dispatch(action)
                });

                move || {
                    log::debug!("Stopping offer countdown");
                    drop(interval);
                }
            },
            (),
        );
    }

    html! {
        <CountdownDisplay countdown={*countdown} />
    }
}
