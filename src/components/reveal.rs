use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_OFFSET;

/// True once an element whose top edge sits at `top` (relative to the
/// viewport) has scrolled far enough up to be shown. Unknown viewport sizes
/// reveal straight away so content is never stuck hidden.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return true;
    }
    top < viewport_height * (1.0 - REVEAL_OFFSET)
}

/// Remembers whether an element has been revealed. Fires at most once.
#[derive(Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Returns true only on the observation that reveals the element.
    pub fn observe(&mut self, top: f64, viewport_height: f64, on_mount: bool) -> bool {
        if self.fired {
            return false;
        }
        self.fired = on_mount || should_reveal(top, viewport_height);
        self.fired
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    FadeUp,
    FadeLeft,
    SlideFromRight,
    Grow,
    Pop,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-up",
            Motion::FadeLeft => "reveal-left",
            Motion::SlideFromRight => "reveal-right",
            Motion::Grow => "reveal-grow",
            Motion::Pop => "reveal-pop",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Motion::FadeUp)]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Play on mount instead of waiting for the element to scroll into view.
    #[prop_or_default]
    pub on_mount: bool,
    #[prop_or_default]
    pub children: Children,
}

/// One-shot entrance animation. Starts hidden, gains `revealed` the first time
/// it enters the viewport and keeps it from then on.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let on_mount = props.on_mount;
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(RevealLatch::default()));
                let registered: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

                let check = {
                    let latch = latch.clone();
                    let registered = registered.clone();
                    move || {
                        if let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) {
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let top = element.get_bounding_client_rect().top();
                            if latch.borrow_mut().observe(top, viewport_height, on_mount) {
                                revealed.set(true);
                                // Nothing left to wait for, stop listening
                                if let Some(function) = registered.borrow_mut().take() {
                                    let _ = window.remove_event_listener_with_callback("scroll", &function);
                                }
                            }
                        }
                    }
                };

                // Initial check, covers anything already on screen
                check();

                let window = web_sys::window();
                let scroll_callback = match &window {
                    Some(window) if !latch.borrow().fired() => {
                        let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                        let function: Function = scroll_callback.as_ref().unchecked_ref::<Function>().clone();
                        match window.add_event_listener_with_callback("scroll", &function) {
                            Ok(()) => {
                                *registered.borrow_mut() = Some(function);
                                Some(scroll_callback)
                            }
                            Err(_) => {
                                log::warn!("Could not register scroll listener for reveal");
                                None
                            }
                        }
                    }
                    _ => None,
                };

                // The closure lives until unmount even if it already detached
                // itself; it must not be freed from inside its own call.
                move || {
                    if let (Some(window), Some(function)) = (window, registered.borrow_mut().take()) {
                        let _ = window.remove_event_listener_with_callback("scroll", &function);
                    }
                    drop(scroll_callback);
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.motion.class(),
                (*revealed).then(|| "revealed"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_past_the_offset_line() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(719.0, 800.0));
        assert!(!should_reveal(721.0, 800.0));
        assert!(!should_reveal(1_500.0, 800.0));
    }

    #[test]
    fn elements_above_the_viewport_count_as_seen() {
        assert!(should_reveal(-2_000.0, 800.0));
    }

    #[test]
    fn unknown_viewport_reveals_immediately() {
        assert!(should_reveal(5_000.0, 0.0));
    }

    #[test]
    fn latch_fires_once_then_stays_quiet() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(2_000.0, 800.0, false));
        assert!(!latch.fired());
        assert!(latch.observe(300.0, 800.0, false));
        assert!(latch.fired());
        assert!(!latch.observe(100.0, 800.0, false));
        assert!(!latch.observe(-500.0, 800.0, true));
        assert!(latch.fired());
    }

    #[test]
    fn on_mount_latch_fires_regardless_of_position() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(5_000.0, 800.0, true));
        assert!(!latch.observe(5_000.0, 800.0, true));
    }
}
