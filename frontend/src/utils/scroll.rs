use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::js_sys;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    Top,
    /// Element id, without the leading `#`.
    Anchor(String),
    Offset(f64),
}

impl ScrollTarget {
    pub fn anchor(id: &str) -> Self {
        ScrollTarget::Anchor(id.trim_start_matches('#').to_string())
    }
}

struct ScrollState {
    default_duration: f64,
    generation: u64,
    destroyed: bool,
}

impl ScrollState {
    fn is_current(&self, generation: u64) -> bool {
        !self.destroyed && self.generation == generation
    }
}

/// Smooth-scroll handle owned by the application root and handed to every
/// component that scrolls programmatically. Clones share the same state, so
/// a new request from any clone supersedes the animation in flight.
#[derive(Clone)]
pub struct ScrollController {
    state: Rc<RefCell<ScrollState>>,
}

impl PartialEq for ScrollController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollController {
    pub fn new(default_duration: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(ScrollState {
                default_duration,
                generation: 0,
                destroyed: false,
            })),
        }
    }

    pub fn scroll_to(&self, target: ScrollTarget) {
        let duration = self.state.borrow().default_duration;
        self.scroll_to_with_duration(target, duration);
    }

    pub fn scroll_to_with_duration(&self, target: ScrollTarget, duration_secs: f64) {
        if self.is_destroyed() {
            log::warn!("Ignoring scroll to {:?}: controller already destroyed", target);
            return;
        }
        let Some(window) = web_sys::window() else {
            log::warn!("No window available for scrolling");
            return;
        };
        let Some(target_y) = resolve_target(&window, &target) else {
            log::warn!("Scroll target {:?} not found", target);
            return;
        };
        let start_y = window.scroll_y().unwrap_or(0.0);
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };

        if duration_secs <= 0.0 {
            window.scroll_to_with_x_and_y(0.0, target_y);
            return;
        }

        let duration_ms = duration_secs * 1000.0;
        let started = js_sys::Date::now();
        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(config::SCROLL_FRAME_MS).await;
                if !state.borrow().is_current(generation) {
                    return;
                }
                let t = progress(js_sys::Date::now() - started, duration_ms);
                window.scroll_to_with_x_and_y(0.0, position_at(start_y, target_y, t));
                if t >= 1.0 {
                    break;
                }
            }
        });
    }

    /// Cancels the running animation, leaving the page where it is.
    pub fn stop(&self) {
        self.state.borrow_mut().generation += 1;
    }

    pub fn destroy(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.destroyed = true;
        log::info!("Scroll controller destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }
}

fn resolve_target(window: &web_sys::Window, target: &ScrollTarget) -> Option<f64> {
    match target {
        ScrollTarget::Top => Some(0.0),
        ScrollTarget::Offset(y) => Some(y.max(0.0)),
        ScrollTarget::Anchor(id) => {
            let element = window.document()?.get_element_by_id(id)?;
            let current = window.scroll_y().unwrap_or(0.0);
            Some((element.get_bounding_client_rect().top() + current).max(0.0))
        }
    }
}

/// Lenis' default easing curve.
pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn position_at(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * ease(t)
}
