use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element that must be on screen before it counts as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// Browsers report ratios like 0.0999 on a rising 0.1 crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Observer(format!("{:?}", value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerOptions {
    pub threshold: f64,
    pub retrigger: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            retrigger: true,
        }
    }
}

impl TrackerOptions {
    pub fn new(threshold: f64, retrigger: bool) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            retrigger,
        }
    }
}

/// Clamps a threshold into `[0, 1]`. NaN falls back to the default.
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Whether an observer entry counts as "entered" for the given threshold.
///
/// The rounding slack only applies while the ratio is rising, so an exit
/// just below the threshold still hides the element.
pub fn crosses(intersecting: bool, ratio: f64, previous_ratio: f64, threshold: f64) -> bool {
    if !intersecting {
        return false;
    }
    let slack = if ratio > previous_ratio { RATIO_TOLERANCE } else { 0.0 };
    ratio + slack >= threshold
}

/// Visibility flag of a single observed element.
///
/// With `retrigger` the flag mirrors the latest intersection report. Without
/// it the flag latches on the first report of `true`. Once released, reports
/// are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityTracker {
    retrigger: bool,
    visible: bool,
    released: bool,
}

impl VisibilityTracker {
    pub fn new(retrigger: bool) -> Self {
        Self::with_state(retrigger, false)
    }

    /// Starts from a flag carried over from an earlier observation.
    pub fn with_state(retrigger: bool, visible: bool) -> Self {
        Self {
            retrigger,
            visible,
            released: false,
        }
    }

    /// Records one intersection report. Returns true if the flag changed.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.released {
            return false;
        }
        let next = if self.retrigger {
            intersecting
        } else {
            self.visible || intersecting
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// A live observation of one element. Dropping it disconnects the observer.
struct Observation {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<VisibilityTracker>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.tracker.borrow_mut().release();
        self.observer.disconnect();
        debug!("Released viewport observer");
    }
}

fn observe(
    element: &Element,
    options: TrackerOptions,
    current: bool,
    on_change: Callback<bool>,
) -> Result<Observation, ObserveError> {
    let tracker = Rc::new(RefCell::new(VisibilityTracker::with_state(
        options.retrigger,
        current,
    )));
    let threshold = options.threshold;

    let callback = {
        let tracker = tracker.clone();
        let mut last_ratio = 0.0;
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    let ratio = entry.intersection_ratio();
                    let entered = crosses(entry.is_intersecting(), ratio, last_ratio, threshold);
                    last_ratio = ratio;
                    let mut tracker = tracker.borrow_mut();
                    if tracker.record(entered) {
                        on_change.emit(tracker.is_visible());
                    }
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    debug!(
        "Observing element (threshold {}, retrigger {})",
        threshold, options.retrigger
    );

    Ok(Observation {
        observer,
        tracker,
        _callback: callback,
    })
}

/// Tracks whether the element behind `node` is on screen.
///
/// The observer is rebuilt whenever `node` or `options` change and
/// disconnected when the component unmounts. A rebuilt observer picks up the
/// current flag. A node that is not mounted leaves the flag untouched.
#[hook]
pub fn use_visibility(node: NodeRef, options: TrackerOptions) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        let current = *visible;
        use_effect_with_deps(
            move |(node, options)| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let on_change = Callback::from(move |flag: bool| setter.set(flag));
                    match observe(&element, *options, current, on_change) {
                        Ok(observation) => Some(observation),
                        Err(e) => {
                            warn!("Scroll reveal disabled: {}", e);
                            None
                        }
                    }
                });
                move || drop(observation)
            },
            (node, options),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrigger_follows_every_report() {
        let mut tracker = VisibilityTracker::new(true);
        assert!(!tracker.is_visible());

        for round in 0..5 {
            assert!(tracker.record(true), "enter in round {}", round);
            assert!(tracker.is_visible());
            assert!(tracker.record(false), "exit in round {}", round);
            assert!(!tracker.is_visible());
        }
    }

    #[test]
    fn retrigger_ignores_repeated_state() {
        let mut tracker = VisibilityTracker::new(true);
        assert!(!tracker.record(false));
        assert!(tracker.record(true));
        assert!(!tracker.record(true));
        assert!(tracker.is_visible());
    }

    #[test]
    fn latch_stays_visible_after_first_entry() {
        let mut tracker = VisibilityTracker::new(false);
        assert!(!tracker.record(false));
        assert!(!tracker.is_visible());

        assert!(tracker.record(true));
        for intersecting in [false, true, false, false] {
            assert!(!tracker.record(intersecting));
            assert!(tracker.is_visible());
        }
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut latched = VisibilityTracker::new(false);
        let mut mirrored = VisibilityTracker::new(true);
        for _ in 0..10 {
            latched.record(false);
            mirrored.record(false);
        }
        assert!(!latched.is_visible());
        assert!(!mirrored.is_visible());
    }

    #[test]
    fn released_tracker_ignores_reports() {
        let mut tracker = VisibilityTracker::new(true);
        tracker.record(true);
        tracker.release();

        assert!(tracker.is_released());
        assert!(!tracker.record(false));
        assert!(tracker.is_visible());

        let mut hidden = VisibilityTracker::new(false);
        hidden.release();
        assert!(!hidden.record(true));
        assert!(!hidden.is_visible());
    }

    #[test]
    fn rebuilt_tracker_continues_from_current_flag() {
        let mut old = VisibilityTracker::new(true);
        assert!(old.record(true));
        let mut shown = old.is_visible();
        old.release();

        let mut rebuilt = VisibilityTracker::with_state(true, shown);
        if rebuilt.record(false) {
            shown = rebuilt.is_visible();
        }
        assert!(!shown, "off-screen report after a rebuild must hide the element");

        let mut latched = VisibilityTracker::with_state(false, true);
        assert!(!latched.record(false));
        assert!(latched.is_visible());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(clamp_threshold(0.25), 0.25);
        assert_eq!(clamp_threshold(-1.0), 0.0);
        assert_eq!(clamp_threshold(3.0), 1.0);
        assert_eq!(clamp_threshold(f64::NAN), DEFAULT_THRESHOLD);
        assert_eq!(TrackerOptions::new(7.0, false).threshold, 1.0);
    }

    #[test]
    fn default_options() {
        let options = TrackerOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert!(options.retrigger);
    }

    #[test]
    fn crossing_needs_intersection_and_ratio() {
        assert!(crosses(true, 0.5, 0.0, 0.1));
        assert!(crosses(true, 0.0999, 0.0, 0.1));
        assert!(!crosses(true, 0.05, 0.0, 0.1));
        assert!(!crosses(false, 0.5, 0.0, 0.1));
        assert!(crosses(true, 0.0, 0.0, 0.0));
    }

    #[test]
    fn falling_ratio_gets_no_slack() {
        assert!(!crosses(true, 0.0995, 0.4, 0.1));
        assert!(crosses(true, 0.0995, 0.02, 0.1));
        assert!(crosses(true, 0.1, 0.4, 0.1));
    }
}
