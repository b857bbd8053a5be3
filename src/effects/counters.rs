use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use super::observer::{select_all, ViewportWatcher};

const DURATION_MS: f64 = 2_000.0;
const TICK_MS: u32 = 16;

type IntervalHandle = Rc<RefCell<Option<Interval>>>;

/// Fixed-duration count-up: the floor of a linear accumulator, clamped so
/// the last displayed value is exactly the target.
pub struct CounterAnim {
    target: u64,
    current: f64,
    step: f64,
}

impl CounterAnim {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            step: target as f64 / (DURATION_MS / TICK_MS as f64),
        }
    }

    /// Advances one tick; returns the value to display and whether the
    /// animation has finished.
    pub fn tick(&mut self) -> (u64, bool) {
        self.current += self.step;
        if self.current >= self.target as f64 {
            (self.target, true)
        } else {
            (self.current as u64, false)
        }
    }
}

/// Counts `[data-counter]` elements up from zero on first visibility.
pub struct AnimatedCounters {
    _watcher: ViewportWatcher,
    running: Rc<RefCell<Vec<IntervalHandle>>>,
}

impl AnimatedCounters {
    pub fn mount(document: &Document) -> Option<Self> {
        let elements = select_all(document, "[data-counter]");
        if elements.is_empty() {
            return None;
        }
        let running: Rc<RefCell<Vec<IntervalHandle>>> = Rc::new(RefCell::new(Vec::new()));
        let watcher = {
            let running = running.clone();
            ViewportWatcher::new(0.5, "0px", move |el: Element| {
                let target = el
                    .get_attribute("data-counter")
                    .and_then(|t| t.parse::<u64>().ok());
                let Some(target) = target else {
                    log::warn!("counter element without a numeric target");
                    return;
                };
                running.borrow_mut().push(start(el, target));
            })?
        };
        for el in &elements {
            watcher.observe(el);
        }
        Some(Self {
            _watcher: watcher,
            running,
        })
    }
}

fn start(el: Element, target: u64) -> IntervalHandle {
    let mut anim = CounterAnim::new(target);
    let handle: IntervalHandle = Rc::new(RefCell::new(None));
    let interval = Interval::new(TICK_MS, {
        let handle = handle.clone();
        move || {
            let (value, done) = anim.tick();
            el.set_text_content(Some(&value.to_string()));
            if done {
                // Self-cancel: dropping the interval clears the timer.
                if let Some(interval) = handle.borrow_mut().take() {
                    drop(interval);
                }
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
    handle
}

impl Drop for AnimatedCounters {
    fn drop(&mut self) {
        for handle in self.running.borrow_mut().drain(..) {
            if let Some(interval) = handle.borrow_mut().take() {
                drop(interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CounterAnim;

    fn run(target: u64) -> Vec<u64> {
        let mut anim = CounterAnim::new(target);
        let mut seen = Vec::new();
        loop {
            let (value, done) = anim.tick();
            seen.push(value);
            if done {
                return seen;
            }
            assert!(seen.len() < 1_000, "animation for {target} never finished");
        }
    }

    #[test]
    fn final_value_is_exactly_the_target() {
        for target in [0, 1, 7, 128, 4_321, 1_000_000] {
            assert_eq!(run(target).last().copied(), Some(target));
        }
    }

    #[test]
    fn displayed_values_never_decrease() {
        for target in [1, 7, 128, 4_321] {
            let seen = run(target);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {target}");
        }
    }

    #[test]
    fn two_second_duration_at_sixteen_ms_ticks() {
        // 2000ms / 16ms = 125 steps; float error may add one.
        let ticks = run(4_321).len();
        assert!((125..=126).contains(&ticks), "took {ticks} ticks");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(0), [0]);
    }
}
