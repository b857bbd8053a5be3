use gloo_timers::callback::Timeout;

/// Milliseconds since the time origin, from the high-resolution clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Rate limiter: lets an event through at most once per interval. The caller
/// supplies the current time, so the decision itself never touches the DOM.
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

/// Collapses a burst of calls into one, fired after a quiet period.
/// Scheduling drops any pending timeout, which cancels it.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }
}

#[cfg(test)]
mod tests {
    use super::Throttle;

    #[test]
    fn first_event_passes() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(0.0));
    }

    #[test]
    fn events_inside_the_window_are_dropped() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(1000.0));
        assert!(!throttle.ready(1050.0));
        assert!(!throttle.ready(1099.9));
    }

    #[test]
    fn window_reopens_after_the_interval() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(1000.0));
        assert!(!throttle.ready(1099.0));
        assert!(throttle.ready(1100.0));
        assert!(!throttle.ready(1150.0));
    }
}
