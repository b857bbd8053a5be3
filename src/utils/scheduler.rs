use std::future::Future;
use std::pin::Pin;

use gloo_timers::future::TimeoutFuture;

pub type SleepFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Timer dependency for flows with simulated latency. Injected so the flows
/// can be driven in tests without wall-clock waits.
pub trait Sleep {
    fn sleep(&self, ms: u32) -> SleepFuture;
}

/// Browser timer implementation.
pub struct TimerSleep;

impl Sleep for TimerSleep {
    fn sleep(&self, ms: u32) -> SleepFuture {
        Box::pin(TimeoutFuture::new(ms))
    }
}
