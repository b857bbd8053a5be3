use super::scheduler::Sleep;

/// Simulated network latency before the form reports success.
pub const SUBMIT_LATENCY_MS: u32 = 2_000;
/// How long the success message stays on screen.
pub const SUCCESS_VISIBLE_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitPhase {
    /// The submit control is disabled and its label swapped.
    Sending,
    /// Latency elapsed: fields reset, success message shown.
    Delivered,
    /// The success message is hidden again.
    Cleared,
}

/// Drives the simulated submission. The caller applies each phase to the UI;
/// this function owns only the ordering and the delays.
pub async fn run_submission<S: Sleep>(sleep: &S, mut on_phase: impl FnMut(SubmitPhase)) {
    on_phase(SubmitPhase::Sending);
    sleep.sleep(SUBMIT_LATENCY_MS).await;
    on_phase(SubmitPhase::Delivered);
    sleep.sleep(SUCCESS_VISIBLE_MS).await;
    on_phase(SubmitPhase::Cleared);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{run_submission, SubmitPhase, SUBMIT_LATENCY_MS, SUCCESS_VISIBLE_MS};
    use crate::utils::scheduler::{Sleep, SleepFuture};

    #[derive(Default)]
    struct InstantSleep {
        slept: RefCell<Vec<u32>>,
    }

    impl Sleep for InstantSleep {
        fn sleep(&self, ms: u32) -> SleepFuture {
            self.slept.borrow_mut().push(ms);
            Box::pin(async {})
        }
    }

    #[test]
    fn phases_and_delays_run_in_order() {
        let sleep = InstantSleep::default();
        let mut phases = Vec::new();
        futures::executor::block_on(run_submission(&sleep, |phase| phases.push(phase)));
        assert_eq!(
            phases,
            [
                SubmitPhase::Sending,
                SubmitPhase::Delivered,
                SubmitPhase::Cleared
            ]
        );
        assert_eq!(
            *sleep.slept.borrow(),
            [SUBMIT_LATENCY_MS, SUCCESS_VISIBLE_MS]
        );
    }

    #[test]
    fn success_is_only_reached_after_the_latency_sleep() {
        let sleep = InstantSleep::default();
        let delivered_after = RefCell::new(None);
        futures::executor::block_on(run_submission(&sleep, |phase| {
            if phase == SubmitPhase::Delivered {
                *delivered_after.borrow_mut() = Some(sleep.slept.borrow().len());
            }
        }));
        assert_eq!(*delivered_after.borrow(), Some(1));
    }
}
