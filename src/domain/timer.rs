use std::fmt::Debug;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// One-shot deadlines. A firing deadline delivers `Event::SessionTimedOut { epoch }` to the
/// inbox the timer was registered with.
pub trait Timer: Debug + Send + Sync {
    fn schedule(&self, after: Duration, epoch: u64) -> TimerHandle;

    fn cancel(&self, handle: TimerHandle);
}
