//! Cancellable repeating task

use parking_lot::Mutex;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Identifies one run of a [`RepeatingTask`].
///
/// A ticket goes stale as soon as the task is stopped or restarted. Aborting
/// cannot interrupt a tick that is already executing, so ticks that block
/// (on a lock, say) re-check [`Ticket::is_live`] before acting.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_live(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// A repeating tick running on a Tokio runtime.
///
/// At most one task runs at a time. The first tick fires one full period
/// after [`RepeatingTask::start`]; the task ends when the tick returns
/// [`ControlFlow::Break`] or when it is stopped.
#[derive(Debug, Default)]
pub struct RepeatingTask {
    handle: Mutex<Option<JoinHandle<()>>>,
    generation: Arc<AtomicU64>,
}

impl RepeatingTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking unless a task is already running.
    ///
    /// Returns whether a new task was spawned.
    pub fn start<F>(&self, runtime: &Handle, period: Duration, mut tick: F) -> bool
    where
        F: FnMut(&Ticket) -> ControlFlow<()> + Send + 'static,
    {
        let mut handle = self.handle.lock();
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return false;
        }
        let ticket = Ticket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            current: Arc::clone(&self.generation),
        };

        // The interval is created here, not inside the task, so the first
        // deadline is measured from the call rather than from the first poll.
        let _guard = runtime.enter();
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        *handle = Some(runtime.spawn(async move {
            loop {
                interval.tick().await;
                if !ticket.is_live() || tick(&ticket).is_break() {
                    break;
                }
            }
        }));
        true
    }

    /// Abort the running task and invalidate its ticket. Returns whether
    /// one was running.
    pub fn stop(&self) -> bool {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.handle.lock().take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                was_running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const PERIOD: Duration = Duration::from_millis(100);

    /// Sleep just past the next `n` deadlines
    async fn wait_ticks(n: u32) {
        time::sleep(PERIOD * n + Duration::from_millis(1)).await;
    }

    fn counter_task(task: &RepeatingTask, count: &Arc<AtomicUsize>) -> bool {
        let count = Arc::clone(count);
        task.start(&Handle::current(), PERIOD, move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let task = RepeatingTask::new();
        let count = Arc::new(AtomicUsize::new(0));
        assert!(counter_task(&task, &count));
        assert!(task.is_running());

        time::sleep(PERIOD / 2).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        // now at 251ms: ticks at 100 and 200
        wait_ticks(2).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_is_noop() {
        let task = RepeatingTask::new();
        let count = Arc::new(AtomicUsize::new(0));
        assert!(counter_task(&task, &count));
        assert!(!counter_task(&task, &count));

        wait_ticks(1).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_and_restart() {
        let task = RepeatingTask::new();
        let count = Arc::new(AtomicUsize::new(0));
        counter_task(&task, &count);

        assert!(task.stop());
        assert!(!task.stop());
        assert!(!task.is_running());

        wait_ticks(3).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(counter_task(&task, &count));
        wait_ticks(1).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_break_ends_task() {
        let task = RepeatingTask::new();
        task.start(&Handle::current(), PERIOD, |_| ControlFlow::Break(()));

        wait_ticks(1).await;
        assert!(!task.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_issues_fresh_ticket() {
        let task = RepeatingTask::new();
        let tickets = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&tickets);
        task.start(&Handle::current(), PERIOD, move |ticket| {
            seen.lock().push(ticket.clone());
            ControlFlow::Continue(())
        });
        wait_ticks(1).await;

        task.stop();
        let seen = Arc::clone(&tickets);
        task.start(&Handle::current(), PERIOD, move |ticket| {
            seen.lock().push(ticket.clone());
            ControlFlow::Continue(())
        });
        wait_ticks(1).await;

        let tickets = tickets.lock();
        assert_eq!(tickets.len(), 2);
        assert!(!tickets[0].is_live());
        assert!(tickets[1].is_live());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_invalidates_tick_in_flight() {
        let task = RepeatingTask::new();
        let gate = Arc::new(Mutex::new(()));
        let entered = Arc::new(AtomicUsize::new(0));
        let applied = Arc::new(AtomicUsize::new(0));

        let held = gate.lock();
        {
            let gate = Arc::clone(&gate);
            let entered = Arc::clone(&entered);
            let applied = Arc::clone(&applied);
            task.start(&Handle::current(), Duration::from_millis(10), move |ticket| {
                entered.fetch_add(1, Ordering::SeqCst);
                let _gate = gate.lock();
                if !ticket.is_live() {
                    return ControlFlow::Break(());
                }
                applied.fetch_add(1, Ordering::SeqCst);
                ControlFlow::Continue(())
            });
        }

        // Wait until a tick is blocked on the gate, then stop underneath it
        for _ in 0..200 {
            if entered.load(Ordering::SeqCst) > 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(entered.load(Ordering::SeqCst), 1);
        assert!(task.stop());
        drop(held);

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(applied.load(Ordering::SeqCst), 0);
        assert!(!task.is_running());
    }
}
