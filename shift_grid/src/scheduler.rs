// scheduler.rs - Periodic tick source running as one sleeping tokio task
//
// The task never touches the grid. It sends `Event::Tick` to the UI thread,
// which applies ticks in order alongside clicks.

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{Notify, mpsc};
use tokio::task::JoinHandle;

use crate::surface::Event;

pub type TickReceiver = mpsc::UnboundedReceiver<Event>;

/// Handle to the running tick task.
pub struct Scheduler {
    period: Duration,
    stop: Arc<Notify>,
    task: JoinHandle<()>,
    stopped: bool,
}

impl Scheduler {
    /// Spawns the tick loop on `runtime`. `wake` is called after every tick
    /// so the UI can schedule a repaint.
    pub fn start<F>(runtime: &Handle, period: Duration, wake: F) -> (Self, TickReceiver)
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(Notify::new());
        let task = runtime.spawn(run_ticks(period, tx, stop.clone(), wake));

        tracing::info!(period_ms = period.as_millis() as u64, "scheduler started");
        let scheduler = Self { period, stop, task, stopped: false };
        (scheduler, rx)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.stopped && !self.task.is_finished()
    }

    /// Cancels the loop before its next tick.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.stop.notify_one();
            tracing::info!("scheduler stopped");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticks<F>(period: Duration, tx: mpsc::UnboundedSender<Event>, stop: Arc<Notify>, wake: F)
where
    F: Fn() + Send + 'static,
{
    loop {
        tokio::select! {
            _ = stop.notified() => break,
            _ = tokio::time::sleep(period) => {}
        }

        if tx.send(Event::Tick).is_err() {
            tracing::debug!("tick receiver dropped, ending tick loop");
            break;
        }
        wake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::sleep;

    fn drain(rx: &mut TickReceiver) -> usize {
        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event, Event::Tick);
            ticks += 1;
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let (scheduler, mut rx) = Scheduler::start(&Handle::current(), Duration::from_millis(300), || {});
        assert!(scheduler.is_running());

        sleep(Duration::from_millis(299)).await;
        assert_eq!(drain(&mut rx), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_and_wakes_ui() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let (_scheduler, mut rx) = Scheduler::start(&Handle::current(), Duration::from_millis(300), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(950)).await;
        assert_eq!(drain(&mut rx), 3);
        assert_eq!(wakes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_further_ticks() {
        let (mut scheduler, mut rx) = Scheduler::start(&Handle::current(), Duration::from_millis(300), || {});
        sleep(Duration::from_millis(650)).await;
        assert_eq!(drain(&mut rx), 2);

        scheduler.stop();
        assert!(!scheduler.is_running());

        sleep(Duration::from_secs(5)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[tokio::test(start_paused = true)]
    async fn loop_ends_when_receiver_dropped() {
        let (scheduler, rx) = Scheduler::start(&Handle::current(), Duration::from_millis(300), || {});
        drop(rx);

        sleep(Duration::from_millis(400)).await;
        tokio::task::yield_now().await;
        assert!(!scheduler.is_running());
    }
}
