use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior};

/// One scheduled progress increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub seq: u64,
}

/// A recurring task that stays alive until cancelled or dropped.
pub trait ScheduledTask {
    /// Stops the task. Calling it again is a no-op.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

pub trait Scheduler {
    type Task: ScheduledTask;

    /// Starts delivering a `Tick` to `sender` every `period`, first one after
    /// one full period. An error means no task is running.
    fn schedule_every(&self, period: Duration, sender: Sender<Tick>) -> io::Result<Self::Task>;
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs the timer on its own thread with a current-thread tokio runtime.
#[derive(Clone, Default)]
pub struct TokioScheduler {
    waker: Option<Waker>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `waker` is called after every delivered tick, e.g. to request a repaint.
    pub fn with_waker(waker: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            waker: Some(Arc::new(waker)),
        }
    }
}

impl Scheduler for TokioScheduler {
    type Task = TickerHandle;

    fn schedule_every(&self, period: Duration, sender: Sender<Tick>) -> io::Result<TickerHandle> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let waker = self.waker.clone();

        let thread = std::thread::Builder::new()
            .name("upload-ticker".to_string())
            .spawn(move || {
                rt.block_on(async move {
                    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    let mut seq = 0u64;

                    loop {
                        tokio::select! {
                            _ = &mut cancel_rx => break,
                            _ = interval.tick() => {
                                seq += 1;
                                if sender.send(Tick { seq }).is_err() {
                                    break;
                                }
                                if let Some(waker) = &waker {
                                    waker();
                                }
                            }
                        }
                    }
                    tracing::debug!(ticks = seq, "Ticker stopped");
                });
            })?;

        Ok(TickerHandle {
            cancel: Some(cancel_tx),
            thread: Some(thread),
        })
    }
}

/// Owned handle to a running ticker thread. Dropping it cancels the ticker.
pub struct TickerHandle {
    cancel: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ScheduledTask for TickerHandle {
    fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Ticker thread panicked");
            }
        }
    }

    fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
struct ManualInner {
    started: AtomicUsize,
    cancelled: AtomicUsize,
    unavailable: AtomicBool,
    sender: Mutex<Option<Sender<Tick>>>,
}

/// Scheduler whose ticks are fired by the owner instead of a clock.
///
/// Clones share counters, so a clone kept outside the session can fire ticks
/// and inspect how many tasks were started and cancelled.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<ManualInner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.inner.started.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> usize {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// While set, `schedule_every` fails as if no timer could be started.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Sends one tick to the live task. Returns false if none is running.
    pub fn fire(&self) -> bool {
        let Ok(guard) = self.inner.sender.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(sender) => {
                let seq = self.inner.started.load(Ordering::SeqCst) as u64;
                sender.send(Tick { seq }).is_ok()
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn schedule_every(&self, _period: Duration, sender: Sender<Tick>) -> io::Result<ManualTask> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "manual scheduler is unavailable",
            ));
        }
        self.inner.started.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.inner.sender.lock() {
            *slot = Some(sender);
        }
        Ok(ManualTask {
            inner: Arc::clone(&self.inner),
            active: true,
        })
    }
}

pub struct ManualTask {
    inner: Arc<ManualInner>,
    active: bool,
}

impl ScheduledTask for ManualTask {
    fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.inner.cancelled.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.inner.sender.lock() {
            *slot = None;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
