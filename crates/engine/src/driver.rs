//! Timer driver - delivers one tick per game second while the game is playing.
//!
//! The driver owns a tokio interval task that feeds an mpsc channel. It is
//! started when the session becomes playable and aborted as soon as it is
//! paused or over; restarting resets the interval phase. Each run carries a
//! generation number so ticks queued before a stop can be told apart from
//! ticks of the current run.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Queued ticks beyond this are back-pressured onto the interval
const TICK_QUEUE: usize = 4;

/// One timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

/// Periodic tick source, cancelled whenever the game stops ticking
#[derive(Debug)]
pub struct TickDriver {
    period: Duration,
    tx: mpsc::Sender<Tick>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl TickDriver {
    /// Create a stopped driver and the receiver its ticks arrive on.
    pub fn new(period: Duration) -> (Self, mpsc::Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(TICK_QUEUE);
        let driver = Self {
            period,
            tx,
            task: None,
            generation: 0,
        };
        (driver, rx)
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start or stop the interval so that it runs exactly when `ticking` is true.
    ///
    /// Must be called from within a tokio runtime.
    pub fn sync(&mut self, ticking: bool) {
        match (ticking, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Whether `tick` belongs to the current run (and not to a cancelled one).
    pub fn accepts(&self, tick: Tick) -> bool {
        self.is_running() && tick.generation == self.generation
    }

    fn start(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let tick = Tick {
            generation: self.generation,
        };
        let tx = self.tx.clone();
        let period = self.period;

        self.task = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(tick).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
