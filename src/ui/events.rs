use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    /// Frame tick carrying the time since the previous tick.
    Tick(Duration),
    Resize(u16, u16),
}

/// Reads terminal input on a background thread and interleaves frame ticks.
///
/// All widget state stays on the thread calling [`EventHandler::next`];
/// this thread only forwards events.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }

                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(%err, "failed to read terminal event");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(%err, "failed to poll terminal events");
                        break;
                    }
                }

                let elapsed = last_tick.elapsed();
                if elapsed >= tick_rate {
                    if tx.send(AppEvent::Tick(elapsed)).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
