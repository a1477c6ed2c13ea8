use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
}

/// Polls the terminal on a background thread and forwards events.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        // Resize is picked up by the next draw.
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("Terminal read failed: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("Terminal poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
