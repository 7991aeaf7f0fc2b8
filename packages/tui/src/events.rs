use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use taskdeck_models::{Task, User};
use tokio::sync::mpsc;

use crate::command::MutationKind;

/// Completed API calls, reported back to the event loop. Errors are carried as
/// display strings; the state only needs to know that the call failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    TasksLoaded {
        generation: u64,
        result: Result<Vec<Task>, String>,
    },
    UsersLoaded {
        generation: u64,
        result: Result<Vec<User>, String>,
    },
    PanelUsersLoaded {
        generation: u64,
        result: Result<Vec<User>, String>,
    },
    MutationFinished {
        kind: MutationKind,
        result: Result<(), String>,
    },
    UserCreated {
        result: Result<User, String>,
    },
}

/// Event types for the TUI application
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Api(ApiEvent),
}

/// Merges terminal input, periodic ticks and API results into one stream
pub struct EventHandler {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let input_sender = sender.clone();

        let handler = tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                if let Ok(true) = event::poll(timeout) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press
                            && input_sender.send(AppEvent::Key(key)).is_err()
                        {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_sender.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            sender,
            receiver,
            handler,
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
