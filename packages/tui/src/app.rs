use crate::command::Command;
use crate::effects;
use crate::events::{AppEvent, EventHandler};
use crate::state::DashboardState;
use crate::ui;
use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use taskdeck_client::ApiClient;
use tokio::sync::mpsc::UnboundedSender;

/// Main TUI application struct
pub struct App {
    pub state: DashboardState,
    client: ApiClient,
    tick_rate: Duration,
}

impl App {
    pub fn new(client: ApiClient, tick_rate: Duration) -> Self {
        Self {
            state: DashboardState::new(),
            client,
            tick_rate,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventHandler::new(self.tick_rate);
        let sender = events.sender();

        let startup = self.state.start();
        self.dispatch(startup, &sender);

        while !self.state.should_quit() {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            let commands = match events.next().await {
                Some(AppEvent::Key(key)) => self.state.handle_key(key),
                Some(AppEvent::Tick) => {
                    self.state.tick();
                    Vec::new()
                }
                Some(AppEvent::Api(event)) => self.state.apply(event),
                None => break,
            };
            self.dispatch(commands, &sender);
        }

        Ok(())
    }

    fn dispatch(&self, commands: Vec<Command>, sender: &UnboundedSender<AppEvent>) {
        for command in commands {
            effects::spawn(&self.client, command, sender.clone());
        }
    }
}
