use clap::{Parser, Subcommand};
use colored::*;
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use taskdeck_cli::{init_tracing, run_server, Config};
use taskdeck_client::ApiClient;
use taskdeck_tui::App;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Taskdeck - task management server and terminal dashboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Open the terminal dashboard against a running server
    Tui {
        /// API base URL (overrides TASKDECK_API_URL)
        #[arg(long)]
        api_url: Option<String>,
        /// Refresh rate in milliseconds
        #[arg(long, default_value = "250")]
        tick_rate: u64,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => serve(port).await,
        Commands::Tui { api_url, tick_rate } => start_tui(api_url, tick_rate).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn serve(port: Option<u16>) -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env()?.with_port(port)?;
    run_server(config).await
}

async fn start_tui(api_url: Option<String>, tick_rate: u64) -> anyhow::Result<()> {
    let api_url = match api_url {
        Some(url) => url,
        None => Config::from_env()?.api_url,
    };
    let client = ApiClient::new(api_url);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client, Duration::from_millis(tick_rate));
    let result = app.run(&mut terminal).await;

    // Restore the terminal even when the app failed
    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Failed to restore terminal: {}", e);
    }

    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
