//! Terminal front-end for the tic-tac-toe engine.
//!
//! This binary is the presentation adapter: it maps input events to board
//! coordinates, drives the engine through its validate/apply/toggle
//! protocol, and renders state snapshots.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use tictactoe_engine::Player;
use ui::CellMap;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "tictactoe_tui", about = "Two-player tic-tac-toe in the terminal")]
struct Cli {
    /// First player as "label:color", e.g. "X:red". Goes first.
    #[arg(long, default_value = "X:red")]
    first: String,

    /// Second player as "label:color", e.g. "O:green".
    #[arg(long, default_value = "O:green")]
    second: String,
}

fn parse_player(spec: &str) -> Result<Player> {
    let (label, color) = spec.split_once(':').unwrap_or((spec, "white"));
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Ok(Player::new(label, color)),
        _ => anyhow::bail!("player label must be a single character: {spec:?}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let players = [parse_player(&cli.first)?, parse_player(&cli.second)?];
    anyhow::ensure!(
        players[0].label() != players[1].label(),
        "players must use distinct labels"
    );

    info!("starting tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(players);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Screen-to-board mapping, rebuilt on every frame so a reset or resize
    // can never leave it stale.
    let mut cells = CellMap::default();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &mut cells))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.reset(),
                KeyCode::Enter | KeyCode::Char(' ') => app.play_at_cursor(),
                code => app.move_cursor(code),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(coord) = cells.hit(mouse.column, mouse.row) {
                    app.play(coord);
                }
            }
            _ => {}
        }
    }
}
