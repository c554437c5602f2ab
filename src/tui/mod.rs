//! Terminal front-end for the card carousel.

pub mod app;
mod components;
mod input;
mod preferences;

use std::{
    io::{stdout, Stdout},
    path::PathBuf,
    time::Instant,
};

use app::App;
pub use components::ThemeMode;
pub use preferences::Preferences;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;
use tracing::info;

use crate::{carousel::NavigatorConfig, deck::Deck, error::Result};

/// Run the viewer. The theme is saved to `preferences` whenever it is toggled.
pub async fn run(
    deck: Deck,
    config: NavigatorConfig,
    mode: ThemeMode,
    preferences: Option<PathBuf>,
) -> Result<()> {
    let mut app = App::new(deck, config, mode)?;
    if let Some(path) = preferences {
        app = app.with_preferences(path);
    }

    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, &mut app).await;
    app.shutdown();

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    info!("Carousel started");

    while !app.should_exit {
        app.update(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            event = event_stream.next() => match event {
                Some(Ok(event)) => app.handle_event(&event, Instant::now()),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            () = sleep(app.next_wakeup(Instant::now())) => {}
        }
    }

    info!("Carousel stopped");
    Ok(())
}
