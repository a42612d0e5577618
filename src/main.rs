//! folio-tui - a terminal dashboard for a personal portfolio
//!
//! This is the main entry point for the folio-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, MIN_TICK_RATE_MS};
use crate::model::Fixtures;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let loaded = Config::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };

    if let Some(path) = logging::log_path(&config) {
        if let Err(e) = logging::init_logging(&path) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }
    info!(version = env!("CARGO_PKG_VERSION"), "folio-tui starting");

    match loaded {
        Ok(Some(_)) => {}
        Ok(None) => write_default_config(&config),
        Err(e) => warn!(error = %format!("{:#}", e), "config unreadable, using defaults"),
    }
    if config.tick_rate_ms < MIN_TICK_RATE_MS {
        warn!(
            tick_rate_ms = config.tick_rate_ms,
            min = MIN_TICK_RATE_MS,
            "tick rate too low, clamped"
        );
    }

    let fixtures = load_fixtures(&config);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, fixtures);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("folio-tui stopped");
    Ok(())
}

/// Write the defaults on first run
fn write_default_config(config: &Config) {
    let Some(path) = Config::config_path() else {
        return;
    };

    match config.save() {
        Ok(()) => info!(path = %path.display(), "wrote default config"),
        Err(e) => warn!(error = %e, "could not write default config"),
    }
}

/// Built-in fixtures unless a seed file is configured and readable
fn load_fixtures(config: &Config) -> Fixtures {
    let Some(path) = &config.fixtures_path else {
        return Fixtures::default();
    };

    match Fixtures::load(path) {
        Ok(fixtures) => {
            info!(path = %path.display(), "loaded fixtures");
            fixtures
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "falling back to built-in fixtures");
            Fixtures::default()
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
