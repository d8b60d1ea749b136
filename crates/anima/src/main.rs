use std::io::stdout;

use anima_config::Config;
use anima_core::Size;
use crossterm::execute;
use crossterm::terminal::{self as term, SetSize};

mod app;
mod event;
mod logging;
mod ticker;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let log_path = logging::init(&config)?;
    tracing::info!(?log_path, title = %config.title, "starting");

    let resize_terminal = config.resize_terminal;
    let terminal = ratatui::init();
    let app = App::new(config);
    let original_size = if resize_terminal {
        fit_terminal(app.preferred_size())
    } else {
        None
    };

    let result = app.run(terminal);
    ratatui::restore();

    if let Some((cols, rows)) = original_size
        && let Err(err) = execute!(stdout(), SetSize(cols, rows))
    {
        tracing::warn!(error = %err, "failed to restore terminal size");
    }
    result
}

/// Ask the terminal to grow to fit `preferred` plus the border. Returns the
/// size to restore on exit if the request was sent. Terminals are free to
/// ignore the request.
fn fit_terminal(preferred: Size) -> Option<(u16, u16)> {
    let original = match term::size() {
        Ok(size) => size,
        Err(err) => {
            tracing::warn!(error = %err, "failed to query terminal size");
            return None;
        }
    };

    let (cols, rows) = preferred.to_cells();
    let wanted = (cols.saturating_add(2), rows.saturating_add(2));
    if wanted == original {
        return None;
    }

    match execute!(stdout(), SetSize(wanted.0, wanted.1)) {
        Ok(()) => {
            tracing::debug!(?original, ?wanted, "requested terminal resize");
            Some(original)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to resize terminal");
            None
        }
    }
}
