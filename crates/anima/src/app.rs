//! The application loop.

use std::sync::mpsc::{self, Receiver, Sender};

use anima_canvas::{CanvasView, TimedCanvas, animation_for};
use anima_config::Config;
use anima_core::Size;
use ratatui::{
    DefaultTerminal, Frame,
    style::{Style, Stylize},
    text::Line,
    widgets::Block,
};

use crate::event::{Event, InputReader};
use crate::ticker::Ticker;

/// The main application which owns the canvas and everything driving it.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings the application was started with.
    config: Config,
    /// Canvas holding the frame clock.
    canvas: TimedCanvas,
    /// Fixed-rate redraw scheduler.
    ticker: Ticker,
    /// Terminal input forwarder.
    input: InputReader,
    /// Sender handed to the background threads.
    events_tx: Sender<Event>,
    /// Single queue all redraws are serialized through.
    events_rx: Receiver<Event>,
}

impl App {
    /// Construct a new instance of [`App`]. The canvas clock starts here.
    pub fn new(config: Config) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let canvas = TimedCanvas::new(animation_for(config.animation));
        let ticker = Ticker::new(config.frame_interval(), config.start_delay());
        Self {
            running: false,
            config,
            canvas,
            ticker,
            input: InputReader::new(),
            events_tx,
            events_rx,
        }
    }

    /// Size the canvas would like to be shown at.
    pub fn preferred_size(&self) -> Size {
        self.canvas.preferred_size()
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        // Paint once as soon as the canvas is visible, then on every tick
        terminal.draw(|frame| self.render(frame))?;
        self.ticker.start(self.events_tx.clone());
        self.input.start(self.events_tx.clone());
        tracing::info!(
            animation = self.config.animation.name(),
            interval = ?self.ticker.interval(),
            "animation running"
        );

        while self.running {
            match self.events_rx.recv() {
                Ok(Event::Redraw) => {
                    self.ticker.acknowledge();
                    terminal.draw(|frame| self.render(frame))?;
                }
                Ok(Event::Resize(cols, rows)) => {
                    tracing::debug!(cols, rows, "terminal resized");
                    terminal.draw(|frame| self.render(frame))?;
                }
                Ok(Event::Quit) | Err(_) => self.quit(),
            }
        }

        self.ticker.stop();
        self.input.stop();
        tracing::info!(
            frames = self.canvas.frame_count(),
            skipped = self.canvas.skipped_frames(),
            "animation stopped"
        );
        Ok(())
    }

    /// Renders the canvas inside a titled border.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::bordered()
            .title(Line::from(self.config.title.as_str()).centered())
            .title_bottom(Line::from(vec![" q".bold(), " quit ".dark_gray()]).right_aligned())
            .border_style(Style::new().dark_gray());

        let inner = block.inner(area);
        let size = Size::from_cells(inner.width, inner.height);
        let draw_list = self.canvas.draw(size);

        frame.render_widget(CanvasView::new(draw_list, size).block(block), area);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use anima_core::Shape;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render_once(app: &mut App, cols: u16, rows: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    #[test]
    fn test_render_draws_titled_canvas() {
        let mut app = App::new(Config::default());
        let terminal = render_once(&mut app, 82, 32);

        let buffer = terminal.backend().buffer();
        let top: String = (0..82)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("Animation"));
        assert_eq!(app.canvas.frame_count(), 1);
    }

    #[test]
    fn test_canvas_gets_inner_size() {
        let mut app = App::new(Config::default());
        render_once(&mut app, 82, 32);

        match app.canvas.surface().shapes()[0] {
            Shape::Line { x2, y1, .. } => {
                assert_eq!(x2, 640.0);
                assert_eq!(y1, 240.0);
            }
            other => panic!("expected the zero line, got {other:?}"),
        }
    }

    #[test]
    fn test_each_render_is_one_frame() {
        let mut app = App::new(Config::default());
        let mut terminal = render_once(&mut app, 40, 12);
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert_eq!(app.canvas.frame_count(), 3);
    }

    #[test]
    fn test_preferred_size() {
        let app = App::new(Config::default());
        assert_eq!(app.preferred_size(), Size::new(640.0, 480.0));
    }
}
