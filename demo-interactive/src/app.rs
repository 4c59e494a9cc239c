//! Interactive viewer state, input handling and layout

use crate::slider::Slider;
use crate::view::{color, GridView};
use percolation_core::{CellState, PercolationEngine, TickPacer};
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Redraw budget, roughly 60 frames per second
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Keyboard adjustment of the spread probability
const PROBABILITY_STEP: f64 = 0.01;

/// Keyboard adjustment of the tick interval
const TICK_STEP: Duration = Duration::from_millis(10);

pub struct App {
    engine: PercolationEngine,
    pacer: TickPacer,
    probability_slider: Slider,
    tick_slider: Slider,
    running: bool,
}

impl App {
    /// Wrap an engine that has already been reset
    pub fn new(engine: PercolationEngine) -> Self {
        Self {
            engine,
            pacer: TickPacer::new(Instant::now()),
            probability_slider: Slider::default(),
            tick_slider: Slider::default(),
            running: true,
        }
    }

    /// Draw, handle input and step until the user quits.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(FRAME_INTERVAL)? {
                self.handle_event(&event::read()?);
                while self.running && event::poll(Duration::ZERO)? {
                    self.handle_event(&event::read()?);
                }
            }

            self.update(Instant::now());
        }

        info!(
            "Quitting at generation {} ({:?})",
            self.engine.generation(),
            self.engine.state()
        );
        Ok(())
    }

    /// Take a step if the engine is spreading and the tick interval elapsed
    fn update(&mut self, now: Instant) {
        if self.engine.is_active() && self.pacer.poll(now, self.engine.tick_interval()) {
            self.engine.step();
        }
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.engine.reset(),
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Left => {
                let p = self.engine.spread_probability() - PROBABILITY_STEP;
                self.engine.set_spread_probability(p);
            }
            KeyCode::Right => {
                let p = self.engine.spread_probability() + PROBABILITY_STEP;
                self.engine.set_spread_probability(p);
            }
            KeyCode::Down => {
                let tick = self.engine.tick_interval().saturating_sub(TICK_STEP);
                self.engine.set_tick_interval(tick);
            }
            KeyCode::Up => {
                let tick = self.engine.tick_interval() + TICK_STEP;
                self.engine.set_tick_interval(tick);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(p) = self.probability_slider.press(mouse.column, mouse.row) {
                    self.engine.set_spread_probability(p);
                }
                if let Some(fraction) = self.tick_slider.press(mouse.column, mouse.row) {
                    self.engine.set_tick_fraction(fraction);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(p) = self.probability_slider.drag(mouse.column) {
                    self.engine.set_spread_probability(p);
                }
                if let Some(fraction) = self.tick_slider.drag(mouse.column) {
                    self.engine.set_tick_fraction(fraction);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.probability_slider.release();
                self.tick_slider.release();
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let (grid_width, grid_height) = GridView::size(self.engine.grid());
        let [status_area, grid_block_area, controls_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Max(grid_height.saturating_add(2)),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.status_line(), status_area);

        let [grid_block_area] = Layout::horizontal([Constraint::Max(grid_width.saturating_add(2))])
            .areas(grid_block_area);
        let grid_block = Block::bordered().title(" Percolation Simulation ");
        let grid_area = grid_block.inner(grid_block_area);
        frame.render_widget(grid_block, grid_block_area);
        frame.render_widget(GridView::new(self.engine.grid()), grid_area);

        let [probability_area, tick_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(controls_area);

        let params = self.engine.params();
        let probability = params.spread_probability();
        self.probability_slider.set_track(render_slider(
            frame,
            probability_area,
            format!("p = {probability:.2}"),
            probability,
            self.probability_slider.is_dragging(),
        ));
        self.tick_slider.set_track(render_slider(
            frame,
            tick_area,
            format!("Tick time = {:.2}s", params.tick_interval().as_secs_f64()),
            params.tick_fraction(),
            self.tick_slider.is_dragging(),
        ));

        frame.render_widget(
            Paragraph::new("Space: Reset | Drag sliders or ←/→ ↓/↑: Change p and tick time | q: Quit")
                .dim(),
            help_area,
        );
    }

    fn status_line(&self) -> Line<'static> {
        let census = self.engine.grid().census();
        let state = if self.engine.is_active() {
            "Spreading".red()
        } else {
            "Dormant".blue()
        };
        Line::from(vec![
            Span::raw(format!("Generation {} | ", self.engine.generation())),
            state,
            Span::raw(" | "),
            legend(CellState::Active, "Active", census.active),
            legend(CellState::Filled, "Filled", census.filled),
            legend(CellState::Empty, "Empty", census.empty),
        ])
    }
}

fn legend(state: CellState, name: &str, count: usize) -> Span<'static> {
    Span::styled(
        format!("■ {name} {count}  "),
        Style::new().fg(color(state.color())),
    )
}

/// Draw one slider and return its track area for hit testing.
fn render_slider(frame: &mut Frame, area: Rect, label: String, ratio: f64, active: bool) -> Rect {
    let border = if active { Color::Yellow } else { Color::Gray };
    let block = Block::bordered().border_style(Style::new().fg(border));
    let track = block.inner(area);
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::new().fg(Color::DarkGray).bg(Color::Black))
        .use_unicode(true)
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
    track
}

#[cfg(test)]
mod tests {
    use super::*;
    use percolation_core::{PercolationConfig, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL};
    use ratatui::crossterm::event::KeyModifiers;

    fn new_app(spread_probability: f64) -> App {
        let config = PercolationConfig {
            grid_size: 9,
            spread_probability,
            ..PercolationConfig::default()
        };
        let mut engine = PercolationEngine::seeded(config, 0);
        engine.reset();
        App::new(engine)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::from(code)));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_event(&Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    #[test]
    fn test_space_resets() {
        let mut app = new_app(1.0);
        app.engine.step();
        app.engine.step();
        assert_eq!(app.engine.generation(), 2);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine.generation(), 0);
        assert!(app.engine.is_active());
        assert_eq!(app.engine.frontier(), &[app.engine.grid().center()]);
        assert!(app.running);
    }

    #[test]
    fn test_arrow_keys_clamp_at_bounds() {
        let mut app = new_app(0.995);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.spread_probability(), 1.0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.spread_probability(), 1.0);

        for _ in 0..150 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.engine.spread_probability(), 0.0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.engine.tick_interval(), MIN_TICK_INTERVAL);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.engine.tick_interval(), MIN_TICK_INTERVAL + TICK_STEP);

        for _ in 0..200 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.engine.tick_interval(), MAX_TICK_INTERVAL);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app(0.5);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = new_app(0.5);
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_slider_drag_sets_parameters() {
        let mut app = new_app(0.5);
        app.probability_slider.set_track(Rect::new(0, 10, 11, 1));
        app.tick_slider.set_track(Rect::new(20, 10, 11, 1));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 10);
        assert_eq!(app.engine.spread_probability(), 0.2);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 40, 3);
        assert_eq!(app.engine.spread_probability(), 1.0);
        assert_eq!(app.engine.tick_interval(), MIN_TICK_INTERVAL);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 40, 3);

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 30, 10);
        assert_eq!(app.engine.tick_interval(), MAX_TICK_INTERVAL);
        assert_eq!(app.engine.spread_probability(), 1.0);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 30, 10);

        // Drags after release change nothing
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 20, 10);
        assert_eq!(app.engine.tick_interval(), MAX_TICK_INTERVAL);
    }

    #[test]
    fn test_update_steps_when_due() {
        let mut app = new_app(1.0);
        let later = Instant::now() + Duration::from_secs(1);

        app.update(later);
        assert_eq!(app.engine.generation(), 1);

        // Same instant: the tick interval has not elapsed again
        app.update(later);
        assert_eq!(app.engine.generation(), 1);
    }
}
