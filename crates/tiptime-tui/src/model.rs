//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use tiptime_core::TipCalculator;

use crate::footer::render_footer;
use crate::form::{render_result, render_text_field, render_toggle};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

pub const BILL_LABEL: &str = "Bill Amount";
pub const TIP_LABEL: &str = "How was the service?";
pub const ROUND_UP_LABEL: &str = "Round up tip?";

/// Focusable form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Bill,
    TipPercent,
    RoundUp,
}

impl Field {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Bill => Self::TipPercent,
            Self::TipPercent => Self::RoundUp,
            Self::RoundUp => Self::Bill,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Bill => Self::RoundUp,
            Self::TipPercent => Self::Bill,
            Self::RoundUp => Self::TipPercent,
        }
    }
}

/// Form state (Elm Model).
pub struct FormApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Raw bill text as typed.
    pub bill_input: String,
    /// Raw tip-percent text as typed.
    pub tip_input: String,
    /// Round-up toggle.
    pub round_up: bool,
    /// Field receiving keystrokes.
    pub focus: Field,
    /// Formatted tip for the current inputs.
    tip_display: String,
    calculator: TipCalculator,
    theme: ColorTheme,
}

impl FormApp {
    /// Create an empty form.
    #[must_use]
    pub fn new(calculator: TipCalculator) -> Self {
        let mut app = Self {
            should_quit: false,
            bill_input: String::new(),
            tip_input: String::new(),
            round_up: false,
            focus: Field::default(),
            tip_display: String::new(),
            calculator,
            theme: ColorTheme::default(),
        };
        app.recompute();
        app
    }

    /// Seed the form with initial values.
    #[must_use]
    pub fn with_inputs(mut self, bill: &str, tip_percent: &str, round_up: bool) -> Self {
        self.bill_input = bill.to_string();
        self.tip_input = tip_percent.to_string();
        self.round_up = round_up;
        self.recompute();
        self
    }

    /// The formatted tip currently displayed.
    #[must_use]
    pub fn tip_display(&self) -> &str {
        &self.tip_display
    }

    /// Recompute the displayed tip from the current form state.
    fn recompute(&mut self) {
        self.tip_display = self
            .calculator
            .compute(&self.bill_input, &self.tip_input, self.round_up);
        tracing::trace!(
            bill = %self.bill_input,
            tip = %self.tip_input,
            round_up = self.round_up,
            result = %self.tip_display,
            "recomputed tip"
        );
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Bill => Some(&mut self.bill_input),
            Field::TipPercent => Some(&mut self.tip_input),
            Field::RoundUp => None,
        }
    }

    fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
        self.recompute();
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize | TuiMessage::Tick => {
                // Both only trigger a re-render, nothing to update in model
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextField => {
                self.focus = self.focus.next();
            }
            KeyAction::PrevField => {
                self.focus = self.focus.prev();
            }
            KeyAction::Input(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                    self.recompute();
                } else if c == ' ' {
                    self.toggle_round_up();
                }
            }
            KeyAction::Backspace => {
                if let Some(input) = self.focused_input() {
                    if input.pop().is_some() {
                        self.recompute();
                    }
                }
            }
            KeyAction::ClearField => {
                if let Some(input) = self.focused_input() {
                    input.clear();
                    self.recompute();
                }
            }
            KeyAction::Submit => {
                if self.focus == Field::RoundUp {
                    self.toggle_round_up();
                } else {
                    self.focus = self.focus.next();
                }
            }
            KeyAction::ToggleRoundUp => self.toggle_round_up(),
            KeyAction::None => {}
        }
    }

    /// Compute the form layout.
    ///
    /// Returns (header, bill, tip, `round_up`, result, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(3), // bill
                Constraint::Length(3), // tip percent
                Constraint::Length(3), // round up
                Constraint::Min(1),    // result
                Constraint::Length(2), // footer
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5])
    }

    /// Render the full form (Elm View).
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header, bill, tip, round_up, result, footer) = Self::compute_layout(frame.area());
        let formatter = self.calculator.formatter();

        render_header(frame, header, formatter.locale(), formatter.code(), &self.theme);
        render_text_field(
            frame,
            bill,
            BILL_LABEL,
            &self.bill_input,
            self.focus == Field::Bill,
            &self.theme,
        );
        render_text_field(
            frame,
            tip,
            TIP_LABEL,
            &self.tip_input,
            self.focus == Field::TipPercent,
            &self.theme,
        );
        render_toggle(
            frame,
            round_up,
            ROUND_UP_LABEL,
            self.round_up,
            self.focus == Field::RoundUp,
            &self.theme,
        );

        // Result sits one line below the controls.
        let result_line = Rect {
            y: result.y.saturating_add(1).min(result.bottom().saturating_sub(1)),
            height: result.height.min(1),
            ..result
        };
        render_result(frame, result_line, &self.tip_display, &self.theme);
        render_footer(frame, footer, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (render, poll events,
    /// update), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => TuiMessage::KeyPress(map_key(key_event)),
                    Event::Resize(..) => TuiMessage::Resize,
                    _ => TuiMessage::Tick,
                }
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg);
        }
    }
}
