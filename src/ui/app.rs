//! Main TUI application state and logic

use crate::config::SPEED_STEP;
use crate::visualizer::Visualizer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::panes::{
    render_details_pane, render_input_pane, render_playback_pane, render_sorted_pane,
    render_stats_pane, render_status_bar, render_tree_pane, InputRenderData, StatusRenderData,
    TreeRenderData,
};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Sorted,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Sorted,
            FocusedPane::Sorted => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The visualizer instance
    pub visualizer: Visualizer,

    /// Where exports are written
    pub export_dir: PathBuf,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Selected node index in the tree pane
    pub selected: Option<usize>,

    /// Scroll offset of the sorted list
    pub sorted_scroll: usize,

    /// Weight being typed, `Some` while in input mode
    pub input: Option<String>,

    /// Last validation message for the input pane
    pub input_error: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(visualizer: Visualizer, export_dir: PathBuf) -> Self {
        App {
            visualizer,
            export_dir,
            focused_pane: FocusedPane::Tree,
            selected: None,
            sorted_scroll: 0,
            input: None,
            input_error: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.visualizer.poll(Instant::now());
            self.clamp_selection();

            // Use poll with timeout so timer-driven transitions keep firing
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.visualizer.teardown();
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(main_chunks[0]);

        // Left column: Tree (top) | Sorted (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Stats | Add Person | Playback | Details
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let display = self.visualizer.display();

        render_tree_pane(
            frame,
            left_rows[0],
            TreeRenderData {
                display,
                selected: self.selected,
            },
            self.focused_pane == FocusedPane::Tree,
        );

        render_sorted_pane(
            frame,
            left_rows[1],
            &display.sorted,
            self.focused_pane == FocusedPane::Sorted,
            &mut self.sorted_scroll,
        );

        render_stats_pane(
            frame,
            right_rows[0],
            display.heap.len(),
            display.heap.first().map(|p| p.weight),
            display.sorted.len(),
        );

        render_input_pane(
            frame,
            right_rows[1],
            InputRenderData {
                buffer: self.input.as_deref().unwrap_or(""),
                is_editing: self.input.is_some(),
                next_id: self.visualizer.next_id(),
                error: self.input_error.as_deref(),
                disabled: self.visualizer.is_sorting(),
            },
        );

        render_playback_pane(frame, right_rows[2], self.visualizer.playback());

        let details = self.selected.and_then(|i| self.visualizer.node_details(i));
        render_details_pane(
            frame,
            right_rows[3],
            details.as_ref(),
            self.focused_pane == FocusedPane::Tree && details.is_some(),
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                is_playing: self.visualizer.playback().is_playing,
                is_inserting: self.visualizer.is_inserting(),
                is_editing: self.input.is_some(),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Keep the selection inside the displayed heap
    fn clamp_selection(&mut self) {
        let len = self.visualizer.display().heap.len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                if self.visualizer.is_sorting() {
                    self.set_error("Cannot add while sorting");
                } else {
                    self.input = Some(String::new());
                    self.input_error = None;
                }
            }
            KeyCode::Char('s') => match self.visualizer.run_sort(Instant::now()) {
                Ok(steps) => self.set_status(format!("Sorting ({} steps)", steps)),
                Err(e) => self.set_error(format!("Cannot sort: {}", e)),
            },
            KeyCode::Char('r') => match self.visualizer.reset() {
                Ok(()) => {
                    self.selected = None;
                    self.sorted_scroll = 0;
                    self.set_status("Reset to initial data");
                }
                Err(e) => self.set_error(format!("Cannot reset: {} (pause first)", e)),
            },
            KeyCode::Char(' ') => {
                if self.visualizer.play_pause(Instant::now()) {
                    if self.visualizer.playback().is_playing {
                        self.set_status("Playing...");
                    } else {
                        self.set_status("Paused");
                    }
                } else {
                    self.set_status("Nothing to play");
                }
            }
            KeyCode::Left => {
                if self.visualizer.step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_status("Cannot step backward");
                }
            }
            KeyCode::Right => {
                if self.visualizer.step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status("Cannot step forward");
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.visualizer.set_speed(self.visualizer.speed() + SPEED_STEP);
                self.set_status(format!("Speed {:.2}x", speed));
            }
            KeyCode::Char('-') => {
                let speed = self.visualizer.set_speed(self.visualizer.speed() - SPEED_STEP);
                self.set_status(format!("Speed {:.2}x", speed));
            }
            KeyCode::Char('e') => {
                match self.visualizer.export().write_to_dir(&self.export_dir) {
                    Ok(path) => self.set_status(format!("Exported {}", path.display())),
                    Err(e) => self.set_error(format!("Export failed: {}", e)),
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tree => {
                    self.selected = self.selected.map(|i| i.saturating_sub(1));
                }
                FocusedPane::Sorted => {
                    self.sorted_scroll = self.sorted_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tree => {
                    let len = self.visualizer.display().heap.len();
                    if len > 0 {
                        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
                    }
                }
                FocusedPane::Sorted => {
                    self.sorted_scroll = self.sorted_scroll.saturating_add(1);
                }
            },
            KeyCode::Esc => {
                self.selected = None;
            }
            _ => {}
        }
    }

    /// Keys while typing a weight
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if buffer.len() < 6 {
                    buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => {
                self.input = None;
                self.input_error = None;
            }
            KeyCode::Enter => {
                let text = buffer.clone();
                match self.visualizer.add_person_input(&text, Instant::now()) {
                    Ok(person) => {
                        self.input = None;
                        self.input_error = None;
                        self.set_status(format!("Inserting {}", person));
                    }
                    Err(e) => {
                        self.input_error = Some(e.to_string());
                        self.set_error(format!("Cannot add: {}", e));
                    }
                }
            }
            _ => {}
        }
    }
}
