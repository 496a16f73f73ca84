use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::export::{self, Report};
use crate::state::{Calculator, DisplayMode, Field};

pub const DEFAULT_EXPORT_PATH: &str = "habit_savings.csv";

/// Which form input has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    OldHabitCost,
    NewHabitCost,
    Frequency,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::OldHabitCost => Focus::NewHabitCost,
            Focus::NewHabitCost => Focus::Frequency,
            Focus::Frequency => Focus::OldHabitCost,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::OldHabitCost => Focus::Frequency,
            Focus::NewHabitCost => Focus::OldHabitCost,
            Focus::Frequency => Focus::NewHabitCost,
        }
    }

    fn amount_field(self) -> Option<Field> {
        match self {
            Focus::OldHabitCost => Some(Field::OldHabitCost),
            Focus::NewHabitCost => Some(Field::NewHabitCost),
            Focus::Frequency => None,
        }
    }
}

pub struct App {
    pub calculator: Calculator,
    pub focus: Focus,
    /// Blocking notice shown over the form until any key is pressed.
    pub notice: Option<String>,
    pub status: Option<String>,
    pub export_path: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        Self {
            calculator: Calculator::new(),
            focus: Focus::OldHabitCost,
            notice: None,
            status: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl App {
    pub fn new(calculator: Calculator, export_path: PathBuf) -> Self {
        Self {
            calculator,
            export_path,
            ..Self::default()
        }
    }

    /// Dispatches one terminal event. Returns `true` when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Paste(text) => {
                if self.notice.is_none() && self.calculator.mode() == DisplayMode::FormVisible {
                    self.insert_text(&text);
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }
        if self.notice.take().is_some() {
            return Ok(false);
        }
        match self.calculator.mode() {
            DisplayMode::FormVisible => handle_form_input(self, key),
            DisplayMode::ResultsVisible => handle_results_input(self, key),
        }
    }

    fn insert_text(&mut self, text: &str) {
        match self.focus.amount_field() {
            Some(field) => {
                let combined = format!("{}{}", self.calculator.amount(field).as_str(), text);
                self.calculator.set_amount(field, &combined);
            }
            None => {
                let combined = format!("{}{}", self.calculator.frequency(), text);
                self.calculator.set_frequency(&combined);
            }
        }
    }

    fn delete_char(&mut self) {
        match self.focus.amount_field() {
            Some(field) => self.calculator.pop_amount(field),
            None => self.calculator.pop_frequency(),
        }
    }

    fn export(&mut self) {
        let report = Report::from_calculator(&self.calculator);
        self.status = Some(match export::export_to_file(&self.export_path, &report) {
            Ok(()) => format!("Exported to {}", self.export_path.display()),
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        });
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.previous(),
        KeyCode::Char(c) => app.insert_text(c.encode_utf8(&mut [0; 4])),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Enter => {
            app.status = None;
            if let Err(e) = app.calculator.calculate() {
                app.notice = Some(e.to_string());
            }
        }
        KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_results_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => {
            app.calculator.reset();
            app.focus = Focus::OldHabitCost;
            app.status = None;
        }
        KeyCode::Char('e') | KeyCode::Char('E') => app.export(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}
