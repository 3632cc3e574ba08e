use super::app::App;
use super::render::ui;
use super::theme::ThemePalette;
use super::types::{Control, MenuEntry};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub const MIN_PAGE_SIZE: usize = 6;
pub const MAX_PAGE_SIZE: usize = 10;

#[derive(thiserror::Error, Debug)]
pub enum SelectError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not read a result number from selection {0:?}")]
    UnparsableLabel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the results as returned by the server
    Chosen(usize),
    Cancelled,
}

/// A single-choice menu. Returns the chosen label, or `None` when the user backs out.
pub trait Picker {
    fn pick(&mut self, entries: Vec<MenuEntry>, prompt: &str) -> io::Result<Option<String>>;
}

/// Present entries and map the chosen label back to its result index
pub fn select<P: Picker + ?Sized>(
    picker: &mut P,
    entries: Vec<MenuEntry>,
    prompt: &str,
) -> Result<Selection, SelectError> {
    if entries.is_empty() {
        return Ok(Selection::Cancelled);
    }

    match picker.pick(entries, prompt)? {
        Some(label) => rank_to_index(&label).map(Selection::Chosen),
        None => Ok(Selection::Cancelled),
    }
}

/// Parse the leading rank token of a label; rank 1 is index 0
pub fn rank_to_index(label: &str) -> Result<usize, SelectError> {
    let token = label.split_whitespace().next().unwrap_or_default();
    match token.parse::<usize>() {
        Ok(rank) if rank >= 1 => Ok(rank - 1),
        _ => Err(SelectError::UnparsableLabel(label.to_string())),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    prompt: &str,
    palette: &ThemePalette,
) -> io::Result<Option<String>> {
    loop {
        terminal.draw(|f| ui(f, &mut app, prompt, palette))?;

        if let Event::Key(key) = event::read()? {
            // Some platforms also report key releases
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key) {
                Control::Continue => {}
                Control::Choose(label) => return Ok(Some(label)),
                Control::Cancel => return Ok(None),
            }
        }
    }
}

/// Full-screen menu drawn with ratatui on the alternate screen
pub struct TerminalPicker {
    palette: ThemePalette,
    page_size: usize,
}

impl TerminalPicker {
    pub fn new(palette: ThemePalette, page_size: usize) -> Self {
        Self {
            palette,
            page_size: page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

impl Picker for TerminalPicker {
    fn pick(&mut self, entries: Vec<MenuEntry>, prompt: &str) -> io::Result<Option<String>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode()?;
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let app = App::new(entries, self.page_size);
        let result = run_app(&mut terminal, app, prompt, &self.palette);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picks the entry at a fixed position, or cancels
    struct ScriptedPicker {
        position: Option<usize>,
        calls: usize,
    }

    impl Picker for ScriptedPicker {
        fn pick(&mut self, entries: Vec<MenuEntry>, _prompt: &str) -> io::Result<Option<String>> {
            self.calls += 1;
            Ok(self
                .position
                .and_then(|p| entries.get(p))
                .map(|e| e.label.clone()))
        }
    }

    fn labels(n: usize) -> Vec<MenuEntry> {
        (1..=n)
            .map(|rank| MenuEntry::new(format!("{} owner/repo-{}\ndesc\n★ {}", rank, rank, rank), String::new()))
            .collect()
    }

    #[test]
    fn every_position_round_trips() {
        for n in [1, 2, 9, 10, 31] {
            for k in 1..=n {
                let mut picker = ScriptedPicker {
                    position: Some(k - 1),
                    calls: 0,
                };
                let selection = select(&mut picker, labels(n), "prompt").unwrap();
                assert_eq!(selection, Selection::Chosen(k - 1));
            }
        }
    }

    #[test]
    fn cancel_is_not_an_error() {
        let mut picker = ScriptedPicker {
            position: None,
            calls: 0,
        };
        assert_eq!(
            select(&mut picker, labels(3), "prompt").unwrap(),
            Selection::Cancelled
        );
    }

    #[test]
    fn empty_entries_skip_the_picker() {
        let mut picker = ScriptedPicker {
            position: Some(0),
            calls: 0,
        };
        assert_eq!(
            select(&mut picker, Vec::new(), "prompt").unwrap(),
            Selection::Cancelled
        );
        assert_eq!(picker.calls, 0);
    }

    #[test]
    fn filtered_choice_maps_to_original_index() {
        let mut app = App::new(labels(12), 6);
        app.search_query = "repo-11".into();
        app.filter_items();
        let chosen = app.selected_entry().unwrap().label.clone();
        assert_eq!(rank_to_index(&chosen).unwrap(), 10);
    }

    #[test]
    fn unparsable_labels_are_errors() {
        for bad in ["", "owner/repo", "0 owner/repo", "-1 x"] {
            assert!(matches!(
                rank_to_index(bad),
                Err(SelectError::UnparsableLabel(_))
            ));
        }
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(TerminalPicker::new(ThemePalette::plain(), 2).page_size, MIN_PAGE_SIZE);
        assert_eq!(TerminalPicker::new(ThemePalette::plain(), 8).page_size, 8);
        assert_eq!(TerminalPicker::new(ThemePalette::plain(), 50).page_size, MAX_PAGE_SIZE);
    }
}
