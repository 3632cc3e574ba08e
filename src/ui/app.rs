use super::types::{Control, MenuEntry, PreviewLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;

pub struct App {
    pub entries: Vec<MenuEntry>,
    pub filtered_items: Vec<(usize, i64)>, // (entry index, score)
    pub list_state: ListState,
    pub search_query: String,
    pub layout: PreviewLayout,
    pub matcher: SkimMatcherV2,
    pub help_visible: bool,
    pub help_scroll: u16,
    pub page_size: usize,
}

impl App {
    pub fn new(entries: Vec<MenuEntry>, page_size: usize) -> Self {
        let filtered_items: Vec<(usize, i64)> = (0..entries.len()).map(|i| (i, 0)).collect();

        let mut list_state = ListState::default();
        if !filtered_items.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            entries,
            filtered_items,
            list_state,
            search_query: String::new(),
            layout: PreviewLayout::Vertical,
            matcher: SkimMatcherV2::default(),
            help_visible: false,
            help_scroll: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn filter_items(&mut self) {
        if self.search_query.is_empty() {
            self.filtered_items = (0..self.entries.len()).map(|i| (i, 0)).collect();
        } else {
            let mut scored_items: Vec<(usize, i64)> = self
                .entries
                .iter()
                .enumerate()
                .filter_map(|(i, entry)| {
                    self.matcher
                        .fuzzy_match(&entry.label, &self.search_query)
                        .map(|score| (i, score))
                })
                .collect();

            // Stable sort keeps server order among equal scores
            scored_items.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_items = scored_items;
        }

        // Reset selection to first item
        if !self.filtered_items.is_empty() {
            self.list_state.select(Some(0));
        } else {
            self.list_state.select(None);
        }
    }

    pub fn next(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.filtered_items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.filtered_items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        let last = self.filtered_items.len() - 1;
        let i = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((i + self.page_size).min(last)));
    }

    pub fn page_up(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(i.saturating_sub(self.page_size)));
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.list_state
            .selected()
            .and_then(|i| self.filtered_items.get(i))
            .and_then(|(idx, _)| self.entries.get(*idx))
    }

    pub fn preview_content(&self) -> &str {
        self.selected_entry()
            .map(|entry| entry.preview.as_str())
            .unwrap_or("")
    }

    /// Rows needed to show one page of entries, borders excluded
    pub fn page_height(&self) -> u16 {
        let tallest = self
            .entries
            .iter()
            .map(MenuEntry::height)
            .max()
            .unwrap_or(1);
        let rows = tallest * self.page_size.min(self.entries.len().max(1));
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        // If help screen is visible, handle separately
        if self.help_visible {
            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Control::Cancel,
                (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) | (KeyCode::Esc, _) => {
                    self.help_visible = false;
                    self.help_scroll = 0;
                }
                (KeyCode::Down, _) => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                (KeyCode::Up, _) => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return Control::Continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return Control::Cancel;
            }
            (KeyCode::Enter, _) => {
                if let Some(entry) = self.selected_entry() {
                    return Control::Choose(entry.label.clone());
                }
            }
            (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.help_visible = true;
                self.help_scroll = 0;
            }
            // Navigation
            (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                self.next();
            }
            (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.previous();
            }
            (KeyCode::PageDown, _) => {
                self.page_down();
            }
            (KeyCode::PageUp, _) => {
                self.page_up();
            }
            // Layout switching
            (KeyCode::Char('o'), KeyModifiers::ALT) => {
                self.layout.toggle_to_horizontal();
            }
            (KeyCode::Char('v'), KeyModifiers::ALT) => {
                self.layout.toggle_to_vertical();
            }
            // Filter input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.search_query.push(c);
                self.filter_items();
            }
            (KeyCode::Backspace, _) => {
                self.search_query.pop();
                self.filter_items();
            }
            _ => {}
        }

        Control::Continue
    }
}
