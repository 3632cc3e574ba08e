// Module declarations
mod app;
mod help_window;
mod render;
mod selector;
mod theme;
mod types;

// Re-export public API
pub use selector::{select, Picker, Selection, TerminalPicker};
pub use theme::{Theme, ThemePalette};
pub use types::MenuEntry;
