#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewLayout {
    Vertical,   // Preview on the right
    Horizontal, // Preview below
}

impl PreviewLayout {
    pub fn toggle_to_horizontal(&mut self) {
        *self = PreviewLayout::Horizontal;
    }

    pub fn toggle_to_vertical(&mut self) {
        *self = PreviewLayout::Vertical;
    }
}

/// One selectable row: the formatted label plus the text shown in the preview pane
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub preview: String,
}

impl MenuEntry {
    pub fn new(label: String, preview: String) -> Self {
        Self { label, preview }
    }

    pub fn height(&self) -> usize {
        self.label.lines().count().max(1)
    }
}

/// Result of handling one key press
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Continue,
    Choose(String),
    Cancel,
}
