//! Declarative builder for footer shortcuts

use super::Shortcut;

#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// j/k to move the selection
    pub fn with_navigation(self) -> Self {
        self.add("j/k", "Up/Down")
    }

    /// Tab/Shift-Tab to move between form fields
    pub fn with_field_cycling(self) -> Self {
        self.add("Tab", "Next Field").add("S-Tab", "Prev Field")
    }

    pub fn with_quit(self, key: &str) -> Self {
        self.add(key, "Quit")
    }

    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
