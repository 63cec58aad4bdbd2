//! Edit Mode Controller
//!
//! View-wide toggle between browsing and inline editing.

/// Interaction mode of the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    View,
    Edit,
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        self == EditMode::Edit
    }

    pub fn flipped(self) -> Self {
        match self {
            EditMode::View => EditMode::Edit,
            EditMode::Edit => EditMode::View,
        }
    }
}

/// State of the edit toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeIndicator {
    pub label: &'static str,
    pub active: bool,
}

impl ModeIndicator {
    pub fn for_mode(mode: EditMode) -> Self {
        match mode {
            EditMode::View => Self { label: "Edit", active: false },
            EditMode::Edit => Self { label: "Editing", active: true },
        }
    }
}

impl Default for ModeIndicator {
    fn default() -> Self {
        Self::for_mode(EditMode::View)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditModeController {
    mode: EditMode,
}

impl EditModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// Flip the mode; there are no guards
    pub fn toggle(&mut self) -> EditMode {
        self.mode = self.mode.flipped();
        self.mode
    }
}
