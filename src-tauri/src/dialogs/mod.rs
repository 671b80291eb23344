// Modal dialogs
// Each dialog collects input for exactly one store operation, then closes

pub mod about;
pub mod delete;
pub mod edit;
pub mod insert;
pub mod search;

pub use about::AboutDialog;
pub use delete::DeleteDialog;
pub use edit::EditDialog;
pub use insert::InsertDialog;
pub use search::{SearchDialog, SearchOutcome};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogKind {
    Insert,
    Edit,
    Delete,
    Search,
    About,
}

impl DialogKind {
    pub fn title(self) -> &'static str {
        match self {
            DialogKind::Insert => "Insert Student Data",
            DialogKind::Edit => "Update Student Data",
            DialogKind::Delete => "Delete Student's Data",
            DialogKind::Search => "Search Student",
            DialogKind::About => "About",
        }
    }
}

/// Text for a native message box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

pub(crate) fn ensure_open(state: DialogState, kind: DialogKind) -> AppResult<()> {
    match state {
        DialogState::Open => Ok(()),
        DialogState::Closed => Err(AppError::DialogNotOpen {
            expected: kind.title(),
        }),
    }
}
