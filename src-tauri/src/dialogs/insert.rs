// Insert dialog
use crate::db::connection::DatabaseConnection;
use crate::db::models::StudentDraft;
use crate::db::operations::DbOperations;
use crate::error::AppResult;
use crate::view::table::StudentTable;

use super::{ensure_open, DialogKind, DialogState};

#[derive(Debug, Default)]
pub struct InsertDialog {
    state: DialogState,
}

impl InsertDialog {
    pub const KIND: DialogKind = DialogKind::Insert;

    pub fn new() -> Self {
        Self::default()
    }

    /// Blank form with the first course preselected
    pub fn defaults(&self) -> StudentDraft {
        StudentDraft::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Insert the form contents, close, then reload the table.
    /// A failed insert leaves the dialog open; a failed reload does not undo the insert.
    pub fn submit(
        &mut self,
        draft: StudentDraft,
        db: &DatabaseConnection,
        table: &mut StudentTable,
    ) -> AppResult<i64> {
        ensure_open(self.state, Self::KIND)?;

        let id = DbOperations::insert_student(db, &draft)?;
        self.state = DialogState::Closed;

        table.refresh_after_change(db);
        Ok(id)
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }
}
