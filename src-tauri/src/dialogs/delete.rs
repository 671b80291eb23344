// Delete confirmation dialog
use crate::db::connection::DatabaseConnection;
use crate::db::operations::DbOperations;
use crate::error::AppResult;
use crate::view::table::{Selection, StudentTable};

use super::{ensure_open, DialogKind, DialogState, Notice};

pub const CONFIRMATION_PROMPT: &str = "Are you sure you want to delete?";

#[derive(Debug)]
pub struct DeleteDialog {
    student_id: i64,
    state: DialogState,
}

impl DeleteDialog {
    pub const KIND: DialogKind = DialogKind::Delete;

    pub fn open(selection: &Selection) -> Self {
        Self {
            student_id: selection.student_id,
            state: DialogState::Open,
        }
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// "Yes": delete, reload, close, and hand back the success acknowledgment
    pub fn confirm(
        &mut self,
        db: &DatabaseConnection,
        table: &mut StudentTable,
    ) -> AppResult<Notice> {
        ensure_open(self.state, Self::KIND)?;

        DbOperations::delete_student(db, self.student_id)?;
        self.state = DialogState::Closed;

        table.refresh_after_change(db);

        Ok(Notice::new("Success", "Student's data deleted successfully!"))
    }

    /// "No": close without touching the store
    pub fn decline(&mut self) {
        self.state = DialogState::Closed;
    }
}
