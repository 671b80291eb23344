// Edit dialog
use crate::db::connection::DatabaseConnection;
use crate::db::models::{Course, StudentDraft};
use crate::db::operations::DbOperations;
use crate::error::AppResult;
use crate::view::table::{Selection, StudentTable};

use super::{ensure_open, DialogKind, DialogState};

#[derive(Debug)]
pub struct EditDialog {
    student_id: i64,
    defaults: StudentDraft,
    state: DialogState,
}

impl EditDialog {
    pub const KIND: DialogKind = DialogKind::Edit;

    /// Pre-fill from the clicked row. An unrecognised course shows the first entry.
    pub fn open(selection: &Selection) -> Self {
        Self {
            student_id: selection.student_id,
            defaults: StudentDraft::new(
                selection.name.clone(),
                Course::from_display(&selection.course),
                selection.mobile.clone(),
            ),
            state: DialogState::Open,
        }
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn defaults(&self) -> &StudentDraft {
        &self.defaults
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Update the selected record, close, then reload the table
    pub fn submit(
        &mut self,
        draft: StudentDraft,
        db: &DatabaseConnection,
        table: &mut StudentTable,
    ) -> AppResult<usize> {
        ensure_open(self.state, Self::KIND)?;

        let changed = DbOperations::update_student(db, self.student_id, &draft)?;
        self.state = DialogState::Closed;

        table.refresh_after_change(db);
        Ok(changed)
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }
}
