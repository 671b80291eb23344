// Main window controller
use serde::{Deserialize, Serialize};

use crate::db::connection::DatabaseConnection;
use crate::db::models::StudentDraft;
use crate::dialogs::{
    AboutDialog, DeleteDialog, DialogKind, EditDialog, InsertDialog, Notice, SearchDialog,
    SearchOutcome,
};
use crate::error::{AppError, AppResult};

use super::table::{CellRef, Selection, StudentTable, HEADERS};

/// Buttons shown in the status area while a row is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextAction {
    EditRecord,
    DeleteRecord,
}

/// The single modal slot
#[derive(Debug)]
pub enum ActiveDialog {
    Insert(InsertDialog),
    Edit(EditDialog),
    Delete(DeleteDialog),
    Search(SearchDialog),
    About(AboutDialog),
}

impl ActiveDialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            ActiveDialog::Insert(_) => DialogKind::Insert,
            ActiveDialog::Edit(_) => DialogKind::Edit,
            ActiveDialog::Delete(_) => DialogKind::Delete,
            ActiveDialog::Search(_) => DialogKind::Search,
            ActiveDialog::About(_) => DialogKind::About,
        }
    }

    fn is_closed(&self) -> bool {
        use crate::dialogs::DialogState::Closed;
        match self {
            ActiveDialog::Insert(d) => d.state() == Closed,
            ActiveDialog::Edit(d) => d.state() == Closed,
            ActiveDialog::Delete(d) => d.state() == Closed,
            ActiveDialog::Search(d) => d.state() == Closed,
            ActiveDialog::About(d) => d.state() == Closed,
        }
    }

    fn close(&mut self) {
        match self {
            ActiveDialog::Insert(d) => d.cancel(),
            ActiveDialog::Edit(d) => d.cancel(),
            ActiveDialog::Delete(d) => d.decline(),
            ActiveDialog::Search(d) => d.cancel(),
            ActiveDialog::About(d) => d.acknowledge(),
        }
    }
}

/// Pre-filled edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditForm {
    pub student_id: i64,
    pub draft: StudentDraft,
}

/// Everything the front-end needs to draw the window
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub headers: [&'static str; 4],
    pub rows: Vec<[String; 4]>,
    pub current_row: Option<usize>,
    pub selected: Vec<CellRef>,
    pub actions: Vec<ContextAction>,
    pub dialog: Option<DialogKind>,
}

pub struct MainView {
    db: DatabaseConnection,
    table: StudentTable,
    modal: Option<ActiveDialog>,
}

impl MainView {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            table: StudentTable::new(),
            modal: None,
        }
    }

    pub fn table(&self) -> &StudentTable {
        &self.table
    }

    pub fn open_dialog(&self) -> Option<DialogKind> {
        self.modal.as_ref().map(ActiveDialog::kind)
    }

    pub fn reload(&mut self) -> AppResult<usize> {
        self.table.reload(&self.db)
    }

    pub fn select_cell(&mut self, row: usize, column: usize) -> AppResult<Selection> {
        self.table.select_cell(row, column).cloned()
    }

    pub fn context_actions(&self) -> Vec<ContextAction> {
        if self.table.selection().is_some() {
            vec![ContextAction::EditRecord, ContextAction::DeleteRecord]
        } else {
            Vec::new()
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            headers: HEADERS,
            rows: self.table.display_rows(),
            current_row: self.table.selection().map(|s| s.row),
            selected: self.table.selected_cells(),
            actions: self.context_actions(),
            dialog: self.open_dialog(),
        }
    }

    // ===== Opening dialogs =====

    pub fn open_insert(&mut self) -> AppResult<StudentDraft> {
        self.ensure_idle()?;
        let dialog = InsertDialog::new();
        let defaults = dialog.defaults();
        self.modal = Some(ActiveDialog::Insert(dialog));
        Ok(defaults)
    }

    pub fn open_edit(&mut self) -> AppResult<EditForm> {
        self.ensure_idle()?;
        let selection = self.table.selection().ok_or(AppError::NoSelection)?;
        let dialog = EditDialog::open(selection);
        let form = EditForm {
            student_id: dialog.student_id(),
            draft: dialog.defaults().clone(),
        };
        self.modal = Some(ActiveDialog::Edit(dialog));
        Ok(form)
    }

    /// Returns the id that a confirmation would delete
    pub fn open_delete(&mut self) -> AppResult<i64> {
        self.ensure_idle()?;
        let selection = self.table.selection().ok_or(AppError::NoSelection)?;
        let dialog = DeleteDialog::open(selection);
        let id = dialog.student_id();
        self.modal = Some(ActiveDialog::Delete(dialog));
        Ok(id)
    }

    pub fn open_search(&mut self) -> AppResult<()> {
        self.ensure_idle()?;
        self.modal = Some(ActiveDialog::Search(SearchDialog::new()));
        Ok(())
    }

    pub fn open_about(&mut self) -> AppResult<Notice> {
        self.ensure_idle()?;
        let dialog = AboutDialog::new();
        let notice = dialog.notice();
        self.modal = Some(ActiveDialog::About(dialog));
        Ok(notice)
    }

    /// Cancel whatever dialog is open
    pub fn close_dialog(&mut self) -> Option<DialogKind> {
        let mut dialog = self.modal.take()?;
        dialog.close();
        tracing::debug!(dialog = ?dialog.kind(), "dialog closed");
        Some(dialog.kind())
    }

    // ===== Submitting dialogs =====

    pub fn submit_insert(&mut self, draft: StudentDraft) -> AppResult<i64> {
        let Some(ActiveDialog::Insert(dialog)) = self.modal.as_mut() else {
            return Err(not_open(DialogKind::Insert));
        };
        let result = dialog.submit(draft, &self.db, &mut self.table);
        self.release_closed();
        result
    }

    pub fn submit_edit(&mut self, draft: StudentDraft) -> AppResult<usize> {
        let Some(ActiveDialog::Edit(dialog)) = self.modal.as_mut() else {
            return Err(not_open(DialogKind::Edit));
        };
        let result = dialog.submit(draft, &self.db, &mut self.table);
        self.release_closed();
        result
    }

    pub fn confirm_delete(&mut self) -> AppResult<Notice> {
        let Some(ActiveDialog::Delete(dialog)) = self.modal.as_mut() else {
            return Err(not_open(DialogKind::Delete));
        };
        let result = dialog.confirm(&self.db, &mut self.table);
        self.release_closed();
        result
    }

    pub fn submit_search(&mut self, name: &str) -> AppResult<SearchOutcome> {
        let Some(ActiveDialog::Search(dialog)) = self.modal.as_mut() else {
            return Err(not_open(DialogKind::Search));
        };
        let result = dialog.submit(name, &self.db, &mut self.table);
        self.release_closed();
        result
    }

    fn ensure_idle(&self) -> AppResult<()> {
        match &self.modal {
            Some(dialog) => Err(AppError::DialogBusy {
                open: dialog.kind().title(),
            }),
            None => Ok(()),
        }
    }

    fn release_closed(&mut self) {
        if self.modal.as_ref().is_some_and(ActiveDialog::is_closed) {
            self.modal = None;
        }
    }
}

fn not_open(kind: DialogKind) -> AppError {
    AppError::DialogNotOpen {
        expected: kind.title(),
    }
}
