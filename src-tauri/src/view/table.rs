// Tabular projection of the students table
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::db::connection::DatabaseConnection;
use crate::db::models::Student;
use crate::db::operations::DbOperations;
use crate::error::{AppError, AppResult};

pub const HEADERS: [&str; 4] = ["Id", "Name", "Course", "Mobile"];

const NAME_COLUMN: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

/// Captured on a cell click. Edit and delete act on `student_id` from here,
/// never on whatever the view shows later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub row: usize,
    pub student_id: i64,
    pub name: String,
    pub course: String,
    pub mobile: String,
}

#[derive(Debug, Default)]
pub struct StudentTable {
    rows: Vec<Student>,
    current: Option<Selection>,
    selected: BTreeSet<CellRef>,
}

impl StudentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch every record and redraw. Selection does not survive a reload.
    pub fn reload(&mut self, db: &DatabaseConnection) -> AppResult<usize> {
        let students = DbOperations::list_students(db)?;
        self.replace_rows(students);
        tracing::debug!(rows = self.rows.len(), "table reloaded");
        Ok(self.rows.len())
    }

    /// Reload after a committed change. The change stands even if the
    /// reload fails: the error is logged and the old rows stay, unselected.
    pub fn refresh_after_change(&mut self, db: &DatabaseConnection) {
        if let Err(err) = self.reload(db) {
            tracing::warn!(error = %err, "reload after change failed");
            self.clear_selection();
        }
    }

    pub fn replace_rows(&mut self, rows: Vec<Student>) {
        self.rows = rows;
        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.current = None;
        self.selected.clear();
    }

    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn display_rows(&self) -> Vec<[String; 4]> {
        self.rows.iter().map(Student::cells).collect()
    }

    /// Make `row` current and select only the clicked cell
    pub fn select_cell(&mut self, row: usize, column: usize) -> AppResult<&Selection> {
        let Some(student) = self.rows.get(row).filter(|_| column < HEADERS.len()) else {
            return Err(AppError::RowOutOfRange {
                row,
                column,
                rows: self.rows.len(),
            });
        };

        let selection = Selection {
            row,
            student_id: student.id,
            name: student.name.clone(),
            course: student.course.to_string(),
            mobile: student.mobile.clone(),
        };

        self.selected.clear();
        self.selected.insert(CellRef { row, column });
        Ok(&*self.current.insert(selection))
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    pub fn selected_cells(&self) -> Vec<CellRef> {
        self.selected.iter().copied().collect()
    }

    /// Add the Name cell of every row holding a cell equal to `text`,
    /// compared as a fixed string ignoring case. The current row is unchanged.
    pub fn highlight_matching(&mut self, text: &str) -> Vec<usize> {
        let needle = text.to_lowercase();
        let rows: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, student)| {
                student
                    .cells()
                    .iter()
                    .any(|cell| cell.to_lowercase() == needle)
            })
            .map(|(row, _)| row)
            .collect();

        for &row in &rows {
            self.selected.insert(CellRef {
                row,
                column: NAME_COLUMN,
            });
        }
        rows
    }
}
