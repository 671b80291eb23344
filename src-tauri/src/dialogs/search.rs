// Search dialog
use serde::{Deserialize, Serialize};

use crate::db::connection::DatabaseConnection;
use crate::db::models::Student;
use crate::db::operations::DbOperations;
use crate::error::AppResult;
use crate::view::table::StudentTable;

use super::{ensure_open, DialogKind, DialogState};

/// Store matches and view highlights are produced independently and
/// can disagree when the table is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub matches: Vec<Student>,
    pub highlighted_rows: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct SearchDialog {
    state: DialogState,
}

impl SearchDialog {
    pub const KIND: DialogKind = DialogKind::Search;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Query the store by exact name and highlight matching rows in the loaded table.
    /// The table is not reloaded.
    pub fn submit(
        &mut self,
        name: &str,
        db: &DatabaseConnection,
        table: &mut StudentTable,
    ) -> AppResult<SearchOutcome> {
        ensure_open(self.state, Self::KIND)?;

        let matches = DbOperations::find_students_by_name(db, name)?;
        let highlighted_rows = table.highlight_matching(name);
        self.state = DialogState::Closed;

        Ok(SearchOutcome {
            matches,
            highlighted_rows,
        })
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Course;
    use crate::db::operations::tests::{fresh_store, seed};

    #[test]
    fn test_search_returns_store_matches_and_highlights() {
        let (_dir, db) = fresh_store();
        seed(&db, "Ada", Course::Math, "1");
        seed(&db, "Grace", Course::Physics, "2");
        let mut table = StudentTable::new();
        table.reload(&db).unwrap();

        let mut dialog = SearchDialog::new();
        let outcome = dialog.submit("Grace", &db, &mut table).unwrap();

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].name, "Grace");
        assert_eq!(outcome.highlighted_rows, vec![1]);
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_missing_name_returns_nothing() {
        let (_dir, db) = fresh_store();
        seed(&db, "Ada", Course::Math, "1");
        let mut table = StudentTable::new();
        table.reload(&db).unwrap();

        let outcome = SearchDialog::new().submit("Nobody", &db, &mut table).unwrap();

        assert!(outcome.matches.is_empty());
        assert!(outcome.highlighted_rows.is_empty());
    }

    #[test]
    fn test_stale_table_disagrees_with_store() {
        let (_dir, db) = fresh_store();
        let mut table = StudentTable::new();
        table.reload(&db).unwrap();
        seed(&db, "Ada", Course::Math, "1");

        let outcome = SearchDialog::new().submit("Ada", &db, &mut table).unwrap();

        assert_eq!(outcome.matches.len(), 1);
        assert!(outcome.highlighted_rows.is_empty());
    }
}
