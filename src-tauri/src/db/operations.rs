use rusqlite::{params, Row};
use crate::db::models::{Student, StudentDraft};
use crate::db::connection::DatabaseConnection;
use crate::error::AppResult;

/// Database operations for the student records.
///
/// Every call opens its own connection and drops it before returning.
pub struct DbOperations;

impl DbOperations {
    /// Get all students in store order
    pub fn list_students(db: &DatabaseConnection) -> AppResult<Vec<Student>> {
        let conn = db.connect()?;

        let mut stmt = conn.prepare("SELECT * FROM students")?;
        let students = stmt
            .query_map([], student_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Insert a student and return the store-assigned id
    pub fn insert_student(db: &DatabaseConnection, draft: &StudentDraft) -> AppResult<i64> {
        let conn = db.connect()?;

        conn.execute(
            "INSERT INTO students (name, course, mobile) VALUES (?1, ?2, ?3)",
            params![draft.name, draft.course, draft.mobile],
        )?;
        let id = conn.last_insert_rowid();

        tracing::info!(id, name = %draft.name, "student inserted");
        Ok(id)
    }

    /// Overwrite name, course and mobile for `id`. Returns the number of rows changed.
    pub fn update_student(
        db: &DatabaseConnection,
        id: i64,
        draft: &StudentDraft,
    ) -> AppResult<usize> {
        let conn = db.connect()?;

        let changed = conn.execute(
            "UPDATE students SET name=?1, course=?2, mobile=?3 WHERE id=?4",
            params![draft.name, draft.course, draft.mobile, id],
        )?;

        tracing::info!(id, changed, "student updated");
        Ok(changed)
    }

    /// Delete the student with `id`. Returns the number of rows removed.
    pub fn delete_student(db: &DatabaseConnection, id: i64) -> AppResult<usize> {
        let conn = db.connect()?;

        let removed = conn.execute("DELETE FROM students WHERE id=?1", params![id])?;

        tracing::info!(id, removed, "student deleted");
        Ok(removed)
    }

    /// Students whose name equals `name` under the store's collation
    pub fn find_students_by_name(db: &DatabaseConnection, name: &str) -> AppResult<Vec<Student>> {
        let conn = db.connect()?;

        let mut stmt = conn.prepare("SELECT * FROM students WHERE name=?1")?;
        let students = stmt
            .query_map(params![name], student_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(name, count = students.len(), "searched students");
        Ok(students)
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        course: row.get(2)?,
        mobile: row.get(3)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::connection::ConnectionParams;
    use crate::db::models::Course;
    use crate::db::schema::provision;
    use crate::error::{AppError, StoreError};
    use tempfile::TempDir;

    pub(crate) fn fresh_store() -> (TempDir, DatabaseConnection) {
        let dir = TempDir::new().unwrap();
        let params = ConnectionParams::in_dir(dir.path());
        provision(&params).unwrap();
        (dir, DatabaseConnection::new(params))
    }

    pub(crate) fn seed(db: &DatabaseConnection, name: &str, course: Course, mobile: &str) -> i64 {
        DbOperations::insert_student(db, &StudentDraft::new(name, course, mobile)).unwrap()
    }

    fn ada() -> StudentDraft {
        StudentDraft::new("Ada", Course::Math, "555-0100")
    }

    #[test]
    fn test_insert_then_list_keeps_fields() {
        let (_dir, db) = fresh_store();

        let id = DbOperations::insert_student(&db, &ada()).unwrap();
        let students = DbOperations::list_students(&db).unwrap();

        assert_eq!(
            students,
            vec![Student {
                id,
                name: "Ada".to_string(),
                course: Course::Math,
                mobile: "555-0100".to_string(),
            }]
        );
    }

    #[test]
    fn test_insert_accepts_empty_fields() {
        let (_dir, db) = fresh_store();

        let id = DbOperations::insert_student(&db, &StudentDraft::default()).unwrap();
        let students = DbOperations::list_students(&db).unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, id);
        assert_eq!(students[0].name, "");
        assert_eq!(students[0].course, Course::Biology);
    }

    #[test]
    fn test_update_touches_only_target() {
        let (_dir, db) = fresh_store();
        let ada_id = DbOperations::insert_student(&db, &ada()).unwrap();
        let grace_id = seed(&db, "Grace", Course::Astronomy, "555-0200");

        let changed = DbOperations::update_student(
            &db,
            ada_id,
            &StudentDraft::new("Ada L.", Course::Physics, "555-0101"),
        )
        .unwrap();
        assert_eq!(changed, 1);

        let students = DbOperations::list_students(&db).unwrap();
        let ada = students.iter().find(|s| s.id == ada_id).unwrap();
        let grace = students.iter().find(|s| s.id == grace_id).unwrap();
        assert_eq!(ada.name, "Ada L.");
        assert_eq!(ada.course, Course::Physics);
        assert_eq!(ada.mobile, "555-0101");
        assert_eq!(grace.name, "Grace");
        assert_eq!(grace.course, Course::Astronomy);
    }

    #[test]
    fn test_update_missing_id_changes_nothing() {
        let (_dir, db) = fresh_store();
        DbOperations::insert_student(&db, &ada()).unwrap();

        let changed = DbOperations::update_student(&db, 999, &StudentDraft::default()).unwrap();

        assert_eq!(changed, 0);
        assert_eq!(DbOperations::list_students(&db).unwrap()[0].name, "Ada");
    }

    #[test]
    fn test_delete_does_not_renumber() {
        let (_dir, db) = fresh_store();
        let first = DbOperations::insert_student(&db, &ada()).unwrap();
        let second = seed(&db, "Bo", Course::Biology, "1");
        let third = seed(&db, "Cy", Course::Math, "2");

        assert_eq!(DbOperations::delete_student(&db, second).unwrap(), 1);

        let ids: Vec<i64> = DbOperations::list_students(&db)
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let (_dir, db) = fresh_store();
        let first = DbOperations::insert_student(&db, &ada()).unwrap();
        DbOperations::delete_student(&db, first).unwrap();

        let next = DbOperations::insert_student(&db, &ada()).unwrap();

        assert!(next > first);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let (_dir, db) = fresh_store();
        DbOperations::insert_student(&db, &ada()).unwrap();
        seed(&db, "Ada", Course::Biology, "555-0300");
        seed(&db, "Adam", Course::Physics, "555-0400");

        let found = DbOperations::find_students_by_name(&db, "Ada").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.name == "Ada"));

        assert!(DbOperations::find_students_by_name(&db, "Ad").unwrap().is_empty());
        assert!(DbOperations::find_students_by_name(&db, "ada").unwrap().is_empty());
        assert!(DbOperations::find_students_by_name(&db, "Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_course_in_store_fails_list() {
        let (_dir, db) = fresh_store();
        db.connect()
            .unwrap()
            .execute(
                "INSERT INTO students (name, course, mobile) VALUES ('Eve', 'Chemistry', '0')",
                [],
            )
            .unwrap();

        let err = DbOperations::list_students(&db).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Statement(_))));
    }

    #[test]
    fn test_operations_fail_without_store() {
        let dir = TempDir::new().unwrap();
        let db = DatabaseConnection::new(ConnectionParams::in_dir(dir.path()));

        let err = DbOperations::insert_student(&db, &ada()).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Connection { .. })));
    }
}
