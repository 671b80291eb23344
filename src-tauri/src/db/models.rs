// Data models
use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Courses offered in the course drop-down, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Biology,
    Math,
    Astronomy,
    Physics,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course `{0}`")]
pub struct UnknownCourse(pub String);

impl Course {
    pub const ALL: [Course; 4] = [
        Course::Biology,
        Course::Math,
        Course::Astronomy,
        Course::Physics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Course::Biology => "Biology",
            Course::Math => "Math",
            Course::Astronomy => "Astronomy",
            Course::Physics => "Physics",
        }
    }

    /// Resolve a displayed cell text, falling back to the first drop-down entry
    pub fn from_display(text: &str) -> Course {
        text.parse().unwrap_or_default()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

impl ToSql for Course {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Course {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub course: Course,
    pub mobile: String,
}

impl Student {
    /// Display cells in column order: Id, Name, Course, Mobile
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.course.to_string(),
            self.mobile.clone(),
        ]
    }
}

/// Form payload for insert and edit; the store owns the id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub course: Course,
    pub mobile: String,
}

impl StudentDraft {
    pub fn new(name: impl Into<String>, course: Course, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course,
            mobile: mobile.into(),
        }
    }
}
