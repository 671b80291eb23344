// Main view module
// Owns the student table projection and the modal dialog slot

pub mod main_view;
pub mod table;

pub use main_view::{ActiveDialog, ContextAction, EditForm, MainView, ViewSnapshot};
pub use table::{CellRef, Selection, StudentTable, HEADERS};
