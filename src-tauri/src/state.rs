// Application state management
use parking_lot::Mutex;

use crate::db::connection::DatabaseConnection;
use crate::view::MainView;

/// Shared by every command; one operation holds the view lock at a time
pub struct AppState {
    pub view: Mutex<MainView>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            view: Mutex::new(MainView::new(db)),
        }
    }
}
