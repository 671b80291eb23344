// Student Management System - desktop records manager
// Module declarations
pub mod db;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod settings;
pub mod state;
pub mod view;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::db::connection::DatabaseConnection;
    use crate::settings::AppSettings;
    use crate::state::AppState;
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Get app data directory
            let app_dir = app.path().app_data_dir()?;

            let settings = AppSettings::load_or_init(&app_dir)?;
            let params = settings.store.connection_params(&app_dir);

            // Make sure the students table exists before the first reload
            crate::db::schema::provision(&params)?;

            app.manage(AppState::new(DatabaseConnection::new(params)));
            tracing::info!("Student Management System starting");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_students,
            commands::select_cell,
            commands::list_courses,
            commands::close_dialog,
            commands::open_insert_dialog,
            commands::submit_insert,
            commands::open_edit_dialog,
            commands::submit_edit,
            commands::open_delete_dialog,
            commands::confirm_delete,
            commands::open_search_dialog,
            commands::submit_search,
            commands::show_about,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
