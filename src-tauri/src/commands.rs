// Tauri command handlers
use serde::Serialize;
use tauri::{AppHandle, Manager, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::db::models::{Course, StudentDraft};
use crate::dialogs::delete::CONFIRMATION_PROMPT;
use crate::dialogs::{Notice, SearchOutcome};
use crate::state::AppState;
use crate::view::{EditForm, ViewSnapshot};

#[derive(Serialize)]
pub struct DeletePrompt {
    pub student_id: i64,
    pub prompt: &'static str,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub outcome: SearchOutcome,
    pub view: ViewSnapshot,
}

// ===== Main view =====

#[tauri::command]
pub fn load_students(state: State<'_, AppState>) -> Result<ViewSnapshot, String> {
    let mut view = state.view.lock();
    view.reload()
        .map_err(|e| format!("Failed to load students: {}", e))?;
    Ok(view.snapshot())
}

#[tauri::command]
pub fn select_cell(
    row: usize,
    column: usize,
    state: State<'_, AppState>,
) -> Result<ViewSnapshot, String> {
    let mut view = state.view.lock();
    view.select_cell(row, column)
        .map_err(|e| format!("Failed to select cell: {}", e))?;
    Ok(view.snapshot())
}

#[tauri::command]
pub fn list_courses() -> Vec<&'static str> {
    Course::ALL.iter().map(|c| c.as_str()).collect()
}

#[tauri::command]
pub fn close_dialog(state: State<'_, AppState>) -> ViewSnapshot {
    let mut view = state.view.lock();
    view.close_dialog();
    view.snapshot()
}

// ===== Insert / Edit =====

#[tauri::command]
pub fn open_insert_dialog(state: State<'_, AppState>) -> Result<StudentDraft, String> {
    state
        .view
        .lock()
        .open_insert()
        .map_err(|e| format!("Failed to open insert dialog: {}", e))
}

#[tauri::command]
pub fn submit_insert(
    draft: StudentDraft,
    state: State<'_, AppState>,
) -> Result<ViewSnapshot, String> {
    let mut view = state.view.lock();
    view.submit_insert(draft)
        .map_err(|e| format!("Failed to insert student: {}", e))?;
    Ok(view.snapshot())
}

#[tauri::command]
pub fn open_edit_dialog(state: State<'_, AppState>) -> Result<EditForm, String> {
    state
        .view
        .lock()
        .open_edit()
        .map_err(|e| format!("Failed to open edit dialog: {}", e))
}

#[tauri::command]
pub fn submit_edit(
    draft: StudentDraft,
    state: State<'_, AppState>,
) -> Result<ViewSnapshot, String> {
    let mut view = state.view.lock();
    view.submit_edit(draft)
        .map_err(|e| format!("Failed to update student: {}", e))?;
    Ok(view.snapshot())
}

// ===== Delete =====

#[tauri::command]
pub fn open_delete_dialog(state: State<'_, AppState>) -> Result<DeletePrompt, String> {
    let student_id = state
        .view
        .lock()
        .open_delete()
        .map_err(|e| format!("Failed to open delete dialog: {}", e))?;
    Ok(DeletePrompt {
        student_id,
        prompt: CONFIRMATION_PROMPT,
    })
}

#[tauri::command]
pub fn confirm_delete(
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<ViewSnapshot, String> {
    let mut view = state.view.lock();
    let notice = view
        .confirm_delete()
        .map_err(|e| format!("Failed to delete student: {}", e))?;

    show_notice(&app, &notice, |_| {});
    Ok(view.snapshot())
}

// ===== Search / About =====

#[tauri::command]
pub fn open_search_dialog(state: State<'_, AppState>) -> Result<(), String> {
    state
        .view
        .lock()
        .open_search()
        .map_err(|e| format!("Failed to open search dialog: {}", e))
}

#[tauri::command]
pub fn submit_search(
    name: String,
    state: State<'_, AppState>,
) -> Result<SearchResponse, String> {
    let mut view = state.view.lock();
    let outcome = view
        .submit_search(&name)
        .map_err(|e| format!("Failed to search students: {}", e))?;
    Ok(SearchResponse {
        outcome,
        view: view.snapshot(),
    })
}

#[tauri::command]
pub fn show_about(state: State<'_, AppState>, app: AppHandle) -> Result<(), String> {
    let notice = state
        .view
        .lock()
        .open_about()
        .map_err(|e| format!("Failed to open about dialog: {}", e))?;

    let handle = app.clone();
    show_notice(&app, &notice, move |_| {
        handle.state::<AppState>().view.lock().close_dialog();
    });
    Ok(())
}

fn show_notice<F>(app: &AppHandle, notice: &Notice, on_close: F)
where
    F: FnOnce(bool) + Send + 'static,
{
    app.dialog()
        .message(notice.text.clone())
        .title(notice.title.clone())
        .kind(MessageDialogKind::Info)
        .show(on_close);
}
