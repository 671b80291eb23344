// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = student_manager_lib::logging::init() {
        eprintln!("failed to initialise logging: {err}");
    }

    student_manager_lib::run()
}
