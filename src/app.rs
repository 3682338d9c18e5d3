use std::path::PathBuf;

use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::panels;

/// Dataset compiled into the binary and shown on startup.
const BUNDLED_DATA: &str = include_str!("../assets/data.json");

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SalaryExplorerApp {
    pub state: AppState,
}

impl SalaryExplorerApp {
    /// Start with `path` if given.  The bundled dataset is shown when no
    /// path is given or the path fails to load; in the latter case the load
    /// error stays in the status bar.
    pub fn new(path: Option<PathBuf>) -> Self {
        let mut app = Self::default();
        if let Some(p) = &path {
            panels::load_into_state(&mut app.state, loader::load_file(p));
        }
        if app.state.dataset.is_none() {
            // `set_dataset` clears the status message.
            let load_error = app.state.status_message.take();
            panels::load_into_state(
                &mut app.state,
                loader::load_json_str(BUNDLED_DATA, "bundled"),
            );
            if load_error.is_some() {
                app.state.status_message = load_error;
            }
        }
        app
    }
}

impl eframe::App for SalaryExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: table, chart, drill-down ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::report_panel(ui, &mut self.state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Selection;

    #[test]
    fn bundled_dataset_loads_cleanly() {
        let app = SalaryExplorerApp::new(None);
        let ds = app.state.dataset.as_ref().unwrap();
        assert!(ds.skipped.is_empty());
        assert_eq!(ds.source, "bundled");

        let total: usize = app.state.summaries.iter().map(|s| s.total_jobs).sum();
        assert_eq!(total, ds.len());
        assert_eq!(
            app.state.summaries.iter().map(|s| s.year).collect::<Vec<_>>(),
            vec![2020, 2021, 2022, 2023]
        );
        assert_eq!(app.state.selection, Selection::None);
    }

    #[test]
    fn missing_file_falls_back_to_bundled_data() {
        let app = SalaryExplorerApp::new(Some(PathBuf::from("/nonexistent/salaries.json")));
        let ds = app.state.dataset.as_ref().unwrap();
        assert_eq!(ds.source, "bundled");
        assert!(!app.state.summaries.is_empty());
        assert!(app.state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn readable_path_replaces_bundled_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.json");
        std::fs::write(
            &path,
            r#"[{"work_year": 2019, "job_title": "A", "salary_in_usd": 10}]"#,
        )
        .unwrap();

        let app = SalaryExplorerApp::new(Some(path));
        assert_eq!(app.state.dataset.as_ref().unwrap().source, "mine.json");
        assert_eq!(app.state.summaries.len(), 1);
        assert_eq!(app.state.status_message, None);
    }
}
