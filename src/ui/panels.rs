use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Selection};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Central panel – table, chart, drill-down
// ---------------------------------------------------------------------------

/// Render the main report: summary table, line chart and, once a year is
/// selected, its job-title breakdown.
pub fn report_panel(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view salaries  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Main Table");
            table::summary_table(ui, state);
            if state.selection != Selection::None {
                ui.label(
                    RichText::new("Check the selected year table below the line graph").italics(),
                );
            }
            ui.add_space(12.0);

            ui.heading("Number of Jobs Over the Years");
            plot::jobs_over_time(ui, state);

            if let Some(year) = state.selection.year() {
                ui.add_space(12.0);
                ui.heading(format!("Job Titles in {year}"));
                table::job_title_table(ui, state);
                ui.add_space(8.0);
                plot::job_title_bars(ui, state);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Copy summary as JSON"))
                .clicked()
            {
                copy_summary(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{}: {} records across {} years",
                ds.source,
                ds.len(),
                state.summaries.len()
            ));
            if !ds.skipped.is_empty() {
                let first = &ds.skipped[0];
                ui.label(
                    RichText::new(format!("{} malformed rows skipped", ds.skipped.len()))
                        .color(Color32::YELLOW),
                )
                .on_hover_text(format!("first at row {}: {}", first.row, first.issue));
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn copy_summary(ui: &Ui, state: &mut AppState) {
    match state.export_json() {
        Ok(text) => ui.ctx().copy_text(text),
        Err(e) => {
            log::error!("Failed to serialise summary: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(state, crate::data::loader::load_file(&path));
    }
}

/// Install a load result, or report the failure and keep the current data.
pub fn load_into_state(state: &mut AppState, result: anyhow::Result<crate::data::model::SalaryDataset>) {
    match result {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records from {} ({} years, {} skipped)",
                dataset.len(),
                dataset.source,
                dataset.distinct_years().len(),
                dataset.skipped.len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
