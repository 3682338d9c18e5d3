use eframe::egui::{self, Label, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::sort::SummaryColumn;
use crate::state::{AppState, Selection};

const ROW_HEIGHT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 26.0;

// ---------------------------------------------------------------------------
// Per-year summary table
// ---------------------------------------------------------------------------

/// Sortable summary table.  Header click sorts, row click drills down.
pub fn summary_table(ui: &mut Ui, state: &mut AppState) {
    let mut sort_clicked: Option<SummaryColumn> = None;
    let mut year_clicked: Option<i32> = None;
    let selected_year = state.selection.year();

    ui.push_id("summary_table", |ui: &mut Ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .sense(Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for _ in SummaryColumn::ALL {
            table = table.column(Column::remainder().at_least(120.0));
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                for column in SummaryColumn::ALL {
                    header.col(|ui: &mut Ui| {
                        let text = format!("{}{}", column.header(), state.sort.indicator(column));
                        let label = Label::new(RichText::new(text).strong()).sense(Sense::click());
                        if ui.add(label).on_hover_text("Click to sort").clicked() {
                            sort_clicked = Some(column);
                        }
                    });
                }
            })
            .body(|mut body| {
                for summary in state.sorted_summaries() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(selected_year == Some(summary.year));
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.year.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.total_jobs.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{:.2}", summary.average_salary));
                        });
                        if row.response().clicked() {
                            year_clicked = Some(summary.year);
                        }
                    });
                }
            });
    });

    if let Some(column) = sort_clicked {
        state.toggle_sort(column);
    }
    if let Some(year) = year_clicked {
        state.select_year(year);
    }
}

// ---------------------------------------------------------------------------
// Job-title drill-down table
// ---------------------------------------------------------------------------

/// Job titles of the selected year.  Renders nothing without a selection.
pub fn job_title_table(ui: &mut Ui, state: &AppState) {
    let Selection::Year { job_titles, .. } = &state.selection else {
        return;
    };

    ui.push_id("job_title_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(200.0))
            .column(Column::auto().at_least(120.0))
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Job Title");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong("Number of Jobs");
                });
            })
            .body(|mut body| {
                for entry in job_titles {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            let color = state.title_colors.color_for(&entry.job_title);
                            ui.label(RichText::new(&entry.job_title).color(color));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(entry.job_count.to_string());
                        });
                    });
                }
            });
    });
}
