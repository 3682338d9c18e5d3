use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::state::{AppState, Selection};

const LINE_COLOR: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);

fn year_axis(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    // Only label whole years.
    if mark.value.fract() == 0.0 {
        format!("{}", mark.value as i64)
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Jobs-over-time line chart
// ---------------------------------------------------------------------------

/// Line chart of total jobs per work year.
pub fn jobs_over_time(ui: &mut Ui, state: &AppState) {
    if state.dataset.as_ref().map_or(true, |ds| ds.is_empty()) {
        ui.label("No records to chart.");
        return;
    }

    // Summaries are kept in ascending year order regardless of table sort.
    let points: Vec<[f64; 2]> = state
        .summaries
        .iter()
        .map(|s| [s.year as f64, s.total_jobs as f64])
        .collect();
    let selected = state.selection.year();

    Plot::new("jobs_over_time")
        .height(400.0)
        .legend(Legend::default())
        .x_axis_label("year")
        .y_axis_label("jobs")
        .x_axis_formatter(year_axis)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}\ntotalJobs: {:.0}", value.x.round() as i64, value.y)
            }
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("totalJobs")
                    .color(LINE_COLOR)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .name("totalJobs")
                    .color(LINE_COLOR)
                    .radius(4.0),
            );
            if let Some(year) = selected {
                if let Some(s) = state.summaries.iter().find(|s| s.year == year) {
                    plot_ui.points(
                        Points::new(vec![[year as f64, s.total_jobs as f64]])
                            .color(LINE_COLOR)
                            .filled(false)
                            .radius(8.0),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Job-title bar chart for the selected year
// ---------------------------------------------------------------------------

/// Bar per job title of the selected year, coloured like the drill-down table.
pub fn job_title_bars(ui: &mut Ui, state: &AppState) {
    let Selection::Year { year, job_titles } = &state.selection else {
        return;
    };
    if job_titles.is_empty() {
        return;
    }

    let bars: Vec<Bar> = job_titles
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.job_count as f64)
                .name(&entry.job_title)
                .fill(state.title_colors.color_for(&entry.job_title))
        })
        .collect();

    Plot::new(("job_title_bars", *year))
        .height(260.0)
        .y_axis_label("jobs")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7).name(format!("Job titles in {year}")));
        });
}
