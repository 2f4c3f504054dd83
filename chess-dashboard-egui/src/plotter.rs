use crate::*;
use chess_lib::chart::{BarChart, Chart, LineChart, PieChart, TextChart};

/// Draws the canvas chart, or a hint when nothing has been rendered yet.
/// `revision` changes the plot id so every new chart starts with fresh
/// bounds.
pub fn add_chart(ui: &mut egui::Ui, chart: Option<&Chart>, revision: u64) {
    let Some(chart) = chart else {
        ui.centered_and_justified(|ui| {
            ui.label("Choose the parameters above to show a chart.");
        });
        return;
    };

    if let Some(title) = chart.title() {
        ui.vertical_centered(|ui| ui.heading(title));
    }
    let plot_id = (chart.kind(), revision);
    match chart {
        Chart::Bar(bar_chart) => add_bar_chart(ui, plot_id, bar_chart),
        Chart::Pie(pie_chart) => add_pie_chart(ui, plot_id, pie_chart),
        Chart::Line(line_chart) => add_line_chart(ui, plot_id, line_chart),
        Chart::Text(text_chart) => add_text_chart(ui, plot_id, text_chart),
    }
}

fn add_bar_chart(ui: &mut egui::Ui, plot_id: impl std::hash::Hash, bar_chart: &BarChart) {
    let labels = bar_chart
        .bars
        .iter()
        .map(|bar| bar.label.clone())
        .collect::<Vec<_>>();
    let mut y_axis = egui_plot::AxisHints::new_y();
    if let Some(y_label) = &bar_chart.y_label {
        y_axis = y_axis.label(y_label.as_str());
    }

    egui_plot::Plot::new(plot_id)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .auto_bounds([false, false])
        .custom_x_axes(vec![egui_plot::AxisHints::new_x().formatter(
            move |mark, _range| utils::category_label(&labels, mark.value),
        )])
        .custom_y_axes(vec![y_axis])
        .show(ui, |plot_ui| {
            let x_range = [-0.5, bar_chart.bars.len() as f64 - 0.5];
            let [y_min, y_max] = bar_chart.y_bounds.unwrap_or_else(|| {
                utils::bar_value_range(bar_chart.bars.iter().map(|bar| bar.value))
            });
            plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max(
                [x_range[0], y_min],
                [x_range[1], y_max],
            ));
            plot_ui.bar_chart(make_bar_chart(bar_chart));
        });
}

/// One egui bar per category, placed at integer x positions.
fn make_bars(bar_chart: &BarChart) -> Vec<egui_plot::Bar> {
    bar_chart
        .bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            egui_plot::Bar::new(index as f64, bar.value)
                .name(&bar.label)
                .width(constants::BAR_WIDTH)
                .fill(utils::chart_color(0))
        })
        .collect()
}

/// Hovering a bar shows its label and value.
fn make_bar_chart(bar_chart: &BarChart) -> egui_plot::BarChart {
    egui_plot::BarChart::new(bar_chart.y_label.as_deref().unwrap_or("bars"), make_bars(bar_chart))
        .color(utils::chart_color(0))
        .element_formatter(Box::new(|bar, _chart| format!("{}: {:.2}", bar.name, bar.value)))
}

fn add_pie_chart(ui: &mut egui::Ui, plot_id: impl std::hash::Hash, pie_chart: &PieChart) {
    let radius = constants::PIE_RADIUS;
    egui_plot::Plot::new(plot_id)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_axes(false)
        .show_grid(false)
        .data_aspect(1.0)
        .auto_bounds([false, false])
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max(
                [-1.5 * radius, -1.5 * radius],
                [1.5 * radius, 1.5 * radius],
            ));

            for (index, (slice, angles)) in pie_chart
                .slices
                .iter()
                .zip(pie_chart.slice_angles())
                .enumerate()
            {
                let color = utils::chart_color(index);
                let wedge = utils::make_wedge_points(radius, angles, constants::PIE_SEGMENTS);
                plot_ui.polygon(
                    egui_plot::Polygon::new(slice.label.as_str(), wedge)
                        .fill_color(color)
                        .stroke(egui::Stroke::new(1_f32, constants::BACKGROUND_COLOR)),
                );

                let [x, y] = utils::wedge_label_position(radius, angles, 0.6);
                plot_ui.text(
                    egui_plot::Text::new("", egui_plot::PlotPoint::new(x, y), slice.percent_label())
                        .color(egui::Color32::WHITE),
                );
                let [x, y] = utils::wedge_label_position(radius, angles, 1.2);
                plot_ui.text(
                    egui_plot::Text::new("", egui_plot::PlotPoint::new(x, y), slice.label.as_str())
                        .color(egui::Color32::LIGHT_GRAY),
                );
            }
        });
}

fn add_line_chart(ui: &mut egui::Ui, plot_id: impl std::hash::Hash, line_chart: &LineChart) {
    egui_plot::Plot::new(plot_id)
        .x_axis_label(line_chart.x_label.as_str())
        .y_axis_label(line_chart.y_label.as_str())
        .label_formatter(|name, point| {
            format!("{name}\ngame {}: {:.0}", point.x.round() as i64, point.y)
        })
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            for (index, series) in line_chart.series.iter().enumerate() {
                let color = utils::chart_color(index);
                plot_ui.line(
                    egui_plot::Line::new(
                        series.name.as_str(),
                        egui_plot::PlotPoints::from_ys_f64(&series.ys),
                    )
                    .color(color),
                );
                if line_chart.markers {
                    plot_ui.points(
                        egui_plot::Points::new(
                            series.name.as_str(),
                            egui_plot::PlotPoints::from_ys_f64(&series.ys),
                        )
                        .color(color)
                        .shape(egui_plot::MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0),
                    );
                }
            }
        });
}

fn add_text_chart(ui: &mut egui::Ui, plot_id: impl std::hash::Hash, text_chart: &TextChart) {
    egui_plot::Plot::new(plot_id)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_axes(false)
        .show_grid(false)
        .auto_bounds([false, false])
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max([0.0, 0.0], [1.0, 1.0]));
            plot_ui.text(
                egui_plot::Text::new(
                    "",
                    egui_plot::PlotPoint::new(0.5, 0.5),
                    egui::RichText::new(text_chart.text.as_str()).size(24.0),
                )
                .color(egui::Color32::WHITE),
            );
        });
}
