use crate::*;

pub fn chart_color(index: usize) -> egui::Color32 {
    constants::CHART_COLORS[index % constants::CHART_COLORS.len()]
}

/// Closed outline of a pie wedge: the center, then the arc from `angles[0]`
/// to `angles[1]`.
pub fn make_wedge_points(radius: f64, angles: [f64; 2], num_segments: usize) -> Vec<[f64; 2]> {
    let [start, end] = angles;
    let num_segments = num_segments.max(1);
    let mut points = Vec::with_capacity(num_segments + 2);
    points.push([0.0, 0.0]);
    points.extend((0..=num_segments).map(|step| {
        let angle = start + (end - start) * (step as f64) / (num_segments as f64);
        [radius * angle.cos(), radius * angle.sin()]
    }));
    points
}

/// Point on the bisector of a wedge, `radius_factor` times the pie radius
/// away from the center.
pub fn wedge_label_position(radius: f64, angles: [f64; 2], radius_factor: f64) -> [f64; 2] {
    let middle = 0.5 * (angles[0] + angles[1]);
    [
        radius_factor * radius * middle.cos(),
        radius_factor * radius * middle.sin(),
    ]
}

/// Label for integer grid marks that hit a bar, nothing in between.
pub fn category_label(labels: &[String], value: f64) -> String {
    if (value - value.round()).abs() > 1e-6 || value < -0.5 {
        return String::new();
    }
    labels.get(value.round() as usize).cloned().unwrap_or_default()
}

/// Y range covering zero and every bar value with 10% headroom on each
/// side that holds bars. Falls back to `[0, 1]` when all values are zero.
pub fn bar_value_range(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)));
    if max - min <= f64::EPSILON {
        return [0.0, 1.0];
    }
    [1.1 * min, 1.1 * max]
}
