/// Toolkit independent description of a single chart. The front-end turns
/// it into plot items; nothing here knows about widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Pie(PieChart),
    Line(LineChart),
    Text(TextChart),
}

impl Chart {
    pub fn title(&self) -> Option<&str> {
        match self {
            Chart::Bar(chart) => chart.title.as_deref(),
            Chart::Pie(chart) => Some(&chart.title),
            Chart::Line(chart) => Some(&chart.title),
            Chart::Text(chart) => Some(&chart.title),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Chart::Bar(_) => "bar",
            Chart::Pie(_) => "pie",
            Chart::Line(_) => "line",
            Chart::Text(_) => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: Option<String>,
    pub y_label: Option<String>,
    pub bars: Vec<Bar>,
    /// Fixed `[min, max]` of the y axis, auto scaled when `None`.
    pub y_bounds: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub fraction: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Angle of the first slice edge, counter-clockwise from the positive x
    /// axis.
    pub start_angle_degrees: f64,
}

impl PieChart {
    pub const DEFAULT_START_ANGLE_DEGREES: f64 = 140.0;

    /// Win slice followed by its complement.
    pub fn win_loss(title: String, win_rate: f64) -> Self {
        Self {
            title,
            slices: vec![
                PieSlice {
                    label: "Win".to_string(),
                    fraction: win_rate,
                },
                PieSlice {
                    label: "Loss or Draw".to_string(),
                    fraction: loss_rate(win_rate),
                },
            ],
            start_angle_degrees: Self::DEFAULT_START_ANGLE_DEGREES,
        }
    }

    /// `[start, end]` angles in radians for every slice, normalized by the
    /// total so the slices always close the circle.
    pub fn slice_angles(&self) -> Vec<[f64; 2]> {
        let total = self.slices.iter().map(|s| s.fraction.max(0.0)).sum::<f64>();
        let mut start = self.start_angle_degrees.to_radians();
        self.slices
            .iter()
            .map(|slice| {
                let share = if total > 0.0 {
                    slice.fraction.max(0.0) / total
                } else {
                    0.0
                };
                let end = start + share * std::f64::consts::TAU;
                let angles = [start, end];
                start = end;
                angles
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub ys: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub markers: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextChart {
    pub title: String,
    pub text: String,
}

/// Complement of a win rate. Draws count as non-wins.
pub fn loss_rate(win_rate: f64) -> f64 {
    1.0 - win_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn win_and_loss_sum_to_one() {
        for win_rate in [0.0, 0.1, 0.38, 0.5, 0.62, 0.99, 1.0] {
            assert_approx_eq!(win_rate + loss_rate(win_rate), 1.0);
        }
        assert_approx_eq!(loss_rate(0.62), 0.38);
    }

    #[test]
    fn win_loss_pie() {
        let pie = PieChart::win_loss("Win Rate".to_string(), 0.62);
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "Win");
        assert_eq!(pie.slices[1].label, "Loss or Draw");
        assert_eq!(pie.slices[0].percent_label(), "62.0%");
        assert_eq!(pie.slices[1].percent_label(), "38.0%");
    }

    #[test]
    fn slice_angles_close_the_circle() {
        let pie = PieChart::win_loss(String::new(), 0.25);
        let angles = pie.slice_angles();
        let start = PieChart::DEFAULT_START_ANGLE_DEGREES.to_radians();
        assert_approx_eq!(angles[0][0], start);
        assert_approx_eq!(angles[0][1] - angles[0][0], 0.25 * std::f64::consts::TAU);
        assert_approx_eq!(angles[1][0], angles[0][1]);
        assert_approx_eq!(angles[1][1], start + std::f64::consts::TAU);
        for [from, to] in angles {
            assert_ge!(to, from);
        }
    }

    #[test]
    fn empty_pie_has_no_area() {
        let pie = PieChart {
            title: String::new(),
            slices: vec![PieSlice {
                label: "Win".to_string(),
                fraction: 0.0,
            }],
            start_angle_degrees: 0.0,
        };
        let angles = pie.slice_angles();
        assert_le!(angles[0][1] - angles[0][0], 0.0);
    }

    #[test]
    fn chart_titles() {
        let bar = Chart::Bar(BarChart {
            title: None,
            y_label: Some("Win Rate".to_string()),
            bars: vec![],
            y_bounds: Some([0.0, 1.0]),
        });
        assert_eq!(bar.title(), None);
        assert_eq!(bar.kind(), "bar");
        let text = Chart::Text(TextChart {
            title: "Advantage".to_string(),
            text: "Advantage: White".to_string(),
        });
        assert_eq!(text.title(), Some("Advantage"));
    }
}
