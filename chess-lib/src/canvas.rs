use crate::chart::Chart;

/// Owns the one chart shown by a dashboard.
#[derive(Debug, Default)]
pub struct CanvasHost {
    chart: Option<Chart>,
    revision: u64,
    redraw_requested: bool,
}

impl CanvasHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attached chart. The previous chart is dropped before the
    /// new one is attached, in a single step.
    pub fn display(&mut self, chart: Chart) {
        drop(self.chart.replace(chart));
        self.revision += 1;
        self.redraw_requested = true;
        if let Some(chart) = &self.chart {
            tracing::debug!(kind = chart.kind(), title = ?chart.title(), "chart displayed");
        }
    }

    pub fn current(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Number of `display` calls so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns whether a redraw is pending and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
