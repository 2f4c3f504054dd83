use crate::*;
use chess_lib::canvas::CanvasHost;
use chess_lib::view::{AnalysisMode, RenderOutcome, Trigger, ViewSelector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<M> {
    ModeSelected(M),
    ParameterChanged,
    TriggerPressed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    NotFound,
    Invalid(String),
}

/// One window: mode dropdown, the mounted parameter controls and the canvas.
pub struct Dashboard<M: AnalysisMode> {
    data: M::Data,
    view: ViewSelector<M>,
    canvas: CanvasHost,
    status: Option<Status>,
}

impl<M: AnalysisMode> Dashboard<M> {
    pub fn new(data: M::Data) -> Self {
        let view = ViewSelector::new(&data);
        Self {
            data,
            view,
            canvas: CanvasHost::new(),
            status: None,
        }
    }

    pub fn view(&self) -> &ViewSelector<M> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewSelector<M> {
        &mut self.view
    }

    pub fn canvas(&self) -> &CanvasHost {
        &self.canvas
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn handle(&mut self, event: Event<M>) {
        match event {
            Event::ModeSelected(mode) => {
                if self.view.select_mode(mode, &self.data) {
                    self.status = None;
                }
            }
            Event::ParameterChanged => {
                if self.view.mode().trigger() == Trigger::OnChange {
                    self.render();
                }
            }
            Event::TriggerPressed => self.render(),
        }
    }

    fn render(&mut self) {
        self.status = match self.view.render(&self.data, &mut self.canvas) {
            Ok(RenderOutcome::Displayed) => None,
            Ok(RenderOutcome::NotFound) => Some(Status::NotFound),
            Err(error) => {
                tracing::warn!(%error, "cannot render chart");
                Some(Status::Invalid(error.to_string()))
            }
        };
    }

    fn add_controls(&mut self, ui: &mut egui::Ui) -> Vec<Event<M>> {
        let mut events = Vec::new();
        ui.vertical_centered(|ui| {
            if let Some(mode) = control::add_mode_selector(ui, self.view.mode()) {
                events.push(Event::ModeSelected(mode));
            }
        });
        ui.add_space(10.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                if control::add_parameter_controls(ui, self.view.controls_mut()) {
                    events.push(Event::ParameterChanged);
                }
                if control::add_trigger(ui, self.view.mode().trigger()) {
                    events.push(Event::TriggerPressed);
                }
            });
        });

        match &self.status {
            Some(Status::NotFound) => {
                ui.colored_label(constants::NOT_FOUND_COLOR, "No data found.");
            }
            Some(Status::Invalid(message)) => {
                ui.colored_label(constants::ERROR_COLOR, message.as_str());
            }
            None => {}
        }
        events
    }
}

impl<M: AnalysisMode> eframe::App for Dashboard<M> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls")
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                for event in self.add_controls(ui) {
                    self.handle(event);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                plotter::add_chart(ui, self.canvas.current(), self.canvas.revision());
            });

        if self.canvas.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_lib::chart::Chart;
    use chess_lib::openings::{self, OpeningsData, OpeningsMode};
    use chess_lib::table::RecordTable;
    use chess_lib::win_rate::{self, WinRateData, WinRateMode};

    fn table(name: &str, csv: &str) -> RecordTable {
        RecordTable::from_reader(name, csv.as_bytes()).unwrap()
    }

    fn openings_dashboard() -> Dashboard<OpeningsMode> {
        Dashboard::new(
            OpeningsData::new(
                table(
                    "openings",
                    "Opening,SuccessRate,AverageWhiteElo,AverageBlackElo\n\
                     Sicilian Defense,0.55,1650,1642\n",
                ),
                table("black elo", "Black,Elo\nCarlsen,2830\n"),
                table("white elo", "White,Elo\nAnand,2750\n"),
            )
            .unwrap(),
        )
    }

    fn win_rate_dashboard() -> Dashboard<WinRateMode> {
        Dashboard::new(
            WinRateData::new(
                table("eco", "Player,ECO,TotalWinRate\nCarlsen,B90,0.62\nNakamura,C42,0.4\n"),
                table("time control", "Player,TimeControl,TotalWinRate\nCarlsen,180+0,0.7\n"),
                table("advantage", "TimeControl,Advantage\n180+0,White\n"),
            )
            .unwrap(),
        )
    }

    #[test]
    fn starts_in_first_mode_without_chart() {
        let dashboard = openings_dashboard();
        assert_eq!(dashboard.view().mode(), OpeningsMode::OpeningsExplorer);
        assert!(dashboard.canvas().current().is_none());
        assert_eq!(dashboard.status(), None);
    }

    #[test]
    fn parameter_change_renders_on_change_modes() {
        let mut dashboard = openings_dashboard();
        dashboard.handle(Event::ParameterChanged);
        assert!(matches!(dashboard.canvas().current(), Some(Chart::Bar(_))));
        assert_eq!(dashboard.canvas().revision(), 1);
    }

    #[test]
    fn parameter_change_waits_for_button_modes() {
        let mut dashboard = win_rate_dashboard();
        dashboard.handle(Event::ParameterChanged);
        assert_eq!(dashboard.canvas().revision(), 0);
        dashboard.handle(Event::TriggerPressed);
        assert!(matches!(dashboard.canvas().current(), Some(Chart::Pie(_))));
    }

    #[test]
    fn miss_keeps_chart_and_reports_status() {
        let mut dashboard = win_rate_dashboard();
        dashboard.handle(Event::TriggerPressed);
        let before = dashboard.canvas().current().cloned();

        dashboard
            .view_mut()
            .select_value(win_rate::ECO, "C42")
            .unwrap();
        dashboard.handle(Event::TriggerPressed);
        assert_eq!(dashboard.status(), Some(&Status::NotFound));
        assert_eq!(dashboard.canvas().current().cloned(), before);
        assert_eq!(dashboard.canvas().revision(), 1);
    }

    #[test]
    fn mode_switch_clears_status_and_keeps_chart() {
        let mut dashboard = win_rate_dashboard();
        dashboard.handle(Event::TriggerPressed);
        dashboard
            .view_mut()
            .select_value(win_rate::PLAYER, "Nakamura")
            .unwrap();
        dashboard.handle(Event::TriggerPressed);
        assert_eq!(dashboard.status(), Some(&Status::NotFound));

        dashboard.handle(Event::ModeSelected(WinRateMode::TimeControlAdvantage));
        assert_eq!(dashboard.status(), None);
        assert!(matches!(dashboard.canvas().current(), Some(Chart::Pie(_))));
        assert_eq!(dashboard.view().controls().len(), 1);
    }

    #[test]
    fn switching_there_and_back_mounts_one_set_of_controls() {
        let mut dashboard = openings_dashboard();
        dashboard.handle(Event::ModeSelected(OpeningsMode::PlayerEloProgression));
        dashboard.handle(Event::ModeSelected(OpeningsMode::OpeningsExplorer));
        let keys = dashboard
            .view()
            .controls()
            .iter()
            .map(|control| control.key)
            .collect::<Vec<_>>();
        assert_eq!(keys, [openings::OPENING, openings::ANALYSIS]);
    }

    #[test]
    fn invalid_selection_is_reported_not_panicking() {
        let mut dashboard = win_rate_dashboard();
        dashboard.view_mut().controls_mut()[0].selected = None;
        dashboard.handle(Event::TriggerPressed);
        assert!(matches!(dashboard.status(), Some(Status::Invalid(_))));
        assert!(dashboard.canvas().current().is_none());
    }
}
