//! Win rates per ECO code and time control, and the time control advantage.

use crate::chart::{Chart, PieChart, TextChart};
use crate::error::{DataError, RenderError};
use crate::table::RecordTable;
use crate::view::{AnalysisMode, ParameterControl, Renderer, Selection, Trigger};

pub const PLAYER: &str = "player";
pub const ECO: &str = "eco";
pub const TIME_CONTROL: &str = "time_control";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WinRateMode {
    #[default]
    EcoWinRate,
    TimeControlWinRate,
    TimeControlAdvantage,
}

/// Tables of the win-rate dashboard plus the choices derived from them.
#[derive(Debug)]
pub struct WinRateData {
    pub eco: RecordTable,
    pub time_control: RecordTable,
    pub advantage: RecordTable,
    eco_players: Vec<String>,
    eco_codes: Vec<String>,
    time_control_players: Vec<String>,
    time_controls: Vec<String>,
    advantage_time_controls: Vec<String>,
}

impl WinRateData {
    pub fn new(
        eco: RecordTable,
        time_control: RecordTable,
        advantage: RecordTable,
    ) -> Result<Self, DataError> {
        eco.require_columns(&["Player", "ECO", "TotalWinRate"])?;
        eco.require_numeric("TotalWinRate")?;
        time_control.require_columns(&["Player", "TimeControl", "TotalWinRate"])?;
        time_control.require_numeric("TotalWinRate")?;
        advantage.require_columns(&["TimeControl", "Advantage"])?;

        Ok(Self {
            eco_players: eco.distinct("Player")?,
            eco_codes: eco.distinct("ECO")?,
            time_control_players: time_control.distinct("Player")?,
            time_controls: time_control.distinct("TimeControl")?,
            advantage_time_controls: advantage.distinct("TimeControl")?,
            eco,
            time_control,
            advantage,
        })
    }
}

impl AnalysisMode for WinRateMode {
    type Data = WinRateData;

    const ALL: &'static [Self] = &[
        Self::EcoWinRate,
        Self::TimeControlWinRate,
        Self::TimeControlAdvantage,
    ];

    fn label(&self) -> &'static str {
        match self {
            WinRateMode::EcoWinRate => "ECO Win Rate",
            WinRateMode::TimeControlWinRate => "Time Control Win Rate",
            WinRateMode::TimeControlAdvantage => "Time Control Advantage",
        }
    }

    fn mount(&self, data: &WinRateData) -> Vec<ParameterControl> {
        match self {
            WinRateMode::EcoWinRate => vec![
                ParameterControl::new(PLAYER, "Player Name:", data.eco_players.clone()),
                ParameterControl::new(ECO, "ECO Code:", data.eco_codes.clone()),
            ],
            WinRateMode::TimeControlWinRate => vec![
                ParameterControl::new(PLAYER, "Player Name:", data.time_control_players.clone()),
                ParameterControl::new(TIME_CONTROL, "Time Control:", data.time_controls.clone()),
            ],
            WinRateMode::TimeControlAdvantage => vec![ParameterControl::new(
                TIME_CONTROL,
                "Time Control:",
                data.advantage_time_controls.clone(),
            )],
        }
    }

    fn trigger(&self) -> Trigger {
        match self {
            WinRateMode::EcoWinRate | WinRateMode::TimeControlWinRate => Trigger::Button("Analyse"),
            WinRateMode::TimeControlAdvantage => Trigger::Button("Show Advantage"),
        }
    }

    fn renderer(&self) -> Renderer<WinRateData> {
        match self {
            WinRateMode::EcoWinRate => render_eco_win_rate,
            WinRateMode::TimeControlWinRate => render_time_control_win_rate,
            WinRateMode::TimeControlAdvantage => render_time_control_advantage,
        }
    }
}

fn render_eco_win_rate(
    data: &WinRateData,
    selection: &Selection,
) -> Result<Option<Chart>, RenderError> {
    Ok(analyse_eco_win_rate(
        &data.eco,
        selection.get(PLAYER)?,
        selection.get(ECO)?,
    )?)
}

fn render_time_control_win_rate(
    data: &WinRateData,
    selection: &Selection,
) -> Result<Option<Chart>, RenderError> {
    Ok(analyse_time_control_win_rate(
        &data.time_control,
        selection.get(PLAYER)?,
        selection.get(TIME_CONTROL)?,
    )?)
}

fn render_time_control_advantage(
    data: &WinRateData,
    selection: &Selection,
) -> Result<Option<Chart>, RenderError> {
    Ok(display_time_control_advantage(
        &data.advantage,
        selection.get(TIME_CONTROL)?,
    )?)
}

pub fn analyse_eco_win_rate(
    eco: &RecordTable,
    player: &str,
    eco_code: &str,
) -> Result<Option<Chart>, DataError> {
    let Some(row) = eco.find_first(&[("Player", player), ("ECO", eco_code)])? else {
        return Ok(None);
    };
    Ok(Some(Chart::Pie(PieChart::win_loss(
        format!("Win Rate for {player} [ECO: {eco_code}]"),
        row.number("TotalWinRate")?,
    ))))
}

pub fn analyse_time_control_win_rate(
    time_control: &RecordTable,
    player: &str,
    clock: &str,
) -> Result<Option<Chart>, DataError> {
    let Some(row) = time_control.find_first(&[("Player", player), ("TimeControl", clock)])? else {
        return Ok(None);
    };
    Ok(Some(Chart::Pie(PieChart::win_loss(
        format!("Win Rate for {player} (Time Control: {clock})"),
        row.number("TotalWinRate")?,
    ))))
}

/// Shows the advantage cell as text, without axes.
pub fn display_time_control_advantage(
    advantage: &RecordTable,
    clock: &str,
) -> Result<Option<Chart>, DataError> {
    let Some(row) = advantage.find_first(&[("TimeControl", clock)])? else {
        return Ok(None);
    };
    Ok(Some(Chart::Text(TextChart {
        title: format!("Advantage (Time Control: {clock})"),
        text: format!("Advantage: {}", row.text("Advantage")?),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasHost;
    use crate::chart::loss_rate;
    use crate::error::SelectionError;
    use crate::view::{RenderOutcome, ViewSelector};
    use assert_approx_eq::assert_approx_eq;
    use more_asserts::{assert_ge, assert_le};

    const ECO_CSV: &str = "\
Player,ECO,TotalWinRate
Carlsen,B90,0.62
Carlsen,C42,0.51
Nakamura,B90,0.44
";
    const TIME_CONTROL_CSV: &str = "\
Player,TimeControl,TotalWinRate
Carlsen,180+0,0.71
Nakamura,180+0,0.66
Carlsen,600+5,0.58
";
    const ADVANTAGE_CSV: &str = "\
TimeControl,Advantage
180+0,White
600+5,Black
";

    fn table(name: &str, csv: &str) -> RecordTable {
        RecordTable::from_reader(name, csv.as_bytes()).unwrap()
    }

    fn data() -> WinRateData {
        WinRateData::new(
            table("eco", ECO_CSV),
            table("time control", TIME_CONTROL_CSV),
            table("advantage", ADVANTAGE_CSV),
        )
        .unwrap()
    }

    fn pie(chart: Option<Chart>) -> PieChart {
        match chart {
            Some(Chart::Pie(pie)) => pie,
            other => panic!("expected a pie chart, got {other:?}"),
        }
    }

    #[test]
    fn eco_win_rate_is_a_win_loss_pie() {
        let data = data();
        let pie = pie(analyse_eco_win_rate(&data.eco, "Carlsen", "B90").unwrap());
        assert_eq!(pie.title, "Win Rate for Carlsen [ECO: B90]");
        assert_approx_eq!(pie.slices[0].fraction, 0.62);
        assert_approx_eq!(pie.slices[1].fraction, 0.38);
        assert_approx_eq!(pie.start_angle_degrees, 140.0);
    }

    #[test]
    fn eco_lookup_ignores_case() {
        let data = data();
        let expected = analyse_eco_win_rate(&data.eco, "Carlsen", "B90").unwrap();
        for player in ["carlsen", "CARLSEN"] {
            let chart = analyse_eco_win_rate(&data.eco, player, "b90").unwrap();
            assert_eq!(
                pie(chart).slices,
                pie(expected.clone()).slices,
                "player {player}"
            );
        }
    }

    #[test]
    fn win_and_loss_sum_to_one_for_every_row() {
        let data = data();
        for row in data.eco.rows().chain(data.time_control.rows()) {
            let win_rate = row.number("TotalWinRate").unwrap();
            assert_ge!(win_rate, 0.0);
            assert_le!(win_rate, 1.0);
            assert_approx_eq!(win_rate + loss_rate(win_rate), 1.0);
        }
    }

    #[test]
    fn time_control_win_rate() {
        let data = data();
        let pie = pie(analyse_time_control_win_rate(&data.time_control, "Carlsen", "600+5").unwrap());
        assert_eq!(pie.title, "Win Rate for Carlsen (Time Control: 600+5)");
        assert_approx_eq!(pie.slices[0].fraction, 0.58);
    }

    #[test]
    fn advantage_is_shown_as_text() {
        let data = data();
        let chart = display_time_control_advantage(&data.advantage, "180+0").unwrap();
        assert_eq!(
            chart,
            Some(Chart::Text(TextChart {
                title: "Advantage (Time Control: 180+0)".to_string(),
                text: "Advantage: White".to_string(),
            }))
        );
    }

    #[test]
    fn unknown_time_control_or_player_is_not_found() {
        let data = data();
        assert_eq!(
            analyse_time_control_win_rate(&data.time_control, "Nakamura", "600+5").unwrap(),
            None
        );
        assert_eq!(
            analyse_time_control_win_rate(&data.time_control, "Magnus", "180+0").unwrap(),
            None
        );
        assert_eq!(display_time_control_advantage(&data.advantage, "60+0").unwrap(), None);
    }

    #[test]
    fn missing_time_control_row_issues_no_replace() {
        let data = data();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        view.select_mode(WinRateMode::TimeControlWinRate, &data);
        let mut canvas = CanvasHost::new();
        view.render(&data, &mut canvas).unwrap();
        let before = canvas.current().cloned();

        view.select_value(PLAYER, "Nakamura").unwrap();
        view.select_value(TIME_CONTROL, "600+5").unwrap();
        assert_eq!(
            view.render(&data, &mut canvas).unwrap(),
            RenderOutcome::NotFound
        );
        assert_eq!(canvas.revision(), 1);
        assert_eq!(canvas.current().cloned(), before);
    }

    #[test]
    fn missing_eco_row_issues_no_replace() {
        let data = data();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        let mut canvas = CanvasHost::new();
        view.render(&data, &mut canvas).unwrap();
        let before = canvas.current().cloned();

        let selection = Selection::default()
            .with(PLAYER, "Magnus")
            .with(ECO, "B90");
        assert_eq!(render_eco_win_rate(&data, &selection).unwrap(), None);

        view.select_value(PLAYER, "Nakamura").unwrap();
        view.select_value(ECO, "C42").unwrap();
        assert_eq!(
            view.render(&data, &mut canvas).unwrap(),
            RenderOutcome::NotFound
        );
        assert_eq!(canvas.revision(), 1);
        assert_eq!(canvas.current().cloned(), before);
    }

    #[test]
    fn controls_use_distinct_values() {
        let data = data();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        view.select_mode(WinRateMode::TimeControlWinRate, &data);
        let controls = view.controls();
        assert_eq!(controls[0].options, ["Carlsen", "Nakamura"]);
        assert_eq!(controls[1].options, ["180+0", "600+5"]);
    }

    #[test]
    fn mode_round_trip_keeps_one_set_of_controls() {
        let data = data();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        view.select_mode(WinRateMode::TimeControlAdvantage, &data);
        assert_eq!(view.controls().len(), 1);
        view.select_mode(WinRateMode::EcoWinRate, &data);
        let keys = view
            .controls()
            .iter()
            .map(|control| control.key)
            .collect::<Vec<_>>();
        assert_eq!(keys, [PLAYER, ECO]);
    }

    #[test]
    fn triggers_are_buttons() {
        assert_eq!(WinRateMode::EcoWinRate.trigger(), Trigger::Button("Analyse"));
        assert_eq!(
            WinRateMode::TimeControlAdvantage.trigger(),
            Trigger::Button("Show Advantage")
        );
    }

    #[test]
    fn empty_advantage_table_reports_missing_selection() {
        let data = WinRateData::new(
            table("eco", ECO_CSV),
            table("time control", TIME_CONTROL_CSV),
            table("advantage", "TimeControl,Advantage\n"),
        )
        .unwrap();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        view.select_mode(WinRateMode::TimeControlAdvantage, &data);
        let mut canvas = CanvasHost::new();
        assert!(matches!(
            view.render(&data, &mut canvas),
            Err(RenderError::Selection(SelectionError::Missing(TIME_CONTROL)))
        ));
        assert!(canvas.current().is_none());
    }

    #[test]
    fn every_mode_renders_its_first_choice() {
        let data = data();
        let mut view = ViewSelector::<WinRateMode>::new(&data);
        let mut canvas = CanvasHost::new();
        for mode in WinRateMode::ALL {
            view.select_mode(*mode, &data);
            assert_eq!(
                view.render(&data, &mut canvas).unwrap(),
                RenderOutcome::Displayed
            );
        }
        assert_eq!(canvas.revision(), WinRateMode::ALL.len() as u64);
        assert!(matches!(canvas.current(), Some(Chart::Text(_))));
    }
}
