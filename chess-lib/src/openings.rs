//! Openings explorer and player Elo progression.

use crate::chart::{Bar, BarChart, Chart, LineChart, Series};
use crate::error::{DataError, RenderError, SelectionError};
use crate::table::RecordTable;
use crate::view::{AnalysisMode, ParameterControl, Renderer, Selection, Trigger};

pub const OPENING: &str = "opening";
pub const ANALYSIS: &str = "analysis";
pub const PLAYER: &str = "player";
pub const COLOR: &str = "color";

pub const OPENINGS_COLUMNS: [&str; 4] = [
    "Opening",
    "SuccessRate",
    "AverageWhiteElo",
    "AverageBlackElo",
];

type OpeningPlot = fn(&RecordTable, &str) -> Result<Option<Chart>, DataError>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OpeningsMode {
    #[default]
    OpeningsExplorer,
    PlayerEloProgression,
}

#[derive(Debug, Clone, Copy, PartialEq, variant_count::VariantCount)]
pub enum OpeningAnalysis {
    WinRate,
    AverageRating,
}

impl OpeningAnalysis {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [Self::WinRate, Self::AverageRating];

    pub fn label(&self) -> &'static str {
        match self {
            OpeningAnalysis::WinRate => "Win Rate per Opening",
            OpeningAnalysis::AverageRating => "Average Rating per Opening",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|analysis| analysis.label() == label)
            .ok_or_else(|| SelectionError::Invalid {
                control: ANALYSIS,
                value: label.to_string(),
            })
    }

    fn plot(&self) -> OpeningPlot {
        match self {
            OpeningAnalysis::WinRate => plot_win_rate,
            OpeningAnalysis::AverageRating => plot_average_rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, variant_count::VariantCount)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [Self::Black, Self::White];

    pub fn label(&self) -> &'static str {
        match self {
            PieceColor::Black => "Black",
            PieceColor::White => "White",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| SelectionError::Invalid {
                control: COLOR,
                value: label.to_string(),
            })
    }
}

/// Tables of the openings dashboard plus the choices derived from them.
#[derive(Debug)]
pub struct OpeningsData {
    pub openings: RecordTable,
    pub black_elo: RecordTable,
    pub white_elo: RecordTable,
    opening_names: Vec<String>,
    player_names: Vec<String>,
}

impl OpeningsData {
    /// Validates the schema of every table. Any problem aborts the load.
    pub fn new(
        openings: RecordTable,
        black_elo: RecordTable,
        white_elo: RecordTable,
    ) -> Result<Self, DataError> {
        openings.require_columns(&OPENINGS_COLUMNS)?;
        for column in &OPENINGS_COLUMNS[1..] {
            openings.require_numeric(column)?;
        }
        for (table, color) in [(&black_elo, PieceColor::Black), (&white_elo, PieceColor::White)] {
            table.require_columns(&[color.label(), "Elo"])?;
            table.require_numeric("Elo")?;
        }

        let opening_names = openings.distinct_sorted("Opening")?;
        let mut player_names = black_elo.distinct(PieceColor::Black.label())?;
        player_names.extend(white_elo.distinct(PieceColor::White.label())?);
        player_names.sort();
        player_names.dedup();

        Ok(Self {
            openings,
            black_elo,
            white_elo,
            opening_names,
            player_names,
        })
    }

    pub fn opening_names(&self) -> &[String] {
        &self.opening_names
    }

    /// Sorted union of the players in both Elo tables.
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    fn elo_table(&self, color: PieceColor) -> &RecordTable {
        match color {
            PieceColor::Black => &self.black_elo,
            PieceColor::White => &self.white_elo,
        }
    }
}

impl AnalysisMode for OpeningsMode {
    type Data = OpeningsData;

    const ALL: &'static [Self] = &[Self::OpeningsExplorer, Self::PlayerEloProgression];

    fn label(&self) -> &'static str {
        match self {
            OpeningsMode::OpeningsExplorer => "Openings Explorer",
            OpeningsMode::PlayerEloProgression => "Player Elo Progression",
        }
    }

    fn mount(&self, data: &OpeningsData) -> Vec<ParameterControl> {
        match self {
            OpeningsMode::OpeningsExplorer => vec![
                ParameterControl::new(OPENING, "Select an opening:", data.opening_names().to_vec()),
                ParameterControl::from_static(
                    ANALYSIS,
                    "Select analysis:",
                    &OpeningAnalysis::ALL.map(|analysis| analysis.label()),
                ),
            ],
            OpeningsMode::PlayerEloProgression => vec![
                ParameterControl::new(PLAYER, "Select a player:", data.player_names().to_vec()),
                ParameterControl::from_static(
                    COLOR,
                    "Select color:",
                    &PieceColor::ALL.map(|color| color.label()),
                ),
            ],
        }
    }

    fn trigger(&self) -> Trigger {
        Trigger::OnChange
    }

    fn renderer(&self) -> Renderer<OpeningsData> {
        match self {
            OpeningsMode::OpeningsExplorer => render_openings_explorer,
            OpeningsMode::PlayerEloProgression => render_elo_progression,
        }
    }
}

fn render_openings_explorer(
    data: &OpeningsData,
    selection: &Selection,
) -> Result<Option<Chart>, RenderError> {
    let opening = selection.get(OPENING)?;
    let analysis = OpeningAnalysis::from_label(selection.get(ANALYSIS)?)?;
    Ok((analysis.plot())(&data.openings, opening)?)
}

fn render_elo_progression(
    data: &OpeningsData,
    selection: &Selection,
) -> Result<Option<Chart>, RenderError> {
    let player = selection.get(PLAYER)?;
    let color = PieceColor::from_label(selection.get(COLOR)?)?;
    Ok(plot_elo_progress(data, player, color)?)
}

/// Single bar with the opening's success rate on a `[0, 1]` axis.
pub fn plot_win_rate(openings: &RecordTable, opening: &str) -> Result<Option<Chart>, DataError> {
    let Some(row) = openings.find_first(&[("Opening", opening)])? else {
        return Ok(None);
    };
    Ok(Some(Chart::Bar(BarChart {
        title: None,
        y_label: Some("Win Rate".to_string()),
        bars: vec![Bar {
            label: row.text("Opening")?.to_string(),
            value: row.number("SuccessRate")?,
        }],
        y_bounds: Some([0.0, 1.0]),
    })))
}

pub fn plot_average_rating(
    openings: &RecordTable,
    opening: &str,
) -> Result<Option<Chart>, DataError> {
    let Some(row) = openings.find_first(&[("Opening", opening)])? else {
        return Ok(None);
    };
    Ok(Some(Chart::Bar(BarChart {
        title: None,
        y_label: None,
        bars: vec![
            Bar {
                label: "Average White Elo".to_string(),
                value: row.number("AverageWhiteElo")?,
            },
            Bar {
                label: "Average Black Elo".to_string(),
                value: row.number("AverageBlackElo")?,
            },
        ],
        y_bounds: None,
    })))
}

/// Elo of every game `player` played with `color`, in file order.
pub fn plot_elo_progress(
    data: &OpeningsData,
    player: &str,
    color: PieceColor,
) -> Result<Option<Chart>, DataError> {
    let rows = data.elo_table(color).filter(&[(color.label(), player)])?;
    if rows.is_empty() {
        return Ok(None);
    }
    let ys = rows
        .iter()
        .map(|row| row.number("Elo"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Chart::Line(LineChart {
        title: format!("Elo Progression for {player}"),
        x_label: "Game Number".to_string(),
        y_label: "Elo Rating".to_string(),
        series: vec![Series {
            name: format!("{} Elo", color.label()),
            ys,
        }],
        markers: true,
    })))
}
