pub mod canvas;
pub mod chart;
pub mod error;
pub mod openings;
pub mod table;
pub mod view;
pub mod win_rate;
