//! Dashboard figures computed from loaded rows

pub mod backtest;
pub mod models;
pub mod overview;
pub mod type_winrate;

pub use backtest::{backtest, BacktestReport};
pub use models::ModelEvaluation;
pub use overview::{DatasetOverview, StatAverages};
pub use type_winrate::{type_win_rates, TypeWinRate};
