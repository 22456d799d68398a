/// カレンダー機能モジュール
pub mod commands;
pub mod grid;

pub use grid::{add_months, days_in_month, first_of_month, sub_months, DayCell, MonthGrid};
