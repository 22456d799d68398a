/// 支出集計機能モジュール
///
/// 基準日に対する請求済み・残りの金額と次回請求を1回の走査で求めます。
pub mod commands;
pub mod dashboard;
pub mod service;

pub use dashboard::DashboardSnapshot;
pub use service::{calculate_for_day, calculate_monthly_stats, MonthlyStats};
