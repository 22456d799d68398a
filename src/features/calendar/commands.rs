use super::grid::MonthGrid;
use crate::features::subscriptions::repository;
use crate::AppState;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// カレンダー画面の表示データ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView {
    /// 例: "mars 2025"
    pub month_label: String,
    /// 日曜始まりの曜日見出し
    pub weekdays: Vec<String>,
    pub grid: MonthGrid,
}

/// 月のカレンダーを取得する
///
/// # 引数
/// * `reference_date` - 表示する月に含まれる日付（省略時は今日）
/// * `state` - アプリケーション状態
pub fn get_month_grid(
    reference_date: Option<NaiveDate>,
    state: &AppState,
) -> Result<CalendarView, String> {
    let today = state.config.today();
    let reference = reference_date.unwrap_or(today);

    let subscriptions = {
        let store = state.store()?;
        repository::find_all(&**store)?
    };
    let localizer = state.localizer()?;

    Ok(CalendarView {
        month_label: format!("{} {}", localizer.month_name(reference), reference.year()),
        weekdays: localizer.weekday_short_names(),
        grid: MonthGrid::build(reference, today, &subscriptions),
    })
}
