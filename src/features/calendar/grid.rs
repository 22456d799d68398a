use crate::features::subscriptions::models::Subscription;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// カレンダーの1日分のセル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    /// この日に請求されるサブスクリプションのID（一覧の順）
    pub subscription_ids: Vec<String>,
}

/// 1か月分のカレンダー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// 1日より前の空白セル数（日曜日 = 0）
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// 基準日の月のカレンダーを作る
    ///
    /// # 引数
    /// * `reference` - 表示する月に含まれる任意の日付
    /// * `today` - 今日の日付（強調表示用）
    /// * `subscriptions` - サブスクリプション一覧
    ///
    /// 請求日は日の完全一致で割り当てるため、月の日数を超える請求日は表示されない
    pub fn build(reference: NaiveDate, today: NaiveDate, subscriptions: &[Subscription]) -> Self {
        let first = first_of_month(reference);
        let is_current_month = today.year() == first.year() && today.month() == first.month();

        let days = (1..=days_in_month(first))
            .map(|day| DayCell {
                day,
                is_today: is_current_month && today.day() == day,
                subscription_ids: subscriptions
                    .iter()
                    .filter(|s| s.day == day)
                    .map(|s| s.id.clone())
                    .collect(),
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// 日付からセルを取得する
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.days.get(day.checked_sub(1)? as usize)
    }

    /// 週ごとの行数（末尾の空白を含む）
    pub fn week_rows(&self) -> usize {
        (self.leading_blanks as usize + self.days.len()).div_ceil(7)
    }
}

/// 月の1日
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// 月の日数
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// 月を進める（移動先の月に存在しない日は月末に丸める）
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// 月を戻す（移動先の月に存在しない日は月末に丸める）
pub fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}
