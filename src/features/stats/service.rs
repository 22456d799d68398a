use crate::features::subscriptions::models::Subscription;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// 月次の支出集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    /// 全サブスクリプションの合計金額
    pub total_cost: f64,
    /// 基準日より前に請求済みの金額
    pub paid_this_month: f64,
    /// 基準日以降に請求予定の金額（基準日当日を含む）
    pub remaining_this_month: f64,
    /// 次回の請求（基準日以降で最も近いもの）
    pub next_payment: Option<Subscription>,
}

impl MonthlyStats {
    /// 支払い済みの割合（0〜100）
    ///
    /// 合計が0の場合は0を返す
    pub fn paid_ratio_percent(&self) -> f64 {
        if self.total_cost > 0.0 {
            self.paid_this_month / self.total_cost * 100.0
        } else {
            0.0
        }
    }
}

/// 基準日を使って月次集計を行う
///
/// 基準日のうち日（day-of-month）のみを使用する
pub fn calculate_monthly_stats(subscriptions: &[Subscription], reference: NaiveDate) -> MonthlyStats {
    calculate_for_day(subscriptions, reference.day())
}

/// 基準日の日を指定して月次集計を行う
///
/// # 集計規則
/// - `day < reference_day` は請求済み、それ以外は残り
/// - 基準日当日の請求は未払いとして扱い、次回請求の候補になる
/// - 差が同じ場合は一覧で先に現れたものを次回請求とする
pub fn calculate_for_day(subscriptions: &[Subscription], reference_day: u32) -> MonthlyStats {
    let mut total_cost = 0.0;
    let mut paid_this_month = 0.0;
    let mut remaining_this_month = 0.0;
    let mut next_payment: Option<&Subscription> = None;
    let mut min_diff = u32::MAX;

    for subscription in subscriptions {
        total_cost += subscription.price;

        if subscription.day < reference_day {
            paid_this_month += subscription.price;
        } else {
            remaining_this_month += subscription.price;
            let diff = subscription.day - reference_day;
            if diff < min_diff {
                min_diff = diff;
                next_payment = Some(subscription);
            }
        }
    }

    MonthlyStats {
        total_cost,
        paid_this_month,
        remaining_this_month,
        next_payment: next_payment.cloned(),
    }
}
