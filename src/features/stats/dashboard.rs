use super::service::{calculate_monthly_stats, MonthlyStats};
use crate::features::locale::{Localizer, TranslationKey};
use crate::features::subscriptions::models::Subscription;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// ダッシュボード表示用の集計スナップショット
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub reference_date: NaiveDate,
    /// 例: "janvier 2025"
    pub month_label: String,
    pub stats: MonthlyStats,
    pub total_cost_label: String,
    pub paid_label: String,
    pub remaining_label: String,
    /// 支払い済みの割合（四捨五入した整数）
    pub paid_ratio_percent: u32,
    pub active_count: usize,
    /// 例: "le 5 janvier"。次回請求がない場合は翻訳済みの案内文
    pub next_payment_label: String,
}

impl DashboardSnapshot {
    /// 基準日の月次集計を表示用に整形する
    ///
    /// # 引数
    /// * `subscriptions` - サブスクリプション一覧
    /// * `reference` - 基準日
    /// * `localizer` - 表示に使うロケール
    pub fn build(subscriptions: &[Subscription], reference: NaiveDate, localizer: &Localizer) -> Self {
        let stats = calculate_monthly_stats(subscriptions, reference);
        let month_name = localizer.month_name(reference);

        let next_payment_label = match &stats.next_payment {
            Some(next) => format!("{} {} {}", localizer.t(TranslationKey::StatsOn), next.day, month_name),
            None => localizer.t(TranslationKey::StatsNoPayment).to_string(),
        };

        Self {
            reference_date: reference,
            month_label: format!("{} {}", month_name, reference.year()),
            total_cost_label: localizer.format_money(stats.total_cost),
            paid_label: localizer.format_money(stats.paid_this_month),
            remaining_label: localizer.format_money(stats.remaining_this_month),
            paid_ratio_percent: stats.paid_ratio_percent().round() as u32,
            active_count: subscriptions.len(),
            next_payment_label,
            stats,
        }
    }
}
