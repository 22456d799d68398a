use super::dashboard::DashboardSnapshot;
use super::service::{calculate_monthly_stats, MonthlyStats};
use crate::features::subscriptions::repository;
use crate::AppState;
use chrono::NaiveDate;

/// 月次集計を取得する
///
/// # 引数
/// * `reference_date` - 基準日（省略時は設定タイムゾーンの今日）
/// * `state` - アプリケーション状態
pub fn get_monthly_stats(
    reference_date: Option<NaiveDate>,
    state: &AppState,
) -> Result<MonthlyStats, String> {
    let reference = reference_date.unwrap_or_else(|| state.config.today());
    let store = state.store()?;
    let subscriptions = repository::find_all(&**store)?;
    Ok(calculate_monthly_stats(&subscriptions, reference))
}

/// ダッシュボード表示用のスナップショットを取得する
///
/// # 引数
/// * `reference_date` - 基準日（省略時は設定タイムゾーンの今日）
/// * `state` - アプリケーション状態
pub fn get_dashboard(
    reference_date: Option<NaiveDate>,
    state: &AppState,
) -> Result<DashboardSnapshot, String> {
    let reference = reference_date.unwrap_or_else(|| state.config.today());
    let subscriptions = {
        let store = state.store()?;
        repository::find_all(&**store)?
    };
    let localizer = state.localizer()?;
    Ok(DashboardSnapshot::build(&subscriptions, reference, &localizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::commands::create_subscription;
    use crate::features::subscriptions::models::{Category, CreateSubscriptionDto};
    use crate::test_support::test_state;

    fn add(state: &AppState, name: &str, day: u32, price: f64) {
        let dto = CreateSubscriptionDto {
            name: name.to_string(),
            price,
            day,
            category: Category::Other,
            color: "#64748b".to_string(),
            logo: None,
            domain: None,
            description: None,
            currency: None,
        };
        create_subscription(dto, state).unwrap();
    }

    #[test]
    fn test_get_monthly_stats_with_reference_date() {
        let state = test_state();
        add(&state, "Netflix", 5, 15.0);
        add(&state, "Gym", 2, 20.0);

        let reference = NaiveDate::from_ymd_opt(2025, 6, 3);
        let stats = get_monthly_stats(reference, &state).unwrap();
        assert_eq!(stats.total_cost, 35.0);
        assert_eq!(stats.paid_this_month, 20.0);
        assert_eq!(stats.next_payment.unwrap().name, "Netflix");
    }

    #[test]
    fn test_get_dashboard_uses_state_locale() {
        let state = test_state();
        add(&state, "Netflix", 5, 15.0);

        let reference = NaiveDate::from_ymd_opt(2025, 6, 1);
        let snapshot = get_dashboard(reference, &state).unwrap();
        assert_eq!(snapshot.month_label, "juin 2025");
        assert_eq!(snapshot.remaining_label, "15,00\u{a0}€");
        assert_eq!(snapshot.active_count, 1);
    }

    #[test]
    fn test_get_dashboard_defaults_to_today() {
        let state = test_state();
        let snapshot = get_dashboard(None, &state).unwrap();
        assert_eq!(snapshot.reference_date, state.config.today());
    }
}
