use super::models::PresetGroup;
use super::service;
use crate::AppState;

/// プリセットを検索し、カテゴリ別に返す
///
/// # 引数
/// * `term` - 検索語（空の場合は現在の国で提供されているプリセット）
/// * `state` - アプリケーション状態
pub fn search_presets(term: &str, state: &AppState) -> Result<Vec<PresetGroup>, String> {
    let country = state.localizer()?.country();
    let presets = service::search_presets(term, country);
    log::debug!("プリセット検索: term={term}, results={}", presets.len());
    Ok(service::group_by_category(&presets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::Category;
    use crate::test_support::test_state;

    #[test]
    fn test_search_presets_uses_current_country() {
        let state = test_state();
        let groups = search_presets("", &state).unwrap();

        let utilities = groups
            .iter()
            .find(|group| group.category == Category::Utilities)
            .unwrap();
        assert!(utilities.services.iter().any(|preset| preset.id == "edf"));
        assert!(!utilities.services.iter().any(|preset| preset.id == "verizon"));
    }

    #[test]
    fn test_search_presets_by_term() {
        let state = test_state();
        let groups = search_presets("verizon", &state).unwrap();
        let total: usize = groups.iter().map(|group| group.services.len()).sum();
        assert_eq!(total, 1);
    }
}
