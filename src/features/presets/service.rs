use super::catalog::PRESET_SERVICES;
use super::models::{PresetGroup, PresetService, ServiceIdentity};
use crate::features::locale::CountryCode;
use crate::features::subscriptions::models::{Category, SubscriptionForm};

/// 部分一致を許可する入力の最小文字数（この値より長い場合のみ）
const PARTIAL_MATCH_MIN_CHARS: usize = 3;

/// 入力されたサービス名に一致するプリセットを探す
///
/// 入力（小文字化・前後の空白除去）がプリセット名を含む場合、または
/// 入力が4文字以上でプリセット名が入力を含む場合に一致とみなす。
/// 先頭から探索し最初に一致したものを返す
pub fn match_preset(name: &str) -> Option<&'static PresetService> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    let allow_partial = normalized.chars().count() > PARTIAL_MATCH_MIN_CHARS;

    PRESET_SERVICES.iter().find(|preset| {
        let preset_name = preset.name.to_lowercase();
        normalized.contains(&preset_name) || (allow_partial && preset_name.contains(&normalized))
    })
}

/// プリセットを検索する
///
/// # 引数
/// * `term` - 検索語。空でない場合は国に関係なく名前で絞り込む（空白のみでも絞り込む）
/// * `country` - 検索語が空の場合に、この国とGLOBALのプリセットを返す
pub fn search_presets(term: &str, country: CountryCode) -> Vec<&'static PresetService> {
    let term = term.to_lowercase();
    PRESET_SERVICES
        .iter()
        .filter(|preset| {
            if term.is_empty() {
                preset.is_available_in(country)
            } else {
                preset.name.to_lowercase().contains(&term)
            }
        })
        .collect()
}

/// カテゴリの表示順でグループ化する（空のグループも含む）
pub fn group_by_category(presets: &[&PresetService]) -> Vec<PresetGroup> {
    Category::ALL
        .iter()
        .map(|category| PresetGroup {
            category: *category,
            services: presets
                .iter()
                .filter(|preset| preset.category == *category)
                .map(|preset| (*preset).clone())
                .collect(),
        })
        .collect()
}

/// サービス名からロゴ・色・カテゴリ・ドメインを推定する
///
/// プリセットに一致しない場合、空白を含まず '.' を含む名前はドメインとして扱う
pub fn infer_identity(name: &str) -> ServiceIdentity {
    if let Some(preset) = match_preset(name) {
        log::debug!("プリセットに一致しました: {} -> {}", name, preset.id);
        return ServiceIdentity {
            preset_id: Some(preset.id),
            logo: preset.logo().map(str::to_string),
            domain: preset.domain.map(str::to_string),
            color: Some(preset.color.to_string()),
            category: Some(preset.category),
        };
    }

    let domain = (name.contains('.') && !name.contains(' ')).then(|| name.to_string());
    ServiceIdentity {
        domain,
        ..ServiceIdentity::default()
    }
}

/// フォームの名前を更新し、推定した見た目を反映する
pub fn update_form_name(form: &mut SubscriptionForm, name: &str) {
    form.name = name.to_string();

    let identity = infer_identity(name);
    form.logo = identity.logo;
    form.domain = identity.domain;
    if let Some(color) = identity.color {
        form.color = color;
    }
    if let Some(category) = identity.category {
        form.category = category;
    }
}

/// 選択したプリセットをフォームに反映する
///
/// 既定価格は0より大きい場合のみ設定する
pub fn apply_preset(form: &mut SubscriptionForm, preset: &PresetService) {
    form.name = preset.name.to_string();
    if let Some(price) = preset.default_price.filter(|price| *price > 0.0) {
        form.price = price.to_string();
    }
    form.category = preset.category;
    form.color = preset.color.to_string();
    form.logo = preset.logo().map(str::to_string);
    form.domain = preset.domain.map(str::to_string);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::presets::catalog::find_preset;
    use crate::features::subscriptions::models::DEFAULT_COLOR;

    #[test]
    fn test_match_preset_exact_and_contained() {
        assert_eq!(match_preset("Netflix").map(|p| p.id), Some("netflix"));
        assert_eq!(match_preset("  my spotify  ").map(|p| p.id), Some("spotify"));
    }

    #[test]
    fn test_match_preset_partial_requires_four_chars() {
        assert_eq!(match_preset("disn").map(|p| p.id), Some("disney"));
        assert_eq!(match_preset("dis"), None);
    }

    #[test]
    fn test_match_preset_none() {
        assert_eq!(match_preset("Loyer"), None);
        assert_eq!(match_preset(""), None);
        assert_eq!(match_preset("   "), None);
    }

    #[test]
    fn test_search_presets_by_country() {
        let french = search_presets("", CountryCode::Fr);
        assert!(french.iter().any(|p| p.id == "edf"));
        assert!(french.iter().any(|p| p.id == "netflix"));
        assert!(!french.iter().any(|p| p.id == "hulu"));

        let american = search_presets("", CountryCode::Us);
        assert!(american.iter().any(|p| p.id == "hulu"));
        assert!(!american.iter().any(|p| p.id == "edf"));
    }

    #[test]
    fn test_search_presets_whitespace_term_filters_by_name() {
        let results = search_presets(" ", CountryCode::Fr);
        let ids: Vec<&str> = results.iter().map(|p| p.id).collect();
        assert!(ids.contains(&"prime"));
        assert!(ids.contains(&"hbo"));
        assert!(!ids.contains(&"netflix"));
        assert!(!ids.contains(&"edf"));
    }

    #[test]
    fn test_search_presets_by_term_ignores_country() {
        let results = search_presets("SKY", CountryCode::Fr);
        let ids: Vec<_> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["sky", "sky_de", "sky_it"]);
    }

    #[test]
    fn test_group_by_category_keeps_empty_groups() {
        let results = search_presets("netflix", CountryCode::Fr);
        let groups = group_by_category(&results);

        assert_eq!(groups.len(), Category::ALL.len());
        assert_eq!(groups[0].category, Category::Entertainment);
        assert_eq!(groups[0].services.len(), 1);
        assert!(groups[1..].iter().all(|group| group.services.is_empty()));
    }

    #[test]
    fn test_infer_identity_from_preset() {
        let identity = infer_identity("netflix");
        assert_eq!(identity.preset_id, Some("netflix"));
        assert_eq!(identity.domain.as_deref(), Some("netflix.com"));
        assert_eq!(identity.color.as_deref(), Some("#E50914"));
        assert_eq!(identity.category, Some(Category::Entertainment));
    }

    #[test]
    fn test_infer_identity_domain_like_name() {
        let identity = infer_identity("example.com");
        assert_eq!(identity.preset_id, None);
        assert_eq!(identity.logo, None);
        assert_eq!(identity.domain.as_deref(), Some("example.com"));

        // 空白を含む場合はドメインとみなさない
        assert_eq!(infer_identity("my site.com").domain, None);
        assert_eq!(infer_identity("Loyer").domain, None);
    }

    #[test]
    fn test_update_form_name_clears_previous_identity() {
        let mut form = SubscriptionForm::blank(None, 1);
        update_form_name(&mut form, "Spotify");
        assert_eq!(form.domain.as_deref(), Some("spotify.com"));
        assert_eq!(form.color, "#1DB954");

        update_form_name(&mut form, "Loyer");
        assert_eq!(form.name, "Loyer");
        assert_eq!(form.logo, None);
        assert_eq!(form.domain, None);
        // 色とカテゴリは維持する
        assert_eq!(form.color, "#1DB954");
        assert_eq!(form.category, Category::Entertainment);
    }

    #[test]
    fn test_apply_preset() {
        let mut form = SubscriptionForm::blank(Some(4), 1);
        apply_preset(&mut form, find_preset("navigo").unwrap());

        assert_eq!(form.name, "Navigo");
        assert_eq!(form.price, "86.4");
        assert_eq!(form.day, "4");
        assert_eq!(form.category, Category::Transport);
        assert_eq!(form.logo, None);
        assert_eq!(form.domain.as_deref(), Some("iledefrance-mobilites.fr"));
    }

    #[test]
    fn test_apply_preset_skips_zero_price() {
        let mut form = SubscriptionForm::blank(None, 1);
        form.price = "5".to_string();
        apply_preset(&mut form, find_preset("doctolib").unwrap());

        assert_eq!(form.price, "5");
        assert_ne!(form.color, DEFAULT_COLOR);
        assert!(form.to_create_dto().is_ok());
    }
}
