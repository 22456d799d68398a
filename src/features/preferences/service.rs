use crate::features::locale::{is_selectable, CountryCode};
use crate::shared::errors::AppResult;
use crate::shared::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

/// テーマを保存するキー
pub const THEME_KEY: &str = "velora_theme";

/// 国を保存するキー
pub const COUNTRY_KEY: &str = "velora_country";

/// 画面のテーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 保存済みのテーマを読み込む（未保存・不明な値はライト）
pub fn load_theme(store: &dyn KeyValueStore) -> AppResult<Theme> {
    let theme = store
        .get(THEME_KEY)?
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default();
    Ok(theme)
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> AppResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// テーマを切り替えて保存する
///
/// # 戻り値
/// 切り替え後のテーマ
pub fn toggle_theme(store: &mut dyn KeyValueStore) -> AppResult<Theme> {
    let theme = load_theme(store)?.toggled();
    save_theme(store, theme)?;
    log::info!("テーマを変更しました: {}", theme.as_str());
    Ok(theme)
}

/// 保存済みの国を読み込む
///
/// 選択できない国コードが保存されている場合は無視してNoneを返す
pub fn load_country(store: &dyn KeyValueStore) -> AppResult<Option<CountryCode>> {
    let Some(value) = store.get(COUNTRY_KEY)? else {
        return Ok(None);
    };
    let country = CountryCode::from_code(&value).filter(|code| is_selectable(*code));
    if country.is_none() {
        log::warn!("保存された国コードを無視します: {value}");
    }
    Ok(country)
}

pub fn save_country(store: &mut dyn KeyValueStore, country: CountryCode) -> AppResult<()> {
    store.set(COUNTRY_KEY, country.as_str())
}
