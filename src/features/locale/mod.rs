/// ロケール機能モジュール
///
/// 国ごとの通貨・日付書式と、画面表示用の翻訳テーブルを提供します。
/// グローバル状態は持たず、起動時に解決した `Localizer` を明示的に受け渡します。
pub mod countries;
pub mod localizer;
pub mod translations;

pub use countries::{country_config, is_selectable, CountryCode, CountryConfig, COUNTRIES};
pub use localizer::Localizer;
pub use translations::{translate, TranslationKey};
