/// 表示設定機能モジュール
///
/// テーマと国の選択をキーバリューストアに保存します。
pub mod commands;
pub mod service;

pub use service::{
    load_country, load_theme, save_country, save_theme, toggle_theme, Theme, COUNTRY_KEY,
    THEME_KEY,
};
