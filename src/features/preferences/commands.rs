use super::service::{self, Theme};
use crate::features::locale::{is_selectable, CountryCode, CountryConfig};
use crate::shared::errors::AppError;
use crate::AppState;

/// 国を変更し、保存する
///
/// # 引数
/// * `code` - 国コード（例: "FR"）
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 変更後の国設定、または選択できない国の場合はエラーメッセージ
pub fn set_country(code: &str, state: &AppState) -> Result<&'static CountryConfig, String> {
    let country = CountryCode::from_code(code)
        .filter(|country| is_selectable(*country))
        .ok_or_else(|| AppError::validation(format!("対応していない国コードです: {code}")))?;

    {
        let mut store = state.store()?;
        service::save_country(&mut **store, country)?;
    }

    let mut localizer = state.localizer()?;
    localizer.set_country(country);
    log::info!("国を変更しました: {}", country.as_str());
    Ok(localizer.config())
}

/// 現在のテーマを取得する
pub fn get_theme(state: &AppState) -> Result<Theme, String> {
    let store = state.store()?;
    Ok(service::load_theme(&**store)?)
}

/// テーマを設定する
pub fn set_theme(theme: Theme, state: &AppState) -> Result<Theme, String> {
    let mut store = state.store()?;
    service::save_theme(&mut **store, theme)?;
    Ok(theme)
}

/// テーマを切り替える
///
/// # 戻り値
/// 切り替え後のテーマ
pub fn toggle_theme(state: &AppState) -> Result<Theme, String> {
    let mut store = state.store()?;
    Ok(service::toggle_theme(&mut **store)?)
}
