use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("HEX_COLOR は正しい正規表現")
});

/// 文字列の長さバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `max_length` - 最大文字数
/// * `field_name` - フィールド名（エラーメッセージ用）
pub fn validate_text_length(text: &str, max_length: usize, field_name: &str) -> AppResult<()> {
    let char_count = text.chars().count();
    if char_count > max_length {
        return Err(AppError::validation(format!(
            "{field_name}は{max_length}文字以内で入力してください（現在: {char_count}文字）"
        )));
    }
    Ok(())
}

/// 必須フィールドのバリデーション
pub fn validate_required_field(text: &str, field_name: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation(format!("{field_name}は必須項目です")));
    }
    Ok(())
}

/// 金額のバリデーション
///
/// # バリデーション規則
/// - 有限の数値であること
/// - 0以上であること（無料プランも登録できる）
pub fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::validation("無効な金額です"));
    }
    if price < 0.0 {
        return Err(AppError::validation("金額は0以上で入力してください"));
    }
    Ok(())
}

/// 請求日のバリデーション（1〜31）
///
/// 月の日数との整合性は確認しない
pub fn validate_billing_day(day: u32) -> AppResult<()> {
    if !(1..=31).contains(&day) {
        return Err(AppError::validation(
            "請求日は1から31の間で入力してください",
        ));
    }
    Ok(())
}

/// 表示色のバリデーション（#RRGGBB形式）
pub fn validate_color(color: &str) -> AppResult<()> {
    if !HEX_COLOR.is_match(color) {
        return Err(AppError::validation(
            "色は#RRGGBB形式で入力してください",
        ));
    }
    Ok(())
}

/// 入力された金額文字列を解析する
///
/// 小数点としてカンマも受け付ける（例: "12,99"）
pub fn parse_price(input: &str) -> AppResult<f64> {
    let normalized = input.trim().replacen(',', ".", 1);
    let price = normalized
        .parse::<f64>()
        .map_err(|_| AppError::validation(format!("金額の形式が不正です: {input}")))?;
    validate_price(price)?;
    Ok(price)
}

/// 入力された請求日文字列を解析する
pub fn parse_billing_day(input: &str) -> AppResult<u32> {
    let day = input
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::validation(format!("請求日の形式が不正です: {input}")))?;
    validate_billing_day(day)?;
    Ok(day)
}

/// 空白のみの文字列をNoneとして扱う
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
