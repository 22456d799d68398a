use super::models::{
    CreateSubscriptionDto, Subscription, SubscriptionForm, UpdateSubscriptionDto, MAX_NAME_LENGTH,
};
use super::repository;
use crate::shared::utils::{
    validate_billing_day, validate_color, validate_price, validate_required_field,
    validate_text_length,
};
use crate::AppState;

/// サブスクリプションを作成する
///
/// # 引数
/// * `dto` - サブスクリプション作成用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラーメッセージ
pub fn create_subscription(
    dto: CreateSubscriptionDto,
    state: &AppState,
) -> Result<Subscription, String> {
    // バリデーション
    validate_create_subscription_dto(&dto)?;

    let mut store = state.store()?;
    Ok(repository::create(&mut **store, dto)?)
}

/// サブスクリプション一覧を請求日の昇順で取得する
///
/// # 戻り値
/// サブスクリプションのリスト、または失敗時はエラーメッセージ
pub fn get_subscriptions(state: &AppState) -> Result<Vec<Subscription>, String> {
    let store = state.store()?;
    let subscriptions = repository::find_all(&**store)?;
    Ok(repository::sorted_by_day(&subscriptions))
}

/// サブスクリプションを更新する
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラーメッセージ
pub fn update_subscription(
    id: &str,
    dto: UpdateSubscriptionDto,
    state: &AppState,
) -> Result<Subscription, String> {
    // バリデーション
    validate_update_subscription_dto(&dto)?;

    let mut store = state.store()?;
    Ok(repository::update(&mut **store, id, dto)?)
}

/// フォームの内容を保存する
///
/// `editing_id` がある場合は全項目を置き換える更新、ない場合は新規作成
pub fn save_subscription_form(
    form: SubscriptionForm,
    editing_id: Option<String>,
    state: &AppState,
) -> Result<Subscription, String> {
    match editing_id {
        Some(id) => update_subscription(&id, form.to_update_dto()?, state),
        None => create_subscription(form.to_create_dto()?, state),
    }
}

/// サブスクリプションを別の日に移動する（カレンダー上のドロップ）
pub fn move_subscription(id: &str, day: u32, state: &AppState) -> Result<Subscription, String> {
    let mut store = state.store()?;
    Ok(repository::move_to_day(&mut **store, id, day)?)
}

/// サブスクリプションを削除する
///
/// 確認ダイアログは呼び出し側で表示済みであること
pub fn delete_subscription(id: &str, state: &AppState) -> Result<(), String> {
    let mut store = state.store()?;
    Ok(repository::delete(&mut **store, id)?)
}

/// サブスクリプション作成DTOのバリデーション
fn validate_create_subscription_dto(dto: &CreateSubscriptionDto) -> Result<(), String> {
    validate_required_field(dto.name.trim(), "サービス名")?;
    validate_text_length(&dto.name, MAX_NAME_LENGTH, "サービス名")?;
    validate_price(dto.price)?;
    validate_billing_day(dto.day)?;
    validate_color(&dto.color)?;
    Ok(())
}

/// サブスクリプション更新DTOのバリデーション（指定された項目のみ）
fn validate_update_subscription_dto(dto: &UpdateSubscriptionDto) -> Result<(), String> {
    if let Some(name) = &dto.name {
        validate_required_field(name.trim(), "サービス名")?;
        validate_text_length(name, MAX_NAME_LENGTH, "サービス名")?;
    }
    if let Some(price) = dto.price {
        validate_price(price)?;
    }
    if let Some(day) = dto.day {
        validate_billing_day(day)?;
    }
    if let Some(color) = &dto.color {
        validate_color(color)?;
    }
    Ok(())
}
