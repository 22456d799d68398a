use crate::shared::errors::AppResult;
use crate::shared::utils::{
    non_empty, parse_billing_day, parse_price, validate_color, validate_required_field,
    validate_text_length,
};
use serde::{Deserialize, Serialize};

/// サービス名の最大文字数
pub const MAX_NAME_LENGTH: usize = 100;

/// 新規フォームの既定色
pub const DEFAULT_COLOR: &str = "#64748b";

/// サブスクリプションのカテゴリ
///
/// 保存データとの互換性のため、シリアライズ時は保存済みのラベルを使う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Divertissement")]
    Entertainment,
    #[serde(rename = "Factures")]
    Utilities,
    #[serde(rename = "Pro & Tech")]
    Work,
    #[serde(rename = "Santé")]
    Health,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Alimentation")]
    Food,
    #[default]
    #[serde(rename = "Autre")]
    Other,
}

impl Category {
    /// 表示順のカテゴリ一覧
    pub const ALL: [Category; 7] = [
        Category::Entertainment,
        Category::Utilities,
        Category::Work,
        Category::Health,
        Category::Transport,
        Category::Food,
        Category::Other,
    ];
}

/// サブスクリプションデータモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,       // UUID v4、作成後は不変
    pub name: String,     // サービス名
    pub price: f64,       // 0以上、通貨換算なし
    pub day: u32,         // 請求日（1〜31、月の日数とは照合しない）
    pub category: Category,
    pub color: String, // #RRGGBB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>, // ISO 4217
}

/// サブスクリプション作成用DTO
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateSubscriptionDto {
    pub name: String,
    pub price: f64,
    pub day: u32,
    pub category: Category,
    pub color: String,
    pub logo: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
}

/// サブスクリプション更新用DTO
///
/// `None` のフィールドは既存値を維持する。`logo` / `domain` / `description`
/// に空文字列を渡すと値を削除する
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateSubscriptionDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub day: Option<u32>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub logo: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
}

/// 入力フォームの状態
///
/// 価格と請求日はユーザー入力のまま文字列で保持し、保存時に解析する
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubscriptionForm {
    pub name: String,
    pub price: String,
    pub day: String,
    pub category: Category,
    pub color: String,
    pub logo: Option<String>,
    pub domain: Option<String>,
}

impl SubscriptionForm {
    /// 新規作成用の空フォーム
    ///
    /// # 引数
    /// * `initial_day` - カレンダーのセルから開いた場合の日付
    /// * `today_day` - 今日の日（`initial_day` がない場合に使用）
    pub fn blank(initial_day: Option<u32>, today_day: u32) -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            day: initial_day.unwrap_or(today_day).to_string(),
            category: Category::Other,
            color: DEFAULT_COLOR.to_string(),
            logo: None,
            domain: None,
        }
    }

    /// 編集用に既存のサブスクリプションからフォームを作る
    pub fn from_subscription(subscription: &Subscription) -> Self {
        Self {
            name: subscription.name.clone(),
            price: subscription.price.to_string(),
            day: subscription.day.to_string(),
            category: subscription.category,
            color: subscription.color.clone(),
            logo: subscription.logo.clone(),
            domain: subscription.domain.clone(),
        }
    }

    /// フォームを検証し、作成用DTOに変換する
    pub fn to_create_dto(&self) -> AppResult<CreateSubscriptionDto> {
        let name = self.name.trim();
        validate_required_field(name, "サービス名")?;
        validate_text_length(name, MAX_NAME_LENGTH, "サービス名")?;
        validate_required_field(&self.price, "金額")?;
        validate_required_field(&self.day, "請求日")?;
        let price = parse_price(&self.price)?;
        let day = parse_billing_day(&self.day)?;
        validate_color(&self.color)?;

        Ok(CreateSubscriptionDto {
            name: name.to_string(),
            price,
            day,
            category: self.category,
            color: self.color.clone(),
            logo: non_empty(self.logo.clone()),
            domain: non_empty(self.domain.clone()),
            description: None,
            currency: None,
        })
    }

    /// フォームを検証し、全項目を置き換える更新用DTOに変換する
    pub fn to_update_dto(&self) -> AppResult<UpdateSubscriptionDto> {
        let dto = self.to_create_dto()?;
        Ok(UpdateSubscriptionDto {
            name: Some(dto.name),
            price: Some(dto.price),
            day: Some(dto.day),
            category: Some(dto.category),
            color: Some(dto.color),
            logo: Some(dto.logo.unwrap_or_default()),
            domain: Some(dto.domain.unwrap_or_default()),
            description: None,
        })
    }
}
