use crate::features::locale::CountryCode;
use crate::features::subscriptions::models::Category;
use serde::Serialize;

/// アイコンSVGを配信するCDN
pub const ICON_CDN_URL: &str = "https://cdn.simpleicons.org";

/// アイコンCDNのURLを作る（色は先頭の # を除いて渡す）
pub fn icon_url(slug: &str, color: &str) -> String {
    format!("{ICON_CDN_URL}/{slug}/{}", color.trim_start_matches('#'))
}

/// 登録済みサービスのプリセット
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetService {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_price: Option<f64>,
    /// アイコンがない場合は空文字列（ロゴはドメインから解決する）
    pub logo: String,
    pub countries: &'static [CountryCode],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<&'static str>,
}

impl PresetService {
    /// 国に依存しないプリセットを作る
    pub fn new(
        id: &'static str,
        name: &'static str,
        color: &'static str,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            color,
            category,
            default_price: None,
            logo: String::new(),
            countries: &[CountryCode::Global],
            domain: None,
        }
    }

    pub fn domain(mut self, domain: &'static str) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.default_price = Some(price);
        self
    }

    pub fn countries(mut self, countries: &'static [CountryCode]) -> Self {
        self.countries = countries;
        self
    }

    /// アイコンCDNのスラッグを設定する
    pub fn icon(mut self, slug: &str) -> Self {
        self.logo = icon_url(slug, self.color);
        self
    }

    /// 指定した国で提供されているか（GLOBALはすべての国で提供）
    pub fn is_available_in(&self, country: CountryCode) -> bool {
        self.countries
            .iter()
            .any(|code| *code == CountryCode::Global || *code == country)
    }

    /// 画像として使えるロゴ（空文字列はNone）
    pub fn logo(&self) -> Option<&str> {
        Some(self.logo.as_str()).filter(|logo| !logo.is_empty())
    }
}

/// カテゴリ別のプリセット一覧
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetGroup {
    pub category: Category,
    pub services: Vec<PresetService>,
}

/// サービス名から推定した見た目の情報
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ServiceIdentity {
    /// 一致したプリセットのID
    pub preset_id: Option<&'static str>,
    pub logo: Option<String>,
    pub domain: Option<String>,
    /// プリセットに一致しない場合はNone（フォームの値を維持する）
    pub color: Option<String>,
    pub category: Option<Category>,
}
