use serde::{Deserialize, Serialize};

/// 対応する国コード
///
/// `Global` は国に依存しないサービスを表し、選択可能な国一覧には含まれない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "FR")]
    Fr,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "DE")]
    De,
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "GLOBAL")]
    Global,
}

impl CountryCode {
    /// 保存・表示用のコード文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Fr => "FR",
            CountryCode::Us => "US",
            CountryCode::Uk => "UK",
            CountryCode::De => "DE",
            CountryCode::Es => "ES",
            CountryCode::It => "IT",
            CountryCode::Global => "GLOBAL",
        }
    }

    /// コード文字列から変換する（大文字小文字は区別しない）
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "FR" => Some(CountryCode::Fr),
            "US" => Some(CountryCode::Us),
            "UK" => Some(CountryCode::Uk),
            "DE" => Some(CountryCode::De),
            "ES" => Some(CountryCode::Es),
            "IT" => Some(CountryCode::It),
            "GLOBAL" => Some(CountryCode::Global),
            _ => None,
        }
    }

    /// 日付・数値書式に使うBCP 47ロケール
    pub fn date_locale(&self) -> &'static str {
        match self {
            CountryCode::Fr => "fr-FR",
            CountryCode::Us => "en-US",
            CountryCode::Uk => "en-GB",
            CountryCode::De => "de-DE",
            CountryCode::Es => "es-ES",
            CountryCode::It => "it-IT",
            CountryCode::Global => "en-US",
        }
    }

    /// chronoの地域化書式で使うロケール
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            CountryCode::Fr => chrono::Locale::fr_FR,
            CountryCode::Us | CountryCode::Global => chrono::Locale::en_US,
            CountryCode::Uk => chrono::Locale::en_GB,
            CountryCode::De => chrono::Locale::de_DE,
            CountryCode::Es => chrono::Locale::es_ES,
            CountryCode::It => chrono::Locale::it_IT,
        }
    }

    /// 国旗画像のURL（ISOコードではUKはGB）
    pub fn flag_url(&self) -> String {
        let iso_code = match self {
            CountryCode::Uk => "gb".to_string(),
            other => other.as_str().to_lowercase(),
        };
        format!("https://flagcdn.com/w40/{iso_code}.png")
    }
}

/// 国ごとの表示設定
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryConfig {
    pub code: CountryCode,
    pub name: &'static str,
    pub flag: &'static str,
    /// 通貨記号（例: €）
    pub currency: &'static str,
    /// ISO 4217 通貨コード（例: EUR）
    pub currency_code: &'static str,
}

/// 選択可能な国の一覧（先頭が既定）
pub const COUNTRIES: [CountryConfig; 6] = [
    CountryConfig {
        code: CountryCode::Fr,
        name: "France",
        flag: "🇫🇷",
        currency: "€",
        currency_code: "EUR",
    },
    CountryConfig {
        code: CountryCode::Us,
        name: "United States",
        flag: "🇺🇸",
        currency: "$",
        currency_code: "USD",
    },
    CountryConfig {
        code: CountryCode::Uk,
        name: "United Kingdom",
        flag: "🇬🇧",
        currency: "£",
        currency_code: "GBP",
    },
    CountryConfig {
        code: CountryCode::De,
        name: "Germany",
        flag: "🇩🇪",
        currency: "€",
        currency_code: "EUR",
    },
    CountryConfig {
        code: CountryCode::Es,
        name: "Spain",
        flag: "🇪🇸",
        currency: "€",
        currency_code: "EUR",
    },
    CountryConfig {
        code: CountryCode::It,
        name: "Italy",
        flag: "🇮🇹",
        currency: "€",
        currency_code: "EUR",
    },
];

/// 国設定を取得する（一覧にない場合は先頭の国）
pub fn country_config(code: CountryCode) -> &'static CountryConfig {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .unwrap_or(&COUNTRIES[0])
}

/// 選択可能な国かどうか
pub fn is_selectable(code: CountryCode) -> bool {
    COUNTRIES.iter().any(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(CountryCode::from_code("fr"), Some(CountryCode::Fr));
        assert_eq!(CountryCode::from_code(" UK "), Some(CountryCode::Uk));
        assert_eq!(CountryCode::from_code("GLOBAL"), Some(CountryCode::Global));
        assert_eq!(CountryCode::from_code("JP"), None);
    }

    #[test]
    fn test_serialization_uses_codes() {
        assert_eq!(serde_json::to_string(&CountryCode::Uk).unwrap(), "\"UK\"");
        let code: CountryCode = serde_json::from_str("\"DE\"").unwrap();
        assert_eq!(code, CountryCode::De);
    }

    #[test]
    fn test_country_config_fallback() {
        assert_eq!(country_config(CountryCode::Us).currency_code, "USD");
        // GLOBALは一覧にないため先頭のフランスになる
        assert_eq!(country_config(CountryCode::Global).code, CountryCode::Fr);
        assert!(!is_selectable(CountryCode::Global));
        assert!(is_selectable(CountryCode::It));
    }

    #[test]
    fn test_date_locale() {
        assert_eq!(CountryCode::Uk.date_locale(), "en-GB");
        assert_eq!(CountryCode::Global.date_locale(), "en-US");
    }

    #[test]
    fn test_flag_url() {
        assert_eq!(CountryCode::Uk.flag_url(), "https://flagcdn.com/w40/gb.png");
        assert_eq!(CountryCode::De.flag_url(), "https://flagcdn.com/w40/de.png");
    }
}
