use super::countries::{country_config, CountryCode, CountryConfig};
use super::translations::{translate, TranslationKey};
use crate::features::subscriptions::models::Category;
use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};

// 狭いノーブレークスペース（フランス語の桁区切り）
const NARROW_NBSP: char = '\u{202f}';
const NBSP: char = '\u{a0}';

/// 金額の書式規則
struct MoneyStyle {
    group_separator: char,
    decimal_separator: char,
    symbol_before: bool,
    /// この桁数以上の整数部から桁区切りを入れる
    min_grouping_digits: usize,
}

fn money_style(country: CountryCode) -> MoneyStyle {
    match country {
        CountryCode::Us | CountryCode::Uk | CountryCode::Global => MoneyStyle {
            group_separator: ',',
            decimal_separator: '.',
            symbol_before: true,
            min_grouping_digits: 4,
        },
        CountryCode::Fr => MoneyStyle {
            group_separator: NARROW_NBSP,
            decimal_separator: ',',
            symbol_before: false,
            min_grouping_digits: 4,
        },
        CountryCode::De | CountryCode::It => MoneyStyle {
            group_separator: '.',
            decimal_separator: ',',
            symbol_before: false,
            min_grouping_digits: 4,
        },
        // スペイン語は4桁の数値に桁区切りを入れない
        CountryCode::Es => MoneyStyle {
            group_separator: '.',
            decimal_separator: ',',
            symbol_before: false,
            min_grouping_digits: 5,
        },
    }
}

fn group_digits(digits: &str, separator: char, min_grouping_digits: usize) -> String {
    if digits.len() < min_grouping_digits {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// 国設定に基づく翻訳・書式の解決
///
/// 起動時に一度解決し、必要な箇所へ明示的に渡す
#[derive(Debug, Clone, PartialEq)]
pub struct Localizer {
    country: CountryCode,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(CountryCode::Fr)
    }
}

impl Localizer {
    pub fn new(country: CountryCode) -> Self {
        Self { country }
    }

    /// 保存済みの国コード、既定の国コードの順に解決する
    ///
    /// どちらも選択可能な国でない場合はフランス
    pub fn resolve(saved: Option<CountryCode>, default_code: &str) -> Self {
        let country = saved
            .filter(|code| super::countries::is_selectable(*code))
            .or_else(|| {
                CountryCode::from_code(default_code)
                    .filter(|code| super::countries::is_selectable(*code))
            })
            .unwrap_or(CountryCode::Fr);
        log::debug!("ロケールを解決しました: {}", country.as_str());
        Self::new(country)
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    pub fn set_country(&mut self, country: CountryCode) {
        self.country = country;
    }

    /// 翻訳文字列を取得する
    pub fn t(&self, key: TranslationKey) -> &'static str {
        translate(self.country, key)
    }

    /// カテゴリの表示名を取得する
    pub fn category_label(&self, category: Category) -> &'static str {
        let key = match category {
            Category::Entertainment => TranslationKey::CatEntertainment,
            Category::Utilities => TranslationKey::CatUtilities,
            Category::Work => TranslationKey::CatWork,
            Category::Health => TranslationKey::CatHealth,
            Category::Transport => TranslationKey::CatTransport,
            Category::Food => TranslationKey::CatFood,
            Category::Other => TranslationKey::CatOther,
        };
        self.t(key)
    }

    /// 国の表示設定（通貨など）
    pub fn config(&self) -> &'static CountryConfig {
        country_config(self.country)
    }

    pub fn date_locale(&self) -> &'static str {
        self.country.date_locale()
    }

    /// 金額を通貨付きで書式化する（小数点以下2桁）
    ///
    /// 例: FR "1 234,50 €"、US "$1,234.50"
    pub fn format_money(&self, amount: f64) -> String {
        let style = money_style(self.country);
        let symbol = self.config().currency;

        let fixed = format!("{:.2}", amount.abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let number = format!(
            "{}{}{}",
            group_digits(integer, style.group_separator, style.min_grouping_digits),
            style.decimal_separator,
            fraction
        );
        let sign = if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
            "-"
        } else {
            ""
        };

        if style.symbol_before {
            format!("{sign}{symbol}{number}")
        } else {
            format!("{sign}{number}{NBSP}{symbol}")
        }
    }

    /// 日付を国のロケールで書式化する
    pub fn format_date(&self, date: NaiveDate, pattern: &str) -> String {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized(pattern, self.country.chrono_locale())
            .to_string()
    }

    /// 月の名前（例: FR "janvier"、US "January"）
    pub fn month_name(&self, date: NaiveDate) -> String {
        self.format_date(date, "%B")
    }

    /// 月の短縮名（例: FR "janv."、US "Jan"）
    pub fn short_month_name(&self, date: NaiveDate) -> String {
        self.format_date(date, "%b")
    }

    /// 日曜始まりの曜日の短縮名（末尾のピリオドは除く）
    pub fn weekday_short_names(&self) -> Vec<String> {
        // 2023-01-01は日曜日
        let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
        (0..7)
            .filter_map(|offset| sunday.checked_add_days(Days::new(offset)))
            .map(|date| {
                self.format_date(date, "%a").replace('.', "")
            })
            .collect()
    }
}
