use serde::{Deserialize, Serialize};

/// ドメインからロゴを取得するサービス
pub const LOGO_SERVICE_URL: &str = "https://logo.clearbit.com";

/// ドメインからファビコンを取得するサービス
pub const FAVICON_SERVICE_URL: &str = "https://www.google.com/s2/favicons";

/// ファビコンの要求サイズ
const FAVICON_SIZE: u32 = 128;

/// 名前が空の場合に表示する文字
const PLACEHOLDER: &str = "?";

/// ロゴ解決の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoStage {
    /// 入力を受け取った直後
    Unresolved,
    /// 明示的なロゴ、またはドメインベースのロゴサービス
    Primary,
    /// ドメインベースのファビコンサービス
    Secondary,
    /// イニシャル表示（終端）
    TextFallback,
}

/// ロゴ解決に使う入力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoInput {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    pub color: String,
}

impl LogoInput {
    pub fn new(
        name: impl Into<String>,
        logo: Option<String>,
        domain: Option<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            logo,
            domain,
            color: color.into(),
        }
    }

    fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }

    fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|domain| !domain.is_empty())
    }

    /// チェーンをやり直す必要がある入力かどうか
    ///
    /// 色は描画にのみ使うため比較しない
    fn same_chain(&self, other: &LogoInput) -> bool {
        self.name == other.name && self.logo == other.logo && self.domain == other.domain
    }
}

/// 描画面への指示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoRender {
    /// 画像を読み込む
    Image { url: String },
    /// 色付きバッジにイニシャルを表示する
    Text { initials: String, background: String },
}

/// ドメインからロゴサービスのURLを作る
pub fn logo_service_url(domain: &str) -> String {
    format!("{LOGO_SERVICE_URL}/{domain}")
}

/// ドメインからファビコンサービスのURLを作る
pub fn favicon_service_url(domain: &str) -> String {
    format!(
        "{FAVICON_SERVICE_URL}?domain={}&sz={FAVICON_SIZE}",
        urlencoding::encode(domain)
    )
}

/// 名前の先頭2文字を大文字で返す（空の場合は "?"）
///
/// 大文字化で文字数が増える場合も2文字に収める
pub fn initials(name: &str) -> String {
    if name.is_empty() {
        return PLACEHOLDER.to_string();
    }
    name.chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// ロゴの読み込み候補を順に試す状態機械
///
/// 読み込みの成否は描画面から `on_load_failure` で通知される。
/// 同じサブスクリプションでも入力が変わればチェーンを最初からやり直す
#[derive(Debug, Clone, PartialEq)]
pub struct LogoResolver {
    input: LogoInput,
    stage: LogoStage,
    current_url: Option<String>,
}

impl LogoResolver {
    /// 入力を受け取り、最初の候補を決める
    pub fn new(input: LogoInput) -> Self {
        let mut resolver = Self {
            input,
            stage: LogoStage::Unresolved,
            current_url: None,
        };
        resolver.enter();
        resolver
    }

    fn enter(&mut self) {
        if let Some(logo) = self.input.logo() {
            self.current_url = Some(logo.to_string());
            self.stage = LogoStage::Primary;
        } else if let Some(domain) = self.input.domain() {
            self.current_url = Some(logo_service_url(domain));
            self.stage = LogoStage::Primary;
        } else {
            self.current_url = None;
            self.stage = LogoStage::TextFallback;
        }
        log::trace!(
            "ロゴ解決を開始: name={}, stage={:?}",
            self.input.name,
            self.stage
        );
    }

    /// 入力を差し替える
    ///
    /// 名前・ロゴ・ドメインのいずれかが変わった場合は未解決状態から
    /// やり直す。色だけの変更はチェーンを維持する
    pub fn reset(&mut self, input: LogoInput) {
        if self.input.same_chain(&input) {
            self.input.color = input.color;
            return;
        }
        self.input = input;
        self.stage = LogoStage::Unresolved;
        self.current_url = None;
        self.enter();
    }

    /// 現在の候補の読み込みに失敗したことを通知する
    pub fn on_load_failure(&mut self) {
        match self.stage {
            LogoStage::Primary => {
                if let Some(domain) = self.input.domain() {
                    self.current_url = Some(favicon_service_url(domain));
                    self.stage = LogoStage::Secondary;
                } else {
                    self.stage = LogoStage::TextFallback;
                }
            }
            LogoStage::Secondary => {
                self.stage = LogoStage::TextFallback;
            }
            LogoStage::Unresolved | LogoStage::TextFallback => {}
        }
        log::debug!(
            "ロゴの読み込みに失敗: name={}, next_stage={:?}",
            self.input.name,
            self.stage
        );
    }

    pub fn stage(&self) -> LogoStage {
        self.stage
    }

    /// 現在読み込むべき画像URL（イニシャル表示の場合はNone）
    pub fn current_url(&self) -> Option<&str> {
        match self.stage {
            LogoStage::Primary | LogoStage::Secondary => self.current_url.as_deref(),
            LogoStage::Unresolved | LogoStage::TextFallback => None,
        }
    }

    /// 描画面への指示を返す
    pub fn render(&self) -> LogoRender {
        match self.current_url() {
            Some(url) => LogoRender::Image {
                url: url.to_string(),
            },
            None => LogoRender::Text {
                initials: initials(&self.input.name),
                background: self.input.color.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, logo: Option<&str>, domain: Option<&str>) -> LogoInput {
        LogoInput::new(
            name,
            logo.map(str::to_string),
            domain.map(str::to_string),
            "#E50914",
        )
    }

    #[test]
    fn test_explicit_logo_without_domain() {
        let mut resolver = LogoResolver::new(input("Custom", Some("x.svg"), None));
        assert_eq!(resolver.stage(), LogoStage::Primary);
        assert_eq!(resolver.current_url(), Some("x.svg"));

        // ドメインがないためSecondaryを飛ばす
        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::TextFallback);
        assert_eq!(
            resolver.render(),
            LogoRender::Text {
                initials: "CU".to_string(),
                background: "#E50914".to_string(),
            }
        );
    }

    #[test]
    fn test_domain_chain() {
        let mut resolver = LogoResolver::new(input("netflix", None, Some("netflix.com")));
        assert_eq!(resolver.stage(), LogoStage::Primary);
        assert_eq!(
            resolver.current_url(),
            Some("https://logo.clearbit.com/netflix.com")
        );

        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::Secondary);
        assert_eq!(
            resolver.current_url(),
            Some("https://www.google.com/s2/favicons?domain=netflix.com&sz=128")
        );

        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::TextFallback);
        assert_eq!(
            resolver.render(),
            LogoRender::Text {
                initials: "NE".to_string(),
                background: "#E50914".to_string(),
            }
        );

        // 終端状態ではこれ以上進まない
        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::TextFallback);
    }

    #[test]
    fn test_explicit_logo_with_domain_uses_favicon_next() {
        let mut resolver = LogoResolver::new(input(
            "Spotify",
            Some("https://cdn.simpleicons.org/spotify/1DB954"),
            Some("spotify.com"),
        ));
        assert_eq!(
            resolver.current_url(),
            Some("https://cdn.simpleicons.org/spotify/1DB954")
        );

        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::Secondary);
        assert_eq!(
            resolver.render(),
            LogoRender::Image {
                url: "https://www.google.com/s2/favicons?domain=spotify.com&sz=128".to_string()
            }
        );
    }

    #[test]
    fn test_no_logo_no_domain_starts_with_text() {
        let resolver = LogoResolver::new(input("Loyer", None, None));
        assert_eq!(resolver.stage(), LogoStage::TextFallback);
        assert_eq!(resolver.current_url(), None);
    }

    #[test]
    fn test_empty_logo_is_ignored() {
        let resolver = LogoResolver::new(input("Navigo", Some(""), Some("iledefrance-mobilites.fr")));
        assert_eq!(
            resolver.current_url(),
            Some("https://logo.clearbit.com/iledefrance-mobilites.fr")
        );
    }

    #[test]
    fn test_reset_restarts_chain() {
        let mut resolver = LogoResolver::new(input("Netflix", None, Some("netflix.com")));
        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::Secondary);

        resolver.reset(input("Netflix", None, Some("netflix.fr")));
        assert_eq!(resolver.stage(), LogoStage::Primary);
        assert_eq!(
            resolver.current_url(),
            Some("https://logo.clearbit.com/netflix.fr")
        );
    }

    #[test]
    fn test_reset_on_name_change_restarts_chain() {
        let mut resolver = LogoResolver::new(input("Netflix", None, Some("netflix.com")));
        resolver.on_load_failure();
        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::TextFallback);

        resolver.reset(input("Netflix 4K", None, Some("netflix.com")));
        assert_eq!(resolver.stage(), LogoStage::Primary);
        assert_eq!(
            resolver.current_url(),
            Some("https://logo.clearbit.com/netflix.com")
        );
    }

    #[test]
    fn test_reset_on_logo_change_restarts_chain() {
        let mut resolver = LogoResolver::new(input("Spotify", Some("old.svg"), Some("spotify.com")));
        resolver.on_load_failure();
        assert_eq!(resolver.stage(), LogoStage::Secondary);

        resolver.reset(input("Spotify", Some("new.svg"), Some("spotify.com")));
        assert_eq!(resolver.stage(), LogoStage::Primary);
        assert_eq!(resolver.current_url(), Some("new.svg"));
    }

    #[test]
    fn test_reset_with_same_inputs_keeps_progress() {
        let mut resolver = LogoResolver::new(input("Netflix", None, Some("netflix.com")));
        resolver.on_load_failure();
        resolver.on_load_failure();

        let mut recolored = input("Netflix", None, Some("netflix.com"));
        recolored.color = "#000000".to_string();
        resolver.reset(recolored);

        assert_eq!(resolver.stage(), LogoStage::TextFallback);
        assert_eq!(
            resolver.render(),
            LogoRender::Text {
                initials: "NE".to_string(),
                background: "#000000".to_string(),
            }
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("netflix"), "NE");
        assert_eq!(initials("é"), "É");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("Canal+"), "CA");
        assert_eq!(initials("ßa"), "SS");
    }

    #[test]
    fn test_favicon_url_encodes_domain() {
        assert_eq!(
            favicon_service_url("a b.com"),
            "https://www.google.com/s2/favicons?domain=a%20b.com&sz=128"
        );
    }

    #[test]
    fn test_render_serialization() {
        let json = serde_json::to_string(&LogoRender::Image {
            url: "x.svg".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"image","url":"x.svg"}"#);
    }
}
