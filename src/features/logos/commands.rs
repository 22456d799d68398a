use super::resolver::{LogoInput, LogoRender, LogoResolver};

/// ロゴの表示方法を解決する
///
/// # 引数
/// * `input` - サービス名・ロゴ・ドメイン・色
/// * `failed_attempts` - 描画面で読み込みに失敗した回数
///
/// # 戻り値
/// 次に試す画像URL、またはイニシャル表示
pub fn resolve_logo(input: LogoInput, failed_attempts: u32) -> Result<LogoRender, String> {
    let mut resolver = LogoResolver::new(input);
    for _ in 0..failed_attempts {
        resolver.on_load_failure();
    }
    Ok(resolver.render())
}
