fn main() {
    if let Err(e) = velora_lib::run() {
        log::error!("アプリケーションの実行に失敗しました: {}", e.details());
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}
