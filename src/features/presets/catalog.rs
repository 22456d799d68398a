use super::models::PresetService;
use crate::features::locale::CountryCode::{self, De, Es, Fr, Global, It, Uk, Us};
use crate::features::subscriptions::models::Category::{
    Entertainment, Food, Health, Transport, Utilities, Work,
};
use once_cell::sync::Lazy;

const FR: &[CountryCode] = &[Fr];
const US: &[CountryCode] = &[Us];
const UK: &[CountryCode] = &[Uk];
const DE: &[CountryCode] = &[De];
const ES: &[CountryCode] = &[Es];
const IT: &[CountryCode] = &[It];

/// プリセットサービスの一覧（検索は先頭から線形に行う）
#[rustfmt::skip]
pub static PRESET_SERVICES: Lazy<Vec<PresetService>> = Lazy::new(|| {
    let p = PresetService::new;
    vec![
        // 動画・音楽
        p("netflix", "Netflix", "#E50914", Entertainment).domain("netflix.com").price(13.49).icon("netflix"),
        p("spotify", "Spotify", "#1DB954", Entertainment).domain("spotify.com").price(10.99).icon("spotify"),
        p("disney", "Disney+", "#113CCF", Entertainment).domain("disneyplus.com").price(8.99).icon("disneyplus"),
        p("prime", "Amazon Prime", "#00A8E1", Entertainment).domain("amazon.com").price(6.99).icon("amazon"),
        p("youtube", "YouTube Premium", "#FF0000", Entertainment).domain("youtube.com").price(12.99).icon("youtube"),
        p("applemusic", "Apple Music", "#FA243C", Entertainment).domain("apple.com").price(10.99).icon("apple"),
        p("twitch", "Twitch", "#9146FF", Entertainment).domain("twitch.tv").price(4.99).icon("twitch"),
        p("audible", "Audible", "#F8991C", Entertainment).domain("audible.com").price(9.95).icon("audible"),
        p("crunchyroll", "Crunchyroll", "#F47521", Entertainment).domain("crunchyroll.com").price(4.99).icon("crunchyroll"),
        p("soundcloud", "SoundCloud", "#FF5500", Entertainment).domain("soundcloud.com").price(9.99).icon("soundcloud"),
        p("deezer", "Deezer", "#A238FF", Entertainment).domain("deezer.com").price(11.99).icon("deezer"),
        // 仕事・ツール
        p("chatgpt", "ChatGPT Plus", "#10A37F", Work).domain("openai.com").price(22.00).icon("openai"),
        p("googleone", "Google One", "#4285F4", Work).domain("google.com").price(1.99).icon("google"),
        p("icloud", "iCloud+", "#007AFF", Work).domain("icloud.com").price(0.99).icon("icloud"),
        p("adobe", "Adobe CC", "#FF0000", Work).domain("adobe.com").price(24.99).icon("adobe"),
        p("dropbox", "Dropbox", "#0061FF", Work).domain("dropbox.com").price(11.99).icon("dropbox"),
        p("office365", "Microsoft 365", "#EA3E23", Work).domain("office.com").price(7.00).icon("microsoft365"),
        p("linkedin", "LinkedIn Premium", "#0A66C2", Work).domain("linkedin.com").price(34.99).icon("linkedin"),
        p("github", "GitHub Copilot", "#181717", Work).domain("github.com").price(10.00).icon("github"),
        p("midjourney", "Midjourney", "#FFFFFF", Work).domain("midjourney.com").price(10.00).icon("midjourney"),
        p("notion", "Notion", "#000000", Work).domain("notion.so").price(8.00).icon("notion"),
        p("slack", "Slack", "#4A154B", Work).domain("slack.com").price(6.00).icon("slack"),
        p("zoom", "Zoom", "#2D8CFF", Work).domain("zoom.us").price(14.99).icon("zoom"),
        p("canva", "Canva", "#00C4CC", Work).domain("canva.com").price(11.99).icon("canva"),
        p("capcut", "CapCut", "#000000", Work).domain("capcut.com").price(9.99).icon("capcut"),
        p("strava", "Strava", "#FC4C02", Health).domain("strava.com").price(9.99).icon("strava"),
        // フランス
        p("canal", "Canal+", "#000000", Entertainment).domain("canalplus.com").countries(FR).price(22.99).icon("canalplus"),
        p("edf", "EDF", "#005C94", Utilities).domain("edf.fr").countries(FR).price(80.00).icon("edf"),
        p("free", "Free", "#BF002D", Utilities).domain("free.fr").countries(FR).price(19.99).icon("free"),
        p("orange", "Orange", "#FF7900", Utilities).domain("orange.fr").countries(FR).price(39.99).icon("orange"),
        p("navigo", "Navigo", "#14929A", Transport).domain("iledefrance-mobilites.fr").countries(FR).price(86.40),
        p("sncf", "SNCF Max", "#882F86", Transport).domain("sncf-connect.com").countries(FR).price(79.00).icon("sncf"),
        p("bouygues", "Bouygues", "#009FD9", Utilities).domain("bouyguestelecom.fr").countries(FR).price(32.99).icon("bouyguestelecom"),
        p("sfr", "SFR", "#E2001A", Utilities).domain("sfr.fr").countries(FR).price(34.99).icon("sfr"),
        p("total", "TotalEnergies", "#ED0000", Utilities).domain("totalenergies.fr").countries(FR).price(70.00).icon("totalenergies"),
        p("basicfit", "Basic-Fit", "#FF4E00", Health).domain("basic-fit.com").countries(&[Fr, Es, De]).price(19.99),
        p("alan", "Alan", "#D4E2CD", Health).domain("alan.com").countries(FR).price(50.00),
        p("doctolib", "Doctolib", "#0596DE", Health).domain("doctolib.fr").countries(&[Fr, De, It]).price(0.0).icon("doctolib"),
        p("lemonde", "Le Monde", "#000000", Work).domain("lemonde.fr").countries(FR).price(9.99).icon("lemonde"),
        p("mediapart", "Mediapart", "#D21419", Work).domain("mediapart.fr").countries(FR).price(11.00),
        // アメリカ
        p("hulu", "Hulu", "#1CE783", Entertainment).domain("hulu.com").countries(US).price(7.99).icon("hulu"),
        p("hbo", "Max (HBO)", "#002BE7", Entertainment).domain("max.com").countries(&[Us, Es]).price(9.99).icon("hbo"),
        p("peacock", "Peacock", "#000000", Entertainment).domain("peacocktv.com").countries(US).price(5.99).icon("peacock"),
        p("verizon", "Verizon", "#CD040B", Utilities).domain("verizon.com").countries(US).price(70.00).icon("verizon"),
        p("att", "AT&T", "#00A8E0", Utilities).domain("att.com").countries(US).price(65.00).icon("att"),
        p("tmobile", "T-Mobile", "#EA0A8E", Utilities).domain("t-mobile.com").countries(&[Us, De]).price(60.00).icon("tmobile"),
        p("comcast", "Xfinity", "#782F89", Utilities).domain("xfinity.com").countries(US).price(80.00).icon("xfinity"),
        p("planetfitness", "Planet Fitness", "#7C2887", Health).domain("planetfitness.com").countries(US).price(10.00),
        p("wallstreetjournal", "WSJ", "#000000", Work).domain("wsj.com").countries(&[Us, Uk, Global]).price(20.00),
        p("nytimes", "NY Times", "#000000", Work).domain("nytimes.com").countries(&[Us, Global]).price(15.00).icon("newyorktimes"),
        p("costco", "Costco", "#0060A9", Food).domain("costco.com").countries(US).price(5.00).icon("costco"),
        // イギリス
        p("sky", "Sky TV", "#E25624", Entertainment).domain("sky.com").countries(UK).price(26.00).icon("sky"),
        p("bbc", "TV Licence", "#000000", Utilities).domain("tvlicensing.co.uk").countries(UK).price(13.25).icon("bbc"),
        p("bt", "BT Broadband", "#5514B4", Utilities).domain("bt.com").countries(UK).price(30.99).icon("bt"),
        p("ee", "EE", "#007B85", Utilities).domain("ee.co.uk").countries(UK).price(25.00).icon("ee"),
        p("vodafone", "Vodafone", "#E60000", Utilities).domain("vodafone.co.uk").countries(&[Uk, De, Es, It]).price(22.00).icon("vodafone"),
        p("britishgas", "British Gas", "#0099FF", Utilities).domain("britishgas.co.uk").countries(UK).price(100.00).icon("britishgas"),
        p("tesco", "Tesco Clubcard", "#00539F", Food).domain("tesco.com").countries(UK).price(7.99).icon("tesco"),
        p("pret", "Pret Subscription", "#890C2C", Food).domain("pret.co.uk").countries(UK).price(30.00).icon("pretamanger"),
        p("sainsburys", "Sainsburys", "#F06C00", Food).domain("sainsburys.co.uk").countries(UK).price(5.00),
        // ドイツ
        p("telekom", "Telekom", "#E20074", Utilities).domain("telekom.de").countries(DE).price(39.95).icon("deutschetelekom"),
        p("o2", "O2", "#0019A5", Utilities).domain("o2online.de").countries(&[De, Uk]).price(29.99).icon("o2"),
        p("sky_de", "Sky DE", "#E25624", Entertainment).domain("sky.de").countries(DE).price(25.00).icon("sky"),
        p("ard", "Rundfunkbeitrag", "#004772", Utilities).domain("rundfunkbeitrag.de").countries(DE).price(18.36).icon("ard"),
        p("db", "Deutsche Bahn 25", "#F00000", Transport).domain("bahn.de").countries(DE).price(5.00).icon("deutschebahn"),
        p("mcfit", "McFit", "#FFCC00", Health).domain("mcfit.com").countries(&[De, It, Es]).price(24.90),
        p("rtl", "RTL+", "#0065AF", Entertainment).domain("rtl.de").countries(DE).price(6.99).icon("rtl"),
        // スペイン
        p("movistar", "Movistar", "#003668", Utilities).domain("movistar.es").countries(ES).price(50.00).icon("movistar"),
        p("renfe", "Renfe", "#682860", Transport).domain("renfe.com").countries(ES).price(30.00).icon("renfe"),
        p("iberdrola", "Iberdrola", "#369335", Utilities).domain("iberdrola.es").countries(ES).price(60.00).icon("iberdrola"),
        p("filmin", "Filmin", "#1B9C5F", Entertainment).domain("filmin.es").countries(ES).price(7.99),
        p("glovo", "Glovo Prime", "#FFC244", Food).domain("glovoapp.com").countries(&[Es, It]).price(5.99).icon("glovo"),
        // イタリア
        p("tim", "TIM", "#004287", Utilities).domain("tim.it").countries(IT).price(29.90),
        p("enel", "Enel Energia", "#E20078", Utilities).domain("enel.it").countries(IT).price(70.00),
        p("dazn", "DAZN", "#F5EB11", Entertainment).domain("dazn.com").countries(&[It, De, Es]).price(29.99).icon("dazn"),
        p("mediaset", "Mediaset Infinity", "#005CA9", Entertainment).domain("mediasetinfinity.mediaset.it").countries(IT).price(7.99),
        p("sky_it", "Sky Italia", "#E25624", Entertainment).domain("sky.it").countries(IT).price(24.90).icon("sky"),
    ]
});

/// IDからプリセットを探す
pub fn find_preset(id: &str) -> Option<&'static PresetService> {
    PRESET_SERVICES.iter().find(|preset| preset.id == id)
}
