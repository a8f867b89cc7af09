// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Lista
            translations.insert("no_results", "No matching spots.");
            translations.insert("load_failed", "Failed to load data.");
            translations.insert("venue_prefix", "Venue: ");
            translations.insert("all_categories", "All categories");

            // Geolocalización
            translations.insert("locate", "My location");
            translations.insert("locating", "Locating...");
            translations.insert("locate_refresh", "Update location");
            translations.insert("current_location", "You are here");
            translations.insert("geo_unsupported", "This browser cannot get your location.");
            translations.insert("geo_insecure", "Location is only available over HTTPS.");
            translations.insert("geo_permission_denied", "Location permission was denied.");
            translations.insert("geo_position_unavailable", "Your location is unavailable right now.");
            translations.insert("geo_timeout", "Getting your location timed out.");
            translations.insert("geo_unknown", "Failed to get your location.");

            // Popup
            translations.insert("search_google", "Search on Google");
            translations.insert("open_google_maps", "Open in Google Maps");
            translations.insert("call", "Call");
        }
        _ => {
            // Lista
            translations.insert("no_results", "該当するスポットがありません。");
            translations.insert("load_failed", "データの読み込みに失敗しました。");
            translations.insert("venue_prefix", "式場：");
            translations.insert("all_categories", "すべてのカテゴリ");

            // Geolocalización
            translations.insert("locate", "現在地");
            translations.insert("locating", "現在地取得中...");
            translations.insert("locate_refresh", "現在地を更新");
            translations.insert("current_location", "現在地");
            translations.insert("geo_unsupported", "このブラウザでは現在地を取得できません。");
            translations.insert("geo_insecure", "現在地の取得にはHTTPSでのアクセスが必要です。");
            translations.insert("geo_permission_denied", "位置情報の利用が許可されていません。");
            translations.insert("geo_position_unavailable", "現在地を特定できませんでした。");
            translations.insert("geo_timeout", "現在地の取得がタイムアウトしました。");
            translations.insert("geo_unknown", "現在地の取得に失敗しました。");

            // Popup
            translations.insert("search_google", "Googleで調べる");
            translations.insert("open_google_maps", "Google mapを開く");
            translations.insert("call", "電話をかける");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("JA" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_falls_back_to_japanese() {
        assert_eq!(t("no_results", "xx"), t("no_results", "JA"));
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(t("does_not_exist", "EN"), "does_not_exist");
    }

    #[test]
    fn test_every_geo_message_is_distinct() {
        for lang in ["JA", "EN"] {
            let keys = ["geo_permission_denied", "geo_position_unavailable", "geo_timeout", "geo_unknown"];
            let messages: std::collections::HashSet<String> = keys.iter().map(|k| t(k, lang)).collect();
            assert_eq!(messages.len(), 4);
        }
    }
}
