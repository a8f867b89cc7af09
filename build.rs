use std::env;
use std::fs;
use std::path::Path;

// Claves que `AppConfig::from_env` lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "SPOTS_URL",
    "VENUE_URL",
    "APP_LANGUAGE",
    "ENABLE_LOGGING",
    "TILE_URL",
    "MAX_ZOOM",
    "FIT_PADDING",
    "FOCUS_ZOOM",
    "ROTATE_STEP_DEG",
    "GEO_TIMEOUT_MS",
    "GEO_RETRY_MAX_AGE_MS",
    "AUTO_LOCATE",
    "MOBILE_BREAKPOINT",
    "VENUE_IN_LIST",
];

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables desde .env si existe (el entorno real tiene prioridad)
    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=.env: clave desconocida {}", key);
                        continue;
                    }
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, unquote(value.trim()));
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
