use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub spots_url: String,
    pub venue_url: String,
    pub language: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub geo_config: GeoConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spots_url: "data/shops.json".to_string(),
            venue_url: "data/venue.json".to_string(),
            language: "JA".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            geo_config: GeoConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub max_zoom: f64,
    /// Fracción de padding aplicada a los bounds al encuadrar
    pub fit_padding: f64,
    /// Zoom mínimo al centrar un spot desde la lista
    pub focus_zoom: f64,
    /// Grados por click en los botones de rotación
    pub rotate_step_deg: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19.0,
            fit_padding: 0.2,
            focus_zoom: 14.0,
            rotate_step_deg: 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    pub timeout_ms: u32,
    /// `maximumAge` del reintento en baja precisión
    pub retry_maximum_age_ms: u32,
    /// Pedir la ubicación una vez al arrancar
    pub auto_locate: bool,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            retry_maximum_age_ms: 60_000,
            auto_locate: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub mobile_breakpoint: String,
    /// Mostrar el venue como primera card de la lista (y filtrarlo como un spot más)
    pub venue_in_list: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: "(max-width: 900px)".to_string(),
            venue_in_list: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            spots_url: string_or(option_env!("SPOTS_URL"), &defaults.spots_url),
            venue_url: string_or(option_env!("VENUE_URL"), &defaults.venue_url),
            language: string_or(option_env!("APP_LANGUAGE"), &defaults.language).to_uppercase(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            map_config: MapConfig {
                tile_url: string_or(option_env!("TILE_URL"), &defaults.map_config.tile_url),
                max_zoom: parse_or(option_env!("MAX_ZOOM"), defaults.map_config.max_zoom),
                fit_padding: parse_or(option_env!("FIT_PADDING"), defaults.map_config.fit_padding),
                focus_zoom: parse_or(option_env!("FOCUS_ZOOM"), defaults.map_config.focus_zoom),
                rotate_step_deg: parse_or(option_env!("ROTATE_STEP_DEG"), defaults.map_config.rotate_step_deg),
            },
            geo_config: GeoConfig {
                timeout_ms: parse_or(option_env!("GEO_TIMEOUT_MS"), defaults.geo_config.timeout_ms),
                retry_maximum_age_ms: parse_or(
                    option_env!("GEO_RETRY_MAX_AGE_MS"),
                    defaults.geo_config.retry_maximum_age_ms,
                ),
                auto_locate: parse_or(option_env!("AUTO_LOCATE"), defaults.geo_config.auto_locate),
            },
            ui_config: UIConfig {
                mobile_breakpoint: string_or(option_env!("MOBILE_BREAKPOINT"), &defaults.ui_config.mobile_breakpoint),
                venue_in_list: parse_or(option_env!("VENUE_IN_LIST"), defaults.ui_config.venue_in_list),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn string_or(raw: Option<&str>, default: &str) -> String {
    raw.unwrap_or(default).to_string()
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
