use secrecy::SecretString;

/// 既定の比較地点（チューリッヒ）の座標。
pub const DEFAULT_LATITUDE: &str = "47.376888";
pub const DEFAULT_LONGITUDE: &str = "8.541694";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

fn default_timeout_secs() -> u64 {
    30
}

/// WeatherConfig は OpenWeather API クライアントの設定を表す。
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// OpenWeather API キー
    pub api_key: SecretString,
    /// 取得地点の緯度
    pub latitude: String,
    /// 取得地点の経度
    pub longitude: String,
    /// API エンドポイントのベース URL。テストではモックサーバーに差し替える。
    pub base_url: String,
    /// リクエストタイムアウト（秒）
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// 既定の比較地点で設定を生成する。
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            latitude: DEFAULT_LATITUDE.to_string(),
            longitude: DEFAULT_LONGITUDE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_location() {
        let cfg = WeatherConfig::new(SecretString::new("test-key".to_string()));
        assert_eq!(cfg.latitude, "47.376888");
        assert_eq!(cfg.longitude, "8.541694");
        assert!(cfg.base_url.starts_with("https://api.openweathermap.org"));
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn test_with_base_url_overrides() {
        let cfg = WeatherConfig::new(SecretString::new("test-key".to_string()))
            .with_base_url("http://127.0.0.1:9999");
        assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let cfg = WeatherConfig::new(SecretString::new("super-secret".to_string()));
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
