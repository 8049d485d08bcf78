use secrecy::SecretString;

use tempcast_weather::WeatherConfig;

const ENV_OPENWEATHER_KEY: &str = "OPENWEATHER_KEY";

/// SinkConfig はシンクファンクションの設定を表す。
/// 呼び出しごとに 1 度だけ構築し、ハンドラへ注入する。
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// API キーが未設定の場合は None となり、比較をスキップする。
    pub weather: Option<WeatherConfig>,
}

impl SinkConfig {
    /// プロセス環境変数から設定を構築する。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を構築する（テスト注入用）。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let weather = lookup(ENV_OPENWEATHER_KEY)
            .filter(|key| !key.is_empty())
            .map(|key| WeatherConfig::new(SecretString::new(key)));
        Self { weather }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_disables_weather() {
        let cfg = SinkConfig::from_lookup(|_| None);
        assert!(cfg.weather.is_none());
    }

    #[test]
    fn test_empty_key_disables_weather() {
        let cfg = SinkConfig::from_lookup(|_| Some(String::new()));
        assert!(cfg.weather.is_none());
    }

    #[test]
    fn test_set_key_enables_weather() {
        let cfg = SinkConfig::from_lookup(|key| {
            (key == "OPENWEATHER_KEY").then(|| "test-key".to_string())
        });
        let weather = cfg.weather.expect("weather config should be present");
        assert_eq!(weather.latitude, "47.376888");
    }
}
