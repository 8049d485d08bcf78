use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;

use crate::config::WeatherConfig;
use crate::error::WeatherError;

/// WeatherClient は現在気温の取得インターフェース。
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// 設定された地点の現在気温（摂氏）を取得する。
    async fn current_temperature(&self) -> Result<f64, WeatherError>;
}

/// one-call エンドポイントの応答のうち利用する部分。
#[derive(Debug, Deserialize)]
struct OneCallResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp: f64,
}

/// OpenWeatherClient は OpenWeather one-call API の HTTP クライアント。
/// リトライは行わず、失敗はそのまま呼び出し元へ伝播させる。
pub struct OpenWeatherClient {
    config: WeatherConfig,
    http_client: reqwest::Client,
}

impl OpenWeatherClient {
    /// WeatherConfig から OpenWeatherClient を生成する。
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn current_temperature(&self) -> Result<f64, WeatherError> {
        let url = format!(
            "{}/onecall?lat={}&lon={}&appid={}&units=metric",
            self.config.base_url,
            self.config.latitude,
            self.config.longitude,
            self.config.api_key.expose_secret(),
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UnexpectedStatus(status.as_u16()));
        }

        let body: OneCallResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        debug!(temp = body.current.temp, "fetched current temperature");
        Ok(body.current.temp)
    }
}
