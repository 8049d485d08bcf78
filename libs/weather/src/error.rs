/// WeatherError は気温取得の失敗を表す。
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather api request failed: {0}")]
    RequestFailed(String),

    #[error("weather api returned status {0}")]
    UnexpectedStatus(u16),

    #[error("weather api response is malformed: {0}")]
    MalformedResponse(String),
}
