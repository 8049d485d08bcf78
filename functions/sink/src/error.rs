use tempcast_weather::WeatherError;

use crate::guess::GuessParseError;

/// SinkError はシンクファンクション呼び出しの失敗を表す。
/// 入力不正に対する既定値の補完は行わず、すべて呼び出し失敗として伝播する。
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("event is not a sequence of sink records: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("event contains no records")]
    EmptyEvent,

    #[error("guess parse error: {0}")]
    Guess(#[from] GuessParseError),

    #[error("weather lookup failed: {0}")]
    Weather(#[from] WeatherError),
}
