use std::sync::Arc;

use tracing::info;

use tempcast_invocation::InvocationContext;
use tempcast_weather::WeatherClient;

use crate::error::SinkError;
use crate::event::SinkRecord;
use crate::guess::parse_temperature_guess;

/// ComparisonOutcome は実測値との比較結果を表す。
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// 実測値を取得して差分を計算した。
    Compared { actual: f64, difference: f64 },
    /// API キー未設定のため比較をスキップした。
    Skipped,
}

/// GuessComparison は 1 回の呼び出しの結果を表す。
#[derive(Debug, Clone, PartialEq)]
pub struct GuessComparison {
    pub guess: f64,
    pub outcome: ComparisonOutcome,
}

/// SinkHandler はシンクコネクタ起動イベントから推測値を取り出し、
/// 気象クライアントが設定されていれば実測気温との差分を計算する。
pub struct SinkHandler {
    weather: Option<Arc<dyn WeatherClient>>,
}

impl SinkHandler {
    /// 新しい SinkHandler を生成する。
    pub fn new(weather: Option<Arc<dyn WeatherClient>>) -> Self {
        Self { weather }
    }

    /// 先頭レコードの推測値を解析し、設定があれば実測値と比較する。
    pub async fn handle(
        &self,
        event: &serde_json::Value,
        context: &InvocationContext,
    ) -> Result<GuessComparison, SinkError> {
        let records: Vec<SinkRecord> = serde_json::from_value(event.clone())?;
        let record = records.first().ok_or(SinkError::EmptyEvent)?;
        let guess = parse_temperature_guess(&record.payload.value)?;
        info!(request_id = %context.request_id, guess, "parsed temperature guess");

        let weather = match &self.weather {
            Some(weather) => weather,
            None => {
                info!(
                    request_id = %context.request_id,
                    "no weather api key configured, skipping comparison"
                );
                return Ok(GuessComparison {
                    guess,
                    outcome: ComparisonOutcome::Skipped,
                });
            }
        };

        let actual = weather.current_temperature().await?;
        let difference = (actual - guess).abs();
        info!(
            request_id = %context.request_id,
            actual,
            difference,
            "compared guess against current temperature"
        );

        Ok(GuessComparison {
            guess,
            outcome: ComparisonOutcome::Compared { actual, difference },
        })
    }
}
