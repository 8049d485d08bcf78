//! tempcast-weather: OpenWeather API クライアントライブラリ。

pub mod client;
pub mod config;
pub mod error;

pub use client::{OpenWeatherClient, WeatherClient};
pub use config::WeatherConfig;
pub use error::WeatherError;

#[cfg(feature = "mock")]
pub use client::MockWeatherClient;
