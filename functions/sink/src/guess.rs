//! 気温推測値のワイヤマイクロフォーマット。
//!
//! シンクコネクタが渡す `payload.value` は
//! `"{temperature_guess=" FLOAT "}"` という形式の文字列で、
//! この文法に一致しない入力はすべてエラーとする。

const PREFIX: &str = "{temperature_guess=";
const SUFFIX: &str = "}";

/// GuessParseError は推測値フィールドの解析失敗を表す。
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GuessParseError {
    #[error("guess field does not start with \"{{temperature_guess=\": {0:?}")]
    MissingPrefix(String),

    #[error("guess field does not end with \"}}\": {0:?}")]
    MissingSuffix(String),

    #[error("guess value is not a number: {0:?}")]
    InvalidNumber(String),
}

/// `"{temperature_guess=21.5}"` 形式の文字列から推測値を取り出す。
pub fn parse_temperature_guess(raw: &str) -> Result<f64, GuessParseError> {
    let rest = raw
        .strip_prefix(PREFIX)
        .ok_or_else(|| GuessParseError::MissingPrefix(raw.to_string()))?;
    let number = rest
        .strip_suffix(SUFFIX)
        .ok_or_else(|| GuessParseError::MissingSuffix(raw.to_string()))?;
    number
        .parse::<f64>()
        .map_err(|_| GuessParseError::InvalidNumber(number.to_string()))
}
