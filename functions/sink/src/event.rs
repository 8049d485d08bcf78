use serde::Deserialize;

/// SinkRecord はシンクコネクタが 1 呼び出しで渡すレコード 1 件を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct SinkRecord {
    pub payload: RecordPayload,
}

/// RecordPayload はレコード内のペイロードを表す。
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPayload {
    /// `"{temperature_guess=<number>}"` 形式の文字列
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sink_record() {
        let json = r#"{"payload": {"value": "{temperature_guess=21.5}"}}"#;
        let record: SinkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.payload.value, "{temperature_guess=21.5}");
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let json = r#"{"payload": {}}"#;
        let result: Result<SinkRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
