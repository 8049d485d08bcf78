use std::io::Read;

use crate::error::InvocationError;

/// read_event は呼び出しイベント（JSON）を読み込む。
/// 外部ランタイムは 1 呼び出しにつき 1 イベントを標準入力で渡す。
pub fn read_event(mut reader: impl Read) -> Result<serde_json::Value, InvocationError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let event = serde_json::from_str(&raw)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_event_object() {
        let event = read_event(r#"{"order_id": "ord-1"}"#.as_bytes()).unwrap();
        assert_eq!(event["order_id"], "ord-1");
    }

    #[test]
    fn test_read_event_array() {
        let event = read_event(r#"[{"payload": {"value": "x"}}]"#.as_bytes()).unwrap();
        assert!(event.is_array());
    }

    #[test]
    fn test_read_event_rejects_invalid_json() {
        let result = read_event("not json".as_bytes());
        assert!(matches!(result, Err(InvocationError::InvalidEvent(_))));
    }
}
