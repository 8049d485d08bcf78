/// InvocationError はイベント読み込みの失敗を表す。
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("failed to read event: {0}")]
    Io(#[from] std::io::Error),

    #[error("event is not valid json: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
