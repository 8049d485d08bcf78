use uuid::Uuid;

/// InvocationContext は 1 回のファンクション呼び出しに付随するメタデータ。
/// ハンドラ本体はこの内容に依存せず、ログ出力にのみ使用する。
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// 呼び出しごとに採番されるリクエスト ID（UUID v4）
    pub request_id: String,
    /// 呼び出されたファンクション名
    pub function_name: String,
}

impl InvocationContext {
    /// 新しい InvocationContext を生成する。
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            function_name: function_name.into(),
        }
    }
}
