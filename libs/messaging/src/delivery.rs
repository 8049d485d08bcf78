use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

/// DeliveryReport は 1 回の発行試行の結果を表す。
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryReport {
    /// ブローカーへの配信が確認された。
    Delivered {
        topic: String,
        partition: i32,
        offset: i64,
    },
    /// この 1 件の配信が失敗した。ブローカー致命エラーとは区別される。
    Failed { reason: String },
}

impl DeliveryReport {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryReport::Delivered { .. })
    }
}

/// DeliveryHandle は発行済みメッセージの配信レポートを待ち受けるハンドル。
///
/// publish はエンキューと同時にこのハンドルを返し、
/// 配信レポートはハンドル経由でのみ観測される。
pub struct DeliveryHandle {
    inner: BoxFuture<'static, DeliveryReport>,
}

impl DeliveryHandle {
    pub fn new(fut: impl Future<Output = DeliveryReport> + Send + 'static) -> Self {
        Self { inner: fut.boxed() }
    }

    /// 解決済みのレポートからハンドルを生成する（テスト・スタブ用）。
    pub fn ready(report: DeliveryReport) -> Self {
        Self::new(std::future::ready(report))
    }

    /// 配信レポートを待つ。
    pub async fn wait(self) -> DeliveryReport {
        self.inner.await
    }

    /// 配信レポートを上限付きで待つ。
    /// 上限内にレポートが届かない場合は Failed として扱う。
    pub async fn wait_timeout(self, timeout: Duration) -> DeliveryReport {
        match tokio::time::timeout(timeout, self.inner).await {
            Ok(report) => report,
            Err(_) => DeliveryReport::Failed {
                reason: format!(
                    "delivery report not received within {}ms",
                    timeout.as_millis()
                ),
            },
        }
    }
}
