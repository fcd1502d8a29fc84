//! Deadline and cancellation wrapper shared by every outbound request.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Run `fut` until it finishes, `timeout` elapses, or `cancel` fires.
/// Cancellation wins when both are ready.
pub async fn guard<T, F>(timeout: Duration, cancel: Option<CancellationToken>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let deadline = async {
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(timeout)),
        }
    };

    match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(Error::Cancelled),
                result = deadline => result,
            }
        }
        None => deadline.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passes_result_through() {
        let value = guard(Duration::from_secs(1), None, async { Ok(7) }).await;
        assert_eq!(value.unwrap(), 7);

        let err = guard::<(), _>(Duration::from_secs(1), None, async {
            Err(Error::NoImageData)
        })
        .await;
        assert!(matches!(err, Err(Error::NoImageData)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_request_times_out() {
        let result = guard(Duration::from_secs(30), None, async {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(Error::Timeout(d)) if d == Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let result = guard(Duration::from_secs(30), Some(token), async {
            Ok::<_, Error>("never")
        })
        .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_request() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            trigger.cancel();
        });
        let result = guard(Duration::from_secs(30), Some(token), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
