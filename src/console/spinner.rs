use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Braille spinner frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Run `work` on a worker task while the foreground renders progress.
///
/// With `animate` set, spinner frames followed by `label` are redrawn on one
/// line until the worker finishes, and the line is cleared afterwards.
/// Otherwise `label` is printed once. The worker's own error is returned
/// unchanged; a panicked worker becomes [`AppError::Internal`].
pub async fn offload<T, F, W>(out: &mut W, label: &str, animate: bool, work: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>> + Send + 'static,
    T: Send + 'static,
    W: Write,
{
    let mut handle = tokio::spawn(work);

    if !animate {
        writeln!(out, "{}", label)?;
        out.flush()?;
        return join_result(handle.await);
    }

    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut frame = 0usize;

    let joined = loop {
        tokio::select! {
            joined = &mut handle => break joined,
            _ = ticker.tick() => {
                write!(out, "\r{} {}", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()], label)?;
                out.flush()?;
                frame += 1;
            }
        }
    };

    write!(out, "\r\x1b[2K")?;
    out.flush()?;
    debug!(frames = frame, label = %label, "Worker finished");

    join_result(joined)
}

fn join_result<T>(joined: Result<AppResult<T>, tokio::task::JoinError>) -> AppResult<T> {
    joined.map_err(|e| AppError::Internal {
        message: format!("worker task failed: {}", e),
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offload_without_animation_prints_label_once() {
        let mut out = Vec::new();
        let value = offload(&mut out, "Working...", false, async { Ok(42) })
            .await
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(String::from_utf8(out).unwrap(), "Working...\n");
    }

    #[tokio::test]
    async fn test_offload_with_animation_draws_frames_and_clears() {
        let mut out = Vec::new();
        let value = offload(&mut out, "Researching", true, async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok("done")
        })
        .await
        .unwrap();

        assert_eq!(value, "done");
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("⠋ Researching"));
        assert!(rendered.ends_with("\r\x1b[2K"));
    }

    #[tokio::test]
    async fn test_offload_propagates_worker_error() {
        let mut out = Vec::new();
        let result: AppResult<()> = offload(&mut out, "Failing", false, async {
            Err(AppError::Internal {
                message: "backend down".to_string(),
            })
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Internal error: backend down");
    }

    #[tokio::test]
    #[allow(unreachable_code)]
    async fn test_offload_reports_panicked_worker() {
        let mut out = Vec::new();
        let result: AppResult<()> = offload(&mut out, "Panicking", false, async {
            panic!("worker exploded");
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("worker task failed"));
    }
}
