//! Runs analysis jobs off the async runtime.
//!
//! Each job gets its own [`Hooks`]: progress goes through a `watch` channel
//! to a reporter task, and Ctrl-C flips the job's [`CancellationToken`].

use spriteforge_core::{CancellationToken, Hooks};
use tokio::sync::watch;

use crate::error::AppError;

/// Progress is logged each time it crosses another multiple of this.
const REPORT_STEP: f32 = 0.1;

/// Run `job` on the blocking pool and wait for it, honoring Ctrl-C.
pub async fn run_blocking<T, F>(label: &'static str, quiet: bool, job: F) -> Result<T, AppError>
where
    F: FnOnce(&mut Hooks<'_>) -> T + Send + 'static,
    T: Send + 'static,
{
    let token = CancellationToken::new();
    let worker_token = token.clone();
    let (tx, rx) = watch::channel(0.0f32);

    let reporter = tokio::spawn(report_progress(label, quiet, rx));

    let mut handle = tokio::task::spawn_blocking(move || {
        let mut sink = |fraction: f32| {
            tx.send_replace(fraction);
        };
        let mut hooks = Hooks::none()
            .with_progress(&mut sink)
            .with_cancel(&worker_token);
        job(&mut hooks)
    });

    let joined = tokio::select! {
        joined = &mut handle => joined,
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => {
                    tracing::warn!(job = label, "interrupt received, canceling");
                    token.cancel();
                }
                Err(err) => tracing::warn!(error = %err, "unable to listen for interrupt"),
            }
            handle.await
        }
    };

    // The sender lives in the job closure, so the reporter ends with it.
    if let Err(err) = reporter.await {
        tracing::debug!(error = %err, "progress reporter stopped early");
    }
    Ok(joined?)
}

async fn report_progress(label: &'static str, quiet: bool, mut rx: watch::Receiver<f32>) {
    let mut next = REPORT_STEP;
    while rx.changed().await.is_ok() {
        let fraction = *rx.borrow_and_update();
        if quiet || fraction < next {
            continue;
        }
        tracing::info!(job = label, "{:.0}%", fraction * 100.0);
        while next <= fraction {
            next += REPORT_STEP;
        }
    }
}
