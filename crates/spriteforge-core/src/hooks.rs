//! Progress reporting and cooperative cancellation for long-running scans.
//!
//! Every slow operation takes a `&mut Hooks`. It polls the cancel token once
//! per processed row and reports a completion fraction after each row, so
//! cancellation latency is bounded by the cost of a single row.
//!
//! Composite operations split their progress range with [`Hooks::phase`];
//! phases nest, and reported values never decrease.

use tokio_util::sync::CancellationToken;

use crate::error::CoreError;

/// Optional progress sink and cancel token for a single call.
pub struct Hooks<'a> {
    progress: Option<&'a mut dyn FnMut(f32)>,
    cancel: Option<&'a CancellationToken>,
    /// Slice of the overall `[0, 1]` range owned by the current phase.
    range: (f32, f32),
    last: Option<f32>,
}

impl Default for Hooks<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl<'a> Hooks<'a> {
    /// No progress reporting, never canceled.
    pub fn none() -> Self {
        Self {
            progress: None,
            cancel: None,
            range: (0.0, 1.0),
            last: None,
        }
    }

    /// Receive completion fractions in `[0, 1]`.
    pub fn with_progress(mut self, sink: &'a mut dyn FnMut(f32)) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Poll `token` at every checkpoint. Clone it to cancel from elsewhere.
    pub fn with_cancel(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel.is_some_and(CancellationToken::is_cancelled)
    }

    /// `Err(CoreError::Canceled)` once cancellation has been requested.
    pub fn checkpoint(&self) -> Result<(), CoreError> {
        if self.is_canceled() {
            return Err(CoreError::Canceled);
        }
        Ok(())
    }

    /// Report `fraction` of the current phase as done.
    ///
    /// Values are mapped into the phase's slice of the overall range and
    /// dropped unless they advance past the last reported value.
    pub fn report(&mut self, fraction: f32) {
        let Some(sink) = self.progress.as_deref_mut() else {
            return;
        };
        let (start, end) = self.range;
        let value = lerp(start, end, fraction);
        if self.last.is_none_or(|last| value > last) {
            self.last = Some(value);
            sink(value);
        }
    }

    /// Poll cancellation, then report `done / total`.
    pub fn advance(&mut self, done: u64, total: u64) -> Result<(), CoreError> {
        self.checkpoint()?;
        let fraction = if total == 0 {
            1.0
        } else {
            done as f32 / total as f32
        };
        self.report(fraction);
        Ok(())
    }

    /// Mark the current phase complete.
    pub fn finish(&mut self) {
        self.report(1.0);
    }

    /// Run `step` with progress mapped onto `[start, end]` of the current
    /// phase. The outer phase is restored afterwards.
    pub fn phase<T>(&mut self, start: f32, end: f32, step: impl FnOnce(&mut Self) -> T) -> T {
        let outer = self.range;
        self.range = (lerp(outer.0, outer.1, start), lerp(outer.0, outer.1, end));
        let out = step(self);
        self.range = outer;
        out
    }
}

/// Point `t` of the way from `start` to `end`; both ends are exact.
fn lerp(start: f32, end: f32, t: f32) -> f32 {
    if t >= 1.0 {
        end
    } else if t <= 0.0 {
        start
    } else {
        start + (end - start) * t
    }
}
