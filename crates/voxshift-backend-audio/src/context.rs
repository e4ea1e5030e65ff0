//! Shared render context.
//!
//! FFT plans are expensive to build and cheap to reuse, so the convolution
//! stage plans through a [`RenderContext`] that callers create once and inject
//! into every render. A process-wide instance is available through
//! [`RenderContext::shared`]; it is created on first use and dropped by
//! [`RenderContext::shutdown`].

use std::sync::{Arc, Mutex};

use rustfft::{Fft, FftPlanner};
use tracing::debug;

use crate::error::{AudioError, AudioResult};

static SHARED: Mutex<Option<Arc<RenderContext>>> = Mutex::new(None);

/// Forward and inverse FFTs of one size.
pub struct FftPair {
    /// Forward transform.
    pub forward: Arc<dyn Fft<f64>>,
    /// Inverse transform (unnormalized).
    pub inverse: Arc<dyn Fft<f64>>,
}

/// Read-mostly state shared by renders.
///
/// Renders only ask the context for FFT plans; the planner caches them
/// internally, so concurrent renders on one context do not interfere.
pub struct RenderContext {
    planner: Mutex<FftPlanner<f64>>,
}

impl RenderContext {
    /// Creates a private context.
    pub fn new() -> Self {
        Self {
            planner: Mutex::new(FftPlanner::new()),
        }
    }

    /// Returns the process-wide context, creating it on first use.
    pub fn shared() -> AudioResult<Arc<RenderContext>> {
        let mut slot = SHARED
            .lock()
            .map_err(|_| AudioError::unavailable("shared render context lock poisoned"))?;
        let ctx = slot.get_or_insert_with(|| {
            debug!("creating shared render context");
            Arc::new(RenderContext::new())
        });
        Ok(Arc::clone(ctx))
    }

    /// Releases the process-wide context.
    ///
    /// Renders holding an `Arc` keep their context alive; the next call to
    /// [`RenderContext::shared`] creates a fresh one. Returns true if a
    /// context was released.
    pub fn shutdown() -> bool {
        match SHARED.lock() {
            Ok(mut slot) => {
                let released = slot.take().is_some();
                if released {
                    debug!("released shared render context");
                }
                released
            }
            Err(_) => false,
        }
    }

    /// Plans a forward/inverse FFT pair of the given length.
    pub fn plan(&self, len: usize) -> AudioResult<FftPair> {
        let mut planner = self
            .planner
            .lock()
            .map_err(|_| AudioError::unavailable("FFT planner lock poisoned"))?;
        Ok(FftPair {
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        })
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::Length;

    #[test]
    fn test_plan_lengths() {
        let ctx = RenderContext::new();
        let pair = ctx.plan(256).unwrap();
        assert_eq!(pair.forward.len(), 256);
        assert_eq!(pair.inverse.len(), 256);
    }

    #[test]
    fn test_context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderContext>();
    }

    #[test]
    fn test_shared_lifecycle() {
        let a = RenderContext::shared().unwrap();
        let b = RenderContext::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        RenderContext::shutdown();
        // Existing handles stay usable after shutdown
        assert!(a.plan(16).is_ok());
        let c = RenderContext::shared().unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }
}
