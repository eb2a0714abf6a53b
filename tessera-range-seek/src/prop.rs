//! Fire-and-forget notification handles.
//!
//! ## Usage
//!
//! Pass any `Fn()` closure to
//! [`RangeSeekSlider::set_step_feedback`](crate::RangeSeekSlider::set_step_feedback);
//! it is wrapped in a [`Callback`] and called on every step crossing.

use std::{fmt, sync::Arc};

/// A shared `Fn()` the slider calls without looking at a result.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    /// Wraps a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Invokes the closure.
    pub fn call(&self) {
        (self.0)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn clones_share_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let callback = Callback::from(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let cloned = callback.clone();
        callback.call();
        cloned.call();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
