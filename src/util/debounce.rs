//! Debounce: invoke at most once per quiet window, with the latest value.
//!
//! [`Debouncer`] is the clock-driven core: the caller supplies timestamps, so
//! it runs anywhere. [`DebouncedFn`] drives it with `gloo_timers` in the
//! browser, where every call cancels the pending timeout and starts a new one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Timer-reset combinator over explicit timestamps (milliseconds).
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms: window_ms.max(0.0), pending: None }
    }

    /// Record a call. Replaces any pending value and restarts the window.
    pub fn push(&mut self, now_ms: f64, value: T) {
        self.pending = Some((now_ms + self.window_ms, value));
    }

    /// Take the pending value once its window has elapsed without new calls.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now_ms >= *deadline => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::DebouncedFn;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    /// A function that runs `wait_ms` after the last call, with that call's
    /// argument. Clones share the same pending timer.
    pub struct DebouncedFn<T> {
        wait_ms: u32,
        func: Rc<dyn Fn(T)>,
        pending: Rc<RefCell<Option<Timeout>>>,
    }

    impl<T> Clone for DebouncedFn<T> {
        fn clone(&self) -> Self {
            Self { wait_ms: self.wait_ms, func: Rc::clone(&self.func), pending: Rc::clone(&self.pending) }
        }
    }

    impl<T: 'static> DebouncedFn<T> {
        pub fn new(wait_ms: u32, func: impl Fn(T) + 'static) -> Self {
            Self { wait_ms, func: Rc::new(func), pending: Rc::new(RefCell::new(None)) }
        }

        pub fn call(&self, value: T) {
            let func = Rc::clone(&self.func);
            let timeout = Timeout::new(self.wait_ms, move || func(value));
            // Replacing the old handle drops it, which cancels that timeout.
            *self.pending.borrow_mut() = Some(timeout);
        }

        pub fn cancel(&self) {
            drop(self.pending.borrow_mut().take());
        }
    }
}
