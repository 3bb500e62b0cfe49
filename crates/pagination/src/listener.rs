use std::fmt;

type Callback<T> = Box<dyn FnMut(T) + Send>;

/// Ordered list of change callbacks.
///
/// Callbacks are invoked synchronously, in registration order. Registering the
/// same closure twice registers it twice.
pub struct Listeners<T> {
    callbacks: Vec<Callback<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }
}

impl<T: Copy> Listeners<T> {
    /// Registers `callback` and immediately calls it with `current`.
    pub fn register<F>(&mut self, current: T, mut callback: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        callback(current);
        self.callbacks.push(Box::new(callback));
    }

    pub fn notify(&mut self, value: T) {
        for callback in &mut self.callbacks {
            callback(value);
        }
    }
}

impl<T> Listeners<T> {
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
