/// Callback receiving the full current snapshot of a store
pub type Listener<T> = Box<dyn FnMut(&[T])>;

/// Ordered registry of snapshot listeners.
///
/// Listeners are kept for the lifetime of the registry and are invoked in
/// registration order.
pub struct Listeners<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add(&mut self, listener: impl FnMut(&[T]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Invokes every listener once with `snapshot`
    pub fn notify(&mut self, snapshot: &[T]) {
        for listener in self.listeners.iter_mut() {
            listener(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
