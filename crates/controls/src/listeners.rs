/// Ordered list of change handlers.
///
/// Every handler is called once per `notify`, in the order it was
/// subscribed. There is no unsubscribe and no deduplication: subscribing
/// the same closure twice runs it twice.
pub struct Listeners<T> {
    handlers: Vec<Box<dyn FnMut(T)>>,
}

impl<T: Copy> Listeners<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the list.
    pub fn subscribe(&mut self, handler: impl FnMut(T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Call every handler with `value`.
    pub fn notify(&mut self, value: T) {
        for handler in &mut self.handlers {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T: Copy> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_notify_is_noop() {
        let mut listeners: Listeners<u32> = Listeners::new();
        assert!(listeners.is_empty());
        listeners.notify(7);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            listeners.subscribe(move |v: i32| log.borrow_mut().push((tag, v)));
        }

        listeners.notify(3);

        assert_eq!(*log.borrow(), vec![("a", 3), ("b", 3), ("c", 3)]);
    }

    #[test]
    fn same_handler_twice_runs_twice() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();
        for _ in 0..2 {
            let count = count.clone();
            listeners.subscribe(move |_: ()| *count.borrow_mut() += 1);
        }
        listeners.notify(());
        assert_eq!(*count.borrow(), 2);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn debug_shows_handler_count() {
        let mut listeners = Listeners::new();
        listeners.subscribe(|_: u8| {});
        assert_eq!(format!("{listeners:?}"), "Listeners { handlers: 1 }");
    }
}
