// ============================================================================
// REACTIVITY - shared value + subscriber notifications
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;
type Subscribers = RefCell<Vec<(u64, Callback)>>;

/// Shared value whose subscribers are told about every change.
/// Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<Subscribers>,
    next_id: Rc<Cell<u64>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Read access without cloning
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutates in place, then notifies once the borrow is released
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Like `update`, but only notifies when the updater reports a change
    pub fn update_if<F>(&self, updater: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let changed = updater(&mut self.value.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    /// The callback runs after every change until the guard is dropped
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn notify(&self) {
        // Snapshot so callbacks may (un)subscribe while we iterate
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Unsubscribes on drop
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_notifies_until_unsubscribed() {
        let state = ReactiveState::new(0u32);
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let subscription = state.subscribe(move || counter.set(counter.get() + 1));

        state.update(|v| *v += 1);
        state.set(5);
        assert_eq!(hits.get(), 2);
        assert_eq!(state.with(|v| *v), 5);

        drop(subscription);
        state.set(6);
        assert_eq!(hits.get(), 2);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let other = state.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = state.clone();
        let log = seen.clone();
        let _sub = state.subscribe(move || log.borrow_mut().push(reader.with(|s| s.clone())));

        other.set("hello".to_string());
        assert!(state.ptr_eq(&other));
        assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
    }
}
