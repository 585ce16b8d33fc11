//! Named-event publish/subscribe used by the trackers.
//!
//! Listeners are reference-counted closures. Identity is the identity of the
//! `Rc`, so keep the `Rc` you subscribed with if you want to remove it later.
//!
//! Publishing is synchronous: every listener registered for the key runs, in
//! registration order, before `publish` returns.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// A listener receiving the published argument by reference.
pub type Listener<A> = Rc<dyn Fn(&A)>;

/// Wrap a closure as a listener.
pub fn listener<A, F>(f: F) -> Listener<A>
where
    F: Fn(&A) + 'static,
{
    Rc::new(f)
}

/// Event keys published by the drag and resize trackers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackerEvent {
    /// Geometry owned by the tracker changed
    Update,
}

/// Minimal publish/subscribe keyed by event name.
pub struct Emitter<K, A> {
    listeners: HashMap<K, Vec<Listener<A>>>,
}

impl<K, A> Emitter<K, A>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Append `listener` to the list for `key`.
    pub fn subscribe(&mut self, key: K, listener: Listener<A>) {
        self.listeners.entry(key).or_default().push(listener);
    }

    /// Invoke every listener registered for `key` with `args`.
    pub fn publish(&self, key: &K, args: &A) {
        let Some(list) = self.listeners.get(key) else {
            return;
        };
        for listener in list {
            listener(args);
        }
    }

    /// Remove listeners.
    ///
    /// - no key: clear everything
    /// - key, no listener: drop every listener for that key
    /// - key and listener: drop the first listener identical to `listener`
    ///
    /// Absent keys or listeners are ignored.
    pub fn unsubscribe(&mut self, key: Option<&K>, listener: Option<&Listener<A>>) {
        let Some(key) = key else {
            self.listeners.clear();
            return;
        };
        let Some(listener) = listener else {
            self.listeners.remove(key);
            return;
        };
        if let Some(list) = self.listeners.get_mut(key) {
            if let Some(index) = list.iter().position(|l| Rc::ptr_eq(l, listener)) {
                list.remove(index);
            }
        }
    }

    /// Drop all listeners for `key`, or for every key when `None`.
    pub fn unsubscribe_all(&mut self, key: Option<&K>) {
        self.unsubscribe(key, None);
    }

    pub fn listener_count(&self, key: &K) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }
}

impl<K, A> Default for Emitter<K, A>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A> std::fmt::Debug for Emitter<K, A>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.listeners.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
