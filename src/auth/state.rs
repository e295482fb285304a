//! Process-wide authentication flag with change notification.
//!
//! The flag has exactly one writer, [`AuthState`], and any number of
//! read-only [`AuthReader`] handles. Readers can query the current value or
//! subscribe to changes but have no way to mutate it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;

type Callback = Arc<dyn Fn(bool) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

struct AuthCell {
    authenticated: bool,
    subscribers: Vec<Subscriber>,
}

struct AuthInner {
    cell: Mutex<AuthCell>,
    next_id: AtomicU64,
    watch_tx: watch::Sender<bool>,
}

impl AuthInner {
    fn current(&self) -> bool {
        self.cell.lock().authenticated
    }

    fn subscribe(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let current = {
            let mut cell = self.cell.lock();
            cell.subscribers.push(Subscriber {
                id,
                callback: Arc::clone(&callback),
            });
            cell.authenticated
        };

        // Replay the latest value only; there is no history.
        callback(current);

        Subscription {
            id,
            inner: Arc::downgrade(self),
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.cell.lock().subscribers.retain(|s| s.id != id);
    }
}

/// The single writer of the authentication flag.
///
/// Deliberately not `Clone`: whoever owns this value is the only code path
/// that can change the flag. Hand out [`AuthReader`]s to everyone else.
pub struct AuthState {
    inner: Arc<AuthInner>,
}

impl AuthState {
    /// Create the flag in its initial, unauthenticated state.
    pub fn new() -> Self {
        let (watch_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(AuthInner {
                cell: Mutex::new(AuthCell {
                    authenticated: false,
                    subscribers: Vec::new(),
                }),
                next_id: AtomicU64::new(0),
                watch_tx,
            }),
        }
    }

    /// Overwrite the flag and notify every subscriber in subscription order.
    ///
    /// Notification is synchronous: when this returns, every subscriber has
    /// already observed `value`. Callbacks run after the internal lock is
    /// released.
    pub fn set_authenticated(&self, value: bool) {
        let callbacks: Vec<Callback> = {
            let mut cell = self.inner.cell.lock();
            cell.authenticated = value;
            cell.subscribers
                .iter()
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };

        self.inner.watch_tx.send_replace(value);

        tracing::debug!(
            authenticated = value,
            subscribers = callbacks.len(),
            "Auth state changed"
        );

        for callback in callbacks {
            callback(value);
        }
    }

    /// Current value of the flag.
    pub fn is_authenticated(&self) -> bool {
        self.inner.current()
    }

    /// Create a read-only handle to the flag.
    pub fn reader(&self) -> AuthReader {
        AuthReader {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the authentication flag.
#[derive(Clone)]
pub struct AuthReader {
    inner: Arc<AuthInner>,
}

impl AuthReader {
    /// Current value of the flag, read at call time.
    pub fn is_authenticated(&self) -> bool {
        self.inner.current()
    }

    /// Observe the flag.
    ///
    /// `callback` is invoked immediately with the current value, then once
    /// per subsequent `set_authenticated` call, in call order. The callback
    /// stays registered until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.subscribe(Arc::new(callback))
    }

    /// Latest-value channel for async consumers.
    ///
    /// Unlike [`subscribe`](Self::subscribe), a slow receiver only sees the
    /// most recent value, not every intermediate one.
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.inner.watch_tx.subscribe()
    }
}

/// Registration handle returned by [`AuthReader::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<AuthInner>,
}

impl Subscription {
    /// Stop receiving notifications.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().push(value))
    }

    #[test]
    fn starts_unauthenticated() {
        let state = AuthState::new();
        assert!(!state.is_authenticated());
        assert!(!state.reader().is_authenticated());
    }

    #[test]
    fn subscriber_receives_current_value_immediately() {
        let state = AuthState::new();
        let (seen, callback) = recorder();
        let _sub = state.reader().subscribe(callback);
        assert_eq!(*seen.lock(), vec![false]);
    }

    #[test]
    fn late_subscriber_sees_only_latest_value() {
        let state = AuthState::new();
        state.set_authenticated(true);
        state.set_authenticated(false);
        state.set_authenticated(true);

        let (seen, callback) = recorder();
        let _sub = state.reader().subscribe(callback);
        assert_eq!(*seen.lock(), vec![true]);
    }

    #[test]
    fn subscribers_notified_in_subscription_order() {
        let state = AuthState::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = state.reader().subscribe(move |v| first.lock().push(("a", v)));
        let second = Arc::clone(&order);
        let _b = state.reader().subscribe(move |v| second.lock().push(("b", v)));

        order.lock().clear();
        state.set_authenticated(true);
        assert_eq!(*order.lock(), vec![("a", true), ("b", true)]);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let state = AuthState::new();
        let (seen, callback) = recorder();
        let sub = state.reader().subscribe(callback);
        state.set_authenticated(true);
        sub.unsubscribe();
        state.set_authenticated(false);
        assert_eq!(*seen.lock(), vec![false, true]);
    }

    #[test]
    fn subscription_outliving_state_is_harmless() {
        let state = AuthState::new();
        let (_seen, callback) = recorder();
        let sub = state.reader().subscribe(callback);
        drop(state);
        drop(sub);
    }

    #[test]
    fn watch_receiver_tracks_latest_value() {
        let state = AuthState::new();
        let rx = state.reader().watch();
        assert!(!*rx.borrow());
        state.set_authenticated(true);
        assert!(*rx.borrow());
    }
}
