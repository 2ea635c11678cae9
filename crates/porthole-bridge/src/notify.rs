//! Host-to-presentation broadcast.
//!
//! A [`NotificationHub`] holds the current subscribers. `push` delivers to
//! every subscriber registered at that moment; nothing is buffered for
//! subscribers that arrive later.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

struct Listener {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl HubInner {
    fn remove(&self, id: u64) -> bool {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        listeners.len() != before
    }
}

/// Subscriber registry for the `host-to-presentation` channel.
#[derive(Clone, Default)]
pub struct NotificationHub {
    inner: Arc<HubInner>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It stays registered until the returned
    /// handle's [`Subscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Listener {
                id,
                callback: Arc::new(callback),
            });
        tracing::debug!(subscription = id, "host-to-presentation subscriber added");
        Subscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `payload` to every current subscriber, in subscription
    /// order. Returns how many callbacks ran.
    ///
    /// Callbacks run outside the registry lock, so a callback may
    /// subscribe, unsubscribe or push again.
    pub fn push(&self, payload: &str) -> usize {
        let snapshot: Vec<Callback> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|l| Arc::clone(&l.callback))
            .collect();

        tracing::debug!(
            subscribers = snapshot.len(),
            body_len = payload.len(),
            "host-to-presentation push"
        );
        for callback in &snapshot {
            callback(payload);
        }
        snapshot.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Handle returned by `subscribe`. Its only capability is cancellation.
#[must_use = "the listener stays registered until unsubscribe() is called"]
pub struct Subscription {
    id: u64,
    hub: Weak<HubInner>,
}

impl Subscription {
    /// Stop deliveries to this subscriber. Returns `false` if the hub is
    /// already gone.
    pub fn unsubscribe(self) -> bool {
        match self.hub.upgrade() {
            Some(hub) => {
                let removed = hub.remove(self.id);
                tracing::debug!(subscription = self.id, "host-to-presentation subscriber removed");
                removed
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string())
        })
    }

    #[test]
    fn push_reaches_every_subscriber() {
        let hub = NotificationHub::new();
        let (a, cb_a) = recorder();
        let (b, cb_b) = recorder();
        let _sa = hub.subscribe(cb_a);
        let _sb = hub.subscribe(cb_b);

        assert_eq!(hub.push("hello"), 2);
        assert_eq!(*a.lock().unwrap(), vec!["hello"]);
        assert_eq!(*b.lock().unwrap(), vec!["hello"]);
    }

    #[test]
    fn delivery_is_fifo_per_subscriber() {
        let hub = NotificationHub::new();
        let (seen, cb) = recorder();
        let _sub = hub.subscribe(cb);

        for msg in ["one", "two", "three"] {
            hub.push(msg);
        }
        assert_eq!(*seen.lock().unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn unsubscribe_stops_only_that_subscriber() {
        let hub = NotificationHub::new();
        let (a, cb_a) = recorder();
        let (b, cb_b) = recorder();
        let sa = hub.subscribe(cb_a);
        let _sb = hub.subscribe(cb_b);

        hub.push("before");
        assert!(sa.unsubscribe());
        hub.push("after");

        assert_eq!(*a.lock().unwrap(), vec!["before"]);
        assert_eq!(*b.lock().unwrap(), vec!["before", "after"]);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn late_subscriber_gets_no_replay() {
        let hub = NotificationHub::new();
        hub.push("early");
        let (seen, cb) = recorder();
        let _sub = hub.subscribe(cb);
        hub.push("late");
        assert_eq!(*seen.lock().unwrap(), vec!["late"]);
    }

    #[test]
    fn push_without_subscribers_is_noop() {
        let hub = NotificationHub::new();
        assert_eq!(hub.push("nobody"), 0);
    }

    #[test]
    fn dropping_handle_keeps_listener() {
        let hub = NotificationHub::new();
        let (seen, cb) = recorder();
        drop(hub.subscribe(cb));
        hub.push("still here");
        assert_eq!(*seen.lock().unwrap(), vec!["still here"]);
    }

    #[test]
    fn unsubscribe_after_hub_dropped() {
        let hub = NotificationHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn callback_may_push_reentrantly() {
        let hub = NotificationHub::new();
        let (seen, cb) = recorder();
        let _sink = hub.subscribe(cb);
        let inner = hub.clone();
        let _relay = hub.subscribe(move |msg| {
            if msg == "ping" {
                inner.push("pong");
            }
        });

        hub.push("ping");
        assert_eq!(*seen.lock().unwrap(), vec!["ping", "pong"]);
    }
}
