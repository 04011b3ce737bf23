//! Durable session cache with synchronous listener fan-out. The store is an
//! explicit, injectable object (no ambient global): production code hands it
//! browser local storage, tests hand it an in-memory map. At most one identity
//! is cached at a time; setting a new one fully overwrites the previous one.

use crate::features::auth::types::{Identity, StoredIdentity};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Storage entry holding the serialized identity (id, email, pending flag).
pub const USER_STORAGE_KEY: &str = "auth_user";
/// Storage entry holding the raw access token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Minimal durable string storage. The store is single-threaded (browser main
/// thread), so backends use interior mutability rather than locks.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

type Listener = Rc<dyn Fn(Option<&Identity>)>;

struct Inner {
    identity: Option<Identity>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

pub struct SessionStore<S: KeyValueStorage> {
    storage: Rc<S>,
    inner: Rc<RefCell<Inner>>,
}

impl<S: KeyValueStorage> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Builds a store and hydrates it from durable storage. Malformed or
    /// half-written stored data is discarded silently and the stale entries
    /// removed; a broken cache must never block the app from starting.
    pub fn new(storage: S) -> Self {
        let storage = Rc::new(storage);
        let identity = hydrate(storage.as_ref());
        Self {
            storage,
            inner: Rc::new(RefCell::new(Inner {
                identity,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.inner.borrow().identity.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .borrow()
            .identity
            .as_ref()
            .map(|identity| identity.access_token.clone())
    }

    /// Overwrites the cached identity, persists it (or clears storage on
    /// `None`), and synchronously notifies every listener with the new value.
    pub fn set_identity(&self, identity: Option<Identity>) {
        match &identity {
            Some(identity) => {
                let stored = StoredIdentity::from(identity);
                if let Ok(json) = serde_json::to_string(&stored) {
                    self.storage.set(USER_STORAGE_KEY, &json);
                }
                self.storage.set(TOKEN_STORAGE_KEY, &identity.access_token);
            }
            None => {
                self.storage.remove(USER_STORAGE_KEY);
                self.storage.remove(TOKEN_STORAGE_KEY);
            }
        }
        self.inner.borrow_mut().identity = identity;
        self.notify();
    }

    /// Registers a listener and immediately replays the current value to it.
    /// The listener stays registered until `Subscription::unsubscribe` is
    /// called; dropping the handle keeps it alive.
    pub fn subscribe(&self, listener: impl Fn(Option<&Identity>) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            id
        };
        // Replay outside the borrow; the listener may call back into the store.
        let current = self.current();
        listener(current.as_ref());
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn notify(&self) {
        let (identity, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.identity.clone(), listeners)
        };
        for listener in listeners {
            listener(identity.as_ref());
        }
    }
}

fn hydrate<S: KeyValueStorage>(storage: &S) -> Option<Identity> {
    let user = storage.get(USER_STORAGE_KEY);
    let token = storage.get(TOKEN_STORAGE_KEY);
    match (user, token) {
        (Some(user), Some(token)) => match serde_json::from_str::<StoredIdentity>(&user) {
            Ok(stored) => Some(stored.into_identity(token)),
            Err(_) => {
                storage.remove(USER_STORAGE_KEY);
                storage.remove(TOKEN_STORAGE_KEY);
                None
            }
        },
        (None, None) => None,
        // One entry without the other is a half-written pair; clear both.
        _ => {
            storage.remove(USER_STORAGE_KEY);
            storage.remove(TOKEN_STORAGE_KEY);
            None
        }
    }
}

/// Handle returned by `subscribe`; consuming it removes the listener.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn identity(email: &str) -> Identity {
        Identity {
            id: format!("id-{email}"),
            email: email.to_string(),
            access_token: format!("token-{email}"),
            pending_verification: false,
        }
    }

    fn recorded(store: &SessionStore<MemoryStorage>) -> (Subscription, Rc<RefCell<Vec<Option<Identity>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |value| sink.borrow_mut().push(value.cloned()));
        (subscription, seen)
    }

    #[test]
    fn subscribe_replays_the_current_value() {
        let store = SessionStore::new(MemoryStorage::default());
        let (_sub, seen) = recorded(&store);
        assert_eq!(seen.borrow().as_slice(), &[None]);

        store.set_identity(Some(identity("a@example.com")));
        let (_sub2, seen2) = recorded(&store);
        assert_eq!(
            seen2.borrow().as_slice(),
            &[Some(identity("a@example.com"))]
        );
    }

    #[test]
    fn set_identity_overwrites_and_notifies_in_order() {
        let store = SessionStore::new(MemoryStorage::default());
        let (_sub, seen) = recorded(&store);

        store.set_identity(Some(identity("a@example.com")));
        store.set_identity(Some(identity("b@example.com")));

        assert_eq!(store.current(), Some(identity("b@example.com")));
        assert_eq!(
            seen.borrow().as_slice(),
            &[
                None,
                Some(identity("a@example.com")),
                Some(identity("b@example.com")),
            ]
        );
    }

    #[test]
    fn sign_out_clears_both_storage_entries_and_notifies_none() {
        let store = SessionStore::new(MemoryStorage::default());
        store.set_identity(Some(identity("a@example.com")));
        assert!(store.storage.get(USER_STORAGE_KEY).is_some());
        assert!(store.storage.get(TOKEN_STORAGE_KEY).is_some());

        let (_sub, seen) = recorded(&store);
        store.set_identity(None);

        assert_eq!(store.current(), None);
        assert_eq!(store.access_token(), None);
        assert!(store.storage.get(USER_STORAGE_KEY).is_none());
        assert!(store.storage.get(TOKEN_STORAGE_KEY).is_none());
        assert_eq!(
            seen.borrow().as_slice(),
            &[Some(identity("a@example.com")), None]
        );
    }

    #[test]
    fn hydrates_a_previously_persisted_identity() {
        let storage = MemoryStorage::default();
        {
            let store = SessionStore::new(MemoryStorage::default());
            store.set_identity(Some(identity("a@example.com")));
            // Copy what the first store persisted.
            for key in [USER_STORAGE_KEY, TOKEN_STORAGE_KEY] {
                storage.set(key, &store.storage.get(key).expect("persisted"));
            }
        }

        let rehydrated = SessionStore::new(storage);
        assert_eq!(rehydrated.current(), Some(identity("a@example.com")));
    }

    #[test]
    fn malformed_stored_data_is_discarded_not_surfaced() {
        let storage = MemoryStorage::default();
        storage.set(USER_STORAGE_KEY, "{not json");
        storage.set(TOKEN_STORAGE_KEY, "token");

        let store = SessionStore::new(storage);
        assert_eq!(store.current(), None);
        assert!(store.storage.get(USER_STORAGE_KEY).is_none());
        assert!(store.storage.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn half_written_pair_is_cleared_on_hydration() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_STORAGE_KEY, "token");

        let store = SessionStore::new(storage);
        assert_eq!(store.current(), None);
        assert!(store.storage.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = SessionStore::new(MemoryStorage::default());
        let (subscription, seen) = recorded(&store);
        subscription.unsubscribe();

        store.set_identity(Some(identity("a@example.com")));
        assert_eq!(seen.borrow().as_slice(), &[None]);
    }

    #[test]
    fn access_token_tracks_the_cached_identity() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.access_token(), None);
        store.set_identity(Some(identity("a@example.com")));
        assert_eq!(
            store.access_token(),
            Some("token-a@example.com".to_string())
        );
    }
}
