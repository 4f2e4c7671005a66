//! Read access to request-scoped session stores.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    sync::Arc,
};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::value::Value;

/// A read-only view of a session: string keys mapped to values.
///
/// Lookups are exact and case-sensitive. A missing key is `None`, never a
/// panic.
pub trait Store {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Option<Cow<'_, Value>>;
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        (**self).get(key)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        (**self).get(key)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        (**self).get(key)
    }
}

impl<H: BuildHasher> Store for HashMap<String, Value, H> {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        Self::get(self, key).map(Cow::Borrowed)
    }
}

impl Store for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        Self::get(self, key).map(Cow::Borrowed)
    }
}

/// An owned in-memory session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    /// Session entries by key.
    entries: HashMap<String, Value>,
}

impl SessionStore {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove the entry under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Is there an entry under `key`?
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the session holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Store for SessionStore {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.entries.get(key).map(Cow::Borrowed)
    }
}

impl<K, V> FromIterator<(K, V)> for SessionStore
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A session shared between the code that writes it and the code that logs.
///
/// Each lookup takes the read lock once and clones the single value out, so a
/// render sees every key either before or after a concurrent write.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    /// The lock-protected session.
    inner: Arc<RwLock<SessionStore>>,
}

impl SharedStore {
    /// Create an empty shared session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.write().insert(key, value)
    }

    /// Remove the entry under `key`.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.write().remove(key)
    }

    /// Lock the session for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.inner.read()
    }

    /// Lock the session for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.inner.write()
    }
}

impl From<SessionStore> for SharedStore {
    fn from(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}

impl Store for SharedStore {
    fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        let guard = self.inner.read();
        guard.entries.get(key).cloned().map(Cow::Owned)
    }
}
