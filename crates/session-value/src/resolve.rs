//! Resolve a variable path against a store.

use std::borrow::Cow;

use crate::{error::Miss, path::VariablePath, store::Store, value::Value};

/// Resolve `raw_path` against `store`.
///
/// With `nested` false the whole path is one store key. With `nested` true
/// the path is split on `.` and walked through members. Every failure is
/// `None`; use [`resolve_detailed`] to learn which one occurred.
///
/// A found value may be [`Value::Null`], which is distinct from `None`.
pub fn resolve<S: Store + ?Sized>(raw_path: Option<&str>, nested: bool, store: &S) -> Option<Value> {
    resolve_detailed(raw_path, nested, store).ok()
}

/// Like [`resolve`], reporting why nothing was found.
pub fn resolve_detailed<S: Store + ?Sized>(
    raw_path: Option<&str>,
    nested: bool,
    store: &S,
) -> Result<Value, Miss> {
    let raw = raw_path.filter(|p| !p.is_empty()).ok_or(Miss::InvalidPath)?;
    if !nested {
        return store
            .get(raw)
            .map(Cow::into_owned)
            .ok_or(Miss::KeyNotFound);
    }

    // Validate the whole path before touching the store.
    let path = VariablePath::parse(raw)?;
    let root = store.get(path.root()).ok_or(Miss::KeyNotFound)?;
    let found = path
        .members()
        .iter()
        .try_fold(root, |current, name| step(current, name))?;
    Ok(found.into_owned())
}

/// Move from `current` to its member `name`.
fn step<'a>(current: Cow<'a, Value>, name: &str) -> Result<Cow<'a, Value>, Miss> {
    if current.is_null() {
        return Err(Miss::NullTraversal);
    }
    let member = match current {
        Cow::Borrowed(value) => value.member(name),
        Cow::Owned(value) => {
            let owned = value.member(name).map(Cow::into_owned);
            owned.map(Cow::Owned)
        }
    };
    member.ok_or(Miss::MemberNotFound)
}
