//! Render values from a request-scoped session store into log layouts.
//!
//! A [`SessionValueRenderer`] is configured with a variable name such as
//! `user.address.city`. On each render it looks the variable up in a
//! [`Store`] and hands the result to [`layoutfmt`] for padding and culture
//! formatting.
//!
//! In flat mode the whole variable is one store key. In nested mode the
//! variable is split on `.`: the first segment is the store key and the rest
//! are member lookups on the retrieved [`Value`].
//!
//! Resolution never fails loudly. Invalid paths, missing keys, missing
//! members and walks through null all produce an empty rendering; see
//! [`Miss`] for the individual cases.

mod config;
mod error;
mod path;
mod render;
mod resolve;
mod store;
mod value;

#[cfg(test)]
mod test_config;
#[cfg(test)]
mod test_resolve;

pub use config::{RENDERER_NAME, SessionValueConfig};
pub use error::{ConfigError, Miss};
pub use layoutfmt::{Culture, FormatOptions};
pub use path::{SEPARATOR, VariablePath};
pub use render::SessionValueRenderer;
pub use resolve::{resolve, resolve_detailed};
pub use store::{SessionStore, SharedStore, Store};
pub use value::{MemberAccessible, Record, Value};
