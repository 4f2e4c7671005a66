//! The session value layout renderer.

use std::str::FromStr;

use layoutfmt::CultureFormat;
use tracing::trace;

use crate::{
    config::SessionValueConfig, error::ConfigError, resolve::resolve_detailed, store::Store,
    value::Value,
};

/// Renders one session variable as text for a log layout.
///
/// Rendering never fails: anything that cannot be resolved renders as empty
/// text, still padded according to the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionValueRenderer {
    /// What to look up and how to format it.
    config: SessionValueConfig,
}

impl SessionValueRenderer {
    /// Create a renderer from its configuration.
    pub fn new(config: SessionValueConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &SessionValueConfig {
        &self.config
    }

    /// Resolve the configured variable without formatting it.
    pub fn resolve<S: Store + ?Sized>(&self, store: &S) -> Option<Value> {
        let variable = self.config.variable.as_deref();
        let nested = self.config.evaluate_as_nested_properties;
        match resolve_detailed(variable, nested, store) {
            Ok(value) => Some(value),
            Err(miss) => {
                trace!(
                    variable = variable.unwrap_or_default(),
                    nested,
                    %miss,
                    "session value not resolved"
                );
                None
            }
        }
    }

    /// Render the configured variable from `store`.
    pub fn render<S: Store + ?Sized>(&self, store: &S) -> String {
        let value = self.resolve(store);
        layoutfmt::render(
            value.as_ref().map(|v| v as &dyn CultureFormat),
            &self.config.format,
        )
    }

    /// Render the configured variable from `store`, appending to `out`.
    pub fn render_to<S: Store + ?Sized>(&self, store: &S, out: &mut String) {
        out.push_str(&self.render(store));
    }
}

impl From<SessionValueConfig> for SessionValueRenderer {
    fn from(config: SessionValueConfig) -> Self {
        Self::new(config)
    }
}

impl FromStr for SessionValueRenderer {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        token.parse().map(Self::new)
    }
}
