//! Defaults applied beneath every other source.

use crate::config::TreeOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-seeded with tree defaults so partial files deserialize cleanly.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = TreeOptions::default();
    Config::builder()
        .set_default("tree.item_nesting", defaults.item_nesting)?
        .set_default("tree.show_packages", defaults.show_packages)
}
