//! Environment variable source: SOLUTION_TREE__* with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment prefix; `SOLUTION_TREE__TREE__ITEM_NESTING=true` sets `tree.item_nesting`.
pub const ENV_PREFIX: &str = "SOLUTION_TREE";

/// Add environment variable overlay to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
