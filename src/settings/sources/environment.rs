//! Environment source: PROMBUILD_<SECTION>__<KEY>, e.g. PROMBUILD_MERGE__SEQUENCES.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("PROMBUILD")
            .prefix_separator("_")
            .separator("__"),
    )
}
