//! Settings sources, added to the builder in precedence order.

pub mod environment;
pub mod settings_file;
