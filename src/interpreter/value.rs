/// The core value type and its accessors.
pub mod core;
