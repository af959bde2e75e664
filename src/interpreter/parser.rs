/// Expression parsing: the precedence ladder from additive operators down to
/// literals and parenthesized expressions.
pub mod expression;
/// Statement parsing: keyword dispatch and statement-list chaining.
pub mod statement;
/// Shared token-stream helpers.
pub mod utils;
