//! CLI command handlers, one module per subcommand group.

pub mod auth;
pub mod health;
pub mod keys;
pub mod subs;
pub mod traders;
pub mod wallet;
