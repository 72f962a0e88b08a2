//! Command handlers, one module per subcommand.

pub mod calc;
pub mod completion;
pub mod config_cmd;
pub mod list;
pub mod show;
pub mod solve;
pub mod transfer;
pub mod version;
