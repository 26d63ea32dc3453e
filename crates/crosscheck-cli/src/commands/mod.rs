//! Command implementations.

pub mod check;
pub mod config;
pub mod probe;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::probe::execute_probe;
