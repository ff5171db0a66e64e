mod config;
mod upload;

pub use self::config::*;
pub use self::upload::*;
