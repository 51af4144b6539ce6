pub mod config;
pub mod parse_draws;
pub mod parse_meta;
pub mod parse_scoreboards;

pub use config::config::*;
pub use parse_draws::*;
pub use parse_meta::*;
pub use parse_scoreboards::*;
