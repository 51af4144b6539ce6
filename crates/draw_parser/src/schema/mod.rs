pub mod countries;
pub mod models;
pub mod score_grid;

pub use countries::*;
pub use models::*;
pub use score_grid::*;
