//! Data Transfer Objects for API requests and responses.

pub mod budget;
pub mod common;
pub mod regression;
pub mod roots;
pub mod systems;

pub use budget::*;
pub use common::*;
pub use regression::*;
pub use roots::*;
pub use systems::*;
