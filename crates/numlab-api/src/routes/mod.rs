//! Route handlers.

pub mod budget;
pub mod health;
pub mod regression;
pub mod roots;
pub mod systems;
