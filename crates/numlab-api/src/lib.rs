//! Numlab REST API Server.
//!
//! This crate exposes the `numlab-math` engine over HTTP.
//!
//! ## Features
//!
//! - Root finding by bisection and Newton-Raphson, alone or side by side
//! - Linear and quadratic regression over a historical dataset
//! - Budget pricing with proportional allocation
//! - Linear systems by Gaussian elimination, Jacobi or Gauss-Seidel
//!
//! Every iterative endpoint returns its trace as a `{ columns, rows }` table.
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port with the built-in sample dataset
//! numlab-server
//!
//! # Load settings and a dataset
//! numlab-server --config config/numlab.toml --dataset data/sample_data.json
//!
//! # Custom host and port
//! numlab-server --host 0.0.0.0 --port 3000
//! ```

pub mod config;
pub mod dataset;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ServerConfig, SolverDefaults};
pub use dataset::Dataset;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
