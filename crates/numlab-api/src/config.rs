//! Server configuration.

use numlab_math::linear_algebra::IterativeConfig;
use numlab_math::regression::FitOptions;
use numlab_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Historical dataset file; the built-in sample is used when absent
    pub dataset_path: Option<String>,

    /// Fallback parameters for requests that omit them
    #[serde(default)]
    pub defaults: SolverDefaults,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: None,
            defaults: SolverDefaults::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Default numerical parameters, the `[defaults]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverDefaults {
    /// Bracket half-width at which bisection stops
    pub bisection_tolerance: f64,
    /// Bisection iteration budget
    pub bisection_max_iterations: u32,
    /// Step size or residual at which Newton stops
    pub newton_tolerance: f64,
    /// Newton iteration budget
    pub newton_max_iterations: u32,
    /// Starting point when a Newton request omits `x0`
    pub newton_initial_guess: f64,
    /// Sweep difference at which Jacobi and Gauss-Seidel stop
    pub iterative_tolerance: f64,
    /// Jacobi and Gauss-Seidel sweep budget
    pub iterative_max_iterations: u32,
    /// Price per projected unit in the budget endpoint
    pub unit_price: f64,
    /// Points in the regression plotting sequence
    pub plot_points: usize,
}

impl Default for SolverDefaults {
    fn default() -> Self {
        Self {
            bisection_tolerance: 1e-6,
            bisection_max_iterations: 100,
            newton_tolerance: 1e-8,
            newton_max_iterations: 50,
            newton_initial_guess: 1.0,
            iterative_tolerance: 1e-6,
            iterative_max_iterations: 500,
            unit_price: 350.0,
            plot_points: 100,
        }
    }
}

impl SolverDefaults {
    /// Bisection settings with per-request overrides.
    pub fn bisection(&self, tolerance: Option<f64>, max_iterations: Option<u32>) -> SolverConfig {
        SolverConfig::new(
            tolerance.unwrap_or(self.bisection_tolerance),
            max_iterations.unwrap_or(self.bisection_max_iterations),
        )
    }

    /// Newton-Raphson settings with per-request overrides.
    pub fn newton(&self, tolerance: Option<f64>, max_iterations: Option<u32>) -> SolverConfig {
        SolverConfig::new(
            tolerance.unwrap_or(self.newton_tolerance),
            max_iterations.unwrap_or(self.newton_max_iterations),
        )
    }

    /// Jacobi / Gauss-Seidel settings with per-request overrides.
    pub fn iterative(
        &self,
        tolerance: Option<f64>,
        max_iterations: Option<u32>,
        initial_guess: Option<Vec<f64>>,
    ) -> IterativeConfig {
        IterativeConfig {
            tolerance: tolerance.unwrap_or(self.iterative_tolerance),
            max_iterations: max_iterations.unwrap_or(self.iterative_max_iterations),
            initial_guess,
        }
    }

    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            plot_points: self.plot_points,
        }
    }
}
