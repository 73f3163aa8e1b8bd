pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{render_json, render_text, DemoRunner};
pub use config::DemoConfig;
pub use self::core::{add, divide, factorial, greet, is_prime, multiply, primes_in};
pub use domain::model::{DemoReport, Number};
pub use utils::error::{DemoError, Result};
