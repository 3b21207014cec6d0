//! Password generation core.
//!
//! Data flows one way: [`build`] turns a [`GenerationConfig`] into a
//! [`Pool`], [`generate`] draws a [`Password`] from it, and [`score`] rates
//! the result.

mod class;
mod config;
mod error;
mod generate;
pub mod output;
pub mod pool;
pub mod strength;

pub use class::CharacterClass;
pub use config::GenerationConfig;
pub use error::ConfigError;
pub use generate::{Password, generate, generate_batch};
pub use pool::{Pool, build};
pub use strength::{SCORE_SCALE, Strength, StrengthResult, score};
