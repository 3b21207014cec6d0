//! Constrained password generation.
//!
//! Three entry points, called in order:
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use classpass::pass::{self, CharacterClass, GenerationConfig};
//! use classpass::rand::RngSource;
//!
//! let config = GenerationConfig::new(NonZeroUsize::new(16).unwrap())
//!     .with_minimum(CharacterClass::Digit, 2)
//!     .with_exclude_similar(true);
//! let pool = pass::build(&config).unwrap();
//! let password = pass::generate(&config, &pool, &mut RngSource::secure());
//! let strength = pass::score(password.as_str());
//!
//! assert_eq!(password.len(), 16);
//! assert!(strength.score <= pass::SCORE_SCALE);
//! ```

pub mod cli;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
