//! # Splatsweep: Batch Runner for Gaussian-Splat Training Sweeps
//!
//! Splatsweep launches an external trainer once per named scene experiment,
//! each with its own command-line overrides (resolution, shape budget,
//! output paths, an outdoor shading switch). The core is the
//! merge-and-serialize pipeline: per-scene overrides are shallow-merged
//! onto shared base settings, two default paths are derived from the
//! slugified scene name, and the resolved mapping flattens into the token
//! sequence handed to the trainer.
//!
//! Execution is strictly sequential and fail-fast: each run blocks until
//! the trainer exits, and the first failure aborts the remaining sweep.
//!
//! ## Example
//!
//! ```rust
//! use splatsweep::experiment::{base_args, Experiment, SweepPaths};
//!
//! let experiment = Experiment::builder("bicycle")
//!     .arg("resolution", 4)
//!     .arg("max_shapes", 6_400_000)
//!     .switch("outdoor")
//!     .build();
//!
//! let paths = SweepPaths::for_project("/work/splat");
//! let tokens = experiment.resolve(&base_args(), &paths).to_cli_tokens();
//!
//! assert_eq!(
//!     &tokens[..6],
//!     &["--eval", "--resolution", "4", "--max_shapes", "6400000", "--outdoor"]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod runner;

pub use error::{Error, Result};
