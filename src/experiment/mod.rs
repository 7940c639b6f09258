//! Experiment definitions, configuration resolution and CLI serialization.
//!
//! ## Resolution Pipeline
//!
//! ```text
//! Experiment ──resolve(base, paths)──▶ ArgMap ──to_cli_tokens()──▶ Vec<String>
//! ```
//!
//! Merging is a shallow override of the experiment's args onto the shared
//! base, followed by defaulting of `model_path` and `source_path` from the
//! slugified experiment name. The resulting mapping serializes to the flat
//! token sequence handed to the trainer.
//!
//! ## Usage
//!
//! ```rust
//! use splatsweep::experiment::{base_args, benchmark_suite, SweepPaths};
//!
//! let base = base_args();
//! let paths = SweepPaths::for_project("/work/splat");
//!
//! for experiment in benchmark_suite() {
//!     let tokens = experiment.resolve(&base, &paths).to_cli_tokens();
//!     assert_eq!(tokens[0], "--eval");
//! }
//! ```

mod args;
mod definition;
mod slug;
mod suite;

pub use args::{ArgMap, ArgValue};
pub use definition::{Experiment, ExperimentBuilder, SweepPaths};
pub use slug::slugify;
pub use suite::{base_args, benchmark_suite};
