//! Sweep driver: runs the full benchmark suite against the local trainer.
//!
//! Takes no arguments. The process exit code is the first failing child's
//! exit code, or 0 when every run succeeds.

use std::process::exit;

use tracing::error;
use tracing_subscriber::EnvFilter;

use splatsweep::experiment::benchmark_suite;
use splatsweep::runner::Sweep;
use splatsweep::Error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            error!("cannot determine project root: {err}");
            exit(1);
        }
    };

    let mut sweep = Sweep::builder(&project_root).build();
    if let Err(err) = sweep.run(&benchmark_suite()) {
        error!("{err}");
        let code = match &err {
            Error::TrainingFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        };
        exit(code);
    }
}
