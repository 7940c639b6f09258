//! The built-in benchmark sweep.
//!
//! Eleven scenes across the MipNeRF-360, Tanks&Temples and Deep Blending
//! captures. The 360 outdoor scenes train at quarter resolution with the
//! outdoor shading path enabled, the 360 indoor scenes at half resolution,
//! and the Tanks&Temples / Deep Blending scenes at native resolution. Shape
//! budgets are per-scene caps on the primitive count.
//!
//! The suite is plain data handed to the runner; nothing here is global
//! state.

use super::args::ArgMap;
use super::definition::Experiment;

/// Shared settings applied to every experiment before per-scene overrides.
#[must_use]
pub fn base_args() -> ArgMap {
    let mut base = ArgMap::new();
    base.insert("eval", true);
    base
}

/// The full benchmark suite, in launch order.
#[must_use]
pub fn benchmark_suite() -> Vec<Experiment> {
    vec![
        Experiment::builder("bicycle")
            .arg("resolution", 4)
            .arg("max_shapes", 6_400_000)
            .switch("outdoor")
            .build(),
        Experiment::builder("garden")
            .arg("resolution", 4)
            .arg("max_shapes", 5_800_000)
            .switch("outdoor")
            .build(),
        Experiment::builder("stump")
            .arg("resolution", 4)
            .arg("max_shapes", 4_900_000)
            .switch("outdoor")
            .build(),
        Experiment::builder("bonsai")
            .arg("resolution", 2)
            .arg("max_shapes", 1_300_000)
            .build(),
        Experiment::builder("counter")
            .arg("resolution", 2)
            .arg("max_shapes", 1_200_000)
            .build(),
        Experiment::builder("room")
            .arg("resolution", 2)
            .arg("max_shapes", 1_500_000)
            .build(),
        Experiment::builder("kitchen")
            .arg("resolution", 2)
            .arg("max_shapes", 1_800_000)
            .build(),
        Experiment::builder("train")
            .arg("max_shapes", 1_100_000)
            .switch("outdoor")
            .build(),
        Experiment::builder("truck")
            .arg("max_shapes", 2_600_000)
            .switch("outdoor")
            .build(),
        Experiment::builder("drjohnson")
            .arg("max_shapes", 3_300_000)
            .build(),
        Experiment::builder("playroom")
            .arg("max_shapes", 2_300_000)
            .build(),
    ]
}
