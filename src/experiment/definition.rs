//! Experiment definitions and configuration resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::{ArgMap, ArgValue};
use super::slug::slugify;

/// Filesystem roots the default per-experiment paths are derived from.
///
/// Neither directory is created here; the trainer owns its own output and
/// expects the dataset to already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPaths {
    output_root: PathBuf,
    dataset_root: PathBuf,
}

impl SweepPaths {
    /// Create from explicit roots.
    #[must_use]
    pub const fn new(output_root: PathBuf, dataset_root: PathBuf) -> Self {
        Self {
            output_root,
            dataset_root,
        }
    }

    /// Derive both roots from a project directory: model output under
    /// `<project>/output/experiments`, datasets under
    /// `<project-parent>/dataset/assets`.
    #[must_use]
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref();
        let parent = root.parent().unwrap_or(root);
        Self {
            output_root: root.join("output").join("experiments"),
            dataset_root: parent.join("dataset").join("assets"),
        }
    }

    /// Root directory for default model output paths.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Root directory for default source dataset paths.
    #[must_use]
    pub fn dataset_root(&self) -> &Path {
        &self.dataset_root
    }

    /// Default model output directory for a scene slug.
    #[must_use]
    pub fn model_path(&self, slug: &str) -> PathBuf {
        self.output_root.join(slug)
    }

    /// Default source dataset directory for a scene slug.
    #[must_use]
    pub fn source_path(&self, slug: &str) -> PathBuf {
        self.dataset_root.join(slug)
    }
}

/// A named, fixed set of training parameter overrides.
///
/// Experiments are defined once, up front, and never mutated; resolution
/// produces a fresh configuration on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    name: String,
    args: ArgMap,
}

impl Experiment {
    /// Create an experiment with no overrides of its own.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: ArgMap::new(),
        }
    }

    /// Create a builder for an experiment with per-scene overrides.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ExperimentBuilder {
        ExperimentBuilder::new(name)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the per-experiment overrides.
    #[must_use]
    pub const fn args(&self) -> &ArgMap {
        &self.args
    }

    /// Filesystem-safe form of the experiment name.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Resolve the full configuration for this experiment.
    ///
    /// Shallow-merges the experiment overrides onto `base` (experiment keys
    /// win), then fills in `model_path` and `source_path` from `paths` and
    /// the name's slug. Explicitly supplied paths are never overwritten.
    /// Pure: no filesystem access, no side effects.
    #[must_use]
    pub fn resolve(&self, base: &ArgMap, paths: &SweepPaths) -> ArgMap {
        let mut resolved = base.merged_with(&self.args);
        let slug = self.slug();
        resolved.entry_or("model_path", paths.model_path(&slug).display().to_string());
        resolved.entry_or("source_path", paths.source_path(&slug).display().to_string());
        resolved
    }
}

/// Builder for [`Experiment`].
#[derive(Debug)]
pub struct ExperimentBuilder {
    name: String,
    args: ArgMap,
}

impl ExperimentBuilder {
    /// Create a new builder for the named experiment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: ArgMap::new(),
        }
    }

    /// Set an option override.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Set a presence-only flag.
    #[must_use]
    pub fn switch(mut self, key: impl Into<String>) -> Self {
        self.args.insert(key, ArgValue::Switch);
        self
    }

    /// Build the `Experiment`.
    #[must_use]
    pub fn build(self) -> Experiment {
        Experiment {
            name: self.name,
            args: self.args,
        }
    }
}
