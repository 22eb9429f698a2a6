//! Static-initialization timing descriptor.
//!
//! # Invariants
//! - Each of the four sets keeps first-insertion order.
//! - No de-duplication is performed across sets; a name may sit in both a
//!   build-time and a run-time set. `phase_conflict` reports such overlaps.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// When static initialization of a class or package happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPhase {
    BuildTime,
    RunTime,
}

impl InitPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuildTime => "build_time",
            Self::RunTime => "run_time",
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::BuildTime => Self::RunTime,
            Self::RunTime => Self::BuildTime,
        }
    }
}

/// Whether an initialization entry names a class or a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitTarget {
    Class,
    Package,
}

impl InitTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Package => "package",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializationDescriptor {
    #[serde(default)]
    buildtime_classes: IndexSet<String>,
    #[serde(default)]
    buildtime_packages: IndexSet<String>,
    #[serde(default)]
    runtime_classes: IndexSet<String>,
    #[serde(default)]
    runtime_packages: IndexSet<String>,
}

impl InitializationDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the set selected by `phase` and `target`.
    ///
    /// Returns `false` when the name was already in that set.
    pub fn add(&mut self, phase: InitPhase, target: InitTarget, name: impl Into<String>) -> bool {
        self.set_mut(phase, target).insert(name.into())
    }

    pub fn add_buildtime_class(&mut self, name: impl Into<String>) -> bool {
        self.add(InitPhase::BuildTime, InitTarget::Class, name)
    }

    pub fn add_buildtime_package(&mut self, name: impl Into<String>) -> bool {
        self.add(InitPhase::BuildTime, InitTarget::Package, name)
    }

    pub fn add_runtime_class(&mut self, name: impl Into<String>) -> bool {
        self.add(InitPhase::RunTime, InitTarget::Class, name)
    }

    pub fn add_runtime_package(&mut self, name: impl Into<String>) -> bool {
        self.add(InitPhase::RunTime, InitTarget::Package, name)
    }

    /// Whether `name` is already registered for the other phase.
    pub fn phase_conflict(&self, phase: InitPhase, target: InitTarget, name: &str) -> bool {
        self.set(phase.opposite(), target).contains(name)
    }

    pub fn buildtime_classes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.buildtime_classes.iter().map(String::as_str)
    }

    pub fn buildtime_packages(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.buildtime_packages.iter().map(String::as_str)
    }

    pub fn runtime_classes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.runtime_classes.iter().map(String::as_str)
    }

    pub fn runtime_packages(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.runtime_packages.iter().map(String::as_str)
    }

    /// Classes then packages for one phase, in insertion order.
    pub fn entries(&self, phase: InitPhase) -> impl Iterator<Item = &str> + '_ {
        self.set(phase, InitTarget::Class)
            .iter()
            .chain(self.set(phase, InitTarget::Package).iter())
            .map(String::as_str)
    }

    pub fn has_entries(&self, phase: InitPhase) -> bool {
        !self.set(phase, InitTarget::Class).is_empty()
            || !self.set(phase, InitTarget::Package).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_entries(InitPhase::BuildTime) && !self.has_entries(InitPhase::RunTime)
    }

    fn set(&self, phase: InitPhase, target: InitTarget) -> &IndexSet<String> {
        match (phase, target) {
            (InitPhase::BuildTime, InitTarget::Class) => &self.buildtime_classes,
            (InitPhase::BuildTime, InitTarget::Package) => &self.buildtime_packages,
            (InitPhase::RunTime, InitTarget::Class) => &self.runtime_classes,
            (InitPhase::RunTime, InitTarget::Package) => &self.runtime_packages,
        }
    }

    fn set_mut(&mut self, phase: InitPhase, target: InitTarget) -> &mut IndexSet<String> {
        match (phase, target) {
            (InitPhase::BuildTime, InitTarget::Class) => &mut self.buildtime_classes,
            (InitPhase::BuildTime, InitTarget::Package) => &mut self.buildtime_packages,
            (InitPhase::RunTime, InitTarget::Class) => &mut self.runtime_classes,
            (InitPhase::RunTime, InitTarget::Package) => &mut self.runtime_packages,
        }
    }
}
