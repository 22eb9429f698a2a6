//! Resource descriptors: patterns and bundles bundled into the image.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Plain resource patterns plus resource-bundle names.
///
/// The two sets are independent; a value may appear in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResourcesConfig", into = "ResourcesConfig")]
pub struct ResourcesDescriptor {
    patterns: IndexSet<String>,
    bundles: IndexSet<String>,
}

impl ResourcesDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one plain resource pattern. Returns `false` when already present.
    pub fn add(&mut self, pattern: impl Into<String>) -> bool {
        self.patterns.insert(pattern.into())
    }

    /// Adds one resource bundle name. Returns `false` when already present.
    pub fn add_bundle(&mut self, bundle: impl Into<String>) -> bool {
        self.bundles.insert(bundle.into())
    }

    pub fn merge(&mut self, other: &ResourcesDescriptor) {
        self.patterns.extend(other.patterns.iter().cloned());
        self.bundles.extend(other.bundles.iter().cloned());
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(String::as_str)
    }

    pub fn bundles(&self) -> impl Iterator<Item = &str> + '_ {
        self.bundles.iter().map(String::as_str)
    }

    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn contains_bundle(&self, bundle: &str) -> bool {
        self.bundles.contains(bundle)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.bundles.is_empty()
    }
}

// `resource-config.json` shape.
#[derive(Serialize, Deserialize)]
struct ResourcesConfig {
    #[serde(default)]
    resources: Vec<PatternEntry>,
    #[serde(default)]
    bundles: Vec<BundleEntry>,
}

#[derive(Serialize, Deserialize)]
struct PatternEntry {
    pattern: String,
}

#[derive(Serialize, Deserialize)]
struct BundleEntry {
    name: String,
}

impl From<ResourcesConfig> for ResourcesDescriptor {
    fn from(value: ResourcesConfig) -> Self {
        Self {
            patterns: value.resources.into_iter().map(|entry| entry.pattern).collect(),
            bundles: value.bundles.into_iter().map(|entry| entry.name).collect(),
        }
    }
}

impl From<ResourcesDescriptor> for ResourcesConfig {
    fn from(value: ResourcesDescriptor) -> Self {
        Self {
            resources: value
                .patterns
                .into_iter()
                .map(|pattern| PatternEntry { pattern })
                .collect(),
            bundles: value
                .bundles
                .into_iter()
                .map(|name| BundleEntry { name })
                .collect(),
        }
    }
}
