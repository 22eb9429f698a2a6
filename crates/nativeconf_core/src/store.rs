//! Per-session descriptor store.
//!
//! # Invariants
//! - Mutation happens only through `ConfigurationCollector` registration
//!   operations; external readers get shared references.
//! - Generated resource blobs are last-write-wins per name.

use crate::descriptor::init::InitializationDescriptor;
use crate::descriptor::proxies::ProxiesDescriptor;
use crate::descriptor::reflect::ReflectionDescriptor;
use crate::descriptor::resources::ResourcesDescriptor;
use indexmap::IndexMap;

/// Accumulated descriptors for one collection session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorStore {
    pub(crate) reflection: ReflectionDescriptor,
    pub(crate) resources: ResourcesDescriptor,
    pub(crate) proxies: ProxiesDescriptor,
    pub(crate) initialization: InitializationDescriptor,
    pub(crate) resource_files: IndexMap<String, Vec<u8>>,
}

impl DescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reflection(&self) -> &ReflectionDescriptor {
        &self.reflection
    }

    pub fn resources(&self) -> &ResourcesDescriptor {
        &self.resources
    }

    pub fn proxies(&self) -> &ProxiesDescriptor {
        &self.proxies
    }

    pub fn initialization(&self) -> &InitializationDescriptor {
        &self.initialization
    }

    /// Bytes stored for a generated resource.
    pub fn resource_bytes(&self, name: &str) -> Option<&[u8]> {
        self.resource_files.get(name).map(Vec::as_slice)
    }

    /// All generated resources in first-registration order.
    pub fn resource_files(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.resource_files
            .iter()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
    }
}
