//! Cloneable, lock-guarded collector handle for concurrent front ends.
//!
//! Every registration runs inside one lock acquisition, so verify, merge and
//! forward are atomic relative to other registrations.

use crate::collector::{ClassRegistration, ConfigurationCollector};
use crate::descriptor::reflect::{ClassDescriptor, ReflectionDescriptor};
use crate::descriptor::resources::ResourcesDescriptor;
use crate::properties::PropertiesResult;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedCollector {
    inner: Arc<Mutex<ConfigurationCollector>>,
}

impl SharedCollector {
    pub fn new(collector: ConfigurationCollector) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collector)),
        }
    }

    /// Runs `f` with exclusive access to the collector.
    pub fn with<R>(&self, f: impl FnOnce(&mut ConfigurationCollector) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn add_class_descriptor(&self, descriptor: ClassDescriptor) -> ClassRegistration {
        self.with(|collector| collector.add_class_descriptor(descriptor))
    }

    /// Like `ConfigurationCollector::add_reflection_descriptor`, returning an
    /// owned copy of the filtered result.
    pub fn add_reflection_descriptor(&self, bulk: &ReflectionDescriptor) -> ReflectionDescriptor {
        self.with(|collector| collector.add_reflection_descriptor(bulk).into_owned())
    }

    pub fn add_proxy<I, S>(&self, interface_names: I, verify: bool) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(|collector| collector.add_proxy(interface_names, verify))
    }

    pub fn add_resources_descriptor(&self, descriptor: &ResourcesDescriptor) {
        self.with(|collector| collector.add_resources_descriptor(descriptor));
    }

    pub fn add_resource(&self, pattern: impl Into<String>, is_bundle: bool) {
        self.with(|collector| collector.add_resource(pattern, is_bundle));
    }

    pub fn register_resource(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.with(|collector| collector.register_resource(name, bytes));
    }

    pub fn initialize_at_build_time<I, S>(&self, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(|collector| collector.initialize_at_build_time(class_names));
    }

    pub fn initialize_at_run_time<I, S>(&self, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(|collector| collector.initialize_at_run_time(class_names));
    }

    pub fn initialize_packages_at_build_time<I, S>(&self, package_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(|collector| collector.initialize_packages_at_build_time(package_names));
    }

    pub fn initialize_packages_at_run_time<I, S>(&self, package_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(|collector| collector.initialize_packages_at_run_time(package_names));
    }

    pub fn native_image_properties(&self) -> String {
        self.with(|collector| collector.native_image_properties())
    }

    pub fn write_native_image_properties(&self, path: impl AsRef<Path>) -> PropertiesResult<()> {
        self.with(|collector| collector.write_native_image_properties(path))
    }

    /// Consumes the handle, returning the collector when no clones remain.
    pub fn try_into_inner(self) -> Result<ConfigurationCollector, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
