#![allow(dead_code)]

use nativeconf_core::{
    BuildConnector, ClassDescriptor, ConnectorError, ConnectorResult, ReflectionDescriptor,
    ResolvedType, ResourcesDescriptor, TypeResolver,
};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct MockType {
    name: String,
    interface: bool,
    type_ok: bool,
    members_ok: bool,
}

impl ResolvedType for MockType {
    fn dotted_name(&self) -> &str {
        &self.name
    }

    fn is_interface(&self) -> bool {
        self.interface
    }

    fn verify_type(&self, _debug: bool) -> bool {
        self.type_ok
    }

    fn verify_members(&self, _descriptor: &ClassDescriptor, _debug: bool) -> bool {
        self.members_ok
    }
}

#[derive(Default)]
pub struct MockResolver {
    types: BTreeMap<String, Arc<MockType>>,
    lookups: AtomicUsize,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, name: &str, interface: bool, type_ok: bool, members_ok: bool) -> Self {
        self.types.insert(
            name.to_string(),
            Arc::new(MockType {
                name: name.to_string(),
                interface,
                type_ok,
                members_ok,
            }),
        );
        self
    }

    pub fn class(self, name: &str) -> Self {
        self.insert(name, false, true, true)
    }

    pub fn interface(self, name: &str) -> Self {
        self.insert(name, true, true, true)
    }

    /// Type exists but every member list is rejected.
    pub fn class_with_bad_members(self, name: &str) -> Self {
        self.insert(name, false, true, false)
    }

    /// Type resolves but fails its own type-level check.
    pub fn broken_class(self, name: &str) -> Self {
        self.insert(name, false, false, true)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn resolved(&self, name: &str) -> Arc<dyn ResolvedType> {
        self.types
            .get(name)
            .cloned()
            .expect("type registered in mock resolver")
    }
}

impl TypeResolver for MockResolver {
    fn resolve(&self, dotted_name: &str) -> Option<Arc<dyn ResolvedType>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.types
            .get(dotted_name)
            .map(|found| found.clone() as Arc<dyn ResolvedType>)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    ClassDescriptor(ClassDescriptor),
    ReflectionDescriptor(ReflectionDescriptor),
    Proxy(Vec<String>),
    ResourcesDescriptor(ResourcesDescriptor),
    Resource { pattern: String, is_bundle: bool },
    RegisteredResource { name: String, bytes: Vec<u8> },
    BuildTimeClasses(Vec<String>),
    RunTimeClasses(Vec<String>),
    BuildTimePackages(Vec<String>),
    RunTimePackages(Vec<String>),
}

#[derive(Default)]
pub struct RecordingConnector {
    events: Mutex<Vec<ConnectorEvent>>,
    fail: bool,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every call, then reports failure.
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn events(&self) -> Vec<ConnectorEvent> {
        self.events.lock().clone()
    }

    fn record(&self, event: ConnectorEvent) -> ConnectorResult<()> {
        self.events.lock().push(event);
        if self.fail {
            return Err(ConnectorError::Disconnected);
        }
        Ok(())
    }
}

impl BuildConnector for RecordingConnector {
    fn add_class_descriptor(&self, descriptor: &ClassDescriptor) -> ConnectorResult<()> {
        self.record(ConnectorEvent::ClassDescriptor(descriptor.clone()))
    }

    fn add_reflection_descriptor(&self, descriptor: &ReflectionDescriptor) -> ConnectorResult<()> {
        self.record(ConnectorEvent::ReflectionDescriptor(descriptor.clone()))
    }

    fn add_proxy(&self, interface_names: &[String]) -> ConnectorResult<()> {
        self.record(ConnectorEvent::Proxy(interface_names.to_vec()))
    }

    fn add_resources_descriptor(&self, descriptor: &ResourcesDescriptor) -> ConnectorResult<()> {
        self.record(ConnectorEvent::ResourcesDescriptor(descriptor.clone()))
    }

    fn add_resource(&self, pattern: &str, is_bundle: bool) -> ConnectorResult<()> {
        self.record(ConnectorEvent::Resource {
            pattern: pattern.to_string(),
            is_bundle,
        })
    }

    fn register_resource(&self, name: &str, content: &mut dyn Read) -> ConnectorResult<()> {
        let mut bytes = Vec::new();
        content.read_to_end(&mut bytes)?;
        self.record(ConnectorEvent::RegisteredResource {
            name: name.to_string(),
            bytes,
        })
    }

    fn initialize_at_build_time(&self, class_names: &[String]) -> ConnectorResult<()> {
        self.record(ConnectorEvent::BuildTimeClasses(class_names.to_vec()))
    }

    fn initialize_at_run_time(&self, class_names: &[String]) -> ConnectorResult<()> {
        self.record(ConnectorEvent::RunTimeClasses(class_names.to_vec()))
    }

    fn initialize_packages_at_build_time(&self, package_names: &[String]) -> ConnectorResult<()> {
        self.record(ConnectorEvent::BuildTimePackages(package_names.to_vec()))
    }

    fn initialize_packages_at_run_time(&self, package_names: &[String]) -> ConnectorResult<()> {
        self.record(ConnectorEvent::RunTimePackages(package_names.to_vec()))
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
