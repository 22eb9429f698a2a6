//! Configuration collector: verification, merge and forwarding.
//!
//! # Responsibility
//! - Accept incremental registrations from the scanning front end.
//! - Verify reflective types before they reach the store; drop, downgrade
//!   or reject per descriptor kind.
//! - Mirror every accepted registration to the optional build connector.
//!
//! # Invariants
//! - A class whose type does not verify never enters the reflection store.
//! - A class whose members do not verify is stored name-only (no flags).
//! - The single-class path forwards the descriptor as submitted; the bulk
//!   path forwards the filtered result.
//! - A verified proxy registration is all-or-nothing.
//! - Resources are never type-checked.
//! - Initialization accepts a name in both phases and logs a warning.

use crate::connector::{BuildConnector, ConnectorForwarder};
use crate::descriptor::init::{InitPhase, InitTarget, InitializationDescriptor};
use crate::descriptor::proxies::{ProxiesDescriptor, ProxyDescriptor};
use crate::descriptor::reflect::{ClassDescriptor, ReflectionDescriptor};
use crate::descriptor::resources::ResourcesDescriptor;
use crate::options::AotOptions;
use crate::properties::{
    native_image_properties_reader, render_native_image_properties,
    write_native_image_properties, PropertiesResult,
};
use crate::store::DescriptorStore;
use crate::verify::resolver::{ResolvedType, TypeResolver};
use crate::verify::verifier::TypeVerifier;
use log::{debug, warn};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Verification outcome for one class descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRegistration {
    /// Stored as submitted.
    Accepted,
    /// Type exists but members did not verify; stored name-only.
    Downgraded,
    /// Type missing or invalid; nothing stored.
    Rejected,
}

/// Accumulates native-image configuration for one build session.
pub struct ConfigurationCollector {
    options: AotOptions,
    verifier: TypeVerifier,
    store: DescriptorStore,
    forwarder: ConnectorForwarder,
}

impl ConfigurationCollector {
    pub fn new(options: AotOptions, resolver: Arc<dyn TypeResolver>) -> Self {
        debug!(
            "event=collector_init module=collector status=ok debug_verify={}",
            options.debug_verify
        );
        Self {
            options,
            verifier: TypeVerifier::new(resolver, options.debug_verify),
            store: DescriptorStore::new(),
            forwarder: ConnectorForwarder::default(),
        }
    }

    pub fn with_connector(mut self, connector: Arc<dyn BuildConnector>) -> Self {
        self.set_connector(connector);
        self
    }

    /// Replaces the resolver used by subsequent verifications.
    pub fn set_type_resolver(&mut self, resolver: Arc<dyn TypeResolver>) {
        self.verifier = TypeVerifier::new(resolver, self.options.debug_verify);
    }

    pub fn set_connector(&mut self, connector: Arc<dyn BuildConnector>) {
        self.forwarder.attach(connector);
    }

    pub fn clear_connector(&mut self) -> Option<Arc<dyn BuildConnector>> {
        self.forwarder.detach()
    }

    pub fn has_connector(&self) -> bool {
        self.forwarder.is_attached()
    }

    pub fn store(&self) -> &DescriptorStore {
        &self.store
    }

    pub fn reflection_descriptor(&self) -> &ReflectionDescriptor {
        self.store.reflection()
    }

    pub fn resources_descriptor(&self) -> &ResourcesDescriptor {
        self.store.resources()
    }

    pub fn proxies_descriptor(&self) -> &ProxiesDescriptor {
        self.store.proxies()
    }

    pub fn initialization_descriptor(&self) -> &InitializationDescriptor {
        self.store.initialization()
    }

    pub fn resource_bytes(&self, name: &str) -> Option<&[u8]> {
        self.store.resource_bytes(name)
    }

    /// Verifies and merges one class descriptor.
    ///
    /// The connector receives `descriptor` as submitted, even when the
    /// stored form was downgraded.
    pub fn add_class_descriptor(&mut self, descriptor: ClassDescriptor) -> ClassRegistration {
        let outcome = self.classify(&descriptor);
        match outcome {
            ClassRegistration::Rejected => return outcome,
            ClassRegistration::Downgraded => {
                self.store.reflection.merge_class(&descriptor.to_minimal());
            }
            ClassRegistration::Accepted => self.store.reflection.merge_class(&descriptor),
        }
        self.forwarder.forward("add_class_descriptor", |connector| {
            connector.add_class_descriptor(&descriptor)
        });
        outcome
    }

    /// Verifies every entry of `bulk` and merges the survivors.
    ///
    /// Returns `bulk` itself when nothing was dropped or downgraded,
    /// otherwise a filtered copy. `bulk` is never modified.
    pub fn add_reflection_descriptor<'a>(
        &mut self,
        bulk: &'a ReflectionDescriptor,
    ) -> Cow<'a, ReflectionDescriptor> {
        let filtered = self.filter_verified(bulk);
        self.store.reflection.merge(&filtered);
        self.forwarder.forward("add_reflection_descriptor", |connector| {
            connector.add_reflection_descriptor(&filtered)
        });
        filtered
    }

    /// Registers one dynamic proxy over `interface_names`, order preserved.
    ///
    /// With `verify`, every name must resolve to an interface; otherwise
    /// nothing is stored or forwarded and `false` is returned.
    pub fn add_proxy<I, S>(&mut self, interface_names: I, verify: bool) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_names(interface_names);
        if verify
            && !self
                .verifier
                .check_types(&names, |resolved| resolved.is_some_and(|t| t.is_interface()))
        {
            return false;
        }
        self.forwarder
            .forward("add_proxy", |connector| connector.add_proxy(&names));
        self.store.proxies.add(ProxyDescriptor::new(names));
        true
    }

    pub fn add_resources_descriptor(&mut self, descriptor: &ResourcesDescriptor) {
        self.store.resources.merge(descriptor);
        self.forwarder.forward("add_resources_descriptor", |connector| {
            connector.add_resources_descriptor(descriptor)
        });
    }

    pub fn add_resource(&mut self, pattern: impl Into<String>, is_bundle: bool) {
        let pattern = pattern.into();
        if is_bundle {
            self.store.resources.add_bundle(pattern.clone());
        } else {
            self.store.resources.add(pattern.clone());
        }
        self.forwarder.forward("add_resource", |connector| {
            connector.add_resource(&pattern, is_bundle)
        });
    }

    /// Registers a generated resource: its name becomes a plain pattern and
    /// its bytes replace any earlier content under that name.
    pub fn register_resource(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let name = name.into();
        let bytes = bytes.into();
        self.store.resources.add(name.clone());
        self.forwarder.forward("register_resource", |connector| {
            connector.register_resource(&name, &mut bytes.as_slice())
        });
        self.store.resource_files.insert(name, bytes);
    }

    pub fn initialize_at_build_time<I, S>(&mut self, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initialize(InitPhase::BuildTime, InitTarget::Class, collect_names(class_names));
    }

    pub fn initialize_at_run_time<I, S>(&mut self, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initialize(InitPhase::RunTime, InitTarget::Class, collect_names(class_names));
    }

    pub fn initialize_packages_at_build_time<I, S>(&mut self, package_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initialize(
            InitPhase::BuildTime,
            InitTarget::Package,
            collect_names(package_names),
        );
    }

    pub fn initialize_packages_at_run_time<I, S>(&mut self, package_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initialize(
            InitPhase::RunTime,
            InitTarget::Package,
            collect_names(package_names),
        );
    }

    pub fn initialize_types_at_build_time(&mut self, types: &[Arc<dyn ResolvedType>]) {
        self.initialize_at_build_time(types.iter().map(|t| t.dotted_name().to_string()));
    }

    pub fn initialize_types_at_run_time(&mut self, types: &[Arc<dyn ResolvedType>]) {
        self.initialize_at_run_time(types.iter().map(|t| t.dotted_name().to_string()));
    }

    pub fn native_image_properties(&self) -> String {
        render_native_image_properties(self.store.initialization())
    }

    pub fn native_image_properties_reader(&self) -> Cursor<Vec<u8>> {
        native_image_properties_reader(self.store.initialization())
    }

    pub fn write_native_image_properties(&self, path: impl AsRef<Path>) -> PropertiesResult<()> {
        write_native_image_properties(self.store.initialization(), path)
    }

    fn classify(&self, descriptor: &ClassDescriptor) -> ClassRegistration {
        if !self.verifier.verify_type(&descriptor.name) {
            return ClassRegistration::Rejected;
        }
        if descriptor.members_specified() && !self.verifier.verify_members(descriptor) {
            return ClassRegistration::Downgraded;
        }
        ClassRegistration::Accepted
    }

    fn filter_verified<'a>(
        &self,
        bulk: &'a ReflectionDescriptor,
    ) -> Cow<'a, ReflectionDescriptor> {
        let outcomes: Vec<ClassRegistration> = bulk
            .class_descriptors()
            .map(|descriptor| self.classify(descriptor))
            .collect();
        if outcomes
            .iter()
            .all(|outcome| *outcome == ClassRegistration::Accepted)
        {
            return Cow::Borrowed(bulk);
        }

        let filtered: ReflectionDescriptor = bulk
            .class_descriptors()
            .zip(outcomes)
            .filter_map(|(descriptor, outcome)| match outcome {
                ClassRegistration::Accepted => Some(descriptor.clone()),
                ClassRegistration::Downgraded => Some(descriptor.to_minimal()),
                ClassRegistration::Rejected => None,
            })
            .collect();
        Cow::Owned(filtered)
    }

    fn initialize(&mut self, phase: InitPhase, target: InitTarget, names: Vec<String>) {
        let init = &mut self.store.initialization;
        for name in &names {
            if init.phase_conflict(phase, target, name) {
                warn!(
                    "event=init_conflict module=collector status=allowed {}={} phase={}",
                    target.as_str(),
                    name,
                    phase.as_str()
                );
            }
            init.add(phase, target, name.clone());
        }

        let operation = match (phase, target) {
            (InitPhase::BuildTime, InitTarget::Class) => "initialize_at_build_time",
            (InitPhase::RunTime, InitTarget::Class) => "initialize_at_run_time",
            (InitPhase::BuildTime, InitTarget::Package) => "initialize_packages_at_build_time",
            (InitPhase::RunTime, InitTarget::Package) => "initialize_packages_at_run_time",
        };
        self.forwarder.forward(operation, |connector| match (phase, target) {
            (InitPhase::BuildTime, InitTarget::Class) => connector.initialize_at_build_time(&names),
            (InitPhase::RunTime, InitTarget::Class) => connector.initialize_at_run_time(&names),
            (InitPhase::BuildTime, InitTarget::Package) => {
                connector.initialize_packages_at_build_time(&names)
            }
            (InitPhase::RunTime, InitTarget::Package) => {
                connector.initialize_packages_at_run_time(&names)
            }
        });
    }
}

fn collect_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
