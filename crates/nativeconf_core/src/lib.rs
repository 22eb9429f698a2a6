//! Native-image configuration collection.
//!
//! Aggregates reflection, resource, proxy and initialization registrations
//! discovered during an ahead-of-time build, verifies them against the
//! analyzed type system, and renders `native-image.properties`.

pub mod collector;
pub mod connector;
pub mod descriptor;
pub mod logging;
pub mod options;
pub mod properties;
pub mod shared;
pub mod store;
pub mod verify;

pub use collector::{ClassRegistration, ConfigurationCollector};
pub use connector::{BuildConnector, ConnectorError, ConnectorForwarder, ConnectorResult};
pub use descriptor::init::{InitPhase, InitTarget, InitializationDescriptor};
pub use descriptor::proxies::{ProxiesDescriptor, ProxyDescriptor};
pub use descriptor::reflect::{
    parse_flag, ClassDescriptor, FieldDescriptor, Flag, FlagParseError, FlagSet, MethodDescriptor,
    ReflectionDescriptor,
};
pub use descriptor::resources::ResourcesDescriptor;
pub use logging::{default_log_level, init_logging, logging_status};
pub use options::AotOptions;
pub use properties::{
    native_image_properties_reader, render_native_image_properties,
    write_native_image_properties, PropertiesError, PropertiesResult, REQUIRED_ARGS,
};
pub use shared::SharedCollector;
pub use store::DescriptorStore;
pub use verify::resolver::{ResolvedType, TypeResolver};
pub use verify::verifier::TypeVerifier;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
