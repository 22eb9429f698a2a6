//! Optional live build connector.
//!
//! # Responsibility
//! - Define the notification contract mirrored into a running build engine.
//! - Concentrate the presence check and failure logging in one place.
//!
//! # Invariants
//! - Only accepted registrations are forwarded.
//! - A connector failure never rolls back the in-memory merge and is not
//!   returned to the registration caller; it is logged at `warn`.

use crate::descriptor::reflect::{ClassDescriptor, ReflectionDescriptor};
use crate::descriptor::resources::ResourcesDescriptor;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::sync::Arc;

pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Failure reported by a build connector.
#[derive(Debug)]
pub enum ConnectorError {
    /// The build engine is not reachable any more.
    Disconnected,
    /// The build engine refused the notification.
    Rejected(String),
    Io(std::io::Error),
}

impl Display for ConnectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "build connector is disconnected"),
            Self::Rejected(message) => write!(f, "build connector rejected notification: {message}"),
            Self::Io(err) => write!(f, "build connector i/o failure: {err}"),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Disconnected | Self::Rejected(_) => None,
        }
    }
}

impl From<std::io::Error> for ConnectorError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Notification contract for a live build engine.
///
/// One method per collector registration operation, called with the
/// accepted arguments.
pub trait BuildConnector: Send + Sync {
    fn add_class_descriptor(&self, descriptor: &ClassDescriptor) -> ConnectorResult<()>;

    fn add_reflection_descriptor(&self, descriptor: &ReflectionDescriptor) -> ConnectorResult<()>;

    fn add_proxy(&self, interface_names: &[String]) -> ConnectorResult<()>;

    fn add_resources_descriptor(&self, descriptor: &ResourcesDescriptor) -> ConnectorResult<()>;

    fn add_resource(&self, pattern: &str, is_bundle: bool) -> ConnectorResult<()>;

    /// `content` reads exactly the bytes the collector stored for `name`.
    fn register_resource(&self, name: &str, content: &mut dyn Read) -> ConnectorResult<()>;

    fn initialize_at_build_time(&self, class_names: &[String]) -> ConnectorResult<()>;

    fn initialize_at_run_time(&self, class_names: &[String]) -> ConnectorResult<()>;

    fn initialize_packages_at_build_time(&self, package_names: &[String]) -> ConnectorResult<()>;

    fn initialize_packages_at_run_time(&self, package_names: &[String]) -> ConnectorResult<()>;
}

/// Single forwarding point for an optional connector.
#[derive(Clone, Default)]
pub struct ConnectorForwarder {
    connector: Option<Arc<dyn BuildConnector>>,
}

impl ConnectorForwarder {
    pub fn is_attached(&self) -> bool {
        self.connector.is_some()
    }

    pub fn attach(&mut self, connector: Arc<dyn BuildConnector>) {
        self.connector = Some(connector);
    }

    pub fn detach(&mut self) -> Option<Arc<dyn BuildConnector>> {
        self.connector.take()
    }

    /// Runs one notification when a connector is attached.
    pub fn forward<F>(&self, operation: &'static str, notify: F)
    where
        F: FnOnce(&dyn BuildConnector) -> ConnectorResult<()>,
    {
        let Some(connector) = self.connector.as_deref() else {
            return;
        };
        if let Err(err) = notify(connector) {
            warn!("event=connector_forward module=connector status=error operation={operation} error={err}");
        }
    }
}
