//! Dynamic-proxy descriptors.

use serde::{Deserialize, Serialize};

/// Interface list for one dynamic proxy. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyDescriptor {
    interfaces: Vec<String>,
}

impl ProxyDescriptor {
    pub fn new<I, S>(interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interfaces: interfaces.into_iter().map(Into::into).collect(),
        }
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }
}

/// Ordered collection of proxy registrations, unique by interface list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxiesDescriptor {
    proxies: Vec<ProxyDescriptor>,
}

impl ProxiesDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `proxy` unless an identical interface list is present.
    pub fn add(&mut self, proxy: ProxyDescriptor) -> bool {
        if self.proxies.contains(&proxy) {
            return false;
        }
        self.proxies.push(proxy);
        true
    }

    pub fn merge(&mut self, other: &ProxiesDescriptor) {
        for proxy in &other.proxies {
            self.add(proxy.clone());
        }
    }

    pub fn proxies(&self) -> &[ProxyDescriptor] {
        &self.proxies
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}
