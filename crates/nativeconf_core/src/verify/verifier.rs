//! Verification policy over a `TypeResolver`.
//!
//! # Invariants
//! - Verification never fails hard: every outcome is a boolean.
//! - With `debug_verify` set, each failed check emits exactly one `debug!`
//!   line; otherwise failures are silent.

use crate::descriptor::reflect::ClassDescriptor;
use crate::verify::resolver::{ResolvedType, TypeResolver};
use log::debug;
use std::sync::Arc;

/// Checks named types and member lists through an injected resolver.
#[derive(Clone)]
pub struct TypeVerifier {
    resolver: Arc<dyn TypeResolver>,
    debug_verify: bool,
}

impl TypeVerifier {
    pub fn new(resolver: Arc<dyn TypeResolver>, debug_verify: bool) -> Self {
        Self {
            resolver,
            debug_verify,
        }
    }

    /// Whether `name` resolves and passes the type-level check.
    pub fn verify_type(&self, name: &str) -> bool {
        match self.resolve_for("verify_type", name) {
            Some(resolved) => {
                let ok = resolved.verify_type(self.debug_verify);
                if !ok && self.debug_verify {
                    debug!("event=verify_type module=verify status=invalid type={name}");
                }
                ok
            }
            None => false,
        }
    }

    /// Whether the descriptor's type resolves and its members verify.
    pub fn verify_members(&self, descriptor: &ClassDescriptor) -> bool {
        match self.resolve_for("verify_members", descriptor.name.as_str()) {
            Some(resolved) => {
                let ok = resolved.verify_members(descriptor, self.debug_verify);
                if !ok && self.debug_verify {
                    debug!(
                        "event=verify_members module=verify status=invalid type={} methods={} fields={}",
                        descriptor.name,
                        descriptor.methods.len(),
                        descriptor.fields.len()
                    );
                }
                ok
            }
            None => false,
        }
    }

    /// Resolves every name and applies `predicate`; stops at the first failure.
    ///
    /// The predicate sees `None` for names that do not resolve.
    pub fn check_types<S, P>(&self, names: &[S], predicate: P) -> bool
    where
        S: AsRef<str>,
        P: Fn(Option<&dyn ResolvedType>) -> bool,
    {
        names.iter().all(|name| {
            let resolved = self.resolver.resolve(name.as_ref());
            let ok = predicate(resolved.as_deref());
            if !ok && self.debug_verify {
                debug!(
                    "event=check_types module=verify status=rejected type={} resolved={}",
                    name.as_ref(),
                    resolved.is_some()
                );
            }
            ok
        })
    }

    fn resolve_for(&self, event: &'static str, name: &str) -> Option<Arc<dyn ResolvedType>> {
        let resolved = self.resolver.resolve(name);
        if resolved.is_none() && self.debug_verify {
            debug!("event={event} module=verify status=missing type={name}");
        }
        resolved
    }
}
