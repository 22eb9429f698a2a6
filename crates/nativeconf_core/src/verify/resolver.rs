//! Type resolver boundary contract.
//!
//! The resolver is an injected capability: implementations wrap whatever
//! type system the build front end has loaded. Core never looks types up
//! through global state.

use crate::descriptor::reflect::ClassDescriptor;
use std::sync::Arc;

/// One type resolved from the analyzed program.
pub trait ResolvedType: Send + Sync {
    /// Dotted fully-qualified name, e.g. `java.util.Map$Entry`.
    fn dotted_name(&self) -> &str;

    fn is_interface(&self) -> bool;

    /// Type-level validity: the type and its hierarchy are loadable.
    ///
    /// `debug` asks the implementation to log why verification failed.
    fn verify_type(&self, debug: bool) -> bool;

    /// Member-level validity of the methods/fields `descriptor` declares.
    fn verify_members(&self, descriptor: &ClassDescriptor, debug: bool) -> bool;
}

/// Resolves dotted type names. An absent type is a normal outcome.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, dotted_name: &str) -> Option<Arc<dyn ResolvedType>>;
}
