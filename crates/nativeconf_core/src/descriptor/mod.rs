//! Native-image configuration descriptors.
//!
//! # Responsibility
//! - Model the four accumulated descriptor kinds: reflection, resources,
//!   proxies and initialization.
//! - Provide union-style merge helpers that only ever add entries.
//!
//! # Invariants
//! - Merging a descriptor into itself (or twice into a target) is a no-op.
//! - Set-valued collections keep first-insertion order.

pub mod init;
pub mod proxies;
pub mod reflect;
pub mod resources;
