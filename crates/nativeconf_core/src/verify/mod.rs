//! Type verification against an external type resolver.

pub mod resolver;
pub mod verifier;
