#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Facade transformation engine.
//!
//! Turns resolved declaration descriptors into declaration ASTs for
//! JS-friendly facade source:
//! - `descriptor` - normalized declaration model handed in by discovery
//! - `mapping` - the type mapping registry (exact rules before predicate
//!   rules, first match wins)
//! - `generics` - instantiation of generic declarations against explicit
//!   type arguments
//! - `transform` - one transformer per declaration kind
//! - `diagnostics` - per-declaration error reporting
//! - `exporter` - the entry points, with configuration threaded through
//!
//! The engine is a pure, synchronous transformation: it performs no I/O and
//! shares no mutable state between invocations. A failure is local to one
//! declaration: it becomes a diagnostic and a skip, never an abort of the
//! whole run.

mod builtin;
pub mod descriptor;
pub mod diagnostics;
pub mod exporter;
pub mod generics;
pub mod mapping;
pub mod transform;

#[cfg(test)]
mod exporter_tests;

pub use descriptor::Descriptor;
pub use diagnostics::{DiagnosticKind, Diagnostics, Severity, SourceLocation};
pub use exporter::{ExportConfig, Exporter};
pub use mapping::{MappingRule, TypeRegistry};

/// Caller errors. Anything local to a declaration is a diagnostic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An instantiation request whose argument count does not match the
    /// declaration. Fatal for that request only.
    #[error(
        "{declaration} declares {expected} generic parameter(s) but {supplied} type argument(s) were supplied"
    )]
    GenericArityMismatch {
        declaration: String,
        expected: usize,
        supplied: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
