//! File format implementations

pub mod locres;

pub use locres::{LocresDocument, LocresEntry, LocresNamespace, LocresVersion};
