#![forbid(unsafe_code)]
//! lopir-lops: the physical operator (Lop) graph.
//!
//! - `graph`: arena of nodes with symmetric input/consumer wiring.
//! - `kind`: the closed operator-variant vocabulary, its static scheduling
//!   hints, and per-kind property resolution.
//! - `emit`: instruction-text assembly shared by all variants.
//! - One module per variant with its builder, arity rules, and emission arm.
//!
//! Construction is single-writer; a finished graph is read-only and its
//! emission entry points are pure, so they may be called concurrently.

pub mod aggregate;
pub mod central_moment;
pub mod covariance;
pub mod data;
pub mod emit;
pub mod graph;
pub mod kind;
pub mod reblock;

pub use emit::OperandRef;
pub use graph::{Lop, LopGraph, OutputParameters};
pub use kind::{resolve_properties, AggOp, LopKind};
