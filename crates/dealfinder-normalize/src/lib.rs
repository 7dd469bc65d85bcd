//! # dealfinder-normalize
//!
//! Turns raw provider payloads into a structured, numbered Deal set with
//! extracted attributes. Numbering is sequential from 1 in provider order.
//! A batch that cannot be parsed at all degrades to exactly one fallback
//! deal carrying the raw text; the batch never fails.

pub mod extract;
mod normalizer;

pub use normalizer::Normalizer;
