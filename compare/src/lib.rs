//! Compatibility scoring between the81 quiz results.
//!
//! This crate walks two packed preference buffers item by item, accumulates
//! match statistics, and derives a bounded 0-100 compatibility score with
//! categorical flavor text. It consumes decoded [`QuizResult`]s and the
//! externally supplied item labels; it performs no decoding of tokens and
//! no I/O.
//!
//! # Design Principles
//!
//! - **Deterministic** - The same two results always score identically.
//! - **No failure modes** - Well-formed inputs cannot make comparison fail;
//!   short buffers and missing labels degrade instead of erroring.
//! - **Stateless** - Every comparison is recomputed from its inputs.

mod score;

pub use score::{compare_results, flavor_text, BigDisagree, Comparison, Feeling, PerfectMatch};
