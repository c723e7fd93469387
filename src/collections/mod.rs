//! The container families.
//!
//! # Purpose
//! Each family here is real data-structure engineering (explicit node wiring, capacity growth,
//! wraparound cursor arithmetic, bounds-checked random access) packaged behind a small, strongly
//! typed API. Applications compose these; the containers never call into each other.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "ring")]
pub mod ring;
