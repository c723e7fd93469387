//! Foundational container types intended for reuse across applications.
//!
//! # Purpose
//! This crate collects the data structures that the rest of our projects keep needing and that
//! deserve to be engineered once, properly: a pair of growable ring-buffer-backed containers
//! ([`Stack`](collections::ring::Stack) and [`Queue`](collections::ring::Queue)), a
//! sentinel-terminated [`DoublyLinkedList`](collections::linked::DoublyLinkedList) and an
//! unbalanced [`BinarySearchTree`](collections::binary_tree::BinarySearchTree). Anything that is
//! mere glue over these (math helpers, UI widgets, state machines) belongs in the application
//! that needs it, not here.
//!
//! # Method
//! Every container owns its storage exclusively and is mutated only through its own operations.
//! None of them are thread-safe, by design: adding internal locking would change their
//! performance characteristics without anyone having asked for it, so sharing a container across
//! threads is the caller's synchronization problem.
//!
//! # Error Handling
//! Operations where emptiness is an ordinary outcome (popping, dequeuing, querying an extremum)
//! return [`Option`]. Each of those also has a `checked_` sibling returning a strongly typed
//! [`Result`] for callers that want a fail-fast error value, and an `_or_default` sibling that
//! reproduces the classic "empty yields the zero value" contract some of our older code relies
//! on. Index errors are typed too: the panicking indexers panic with the message of the same
//! [`IndexOutOfBounds`](collections::linked::IndexOutOfBounds) value that the `try_` variants
//! return.
//!
//! Errors are enums and structs with static dispatch, never boxed trait objects, and every error
//! condition is raised at the offending call before any state is mutated.
//!
//! # Dependencies
//! Only some derive macros for the repetitive parts of error types. The containers themselves
//! are written against `std` alone.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
