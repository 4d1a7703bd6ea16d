//! Binary relations over `{1..n}` stored as dense boolean matrices.
//!
//! The central type is [`Relation`], which supports the usual set algebra
//! (union, intersection, difference, composition, ...) between relations of
//! possibly different sizes, and checks for structural properties such as
//! reflexivity or transitivity. On top of it are
//! - three transitive closure algorithms in [`closure`], which must always
//!   agree,
//! - [`dominance::reduce_to_covering`], which strips an order down to its
//!   covering pairs,
//! - [`topological::levels`], which splits an order into levels,
//! - and the smaller consumers [`partition`], [`graph`] and [`generators`].
//!
//! Example usage:
//! ```
//! use relations::{closure, Relation};
//!
//! let r = Relation::from_pairs([(1, 2), (2, 3)]).unwrap();
//! let closed = closure::transitive_closure(&r);
//! assert_eq!(closed.to_string(), "{(1,2)(1,3)(2,3)}");
//! assert!(closed.is_transitive());
//! ```

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod closure;
pub mod dominance;
pub mod error;
pub mod generators;
pub mod graph;
pub mod partition;
mod relation;
pub mod topological;

pub use error::{RelationError, Result};
pub use relation::Relation;
