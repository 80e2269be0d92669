//! FIRST set computation for context-free grammars, as used by
//! LR-family parser table generators to decide which tokens can begin a
//! derivation from each rule, and which rules derive the empty string.
//!
//! The computation consumes a narrow [`GrammarView`] surface, so any
//! front end that can number its rules and tokens densely can plug in.
//! The resulting [`FirstSets`] table is immutable and answers point
//! queries in constant time.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

pub mod first;
pub mod grammar;
pub mod symbol;

pub use crate::first::{FirstSet, FirstSets};
pub use crate::grammar::{Grammar, GrammarView, Production, RuleBuilder};
pub use crate::symbol::{RuleIdx, Symbol, TokenIdx};
