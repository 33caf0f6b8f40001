//! Property-based tests for the spanning tree engines.
//!
//! Exhaustive search acts as the oracle: on small generated graphs Kruskal
//! and Prim must match its total weight, every engine must honour the
//! forest invariants, and redundancy selection must stay disjoint from the
//! tree it augments. Tree weight must also respond monotonically to weight
//! increases.

mod equivalence;
mod monotonicity;
mod oracle;
mod redundancy;
mod strategies;
mod structural;
mod types;
