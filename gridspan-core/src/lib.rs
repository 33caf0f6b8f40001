//! Gridspan core library.
//!
//! Computes minimum spanning trees over weighted undirected grid graphs and
//! augments them with redundant links for fault tolerance.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "generator")]
mod generator;
mod graph;
mod mst;
mod planner;
mod redundancy;
#[cfg(test)]
pub(crate) mod test_utils;
mod union_find;
mod validate;
mod weight;

#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
pub use crate::generator::{GeneratorConfig, generate_graph};
pub use crate::{
    error::{
        GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, GridError, GridErrorCode,
        InvalidWeight, InvertedWeightRange, MstError, MstErrorCode, Result,
    },
    graph::{Adjacency, Edge, Graph, NodeId, Weight, WeightSum},
    mst::{
        DEFAULT_EXHAUSTIVE_EDGE_LIMIT, ExhaustiveSearch, Kruskal, MAX_EXHAUSTIVE_EDGE_LIMIT,
        MstEngine, MstStrategy, ParseStrategyError, Prim, SpanningTree, exhaustive_mst,
        is_spanning_tree, kruskal_mst, prim_mst,
    },
    planner::{GridPlan, GridPlanner, GridPlannerBuilder},
    redundancy::add_redundancy,
    union_find::DisjointSet,
    validate::{WeightRange, validate_weights},
    weight::total_weight,
};
