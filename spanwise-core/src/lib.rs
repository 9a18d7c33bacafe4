//! Spanwise core library: weighted undirected graphs and the classic
//! spanning-tree, shortest-path and traversal algorithms over them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod datasource;
mod error;
mod graph;
pub mod heap;
mod mst;
mod spt;
#[cfg(test)]
pub(crate) mod test_utils;
mod traversal;

pub use crate::{
    datasource::GraphSource,
    error::{GraphError, GraphErrorCode, HeapError, HeapErrorCode, Result},
    graph::{
        Edge, Graph, GraphBuilder, GraphEdge, NO_VERTEX, Neighbour, Neighbours, Representation,
    },
    mst::{DisjointSetForest, KruskalForest, MstEdge, PrimTree, kruskal, prim},
    spt::{ShortestPathTree, UNREACHED, dijkstra},
    traversal::{VisitOrder, breadth_first, depth_first},
};
