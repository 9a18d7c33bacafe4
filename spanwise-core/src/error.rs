//! Error types for the spanwise core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by misuse of an [`crate::heap::IndexedMinHeap`].
///
/// Every variant is a precondition violation on the caller's side; the
/// algorithms in this crate never trigger them on valid graphs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The heap already holds `capacity` vertices.
    #[error("heap is full (capacity {capacity})")]
    Full {
        /// Maximum number of vertices the heap can hold.
        capacity: usize,
    },
    /// `extract_min` was called on an empty heap.
    #[error("heap is empty")]
    Empty,
    /// The vertex id lies outside `1..=capacity`.
    #[error("vertex {vertex} is outside the heap range 1..={capacity}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Maximum vertex id the heap tracks.
        capacity: usize,
    },
    /// The vertex is already queued.
    #[error("vertex {vertex} is already queued")]
    AlreadyQueued {
        /// The vertex inserted twice.
        vertex: usize,
    },
    /// The vertex is not currently queued.
    #[error("vertex {vertex} is not queued")]
    NotQueued {
        /// The vertex whose key was to be decreased.
        vertex: usize,
    },
    /// `decrease_key` was asked to raise a priority.
    #[error("cannot raise priority of vertex {vertex} from {current} to {requested}")]
    PriorityIncrease {
        /// The vertex whose key was to be decreased.
        vertex: usize,
        /// Priority currently stored for the vertex.
        current: u64,
        /// Larger priority supplied by the caller.
        requested: u64,
    },
    /// A structural invariant of the heap does not hold.
    #[error("heap invariant violated at position {position}: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// Heap position at which the violation was observed.
        position: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The heap already holds `capacity` vertices.
        Full => Full { .. } => "HEAP_FULL",
        /// `extract_min` was called on an empty heap.
        Empty => Empty => "HEAP_EMPTY",
        /// The vertex id lies outside the heap range.
        VertexOutOfRange => VertexOutOfRange { .. } => "HEAP_VERTEX_OUT_OF_RANGE",
        /// The vertex is already queued.
        AlreadyQueued => AlreadyQueued { .. } => "HEAP_ALREADY_QUEUED",
        /// The vertex is not currently queued.
        NotQueued => NotQueued { .. } => "HEAP_NOT_QUEUED",
        /// `decrease_key` was asked to raise a priority.
        PriorityIncrease => PriorityIncrease { .. } => "HEAP_PRIORITY_INCREASE",
        /// A structural invariant of the heap does not hold.
        InvariantViolation => InvariantViolation { .. } => "HEAP_INVARIANT_VIOLATION",
    }
}

/// Error type produced when building graphs or running algorithms over them.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge endpoint lies outside `1..=vertex_count`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex at both ends of the edge.
        vertex: usize,
    },
    /// An edge carries a negative weight.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// The same pair of vertices is joined by more than one edge.
    #[error("edge ({left}, {right}) appears more than once")]
    ParallelEdge {
        /// Smaller endpoint of the repeated pair.
        left: usize,
        /// Larger endpoint of the repeated pair.
        right: usize,
    },
    /// An algorithm was started from a vertex outside `1..=vertex_count`.
    #[error("start vertex {start} is outside 1..={vertex_count}")]
    StartOutOfRange {
        /// The requested start vertex.
        start: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The adjacency storage for `vertex_count` vertices cannot be allocated.
    #[error("graph with {vertex_count} vertices is too large to store as {representation}")]
    TooLarge {
        /// The requested number of vertices.
        vertex_count: usize,
        /// Short name of the requested representation.
        representation: &'static str,
    },
    /// The indexed heap rejected an operation.
    #[error(transparent)]
    Heap(#[from] HeapError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge endpoint lies outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge connects a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge carries a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// The same pair of vertices is joined by more than one edge.
        ParallelEdge => ParallelEdge { .. } => "GRAPH_PARALLEL_EDGE",
        /// An algorithm was started from a vertex outside the vertex range.
        StartOutOfRange => StartOutOfRange { .. } => "GRAPH_START_OUT_OF_RANGE",
        /// The adjacency storage could not be allocated.
        TooLarge => TooLarge { .. } => "GRAPH_TOO_LARGE",
        /// The indexed heap rejected an operation.
        HeapFailure => Heap(..) => "GRAPH_HEAP_FAILURE",
    }
}

impl GraphError {
    /// Retrieve the inner [`HeapErrorCode`] when the error originated in the heap.
    #[must_use]
    pub const fn heap_code(&self) -> Option<HeapErrorCode> {
        match self {
            Self::Heap(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Returns `true` for the "invalid edge" family: self-loops, negative
    /// weights and parallel edges.
    #[must_use]
    pub const fn is_invalid_edge(&self) -> bool {
        matches!(
            self,
            Self::SelfLoop { .. } | Self::NegativeWeight { .. } | Self::ParallelEdge { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
