//! Error types for the algs core library.
//!
//! Each structure validates indices at its boundary and reports violations
//! through these enums. Every variant maps to a stable machine-readable code.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] and [`crate::DepthFirstSearch`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was outside `0..vertex_count`.
    #[error("vertex {vertex} is not between 0 and {vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Storage for the requested number of vertices could not be reserved.
    #[error("cannot allocate a graph with {vertex_count} vertices: {source}")]
    AllocationFailed {
        /// Requested number of vertices.
        vertex_count: usize,
        /// Reservation failure reported by the allocator.
        #[source]
        source: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was outside `0..vertex_count`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Storage for the requested vertices could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "GRAPH_ALLOCATION_FAILED",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// An element index was outside `0..len`.
    #[error("element {element} is not between 0 and {len}")]
    ElementOutOfRange {
        /// The offending element index.
        element: usize,
        /// Number of elements tracked by the set.
        len: usize,
    },
    /// Storage for the requested number of elements could not be reserved.
    #[error("cannot allocate a disjoint set with {len} elements: {source}")]
    AllocationFailed {
        /// Requested number of elements.
        len: usize,
        /// Reservation failure reported by the allocator.
        #[source]
        source: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// An element index was outside `0..len`.
        ElementOutOfRange => ElementOutOfRange { .. } => "DISJOINT_SET_ELEMENT_OUT_OF_RANGE",
        /// Storage for the requested elements could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "DISJOINT_SET_ALLOCATION_FAILED",
    }
}
