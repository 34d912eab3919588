// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while assembling or validating a tree.

use core::fmt;

/// The two kinds of children a [`Node`](crate::Node) can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChildKind {
    /// Child nodes (internal node).
    Node,
    /// Child edges (leaf).
    Edge,
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Edge => f.write_str("edge"),
        }
    }
}

/// Errors from tree insertion, building, and [`Node::check_invariants`](crate::Node::check_invariants).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// A child of one kind was added to a node already holding the other kind.
    #[error("cannot add a {found} child to a node holding {held} children")]
    MixedChildren {
        /// Kind the node already holds.
        held: ChildKind,
        /// Kind that was rejected.
        found: ChildKind,
    },
    /// A node without children was found in the tree.
    #[error("empty node at depth {depth}")]
    EmptyNode {
        /// Depth of the offending node (root is 0).
        depth: usize,
    },
    /// A node's box does not enclose one of its children.
    #[error("node box does not enclose its {kind} child at depth {depth}")]
    BoxDoesNotEnclose {
        /// Depth of the offending node (root is 0).
        depth: usize,
        /// Kind of the child that sticks out.
        kind: ChildKind,
    },
    /// A node's `h_min` is larger than a heuristic cost below it.
    #[error("h_min {h_min} exceeds descendant heuristic cost {h} at depth {depth}")]
    InvalidHeuristicBound {
        /// Depth of the offending node (root is 0).
        depth: usize,
        /// The node's bound.
        h_min: f64,
        /// The smaller descendant cost.
        h: f64,
    },
    /// A tree was requested from an empty edge set.
    #[error("cannot build a tree without edges")]
    NoEdges,
}
