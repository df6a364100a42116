//! Frontier containers for pending partial tours.
//!
//! The engine only talks to the [`Frontier`] trait. The three containers
//! differ in pop order and in when children are generated:
//!
//! | Container             | Pop order | Children generated       |
//! |-----------------------|-----------|--------------------------|
//! | [`CallStack`]         | LIFO      | one at a time, on demand |
//! | [`DepthFirstStack`]   | LIFO      | all at once on expansion |
//! | [`BreadthFirstQueue`] | FIFO      | all at once on expansion |

use super::types::FrontierState;
use std::collections::VecDeque;

/// When the engine generates the children of an expanded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Every child is bounded and inserted as soon as its parent is expanded.
    Eager,
    /// One child at a time: the parent is pushed back with its cursor
    /// advanced, followed by the child, so the next sibling is only
    /// considered after the child's subtree is done.
    Deferred,
}

/// A frontier entry: a state plus the index of the next child to consider.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: FrontierState,
    pub(crate) next_child: usize,
}

impl SearchNode {
    pub fn new(state: FrontierState) -> Self {
        Self {
            state,
            next_child: 0,
        }
    }

    /// Whether the node is being visited for the first time.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.next_child == 0
    }
}

/// Ordered container of pending search nodes.
pub trait Frontier {
    /// Child generation policy.
    const EXPANSION: Expansion;

    fn push(&mut self, node: SearchNode);

    fn pop(&mut self) -> Option<SearchNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Explicit stand-in for the call stack of a recursive search.
///
/// Frames are resumed through their child cursor, which visits children
/// in the same order and against the same incumbent as native recursion.
#[derive(Debug, Default)]
pub struct CallStack {
    frames: Vec<SearchNode>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for CallStack {
    const EXPANSION: Expansion = Expansion::Deferred;

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.frames.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.frames.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.frames.len()
    }
}

/// LIFO stack; holds at most about `n^2 / 2` states.
///
/// Unlike [`CallStack`], which keeps one frame per level (at most `n`),
/// expanding a state pushes all of its surviving children at once, so
/// every level on the current branch can hold its pending siblings.
#[derive(Debug, Default)]
pub struct DepthFirstStack {
    stack: Vec<SearchNode>,
}

impl DepthFirstStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for DepthFirstStack {
    const EXPANSION: Expansion = Expansion::Eager;

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.stack.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// FIFO queue; may hold a whole level of the search tree.
#[derive(Debug, Default)]
pub struct BreadthFirstQueue {
    queue: VecDeque<SearchNode>,
}

impl BreadthFirstQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for BreadthFirstQueue {
    const EXPANSION: Expansion = Expansion::Eager;

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}
