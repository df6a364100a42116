//! Branch-and-bound search for minimum-cost Hamiltonian cycles.
//!
//! Exact search over a complete directed graph. Tours are fixed to start
//! and end at location 0, which removes rotations of the same cycle from
//! the search space without losing optimality.
//!
//! One engine is shared by every traversal order; the order comes from the
//! [`Frontier`] it is given:
//!
//! - [`Strategy::Recursive`]: depth-first in recursion order ([`CallStack`])
//! - [`Strategy::BreadthFirst`]: FIFO queue ([`BreadthFirstQueue`])
//! - [`Strategy::DepthFirst`]: LIFO stack ([`DepthFirstStack`])
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem"
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"

mod bound;
mod config;
mod frontier;
mod runner;
mod types;

pub use config::{BnbConfig, BoundRule, Strategy};
pub use frontier::{
    BreadthFirstQueue, CallStack, DepthFirstStack, Expansion, Frontier, SearchNode,
};
pub use runner::{solve, BnbResult, BnbRunner};
pub use types::{FrontierState, SearchStats, ORIGIN};
