//! Exact branch-and-bound search for the travelling salesman problem.
//!
//! Finds a minimum-cost Hamiltonian cycle over a complete, directed,
//! weighted graph given as a cost matrix.
//!
//! - **Matrix**: validated, immutable cost matrices with a plain-text
//!   format and seeded random instances.
//! - **Branch-and-bound**: one engine, three interchangeable traversal
//!   orders (recursive depth-first, breadth-first queue, depth-first
//!   stack), pruning against the incumbent with an admissible lower bound.
//! - **Harness**: repeated, timed runs driven by a plan file, with results
//!   appended to a CSV report.
//!
//! # Example
//!
//! ```
//! use u_bnb::bnb::Strategy;
//! use u_bnb::matrix::CostMatrix;
//!
//! let m: CostMatrix = "4\n0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0\n"
//!     .parse()
//!     .unwrap();
//! let (cost, path) = u_bnb::solve(4, &m, Strategy::Recursive).unwrap();
//! assert_eq!(cost, 80);
//! assert_eq!(path, vec![0, 1, 3, 2]);
//! ```

pub mod bnb;
pub mod error;
pub mod harness;
pub mod matrix;

pub use bnb::solve;
pub use error::{TspError, TspResult};
