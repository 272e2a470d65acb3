//! Path search algorithms over a [`graphpath_core::Graph`].
//!
//! Every algorithm takes `(graph, start, end)` and returns a [`PathResult`]:
//!
//! - **BFS** fewest-edges path ([`bfs`])
//! - **DFS** some path, iterative ([`dfs`])
//! - **Dijkstra** non-negative weighted shortest path ([`dijkstra`])
//! - **Bellman-Ford** shortest path with negative weights ([`bellman_ford`])
//! - **A\*** heuristic search ([`astar`], [`astar_with`])
//!
//! No algorithm mutates the graph, and each call allocates its own working
//! set, so read-only searches over a shared `&Graph` may run concurrently.
//! Invalid endpoints produce `found == false`; [`try_find_path`] reports
//! them as [`GraphError`](graphpath_core::GraphError) instead.
//!
//! | Heuristic | Requires coordinates |
//! |---|---|
//! | [`HeuristicKind::Zero`] | no |
//! | [`HeuristicKind::Euclidean`] | yes, falls back to zero |
//! | [`HeuristicKind::Manhattan`] | yes, falls back to zero |

mod astar;
mod bellman_ford;
mod bfs;
mod dfs;
mod dijkstra;
pub mod distance;
mod node;
pub mod report;
mod result;
mod select;
mod traits;

pub use astar::{astar, astar_euclidean, astar_manhattan, astar_with, astar_zero};
pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use report::{Comparison, Report};
pub use result::{AlgorithmKind, PathResult, UnknownAlgorithm};
pub use select::{find_path, find_paths, select_algorithms, try_find_path};
pub use traits::{Heuristic, HeuristicKind};
