//! Random graph generation.

use graphpath_core::{Graph, GraphError};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Parameters for [`random_graph`].
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub vertices: usize,
    pub edges: usize,
    pub weighted: bool,
    pub directed: bool,
    /// Upper bound for weights drawn without coordinates.
    pub max_weight: f64,
    /// Place vertices in a 100x100 square. Weighted edges then cost at least
    /// their Euclidean length, which keeps both A* heuristics admissible.
    pub coords: bool,
    /// RNG seed; a random one is drawn (and logged) when `None`.
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            edges: 20,
            weighted: true,
            directed: false,
            max_weight: 10.0,
            coords: false,
            seed: None,
        }
    }
}

/// Side of the square vertices are placed in.
const FIELD: f64 = 100.0;

/// Build a random graph. Endpoints are drawn uniformly, so self-loops and
/// parallel edges may occur.
pub fn random_graph(cfg: &RandomGraphConfig) -> Result<Graph, GraphError> {
    if !cfg.max_weight.is_finite() {
        return Err(GraphError::InvalidArgument(format!(
            "maximum weight must be finite, got {}",
            cfg.max_weight
        )));
    }
    let seed = cfg.seed.unwrap_or_else(rand::random);
    log::info!("generating random graph with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut graph = Graph::new(cfg.vertices, cfg.weighted, cfg.directed)?;
    if cfg.coords {
        for v in 0..cfg.vertices {
            let x = round_up(rng.random_range(0.0..FIELD));
            let y = round_up(rng.random_range(0.0..FIELD));
            graph.set_coordinates(v, x, y)?;
        }
    }

    let max_weight = cfg.max_weight.max(1.0);
    for _ in 0..cfg.edges {
        let u = rng.random_range(0..cfg.vertices);
        let v = rng.random_range(0..cfg.vertices);
        let weight = if cfg.coords {
            // Manhattan is the larger metric, so this bound also covers Euclidean.
            round_up(graph.manhattan_distance(u, v) * rng.random_range(1.0..1.5))
        } else {
            round_up(rng.random_range(1.0..=max_weight))
        };
        graph.add_edge(u, v, weight)?;
    }
    Ok(graph)
}

/// Round up to one decimal place.
fn round_up(x: f64) -> f64 {
    (x * 10.0).ceil() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_shape() {
        let cfg = RandomGraphConfig {
            vertices: 12,
            edges: 30,
            weighted: false,
            directed: true,
            seed: Some(7),
            ..Default::default()
        };
        let g = random_graph(&cfg).unwrap();
        assert_eq!(g.num_vertices(), 12);
        assert_eq!(g.num_edges(), 30);
        assert!(!g.has_coordinates());
        assert!(g.logical_edges().all(|(_, e)| e.weight == 1.0));
    }

    #[test]
    fn same_seed_same_graph() {
        let cfg = RandomGraphConfig {
            seed: Some(42),
            coords: true,
            ..Default::default()
        };
        let a = random_graph(&cfg).unwrap();
        let b = random_graph(&cfg).unwrap();
        let ea: Vec<_> = a.logical_edges().collect();
        let eb: Vec<_> = b.logical_edges().collect();
        assert_eq!(ea, eb);
        assert_eq!(a.coordinates(3), b.coordinates(3));
    }

    #[test]
    fn coordinate_weights_dominate_manhattan() {
        let cfg = RandomGraphConfig {
            vertices: 15,
            edges: 50,
            coords: true,
            seed: Some(3),
            ..Default::default()
        };
        let g = random_graph(&cfg).unwrap();
        for (u, e) in g.logical_edges() {
            assert!(e.weight + 1e-9 >= g.manhattan_distance(u, e.dest));
        }
    }

    #[test]
    fn non_finite_max_weight_is_rejected() {
        for max_weight in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let cfg = RandomGraphConfig {
                max_weight,
                seed: Some(1),
                ..Default::default()
            };
            assert!(matches!(random_graph(&cfg), Err(GraphError::InvalidArgument(_))));
        }
    }

    #[test]
    fn zero_vertices_is_rejected() {
        let cfg = RandomGraphConfig {
            vertices: 0,
            ..Default::default()
        };
        assert!(matches!(random_graph(&cfg), Err(GraphError::InvalidArgument(_))));
    }
}
