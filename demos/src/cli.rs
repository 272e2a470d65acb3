//! Command-line arguments and command handlers for the `graphpath` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use graphpath_core::{Graph, VertexId, io};
use graphpath_paths::{AlgorithmKind, Report, UnknownAlgorithm, find_paths, select_algorithms};

use crate::generate::{RandomGraphConfig, random_graph};

#[derive(Parser, Debug)]
#[command(name = "graphpath", version, about = "Shortest-path search over graph files")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Silence all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a graph file and print statistics
    Run {
        /// Graph file in text format
        file: PathBuf,
        #[arg(short, long, default_value_t = 0)]
        start: VertexId,
        #[arg(short, long)]
        end: VertexId,
        /// `auto`, `all`, or one algorithm name (e.g. `dijkstra`, `astar-zero`)
        #[arg(short, long, default_value = "auto")]
        algorithm: AlgorithmChoice,
        /// Print results as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Print a graph file's adjacency lists
    Show {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Generate a random graph in text format
    Random {
        #[arg(short = 'n', long, default_value_t = 10)]
        vertices: usize,
        #[arg(short = 'm', long, default_value_t = 20)]
        edges: usize,
        #[arg(long)]
        weighted: bool,
        #[arg(long)]
        directed: bool,
        #[arg(long, default_value_t = 10.0)]
        max_weight: f64,
        /// Place vertices on a plane and derive weights from distances
        #[arg(long)]
        coords: bool,
        #[arg(long, env = "GRAPHPATH_SEED")]
        seed: Option<u64>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Which algorithms `run` executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmChoice {
    /// Chosen from the graph's weightedness.
    Auto,
    All,
    One(AlgorithmKind),
}

impl AlgorithmChoice {
    pub fn resolve(self, graph: &Graph) -> Vec<AlgorithmKind> {
        match self {
            Self::Auto => select_algorithms(graph),
            Self::All => AlgorithmKind::ALL.to_vec(),
            Self::One(kind) => vec![kind],
        }
    }
}

impl FromStr for AlgorithmChoice {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "all" => Ok(Self::All),
            _ => s.parse().map(Self::One),
        }
    }
}

/// Execute `cli.command`, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Run {
            file,
            start,
            end,
            algorithm,
            json,
        } => {
            let graph = load(&file)?;
            for v in [start, end] {
                if !graph.is_valid_vertex(v) {
                    bail!(
                        "vertex {v} out of range: {} has {} vertices",
                        file.display(),
                        graph.num_vertices()
                    );
                }
            }
            let kinds = algorithm.resolve(&graph);
            log::info!("running {} algorithm(s) from {start} to {end}", kinds.len());
            let results = find_paths(&graph, &kinds, start, end);
            if json {
                serde_json::to_writer_pretty(&mut *out, &results)?;
                writeln!(out)?;
            } else {
                let report = Report {
                    graph: &graph,
                    start,
                    end,
                    results: &results,
                };
                write!(out, "{report}")?;
            }
        }
        Command::Show { file, json } => {
            let graph = load(&file)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &graph)?;
                writeln!(out)?;
            } else {
                write!(out, "{graph}")?;
            }
        }
        Command::Random {
            vertices,
            edges,
            weighted,
            directed,
            max_weight,
            coords,
            seed,
            out: path,
        } => {
            let cfg = RandomGraphConfig {
                vertices,
                edges,
                weighted,
                directed,
                max_weight,
                coords,
                seed,
            };
            let graph = random_graph(&cfg).context("cannot generate graph")?;
            match path {
                Some(path) => {
                    io::save(&graph, &path)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => io::write_graph(&graph, &mut *out)?,
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Graph> {
    let graph = io::load(path).with_context(|| format!("cannot load {}", path.display()))?;
    log::debug!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("graphpath").chain(args.iter().copied())).unwrap()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("graphpath-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn algorithm_choice_parses() {
        assert_eq!("auto".parse::<AlgorithmChoice>().unwrap(), AlgorithmChoice::Auto);
        assert_eq!("ALL".parse::<AlgorithmChoice>().unwrap(), AlgorithmChoice::All);
        assert_eq!(
            "bellman-ford".parse::<AlgorithmChoice>().unwrap(),
            AlgorithmChoice::One(AlgorithmKind::BellmanFord)
        );
        assert!("floyd".parse::<AlgorithmChoice>().is_err());
    }

    #[test]
    fn run_arguments() {
        let cli = parse(&["-vv", "run", "g.txt", "-s", "1", "-e", "3", "-a", "dijkstra"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run {
                start,
                end,
                algorithm,
                json,
                ..
            } => {
                assert_eq!((start, end), (1, 3));
                assert_eq!(algorithm, AlgorithmChoice::One(AlgorithmKind::Dijkstra));
                assert!(!json);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Cli::try_parse_from(["graphpath", "run", "g.txt"]).is_err());
        assert!(Cli::try_parse_from(["graphpath", "-q", "-v", "show", "g.txt"]).is_err());
    }

    #[test]
    fn run_prints_report() {
        let path = temp_file("report.txt", "4 5 1 1\n0 1 4\n0 2 1\n2 1 2\n1 3 1\n2 3 5\n");
        let cli = parse(&["run", path.to_str().unwrap(), "-e", "3"]);
        let mut out = Vec::new();
        run(cli, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(out.contains("  Algorithm: Dijkstra\n"));
        assert!(out.contains("  Path: 0 -> 2 -> 1 -> 3\n"));
        assert!(out.contains("  Total weight: 4.0\n"));
        assert!(out.contains("Shortest path found by: Dijkstra (weight: 4.0)"));
    }

    #[test]
    fn run_rejects_bad_endpoint() {
        let path = temp_file("range.txt", "2 1 0 0\n0 1\n");
        let cli = parse(&["run", path.to_str().unwrap(), "-e", "5"]);
        let err = run(cli, &mut Vec::new()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn random_writes_loadable_graph() {
        let cli = parse(&["random", "-n", "6", "-m", "9", "--weighted", "--seed", "11"]);
        let mut out = Vec::new();
        run(cli, &mut out).unwrap();
        let g = io::read_graph(out.as_slice()).unwrap();
        assert_eq!(g.num_vertices(), 6);
        assert_eq!(g.num_edges(), 9);
        assert!(g.is_weighted());
    }
}
