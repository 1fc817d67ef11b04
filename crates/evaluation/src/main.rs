use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use common::{read_edge_list, read_head_vector, rooted_tree_from_head_vector, TreeFileType};
use linear_arrangement::{
    min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective, FreeTree,
    GraphCore, LinearArrangement, Node, PlanarAlgorithm, ProjectiveAlgorithm, RootedTree,
    UnconstrainedAlgorithm,
};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Algo {
    Unconstrained,
    Planar,
    Projective,
}

#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value = "head-vector")]
    input_type: TreeFileType,
    #[arg(long, value_enum)]
    algo: Algo,
    /// Root vertex for the projective solver when the input carries no root
    /// of its own.
    #[arg(long, default_value_t = 0)]
    root: usize,
    #[arg(long)]
    log_level: Option<Level>,
}

fn read_trees(cli: &Cli) -> Result<(FreeTree, RootedTree), Box<dyn Error>> {
    match cli.input_type {
        TreeFileType::HeadVector => {
            let heads = read_head_vector(&cli.input)?;
            let rooted = rooted_tree_from_head_vector(&heads)?;
            Ok((rooted.to_free(), rooted))
        }
        TreeFileType::EdgeList => {
            let graph = read_edge_list(&cli.input)?;
            let free = FreeTree::from_undirected(graph)?;
            let rooted = free.to_rooted(Node::new(cli.root));
            Ok((free, rooted))
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_span_events(FmtSpan::CLOSE)
            .finish();
        subscriber.init();
    }

    let (free, rooted) = read_trees(&cli)?;

    let start = Instant::now();
    let (cost, arr): (u64, LinearArrangement) = match cli.algo {
        Algo::Unconstrained => min_sum_edge_lengths(&free, UnconstrainedAlgorithm::Shiloach)?,
        Algo::Planar => min_sum_edge_lengths_planar(&free, PlanarAlgorithm::AlemanyEstebanFerrer)?,
        Algo::Projective => {
            min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)?
        }
    };
    let elapsed = start.elapsed();

    let positions: Vec<usize> = (0..free.num_nodes()).map(|v| arr.position(Node::new(v))).collect();
    println!("n    {}", free.num_nodes());
    println!("D    {cost}");
    println!("arr  {positions:?}");
    println!("time {} µs", elapsed.as_micros());
    Ok(())
}
