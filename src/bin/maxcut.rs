//! MAX-CUT Binary
//!
//! Splits a random weighted graph in half and improves the cut by local search.

use clap::Parser;
use moran::maxcut::Cut;
use moran::maxcut::Weighted;
use moran::maxcut::local_search;
use moran::*;

#[derive(Parser)]
#[command(author, version, about = "Weighted MAX-CUT by local search", long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_NODES)]
    nodes: usize,
    #[arg(long, default_value_t = MAXCUT_PROBABILITY)]
    probability: f64,
    #[arg(long, default_value_t = MAXCUT_MAX_WEIGHT)]
    max_weight: u32,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: Seed,
    #[arg(long, help = "Fail unless the final cut reaches this value")]
    threshold: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let ref graph = Weighted::random(args.nodes, args.probability, args.max_weight, args.seed)?;
    let a = (0..args.nodes / 2).collect::<Vec<Node>>();
    let b = (args.nodes / 2..args.nodes).collect::<Vec<Node>>();
    let start = Cut::new(args.nodes, &a, &b)?.value(graph);
    let (a, b) = local_search(graph, &a, &b, args.seed)?;
    let value = Cut::new(args.nodes, &a, &b)?.value(graph);
    log::info!(
        "[maxcut] n={} edges={} start={} final={}",
        graph.node_count(),
        graph.edge_count(),
        start,
        value
    );
    println!("A: {:?}", a);
    println!("B: {:?}", b);
    println!("Cut value: {} (from {})", value, start);
    if let Some(threshold) = args.threshold {
        anyhow::ensure!(
            value >= threshold,
            "The cut has value {} but should reach at least {}.",
            value,
            threshold
        );
    }
    Ok(())
}
