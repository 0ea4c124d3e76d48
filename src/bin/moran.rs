//! Moran Binary
//!
//! Plays a single match, or scores one strategy over paired matches.
//!
//! Usage: moran run [--strategies a,b] [--json] | moran evaluate --strategy <name> --player <id>

use clap::Parser;
use moran::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Play one match and print its outcome", alias = "play")]
    Run {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, value_delimiter = ',', help = "Strategy per seat, fallback for missing seats")]
        strategies: Vec<String>,
        #[arg(long, help = "Print the outcome as JSON")]
        json: bool,
    },
    #[command(about = "Score a strategy from one seat over paired matches", alias = "eval")]
    Evaluate {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, default_value = Registry::FALLBACK)]
        strategy: String,
        #[arg(long, default_value_t = 0)]
        player: usize,
        #[arg(long, default_value_t = DEFAULT_MATCHES)]
        matches: usize,
        #[arg(long, help = "Fail unless the total reaches this many nodes")]
        threshold: Option<usize>,
        #[arg(long, help = "Print the score and every outcome as JSON")]
        json: bool,
    },
    #[command(about = "List the registered strategies", alias = "ls")]
    Strategies,
}

/// Match parameters; flags override the config file, which overrides defaults.
#[derive(clap::Args)]
struct Setup {
    #[arg(long, help = "JSON parameter file")]
    config: Option<PathBuf>,
    #[arg(long)]
    players: Option<usize>,
    #[arg(long)]
    nodes: Option<usize>,
    #[arg(long)]
    attachment: Option<usize>,
    #[arg(long, conflicts_with = "unbounded")]
    steps: Option<Step>,
    #[arg(long, help = "Play until fixation")]
    unbounded: bool,
    #[arg(long)]
    seed: Option<Seed>,
    #[arg(long, value_delimiter = ',', help = "Label of each initial group, e.g. 1,0")]
    order: Option<Vec<usize>>,
    #[arg(long, help = "Pause after every turn")]
    interactive: bool,
}

impl Setup {
    fn params(&self) -> anyhow::Result<Params> {
        let mut params = match self.config {
            Some(ref path) => Params::from_file(path)?,
            None => Params::default(),
        };
        if let Some(players) = self.players {
            params = Params { players, ..params }.ordered();
        }
        if let Some(nodes) = self.nodes {
            params.nodes = nodes;
        }
        if let Some(attachment) = self.attachment {
            params.attachment = attachment;
        }
        if let Some(steps) = self.steps {
            params.steps = Some(steps);
        }
        if self.unbounded {
            params.steps = None;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(ref order) = self.order {
            params.order = order.clone();
        }
        params.interactive |= self.interactive;
        params.validate()?;
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    log();
    match Command::parse() {
        Command::Run {
            setup,
            strategies,
            json,
        } => {
            let params = setup.params()?;
            let names = (0..params.players)
                .map(|seat| {
                    strategies
                        .get(seat)
                        .map(String::as_str)
                        .unwrap_or(Registry::FALLBACK)
                })
                .collect::<Vec<&str>>();
            let roster = Registry::default().roster(&names)?;
            let mut engine = Engine::new(params, roster)?;
            if engine.params().interactive {
                engine = engine.with_observer(Box::new(Pacer));
            }
            let outcome = engine.play()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome);
            }
        }
        Command::Evaluate {
            setup,
            strategy,
            player,
            matches,
            threshold,
            json,
        } => {
            let params = setup.params()?;
            let seed = params.seed;
            let score = Tournament::from(params).evaluate(&strategy, player, matches, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
            } else {
                println!("{}", score);
            }
            if let Some(threshold) = threshold {
                score.check(threshold).map_err(anyhow::Error::msg)?;
            }
        }
        Command::Strategies => {
            for name in Registry::default().names() {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
