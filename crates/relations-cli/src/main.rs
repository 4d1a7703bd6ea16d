use clap::{Parser, Subcommand, ValueEnum};
use relations::{
    dominance::reduce_to_covering, generators::seeded_rng, partition::factor_set, topological,
    Relation,
};
use tracing_subscriber::EnvFilter;

mod bench;
mod points;

use bench::{Algorithm, BenchConfig};

const SAMPLE: &str = "1,1 1,3 1,5 2,1 2,3 2,5 3,1 3,4 3,2 4,1 4,5";

#[derive(Parser)]
#[command(about = "Play with binary relations over {1..n}")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the transitive closure of a relation
    Closure {
        /// 1-based pairs, e.g. "1,2 2,3"
        #[arg(long, default_value = SAMPLE)]
        pairs: String,
        #[arg(long, value_enum, default_value_t = Choice::All)]
        algorithm: Choice,
    },
    /// Level a set of points ordered by coordinate dominance
    Levels {
        #[arg(long, value_enum, default_value_t = PointSet::Grid)]
        set: PointSet,
        /// Lower bound of the coordinates, -1 for the grid and -2 for the cross
        #[arg(long, allow_negative_numbers = true)]
        left: Option<i64>,
        /// Upper bound of the coordinates, 1 for the grid and 2 for the cross
        #[arg(long, allow_negative_numbers = true)]
        right: Option<i64>,
    },
    /// Group the elements of a relation by their rows
    Partition {
        #[arg(long, default_value = SAMPLE)]
        pairs: String,
    },
    /// Print the structural properties of a relation
    Properties {
        #[arg(long, default_value = SAMPLE)]
        pairs: String,
    },
    /// Time the closure algorithms on random relations
    Bench {
        #[arg(long)]
        repeat: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Choice {
    Warshall,
    Merge1,
    Merge2,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum PointSet {
    Grid,
    Cross,
}

impl PointSet {
    /// Smallest symmetric bounds for which the set is well formed.
    fn default_bounds(self) -> (i64, i64) {
        match self {
            PointSet::Grid => (-1, 1),
            PointSet::Cross => (-2, 2),
        }
    }
}

fn parse_pairs(s: &str) -> Result<Relation, String> {
    let mut pairs = Vec::new();
    for token in s.split_whitespace() {
        let (a, b) = token.split_once(',').ok_or_else(|| format!("'{}' is not a pair", token))?;
        let a: usize = a.trim().parse().map_err(|_| format!("'{}' is not a number", a))?;
        let b: usize = b.trim().parse().map_err(|_| format!("'{}' is not a number", b))?;
        pairs.push((a, b));
    }
    Relation::from_pairs(pairs).map_err(|e| e.to_string())
}

fn print_matrix(relation: &Relation) {
    for row in 0..relation.size() {
        let line: String = relation
            .row(row)
            .unwrap_or(&[])
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect();
        println!("{}", line);
    }
}

fn print_closure(relation: &Relation, choice: Choice) {
    println!("R = {}", relation);
    let algorithms: &[Algorithm] = match choice {
        Choice::Warshall => &[Algorithm::Warshall],
        Choice::Merge1 => &[Algorithm::MergeDegrees],
        Choice::Merge2 => &[Algorithm::MergePowers],
        Choice::All => &Algorithm::ALL,
    };
    for algorithm in algorithms {
        println!("{}: {}", algorithm.name(), algorithm.run(relation));
    }
}

fn levels(set: PointSet, left: i64, right: i64) -> Result<(), String> {
    let items = match set {
        PointSet::Grid => points::grid(left, right),
        PointSet::Cross => points::cross(left, right),
    }?;
    let mut order = Relation::from_predicate(&items, points::dominated);
    print_matrix(&order);
    println!();
    reduce_to_covering(&mut order);
    print_matrix(&order);
    println!();
    let levels = topological::levels(&order, &items).map_err(|e| e.to_string())?;
    for (i, level) in levels.iter().enumerate() {
        let names: Vec<String> = level.iter().map(ToString::to_string).collect();
        println!("{}: {}", i, names.join(" "));
    }
    Ok(())
}

fn properties(relation: &Relation) {
    println!("R = {}", relation);
    println!("reflexive:          {}", relation.is_reflexive());
    println!("antireflexive:      {}", relation.is_antireflexive());
    println!("symmetric:          {}", relation.is_symmetric());
    println!("antisymmetric:      {}", relation.is_antisymmetric());
    println!("transitive:         {}", relation.is_transitive());
    println!("antitransitive:     {}", relation.is_antitransitive());
    println!("has unrelated pair: {}", relation.has_unrelated_pair());
}

fn run(args: Args) -> Result<(), String> {
    match args.command {
        Command::Closure { pairs, algorithm } => print_closure(&parse_pairs(&pairs)?, algorithm),
        Command::Levels { set, left, right } => {
            let (default_left, default_right) = set.default_bounds();
            levels(set, left.unwrap_or(default_left), right.unwrap_or(default_right))?
        }
        Command::Partition { pairs } => {
            let classes: Vec<String> = factor_set(&parse_pairs(&pairs)?)
                .iter()
                .map(|class| {
                    let items: Vec<String> = class.iter().map(ToString::to_string).collect();
                    format!("{{{}}}", items.join(" "))
                })
                .collect();
            println!("{{{}}}", classes.join(""));
        }
        Command::Properties { pairs } => properties(&parse_pairs(&pairs)?),
        Command::Bench { repeat, seed } => {
            let defaults = BenchConfig::default();
            let config = BenchConfig {
                repeat: repeat.unwrap_or(defaults.repeat),
                seed: seed.unwrap_or(defaults.seed),
                ..defaults
            };
            let mut rng = seeded_rng(config.seed);
            for t in bench::run(&config, &mut rng) {
                println!(
                    "{:<14} n={:<4} draws={:<6} min={:?} max={:?}",
                    t.algorithm.name(),
                    t.size,
                    t.draws,
                    t.min,
                    t.max
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
