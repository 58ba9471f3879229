use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use iter_template::{sample::SampleContainer, Traversable};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "iter-template", about = "Walk a sample container through the iterator adaptor")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every element in container order.
    Walk {
        /// Values separated by commas or whitespace.
        values: String,
        /// Walk from the last element to the first.
        #[arg(long)]
        reverse: bool,
    },
    /// Jump through the container with random-access steps.
    Stride {
        /// Values separated by commas or whitespace.
        values: String,
        /// Positions to skip per step.
        #[arg(long, default_value_t = 2)]
        step: isize,
    },
    /// Multiply every element in place through mutable iterators.
    Scale {
        /// Values separated by commas or whitespace.
        values: String,
        /// Factor applied to each element.
        #[arg(long, default_value_t = 2)]
        factor: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Walk { values, reverse } => run_walk(&values, reverse)?,
        Commands::Stride { values, step } => run_stride(&values, step)?,
        Commands::Scale { values, factor } => run_scale(&values, factor)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_container(values: &str) -> Result<SampleContainer> {
    values
        .parse::<SampleContainer>()
        .with_context(|| format!("failed to parse values from '{values}'"))
}

fn run_walk(values: &str, reverse: bool) -> Result<()> {
    let container = parse_container(values)?;
    info!(len = container.len(), reverse, "walking container");

    let mut printed = Vec::with_capacity(container.len());
    if reverse {
        let mut it = container.rbegin();
        let rend = container.rend();
        while it != rend {
            printed.push(it.member.to_string());
            it.increment();
        }
    } else {
        let mut it = container.begin();
        let end = container.end();
        while it != end {
            printed.push(it.member.to_string());
            it.increment();
        }
    }

    println!("{}", printed.join(" "));
    Ok(())
}

fn run_stride(values: &str, step: isize) -> Result<()> {
    if step <= 0 {
        bail!("step must be positive, got {step}");
    }
    let container = parse_container(values)?;
    let end = container.end();

    let mut it = container.begin();
    let mut visited = Vec::new();
    while it < end {
        debug!(offset = it.distance_from(&container.begin()), "stride position");
        visited.push(format!("{}@{}", it.member, it.distance_from(&container.begin())));
        if end.distance_from(&it) <= step {
            break;
        }
        it += step;
    }

    println!("{}", visited.join(" "));
    Ok(())
}

fn run_scale(values: &str, factor: i32) -> Result<()> {
    let mut container = parse_container(values)?;

    container.try_for_each_mut(|element| -> Result<()> {
        let original = element.member;
        element.member = original
            .checked_mul(factor)
            .with_context(|| format!("overflow scaling {original} by {factor}"))?;
        Ok(())
    })?;

    println!("{container}");
    Ok(())
}
