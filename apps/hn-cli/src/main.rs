use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hn_app::{AppResult, LayoutOp, Selection, edit_service, network_service};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "HydroNet CLI - river network diagram layout tool", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file
    Validate {
        /// Path to the network file (.yaml, .yml or .json)
        network_path: PathBuf,
    },
    /// List the nodes of a network
    Nodes {
        /// Path to the network file
        network_path: PathBuf,
    },
    /// Print selected nodes in upstream-to-downstream order
    Sequence {
        /// Path to the network file
        network_path: PathBuf,
        /// Node ids, in any order
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print every node on the downstream path between two nodes
    Reach {
        /// Path to the network file
        network_path: PathBuf,
        /// Upstream end
        from: String,
        /// Downstream end
        to: String,
    },
    /// Space the interior nodes of a reach evenly between its endpoints
    SpaceEvenly(EditArgs),
    /// Move selected nodes onto the X coordinate of their confluence
    SnapX(EditArgs),
    /// Move selected nodes onto the Y coordinate of their confluence
    SnapY(EditArgs),
}

#[derive(Args)]
struct EditArgs {
    /// Path to the network file
    network_path: PathBuf,
    /// Node ids to edit, in any order
    ids: Vec<String>,
    /// Select the reach starting at this node instead of listing ids
    #[arg(long, requires = "to", conflicts_with = "ids")]
    from: Option<String>,
    /// Downstream end of the reach selected with --from
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// Report what would change without writing the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Nodes { network_path } => cmd_nodes(&network_path),
        Commands::Sequence { network_path, ids } => cmd_sequence(&network_path, &ids),
        Commands::Reach {
            network_path,
            from,
            to,
        } => cmd_reach(&network_path, &from, &to),
        Commands::SpaceEvenly(args) => cmd_edit(LayoutOp::SpaceEvenly, args),
        Commands::SnapX(args) => cmd_edit(LayoutOp::SnapX, args),
        Commands::SnapY(args) => cmd_edit(LayoutOp::SnapY, args),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let open = network_service::open(network_path)?;
    let summary = network_service::summarize(&open);
    println!("✓ Network is valid");
    println!(
        "  {} - {} nodes ({} confluences, {} headwaters, {} terminals)",
        summary.name,
        summary.node_count,
        summary.confluence_count,
        summary.headwater_count,
        summary.terminal_count
    );
    Ok(())
}

fn cmd_nodes(network_path: &Path) -> AppResult<()> {
    let open = network_service::open(network_path)?;
    if open.network().is_empty() {
        println!("No nodes in network");
    } else {
        print!("{}", network_service::node_table(open.network()));
    }
    Ok(())
}

fn cmd_sequence(network_path: &Path, ids: &[String]) -> AppResult<()> {
    let open = network_service::open(network_path)?;
    for id in edit_service::sequence_ids(open.network(), ids)? {
        println!("{id}");
    }
    Ok(())
}

fn cmd_reach(network_path: &Path, from: &str, to: &str) -> AppResult<()> {
    let open = network_service::open(network_path)?;
    for id in edit_service::reach_ids(open.network(), from, to)? {
        println!("{id}");
    }
    Ok(())
}

fn cmd_edit(op: LayoutOp, args: EditArgs) -> AppResult<()> {
    let selection = match (args.from, args.to) {
        (Some(from), Some(to)) => Selection::Reach { from, to },
        _ => Selection::Ids(args.ids),
    };
    let run = edit_service::run_edit(&args.network_path, op, &selection, args.dry_run)?;

    match run.outcome.moved {
        0 if op == LayoutOp::SpaceEvenly => {
            println!("Nothing to space: a reach needs at least 3 nodes");
        }
        0 => println!("Nothing snapped: selection needs exactly one confluence node"),
        n => println!("✓ {}: {} node(s) edited", op, n),
    }

    if args.dry_run {
        if run.outcome.moved > 0 {
            print!("{}", network_service::node_table(run.open.network()));
        }
    } else if run.written > 0 {
        println!("  Saved {}", args.network_path.display());
    }
    debug!(written = run.written, "edit finished");
    Ok(())
}
