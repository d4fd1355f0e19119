use attribute_calculator::cli::{self, CliError, EvalOptions, TreeFormat, TreeOptions};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(ClapParser)]
#[command(name = "attrcalc")]
#[command(about = "Attribute calculator - arithmetic over remote instrument attributes")]
#[command(version)]
struct Cli {
    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an expression without evaluating it
    Check {
        /// The expression to validate
        expression: String,
    },

    /// Print the parsed expression tree
    Tree {
        /// The expression to parse
        expression: String,

        /// Print the tree as JSON arrays
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// Evaluate an expression
    Eval {
        /// The expression to evaluate
        expression: String,

        /// JSON object of attribute values (reads from stdin if not provided)
        #[arg(long)]
        values: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'attrcalc docs' to list categories)
        category: String,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    let stderr_log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_filter(filter);

    // A second initialization only happens in embedded use; keep the first.
    let _ = tracing_subscriber::registry()
        .with(stderr_log_layer)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { expression } => {
            cli::execute_check(&expression).map(|()| println!("Syntax is valid"))
        }
        Commands::Tree {
            expression,
            json,
            pretty,
        } => run_tree(expression, json, pretty),
        Commands::Eval { expression, values } => run_eval(expression, values),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_tree(expression: String, json: bool, pretty: bool) -> Result<(), CliError> {
    let format = match (json, pretty) {
        (false, _) => TreeFormat::List,
        (true, false) => TreeFormat::Json,
        (true, true) => TreeFormat::JsonPretty,
    };

    let options = TreeOptions { expression, format };
    println!("{}", cli::execute_tree(&options)?);
    Ok(())
}

fn run_eval(expression: String, values: Option<String>) -> Result<(), CliError> {
    let values = match values {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer).filter(|b| !b.trim().is_empty())
        }
        None => None,
    };

    let options = EvalOptions { expression, values };
    println!("{}", cli::execute_eval(&options)?);
    Ok(())
}
