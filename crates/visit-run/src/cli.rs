use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;
use visit_lang::{BUILTIN_REGISTRY, Evaluator, Expr, Printer, Registry};

#[derive(Parser, Debug, Default)]
#[command(name = "visit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "# Examples:\n\n\
    ## To print and evaluate the nested sample:\n\
    visit sample nested\n\n\
    ## To list the registered handlers:\n\
    visit handlers")]
#[command(
    about = "Prints and evaluates expression trees through a handler registry.",
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Print and evaluate a built-in sample expression
    Sample {
        #[arg(value_enum, default_value_t = Sample::Nested)]
        name: Sample,
    },
    /// List the built-in handler table
    Handlers,
}

/// Sample trees available from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum Sample {
    /// (1 + (2 × (3 + 4)))
    #[default]
    Nested,
    /// (0 × 5)
    ZeroProduct,
    /// 42
    Leaf,
}

impl Sample {
    pub fn expr(self) -> Expr {
        match self {
            Sample::Nested => Expr::sum(1, Expr::product(2, Expr::sum(3, 4))),
            Sample::ZeroProduct => Expr::product(0, 5),
            Sample::Leaf => Expr::number(42),
        }
    }
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        self.init_tracing();
        tracing::debug!("cli: {self:?}");

        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());

        match self
            .commands
            .clone()
            .unwrap_or(Commands::Sample { name: Sample::default() })
        {
            Commands::Sample { name } => {
                writeln!(handle, "{}", render(&BUILTIN_REGISTRY, &name.expr())?).into_diagnostic()?
            }
            Commands::Handlers => {
                for line in handler_table(&BUILTIN_REGISTRY) {
                    writeln!(handle, "{line}").into_diagnostic()?;
                }
            }
        }

        handle.flush().into_diagnostic()
    }

    fn init_tracing(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(io::stderr)
            .try_init();
    }
}

/// Formats `<printed> = <value>` for `expr`.
fn render(registry: &Registry, expr: &Expr) -> miette::Result<String> {
    let mut printer = Printer::new();
    registry.dispatch(&mut printer, expr)?;

    let mut evaluator = Evaluator::new();
    registry.dispatch(&mut evaluator, expr)?;

    tracing::info!(printed = printer.as_str(), "evaluated sample");
    Ok(format!("{printer} = {evaluator}"))
}

fn handler_table(registry: &Registry) -> Vec<String> {
    registry
        .keys()
        .into_iter()
        .map(|key| format!("{}\t{}", key.operation, key.node))
        .collect()
}
