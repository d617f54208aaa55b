//! bimdiff CLI
//!
//! Command-line interface for comparing building-model snapshots

use bimdiff_core::logging_facility::{init, Profile};
use bimdiff_core_types::{RequestContext, TraceId};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bimdiff")]
#[command(about = "bimdiff - Building-model snapshot comparison", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Off,
    Human,
    Json,
}

impl LogMode {
    fn profile(self) -> Profile {
        match self {
            LogMode::Off => Profile::Test,
            LogMode::Human => Profile::Development,
            LogMode::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two element snapshots
    Compare(commands::compare::CompareArgs),
    /// Group snapshots into lineages and resolve selections
    Lineage(commands::lineage::LineageArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log.profile());

    let mut context = RequestContext::new();
    if let Ok(trace_id) = std::env::var("BIMDIFF_TRACE_ID") {
        context = context.with_trace_id(TraceId::from_string(trace_id));
    }
    let span = tracing::info_span!("bimdiff", request_id = %context.request_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Lineage(args) => commands::lineage::execute(args),
    };

    if let Err(e) = result {
        let mut e = e.with_request_id(context.request_id);
        if let Some(trace_id) = context.trace_id {
            e = e.with_trace_id(trace_id);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
