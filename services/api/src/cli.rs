use crate::demo::{run_bank_check, run_demo, run_quiz_preview, BankCheckArgs, DemoArgs, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Assessment Service",
    about = "Serve, preview, and exercise the CEFR placement assessment from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a freshly sampled placement quiz
    Quiz(QuizArgs),
    /// Inspect the question bank
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },
    /// Simulate a learner of a given level taking the placement quiz
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// Validate a bank and print per-tier coverage
    Check(BankCheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz(args) => run_quiz_preview(args),
        Command::Bank {
            command: BankCommand::Check(args),
        } => run_bank_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
