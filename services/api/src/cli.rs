use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Scoring Service",
    about = "Assess loan applicants from interview text, on-chain history, and DAO reputation",
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
    /// Score an assessment request read from a JSON file or stdin
    Assess(AssessArgs),
    /// Print the standard interview questions
    Questions,
    /// Walk through a scripted assessment and report
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assess(args).await,
        Command::Questions => {
            run_questions();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
