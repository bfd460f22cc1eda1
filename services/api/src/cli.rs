use crate::demo::{run_demo, run_payment, run_readiness, DemoArgs, PaymentArgs, ReadinessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fizzy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fizzy Calculators",
    about = "Serve and run the Fizzy homeownership calculators from the command line",
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
    /// Calculate a monthly mortgage payment breakdown
    Payment(PaymentArgs),
    /// Score homeownership readiness for a financial profile
    Readiness(ReadinessArgs),
    /// Walk through sample buyers for both calculators
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
        Command::Payment(args) => run_payment(args),
        Command::Readiness(args) => run_readiness(args),
        Command::Demo(args) => run_demo(args),
    }
}
