use crate::server;
use crate::worksheet::{run_generate, run_premium, GenerateArgs, PremiumArgs};
use clap::{Args, Parser, Subcommand};
use seller_proceeds::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Seller Cash Proceeds",
    about = "Estimate a seller's net proceeds and produce the cash proceeds worksheet",
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
    /// Compute the owner's title insurance premium or print the rate schedule
    Premium(PremiumArgs),
    /// Work with seller cash proceeds worksheets
    Worksheet {
        #[command(subcommand)]
        command: WorksheetCommand,
    },
}

#[derive(Subcommand, Debug)]
enum WorksheetCommand {
    /// Compute totals, print the worksheet and save it as a PDF
    Generate(GenerateArgs),
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
        Command::Premium(args) => run_premium(args),
        Command::Worksheet {
            command: WorksheetCommand::Generate(args),
        } => run_generate(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["seller-proceeds-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn worksheet_generate_parses_amounts() {
        let cli = Cli::try_parse_from([
            "seller-proceeds-api",
            "worksheet",
            "generate",
            "--name",
            "Jane Seller",
            "--selling-price",
            "300,000",
            "--title-insurance",
            "1480",
            "--date",
            "2026-10-18",
            "--no-pdf",
        ])
        .expect("parses");

        let Some(Command::Worksheet {
            command: WorksheetCommand::Generate(args),
        }) = cli.command
        else {
            panic!("expected worksheet generate");
        };
        assert!(args.no_pdf);

        let draft = args.draft();
        assert_eq!(draft.name, "Jane Seller");
        assert_eq!(draft.selling_price, dec!(300000));
        assert_eq!(draft.title_insurance, Some(dec!(1480)));
        assert_eq!(draft.listing_commission_amount, None);
    }

    #[test]
    fn premium_accepts_price_or_schedule() {
        let cli = Cli::try_parse_from(["seller-proceeds-api", "premium", "249800"]).expect("parses");
        let Some(Command::Premium(args)) = cli.command else {
            panic!("expected premium");
        };
        assert_eq!(args.selling_price, Some(dec!(249800)));
        assert!(!args.schedule);

        assert!(Cli::try_parse_from(["seller-proceeds-api", "premium", "--schedule"]).is_ok());
        assert!(Cli::try_parse_from(["seller-proceeds-api", "premium", "lots"]).is_err());
    }
}
