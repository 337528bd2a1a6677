use crate::infra::{parse_date, parse_money};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use seller_proceeds::config::AppConfig;
use seller_proceeds::error::AppError;
use seller_proceeds::worksheet::format::{format_currency, format_rate};
use seller_proceeds::worksheet::{
    compute_title_premium, AmountPolicy, PremiumSchedule, WorksheetDraft, WorksheetService,
};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct PremiumArgs {
    /// Selling price of the property
    #[arg(value_parser = parse_money)]
    pub(crate) selling_price: Option<Decimal>,
    /// Print the rate schedule bands
    #[arg(long)]
    pub(crate) schedule: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Seller name shown on the worksheet and used in the file name
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Property address
    #[arg(long, default_value = "")]
    pub(crate) property: String,
    /// Selling price
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) selling_price: Decimal,
    /// Mortgage balances to pay off
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) mortgage_balance: Option<Decimal>,
    /// Listing agent commission percent (defaults to the configured rate)
    #[arg(long, value_parser = parse_money)]
    pub(crate) listing_agent_percent: Option<Decimal>,
    /// Listing commission amount (defaults to price x percent)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) listing_commission: Option<Decimal>,
    /// Buyers agent commission percent (defaults to the configured rate)
    #[arg(long, value_parser = parse_money)]
    pub(crate) buyers_agent_percent: Option<Decimal>,
    /// Buyers commission amount (defaults to price x percent)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) buyers_commission: Option<Decimal>,
    /// Owner's title insurance premium (defaults to the rate schedule)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) title_insurance: Option<Decimal>,
    /// Transfer tax per $1,000 of price (defaults to the configured rate)
    #[arg(long, value_parser = parse_money)]
    pub(crate) transfer_tax_rate: Option<Decimal>,
    /// Transfer tax amount (defaults to price / 1000 x rate)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) transfer_tax: Option<Decimal>,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) pest_inspection: Option<Decimal>,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) city_certifications: Option<Decimal>,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) well_septic: Option<Decimal>,
    /// Free-text note printed beside the well & septic amount
    #[arg(long, default_value = "")]
    pub(crate) well_septic_note: String,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) home_warranty: Option<Decimal>,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) seller_concessions: Option<Decimal>,
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) transaction_fee: Option<Decimal>,
    /// Seller's share of the survey cost
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) survey: Option<Decimal>,
    /// Use and occupancy escrow (subtracted from proceeds)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) use_occupancy_escrow: Option<Decimal>,
    /// Taxes and escrow rebate (added to proceeds)
    #[arg(long, value_parser = parse_money, allow_negative_numbers = true)]
    pub(crate) taxes_escrow_rebate: Option<Decimal>,
    #[arg(long, default_value = "")]
    pub(crate) agent: String,
    #[arg(long, default_value = "")]
    pub(crate) seller: String,
    /// Worksheet date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Output file, or directory to place the default file name in
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Logo image for the worksheet header (overrides APP_LOGO_PATH)
    #[arg(long)]
    pub(crate) logo: Option<PathBuf>,
    /// Reject negative amounts instead of accepting them
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the worksheet without writing a PDF
    #[arg(long)]
    pub(crate) no_pdf: bool,
}

impl GenerateArgs {
    pub(crate) fn draft(&self) -> WorksheetDraft {
        let amount = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);

        WorksheetDraft {
            name: self.name.clone(),
            property: self.property.clone(),
            selling_price: self.selling_price,
            mortgage_balance: amount(self.mortgage_balance),
            listing_agent_percent: self.listing_agent_percent,
            listing_commission_amount: self.listing_commission,
            buyers_agent_percent: self.buyers_agent_percent,
            buyers_commission_amount: self.buyers_commission,
            title_insurance: self.title_insurance,
            transfer_tax_rate: self.transfer_tax_rate,
            transfer_tax_amount: self.transfer_tax,
            pest_inspection: amount(self.pest_inspection),
            city_certifications: amount(self.city_certifications),
            well_septic_inspection: amount(self.well_septic),
            well_septic_note: self.well_septic_note.clone(),
            home_warranty: amount(self.home_warranty),
            seller_concessions: amount(self.seller_concessions),
            transaction_fee: amount(self.transaction_fee),
            survey: amount(self.survey),
            use_occupancy_escrow: amount(self.use_occupancy_escrow),
            taxes_escrow_rebate: amount(self.taxes_escrow_rebate),
            agent: self.agent.clone(),
            seller: self.seller.clone(),
            date: self.date,
        }
    }
}

pub(crate) fn run_premium(args: PremiumArgs) -> Result<(), AppError> {
    if let Some(price) = args.selling_price {
        println!(
            "Owner's title insurance for {}: {}",
            format_currency(price),
            format_currency(compute_title_premium(price))
        );
    }

    if args.schedule || args.selling_price.is_none() {
        render_schedule(&PremiumSchedule::standard());
    }
    Ok(())
}

fn render_schedule(schedule: &PremiumSchedule) {
    println!(
        "Owner's title insurance schedule (price + {})",
        format_currency(schedule.price_offset)
    );
    for band in schedule.bands() {
        let ceiling = match band.ceiling {
            Some(ceiling) => format!("up to {}", format_currency(ceiling)),
            None => format!("above {}", format_currency(band.floor)),
        };
        println!(
            "- {}: {} + ${} per $1,000 over {}",
            ceiling,
            format_currency(band.base),
            format_rate(band.rate_per_thousand),
            format_currency(band.floor)
        );
    }
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut settings = config.worksheet.settings();
    if let Some(logo) = &args.logo {
        settings.logo_path = Some(logo.clone());
    }
    if args.strict {
        settings.policy = AmountPolicy::RejectNegative;
    }

    let service = WorksheetService::new(settings);
    let worksheet = service.prepare(args.draft())?;
    print!("{}", service.render_text(&worksheet));

    if args.no_pdf {
        return Ok(());
    }

    let document = service.render_pdf(&worksheet)?;
    let path = output_path(args.output.as_deref(), &document.file_name);
    std::fs::write(&path, &document.bytes)?;
    println!("\nSaved {}", path.display());
    Ok(())
}

fn output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}
