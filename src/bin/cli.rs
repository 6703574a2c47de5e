//! Revlift CLI - Headless impact tooling
//!
//! Computes projections, renders the executive report PNG, and submits
//! referral batches without the desktop UI.
//!
//! # Usage
//! ```sh
//! cargo run --bin cli -- project --leads 500 --conversion 8 --scenario balanced
//! ```
//!
//! # Environment Variables
//! - `REFERRAL_API_URL` - Referral endpoint for `refer`
//! - `REPORT_OUTPUT_DIR` - Default output directory for `report`

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use revlift::application::referral_service::{ReferralDraft, ReferralService};
use revlift::application::report_service::ReportService;
use revlift::config::Config;
use revlift::domain::contact::ContactInfo;
use revlift::domain::formatting::{format_count, format_currency, format_months};
use revlift::domain::metrics::BaselineMetrics;
use revlift::domain::projection::ImpactProjection;
use revlift::domain::scenario::Scenario;
use revlift::infrastructure::api::HttpReferralClient;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Revlift impact tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BaselineArgs {
    /// Qualified leads generated per year
    #[arg(short, long, default_value = "500")]
    leads: u32,

    /// Conversion rate in percent
    #[arg(short, long, default_value = "8")]
    conversion: Decimal,

    /// Sales cycle length in months
    #[arg(long, default_value = "6")]
    cycle: Decimal,

    /// Average deal size in dollars
    #[arg(long, default_value = "75000")]
    deal_size: Decimal,

    /// Scenario (conservative, balanced, aggressive)
    #[arg(short, long, default_value = "balanced")]
    scenario: String,
}

impl BaselineArgs {
    fn resolve(&self) -> Result<(BaselineMetrics, Scenario)> {
        let baseline = BaselineMetrics::new(self.leads, self.conversion, self.cycle, self.deal_size)
            .context("Invalid baseline metrics")?;
        let scenario = Scenario::from_str(&self.scenario)?;
        Ok((baseline, scenario))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a projection for one baseline and scenario
    Project {
        #[command(flatten)]
        baseline: BaselineArgs,

        /// Emit JSON instead of the summary table
        #[arg(long)]
        json: bool,
    },
    /// Render the executive impact report as a PNG
    Report {
        #[command(flatten)]
        baseline: BaselineArgs,

        /// Executive full name
        #[arg(long)]
        name: String,

        /// Executive title
        #[arg(long)]
        title: String,

        /// Executive email address
        #[arg(long)]
        email: String,

        /// Direct phone number
        #[arg(long)]
        phone: String,

        /// Organization name (also names the output file)
        #[arg(long)]
        company: String,

        /// Output directory, overriding REPORT_OUTPUT_DIR
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Submit a referral batch from a CSV roster
    Refer {
        /// CSV file with firstName, lastName and email columns
        #[arg(short, long)]
        roster: PathBuf,

        /// Your email, credited as the referrer
        #[arg(short = 'e', long)]
        referrer: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project { baseline, json } => {
            let (baseline, scenario) = baseline.resolve()?;
            let projection = ImpactProjection::compute(&baseline, scenario);

            if json {
                println!("{}", serde_json::to_string_pretty(&projection)?);
            } else {
                print_projection(&baseline, scenario, &projection);
            }
        }
        Commands::Report {
            baseline,
            name,
            title,
            email,
            phone,
            company,
            output,
        } => {
            let (baseline, scenario) = baseline.resolve()?;
            let projection = ImpactProjection::compute(&baseline, scenario);

            let config = Config::from_env()?;
            let mut report_config = config.report;
            if let Some(dir) = output {
                report_config.output_dir = dir;
            }

            let contact = ContactInfo {
                name,
                title,
                email,
                phone,
                company,
            };
            let service = ReportService::new(report_config);
            let path = service.generate(&contact, &baseline, &projection, scenario)?;
            println!("Report written to {}", path.display());
        }
        Commands::Refer { roster, referrer } => {
            let config = Config::from_env()?;

            let mut draft = ReferralDraft::default();
            let file = std::fs::File::open(&roster)
                .with_context(|| format!("Could not open roster {}", roster.display()))?;
            let count = draft.import_roster(file)?;
            draft.referrer_email = referrer;
            info!("Loaded {} contact(s) from {}", count, roster.display());

            let gateway = Arc::new(HttpReferralClient::new(&config.api));
            let service = ReferralService::new(gateway);
            let submitted = service.submit(&draft.to_batch()).await?;
            println!("Submitted {submitted} referral(s).");
        }
    }

    Ok(())
}

fn print_projection(baseline: &BaselineMetrics, scenario: Scenario, projection: &ImpactProjection) {
    println!(
        "Scenario: {} - {}",
        scenario.label(),
        scenario.description()
    );
    println!();
    println!("CURRENT PERFORMANCE");
    println!(
        "  Annual leads:       {}",
        format_count(baseline.annual_leads as i64)
    );
    println!(
        "  Conversion rate:    {}%",
        baseline.conversion_rate_pct.normalize()
    );
    println!(
        "  Sales cycle:        {} months",
        format_months(baseline.sales_cycle_months)
    );
    println!(
        "  Average deal size:  {}",
        format_currency(baseline.average_deal_size)
    );
    println!(
        "  Annual deals:       {}",
        format_count(projection.current.deals)
    );
    println!(
        "  Annual revenue:     {}",
        format_currency(projection.current.revenue)
    );
    println!();
    println!("PROJECTED PERFORMANCE");
    println!(
        "  Close rate:         {}%",
        projection.projected.close_rate_pct.normalize()
    );
    println!(
        "  Sales cycle:        {} months",
        projection.projected.cycle_months
    );
    println!(
        "  Average deal size:  {}",
        format_currency(projection.projected.deal_size)
    );
    println!(
        "  Annual deals:       {}",
        format_count(projection.projected.deals)
    );
    println!(
        "  Annual revenue:     {}",
        format_currency(projection.projected.revenue)
    );
    println!();
    println!("IMPACT");
    println!(
        "  Additional revenue: {}",
        format_currency(projection.impact.revenue_gain)
    );
    println!(
        "  Additional deals:   +{}",
        format_count(projection.impact.additional_deals)
    );
    println!(
        "  Cycle reduction:    -{} months",
        format_months(projection.impact.cycle_reduction_months)
    );
    println!("  ROI improvement:    {}%", projection.impact.roi_pct);
}
