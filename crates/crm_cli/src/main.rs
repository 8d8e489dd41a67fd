//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `crm_core` linkage (`ping`).
//! - Drive one customer migration through the process singletons (`migrate`).

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crm_core::{
    customer_store, postal_directory, CustomerMigrationFacade, CustomerRecord, CustomerStore,
    PostalArea, PostalDirectory,
};

#[derive(Debug, Parser)]
#[command(name = "crm_cli", version, about = "Customer migration smoke CLI")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health-check and version.
    Ping,
    /// Migrate one customer into the in-process CRM store.
    Migrate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        postal_code: String,
        /// Seed the postal directory, as `POSTAL_CODE=CITY/STATE`. Repeatable.
        #[arg(long = "area", value_parser = parse_area)]
        areas: Vec<(String, PostalArea)>,
    },
}

fn parse_area(value: &str) -> Result<(String, PostalArea), String> {
    let (postal_code, place) = value
        .split_once('=')
        .ok_or_else(|| format!("expected POSTAL_CODE=CITY/STATE, got `{value}`"))?;
    let (city, state) = place
        .rsplit_once('/')
        .ok_or_else(|| format!("expected CITY/STATE after `=`, got `{place}`"))?;
    Ok((postal_code.to_string(), PostalArea::new(city, state)))
}

/// Seeds `directory`, migrates one customer into `store` and returns every
/// stored record.
fn run_migrate(
    directory: &PostalDirectory,
    store: &CustomerStore,
    name: &str,
    postal_code: &str,
    areas: Vec<(String, PostalArea)>,
) -> Result<Vec<CustomerRecord>> {
    for (code, area) in areas {
        directory.register(code, area)?;
    }
    CustomerMigrationFacade::new(directory, store)
        .migrate_customer(name, postal_code)
        .context("customer migration failed")?;
    Ok(store.records()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        crm_core::init_logging(crm_core::default_log_level(), log_dir)
            .map_err(|err| anyhow!(err))
            .context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Ping => {
            println!("crm_core ping={}", crm_core::ping());
            println!("crm_core version={}", crm_core::core_version());
        }
        Command::Migrate {
            name,
            postal_code,
            areas,
        } => {
            let records = run_migrate(
                postal_directory(),
                customer_store(),
                &name,
                &postal_code,
                areas,
            )?;
            for record in records {
                println!(
                    "name={} postal_code={} city={} state={}",
                    record.name, record.postal_code, record.city, record.state
                );
            }
        }
    }

    Ok(())
}
