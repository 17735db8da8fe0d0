mod catalog;
mod college;
mod config;
mod error;
mod lead;

#[cfg(test)]
mod admin_tests;

use catalog::AddOffer;
use clap::{Args, Parser, Subcommand};
use college::{AddCourse, AddScholarship, ApproveCollege};
use error::AdminError;
use lead::SetLeadStage;
use portal_db_migration::{Migrator, MigratorTrait};

use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Debug, Parser)] // requires `derive` feature
#[clap(name = "portal-utils")]
#[clap(about = "Admin CLI for the student lead portal", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Migrate(Migrate),
    ApproveCollege(ApproveCollege),
    AddCourse(AddCourse),
    AddScholarship(AddScholarship),
    AddOffer(AddOffer),
    SetLeadStage(SetLeadStage),
}

#[derive(Debug, Args)]
#[clap(about = "Apply pending database migrations")]
struct Migrate {
    /// Roll back instead of applying
    #[clap(long)]
    down: bool,
}

#[tokio::main]
async fn main() -> Result<(), AdminError> {
    let config = config::load()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.rust_log);
    }
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                "portal_utils=info"
                    .parse()
                    .expect("Error parsing directive"),
            ),
        )
        .with_span_events(FmtSpan::FULL)
        .init();

    let cli: Cli = Cli::parse();
    let db = config::get_db_connection(&config).await?;

    match cli.commands {
        Commands::Migrate(migrate) => {
            if migrate.down {
                Migrator::down(&db, None).await?;
            } else {
                Migrator::up(&db, None).await?;
            }
            info!("Migrations finished");
        }
        Commands::ApproveCollege(params) => {
            college::approve_college(&db, &params).await?;
        }
        Commands::AddCourse(params) => {
            college::add_course(&db, params).await?;
        }
        Commands::AddScholarship(params) => {
            college::add_scholarship(&db, params).await?;
        }
        Commands::AddOffer(params) => {
            catalog::add_offer(&db, params).await?;
        }
        Commands::SetLeadStage(params) => {
            lead::set_lead_stage(&db, &params).await?;
        }
    }

    Ok(())
}
