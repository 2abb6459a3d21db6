//! # credreg CLI Entry Point
//!
//! Drives the Credential Access Registry against a file-backed store.
//! The typed subcommands construct engine requests directly; the raw
//! `invoke` subcommand speaks the external string-argument surface,
//! operation name and all.

use anyhow::Context;
use clap::Parser;

use credreg_core::DegreeId;
use credreg_dispatch::{dispatch, execute, Request};
use credreg_engine::NewDegree;
use credreg_store::JsonFileStore;

/// Credential Access Registry CLI.
///
/// Manages degree credential records with metered view access: each
/// record carries a remaining-view counter that viewing decrements,
/// grants top up, and revocation zeroes.
#[derive(Parser, Debug)]
#[command(name = "credreg", version, about)]
struct Cli {
    /// Path of the JSON store document.
    #[arg(long, default_value = "credreg.json", global = true)]
    store: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a new degree record.
    Create {
        /// Unique integer id of the record.
        id: i64,
        /// Name of the degree holder.
        student_name: String,
        /// Name of the issuing institution.
        institution_name: String,
        /// Duration of the degree in years.
        duration_years: i64,
        /// Year the degree was awarded.
        passing_year: i64,
        /// Cumulative grade point average.
        gpa: f32,
        /// Initial number of allowed views.
        allowed_views: i64,
    },
    /// Grant (or, with a negative delta, withdraw) views on a record.
    Grant {
        /// Target record id.
        id: i64,
        /// Signed number of views to add.
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// View a record, consuming one remaining view.
    View {
        /// Target record id.
        id: i64,
    },
    /// Revoke all remaining views on a record.
    Revoke {
        /// Target record id.
        id: i64,
    },
    /// Invoke a raw operation through the external dispatch surface.
    Invoke {
        /// Operation name (createDegree, invokeDegreeAccess, viewDegree,
        /// revokeAccess).
        operation: String,
        /// Positional string arguments of the operation.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut store = JsonFileStore::open(&cli.store)
        .with_context(|| format!("opening store document {}", cli.store.display()))?;
    tracing::debug!(store = %cli.store.display(), "store document opened");

    let payload = match cli.command {
        Commands::Create {
            id,
            student_name,
            institution_name,
            duration_years,
            passing_year,
            gpa,
            allowed_views,
        } => execute(
            &mut store,
            Request::CreateDegree(NewDegree {
                id: DegreeId(id),
                student_name,
                institution_name,
                duration_years,
                passing_year,
                gpa,
                initial_views: allowed_views,
            }),
        )?,
        Commands::Grant { id, delta } => execute(
            &mut store,
            Request::InvokeDegreeAccess {
                id: DegreeId(id),
                views_delta: delta,
            },
        )?,
        Commands::View { id } => execute(&mut store, Request::ViewDegree { id: DegreeId(id) })?,
        Commands::Revoke { id } => {
            execute(&mut store, Request::RevokeAccess { id: DegreeId(id) })?
        }
        Commands::Invoke { operation, args } => dispatch(&mut store, &operation, &args)?,
    };

    if let Some(bytes) = payload {
        let snapshot = String::from_utf8(bytes).context("snapshot payload is not UTF-8")?;
        println!("{snapshot}");
    }

    Ok(())
}
