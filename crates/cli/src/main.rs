mod prompt;

use anyhow::Context;
use clap::{Parser, Subcommand};
use soap_core::config::utc_offset_from_env_value;
use soap_core::constants::{DEFAULT_SCHEMA_PATH, LOCAL_TIME_ZONE, MACRO_DRIP_FACTOR};
use soap_core::extraction::extract_all;
use soap_core::form::AcceptCurrent;
use soap_core::text::{drops_per_minute, format_measure, maintenance_fluid_rate};
use soap_core::{CoreConfig, SessionContext, SoapService, Stage};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt::PromptAnswers;

#[derive(Parser)]
#[command(name = "supersoap")]
#[command(about = "SOAP progress-note drafting for oral and maxillofacial surgery cases")]
struct Cli {
    /// Question schema file (overrides SUPERSOAP_SCHEMA_PATH)
    #[arg(long, global = true)]
    schema: Option<PathBuf>,
    /// Local UTC offset in minutes (overrides SUPERSOAP_UTC_OFFSET_MINUTES)
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a structured record from pasted text and print it as JSON
    Extract {
        /// Raw SOAP note paste
        #[arg(long)]
        note: Option<PathBuf>,
        /// Surgical memo paste
        #[arg(long)]
        memo: Option<PathBuf>,
    },
    /// Render a note for a case and stage
    Render {
        /// Case name as written in the schema
        #[arg(long)]
        case: String,
        /// Stage: Awal, PreOp, POD0 or POD1
        #[arg(long)]
        stage: String,
        /// YAML session file with record edits and answers
        #[arg(long)]
        session: Option<PathBuf>,
        /// Raw SOAP note paste
        #[arg(long)]
        note: Option<PathBuf>,
        /// Surgical memo paste
        #[arg(long)]
        memo: Option<PathBuf>,
        /// Ask every visible question on the terminal
        #[arg(long)]
        interactive: bool,
        /// Write the note here instead of stdout; a directory gets the default file name
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Maintenance fluid rate and drip rate for a body weight
    Fluid {
        /// Body weight in kg
        weight: f64,
        /// Administration set drop factor (drops/mL)
        #[arg(long, default_value_t = MACRO_DRIP_FACTOR)]
        drop_factor: i64,
    },
    /// Print the operative-report template for a case
    Report {
        #[arg(long)]
        case: String,
    },
    /// List the cases the schema defines
    Cases,
}

/// Resolves the core configuration from the environment, with CLI flags taking precedence.
fn resolve_config(cli: &Cli) -> anyhow::Result<CoreConfig> {
    let schema_path = cli
        .schema
        .clone()
        .or_else(|| std::env::var("SUPERSOAP_SCHEMA_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
    let utc_offset_minutes = match cli.utc_offset_minutes {
        Some(minutes) => minutes,
        None => utc_offset_from_env_value(std::env::var("SUPERSOAP_UTC_OFFSET_MINUTES").ok())?,
    };
    Ok(CoreConfig::new(
        schema_path,
        LOCAL_TIME_ZONE.to_string(),
        utc_offset_minutes,
    )?)
}

fn read_paste(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    path.map(|p| {
        fs::read_to_string(p).with_context(|| format!("failed to read paste {}", p.display()))
    })
    .transpose()
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("supersoap=info".parse()?)
                .add_directive("soap_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract { note, memo } => {
            let note = read_paste(note.as_deref())?;
            let memo = read_paste(memo.as_deref())?;
            let record = extract_all(note.as_deref(), memo.as_deref());
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Render {
            case,
            stage,
            session,
            note,
            memo,
            interactive,
            out,
        } => {
            let stage: Stage = stage.parse()?;
            let cfg = Arc::new(resolve_config(&cli)?);
            let service = SoapService::from_config(cfg)?;

            let mut context = match session {
                Some(path) => SessionContext::load(path)?,
                None => SessionContext::new(),
            };
            let note = read_paste(note.as_deref())?;
            let memo = read_paste(memo.as_deref())?;
            if note.is_some() || memo.is_some() {
                service.ensure_paste_allowed(stage, note.is_some(), memo.is_some())?;
                // Record fields in the session file are direct edits and outrank pasted text.
                let edits = context.record.clone();
                context.autofill(note.as_deref(), memo.as_deref());
                context.apply_overrides(&edits);
            }

            if *interactive {
                let stdin = io::stdin();
                let mut prompts = PromptAnswers::new(stdin.lock(), io::stderr());
                service.fill_form(case, stage, &mut context, &mut prompts)?;
            } else {
                service.fill_form(case, stage, &mut context, &mut AcceptCurrent)?;
            }

            let note = service.compose(case, stage, &context)?;
            match out {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(note.file_name())
                    } else {
                        path.clone()
                    };
                    fs::write(&target, note.text())
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    tracing::info!(path = %target.display(), "note written");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(note.text().as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Fluid {
            weight,
            drop_factor,
        } => {
            let ml_per_hour = maintenance_fluid_rate(*weight);
            let rate = drops_per_minute(ml_per_hour, *drop_factor);
            println!(
                "{} mL/jam = {rate} tpm (faktor tetes {drop_factor})",
                format_measure(ml_per_hour)
            );
        }
        Commands::Report { case } => {
            let cfg = Arc::new(resolve_config(&cli)?);
            let service = SoapService::from_config(cfg)?;
            match service.operative_report(case)? {
                Some(template) => println!("{}", template.trim_end()),
                None => println!("Belum ada"),
            }
        }
        Commands::Cases => {
            let cfg = Arc::new(resolve_config(&cli)?);
            let service = SoapService::from_config(cfg)?;
            for case in service.case_names() {
                println!("{case}");
            }
        }
    }

    Ok(())
}
