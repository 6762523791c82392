//! Command-line interface.
//!
//! Without a subcommand the binary drops into the interactive console;
//! subcommands expose the same catalog operations for scripting, with
//! `--json` switching the structured ones to serde output.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::catalog::Catalog;
use crate::config;
use crate::console;
use crate::recommend::{self, format_cost};
use crate::validate;

#[derive(Debug, Parser)]
#[command(
    name = "mediguide",
    version,
    about = "Symptom search and specialist recommendation over a bundled Korean clinic catalog"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend doctors for the selected symptoms within a budget
    Recommend {
        /// Catalog symptom name; repeat the flag to select several
        #[arg(long = "symptom", value_name = "NAME")]
        symptoms: Vec<String>,

        /// Budget ceiling in KRW; doctors whose estimated total exceeds it are dropped
        #[arg(long, value_name = "KRW", default_value_t = config::DEFAULT_COST_CEILING)]
        max_cost: u32,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search the symptom catalog by name, description, or category
    Suggest {
        /// Search text; blank lists the first catalog entries
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every doctor in the bundled catalog
    Doctors,

    /// List every symptom in the bundled catalog
    Symptoms,

    /// Check catalog integrity and exit non-zero on errors
    Validate {
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(cli: Cli) -> ExitCode {
    let catalog = Catalog::bundled();
    match cli.command {
        None => match console::run_console(catalog) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("console error: {e}");
                ExitCode::FAILURE
            }
        },
        Some(Command::Recommend {
            symptoms,
            max_cost,
            json,
        }) => run_recommend(catalog, &symptoms, max_cost, json),
        Some(Command::Suggest { query, json }) => run_suggest(catalog, &query, json),
        Some(Command::Doctors) => {
            for doctor in catalog.doctors() {
                println!(
                    "{} ({} {}) 초진 {}",
                    doctor.name,
                    doctor.hospital,
                    doctor.department,
                    format_cost(doctor.consultation_fee.initial)
                );
            }
            ExitCode::SUCCESS
        }
        Some(Command::Symptoms) => {
            for symptom in catalog.symptoms() {
                println!(
                    "{} ({}, {})",
                    symptom.name,
                    symptom.category,
                    symptom.severity.as_str()
                );
            }
            ExitCode::SUCCESS
        }
        Some(Command::Validate { json }) => run_validate(catalog, json),
    }
}

fn run_recommend(catalog: &Catalog, symptoms: &[String], max_cost: u32, json: bool) -> ExitCode {
    for name in symptoms {
        if catalog.find_symptom(name).is_none() {
            warn!(symptom = %name, "not in the catalog; it only shows up in reasoning text");
        }
    }
    let results = recommend::recommend(catalog, symptoms, max_cost);
    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("serialization error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", console::render_recommendations(&results));
    }
    ExitCode::SUCCESS
}

fn run_suggest(catalog: &Catalog, query: &str, json: bool) -> ExitCode {
    let matches = recommend::suggest_symptoms(catalog, query);
    if json {
        match serde_json::to_string_pretty(&matches) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("serialization error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", console::render_suggestions(&matches));
    }
    ExitCode::SUCCESS
}

fn run_validate(catalog: &Catalog, json: bool) -> ExitCode {
    let report = validate::check_catalog(catalog);
    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("serialization error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report.render());
    }
    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
