use super::render::render_grid;
use super::setup::{Cli, Commands, QueryArgs, TableCommands};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tabula::config::{TabulaConfig, CONFIG_FILE_NAME};
use tabula::dataview::{
    available_filters, filter_sort_and_paginate, sanitize_operators, Field, Operator, View,
};
use tabula::table::{
    apply_edits, create_table, navigate, CellLocation, CellMove, Section, TableEdit, TableState,
};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config()?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Query(args) => handle_query(args, &config),
        Commands::Operators { fields } => handle_operators(&fields),
        Commands::Filters { fields, view } => handle_filters(&fields, view.as_deref()),
        Commands::Table { action } => handle_table(action),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Project file first, then the user config directory.
fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dirs) = ProjectDirs::from("", "", "tabula") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths
}

fn load_config() -> Result<TabulaConfig> {
    TabulaConfig::load(&config_paths()).map_err(|e| anyhow!("failed to load configuration: {}", e))
}

/// Reads and decodes a JSON document from `path`, or from stdin for `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_view(path: Option<&Path>) -> Result<View> {
    path.map(read_json::<View>).transpose().map(Option::unwrap_or_default)
}

fn handle_query(args: QueryArgs, config: &TabulaConfig) -> Result<()> {
    let items: Vec<Value> = read_json(&args.data)?;
    let fields: Vec<Field<Value>> = read_json(&args.fields)?;
    let mut view = read_view(args.view.as_deref())?;

    if let Some(search) = args.search {
        view.search = search;
    }
    if args.page.is_some() {
        view.page = args.page;
    }
    if args.per_page.is_some() {
        view.per_page = args.per_page;
    }
    if args.sort.is_some() {
        view.sort = args.sort;
    }
    let view = view.with_defaults(config);

    let page = filter_sort_and_paginate(Some(items.as_slice()), &view, &fields);
    print_json(&page)
}

#[derive(Serialize)]
struct FieldOperators {
    field: String,
    operators: Vec<Operator>,
}

fn handle_operators(fields: &Path) -> Result<()> {
    let fields: Vec<Field<Value>> = read_json(fields)?;
    let listing: Vec<FieldOperators> = fields
        .iter()
        .map(|field| FieldOperators {
            field: field.id.clone(),
            operators: sanitize_operators(field),
        })
        .collect();
    print_json(&listing)
}

fn handle_filters(fields: &Path, view: Option<&Path>) -> Result<()> {
    let fields: Vec<Field<Value>> = read_json(fields)?;
    let view = read_view(view)?;
    print_json(&available_filters(&fields, &view))
}

/// A single edit or a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum EditInput {
    Many(Vec<TableEdit>),
    One(TableEdit),
}

impl EditInput {
    fn into_edits(self) -> Vec<TableEdit> {
        match self {
            EditInput::Many(edits) => edits,
            EditInput::One(edit) => vec![edit],
        }
    }
}

fn handle_table(action: TableCommands) -> Result<()> {
    match action {
        TableCommands::New { rows, columns } => print_json(&create_table(rows, columns)),
        TableCommands::Edit { table, edit } => {
            let state: TableState = read_json(&table)?;
            let edits = read_json::<EditInput>(&edit)?.into_edits();
            print_json(&apply_edits(&state, &edits))
        }
        TableCommands::Show { table } => {
            let state: TableState = read_json(&table)?;
            print!("{}", render_grid(&state));
            Ok(())
        }
        TableCommands::Nav {
            table,
            section,
            row,
            column,
            movement,
        } => {
            let section = section.parse::<Section>().map_err(|e| anyhow!("{}", e))?;
            let movement = movement.parse::<CellMove>().map_err(|e| anyhow!("{}", e))?;
            let state: TableState = read_json(&table)?;
            let from = CellLocation::new(section, row, column);
            print_json(&navigate(&state, &from, movement))
        }
    }
}
