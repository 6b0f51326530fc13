use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tabula::dataview::{SortDirection, SortSpec};

#[derive(Parser, Debug)]
#[command(
    name = "tabula",
    bin_name = "tabula",
    version,
    disable_help_subcommand = true,
    after_help = "Paths may be '-' to read JSON from stdin.\n\
                  Set RUST_LOG (e.g. RUST_LOG=tabula=trace) to see engine logs on stderr."
)]
#[command(
    about = "Filter, sort and paginate JSON collections and edit table grids",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a view over a JSON array of items
    #[command(display_order = 1)]
    Query(QueryArgs),

    /// List the usable filter operators of each field
    #[command(display_order = 2)]
    Operators {
        /// Field descriptors (JSON array)
        #[arg(long)]
        fields: PathBuf,
    },

    /// List the filter menu for a set of fields
    #[command(display_order = 3)]
    Filters {
        /// Field descriptors (JSON array)
        #[arg(long)]
        fields: PathBuf,

        /// Current view (JSON object)
        #[arg(long)]
        view: Option<PathBuf>,
    },

    /// Create, edit, show and navigate table grids
    #[command(display_order = 4)]
    Table {
        #[command(subcommand)]
        action: TableCommands,
    },
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Items (JSON array)
    #[arg(long)]
    pub data: PathBuf,

    /// Field descriptors (JSON array)
    #[arg(long)]
    pub fields: PathBuf,

    /// Base view (JSON object); the flags below override it
    #[arg(long)]
    pub view: Option<PathBuf>,

    /// Search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<usize>,

    /// Items per page (0 disables pagination)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Sort as FIELD or FIELD:asc / FIELD:desc
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortSpec>,
}

#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Create a body-only table of empty cells
    New {
        #[arg(long)]
        rows: usize,

        #[arg(long)]
        columns: usize,
    },

    /// Apply one edit or an array of edits to a table
    Edit {
        /// Table (JSON object)
        #[arg(long)]
        table: PathBuf,

        /// Edit or edits (JSON object or array)
        #[arg(long)]
        edit: PathBuf,
    },

    /// Print a table as a text grid
    Show {
        /// Table (JSON object)
        #[arg(long)]
        table: PathBuf,
    },

    /// Print the location reached by moving from a cell
    Nav {
        /// Table (JSON object)
        #[arg(long)]
        table: PathBuf,

        /// head, body or foot
        #[arg(long)]
        section: String,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        column: usize,

        /// up, down, left, right, rowStart, rowEnd, columnStart, columnEnd, tableStart or tableEnd
        #[arg(long = "move")]
        movement: String,
    },
}

fn parse_sort(raw: &str) -> Result<SortSpec, String> {
    let (field, direction) = match raw.split_once(':') {
        Some((field, "asc")) => (field, Some(SortDirection::Asc)),
        Some((field, "desc")) => (field, Some(SortDirection::Desc)),
        Some((_, other)) => {
            return Err(format!("unknown sort direction '{other}' (expected asc or desc)"));
        }
        None => (raw, None),
    };
    if field.is_empty() {
        return Err("sort field is empty".to_string());
    }
    Ok(SortSpec {
        field: field.to_string(),
        direction,
    })
}
