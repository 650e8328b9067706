//! Command-line shell over `shelftrack_core`.
//!
//! # Responsibility
//! - Map subcommands onto core service operations.
//! - Gate destructive operations behind an explicit `--yes` confirmation.
//!
//! # Invariants
//! - All state lives in the core service; this binary holds no data of its
//!   own beyond argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shelftrack_core::db::{open_db, open_db_in_memory};
use shelftrack_core::{
    default_log_level, init_logging, AssetRow, Column, InventoryService, NewAsset,
    RememberedDirs, SqliteSnapshotRepository, DEFAULT_EXPORT_FILE, SNAPSHOT_FILE,
};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelftrack", version, about = "Single-user local inventory tracker")]
struct Cli {
    /// Directory holding the snapshot database, preferences and logs.
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List rows, optionally filtered by a per-column pattern.
    List {
        /// Column to filter on, by header name ("Asset Tag", "Where", ...).
        #[arg(long, default_value = "Asset Tag")]
        column: String,
        /// Case-insensitive regex; plain words match as substrings.
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Show every cell of one row.
    Show { index: usize },
    /// Append an all-empty row.
    AddRow,
    /// Append a populated asset row; the record date is set to today.
    Add {
        #[arg(long, default_value = "")]
        asset_tag: String,
        #[arg(long, default_value = "")]
        model: String,
        #[arg(long, default_value = "")]
        manufacturer: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        quantity: String,
        #[arg(long, default_value = "")]
        serial: String,
        #[arg(long, default_value = "")]
        physical_location: String,
        #[arg(long = "where", default_value = "")]
        assigned_to: String,
        /// ISO date (YYYY-MM-DD).
        #[arg(long)]
        date_received: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        note: String,
        /// Image file; stored as an absolute path.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Set one cell: row index, column header name, new value.
    Set {
        index: usize,
        column: String,
        value: String,
    },
    /// Delete one row by index.
    Remove { index: usize },
    /// Delete every row. Requires --yes.
    Clear {
        /// Confirm deleting all rows.
        #[arg(long)]
        yes: bool,
    },
    /// Export the grid to an .xlsx workbook.
    Export {
        /// Destination; defaults to Inventory.xlsx in the last export
        /// directory. A missing .xlsx suffix is appended.
        path: Option<PathBuf>,
    },
    /// Replace the entire grid with a workbook's rows. Requires --yes.
    Import {
        path: PathBuf,
        /// Confirm discarding every current row.
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let data_dir = std::path::absolute(&data_dir)?;
    fs::create_dir_all(&data_dir)?;

    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(data_dir.join(SNAPSHOT_FILE)) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("warning: snapshot database unavailable ({err}); changes will not persist");
            open_db_in_memory()?
        }
    };
    let repo = SqliteSnapshotRepository::new(&conn);
    let prefs = RememberedDirs::load(&data_dir);
    let mut service = InventoryService::open(repo, prefs);

    match cli.command {
        Command::List { column, pattern } => {
            let column = parse_column(&column)?;
            let pattern = pattern.unwrap_or_default();
            let visible = service.visible_rows(column, &pattern)?;
            for index in visible {
                if let Some(row) = service.grid().get(index) {
                    print_row_line(index, row);
                }
            }
        }
        Command::Show { index } => {
            let row = service
                .grid()
                .get(index)
                .ok_or_else(|| format!("row index {index} out of range"))?;
            for column in Column::ALL {
                println!("{}: {}", column.header(), row.cell_text(column));
            }
        }
        Command::AddRow => {
            service.add_blank_row()?;
            println!("added empty row {}", service.grid().len() - 1);
        }
        Command::Add {
            asset_tag,
            model,
            manufacturer,
            category,
            quantity,
            serial,
            physical_location,
            assigned_to,
            date_received,
            note,
            image,
        } => {
            service.add_asset(NewAsset {
                asset_tag,
                model,
                manufacturer,
                category,
                quantity,
                serial,
                physical_location,
                assigned_to,
                date_received,
                note,
                image,
            })?;
            println!("added row {}", service.grid().len() - 1);
        }
        Command::Set {
            index,
            column,
            value,
        } => {
            let column = parse_column(&column)?;
            service.update_cell(index, column, &value)?;
            println!("updated row {index}, column {column}");
        }
        Command::Remove { index } => {
            let row = service.delete_row(index)?;
            println!("removed row {index} (asset tag `{}`)", row.asset_tag);
        }
        Command::Clear { yes } => {
            if !yes {
                return Err("clear discards every row; pass --yes to confirm".into());
            }
            service.delete_all()?;
            println!("all rows deleted");
        }
        Command::Export { path } => {
            let path = path
                .unwrap_or_else(|| service.prefs().export_dir().join(DEFAULT_EXPORT_FILE));
            let written = service.export_to(&path)?;
            println!(
                "exported {} rows to {}",
                service.grid().len(),
                written.display()
            );
        }
        Command::Import { path, yes } => {
            if !yes {
                return Err(
                    "import replaces the entire inventory; pass --yes to confirm".into(),
                );
            }
            let count = service.import_from(&path)?;
            println!("imported {count} rows from {}", path.display());
        }
    }

    Ok(())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelftrack")
}

fn parse_column(name: &str) -> Result<Column, String> {
    Column::from_name(name).ok_or_else(|| {
        let known = Column::ALL
            .iter()
            .map(|column| column.header())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown column `{name}`; expected one of: {known}")
    })
}

fn print_row_line(index: usize, row: &AssetRow) {
    let cells: Vec<String> = Column::ALL
        .into_iter()
        .map(|column| {
            // Compact listing shows the image file name, not the full path.
            if column == Column::Image {
                row.image.file_name().to_string()
            } else {
                row.cell_text(column)
            }
        })
        .collect();
    println!("{index}\t{}", cells.join(" | "));
}
