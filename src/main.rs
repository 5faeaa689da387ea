use clap::{Args, Parser, Subcommand};
use rollbook::{
    InMemoryStore, PipelineBuilder, PipelineError, Record, RecordStore, ReportPipeline, import_csv_file,
    roster_listing,
};
use std::path::{Path, PathBuf};

/// Keeps an attendance roster and prints it as a paginated PDF report.
#[derive(Parser, Debug)]
#[command(name = "rollbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace the roster with the rows of a CSV file (id,name per line)
    Import {
        csv: PathBuf,
        #[arg(long)]
        roster: PathBuf,
    },
    /// Enroll one record, initially absent
    Add {
        id: String,
        name: String,
        #[arg(long)]
        roster: PathBuf,
    },
    /// Mark a record present or absent
    Mark {
        id: String,
        #[command(flatten)]
        status: MarkStatus,
        #[arg(long)]
        roster: PathBuf,
    },
    /// Mark everyone absent
    Reset {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Remove every record from the roster
    Clear {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Print the roster with presence totals
    List {
        #[command(flatten)]
        source: RosterSource,
    },
    /// Print the laid-out pages as JSON
    Layout {
        #[command(flatten)]
        source: RosterSource,
        /// Report date label; defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the PDF report
    Export {
        #[command(flatten)]
        source: RosterSource,
        #[arg(long)]
        date: Option<String>,
        /// Output file; defaults to Attendance_<date>.pdf in the current directory
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct MarkStatus {
    #[arg(long)]
    present: bool,
    #[arg(long)]
    absent: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct RosterSource {
    /// JSON roster file
    #[arg(long)]
    roster: Option<PathBuf>,
    /// CSV file, every record absent
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl RosterSource {
    fn load(&self) -> Result<Vec<Record>, PipelineError> {
        if let Some(csv) = &self.csv {
            let mut store = InMemoryStore::new();
            import_csv_file(&mut store, csv)?;
            return Ok(store.list_all());
        }
        match &self.roster {
            Some(roster) => Ok(InMemoryStore::load(roster)?.list_all()),
            None => Err(PipelineError::Config("either --roster or --csv is required".to_string())),
        }
    }
}

fn build_pipeline(config: Option<&Path>) -> Result<ReportPipeline, PipelineError> {
    let builder = PipelineBuilder::new();
    let builder = match config {
        Some(path) => builder.with_config_file(path)?,
        None => builder,
    };
    builder.build()
}

fn update_roster(
    roster: &Path,
    update: impl FnOnce(&mut InMemoryStore) -> Result<(), PipelineError>,
) -> Result<(), PipelineError> {
    let mut store = InMemoryStore::load(roster)?;
    update(&mut store)?;
    store.save(roster)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Import { csv, roster } => update_roster(&roster, |store| {
            let count = import_csv_file(store, &csv)?;
            println!("Imported {} records from {}", count, csv.display());
            Ok(())
        }),
        Command::Add { id, name, roster } => update_roster(&roster, |store| {
            store.insert(Record::absent(id, name))?;
            Ok(())
        }),
        Command::Mark { id, status, roster } => update_roster(&roster, |store| {
            store.set_present(&id, status.present)?;
            Ok(())
        }),
        Command::Reset { roster } => update_roster(&roster, |store| {
            store.reset_attendance();
            Ok(())
        }),
        Command::Clear { roster } => update_roster(&roster, |store| {
            store.delete_all();
            Ok(())
        }),
        Command::List { source } => {
            print!("{}", roster_listing(&source.load()?));
            Ok(())
        }
        Command::Layout { source, date, config } => {
            let pipeline = build_pipeline(config.as_deref())?;
            let records = source.load()?;
            let labels = pipeline.labels(date.unwrap_or_else(|| pipeline.today_label()));
            let pages = pipeline.layout(&records, &labels);
            println!("{}", serde_json::to_string_pretty(&pages)?);
            Ok(())
        }
        Command::Export { source, date, out, config } => {
            let pipeline = build_pipeline(config.as_deref())?;
            let records = source.load()?;
            let date = date.unwrap_or_else(|| pipeline.today_label());
            let out = out.unwrap_or_else(|| PathBuf::from(ReportPipeline::suggested_file_name(&date)));
            let labels = pipeline.labels(date);
            pipeline.generate_to_file(&records, &labels, &out)?;
            println!("Saved {}", out.display());
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
