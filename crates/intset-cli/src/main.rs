use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intset_core::{
    IntSet, cardinality, contains, difference, equals, format, intersect, is_subset_of,
    is_superset_of, not_equals, symmetric_difference, union,
};
use intset_store::{DataDir, Store};

#[derive(Parser)]
#[command(name = "intset", about = "Parse, combine and store canonical integer sets")]
struct Cli {
    /// Override the data directory (default: $INTSET_DATA_DIR or ~/.intset)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Set operands are literals like `{1,2,3}` or `@name` for a stored set.
#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a set
    Parse { set: String },

    /// Print the number of elements
    Card { set: String },

    /// Test membership of an integer
    Contains {
        set: String,
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },

    /// Test whether A is a subset of B
    Subset { a: String, b: String },

    /// Test whether A is a superset of B
    Superset { a: String, b: String },

    /// Test whether A equals B
    Equals { a: String, b: String },

    /// Test whether A differs from B
    NotEquals { a: String, b: String },

    /// A ∪ B
    Union { a: String, b: String },

    /// A ∩ B
    Intersect { a: String, b: String },

    /// A − B
    Difference { a: String, b: String },

    /// (A − B) ∪ (B − A)
    SymDiff { a: String, b: String },

    /// Store a set under a name
    Save { name: String, set: String },

    /// Print a stored set
    Show { name: String },

    /// List stored sets
    List,

    /// Delete a stored set
    Delete { name: String },

    /// Show store statistics
    Stats,

    /// Export stored sets to a JSON file
    Export { path: PathBuf },

    /// Import sets from a JSON file
    Import { path: PathBuf },
}

/// Data directory plus a store opened on first use.
struct Session {
    data: DataDir,
    store: Option<Store>,
}

impl Session {
    fn open(data_dir: Option<&Path>) -> Result<Self> {
        let data = DataDir::open(data_dir).context("failed to open data directory")?;
        Ok(Self { data, store: None })
    }

    fn store(&mut self) -> Result<&Store> {
        if self.store.is_none() {
            let store = self.data.open_store().context("failed to open set store")?;
            self.store = Some(store);
        }
        self.store.as_ref().context("set store unavailable")
    }

    /// Resolve a literal or `@name` operand.
    fn operand(&mut self, text: &str) -> Result<IntSet> {
        if let Some(name) = text.strip_prefix('@') {
            let set = self.store()?.require(name)?;
            tracing::debug!("resolved @{name} to {set}");
            return Ok(set);
        }
        IntSet::parse_with(text, &self.data.config().parse)
            .with_context(|| format!("invalid set '{text}'"))
    }

    fn operands(&mut self, a: &str, b: &str) -> Result<(IntSet, IntSet)> {
        Ok((self.operand(a)?, self.operand(b)?))
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut session = Session::open(cli.data_dir.as_deref())?;

    match &cli.command {
        Commands::Parse { set } => print_set(&session.operand(set)?),
        Commands::Card { set } => println!("{}", cardinality(&session.operand(set)?)),
        Commands::Contains { set, value } => {
            println!("{}", contains(&session.operand(set)?, *value))
        }
        Commands::Subset { a, b } => print_relation(&mut session, a, b, is_subset_of)?,
        Commands::Superset { a, b } => print_relation(&mut session, a, b, is_superset_of)?,
        Commands::Equals { a, b } => print_relation(&mut session, a, b, equals)?,
        Commands::NotEquals { a, b } => print_relation(&mut session, a, b, not_equals)?,
        Commands::Union { a, b } => print_combined(&mut session, a, b, union)?,
        Commands::Intersect { a, b } => print_combined(&mut session, a, b, intersect)?,
        Commands::Difference { a, b } => print_combined(&mut session, a, b, difference)?,
        Commands::SymDiff { a, b } => {
            print_combined(&mut session, a, b, symmetric_difference)?
        }
        Commands::Save { name, set } => cmd_save(&mut session, name, set)?,
        Commands::Show { name } => {
            let set = session.store()?.require(name)?;
            print_set(&set);
        }
        Commands::List => cmd_list(&mut session)?,
        Commands::Delete { name } => cmd_delete(&mut session, name)?,
        Commands::Stats => cmd_stats(&mut session)?,
        Commands::Export { path } => cmd_export(&mut session, path)?,
        Commands::Import { path } => cmd_import(&mut session, path)?,
    }
    Ok(())
}

fn print_set(set: &IntSet) {
    println!("{}", format(set));
}

fn print_relation(
    session: &mut Session,
    a: &str,
    b: &str,
    relation: fn(&IntSet, &IntSet) -> bool,
) -> Result<()> {
    let (a, b) = session.operands(a, b)?;
    println!("{}", relation(&a, &b));
    Ok(())
}

fn print_combined(
    session: &mut Session,
    a: &str,
    b: &str,
    op: fn(&IntSet, &IntSet) -> IntSet,
) -> Result<()> {
    let (a, b) = session.operands(a, b)?;
    print_set(&op(&a, &b));
    Ok(())
}

fn cmd_save(session: &mut Session, name: &str, text: &str) -> Result<()> {
    let set = session.operand(text)?;
    session
        .store()?
        .put(name, &set)
        .with_context(|| format!("failed to save '{name}'"))?;
    println!("saved {name} = {set}");
    Ok(())
}

fn cmd_list(session: &mut Session) -> Result<()> {
    let sets = session.store()?.list().context("failed to list sets")?;
    if sets.is_empty() {
        println!("(no sets stored)");
    }
    for stored in sets {
        println!("{}\t{}\t{}", stored.name, stored.cardinality, stored.value);
    }
    Ok(())
}

fn cmd_delete(session: &mut Session, name: &str) -> Result<()> {
    if session.store()?.remove(name)? {
        println!("deleted {name}");
        Ok(())
    } else {
        anyhow::bail!("no set named '{name}'")
    }
}

fn cmd_stats(session: &mut Session) -> Result<()> {
    let store = session.store()?;
    let count = store.count()?;
    let schema = store
        .schema_version()
        .context("failed to read schema version")?
        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
    let max_digits = session.data.config().parse.max_digits;
    println!("data_dir:   {}", session.data.base().display());
    println!("schema:     v{schema}");
    println!("sets:       {count}");
    println!("max_digits: {max_digits}");
    println!(
        "db_size:    {:.1}KB",
        session.data.db_size() as f64 / 1024.0
    );
    Ok(())
}

fn cmd_export(session: &mut Session, path: &Path) -> Result<()> {
    let n = session
        .store()?
        .export_json_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("exported {n} sets to {}", path.display());
    Ok(())
}

fn cmd_import(session: &mut Session, path: &Path) -> Result<()> {
    let n = session
        .store()?
        .import_json_file(path)
        .with_context(|| format!("failed to import {}", path.display()))?;
    println!("imported {n} sets from {}", path.display());
    Ok(())
}
