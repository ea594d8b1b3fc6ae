use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use templar_hub::Hub;
use templar_session::FixedIdentityProvider;
use templar_store::SqliteStore;

/// Templar - an audit-workflow template hub
#[derive(Parser)]
#[command(name = "templar")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.templar)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Import a workflow JSON file as a new template
  Import {
    /// Path to the workflow file, or "-" to read stdin
    file: PathBuf,

    /// Session token of the importing user
    #[arg(long)]
    token: String,

    /// Category to file the template under
    #[arg(long)]
    category: Option<String>,
  },

  /// List templates, optionally filtered by category
  List {
    #[arg(long)]
    category: Option<String>,
  },

  /// Download a template as an export envelope
  Export {
    template_id: String,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Delete a template
  Delete {
    template_id: String,

    /// Session token of the deleting user
    #[arg(long)]
    token: String,
  },

  /// Show per-category template counts
  Counts,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let data_dir = cli.data_dir.unwrap_or_else(|| {
    dirs::home_dir()
      .expect("could not determine home directory")
      .join(".templar")
  });

  let Some(command) = cli.command else {
    println!("templar - use --help to see available commands");
    return Ok(());
  };

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run(command, data_dir).await })
}

async fn run(command: Commands, data_dir: PathBuf) -> Result<()> {
  let hub = open_hub(&data_dir).await?;

  match command {
    Commands::Import {
      file,
      token,
      category,
    } => {
      let text = read_input(&file)?;
      let template = hub
        .import_template(&token, &text, category)
        .await
        .context("import failed")?;

      eprintln!(
        "Imported template: {} ({})",
        template.name, template.template_id
      );
      println!("{}", serde_json::to_string_pretty(&template)?);
    }

    Commands::List { category } => {
      let templates = hub.browse(category.as_deref()).await?;
      eprintln!("{} template(s)", templates.len());
      println!("{}", serde_json::to_string_pretty(&templates)?);
    }

    Commands::Export {
      template_id,
      output,
    } => {
      let envelope = hub
        .export_template(&template_id)
        .await
        .context("export failed")?;
      let json = serde_json::to_string_pretty(&envelope)?;

      match output {
        Some(path) => {
          tokio::fs::write(&path, &json)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
          eprintln!("Exported template to {}", path.display());
        }
        None => println!("{}", json),
      }
    }

    Commands::Delete { template_id, token } => {
      hub
        .delete_template(&token, &template_id)
        .await
        .context("delete failed")?;
      eprintln!("Deleted template {}", template_id);
    }

    Commands::Counts => {
      let counts = hub.category_counts().await?;
      println!("{}", serde_json::to_string_pretty(&counts)?);
    }
  }

  Ok(())
}

/// Open the SQLite-backed hub in the data directory, creating the database
/// and running migrations on first use.
async fn open_hub(data_dir: &Path) -> Result<Hub<SqliteStore, FixedIdentityProvider>> {
  tokio::fs::create_dir_all(data_dir)
    .await
    .with_context(|| format!("failed to create data directory: {}", data_dir.display()))?;

  let options = SqliteConnectOptions::new()
    .filename(data_dir.join("templar.db"))
    .create_if_missing(true);
  let pool = SqlitePoolOptions::new()
    .connect_with(options)
    .await
    .context("failed to open template database")?;

  let store = SqliteStore::new(pool);
  store
    .migrate()
    .await
    .context("failed to run database migrations")?;

  // Tokens resolve against users.json in the data directory; without one,
  // every token is anonymous and only reads work.
  let users_path = data_dir.join("users.json");
  let identity = if users_path.exists() {
    FixedIdentityProvider::from_file(&users_path)
      .with_context(|| format!("failed to load {}", users_path.display()))?
  } else {
    FixedIdentityProvider::new(Default::default())
  };

  Ok(Hub::new(store, identity))
}

fn read_input(file: &Path) -> Result<String> {
  if file.as_os_str() == "-" {
    let mut input = String::new();
    io::stdin()
      .read_to_string(&mut input)
      .context("failed to read workflow JSON from stdin")?;
    Ok(input)
  } else {
    std::fs::read_to_string(file)
      .with_context(|| format!("failed to read workflow file: {}", file.display()))
  }
}
