use anyhow::{Context, Result};
use clap::Parser;
use lobzapp::api::LobzApi;
use lobzapp::catalog::CatalogIndex;
use lobzapp::config::LobzConfig;
use lobzapp::listing::ListingMode;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

mod args;
mod logging;
mod print;

use args::{Cli, Commands};
use print::{print_levels, print_listing, print_messages, print_outcomes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    config: LobzConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Levels) => handle_levels(&ctx),
        Some(Commands::Outcomes) => handle_outcomes(&ctx),
        Some(Commands::List { edit, json }) => handle_list(&ctx, edit, json),
        Some(Commands::Add {
            level,
            verb,
            task,
            condition,
            degree,
            outcomes,
        }) => {
            let value = json!({
                "level": level,
                "verb": verb,
                "condition": condition,
                "task": task,
                "degree": degree,
                "ABET_ids": outcomes,
            });
            handle_add(&ctx, &value)
        }
        Some(Commands::Remove { index }) => handle_remove(&ctx, &index),
        Some(Commands::Move { order }) => handle_move(&ctx, &order),
        Some(Commands::Import { file }) => handle_import(&ctx, &file),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Config { template }) => handle_config(&ctx, template),
        None => handle_list(&ctx, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = LobzConfig::load(&cwd).context("could not load configuration")?;

    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(records) = &cli.records {
        config.records = Some(records.clone());
    }
    debug!(?config, "resolved configuration");

    Ok(AppContext { config })
}

impl AppContext {
    fn catalog(&self) -> Result<CatalogIndex> {
        let path = self
            .config
            .catalog
            .as_deref()
            .context("no catalog configured (use --catalog or LOBZ_CATALOG)")?;
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read catalog {}", path.display()))?;
        CatalogIndex::from_json_str(&json)
            .with_context(|| format!("invalid catalog {}", path.display()))
    }

    fn records_path(&self) -> Result<&Path> {
        self.config
            .records
            .as_deref()
            .context("no records file configured (use --records or LOBZ_RECORDS)")
    }

    /// Opens a session over the records file. A missing file is an empty session.
    fn open(&self) -> Result<LobzApi> {
        let mut api = LobzApi::new(self.catalog()?);
        let path = self.records_path()?;
        if path.exists() {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read records {}", path.display()))?;
            api.import_json(&json)
                .with_context(|| format!("invalid records file {}", path.display()))?;
            debug!(path = %path.display(), size = api.collection().size(), "loaded records");
        }
        Ok(api)
    }

    /// Fails unless every record at `indexes` renders against the catalog.
    fn check_resolves(&self, api: &LobzApi, indexes: &[usize]) -> Result<()> {
        for &index in indexes {
            let record = api.collection().get(index)?;
            record
                .render(api.catalog())
                .and_then(|_| record.outcome_labels(api.catalog()))
                .with_context(|| format!("objective {} does not match the catalog", index))?;
        }
        Ok(())
    }

    fn save(&self, api: &LobzApi) -> Result<()> {
        let path = self.records_path()?;
        let json = api.export_json()?;
        fs::write(path, json + "\n")
            .with_context(|| format!("could not write records {}", path.display()))?;
        debug!(path = %path.display(), size = api.collection().size(), "saved records");
        Ok(())
    }
}

fn handle_levels(ctx: &AppContext) -> Result<()> {
    print_levels(&ctx.catalog()?);
    Ok(())
}

fn handle_outcomes(ctx: &AppContext) -> Result<()> {
    print_outcomes(&ctx.catalog()?);
    Ok(())
}

fn handle_list(ctx: &AppContext, edit: bool, as_json: bool) -> Result<()> {
    let api = ctx.open()?;
    let mode = if edit || ctx.config.edit_mode {
        ListingMode::Edit
    } else {
        ListingMode::Display
    };
    let result = api.list(mode, &ctx.config.empty_message)?;
    if let Some(listing) = result.listing {
        if as_json {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            print_listing(&listing);
        }
    }
    Ok(())
}

fn handle_add(ctx: &AppContext, value: &Value) -> Result<()> {
    let mut api = ctx.open()?;
    let result = api.add_record(value)?;
    ctx.check_resolves(&api, &result.affected)?;
    ctx.save(&api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &AppContext, index: &str) -> Result<()> {
    let mut api = ctx.open()?;
    let result = api.remove_record(index)?;
    ctx.save(&api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &AppContext, order: &[String]) -> Result<()> {
    let mut api = ctx.open()?;
    let result = api.reorder_records(order)?;
    ctx.save(&api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &AppContext, file: &Path) -> Result<()> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;
    let mut api = ctx.open()?;
    let result = api.import_json(&json)?;
    ctx.check_resolves(&api, &result.affected)?;
    ctx.save(&api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let result = ctx.open()?.export_records();
    println!("{}", serde_json::to_string_pretty(&result.exported)?);
    Ok(())
}

fn handle_config(ctx: &AppContext, template: bool) -> Result<()> {
    if template {
        print!("{}", LobzConfig::template());
    } else {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    }
    Ok(())
}
