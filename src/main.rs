//! Seekr CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the switcher (default command)
//! seekr
//! seekr browse --query rand --tab people
//!
//! # Rank the catalog from a script
//! seekr query rand
//! seekr query rand --enable chats --drop-unmatched --json
//!
//! # Print, copy or open a record's link
//! seekr link 3
//! seekr link 3 --copy
//!
//! # Tab counts for the current filters
//! seekr tabs --disable files
//!
//! # Search your own records instead of the built-in ones
//! seekr --catalog records.toml query notes
//! ```
//!
//! # Configuration
//!
//! On first run seekr writes a default configuration to the user's config
//! directory (`~/.config/seekr/config.toml` on Linux).

use clap::CommandFactory;
use seekr::{
    SeekrError,
    actions::{SystemClipboard, copy_link, open_link, resolve_target},
    catalog::Catalog,
    cli::{Cli, Commands, ConfigCommands, FilterArgs},
    config::SeekrConfig,
    filters::{Tab, TabFilters},
    output::{record_line, results_json, tab_with_count},
    search::{RankPolicy, evaluate, tab_counts},
    session::Session,
    ui::{
        UiError,
        output::{OutputWriter, StdoutWriter, report},
        ratatui_adapter::{AppState, Switcher},
    },
};
use std::path::PathBuf;
use std::time::Instant;

type Result<T> = std::result::Result<T, SeekrError>;

/// Catalog from `--catalog`, then the config file, then the built-in records
fn load_catalog(cli_path: Option<&PathBuf>, config: &SeekrConfig) -> Result<Catalog> {
    match cli_path.or(config.catalog.as_ref()) {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn handle_browse_command(
    config: &SeekrConfig,
    catalog: Catalog,
    query: Option<String>,
    tab: Option<Tab>,
) -> Result<()> {
    let mut session = Session::new(config.filters, config.timing.session_timing());
    if let Some(tab) = tab {
        session.select_tab(tab)?;
    }

    let mut state = AppState::new(
        catalog,
        session,
        config.ranking,
        config.link_base_url.clone(),
    );
    state.copied_ttl = config.timing.copied_indicator();
    if let Some(query) = query {
        state.set_query(query, Instant::now());
    }

    Switcher::new().run(state)?;
    Ok(())
}

fn handle_query_command(
    output: &impl OutputWriter,
    catalog: &Catalog,
    query: &str,
    view: &TabFilters,
    policy: RankPolicy,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let results = evaluate(catalog.records(), query, view.tab(), view.filters(), policy);

    if json {
        let rendered = results_json(&results, query).map_err(UiError::from)?;
        output.write(&rendered);
        return Ok(());
    }

    if results.is_empty() {
        output.info(&format!("No records under the '{}' tab", view.tab()));
        return Ok(());
    }

    output.info(&format!(
        "{} record(s) for '{}' under '{}':",
        results.len(),
        query.trim(),
        view.tab()
    ));
    for record in &results {
        output.write(&record_line(record, query, quiet));
    }
    Ok(())
}

fn handle_link_command(
    output: &impl OutputWriter,
    config: &SeekrConfig,
    catalog: &Catalog,
    id: &str,
    copy: bool,
    open: bool,
) -> Result<()> {
    let record = catalog.require(id)?;
    let base = &config.link_base_url;

    if !copy && !open {
        output.write(&resolve_target(record, base));
        return Ok(());
    }
    if copy {
        report(output, &copy_link(&mut SystemClipboard, record, base));
    }
    if open {
        report(output, &open_link(record, base));
    }
    Ok(())
}

fn handle_tabs_command(
    output: &impl OutputWriter,
    catalog: &Catalog,
    args: &FilterArgs,
    config: &SeekrConfig,
    quiet: bool,
) {
    let filters = args.apply(config.filters);
    for (tab, count) in tab_counts(catalog.records(), &filters) {
        output.write(&tab_with_count(tab, count, tab == Tab::All, quiet));
    }
}

fn handle_config_command(
    output: &impl OutputWriter,
    config: &SeekrConfig,
    command: ConfigCommands,
) -> Result<()> {
    match command {
        ConfigCommands::Show => output.write(config.to_toml()?.trim_end()),
        ConfigCommands::Path => output.write(&SeekrConfig::config_path()?.display().to_string()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = SeekrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new(quiet);

    let command = cli.get_command();

    match &command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        }
        Commands::Config { command } => {
            handle_config_command(&output, &config, *command)?;
        }
        Commands::Browse { query, tab } => {
            let catalog = load_catalog(cli.catalog.as_ref(), &config)?;
            handle_browse_command(&config, catalog, query.clone(), *tab)?;
        }
        Commands::Query {
            query,
            tab,
            filters,
            json,
            ..
        } => {
            let catalog = load_catalog(cli.catalog.as_ref(), &config)?;
            let mut view = TabFilters::new(filters.apply(config.filters));
            view.select(*tab)?;
            let policy = command.rank_policy(config.ranking);
            handle_query_command(&output, &catalog, query, &view, policy, *json, quiet)?;
        }
        Commands::Link { id, copy, open } => {
            let catalog = load_catalog(cli.catalog.as_ref(), &config)?;
            handle_link_command(&output, &config, &catalog, id, *copy, *open)?;
        }
        Commands::Tabs { filters } => {
            let catalog = load_catalog(cli.catalog.as_ref(), &config)?;
            handle_tabs_command(&output, &catalog, filters, &config, quiet);
        }
    }

    Ok(())
}
