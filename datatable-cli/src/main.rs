use std::fs::File;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use datatable_lib::filter::Operator;
use datatable_lib::model::Value;
use datatable_lib::table::{DataTable, SortRequest};
use datatable_lib::toolbar::{DraftRow, Toolbar};

mod households;
mod render;

/// Print the sample household table with the given view applied.
#[derive(Debug, Parser)]
#[command(name = "datatable", version, about)]
struct Cli {
    /// Rows per page
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Global search text
    #[arg(long)]
    search: Option<String>,

    /// Tab to activate
    #[arg(long)]
    tab: Option<String>,

    /// Toggle a filter chip (repeatable)
    #[arg(long = "chip")]
    chips: Vec<String>,

    /// Pick a header filter option, COLUMN=VALUE (repeatable)
    #[arg(long = "facet", value_name = "FACET")]
    facets: Vec<String>,

    /// Column to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Advanced filter, COLUMN:OPERATOR:VALUE[:VALUE2] (repeatable)
    #[arg(long = "filter", value_name = "FILTER")]
    filters: Vec<String>,

    /// Select a household by id (repeatable)
    #[arg(long = "select", value_name = "ID")]
    selected: Vec<String>,

    /// Run a bulk action on the selection
    #[arg(long)]
    bulk: Option<String>,

    /// Log level written to datatable-cli.log
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

/// Parse `COLUMN:OPERATOR:VALUE[:VALUE2]`.
fn parse_filter(text: &str) -> anyhow::Result<DraftRow> {
    let parts: Vec<&str> = text.splitn(4, ':').collect();
    if parts.len() < 3 {
        bail!("expected COLUMN:OPERATOR:VALUE[:VALUE2], got '{}'", text);
    }
    let operator = Operator::from_str(parts[1])?;
    let row = DraftRow::new(parts[0], operator, parts[2]);
    Ok(match parts.get(3) {
        Some(value2) => row.with_value2(*value2),
        None => row,
    })
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut table = DataTable::new(
        households::columns(),
        households::sample(),
        households::config().with_page_size(cli.page_size),
    )
    .context("invalid table configuration")?;
    let mut toolbar = Toolbar::new();

    if let Some(tab) = &cli.tab {
        toolbar.click_tab(&mut table, tab);
    }
    for chip in &cli.chips {
        toolbar.toggle_chip(&mut table, chip);
    }
    if let Some(query) = &cli.search {
        toolbar.search(&mut table, query);
    }

    for facet in &cli.facets {
        let Some((column, value)) = facet.split_once('=') else {
            bail!("expected COLUMN=VALUE, got '{}'", facet);
        };
        if table.column(column).is_none() {
            bail!("unknown facet column '{}'", column);
        }
        toolbar.pick_option(&mut table, column, &Value::from(value));
    }

    if !cli.filters.is_empty() {
        toolbar.open_advanced(&table);
        for (index, text) in cli.filters.iter().enumerate() {
            let row = parse_filter(text).with_context(|| format!("bad filter '{}'", text))?;
            if index > 0 {
                toolbar.add_draft_row();
            }
            toolbar.update_draft_row(index, row);
        }
        toolbar.apply_advanced(&mut table);
    }

    if let Some(column) = &cli.sort {
        if table.column(column).is_none() {
            bail!("unknown sort column '{}'", column);
        }
        let request = if cli.desc {
            SortRequest::Descending
        } else {
            SortRequest::Ascending
        };
        table.set_sort(column, request);
    }

    for id in &cli.selected {
        if table.row(id).is_none() {
            bail!("unknown household '{}'", id);
        }
        table.toggle_row_selected(id);
    }

    table.set_page_index(cli.page.saturating_sub(1));

    for line in render::toolbar(&toolbar, &table) {
        println!("{}", line);
    }
    println!();
    for line in render::grid(&table) {
        println!("{}", line);
    }
    println!();
    for line in render::footer(&toolbar, &table) {
        println!("{}", line);
    }

    if let Some(action) = &cli.bulk {
        if !toolbar.invoke_bulk(&table, action) {
            bail!("bulk action '{}' did not run", action);
        }
        println!("Ran '{}' on {} households", action, table.selected_rows().len());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_file = File::create("datatable-cli.log").expect("Failed to create log file");
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("Starting datatable-cli");

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
