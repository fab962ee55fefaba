use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use listkit_core::samples::{
    conversation_pipeline, conversations, document_pipeline, documents, file_pipeline, files,
    fruit_pipeline, task_pipeline, tasks, user_pipeline, users,
};
use listkit_core::search::highlight;
use listkit_core::{
    Dataset, ListPipeline, ListkitConfig, SampleRow, Selection, SelectionMode, ALL_FILTER,
};
use serde_json::json;
use tracing::{info, warn};

use crate::ui;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Dataset name (fruits, tasks, users, files, conversations, documents)
    pub dataset: Option<String>,

    /// Case-insensitive search term
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Active filter value ("all" disables filtering)
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Active sort key
    #[arg(long)]
    pub sort: Option<String>,

    /// Select rows by key (repeat or comma-separate; tasks allow several)
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Dataset name (fruits, tasks, users, files, conversations, documents)
    pub dataset: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn resolve_dataset(arg: Option<&str>, cfg: &ListkitConfig) -> Result<Dataset> {
    let name = arg.unwrap_or(&cfg.list.default_dataset);
    name.parse::<Dataset>()
        .context(format!("Cannot list dataset '{}'", name))
}

pub fn run_list(args: ListArgs, cfg: &ListkitConfig) -> Result<()> {
    let dataset = resolve_dataset(args.dataset.as_deref(), cfg)?;

    match dataset {
        Dataset::Fruits => show(dataset, fruit_pipeline(), &args, cfg),
        Dataset::Tasks => show(dataset, task_pipeline(tasks()), &args, cfg),
        Dataset::Users => show(dataset, user_pipeline(users()), &args, cfg),
        Dataset::Files => show(dataset, file_pipeline(files()), &args, cfg),
        Dataset::Conversations => {
            show(dataset, conversation_pipeline(conversations()), &args, cfg)
        }
        Dataset::Documents => show(dataset, document_pipeline(documents()), &args, cfg),
    }
}

fn show<T: SampleRow>(
    dataset: Dataset,
    mut pipeline: ListPipeline<T>,
    args: &ListArgs,
    cfg: &ListkitConfig,
) -> Result<()> {
    if let Some(term) = &args.search {
        if !pipeline.search_enabled() {
            warn!(dataset = %dataset, "dataset has no search fields, ignoring --search");
        }
        pipeline.set_search_term(term.as_str());
    }

    if let Some(value) = &args.filter {
        let known = value == ALL_FILTER
            || pipeline.filter_options().iter().any(|o| &o.value == value);
        if !known {
            warn!(dataset = %dataset, filter = %value, "filter value is not a configured option");
        }
        pipeline.set_active_filter(value.as_str());
    }

    let offers = |key: &str| pipeline.sort_options().iter().any(|o| o.value == key);
    match (&args.sort, &cfg.list.default_sort) {
        (Some(key), _) => {
            if !offers(key) {
                warn!(dataset = %dataset, sort = %key, "sort key is not a configured option");
            }
            pipeline.set_active_sort(key.as_str());
        }
        // The configured default only applies to datasets that offer it
        (None, Some(key)) if offers(key) => pipeline.set_active_sort(key.as_str()),
        _ => {}
    }

    let selection = select(dataset, &pipeline, &args.select);

    let shown = pipeline.compute_display_list();
    let empty = pipeline.empty_state();
    info!(
        dataset = %dataset,
        total = pipeline.items().len(),
        shown = shown.len(),
        "listed dataset"
    );

    if args.json {
        let items: Vec<_> = shown
            .iter()
            .map(|item| {
                json!({
                    "key": pipeline.key_of(item),
                    "selected": selection.contains_item(&pipeline, item),
                    "item": item,
                })
            })
            .collect();
        let out = json!({
            "dataset": dataset.name(),
            "search": pipeline.search_term(),
            "filter": pipeline.active_filter(),
            "sort": pipeline.active_sort(),
            "total": pipeline.items().len(),
            "shown": shown.len(),
            "items": items,
            "empty": empty,
            "selection": {
                "mode": selection.mode(),
                "keys": selection.keys(),
                "count": selection.count(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    ui::note(format!(
        "{}: showing {} of {}",
        dataset,
        shown.len(),
        pipeline.items().len()
    ));

    if let Some(empty) = empty {
        println!("{}", empty.message);
        if let Some(description) = empty.description {
            println!("{}", description);
        }
    } else {
        let bold = std::io::stdout().is_terminal();
        for item in shown {
            let marker = if selection.contains_item(&pipeline, item) { "*" } else { " " };
            println!(
                "{}{:>4}  {}",
                marker,
                item.id(),
                emphasize(&item.summary(), pipeline.search_term(), bold)
            );
        }
    }

    if let Some(label) = selection.label(dataset.noun()) {
        println!("{}", label);
    }

    Ok(())
}

/// Apply `--select` keys in the dataset's selection mode
fn select<T>(dataset: Dataset, pipeline: &ListPipeline<T>, keys: &[String]) -> Selection {
    let mut selection = dataset.selection();

    if selection.mode() == SelectionMode::Single && keys.len() > 1 {
        warn!(dataset = %dataset, "dataset allows one selected row, keeping the last key");
    }

    for key in keys {
        if pipeline.find_by_key(key).is_none() {
            warn!(dataset = %dataset, key = %key, "no row has this key, not selecting it");
            continue;
        }
        selection.select(key.as_str());
    }

    selection
}

/// Bold the search matches when writing to a terminal
fn emphasize(text: &str, term: &str, bold: bool) -> String {
    if !bold || term.is_empty() {
        return text.to_string();
    }

    highlight(text, term)
        .into_iter()
        .map(|(segment, hit)| {
            if hit {
                format!("\x1b[1m{}\x1b[0m", segment)
            } else {
                segment
            }
        })
        .collect()
}

pub fn run_options(args: OptionsArgs, cfg: &ListkitConfig) -> Result<()> {
    let dataset = resolve_dataset(args.dataset.as_deref(), cfg)?;

    match dataset {
        Dataset::Fruits => describe(dataset, &fruit_pipeline(), args.json),
        Dataset::Tasks => describe(dataset, &task_pipeline(vec![]), args.json),
        Dataset::Users => describe(dataset, &user_pipeline(vec![]), args.json),
        Dataset::Files => describe(dataset, &file_pipeline(vec![]), args.json),
        Dataset::Conversations => describe(dataset, &conversation_pipeline(vec![]), args.json),
        Dataset::Documents => describe(dataset, &document_pipeline(vec![]), args.json),
    }
}

fn describe<T>(dataset: Dataset, pipeline: &ListPipeline<T>, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({
            "dataset": dataset.name(),
            "search_placeholder": pipeline.search_placeholder(),
            "filter_options": pipeline.filter_options(),
            "sort_options": pipeline.sort_options(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    ui::note(format!("{}", dataset));

    match pipeline.search_placeholder() {
        Some(placeholder) => println!("search: {}", placeholder),
        None => println!("search: (disabled)"),
    }

    if pipeline.filter_options().is_empty() {
        println!("filter: (none)");
    } else {
        println!("filter:");
        for option in pipeline.filter_options() {
            println!("  {:<14} {}", option.value, option.label);
        }
    }

    if pipeline.sort_options().is_empty() {
        println!("sort: (none)");
    } else {
        println!("sort:");
        for option in pipeline.sort_options() {
            println!("  {:<14} {}", option.value, option.label);
        }
    }

    Ok(())
}
