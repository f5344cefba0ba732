use std::error::Error;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::config::Config;
use crate::ops::filter::filter_items;
use crate::ops::store::ItemStore;

type CmdResult = Result<(), Box<dyn Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let config = config_io::load_config();
    let path = config_io::file_path(cli.file.as_deref(), &config);

    let Some(command) = cli.command else {
        return Err("no command given (try `ck --help`)".into());
    };

    if let Commands::Path = command {
        println!("{}", path.display());
        return Ok(());
    }

    let mut store = ItemStore::open(path, config.store_settings());

    match command {
        Commands::List(args) => cmd_list(&store, &config, args, json),
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::Check(args) => cmd_set_checked(&mut store, args.index, Some(true), json),
        Commands::Uncheck(args) => cmd_set_checked(&mut store, args.index, Some(false), json),
        Commands::Toggle(args) => cmd_set_checked(&mut store, args.index, None, json),
        Commands::Edit(args) => cmd_edit(&mut store, args, json),
        Commands::Rm(args) => cmd_rm(&mut store, args, json),
        Commands::Mv(args) => cmd_mv(&mut store, args, json),
        Commands::Sort => cmd_sort(&mut store, json),
        Commands::Clear => cmd_clear(&mut store, json),
        Commands::Path => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a 1-based item number from the command line to a list index.
fn item_index(store: &ItemStore, number: usize) -> Result<usize, String> {
    if number == 0 || number > store.len() {
        return Err(match store.len() {
            0 => format!("no item {}: the list is empty", number),
            n => format!("no item {}: the list has {} item(s)", number, n),
        });
    }
    Ok(number - 1)
}

/// Report the outcome of a mutation. Save failures were already logged by the
/// store; they still fail the command so scripts notice.
fn finish(store: &ItemStore, change: ChangeJson, text: Option<String>, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&change)?);
    } else if let Some(text) = text {
        println!("{}", text);
    }
    match store.last_save_error() {
        Some(e) => Err(format!("changes were not saved: {}", e).into()),
        None => Ok(()),
    }
}

fn changed_item(store: &ItemStore, action: &'static str, index: usize) -> ChangeJson {
    ChangeJson {
        action,
        item: store.get(index).map(|item| ItemJson::new(index, item)),
        removed: None,
        saved: store.last_save_error().is_none(),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &ItemStore, config: &Config, args: ListArgs, json: bool) -> CmdResult {
    let query = args.query.unwrap_or_default();
    let case_sensitive = args.case_sensitive || config.ui.filter_case_sensitive;
    let visible: Vec<usize> = filter_items(store.items(), &query, case_sensitive)
        .into_iter()
        .filter(|&i| {
            let checked = store.items()[i].checked;
            (!args.checked || checked) && (!args.unchecked || !checked)
        })
        .collect();

    if json {
        let list = ListJson {
            file: store.path().display().to_string(),
            items: visible
                .iter()
                .map(|&i| ItemJson::new(i, &store.items()[i]))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("(list is empty)");
    } else if visible.is_empty() {
        println!("(no matching items)");
    }
    for i in visible {
        println!("{}", format_item_line(i, &store.items()[i]));
    }
    Ok(())
}

fn cmd_add(store: &mut ItemStore, args: AddArgs, json: bool) -> CmdResult {
    let text = args.text.join(" ");
    if !store.add(&text) {
        return Err("item text is empty".into());
    }
    let line = format_item_line(0, &store.items()[0]);
    finish(store, changed_item(store, "add", 0), Some(line), json)
}

fn cmd_set_checked(
    store: &mut ItemStore,
    number: usize,
    checked: Option<bool>,
    json: bool,
) -> CmdResult {
    let index = item_index(store, number)?;
    let (action, landed) = match checked {
        Some(true) => ("check", store.set_checked(index, true)?),
        Some(false) => ("uncheck", store.set_checked(index, false)?),
        None => ("toggle", store.toggle(index)?),
    };
    let line = format_item_line(landed, &store.items()[landed]);
    finish(store, changed_item(store, action, landed), Some(line), json)
}

fn cmd_edit(store: &mut ItemStore, args: EditArgs, json: bool) -> CmdResult {
    let index = item_index(store, args.index)?;
    let text = args.text.join(" ");
    match store.set_text(index, &text)? {
        Some(landed) => {
            let line = format_item_line(landed, &store.items()[landed]);
            finish(store, changed_item(store, "edit", landed), Some(line), json)
        }
        None => {
            let change = ChangeJson {
                action: "remove",
                item: None,
                removed: Some(1),
                saved: store.last_save_error().is_none(),
            };
            finish(store, change, Some(format!("removed item {}", args.index)), json)
        }
    }
}

fn cmd_rm(store: &mut ItemStore, args: IndexArg, json: bool) -> CmdResult {
    let index = item_index(store, args.index)?;
    let item = store.remove(index)?;
    let change = ChangeJson {
        action: "remove",
        item: Some(ItemJson::new(index, &item)),
        removed: Some(1),
        saved: store.last_save_error().is_none(),
    };
    finish(store, change, Some(format!("removed: {}", item.text)), json)
}

fn cmd_mv(store: &mut ItemStore, args: MvArgs, json: bool) -> CmdResult {
    let from = item_index(store, args.index)?;
    if args.to == 0 {
        return Err("no position 0: positions start at 1".into());
    }
    let to = args.to - 1;
    let landed = store.move_item(from, to)?;
    let line = format_item_line(landed, &store.items()[landed]);
    finish(store, changed_item(store, "move", landed), Some(line), json)
}

fn cmd_sort(store: &mut ItemStore, json: bool) -> CmdResult {
    store.resort();
    let change = ChangeJson {
        action: "sort",
        item: None,
        removed: None,
        saved: store.last_save_error().is_none(),
    };
    finish(store, change, None, json)
}

fn cmd_clear(store: &mut ItemStore, json: bool) -> CmdResult {
    let removed = store.clear_checked();
    let change = ChangeJson {
        action: "clear",
        item: None,
        removed: Some(removed),
        saved: store.last_save_error().is_none(),
    };
    let text = format!("removed {} checked item(s)", removed);
    finish(store, change, Some(text), json)
}
