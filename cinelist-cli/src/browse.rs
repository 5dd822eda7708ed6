//! Interactive browsing session.
//!
//! Reads one command per line from stdin. Searches and detail fetches run
//! concurrently with input handling; their outcomes go back through the
//! controller, which drops any that are no longer current.

use cinelist_core::{DisplayConfig, MediaId};
use cinelist_view::{
    ActionError, CardAction, DetailCompletion, InteractionController, ResultCard,
    SearchCompletion, WatchlistUnit, components, text,
};
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
Commands:
  type <text>      set the search input
  search [text]    search for the input (or <text>)
  expand <n>       expand or collapse details of result n
  close <n>        close details of result n
  add <n>          add result n to the watchlist
  remove <n|id>    remove watchlist entry n (or by id)
  clear            clear results and status
  watchlist        show the watchlist
  theme            toggle light/dark theme
  html             print the widget as HTML
  help             show this help
  quit             leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Type(String),
    Search(Option<String>),
    Expand(usize),
    Close(usize),
    Add(usize),
    Remove(String),
    Clear,
    Watchlist,
    Theme,
    Html,
    Help,
    Quit,
}

enum Completion {
    Search(SearchCompletion),
    Detail(DetailCompletion),
}

/// Parses a line; blank lines yield `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let command = match verb.to_lowercase().as_str() {
        "type" => BrowseCommand::Type(rest.to_string()),
        "search" | "s" => BrowseCommand::Search((!rest.is_empty()).then(|| rest.to_string())),
        "expand" | "e" => BrowseCommand::Expand(parse_position(rest)?),
        "close" => BrowseCommand::Close(parse_position(rest)?),
        "add" | "a" => BrowseCommand::Add(parse_position(rest)?),
        "remove" | "rm" => {
            if rest.is_empty() {
                return Err("remove needs an entry number or id".to_string());
            }
            BrowseCommand::Remove(rest.to_string())
        }
        "clear" => BrowseCommand::Clear,
        "watchlist" | "w" => BrowseCommand::Watchlist,
        "theme" => BrowseCommand::Theme,
        "html" => BrowseCommand::Html,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

/// Converts a 1-based card number into a position.
fn parse_position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a result number starting at 1, got '{arg}'")),
    }
}

/// Explains why `close` cannot run on a card, if it cannot.
///
/// Missing cards are left to the controller so its error is reported.
fn close_refusal(cards: &[ResultCard], position: usize) -> Option<String> {
    let card = cards.get(position)?;
    if card.actions().contains(&CardAction::CloseDetails) {
        None
    } else {
        Some(format!("Result {} has no details to close.", position + 1))
    }
}

/// Resolves a `remove` argument: a 1-based watchlist number or a raw id.
fn resolve_watchlist_target(units: &[WatchlistUnit], arg: &str) -> MediaId {
    let by_number = arg
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|position| units.get(position));

    match by_number {
        Some(WatchlistUnit::Entry { id, .. }) => id.clone(),
        _ => MediaId::new(arg),
    }
}

/// Runs the session until `quit` or end of input.
///
/// # Errors
/// - Reading stdin fails
pub async fn run(mut controller: InteractionController, display: &DisplayConfig) -> std::io::Result<()> {
    let placeholder = display.poster_placeholder_url.as_str();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: FuturesUnordered<BoxFuture<'static, Completion>> = FuturesUnordered::new();

    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                debug!(?command, "Browse command");

                match command {
                    BrowseCommand::Quit => break,
                    BrowseCommand::Help => println!("{HELP}"),
                    BrowseCommand::Type(text) => {
                        controller.set_input(text);
                        println!("{}", controller.char_count_label());
                    }
                    BrowseCommand::Search(text) => {
                        if let Some(text) = text {
                            controller.set_input(text);
                        }
                        if let Some(pending) = controller.begin_search() {
                            in_flight.push(controller.search_request(pending).map(Completion::Search).boxed());
                            print_status(&controller);
                        }
                    }
                    BrowseCommand::Expand(position) => match controller.toggle_details(position) {
                        Ok(Some(pending)) => {
                            in_flight.push(controller.detail_request(pending).map(Completion::Detail).boxed());
                            println!("Loading details...");
                        }
                        Ok(None) => print_results(&controller, placeholder),
                        Err(e) => println!("{e}"),
                    },
                    BrowseCommand::Close(position) => {
                        match close_refusal(controller.results(), position) {
                            Some(message) => println!("{message}"),
                            None => match controller.close_details(position) {
                                Ok(()) => print_results(&controller, placeholder),
                                Err(e) => println!("{e}"),
                            },
                        }
                    }
                    BrowseCommand::Add(position) => match controller.add_to_watchlist(position) {
                        Ok(()) => print_watchlist(&controller),
                        Err(ActionError::AlreadyExists(_)) => {
                            if let Some(notice) = controller.notice() {
                                println!("{notice}");
                            }
                            controller.dismiss_notice();
                        }
                        Err(e) => println!("{e}"),
                    },
                    BrowseCommand::Remove(arg) => {
                        let id = resolve_watchlist_target(controller.watchlist_units(), &arg);
                        controller.remove_from_watchlist(&id);
                        print_watchlist(&controller);
                    }
                    BrowseCommand::Clear => controller.clear(),
                    BrowseCommand::Watchlist => print_watchlist(&controller),
                    BrowseCommand::Theme => {
                        let theme = controller.toggle_theme();
                        println!("Theme: {theme:?} (toggle: {})", theme.toggle_label());
                    }
                    BrowseCommand::Html => println!("{}", components::widget(&controller, display)),
                }
            }
            Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                match completion {
                    Completion::Search(completion) => {
                        if controller.complete_search(completion) {
                            print_status(&controller);
                            print_results(&controller, placeholder);
                        }
                    }
                    Completion::Detail(completion) => {
                        if controller.complete_details(completion) {
                            print_results(&controller, placeholder);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_status(controller: &InteractionController) {
    if let Some(status) = controller.status() {
        println!("{status}");
    }
}

fn print_results(controller: &InteractionController, placeholder: &str) {
    print!("{}", text::results(controller.results(), placeholder));
}

fn print_watchlist(controller: &InteractionController) {
    println!("Watchlist:");
    print!("{}", text::watchlist(controller.watchlist_units()));
}
