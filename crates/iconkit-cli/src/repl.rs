//! Interactive REPL over a single resolver.
//!
//! Launch with `iconkit repl`. The resolver (and its cache) is shared by
//! every command in the session. Type `/help` for commands.

use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};
use tokio::runtime::Handle;

use iconkit::{suggest::known_keywords, IconResolver};

use crate::commands::{execute, parse_line};

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/get", "Print icon markup: /get <name> [size]"),
    ("/paths", "Print the icon's path elements"),
    ("/html", "Print wrapped HTML: /html <name> [class]"),
    ("/suggest", "Suggest icon names for a keyword"),
    ("/check", "Check whether an icon exists"),
    ("/cache", "Show cached icon count"),
    ("/clear-cache", "Drop all cached icons"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion.
#[derive(Default)]
struct IconHelper;

impl Completer for IconHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        // Keyword completion for /suggest
        if let Some(args) = input.strip_prefix("/suggest ") {
            let prefix_start = input.len() - args.len();
            let matches: Vec<Pair> = known_keywords()
                .filter(|k| k.starts_with(args.trim()))
                .map(|k| Pair {
                    display: k.to_string(),
                    replacement: format!("{k} "),
                })
                .collect();
            return Ok((prefix_start, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for IconHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for IconHelper {}
impl Validator for IconHelper {}
impl Helper for IconHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Run the interactive REPL.
///
/// Blocks the calling thread; call from `spawn_blocking` with a handle to
/// the runtime that drives the resolver's requests.
pub fn run(resolver: Arc<IconResolver>, handle: Handle) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[1miconkit v{}\x1b[0m \x1b[90m{}\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        resolver.source().config().base_url
    );
    eprintln!("    Type \x1b[36m/help\x1b[0m for commands, \x1b[90m/exit\x1b[0m to quit.");
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<IconHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(IconHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".iconkit_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = " \x1b[36micons>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => break,
                    "" | "help" | "h" | "?" => cmd_help(),
                    "cache" => eprintln!("  {} cached icon(s)", resolver.cache_len()),
                    "clear-cache" => {
                        resolver.clear_cache();
                        eprintln!("  Cache cleared.");
                    }
                    _ => match parse_line(cmd, args) {
                        Ok(Some(command)) => {
                            match handle.block_on(execute(resolver.as_ref(), &command)) {
                                Ok(output) => println!("{}", output.text),
                                Err(e) => eprintln!("  Error: {e}"),
                            }
                        }
                        Ok(None) => {
                            eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                        }
                        Err(usage) => eprintln!("  {usage}"),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<16} {desc}");
    }
    eprintln!();
    eprintln!("  Tip: Tab completes commands and /suggest keywords.");
    eprintln!();
}
