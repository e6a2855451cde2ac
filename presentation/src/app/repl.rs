//! Line input for the interactive session
//!
//! rustyline blocks, so the editor lives on its own thread and turns each
//! line into [`AppEvent`]s for the reactor.

use super::event::AppEvent;
use millet_domain::ConcernTag;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::thread::JoinHandle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

pub const HELP_TEXT: &str = "\
Commands:
  /toggle <tag>...   - Select or deselect health concerns
  /remove <tag>...   - Deselect health concerns
  /concerns          - Show all concerns and the current selection
  /ask [query]       - Get recommendations (optionally with a new query)
  <text>             - Same as /ask <text>
  /open <n>          - Open the products of recommendation n
  /save <path>       - Save the current view as an HTML page
  /theme             - Switch between dark and light theme
  /millets           - List the millets known to the backend
  /help, /h, /?      - Show this help
  /quit, /exit, /q   - Exit";

/// Turn one input line into events. Empty lines produce nothing.
pub fn parse_line(line: &str) -> Vec<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    if !line.starts_with('/') {
        return vec![AppEvent::Fetch {
            query: Some(line.to_string()),
        }];
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/toggle" | "/t" => parse_tags(rest, AppEvent::Toggle),
        "/remove" | "/rm" => parse_tags(rest, AppEvent::Remove),
        "/concerns" | "/c" => vec![AppEvent::ShowConcerns],
        "/ask" | "/a" => vec![AppEvent::Fetch {
            query: (!rest.is_empty()).then(|| rest.to_string()),
        }],
        "/open" | "/o" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => vec![AppEvent::OpenProduct(n - 1)],
            _ => vec![AppEvent::Invalid("Usage: /open <n> (n starts at 1)".to_string())],
        },
        "/save" => {
            if rest.is_empty() {
                vec![AppEvent::Invalid("Usage: /save <path>".to_string())]
            } else {
                vec![AppEvent::Save(PathBuf::from(rest))]
            }
        }
        "/theme" => vec![AppEvent::ToggleTheme],
        "/millets" => vec![AppEvent::ListMillets],
        "/help" | "/h" | "/?" => vec![AppEvent::Help],
        "/quit" | "/exit" | "/q" => vec![AppEvent::Quit],
        _ => vec![AppEvent::Invalid(format!(
            "Unknown command: {} (type /help for available commands)",
            command
        ))],
    }
}

fn parse_tags(rest: &str, make: fn(ConcernTag) -> AppEvent) -> Vec<AppEvent> {
    if rest.is_empty() {
        return vec![AppEvent::Invalid(
            "Name at least one concern (see /concerns)".to_string(),
        )];
    }
    rest.split_whitespace()
        .map(|word| match word.parse::<ConcernTag>() {
            Ok(tag) => make(tag),
            Err(e) => AppEvent::Invalid(format!("{} (see /concerns)", e)),
        })
        .collect()
}

/// Start the input thread. It stops after sending `Quit` or when the
/// reactor goes away.
pub fn spawn_reader(events: UnboundedSender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("millet-repl".to_string())
        .spawn(move || read_loop(events))
}

fn read_loop(events: UnboundedSender<AppEvent>) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            warn!("Could not start line editor: {}", e);
            let _ = events.send(AppEvent::Quit);
            return;
        }
    };

    let history_path = dirs::data_dir().map(|p| p.join("millet-advisor").join("history.txt"));
    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("millet> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.trim());

                let parsed = parse_line(&line);
                let quit = parsed.iter().any(|e| matches!(e, AppEvent::Quit));
                for event in parsed {
                    if events.send(event).is_err() {
                        debug!("Reactor gone, stopping input");
                        return;
                    }
                }
                if quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                let _ = events.send(AppEvent::Quit);
                break;
            }
            Err(err) => {
                warn!("Input error: {:?}", err);
                let _ = events.send(AppEvent::Quit);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_fetch_with_query() {
        let events = parse_line("  millets for breakfast ");
        assert!(matches!(
            events.as_slice(),
            [AppEvent::Fetch { query: Some(q) }] if q == "millets for breakfast"
        ));
    }

    #[test]
    fn test_ask_without_query_keeps_stored_query() {
        assert!(matches!(
            parse_line("/ask").as_slice(),
            [AppEvent::Fetch { query: None }]
        ));
    }

    #[test]
    fn test_toggle_several_tags() {
        let events = parse_line("/toggle diabetes HEART flu");
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], AppEvent::Toggle(ConcernTag::Diabetes)));
        assert!(matches!(events[1], AppEvent::Toggle(ConcernTag::Heart)));
        assert!(matches!(events[2], AppEvent::Invalid(_)));
    }

    #[test]
    fn test_open_is_one_based() {
        assert!(matches!(
            parse_line("/open 2").as_slice(),
            [AppEvent::OpenProduct(1)]
        ));
        assert!(matches!(
            parse_line("/open 0").as_slice(),
            [AppEvent::Invalid(_)]
        ));
    }

    #[test]
    fn test_misc_commands() {
        assert!(parse_line("   ").is_empty());
        assert!(matches!(parse_line("/quit").as_slice(), [AppEvent::Quit]));
        assert!(matches!(parse_line("/theme").as_slice(), [AppEvent::ToggleTheme]));
        assert!(matches!(
            parse_line("/save out.html").as_slice(),
            [AppEvent::Save(p)] if p == &PathBuf::from("out.html")
        ));
        assert!(matches!(parse_line("/bogus").as_slice(), [AppEvent::Invalid(_)]));
    }
}
