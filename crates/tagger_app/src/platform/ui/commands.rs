use std::path::PathBuf;

use tagger_core::Msg;

pub const HELP: &str = "\
Commands:
  stop <file>   load a stop-word list (one word per line)
  text <file>   extract tags from a text file
  save <file>   write the tags as `word count` lines
  show          print the current tags
  clear         forget the stop words and tags
  help          print this help
  quit          leave";

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Help,
    Quit,
    Empty,
    MissingPath(String),
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "text" => with_path(name, rest, Msg::TextFileChosen),
        "stop" => with_path(name, rest, Msg::StopWordsFileChosen),
        "save" => with_path(name, rest, Msg::SaveRequested),
        "show" => Command::Msg(Msg::ShowRequested),
        "clear" => Command::Msg(Msg::ClearRequested),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

fn with_path(name: &str, rest: &str, make: fn(PathBuf) -> Msg) -> Command {
    let path = strip_quotes(rest);
    if path.is_empty() {
        Command::MissingPath(name.to_string())
    } else {
        Command::Msg(make(PathBuf::from(path)))
    }
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
