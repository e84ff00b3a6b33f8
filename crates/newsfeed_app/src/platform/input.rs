//! Line commands that stand in for the filter form in interactive mode.

use newsfeed_core::Msg;

pub const HELP: &str = "\
commands:
  topic <code>       set topic (all, technology, business, ...)
  language <code>    set language (en, es, fr, de, it, pt)
  country <code>     set country (all, us, uk, ca, au, de, fr, jp)
  range <code>       set date range (today, week, month, year)
  keywords [text]    set search keywords; empty clears them
  apply              fetch with the current filters
  search <text>      set keywords and fetch
  show               print the page again
  help               show this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Vec<Msg>),
    Show,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let require = |what: &str| {
        if rest.is_empty() {
            Err(format!("`{word}` needs a {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word {
        "" => Command::Send(Vec::new()),
        "topic" => Command::Send(vec![Msg::TopicChanged(require("code")?)]),
        "language" | "lang" => Command::Send(vec![Msg::LanguageChanged(require("code")?)]),
        "country" => Command::Send(vec![Msg::CountryChanged(require("code")?)]),
        "range" | "date" => Command::Send(vec![Msg::DateRangeChanged(require("code")?)]),
        "keywords" => Command::Send(vec![Msg::KeywordsChanged(rest.to_string())]),
        "apply" => Command::Send(vec![Msg::ApplyFilters]),
        "search" => Command::Send(vec![
            Msg::KeywordsChanged(require("search text")?),
            Msg::KeywordsSubmitted,
        ]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`")),
    };
    Ok(command)
}
