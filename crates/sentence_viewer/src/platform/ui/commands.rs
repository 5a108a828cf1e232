use sentence_core::Msg;

pub const HELP: &str = "\
Commands:
  n            next sentence
  p            previous sentence
  r            random unseen sentence
  r3           random batch
  reset        forget which sentences were seen
  f <text>     filter by text
  clear        clear the filter
  favs         toggle the favorites view
  fav          toggle favorite on the current sentence
  edit <text>  replace the current sentence
  del          delete the current sentence
  go <n>       jump to sentence n of the current view
  list         show or hide the list
  help         show this help
  q            quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

/// Maps one input line to a command. Blank lines are ignored; anything
/// unrecognised asks for help.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match (word.to_lowercase().as_str(), rest) {
        ("n" | "next", "") => Msg::Next,
        ("p" | "prev" | "previous", "") => Msg::Previous,
        ("r" | "random", "") => Msg::RandomOne,
        ("r3" | "batch", "") => Msg::RandomBatch,
        ("reset", "") => Msg::ResetSeen,
        ("f" | "filter", query) if !query.is_empty() => Msg::FilterChanged(query.to_string()),
        ("clear" | "f" | "filter", "") => Msg::FilterCleared,
        ("favs", "") => Msg::FavoritesViewToggled,
        ("fav", "") => Msg::FavoriteToggled,
        ("edit", content) => Msg::EditSubmitted(content.to_string()),
        ("del" | "delete", "") => Msg::DeleteClicked,
        ("go", number) => match number.parse::<usize>() {
            Ok(n) if n > 0 => Msg::IndexSelected(n - 1),
            _ => return Some(Command::Help),
        },
        ("list", "") => Msg::ListToggled,
        ("q" | "quit" | "exit", "") => return Some(Command::Quit),
        _ => return Some(Command::Help),
    };
    Some(Command::Dispatch(msg))
}
