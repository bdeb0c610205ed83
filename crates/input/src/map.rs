//! Mapping from text lines to player commands.

use crate::types::{Color, Difficulty};

/// Player command parsed from one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a color from the palette onto the main tube
    Select(Color),
    /// Remove the top block of the main tube
    Pop,
    /// Start a new game; `None` uses the configured default difficulty
    Start(Option<Difficulty>),
    Pause,
    Resume,
    /// Pause when playing, resume when paused
    TogglePause,
    Reset,
    NextLevel,
    Shuffle,
    /// Print the current state without changing it
    Show,
    Quit,
}

/// Map one line of input to a command.
///
/// Case-insensitive; surrounding whitespace is ignored. Returns `None` for
/// blank or unrecognised lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        return None;
    }

    let command = match (head.as_str(), arg) {
        ("start" | "new", None) => Command::Start(None),
        ("start" | "new", Some(d)) => Command::Start(Some(Difficulty::from_str(d)?)),
        ("add" | "pick", Some(c)) => Command::Select(Color::from_str(c)?),
        ("pop" | "x" | "remove" | "undo", None) => Command::Pop,
        ("pause", None) => Command::Pause,
        ("resume", None) => Command::Resume,
        ("p" | "space", None) => Command::TogglePause,
        ("reset" | "end", None) => Command::Reset,
        ("next", None) => Command::NextLevel,
        ("shuffle", None) => Command::Shuffle,
        ("show" | "state", None) => Command::Show,
        ("quit" | "q" | "exit", None) => Command::Quit,
        // A bare color name (or initial) selects that color; `p` is taken by pause.
        (name, None) => Command::Select(Color::from_str(name)?),
        _ => return None,
    };
    Some(command)
}
