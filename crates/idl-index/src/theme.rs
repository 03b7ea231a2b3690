//! Color theme for consistent output

use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for informational messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Color for definition names
pub fn name(name: &str) -> ColoredString {
    name.bold()
}

/// Color for definition keywords
pub fn keyword(keyword: &str) -> ColoredString {
    match keyword {
        "interface" | "class" | "callback interface" => keyword.blue(),
        "dictionary" => keyword.magenta(),
        "enum" => keyword.yellow(),
        _ => keyword.normal(),
    }
}

/// Color for a partial marker
pub fn partial() -> ColoredString {
    "partial".dimmed()
}
