use colored::Colorize;
use lobzapp::api::{CmdMessage, MessageLevel};
use lobzapp::catalog::CatalogIndex;
use lobzapp::listing::Listing;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(crate) fn print_listing(listing: &Listing) {
    if let Some(message) = &listing.empty_message {
        println!("{}", message.dimmed());
        return;
    }

    let index_width = listing
        .entries
        .last()
        .map(|e| e.index.to_string().len())
        .unwrap_or(1);

    for entry in &listing.entries {
        let idx = format!("{:>width$}", entry.index, width = index_width);
        let indent = index_width + 2;
        let lines = wrap(&entry.sentence, LINE_WIDTH.saturating_sub(indent));
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                println!("{}  {}", idx.yellow(), line);
            } else {
                println!("{:indent$}{}", "", line, indent = indent);
            }
        }
    }

    if !listing.outcomes.is_empty() {
        println!();
        println!("{}", "ABET outcomes:".bold());
        for outcome in &listing.outcomes {
            println!("  {}  {}", outcome.id.to_string().cyan(), outcome.label);
        }
    }
}

pub(crate) fn print_levels(catalog: &CatalogIndex) {
    for (id, level) in catalog.levels() {
        println!("{}  {}", id.to_string().yellow(), level.display_name().bold());
        for (verb_id, verb) in level.verbs() {
            println!("    {}  {}", verb_id.to_string().dimmed(), verb);
        }
    }
}

pub(crate) fn print_outcomes(catalog: &CatalogIndex) {
    for (id, label) in catalog.outcomes() {
        println!("{}  {}", id.to_string().cyan(), label);
    }
}

/// Greedy word wrap by display width. Words wider than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_text_is_one_line() {
        assert_eq!(wrap("a short sentence.", 40), vec!["a short sentence."]);
    }

    #[test]
    fn wrap_breaks_on_width() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_counts_display_width() {
        let lines = wrap("日本語 日本語", 8);
        assert_eq!(lines, vec!["日本語", "日本語"]);
    }

    #[test]
    fn wrap_keeps_overlong_word() {
        assert_eq!(wrap("abcdefghij x", 4), vec!["abcdefghij", "x"]);
    }
}
