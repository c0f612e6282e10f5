//! Output formatting utilities

use crate::domain::QuoteList;

/// Format the collection for display, one numbered line per quote
pub fn format_quote_list(quotes: &QuoteList) -> String {
    if quotes.is_empty() {
        return "No quotes stored\n".to_string();
    }

    let mut output = String::new();
    for (position, quote) in quotes.iter().enumerate() {
        if quote.has_author() {
            output.push_str(&format!(
                "{:>3}. {} ({})\n",
                position + 1,
                quote.text,
                quote.author
            ));
        } else {
            output.push_str(&format!("{:>3}. {}\n", position + 1, quote.text));
        }
    }
    output
}
