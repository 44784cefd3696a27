//! Parser for the pipe-delimited statement format returned by the model.
//!
//! The expected shape is `(statement @ True) | (statement @ False) | ...`.
//! Parentheses and surrounding whitespace are optional. Items that do not
//! contain exactly one `@` are dropped rather than failing the whole batch.

use crate::models::domain::Fact;

const ITEM_SEPARATOR: char = '|';
const VALUE_SEPARATOR: char = '@';

/// Parses a raw model response into facts, in input order.
///
/// Only a token equal to `true` (ignoring case and surrounding whitespace)
/// marks a statement as true. Anything else, including an empty token, is false.
pub fn parse_facts(raw: &str) -> Vec<Fact> {
    raw.trim()
        .split(ITEM_SEPARATOR)
        .filter_map(parse_item)
        .collect()
}

fn parse_item(item: &str) -> Option<Fact> {
    let mut parts = item.split(VALUE_SEPARATOR);
    let (statement, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(statement), Some(token), None) => (statement, token),
        _ => {
            log::debug!("Skipping malformed fact item: {:?}", item);
            return None;
        }
    };

    let statement = statement.trim().trim_start_matches('(').trim();
    let token = token.trim().trim_end_matches(')').trim();

    Some(Fact::new(statement, parse_truth_token(token)))
}

fn parse_truth_token(token: &str) -> bool {
    token.eq_ignore_ascii_case("true")
}
