//! First-match field splitting for the fixed seven-column schema.
//!
//! Not a general CSV reader: each field is taken by partitioning on the first
//! comma, and only the address field gets quote treatment. The quote scan
//! assumes at most one quoted segment per address, a single quote style, and
//! no nesting; inputs that break those assumptions are reported as drops
//! rather than silently mis-split.

use crate::record::DropReason;

pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Everything up to the first comma, consuming the comma. `name` labels
    /// the field for short-row diagnostics.
    pub fn field(&mut self, name: &'static str) -> Result<&'a str, DropReason> {
        match self.rest.split_once(',') {
            Some((token, rest)) => {
                self.rest = rest;
                Ok(token)
            }
            None => Err(DropReason::ShortRow(name)),
        }
    }

    /// The address field. A quote character in the naive token means the
    /// comma split broke a quoted segment: scan ahead to the matching closing
    /// quote, reattach the scanned text, and resume one character past it
    /// (the comma the naive split consumed is not restored).
    pub fn address(&mut self) -> Result<String, DropReason> {
        let token = self.field("address")?;
        let quote = if token.contains('"') {
            '"'
        } else if token.contains('\'') {
            '\''
        } else {
            return Ok(token.to_string());
        };
        match self.rest.split_once(quote) {
            Some((tail, rest)) => {
                let mut address = String::with_capacity(token.len() + tail.len() + 1);
                address.push_str(token);
                address.push_str(tail);
                address.push(quote);
                // step over the comma that follows the closing quote
                let mut chars = rest.chars();
                chars.next();
                self.rest = chars.as_str();
                Ok(address)
            }
            None => Err(DropReason::UnterminatedQuote(quote)),
        }
    }

    /// Whatever is left, untouched. This is the notes remainder.
    pub fn remainder(self) -> &'a str {
        self.rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_comma() {
        let mut tok = Tokenizer::new("a,b,c");
        assert_eq!(tok.field("first"), Ok("a"));
        assert_eq!(tok.field("second"), Ok("b"));
        assert_eq!(tok.remainder(), "c");
    }

    #[test]
    fn missing_comma_is_a_short_row() {
        let mut tok = Tokenizer::new("only");
        assert_eq!(tok.field("zipcode"), Err(DropReason::ShortRow("zipcode")));
    }

    #[test]
    fn reattaches_double_quoted_segment() {
        let mut tok = Tokenizer::new("\"123 4th St, Apt 5\",94121,rest");
        assert_eq!(tok.address(), Ok("\"123 4th St Apt 5\"".to_string()));
        assert_eq!(tok.field("zipcode"), Ok("94121"));
        assert_eq!(tok.remainder(), "rest");
    }

    #[test]
    fn reattaches_single_quoted_segment() {
        let mut tok = Tokenizer::new("'5 Cool Pl, Unit 2',10001,x");
        assert_eq!(tok.address(), Ok("'5 Cool Pl Unit 2'".to_string()));
        assert_eq!(tok.field("zipcode"), Ok("10001"));
    }

    #[test]
    fn unquoted_address_passes_through() {
        let mut tok = Tokenizer::new("123 Main St,94121,x");
        assert_eq!(tok.address(), Ok("123 Main St".to_string()));
        assert_eq!(tok.field("zipcode"), Ok("94121"));
    }

    #[test]
    fn unterminated_quote_is_reported() {
        let mut tok = Tokenizer::new("\"123 4th St, Apt 5,94121,x");
        assert_eq!(tok.address(), Err(DropReason::UnterminatedQuote('"')));
    }
}
