use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Characters that delimit words
const SEPARATORS: &str = " \t\n\r,-.!?[]';:/()<>@#$%^&*/+=/\"\\{}_";

// Build the lookup set once
static SEPARATOR_SET: Lazy<HashSet<char>> = Lazy::new(|| SEPARATORS.chars().collect());

pub fn is_separator(c: char) -> bool {
    SEPARATOR_SET.contains(&c)
}

/// Returns the maximal run of separators, or of word characters, starting at
/// byte `offset` of `line`.
///
/// `offset` must be `< line.len()` and sit on a char boundary. The result is
/// never empty for a valid offset.
pub fn next_word_or_separator(line: &str, offset: usize) -> &str {
    debug_assert!(offset < line.len(), "offset {} out of range", offset);
    debug_assert!(line.is_char_boundary(offset), "offset {} not on a char boundary", offset);

    let rest = match line.get(offset..) {
        Some(rest) => rest,
        None => return "",
    };
    let mut chars = rest.char_indices();
    let first_is_sep = match chars.next() {
        Some((_, c)) => is_separator(c),
        None => return rest,
    };
    let end = chars
        .find(|&(_, c)| is_separator(c) != first_is_sep)
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Iterator over the tokens of a single line, in order, with no gaps.
pub struct Tokens<'a> {
    line: &'a str,
    offset: usize,
}

pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { line, offset: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.offset >= self.line.len() {
            return None;
        }
        let token = next_word_or_separator(self.line, self.offset);
        self.offset += token.len();
        Some(token)
    }
}

/// True when the token is a run of separators rather than a word
pub fn is_separator_token(token: &str) -> bool {
    token.chars().next().is_some_and(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_run_stops_at_separator() {
        assert_eq!(next_word_or_separator("hello, world", 0), "hello");
        assert_eq!(next_word_or_separator("hello, world", 5), ", ");
        assert_eq!(next_word_or_separator("hello, world", 7), "world");
    }

    #[test]
    fn whole_line_of_one_kind_is_a_single_token() {
        assert_eq!(next_word_or_separator("abcdef", 0), "abcdef");
        assert_eq!(next_word_or_separator(" ,.;!? ", 0), " ,.;!? ");
        assert_eq!(tokens("abcdef").count(), 1);
    }

    #[test]
    fn tokens_partition_the_line() {
        let lines = [
            "the cat sat on the mat",
            "  leading and trailing  ",
            "don't (stop) me-now!!",
            "\"quoted\"\\back{slash}_under",
            "naïve café ~ déjà vu",
            "x",
        ];
        for line in lines {
            let joined: String = tokens(line).collect();
            assert_eq!(joined, line);
            assert!(tokens(line).all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn tokens_alternate_between_kinds() {
        let toks: Vec<&str> = tokens("a, b;c").collect();
        assert_eq!(toks, vec!["a", ", ", "b", ";", "c"]);
        let kinds: Vec<bool> = toks.iter().map(|t| is_separator_token(t)).collect();
        assert_eq!(kinds, vec![false, true, false, true, false]);
    }

    #[test]
    fn multibyte_characters_stay_in_words() {
        let toks: Vec<&str> = tokens("日本語 テキスト").collect();
        assert_eq!(toks, vec!["日本語", " ", "テキスト"]);
    }

    #[test]
    fn separator_set_contents() {
        for c in " \t\n\r,-.!?[]';:/()<>@#$%^&*+=\"\\{}_".chars() {
            assert!(is_separator(c), "{:?} should be a separator", c);
        }
        for c in "aZ09~`|é".chars() {
            assert!(!is_separator(c), "{:?} should not be a separator", c);
        }
    }
}
