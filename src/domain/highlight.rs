use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Splits `text` into plain and matched runs, matching `term` case-insensitively
/// from left to right without overlap. An empty `term` never matches.
pub fn highlight<'a>(text: &'a str, term: &'a str) -> Highlights<'a> {
    Highlights {
        text,
        term,
        cursor: 0,
        pending: None,
    }
}

pub struct Highlights<'a> {
    text: &'a str,
    term: &'a str,
    cursor: usize,
    pending: Option<Range<usize>>,
}

impl<'a> Iterator for Highlights<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            return Some(Segment::Match(&self.text[range]));
        }

        if self.cursor >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.cursor..];
        match find_ignore_case(rest, self.term) {
            Some(found) => {
                let start = self.cursor + found.start;
                let end = self.cursor + found.end;
                let plain = &self.text[self.cursor..start];
                self.cursor = end;

                if plain.is_empty() {
                    Some(Segment::Match(&self.text[start..end]))
                } else {
                    self.pending = Some(start..end);
                    Some(Segment::Plain(plain))
                }
            }
            None => {
                self.cursor = self.text.len();
                Some(Segment::Plain(rest))
            }
        }
    }
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        prefix_len_ignore_case(&haystack[start..], needle).map(|len| start..start + len)
    })
}

/// Byte length of the prefix of `text` matching `prefix` char by char.
fn prefix_len_ignore_case(text: &str, prefix: &str) -> Option<usize> {
    let mut text_chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = text_chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(text_chars.next().map_or(text.len(), |(idx, _)| idx))
}

// Uppercase folding, so final and medial sigma compare equal
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}
