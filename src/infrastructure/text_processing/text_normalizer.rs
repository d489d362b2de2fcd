use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::domain::Page;

static HYPHEN_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<prefix>\w)-[^\S\n]*\n[^\S\n]*(?P<suffix>\w)").unwrap()
});

const SENTENCE_TERMINATORS: [char; 5] = ['.', ':', ';', '?', '!'];

// `3\u{2044}4` is what NFKC makes of the `¾` glyph some PDF fonts use for bullets.
const LIST_MARKERS: &[&str] = &[
    "\u{2212}", "\u{2022}", "-", "*", "3\u{2044}4", "1.", "2.", "3.", "4.", "5.", "6.", "7.",
    "8.", "9.", "a)", "b)", "c)", "d)", "e)",
];

/// Rebuilds paragraph-coherent lines from raw page text.
///
/// Soft-wrapped lines are joined with single spaces until a blank line, a
/// sentence terminator, or the start of a list item. Hyphenated line wraps
/// are merged into one word and runs of blank lines collapse to one. Running
/// the pass on its own output returns it unchanged.
pub fn normalize_page_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let joined = join_hyphenated_breaks(&folded);

    let mut output: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for line in joined.lines() {
        let line = collapse_internal_whitespace(line.trim());

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut output);
            if output.last().is_some_and(|last| !last.is_empty()) {
                output.push(String::new());
            }
            continue;
        }

        if starts_list_item(&line) {
            flush_paragraph(&mut paragraph, &mut output);
        }

        let ends_sentence = line.ends_with(SENTENCE_TERMINATORS);
        paragraph.push(line);

        if ends_sentence {
            flush_paragraph(&mut paragraph, &mut output);
        }
    }

    flush_paragraph(&mut paragraph, &mut output);

    while output.last().is_some_and(|last| last.is_empty()) {
        output.pop();
    }

    output.join("\n")
}

/// Normalizes each raw page and drops pages left without text. Page numbers
/// follow the 1-based position in `raw_pages`, so a dropped page leaves a gap.
pub fn normalize_pages<I, S>(raw_pages: I) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_pages
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = normalize_page_text(raw.as_ref());
            if text.is_empty() {
                None
            } else {
                Some(Page::new((index + 1) as u32, text))
            }
        })
        .collect()
}

fn join_hyphenated_breaks(text: &str) -> String {
    // Consecutive wraps share a character between matches, so repeat until stable.
    let mut joined = text.to_string();
    while HYPHEN_NEWLINE.is_match(&joined) {
        joined = HYPHEN_NEWLINE
            .replace_all(&joined, "$prefix$suffix")
            .into_owned();
    }
    joined
}

fn starts_list_item(line: &str) -> bool {
    LIST_MARKERS.iter().any(|marker| line.starts_with(marker))
}

fn flush_paragraph(paragraph: &mut Vec<String>, output: &mut Vec<String>) {
    if !paragraph.is_empty() {
        output.push(paragraph.join(" "));
        paragraph.clear();
    }
}

fn collapse_internal_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out
}
