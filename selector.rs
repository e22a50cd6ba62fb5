use std::cmp::Ordering;

use itertools::Itertools;

use crate::cloud_types::{CountRange, SelectedEntry, Selection, WordCount};

/// Count descending, then word ascending so cutoffs inside a tie are stable.
fn by_count_then_word(a: &(&String, &usize), b: &(&String, &usize)) -> Ordering {
    b.1.cmp(a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the `n` most frequent words of `table`.
///
/// `range.max` is the count of the first entry and `range.min` the count of
/// the last one; a single entry gives `min == max`, an empty selection `0/0`.
pub fn select_top(table: &WordCount, n: usize) -> Selection {
    let entries: Vec<SelectedEntry> = table
        .iter()
        .sorted_by(by_count_then_word)
        .take(n)
        .map(|(word, &count)| SelectedEntry { word: word.clone(), count })
        .collect();

    let range = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => CountRange { min: last.count, max: first.count },
        _ => CountRange::default(),
    };
    Selection { entries, range }
}
