use std::collections::HashMap;

/// 単語 → 出現回数
pub type WordCount = HashMap<String, usize>;

/// Top-N に選ばれた単語とその出現回数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEntry {
    pub word: String,
    pub count: usize,
}

/// 選択集合の最小・最大出現回数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

/// サイズクラス付きの単語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketedWord {
    pub entry: SelectedEntry,
    pub bucket: u32,
}

/// Top-N セレクタの出力 (出現回数の降順)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub entries: Vec<SelectedEntry>,
    pub range: CountRange,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries re-sorted by word, byte-wise on the lowercase form.
    pub fn alphabetical(&self) -> Vec<&SelectedEntry> {
        let mut sorted: Vec<&SelectedEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.word.cmp(&b.word));
        sorted
    }
}
