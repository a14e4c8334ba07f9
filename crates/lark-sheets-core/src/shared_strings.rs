//! The shared-string table: deduplicated plain and rich-text values

use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use crate::rich_text::TextRun;

/// One entry in the shared-string table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SharedStringEntry {
    /// A plain string value
    Plain(String),
    /// A rich-text value: a sequence of formatted runs
    Rich(Vec<TextRun>),
}

impl SharedStringEntry {
    /// The entry's text content; for rich entries, run texts concatenated in
    /// order with formatting dropped.
    pub fn text(&self) -> String {
        match self {
            SharedStringEntry::Plain(s) => s.clone(),
            SharedStringEntry::Rich(runs) => {
                runs.iter().map(|r| r.text.as_str()).collect()
            }
        }
    }
}

/// The workbook's shared-string table.
///
/// Entries are deduplicated on insert and keep their 0-based id for the
/// lifetime of the table; nothing is ever removed or reordered, since cells
/// hold ids into this list. A plain string and a rich value that happens to
/// concatenate to the same text are distinct entries.
///
/// The table also tracks how many cell references have been handed out, one
/// increment per insert call, which is what the serialized `count` attribute
/// reports (`uniqueCount` is the entry count).
#[derive(Debug, Default)]
pub struct SharedStrings {
    entries: Vec<SharedStringEntry>,
    index: AHashMap<u64, u32>,
    references: u64,
}

fn entry_key(entry: &SharedStringEntry) -> u64 {
    let mut hasher = ahash::AHasher::default();
    entry.hash(&mut hasher);
    hasher.finish()
}

impl SharedStrings {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a plain string, returning its id
    pub fn add<S: Into<String>>(&mut self, text: S) -> u32 {
        self.add_entry(SharedStringEntry::Plain(text.into()))
    }

    /// Intern a rich-text value, returning its id
    pub fn add_rich(&mut self, runs: Vec<TextRun>) -> u32 {
        self.add_entry(SharedStringEntry::Rich(runs))
    }

    fn add_entry(&mut self, entry: SharedStringEntry) -> u32 {
        self.references += 1;
        let key = entry_key(&entry);
        if let Some(&id) = self.index.get(&key) {
            if self.entries[id as usize] == entry {
                return id;
            }
        }
        self.push_inner(key, entry)
    }

    /// Append an entry unconditionally (decode path).
    ///
    /// Source tables are trusted to be deduplicated already; appending keeps
    /// the file's ids valid even when they are not.
    pub fn push_entry(&mut self, entry: SharedStringEntry) -> u32 {
        let key = entry_key(&entry);
        self.push_inner(key, entry)
    }

    fn push_inner(&mut self, key: u64, entry: SharedStringEntry) -> u32 {
        let id = self.entries.len() as u32;
        self.index.entry(key).or_insert(id);
        self.entries.push(entry);
        id
    }

    /// The entry with the given id
    pub fn get(&self, id: u32) -> Option<&SharedStringEntry> {
        self.entries.get(id as usize)
    }

    /// The text content of the entry with the given id
    pub fn text(&self, id: u32) -> Option<String> {
        self.get(id).map(SharedStringEntry::text)
    }

    /// Number of unique entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total references handed out by insert calls
    pub fn references(&self) -> u64 {
        self.references
    }

    /// Set the tracked reference count (decode path)
    pub fn set_references(&mut self, references: u64) {
        self.references = references;
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedStringEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::{BoolProperty, RunProperties};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_deduplicates() {
        let mut sst = SharedStrings::new();
        assert_eq!(sst.add("Foo"), 0);
        assert_eq!(sst.add("Bar"), 1);
        assert_eq!(sst.add("Foo"), 0);
        assert_eq!(sst.len(), 2);
        assert_eq!(sst.references(), 3);
    }

    #[test]
    fn test_ids_are_stable() {
        let mut sst = SharedStrings::new();
        let a = sst.add("alpha");
        let b = sst.add("beta");
        sst.add("gamma");
        assert_eq!(sst.text(a).as_deref(), Some("alpha"));
        assert_eq!(sst.text(b).as_deref(), Some("beta"));
        assert_eq!(sst.get(9), None);
    }

    #[test]
    fn test_rich_text_concatenation() {
        let mut bold = RunProperties::new();
        bold.bold = BoolProperty::TRUE;

        let mut sst = SharedStrings::new();
        let id = sst.add_rich(vec![
            TextRun::plain("Hello "),
            TextRun::formatted("world", bold),
        ]);
        assert_eq!(sst.text(id).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_plain_and_rich_are_distinct_entries() {
        let mut sst = SharedStrings::new();
        let plain = sst.add("Hi");
        let rich = sst.add_rich(vec![TextRun::plain("Hi")]);
        assert_ne!(plain, rich);
        assert_eq!(sst.len(), 2);

        // Same rich value interns to the same id.
        assert_eq!(sst.add_rich(vec![TextRun::plain("Hi")]), rich);
    }

    #[test]
    fn test_rich_dedup_is_sensitive_to_formatting() {
        let mut italic = RunProperties::new();
        italic.italic = BoolProperty::TRUE;

        let mut sst = SharedStrings::new();
        let a = sst.add_rich(vec![TextRun::plain("x")]);
        let b = sst.add_rich(vec![TextRun::formatted("x", italic)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_push_entry_skips_dedup_and_reference_tracking() {
        let mut sst = SharedStrings::new();
        sst.push_entry(SharedStringEntry::Plain("dup".to_string()));
        sst.push_entry(SharedStringEntry::Plain("dup".to_string()));
        assert_eq!(sst.len(), 2);
        assert_eq!(sst.references(), 0);

        // Later interning reuses the first occurrence.
        assert_eq!(sst.add("dup"), 0);
    }
}
