/// One word together with its final occurrence count. Never mutated
/// after insertion into a queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankOrder {
    HighestFirst,
    LowestFirst,
}

/// Fixed-capacity queue retaining the best entries seen so far, kept
/// sorted best-first. Inserting past capacity evicts the entry at the
/// iteration end, i.e. the worst-ranked resident. Equal counts keep
/// their insertion order; which of them survives at the boundary is an
/// artifact of that order, not a contract.
#[derive(Debug, Clone)]
pub struct BoundedTopK {
    order: RankOrder,
    capacity: usize,
    entries: Vec<WordCount>,
}

impl BoundedTopK {
    /// A queue that keeps the `capacity` entries with the highest counts.
    #[must_use]
    pub const fn highest(capacity: usize) -> Self {
        Self {
            order: RankOrder::HighestFirst,
            capacity,
            entries: Vec::new(),
        }
    }

    /// A queue that keeps the `capacity` entries with the lowest counts.
    #[must_use]
    pub const fn lowest(capacity: usize) -> Self {
        Self {
            order: RankOrder::LowestFirst,
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, entry: WordCount) {
        let position = self
            .entries
            .partition_point(|resident| !self.ranks_before(&entry, resident));
        self.entries.insert(position, entry);
        self.entries.truncate(self.capacity);
    }

    fn ranks_before(&self, a: &WordCount, b: &WordCount) -> bool {
        match self.order {
            RankOrder::HighestFirst => a.count > b.count,
            RankOrder::LowestFirst => a.count < b.count,
        }
    }

    /// Resident words in best-first order.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.word.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
