// ============================================================
// Layer 3 — Partition Domain Types
// ============================================================
// A dataset image belongs to exactly one of three partitions:
//
//   Train — used to fit model weights
//   Val   — held out while training (Flickr8k "dev" list)
//   Test  — held out for the final evaluation
//
// Membership comes from three externally supplied lists of bare
// filenames. The lists are expected to be disjoint but this is
// not enforced; a filename listed more than once resolves with
// the fixed precedence test > val > train.

use std::{collections::HashSet, fmt, path::PathBuf};

/// One of the three dataset partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Val,
    Test,
}

impl Partition {
    /// Processing order used by the pipeline
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Val, Partition::Test];

    /// Name of the output sub-directory for this partition
    pub fn dir_name(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Val   => "val",
            Partition::Test  => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The three membership sets, keyed by bare filename (e.g. `"123_abc.jpg"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSets {
    pub train: HashSet<String>,
    pub val:   HashSet<String>,
    pub test:  HashSet<String>,
}

impl PartitionSets {
    pub fn new(train: HashSet<String>, val: HashSet<String>, test: HashSet<String>) -> Self {
        Self { train, val, test }
    }

    /// Resolve a bare filename to its partition.
    ///
    /// Test is checked first, then validation, then training.
    /// Returns `None` when the filename is in none of the lists.
    pub fn classify(&self, filename: &str) -> Option<Partition> {
        if self.test.contains(filename) {
            Some(Partition::Test)
        } else if self.val.contains(filename) {
            Some(Partition::Val)
        } else if self.train.contains(filename) {
            Some(Partition::Train)
        } else {
            None
        }
    }
}

/// Full image paths grouped by partition, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions {
    pub train: Vec<PathBuf>,
    pub val:   Vec<PathBuf>,
    pub test:  Vec<PathBuf>,

    /// Paths that matched none of the membership lists
    pub dropped: usize,
}

impl Partitions {
    pub fn get(&self, partition: Partition) -> &[PathBuf] {
        match partition {
            Partition::Train => &self.train,
            Partition::Val   => &self.val,
            Partition::Test  => &self.test,
        }
    }

    pub fn push(&mut self, partition: Partition, path: PathBuf) {
        match partition {
            Partition::Train => self.train.push(path),
            Partition::Val   => self.val.push(path),
            Partition::Test  => self.test.push(path),
        }
    }

    /// Number of paths assigned to some partition
    pub fn assigned(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_precedence_test_over_val_over_train() {
        let sets = PartitionSets::new(
            set(&["a.jpg", "b.jpg", "c.jpg"]),
            set(&["a.jpg", "b.jpg"]),
            set(&["a.jpg"]),
        );
        assert_eq!(sets.classify("a.jpg"), Some(Partition::Test));
        assert_eq!(sets.classify("b.jpg"), Some(Partition::Val));
        assert_eq!(sets.classify("c.jpg"), Some(Partition::Train));
        assert_eq!(sets.classify("d.jpg"), None);
    }

    #[test]
    fn test_dir_names() {
        let names: Vec<String> = Partition::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["train", "val", "test"]);
    }
}
