// ============================================================
// Layer 4 — Train / Validation / Test Splitter
// ============================================================
// Assigns every scanned image path to the partition its bare
// filename is listed in.
//
//   /data/Flicker8k_Dataset/123_abc.jpg
//                           └─────┬────┘
//                        looked up in test, then val, then train
//
// Paths listed nowhere are dropped. Each output list keeps the
// input order, so a sorted scan gives sorted partitions.
//
// Why no shuffle?
//   The published Flickr8k split (6000 train / 1000 dev /
//   1000 test) is what results are reported against. The lists
//   fully determine membership, so two runs always produce the
//   same partitions.
//
// Why does test win a tie?
//   If a filename is listed twice by mistake, putting it in the
//   held-out set keeps it from leaking into training. The order
//   of checks is test, then val, then train.
//
// Reference: Hodosh et al. (2013) Framing Image Description as
//            a Ranking Task (Flickr8k)

use std::path::{Path, PathBuf};

use crate::domain::partition::{PartitionSets, Partitions};

/// Split `paths` into train / val / test using `sets`.
pub fn partition_images<I>(paths: I, sets: &PartitionSets) -> Partitions
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut out = Partitions::default();

    for path in paths {
        let Some(name) = bare_filename(&path) else {
            out.dropped += 1;
            continue;
        };

        match sets.classify(&name) {
            Some(partition) => out.push(partition, path),
            None => {
                tracing::debug!("'{}' is not listed in any partition", path.display());
                out.dropped += 1;
            }
        }
    }

    tracing::debug!(
        "Partitioned images: {} train, {} val, {} test, {} unlisted",
        out.train.len(),
        out.val.len(),
        out.test.len(),
        out.dropped,
    );

    out
}

/// Last path segment, e.g. `"dir/123_abc.jpg"` → `"123_abc.jpg"`
fn bare_filename(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
