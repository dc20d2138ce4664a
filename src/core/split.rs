//! Train/test splitting
//!
//! Deterministic randomized partition of a dataset into disjoint train and
//! test subsets sharing the source header.

use crate::core::Dataset;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Splits a dataset into (train, test) subsets
///
/// Rows are shuffled with a Fisher-Yates shuffle driven by an RNG seeded from
/// `seed`, so the same input, fraction and seed always produce the same
/// partition. The test subset holds `ceil(rows * test_fraction)` rows, taken
/// from the tail of the shuffled order; the train subset holds the rest.
///
/// # Arguments
/// * `dataset` - Dataset to partition (consumed)
/// * `test_fraction` - Proportion of rows routed to the test subset, e.g. 0.20
/// * `seed` - Seed for the shuffle RNG
///
/// # Returns
/// A `(train, test)` pair. Their rows are disjoint and together contain every
/// source row exactly once.
pub fn train_test_split(dataset: Dataset, test_fraction: f64, seed: u64) -> (Dataset, Dataset) {
    let Dataset { header, mut rows } = dataset;

    let total = rows.len();
    let test_size = ((total as f64) * test_fraction).ceil() as usize;
    let test_size = test_size.min(total);

    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let test_rows = rows.split_off(total - test_size);

    tracing::debug!(
        train_rows = rows.len(),
        test_rows = test_rows.len(),
        test_fraction,
        seed,
        "Dataset split into train and test subsets"
    );

    let train = Dataset::new(header.clone(), rows);
    let test = Dataset::new(header, test_rows);
    (train, test)
}
