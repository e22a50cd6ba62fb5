use crate::cloud_types::{BucketedWord, CountRange, Selection};

/// Number of equal steps the count range is divided into
pub const BUCKET_COUNT: u32 = 37;
/// Class number of the smallest font (`f11`)
pub const FIRST_CLASS: u32 = 11;
/// Class number reserved for counts above every threshold (`f48`)
pub const TOP_CLASS: u32 = FIRST_CLASS + BUCKET_COUNT;

/// Map `count` into a size class by linear interpolation over `range`.
///
/// The first threshold `min + x * step` (x in 1..=36) that `count` does not
/// exceed gives class `x + 10`. A count above all of them, which only the
/// maximum reaches, gets [`TOP_CLASS`]. When `min == max` the step is zero
/// and every count lands in [`FIRST_CLASS`].
pub fn bucket_for(count: usize, range: CountRange) -> u32 {
    let min = range.min as f64;
    let step = (range.max as f64 - min) / f64::from(BUCKET_COUNT);
    let count = count as f64;

    (1..BUCKET_COUNT)
        .find(|&x| count <= min + f64::from(x) * step)
        .map_or(TOP_CLASS, |x| x + FIRST_CLASS - 1)
}

/// Annotate the selection with size classes, in alphabetical order.
pub fn bucketize(selection: &Selection) -> Vec<BucketedWord> {
    selection
        .alphabetical()
        .into_iter()
        .map(|entry| BucketedWord {
            entry: entry.clone(),
            bucket: bucket_for(entry.count, selection.range),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::count_text;
    use crate::selector::select_top;

    fn range(min: usize, max: usize) -> CountRange {
        CountRange { min, max }
    }

    #[test]
    fn maximum_gets_top_class() {
        for (min, max) in [(1, 2), (1, 3), (0, 37), (5, 1000), (1, 38), (2, 100_000)] {
            assert_eq!(bucket_for(max, range(min, max)), TOP_CLASS, "range {}..{}", min, max);
        }
    }

    #[test]
    fn minimum_gets_first_class() {
        for (min, max) in [(1, 2), (1, 3), (0, 37), (5, 1000)] {
            assert_eq!(bucket_for(min, range(min, max)), FIRST_CLASS);
        }
    }

    #[test]
    fn flat_range_is_all_first_class() {
        assert_eq!(bucket_for(4, range(4, 4)), FIRST_CLASS);
        assert_eq!(bucket_for(0, range(0, 0)), FIRST_CLASS);
    }

    #[test]
    fn classes_grow_with_count() {
        let r = range(0, 370);
        let classes: Vec<u32> = (0..=370).map(|c| bucket_for(c, r)).collect();
        assert!(classes.windows(2).all(|w| w[0] <= w[1]));
        // 37 * 10 steps: count 10 is exactly the first threshold
        assert_eq!(bucket_for(10, r), 11);
        assert_eq!(bucket_for(11, r), 12);
        assert_eq!(bucket_for(360, r), 46);
        assert_eq!(bucket_for(361, r), TOP_CLASS);
    }

    #[test]
    fn scenario_buckets() {
        let table = count_text("the cat sat on the mat the cat ran");
        let words = bucketize(&select_top(&table, 3));
        let got: Vec<(&str, u32)> = words.iter().map(|w| (w.entry.word.as_str(), w.bucket)).collect();
        // step = 2/37; count 2 passes threshold x = 19 (1 + 19*2/37 > 2)
        assert_eq!(got, vec![("cat", 29), ("mat", FIRST_CLASS), ("the", TOP_CLASS)]);
    }

    #[test]
    fn identical_counts_share_first_class() {
        let words = bucketize(&select_top(&count_text("a b c"), 3));
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|w| w.bucket == FIRST_CLASS));
    }

    #[test]
    fn single_word_is_first_class() {
        let words = bucketize(&select_top(&count_text("solo solo"), 1));
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].bucket, FIRST_CLASS);
    }
}
