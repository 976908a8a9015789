//! In-place counting sort over `i32` slices.
//!
//! Counting sort needs non-negative bucket indices, so negative and
//! non-negative values are tallied into separate bucket arrays: negatives
//! keyed by magnitude, positives keyed by value, with the zero tally held in
//! positive slot 0. Both arrays start small and are reallocated to exactly
//! `index + 1` slots as larger magnitudes show up, so memory follows the
//! largest magnitude actually seen rather than the full value range.
//!
//! Cost is O(n + maxAbsoluteValue) in time and O(maxAbsoluteValue) in
//! memory. That makes the sort unsuitable for inputs with very large
//! magnitudes; the limit is inherent to the algorithm, not a defect.

/// A growable array of occurrence counts keyed by a non-negative index.
///
/// Kept as an index-addressed array rather than a map: the write-back pass
/// depends on iterating bucket indices in order.
struct CountArray(Box<[usize]>);

impl CountArray {
    fn with_len(len: usize) -> CountArray {
        CountArray(vec![0; len].into_boxed_slice())
    }

    /// Increments the count at `index`, reallocating to exactly `index + 1`
    /// slots when the array is too short.
    fn tally(&mut self, index: usize) {
        if index >= self.0.len() {
            let mut grown = vec![0; index + 1].into_boxed_slice();
            grown[..self.0.len()].copy_from_slice(&self.0);
            self.0 = grown;
        }
        self.0[index] += 1;
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn count(&self, index: usize) -> usize {
        self.0[index]
    }
}

/// Sorts `values` ascending, in place.
///
/// One tally pass buckets every value, then the write-back emits negative
/// magnitudes from largest to smallest followed by non-negative values from
/// smallest to largest, overwriting `values` in emission order. The result
/// holds exactly the input multiset; insertion order among duplicates is not
/// tracked beyond their quantity.
pub fn counting_sort(values: &mut [i32]) {
    let mut negatives = CountArray::with_len(2);
    let mut positives = CountArray::with_len(1);
    for &value in values.iter() {
        if value < 0 {
            // unsigned_abs keeps i32::MIN from overflowing on negation.
            negatives.tally(value.unsigned_abs() as usize);
        } else {
            // Zero lands in positive slot 0.
            positives.tally(value as usize);
        }
    }

    let mut write = 0;
    for magnitude in (1..negatives.len()).rev() {
        for _ in 0..negatives.count(magnitude) {
            values[write] = (magnitude as i32).wrapping_neg();
            write += 1;
        }
    }
    for value in 0..positives.len() {
        for _ in 0..positives.count(value) {
            values[write] = value as i32;
            write += 1;
        }
    }
    debug_assert_eq!(write, values.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mixed_signs() {
        let mut values = [3, -1, 0, -2, 3];
        counting_sort(&mut values);
        assert_eq!(values, [-2, -1, 0, 3, 3]);
    }

    #[test]
    fn test_sort_empty() {
        let mut values: [i32; 0] = [];
        counting_sort(&mut values);
        assert_eq!(values, []);
    }

    #[test]
    fn test_sort_single_element() {
        let mut values = [-7];
        counting_sort(&mut values);
        assert_eq!(values, [-7]);
    }

    #[test]
    fn test_sort_all_negative() {
        let mut values = [-3, -30, -1, -3];
        counting_sort(&mut values);
        assert_eq!(values, [-30, -3, -3, -1]);
    }

    #[test]
    fn test_sort_all_zero() {
        let mut values = [0, 0, 0];
        counting_sort(&mut values);
        assert_eq!(values, [0, 0, 0]);
    }

    #[test]
    fn test_sort_already_sorted() {
        let mut values = [-2, -1, 0, 1, 2];
        counting_sort(&mut values);
        assert_eq!(values, [-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut values = [5, 5, -5, -5, 0, 5];
        counting_sort(&mut values);
        assert_eq!(values, [-5, -5, 0, 5, 5, 5]);
    }

    #[test]
    fn test_sort_grows_buckets_past_initial_lengths() {
        // Positive buckets start at length 1, negative at length 2.
        let mut values = [1000, -999, 2, -1];
        counting_sort(&mut values);
        assert_eq!(values, [-999, -1, 2, 1000]);
    }

    #[test]
    fn test_sort_matches_std_sort_on_random_data() {
        for _ in 0..20 {
            let len = fastrand::usize(0..200);
            let mut values: Vec<i32> =
                (0..len).map(|_| fastrand::i32(-300..=300)).collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            counting_sort(&mut values);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn test_sort_preserves_multiset() {
        let mut values: Vec<i32> = (0..500).map(|_| fastrand::i32(-50..=50)).collect();
        let mut input_tally = std::collections::HashMap::new();
        for &v in &values {
            *input_tally.entry(v).or_insert(0usize) += 1;
        }
        counting_sort(&mut values);
        let mut output_tally = std::collections::HashMap::new();
        for &v in &values {
            *output_tally.entry(v).or_insert(0usize) += 1;
        }
        assert_eq!(input_tally, output_tally);
        assert!(values.is_sorted());
    }
}
