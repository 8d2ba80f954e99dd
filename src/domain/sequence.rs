// Sequential numbering of filtered rows

/// Pair each item with its 1-based position in the sequence it is given.
///
/// Callers filter first and number afterwards, so numbers stay contiguous
/// whatever the filter dropped.
pub fn number_from_one<I>(items: I) -> impl Iterator<Item = (usize, I::Item)>
where
    I: IntoIterator,
{
    (1..).zip(items)
}

/// Zero-padded two-digit sequence label ("01", "02", ... "10", "100").
pub fn sequence_label(number: usize) -> String {
    format!("{:02}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_one() {
        let numbered: Vec<_> = number_from_one(["a", "b", "c"]).collect();
        assert_eq!(numbered, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_numbering_after_filter_is_contiguous() {
        let positions = [2, 5, 9, 10];
        let numbers: Vec<_> = number_from_one(positions.iter().filter(|p| **p != 5))
            .map(|(n, _)| n)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(number_from_one(Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn test_sequence_label() {
        assert_eq!(sequence_label(1), "01");
        assert_eq!(sequence_label(9), "09");
        assert_eq!(sequence_label(13), "13");
        assert_eq!(sequence_label(100), "100");
    }
}
