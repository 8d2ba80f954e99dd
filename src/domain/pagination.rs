// Print pagination of equipment tables
use serde::{Deserialize, Serialize};

/// One printed page of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub rows: Vec<T>,
}

/// Rows that fit on one A4 page, per table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RowsPerPage {
    /// Tables with an observation column use taller rows.
    pub with_observation: usize,
    pub default: usize,
}

impl Default for RowsPerPage {
    fn default() -> Self {
        Self {
            with_observation: 13,
            default: 15,
        }
    }
}

/// Split rows into consecutive pages of `page_size`.
///
/// A zero page size puts everything on one page, and an empty input still
/// yields one empty page so headers and footers get laid out.
pub fn paginate<T: Clone>(rows: &[T], page_size: usize) -> Vec<Page<T>> {
    if page_size == 0 || rows.is_empty() {
        return vec![Page {
            number: 1,
            rows: rows.to_vec(),
        }];
    }

    rows.chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            rows: chunk.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(pages: &[Page<u32>]) -> Vec<u32> {
        pages.iter().flat_map(|p| p.rows.iter().copied()).collect()
    }

    #[test]
    fn test_even_split() {
        let rows: Vec<u32> = (1..=30).collect();
        let pages = paginate(&rows, 15);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.rows.len() == 15));
        assert_eq!(flatten(&pages), rows);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let rows: Vec<u32> = (1..=28).collect();
        let pages = paginate(&rows, 13);
        let sizes: Vec<_> = pages.iter().map(|p| p.rows.len()).collect();
        assert_eq!(sizes, vec![13, 13, 2]);
        let numbers: Vec<_> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(flatten(&pages), rows);
    }

    #[test]
    fn test_empty_input_yields_one_empty_page() {
        let pages = paginate::<u32>(&[], 13);
        assert_eq!(pages, vec![Page { number: 1, rows: vec![] }]);
    }

    #[test]
    fn test_zero_page_size_keeps_everything_together() {
        let rows: Vec<u32> = (1..=40).collect();
        let pages = paginate(&rows, 0);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].rows, rows);
    }

    #[test]
    fn test_default_rows_per_page() {
        let rows = RowsPerPage::default();
        assert_eq!(rows.with_observation, 13);
        assert_eq!(rows.default, 15);
    }
}
