use serde::Serialize;

/// Outcome of a successful scan. `empty_indices` and `empty_names` are
/// index-aligned and ascending by column position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub columns: usize,
    pub rows: u64,
    pub empty_indices: Vec<usize>,
    pub empty_names: Vec<String>,
}

impl ScanReport {
    /// Builds the report from the header and the per-column "seen a value" flags.
    pub fn from_state(header: &[String], has_value: &[bool], rows: u64) -> Self {
        let (empty_indices, empty_names) = has_value
            .iter()
            .zip(header)
            .enumerate()
            .filter(|(_, (seen, _))| !**seen)
            .map(|(i, (_, name))| (i, name.clone()))
            .unzip();

        Self {
            columns: header.len(),
            rows,
            empty_indices,
            empty_names,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.empty_indices.is_empty()
    }

    pub fn empty_columns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.empty_indices
            .iter()
            .copied()
            .zip(self.empty_names.iter().map(String::as_str))
    }
}

/// How the CLI renders a report with empty columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Indices,
    Names,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_state_keeps_column_order() {
        let report = ScanReport::from_state(&header(&["a", "b", "c", "d"]), &[false, true, false, true], 7);

        assert_eq!(report.columns, 4);
        assert_eq!(report.rows, 7);
        assert_eq!(report.empty_indices, vec![0, 2]);
        assert_eq!(report.empty_names, vec!["a", "c"]);
        assert!(!report.is_clean());
        assert_eq!(report.empty_columns().collect::<Vec<_>>(), vec![(0, "a"), (2, "c")]);
    }

    #[test]
    fn test_default_report_is_clean() {
        let report = ScanReport::default();
        assert!(report.is_clean());
        assert_eq!(report.columns, 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ScanReport::from_state(&header(&["h1", "h2"]), &[true, false], 1);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "columns": 2,
                "rows": 1,
                "empty_indices": [1],
                "empty_names": ["h2"],
            })
        );
    }
}
