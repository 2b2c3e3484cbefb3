//! Worksheet naming rules.
//!
//! Source files follow the `<prefix>_<part1>_<part2>..._ROI<id>.csv`
//! convention. The worksheet name keeps the two middle segments and the ROI
//! identifier, e.g. `prefix_part1_part2_ROI123.csv` becomes
//! `part1_part2ROI123`.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

/// Maximum number of characters a worksheet name may hold.
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Name used when a filename does not follow the naming convention.
pub const FALLBACK_SHEET_NAME: &str = "InvalidSheetName";

const SEGMENT_SEPARATOR: char = '_';
const ROI_MARKER: &str = "ROI";
const MIN_SEGMENTS: usize = 4;

/// Reasons a filename cannot be turned into a worksheet name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The filename has too few underscore separated segments.
    #[error("file name '{filename}' is not in the expected format ({segments} segments, need at least 4)")]
    Malformed { filename: String, segments: usize },
}

/// Derives the worksheet name for `filename`.
///
/// The ROI part is the text after the last `ROI` marker, cut at the first
/// `.`. A filename without the marker contributes its whole stem instead.
/// The result is truncated to [`MAX_SHEET_NAME_LEN`] characters.
pub fn derive_sheet_name(filename: &str) -> Result<String, NameError> {
    let segments: Vec<&str> = filename.split(SEGMENT_SEPARATOR).collect();
    if segments.len() < MIN_SEGMENTS {
        return Err(NameError::Malformed {
            filename: filename.to_string(),
            segments: segments.len(),
        });
    }

    let middle = segments[1..3].join("_");

    let after_marker = filename
        .rsplit_once(ROI_MARKER)
        .map_or(filename, |(_, tail)| tail);
    let roi = after_marker
        .split_once('.')
        .map_or(after_marker, |(head, _)| head);

    let sheet_name = format!("{middle}{ROI_MARKER}{roi}");
    Ok(truncate_chars(&sheet_name, MAX_SHEET_NAME_LEN))
}

/// Derives the worksheet name for `filename`, falling back to
/// [`FALLBACK_SHEET_NAME`] and emitting a diagnostic when the name cannot be
/// derived.
pub fn sheet_name_or_fallback(filename: &str) -> String {
    match derive_sheet_name(filename) {
        Ok(name) => name,
        Err(error) => {
            warn!(file = filename, %error, "sheet name generation error");
            FALLBACK_SHEET_NAME.to_string()
        }
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Tracks the worksheet names already present in the workbook.
///
/// Names are compared case-insensitively, matching how spreadsheet
/// applications resolve sheet names.
#[derive(Debug, Default)]
pub struct SheetNameRegistry {
    used: HashSet<String>,
}

impl SheetNameRegistry {
    /// Returns `true` when `name` has already been claimed.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(&name.to_lowercase())
    }

    /// Records `name` as taken. Returns `false` if it was already taken.
    pub fn claim(&mut self, name: &str) -> bool {
        self.used.insert(name.to_lowercase())
    }

    /// Returns `base` if it is free, otherwise the first free `base_N`
    /// candidate. The base is shortened so that the candidate stays within
    /// [`MAX_SHEET_NAME_LEN`] characters. Nothing is claimed.
    pub fn free_candidate(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }

        let mut counter = 1;
        loop {
            let suffix = format!("_{counter}");
            let max_len = MAX_SHEET_NAME_LEN.saturating_sub(suffix.len());
            let candidate = format!("{}{suffix}", truncate_chars(base, max_len));
            if !self.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_middle_segments_and_roi() {
        assert_eq!(
            derive_sheet_name("prefix_part1_part2_ROI123.csv").unwrap(),
            "part1_part2ROI123"
        );
    }

    #[test]
    fn long_names_are_truncated_to_limit() {
        let name = derive_sheet_name("a_b_c_ROI9999999999999999999999999999.csv").unwrap();
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(name.starts_with("b_cROI999"));
    }

    #[test]
    fn too_few_segments_is_malformed() {
        let error = derive_sheet_name("onlyonepart.csv").unwrap_err();
        assert_eq!(
            error,
            NameError::Malformed {
                filename: "onlyonepart.csv".into(),
                segments: 1
            }
        );
        assert_eq!(sheet_name_or_fallback("onlyonepart.csv"), FALLBACK_SHEET_NAME);
        assert_eq!(sheet_name_or_fallback("a_b_c.csv"), FALLBACK_SHEET_NAME);
    }

    #[test]
    fn empty_input_falls_back() {
        assert!(derive_sheet_name("").is_err());
        assert_eq!(sheet_name_or_fallback(""), FALLBACK_SHEET_NAME);
    }

    #[test]
    fn uses_last_roi_marker() {
        assert_eq!(
            derive_sheet_name("ROI_x_y_ROI1_ROI42.data.csv").unwrap(),
            "x_yROI42"
        );
    }

    #[test]
    fn missing_marker_uses_whole_stem() {
        assert_eq!(
            derive_sheet_name("p_a_b_c.csv").unwrap(),
            "a_bROIp_a_b_c"
        );
    }

    #[test]
    fn truncation_counts_characters() {
        let name = derive_sheet_name("p_ä_ö_ROIéééééééééééééééééééééééééééééé.csv").unwrap();
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
    }

    #[test]
    fn registry_is_case_insensitive() {
        let mut registry = SheetNameRegistry::default();
        assert!(registry.claim("a_bROI1"));
        assert!(registry.contains("A_BROI1"));
        assert!(!registry.claim("A_bROI1"));
    }

    #[test]
    fn free_candidate_appends_counter_within_limit() {
        let mut registry = SheetNameRegistry::default();
        assert_eq!(registry.free_candidate("sheet"), "sheet");
        registry.claim("sheet");
        assert_eq!(registry.free_candidate("sheet"), "sheet_1");
        registry.claim("sheet_1");
        assert_eq!(registry.free_candidate("sheet"), "sheet_2");

        let long = "x".repeat(MAX_SHEET_NAME_LEN);
        registry.claim(&long);
        let candidate = registry.free_candidate(&long);
        assert_eq!(candidate.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(candidate.ends_with("_1"));
    }
}
