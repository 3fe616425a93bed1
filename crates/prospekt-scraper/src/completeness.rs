//! Completeness reporting for extracted brochures.
//!
//! Incomplete records are still written out; the notice is informational.

use prospekt_core::BrochureRecord;

pub const NOTICE_HEADER: &str =
    "Notice: Not everything is complete. There might be missing or incorrect data.";

/// One field of one record holding a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteField {
    pub shop_name: String,
    pub field: &'static str,
}

impl std::fmt::Display for IncompleteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shop '{}': '{}' is incomplete or missing.",
            self.shop_name, self.field
        )
    }
}

/// Every sentinel-valued field across `records`, in record then field order.
#[must_use]
pub fn find_incomplete_fields(records: &[BrochureRecord]) -> Vec<IncompleteField> {
    records
        .iter()
        .flat_map(|record| {
            record
                .missing_fields()
                .into_iter()
                .map(move |field| IncompleteField {
                    shop_name: record.shop_name.clone(),
                    field,
                })
        })
        .collect()
}

/// Builds the operator notice: [`NOTICE_HEADER`] followed by one line per
/// incomplete field. Empty when every field of every record is filled.
#[must_use]
pub fn check_completeness(records: &[BrochureRecord]) -> String {
    let issues = find_incomplete_fields(records);
    if issues.is_empty() {
        return String::new();
    }

    let mut notice = String::from(NOTICE_HEADER);
    for issue in &issues {
        notice.push('\n');
        notice.push_str(&issue.to_string());
    }
    notice
}

#[cfg(test)]
mod tests {
    use prospekt_core::UNKNOWN;

    use super::*;

    fn record(shop_name: &str) -> BrochureRecord {
        BrochureRecord {
            title: "Wochenangebote".to_string(),
            thumbnail: "https://img.example.com/logo.png".to_string(),
            shop_name: shop_name.to_string(),
            valid_from: "2024-03-01".to_string(),
            valid_to: "2024-03-15".to_string(),
            parsed_time: "2024-03-02 08:15:00".to_string(),
        }
    }

    #[test]
    fn complete_records_produce_empty_notice() {
        assert_eq!(check_completeness(&[record("Kaufland"), record("Globus")]), "");
        assert_eq!(check_completeness(&[]), "");
    }

    #[test]
    fn empty_thumbnail_produces_single_issue_line() {
        let mut flagged = record("Globus");
        flagged.thumbnail = String::new();
        let notice = check_completeness(&[record("Kaufland"), flagged]);

        let lines: Vec<&str> = notice.lines().collect();
        assert_eq!(
            lines,
            [
                NOTICE_HEADER,
                "Shop 'Globus': 'thumbnail' is incomplete or missing."
            ]
        );
    }

    #[test]
    fn missing_title_is_reported_with_shop_name() {
        let mut flagged = record("real");
        flagged.title = UNKNOWN.to_string();
        let issues = find_incomplete_fields(&[flagged]);
        assert_eq!(
            issues,
            [IncompleteField {
                shop_name: "real".to_string(),
                field: "title",
            }]
        );
    }

    #[test]
    fn open_ended_end_date_is_flagged() {
        let mut open_ended = record("Globus");
        open_ended.valid_to = UNKNOWN.to_string();
        let notice = check_completeness(&[open_ended]);
        assert!(notice.ends_with("Shop 'Globus': 'valid_to' is incomplete or missing."));
    }

    #[test]
    fn unknown_shop_name_is_reported_against_itself() {
        let mut flagged = record(UNKNOWN);
        flagged.thumbnail = String::new();
        let lines: Vec<String> = find_incomplete_fields(&[flagged])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "Shop 'Unknown': 'thumbnail' is incomplete or missing.",
                "Shop 'Unknown': 'shop_name' is incomplete or missing.",
            ]
        );
    }

    #[test]
    fn issues_keep_record_order() {
        let mut first = record("A");
        first.valid_from = UNKNOWN.to_string();
        let mut second = record("B");
        second.title = String::new();
        let shops: Vec<String> = find_incomplete_fields(&[first, second])
            .into_iter()
            .map(|i| i.shop_name)
            .collect();
        assert_eq!(shops, ["A", "B"]);
    }
}
