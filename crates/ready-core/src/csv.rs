//! Two-column CSV export of a payload.
//!
//! Every field is wrapped in double quotes and embedded quotes are doubled
//! (RFC 4180). Rows are joined with `\n` and there is no trailing newline.
//! The same payload always produces the same bytes.

use crate::catalog::Catalog;
use crate::payload::Payload;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// `ai_mops_checklist_<YYYY-MM-DD>.csv` for the payload's date.
#[must_use]
pub fn export_file_name(payload: &Payload) -> String {
    format!("ai_mops_checklist_{}.csv", payload.date())
}

/// Label/value rows in export order.
///
/// Header fields come first, then for each section its score row followed by
/// one row per item with the chosen answer (empty when unanswered).
#[must_use]
pub fn csv_rows(catalog: &Catalog, payload: &Payload) -> Vec<(String, String)> {
    let mut rows = vec![
        ("timestamp".to_string(), payload.timestamp.clone()),
        ("name".to_string(), payload.name.clone()),
        ("email".to_string(), payload.email.clone()),
        ("totalScore".to_string(), format_number(payload.scores.total)),
        ("maxScore".to_string(), payload.scores.max.to_string()),
    ];

    for section in catalog.sections() {
        let score = payload
            .section_scores
            .get(section.id)
            .map(|score| format_number(*score))
            .unwrap_or_default();
        rows.push((format!("{} Score", section.title), score));

        for item in section.items {
            let answer = payload
                .answers
                .get(item.id)
                .map(|answer| answer.as_str().to_string())
                .unwrap_or_default();
            rows.push((format!("{} {}", item.id, item.title), answer));
        }
    }

    rows
}

#[must_use]
pub fn to_csv(catalog: &Catalog, payload: &Payload) -> String {
    rows_to_csv(&csv_rows(catalog, payload))
}

#[must_use]
pub fn rows_to_csv(rows: &[(String, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{},{}", quote(label), quote(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Shortest decimal form: `1`, `0.5`, `12.5`.
fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::answer::{AnswerValue, Answers};
    use crate::identity::Identity;
    use crate::payload::Environment;
    use crate::verdict::VerdictLadder;

    /// Read the export back with a real CSV parser, one `Vec` per record.
    fn parse_csv(input: &str) -> Vec<Vec<String>> {
        ::csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(input.as_bytes())
            .records()
            .map(|record| {
                let record = record.expect("export parses as CSV");
                assert_eq!(record.len(), 2, "every record has a label and a value");
                record.iter().map(str::to_string).collect()
            })
            .collect()
    }

    fn payload(name: &str, answers: &Answers) -> Payload {
        let env = Environment {
            now: Utc
                .with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
                .single()
                .expect("valid time"),
            page_url: "https://example.com/".into(),
        };
        Payload::build(
            &Catalog::standard(),
            &Identity {
                name: name.into(),
                email: "jane@company.com".into(),
                consent: true,
            },
            answers,
            &VerdictLadder::standard(),
            &env,
        )
    }

    #[test]
    fn header_rows_and_layout() {
        let mut answers = Answers::new();
        answers.insert("1.1".into(), AnswerValue::Yes);
        answers.insert("1.2".into(), AnswerValue::InProgress);
        let csv = to_csv(&Catalog::standard(), &payload("Jane Smith", &answers));
        let lines: Vec<&str> = csv.lines().collect();

        // 5 header rows + 5 section rows + 16 item rows.
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], r#""timestamp","2026-10-17T09:30:00.000Z""#);
        assert_eq!(lines[1], r#""name","Jane Smith""#);
        assert_eq!(lines[2], r#""email","jane@company.com""#);
        assert_eq!(lines[3], r#""totalScore","1.5""#);
        assert_eq!(lines[4], r#""maxScore","16""#);
        assert_eq!(
            lines[5],
            r#""Section 1 – Data Quality & Management Score","1.5""#
        );
        assert_eq!(
            lines[6],
            r#""1.1 1.1 Data Cleanliness & Consistency:","Yes""#
        );
        assert_eq!(
            lines[7],
            r#""1.2 1.2 Silo Elimination & Integration:","In-Progress""#
        );
        assert_eq!(lines[8], r#""1.3 1.3 Governance & Privacy Compliance:","""#);
        assert_eq!(
            lines[10],
            r#""Section 2 – MarTech Stack Optimization & Integration Score","0""#
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn export_is_byte_identical_for_the_same_payload() {
        let mut answers = Answers::new();
        answers.insert("4.2".into(), AnswerValue::No);
        let payload = payload("Jane", &answers);
        let catalog = Catalog::standard();
        assert_eq!(to_csv(&catalog, &payload), to_csv(&catalog, &payload));
    }

    #[test]
    fn quotes_are_doubled_and_recoverable() {
        let payload = payload(r#"He said "Yes", twice"#, &Answers::new());
        let csv = to_csv(&Catalog::standard(), &payload);
        assert!(csv.contains(r#""name","He said ""Yes"", twice""#));

        let parsed = parse_csv(&csv);
        assert_eq!(parsed.len(), 26);
        assert_eq!(parsed[1], vec!["name", r#"He said "Yes", twice"#]);
    }

    #[test]
    fn embedded_newlines_stay_inside_one_record() {
        let rows = vec![("note".to_string(), "line one\nline two".to_string())];
        let csv = rows_to_csv(&rows);
        assert_eq!(csv, "\"note\",\"line one\nline two\"");
        assert_eq!(parse_csv(&csv), vec![vec!["note", "line one\nline two"]]);
    }

    #[test]
    fn missing_section_score_renders_empty() {
        let mut payload = payload("Jane", &Answers::new());
        payload.section_scores.remove("s3");
        let rows = csv_rows(&Catalog::standard(), &payload);
        let s3 = rows
            .iter()
            .find(|(label, _)| label.starts_with("Section 3"))
            .expect("section 3 row");
        assert_eq!(s3.1, "");
    }

    #[test]
    fn file_name_uses_payload_date() {
        let payload = payload("Jane", &Answers::new());
        assert_eq!(
            export_file_name(&payload),
            "ai_mops_checklist_2026-10-17.csv"
        );
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
    }
}
