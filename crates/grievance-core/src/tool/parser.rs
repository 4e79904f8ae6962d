//! Tiered parser for `register_complaint` input.
//!
//! The model hands the tool a loosely structured string. Three formats are
//! recognised, tried in priority order:
//!
//! 1. **Structured** -- a JSON object with `name`, `mobile`, `complaint_details`.
//! 2. **Delimited** -- `name, mobile, details...`; everything after the second
//!    comma is the details, commas included.
//! 3. **Labeled** -- one field per line, e.g. `Name: ...`, `Phone: ...`,
//!    `Complaint: ...`.
//!
//! Input starting with `{` that fails to decode skips straight to the labeled
//! format. A name containing a comma is misread by the delimited format; that
//! ambiguity is accepted.

use serde_json::Value;

use grievance_types::complaint::ParsedComplaintInput;
use grievance_types::error::ToolError;

/// Which format produced a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Structured,
    Delimited,
    Labeled,
}

/// Parse raw tool input into the three registration fields.
///
/// Returns `ToolError::IncompleteInput` unless name, mobile and details are
/// all non-empty after trimming.
pub fn parse_complaint_input(raw: &str) -> Result<ParsedComplaintInput, ToolError> {
    parse_with_format(raw).map(|(input, _)| input)
}

/// Like [`parse_complaint_input`], also reporting the format that matched.
pub fn parse_with_format(raw: &str) -> Result<(ParsedComplaintInput, InputFormat), ToolError> {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(map)) => structured(&map)
                .complete()
                .map(|input| (input, InputFormat::Structured)),
            _ => labeled(trimmed)
                .complete()
                .map(|input| (input, InputFormat::Labeled)),
        };
    }

    if let Some(fields) = delimited(trimmed) {
        if let Ok(input) = fields.complete() {
            return Ok((input, InputFormat::Delimited));
        }
    }

    labeled(trimmed)
        .complete()
        .map(|input| (input, InputFormat::Labeled))
}

/// Partially extracted fields; empty means "not found".
#[derive(Debug, Default)]
struct Fields {
    name: String,
    mobile: String,
    details: String,
}

impl Fields {
    fn complete(self) -> Result<ParsedComplaintInput, ToolError> {
        if self.name.trim().is_empty()
            || self.mobile.trim().is_empty()
            || self.details.trim().is_empty()
        {
            return Err(ToolError::IncompleteInput);
        }
        Ok(ParsedComplaintInput {
            name: self.name,
            mobile: self.mobile,
            details: self.details,
        })
    }
}

// Values are taken as-is so a well-formed object round-trips exactly.
fn structured(map: &serde_json::Map<String, Value>) -> Fields {
    let field = |key: &str| match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    Fields {
        name: field("name"),
        mobile: field("mobile"),
        details: field("complaint_details"),
    }
}

fn delimited(input: &str) -> Option<Fields> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() < 3 {
        return None;
    }

    Some(Fields {
        name: parts[0].trim().to_string(),
        mobile: parts[1].trim().to_string(),
        details: parts[2..].join(",").trim().to_string(),
    })
}

fn labeled(input: &str) -> Fields {
    let mut fields = Fields::default();

    for line in input.lines() {
        let lower = line.to_lowercase();
        let Some((_, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();

        if lower.contains("name:") {
            fields.name = value;
        } else if lower.contains("mobile:") || lower.contains("phone:") {
            fields.mobile = value;
        } else if lower.contains("complaint:") || lower.contains("details:") {
            fields.details = value;
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> (ParsedComplaintInput, InputFormat) {
        parse_with_format(raw).unwrap()
    }

    // --- structured ---

    #[test]
    fn test_structured_fields_are_exact() {
        let (input, format) = parse(
            r#"{"name": "Asha Rao", "mobile": "9000000001", "complaint_details": "Router keeps dropping, since Monday"}"#,
        );
        assert_eq!(format, InputFormat::Structured);
        assert_eq!(input.name, "Asha Rao");
        assert_eq!(input.mobile, "9000000001");
        assert_eq!(input.details, "Router keeps dropping, since Monday");
    }

    #[test]
    fn test_structured_preserves_inner_whitespace() {
        let (input, _) = parse(r#"{"name": " Asha ", "mobile": "1", "complaint_details": "x"}"#);
        assert_eq!(input.name, " Asha ");
    }

    #[test]
    fn test_structured_numeric_mobile() {
        let (input, format) =
            parse(r#"{"name": "Ravi", "mobile": 9876543210, "complaint_details": "No water supply"}"#);
        assert_eq!(format, InputFormat::Structured);
        assert_eq!(input.mobile, "9876543210");
    }

    #[test]
    fn test_structured_leading_whitespace() {
        let (_, format) =
            parse("  \n{\"name\": \"A\", \"mobile\": \"1\", \"complaint_details\": \"d\"}");
        assert_eq!(format, InputFormat::Structured);
    }

    #[test]
    fn test_structured_missing_field_is_incomplete() {
        let err = parse_complaint_input(r#"{"name": "Ravi", "mobile": "9876543210"}"#).unwrap_err();
        assert_eq!(err, ToolError::IncompleteInput);
    }

    #[test]
    fn test_structured_blank_field_is_incomplete() {
        let err = parse_complaint_input(
            r#"{"name": "Ravi", "mobile": "   ", "complaint_details": "d, e, f"}"#,
        )
        .unwrap_err();
        assert_eq!(err, ToolError::IncompleteInput);
    }

    #[test]
    fn test_malformed_object_falls_back_to_labels() {
        let (input, format) = parse("{not json\nName: Meera\nPhone: 9123456780\nDetails: Late delivery");
        assert_eq!(format, InputFormat::Labeled);
        assert_eq!(input.name, "Meera");
        assert_eq!(input.mobile, "9123456780");
        assert_eq!(input.details, "Late delivery");
    }

    // --- delimited ---

    #[test]
    fn test_delimited_three_parts() {
        let (input, format) = parse("John Doe, 9876543210, laptop screen cracked");
        assert_eq!(format, InputFormat::Delimited);
        assert_eq!(input.name, "John Doe");
        assert_eq!(input.mobile, "9876543210");
        assert_eq!(input.details, "laptop screen cracked");
    }

    #[test]
    fn test_delimited_remainder_rejoined() {
        let (input, _) = parse("A, B, C, D");
        assert_eq!(input.name, "A");
        assert_eq!(input.mobile, "B");
        assert_eq!(input.details, "C, D");
    }

    #[test]
    fn test_delimited_trims_parts() {
        let (input, _) = parse("  Priya ,  9000011111 ,  fan not working  ");
        assert_eq!(input.name, "Priya");
        assert_eq!(input.mobile, "9000011111");
        assert_eq!(input.details, "fan not working");
    }

    #[test]
    fn test_delimited_name_with_comma_is_misread() {
        let (input, _) = parse("Doe, John, 9876543210, broken hinge");
        assert_eq!(input.name, "Doe");
        assert_eq!(input.mobile, "John");
        assert_eq!(input.details, "9876543210, broken hinge");
    }

    #[test]
    fn test_two_parts_is_incomplete() {
        assert_eq!(
            parse_complaint_input("John Doe, 9876543210").unwrap_err(),
            ToolError::IncompleteInput
        );
    }

    #[test]
    fn test_delimited_empty_middle_is_incomplete() {
        assert_eq!(
            parse_complaint_input("John Doe, , laptop broken").unwrap_err(),
            ToolError::IncompleteInput
        );
    }

    // --- labeled ---

    #[test]
    fn test_labeled_lines() {
        let (input, format) =
            parse("Name: Kiran Kumar\nMobile: 9988776655\nComplaint: Bill charged twice");
        assert_eq!(format, InputFormat::Labeled);
        assert_eq!(input.name, "Kiran Kumar");
        assert_eq!(input.mobile, "9988776655");
        assert_eq!(input.details, "Bill charged twice");
    }

    #[test]
    fn test_labeled_case_insensitive_and_alternate_labels() {
        let (input, _) = parse("NAME: Kiran\nPHONE: 99887\nDETAILS: meter: faulty");
        assert_eq!(input.name, "Kiran");
        assert_eq!(input.mobile, "99887");
        assert_eq!(input.details, "meter: faulty");
    }

    #[test]
    fn test_labeled_later_lines_overwrite() {
        let (input, format) = parse(
            "Name: Old Name\nMobile: 9000000001\nName: Meera\nPhone: 9123456780\nDetails: Late delivery",
        );
        assert_eq!(format, InputFormat::Labeled);
        assert_eq!(input.name, "Meera");
        assert_eq!(input.mobile, "9123456780");
    }

    #[test]
    fn test_labeled_two_labels_on_one_line_feed_first_label() {
        let (input, _) = parse("Name: A Mobile: 1\nPhone: 9123456780\nComplaint: Broken meter");
        assert_eq!(input.name, "A Mobile: 1");
        assert_eq!(input.mobile, "9123456780");
        assert_eq!(input.details, "Broken meter");

        let err = parse_complaint_input("Name: A Mobile: 1\nComplaint: Broken meter").unwrap_err();
        assert_eq!(err, ToolError::IncompleteInput);
    }

    #[test]
    fn test_labeled_crlf_lines() {
        let (input, _) = parse("Name: A\r\nMobile: 1\r\nComplaint: c");
        assert_eq!(input.details, "c");
    }

    #[test]
    fn test_labeled_used_when_delimited_incomplete() {
        let (input, format) = parse("Name: Kiran\nMobile: 99887\nComplaint: slow, noisy");
        assert_eq!(format, InputFormat::Labeled);
        assert_eq!(input.details, "slow, noisy");
    }

    #[test]
    fn test_labeled_missing_details_is_incomplete() {
        assert_eq!(
            parse_complaint_input("Name: Kiran\nMobile: 99887").unwrap_err(),
            ToolError::IncompleteInput
        );
    }

    // --- no format ---

    #[test]
    fn test_name_only_is_incomplete() {
        assert_eq!(
            parse_complaint_input("John Doe").unwrap_err(),
            ToolError::IncompleteInput
        );
    }

    #[test]
    fn test_empty_is_incomplete() {
        assert_eq!(parse_complaint_input("").unwrap_err(), ToolError::IncompleteInput);
        assert_eq!(parse_complaint_input("   \n ").unwrap_err(), ToolError::IncompleteInput);
    }
}
