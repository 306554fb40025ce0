use serde::{Deserialize, Serialize};

use crate::dates::{format_bill_date, parse_bill_date, ParsedDate};
use crate::status::StatusField;

/// An expense-report record as the store holds it.
///
/// Deserialization is lenient field by field: a malformed `amount` becomes
/// `None`, a numeric `id` becomes its decimal text, a missing or `null` date
/// becomes the empty string. One bad field never rejects the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    /// Expense category, e.g. `"Transports"`.
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub expense_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub commentary: String,
    /// Amount in whole currency units.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub pct: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub vat: Option<String>,
    /// ISO `yyyy-mm-dd` as stored, or a display date. Not guaranteed well-formed.
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Converts the record into its display form: formatted date, translated status.
    #[must_use]
    pub fn to_display(&self) -> DisplayBill {
        DisplayBill {
            id: self.id.clone(),
            email: self.email.clone(),
            expense_type: self.expense_type.clone(),
            name: self.name.clone(),
            commentary: self.commentary.clone(),
            amount: self.amount,
            pct: self.pct,
            vat: self.vat.clone(),
            date: DateField::Raw(self.date.clone()).into_display(),
            status: StatusField::classify(&self.status).into_display(),
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            comment_admin: self.comment_admin.clone(),
        }
    }
}

/// A [`Bill`] whose `date` and `status` are user-facing text.
///
/// Recomputed for every render and never sent back to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub commentary: String,
    pub amount: Option<i64>,
    pub pct: Option<i64>,
    pub vat: Option<String>,
    pub date: String,
    pub status: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub comment_admin: Option<String>,
}

/// A date string tagged with the side of the display boundary it is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    Raw(String),
    Display(String),
}

impl DateField {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DateField::Raw(s) | DateField::Display(s) => s,
        }
    }

    /// Formats a raw date; display dates and unparsable raw dates pass through.
    #[must_use]
    pub fn into_display(self) -> String {
        match self {
            DateField::Raw(raw) => format_bill_date(&raw),
            DateField::Display(shown) => shown,
        }
    }
}

/// Records that carry a bill date, raw or formatted.
pub trait Dated {
    fn date_text(&self) -> &str;

    fn parsed_date(&self) -> ParsedDate {
        parse_bill_date(self.date_text())
    }
}

impl Dated for Bill {
    fn date_text(&self) -> &str {
        &self.date
    }
}

impl Dated for DisplayBill {
    fn date_text(&self) -> &str {
        &self.date
    }
}

/// Parses the leading integer of a form value: `"40"` and `"40 €"` give 40,
/// `"abc"` and `""` give `None`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(text_of(Value::deserialize(deserializer)?))
    }

    pub(super) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => super::parse_leading_int(&s),
            _ => None,
        })
    }

    fn text_of(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_record() {
        let bill: Bill = serde_json::from_value(serde_json::json!({
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/v0/b/billable.jpg",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        }))
        .unwrap();

        assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.expense_type, "Hôtel et logement");
        assert_eq!(bill.amount, Some(400));
        assert_eq!(bill.pct, Some(20));
        assert_eq!(bill.vat.as_deref(), Some("80"));
        assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
    }

    #[test]
    fn malformed_fields_do_not_reject_the_record() {
        let bill: Bill = serde_json::from_value(serde_json::json!({
            "id": 1,
            "date": null,
            "status": "pending",
            "amount": "not a number",
            "pct": [],
            "vat": 20
        }))
        .unwrap();

        assert_eq!(bill.id, "1");
        assert_eq!(bill.date, "");
        assert_eq!(bill.amount, None);
        assert_eq!(bill.pct, None);
        assert_eq!(bill.vat.as_deref(), Some("20"));
        assert_eq!(bill.file_url, None);
    }

    #[test]
    fn serializes_with_store_field_names() {
        let bill = Bill {
            expense_type: "Transports".to_string(),
            file_url: Some("https://localhost/a.png".to_string()),
            ..Bill::default()
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["type"], "Transports");
        assert_eq!(json["fileUrl"], "https://localhost/a.png");
        assert!(json.get("commentAdmin").is_none());
    }

    #[test]
    fn to_display_formats_date_and_status() {
        let bill = Bill {
            date: "2023-04-04".to_string(),
            status: "accepted".to_string(),
            ..Bill::default()
        };
        let shown = bill.to_display();
        assert_eq!(shown.date, "4 Avr. 23");
        assert_eq!(shown.status, "Accepté");
    }

    #[test]
    fn to_display_keeps_unparsable_date() {
        let bill = Bill {
            id: "1".to_string(),
            date: "invalid-date".to_string(),
            status: "pending".to_string(),
            ..Bill::default()
        };
        let shown = bill.to_display();
        assert_eq!(shown.date, "invalid-date");
        assert_eq!(shown.status, "En attente");
    }

    #[test]
    fn date_field_display_is_not_reformatted() {
        let field = DateField::Display("2023-04-04".to_string());
        assert_eq!(field.as_str(), "2023-04-04");
        assert_eq!(field.into_display(), "2023-04-04");
    }

    #[test]
    fn parse_leading_int_reads_prefix() {
        assert_eq!(parse_leading_int("40"), Some(40));
        assert_eq!(parse_leading_int(" 12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
