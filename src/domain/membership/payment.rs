//! Member records and their payment history.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::semester::{semester_rank, SemesterRank};

/// One semester's dues record for a member.
///
/// Deserialization is lenient so a dirty roster still loads: a missing or
/// non-string `semester` becomes `""` (rank 0), and only a literal boolean
/// `true` counts as paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEvent {
    #[serde(default, deserialize_with = "lenient_label")]
    pub semester: String,

    #[serde(default, deserialize_with = "strictly_true")]
    pub paid: bool,
}

impl PaymentEvent {
    pub fn new(semester: impl Into<String>, paid: bool) -> Self {
        Self {
            semester: semester.into(),
            paid,
        }
    }

    /// Sort rank of this event's semester.
    pub fn rank(&self) -> SemesterRank {
        semester_rank(&self.semester)
    }
}

/// A roster entry: display name plus payment history in supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,

    /// Not assumed to be sorted; may be empty.
    #[serde(default)]
    pub payment_history: Vec<PaymentEvent>,
}

impl MemberRecord {
    pub fn new(name: impl Into<String>, payment_history: Vec<PaymentEvent>) -> Self {
        Self {
            name: name.into(),
            payment_history,
        }
    }

    /// The highest-ranked payment event, or `None` for an empty history.
    ///
    /// Among events of equal rank the one supplied last wins, matching a
    /// stable ascending sort followed by taking the final element.
    pub fn last_payment(&self) -> Option<&PaymentEvent> {
        self.payment_history.iter().max_by_key(|event| event.rank())
    }
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn strictly_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_record() {
        let record: MemberRecord = serde_json::from_value(json!({
            "name": "Rahim Uddin",
            "paymentHistory": [
                { "semester": "Fall 2024", "paid": true },
                { "semester": "Spring 2025", "paid": false }
            ]
        }))
        .unwrap();

        assert_eq!(record.name, "Rahim Uddin");
        assert_eq!(record.payment_history.len(), 2);
        assert_eq!(record.payment_history[1], PaymentEvent::new("Spring 2025", false));
    }

    #[test]
    fn missing_history_is_empty() {
        let record: MemberRecord = serde_json::from_value(json!({ "name": "Nadia" })).unwrap();
        assert!(record.payment_history.is_empty());
        assert!(record.last_payment().is_none());
    }

    #[test]
    fn malformed_payment_fields_degrade() {
        let record: MemberRecord = serde_json::from_value(json!({
            "name": "Karim",
            "paymentHistory": [
                { "semester": 2025, "paid": "true" },
                { "paid": true },
                { "semester": null },
                {}
            ]
        }))
        .unwrap();

        for event in &record.payment_history {
            assert_eq!(event.semester, "");
            assert_eq!(event.rank(), 0);
        }
        assert!(!record.payment_history[0].paid);
        assert!(record.payment_history[1].paid);
        assert!(!record.payment_history[2].paid);
    }

    #[test]
    fn last_payment_uses_rank_not_position() {
        let record = MemberRecord::new(
            "Tania",
            vec![
                PaymentEvent::new("Spring 2025", true),
                PaymentEvent::new("Fall 2024", true),
            ],
        );
        assert_eq!(record.last_payment().unwrap().semester, "Spring 2025");
    }

    #[test]
    fn last_payment_prefers_later_duplicate() {
        let record = MemberRecord::new(
            "Sabbir",
            vec![
                PaymentEvent::new("Fall 2025", true),
                PaymentEvent::new("Fall 2025", false),
            ],
        );
        let last = record.last_payment().unwrap();
        assert_eq!(last.semester, "Fall 2025");
        assert!(!last.paid);
    }

    #[test]
    fn malformed_labels_sort_below_real_ones() {
        let record = MemberRecord::new(
            "Mim",
            vec![
                PaymentEvent::new("Summer 2023", true),
                PaymentEvent::new("", true),
                PaymentEvent::new("garbage", true),
            ],
        );
        assert_eq!(record.last_payment().unwrap().semester, "Summer 2023");
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "name: Arif\npaymentHistory:\n  - semester: Fall 2025\n    paid: true\n";
        let record: MemberRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.last_payment(), Some(&PaymentEvent::new("Fall 2025", true)));
    }
}
