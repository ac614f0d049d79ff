use serde::{Deserialize, Serialize};
use std::fmt;

/// One advisory message produced by the insight advisor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

/// Advisory tone, used by the presentation layer to pick styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Info,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsightKind::Success => "success",
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type_field() {
        let insight = Insight {
            title: "Healthy cash position".into(),
            description: "Cash in hand covers the week.".into(),
            kind: InsightKind::Success,
        };
        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["type"], "success");
    }

    #[test]
    fn deserializes_advisor_payload() {
        let raw = r#"[{"title":"t","description":"d","type":"warning"}]"#;
        let parsed: Vec<Insight> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[0].kind, InsightKind::Warning);
    }
}
