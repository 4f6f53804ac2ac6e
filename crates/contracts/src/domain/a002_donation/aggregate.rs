use serde::{Deserialize, Serialize};

/// Payment state of a donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Unknown => "unknown",
        }
    }

    /// Statuses an admin can filter by
    pub fn filterable() -> [PaymentStatus; 4] {
        [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ]
    }
}

/// Donation row of the admin donations list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub amount: f64,
    pub currency: String,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: String,
    pub campaign_id: i64,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub donor_id: Option<i64>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub donor_email: Option<String>,
}

impl Donation {
    /// Name shown in the donor column; anonymous donations never reveal the donor
    pub fn donor_label(&self) -> Option<&str> {
        if self.is_anonymous {
            return None;
        }
        let non_blank = |s: &&str| !s.trim().is_empty();
        self.donor_name
            .as_deref()
            .filter(non_blank)
            .or(self.donor_email.as_deref().filter(non_blank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(json: &str) -> Donation {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_unknown_payment_status_is_tolerated() {
        let d = donation(
            r#"{"id":1,"amount":5.0,"currency":"usd","payment_status":"requires_action",
                "created_at":"2024-01-01T00:00:00","campaign_id":2}"#,
        );
        assert_eq!(d.payment_status, PaymentStatus::Unknown);
    }

    #[test]
    fn test_anonymous_donor_is_hidden() {
        let d = donation(
            r#"{"id":1,"amount":5.0,"currency":"usd","payment_status":"completed",
                "is_anonymous":true,"donor_name":"Sara",
                "created_at":"2024-01-01T00:00:00","campaign_id":2}"#,
        );
        assert_eq!(d.donor_label(), None);
    }

    #[test]
    fn test_donor_label_falls_back_to_email() {
        let d = donation(
            r#"{"id":1,"amount":5.0,"currency":"usd","payment_status":"completed",
                "donor_name":"  ","donor_email":"sara@example.org",
                "created_at":"2024-01-01T00:00:00","campaign_id":2}"#,
        );
        assert_eq!(d.donor_label(), Some("sara@example.org"));
    }
}
