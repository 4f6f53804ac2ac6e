use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    /// Waiting for admin approval
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Pending => "pending",
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(CampaignStatus::Draft),
            "pending" => Some(CampaignStatus::Pending),
            "active" => Some(CampaignStatus::Active),
            "completed" => Some(CampaignStatus::Completed),
            "cancelled" => Some(CampaignStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> [CampaignStatus; 5] {
        [
            CampaignStatus::Draft,
            CampaignStatus::Pending,
            CampaignStatus::Active,
            CampaignStatus::Completed,
            CampaignStatus::Cancelled,
        ]
    }
}

/// Sort orders offered on campaign lists (`sort_by` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignSort {
    #[default]
    Newest,
    Oldest,
    MostRaised,
    LeastRaised,
    /// Highest goal first
    GoalAmount,
}

impl CampaignSort {
    pub fn code(&self) -> &'static str {
        match self {
            CampaignSort::Newest => "newest",
            CampaignSort::Oldest => "oldest",
            CampaignSort::MostRaised => "most_raised",
            CampaignSort::LeastRaised => "least_raised",
            CampaignSort::GoalAmount => "goal_amount",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "newest" => Some(CampaignSort::Newest),
            "oldest" => Some(CampaignSort::Oldest),
            "most_raised" => Some(CampaignSort::MostRaised),
            "least_raised" => Some(CampaignSort::LeastRaised),
            "goal_amount" => Some(CampaignSort::GoalAmount),
            _ => None,
        }
    }

    pub fn all() -> [CampaignSort; 5] {
        [
            CampaignSort::Newest,
            CampaignSort::Oldest,
            CampaignSort::MostRaised,
            CampaignSort::LeastRaised,
            CampaignSort::GoalAmount,
        ]
    }
}

// ============================================================================
// Record
// ============================================================================

/// Campaign as returned by the campaign list and search endpoints.
///
/// `title` and `description` come back in the language requested through `lang`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub markdown_text: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    pub creator_id: i64,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Campaign {
    /// Raised share of the goal in percent, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "id": 7,
            "title": "Clean water",
            "description": "Wells for villages",
            "target_amount": 1000.0,
            "current_amount": 250.0,
            "status": "active",
            "creator_id": 3,
            "created_at": "2024-05-01T10:00:00"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.id, 7);
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.image_path, None);
        assert_eq!(campaign.progress_percent(), 25.0);
    }

    #[test]
    fn test_progress_is_capped() {
        let json = r#"{"id":1,"title":"t","description":"d","target_amount":10.0,
            "current_amount":50.0,"creator_id":1,"created_at":"2024-01-01"}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.progress_percent(), 100.0);
        assert_eq!(campaign.status, CampaignStatus::Draft);
    }

    #[test]
    fn test_sort_codes_match_serde() {
        for sort in CampaignSort::all() {
            let json = serde_json::to_string(&sort).unwrap();
            assert_eq!(json, format!("\"{}\"", sort.code()));
            assert_eq!(CampaignSort::from_code(sort.code()), Some(sort));
        }
    }

    #[test]
    fn test_status_codes_match_serde() {
        for status in CampaignStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
        assert_eq!(CampaignStatus::from_code("all"), None);
    }
}
