use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::join_name;

/// One row of the per-city ranking aggregate.
///
/// Recomputed server-side; the client never mutates it, only displays it and
/// triggers refresh requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub total_votes: u64,
    #[serde(default)]
    pub ranking: u64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl RankingEntry {
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }

    pub fn display_city(&self) -> &str {
        if self.city.is_empty() {
            "No especificada"
        } else {
            &self.city
        }
    }
}

/// Client-visible unwrapped form of the paginated rankings envelope.
///
/// Every field defaults when the envelope is malformed; `rankings` is always
/// a (possibly empty) vector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankingsPage {
    pub rankings: Vec<RankingEntry>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// Raw wire envelope of `GET /api/public/rankings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingsEnvelope {
    #[serde(default)]
    pub rankings: Vec<RankingEntry>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl RankingsEnvelope {
    /// Unwrap the envelope, substituting `fallback_page_size` when the
    /// backend omitted one.
    pub fn into_page(self, fallback_page_size: u64) -> RankingsPage {
        let page_size = if self.pagination.page_size == 0 {
            fallback_page_size
        } else {
            self.pagination.page_size
        };
        RankingsPage {
            rankings: self.rankings,
            total: self.pagination.total_items,
            page: self.pagination.current_page.max(1),
            page_size,
            total_pages: self.pagination.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_with_pagination() {
        let env: RankingsEnvelope = serde_json::from_str(
            r#"{
                "rankings": [
                    {"user_id":"u1","first_name":"Ana","last_name":"Ríos","city":"Cali","total_votes":42,"ranking":1},
                    {"user_id":"u2","first_name":"Luis","last_name":"Mora","city":"Medellín","total_votes":30,"ranking":2},
                    {"user_id":"u3","first_name":"Sara","last_name":"Paz","city":"Medellín","total_votes":12,"ranking":3}
                ],
                "pagination": {"total_items":3,"current_page":1,"page_size":10,"total_pages":1}
            }"#,
        )
        .unwrap();

        let page = env.into_page(50);
        assert_eq!(page.rankings.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.rankings[0].display_name(), "Ana Ríos");
    }

    #[test]
    fn malformed_envelope_defaults_every_field() {
        let env: RankingsEnvelope = serde_json::from_str("{}").unwrap();
        let page = env.into_page(10);
        assert!(page.rankings.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn city_fallback_label() {
        let entry = RankingEntry::default();
        assert_eq!(entry.display_city(), "No especificada");
    }
}
