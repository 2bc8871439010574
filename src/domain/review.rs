//! Review domain entity and submission validation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{MAX_RATING, MIN_RATING};
use crate::errors::{AppError, AppResult};

use super::user::Reviewer;

/// A user's feedback on one product. At most one per (user, product) pair;
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier
    pub id: Uuid,
    /// Reviewer
    pub user_id: Uuid,
    /// Reviewed product
    pub product_id: Uuid,
    /// Star rating 1-5; absent for text-only reviews
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: Option<i16>,
    /// Optional headline
    pub title: Option<String>,
    /// Optional free-text body
    pub content: Option<String>,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

/// Review joined with the minimal reviewer identity, for listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    /// Unique review identifier
    pub id: Uuid,
    /// Reviewer id
    pub user_id: Uuid,
    /// Reviewed product
    pub product_id: Uuid,
    /// Star rating 1-5; absent for text-only reviews
    pub rating: Option<i16>,
    /// Optional headline
    pub title: Option<String>,
    /// Optional free-text body
    pub content: Option<String>,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
    /// Reviewer identity
    pub user: Reviewer,
}

/// Per-product review aggregates, computed on read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    /// Average star rating over rated reviews; 0 when no rated review exists
    pub average_rating: f64,
    /// Total number of reviews, rated or not
    pub review_count: u64,
    /// Number of reviews carrying no star rating
    pub unrated_count: u64,
}

impl ProductStats {
    /// Aggregates for a product nobody has reviewed.
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            review_count: 0,
            unrated_count: 0,
        }
    }
}

/// A validated, normalized review submission.
///
/// Construction enforces the submission rule: a review must carry a usable
/// star rating (1-5) or non-empty text content, or both. A rating of 0 is
/// treated the same as no rating at all, and blank text fields are dropped
/// rather than stored as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    rating: Option<i16>,
    title: Option<String>,
    content: Option<String>,
}

impl ReviewDraft {
    /// Validate and normalize a candidate submission.
    ///
    /// # Errors
    /// Returns a validation error when the rating is outside 0-5, or when
    /// neither a usable rating nor non-empty content is present.
    pub fn new(
        rating: Option<i16>,
        title: Option<String>,
        content: Option<String>,
    ) -> AppResult<Self> {
        let rating = match rating {
            Some(0) | None => None,
            Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Some(r),
            Some(_) => {
                return Err(AppError::validation(format!(
                    "Rating must be between {} and {}",
                    MIN_RATING, MAX_RATING
                )))
            }
        };

        let title = normalize_text(title);
        let content = normalize_text(content);

        if rating.is_none() && content.is_none() {
            return Err(AppError::validation(
                "Please provide either a star rating or review content",
            ));
        }

        Ok(Self {
            rating,
            title,
            content,
        })
    }

    pub fn rating(&self) -> Option<i16> {
        self.rating
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Decompose into (rating, title, content) for storage.
    pub fn into_parts(self) -> (Option<i16>, Option<String>, Option<String>) {
        (self.rating, self.title, self.content)
    }
}

/// Trim a text field; whitespace-only becomes absent.
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rating_only() {
        for rating in 1..=5 {
            let draft = ReviewDraft::new(Some(rating), None, None).unwrap();
            assert_eq!(draft.rating(), Some(rating));
            assert_eq!(draft.content(), None);
        }
    }

    #[test]
    fn accepts_content_only() {
        let draft = ReviewDraft::new(None, None, Some("Solid build quality.".to_string())).unwrap();
        assert_eq!(draft.rating(), None);
        assert_eq!(draft.content(), Some("Solid build quality."));
    }

    #[test]
    fn rejects_empty_submission() {
        assert!(ReviewDraft::new(None, None, None).is_err());
        assert!(ReviewDraft::new(Some(0), None, None).is_err());
        assert!(ReviewDraft::new(None, None, Some("   ".to_string())).is_err());
    }

    #[test]
    fn zero_rating_means_unrated() {
        let draft = ReviewDraft::new(Some(0), None, Some("Fine.".to_string())).unwrap();
        assert_eq!(draft.rating(), None);
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert!(ReviewDraft::new(Some(6), None, None).is_err());
        assert!(ReviewDraft::new(Some(-1), None, None).is_err());
        // Even with content present, a nonsense rating is refused outright
        assert!(ReviewDraft::new(Some(7), None, Some("Great.".to_string())).is_err());
    }

    #[test]
    fn trims_text_fields() {
        let draft = ReviewDraft::new(
            Some(4),
            Some("  Sturdy  ".to_string()),
            Some("  Works well.  ".to_string()),
        )
        .unwrap();

        assert_eq!(draft.title(), Some("Sturdy"));
        assert_eq!(draft.content(), Some("Works well."));
    }

    #[test]
    fn blank_title_becomes_absent() {
        let draft = ReviewDraft::new(Some(3), Some(" ".to_string()), None).unwrap();
        assert_eq!(draft.title(), None);
    }

    #[test]
    fn empty_stats_are_all_zero() {
        let stats = ProductStats::empty();
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.review_count, 0);
        assert_eq!(stats.unrated_count, 0);
    }
}
