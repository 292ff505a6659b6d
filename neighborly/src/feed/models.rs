//! Feed filter model.

use crate::catalog::{Category, HelpRequest, PaymentType, RequestStatus, Urgency};
use serde::{Deserialize, Serialize};

/// A sparse conjunctive predicate set over request fields.
///
/// A populated field constrains the feed; an absent field does not. Fields
/// never interact: the result is the conjunction of the active predicates.
///
/// `radius_km` is carried for the map surface's display logic and is NOT
/// evaluated by [`crate::feed::visible`]: the feed has no reference point
/// to measure distance from.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Filter {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

impl Filter {
    /// Whether no field is populated.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.urgency.is_none()
            && self.status.is_none()
            && self.payment_type.is_none()
            && self.radius_km.is_none()
    }

    /// Whether `request` passes every populated equality predicate.
    pub fn matches(&self, request: &HelpRequest) -> bool {
        if let Some(category) = self.category {
            if request.category != category {
                return false;
            }
        }
        if let Some(urgency) = self.urgency {
            if request.urgency != urgency {
                return false;
            }
        }
        if let Some(status) = self.status {
            if request.status != status {
                return false;
            }
        }
        if let Some(payment_type) = self.payment_type {
            if request.payment_type != payment_type {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewHelpRequest;

    fn request() -> HelpRequest {
        HelpRequest::create(
            NewHelpRequest {
                title: "Need Help".to_string(),
                description: "with errands".to_string(),
                category: Category::Errands,
                location: "here".to_string(),
                ..Default::default()
            },
            "owner".to_string(),
            "en",
        )
        .expect("test request is valid")
    }

    #[test]
    fn default_filter_is_empty_and_matches_everything() {
        let filter = Filter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&request()));
    }

    #[test]
    fn any_populated_field_makes_the_filter_non_empty() {
        let filter = Filter {
            radius_km: Some(5.0),
            ..Filter::default()
        };
        assert!(!filter.is_empty());
        // Radius is display-only; matches still passes
        assert!(filter.matches(&request()));
    }

    #[test]
    fn mismatched_fields_exclude() {
        let filter = Filter {
            category: Some(Category::Education),
            ..Filter::default()
        };
        assert!(!filter.matches(&request()));

        let filter = Filter {
            category: Some(Category::Errands),
            urgency: Some(Urgency::High),
            ..Filter::default()
        };
        // Category matches but urgency does not: conjunction fails
        assert!(!filter.matches(&request()));
    }
}
