//! Static sample requests the catalog starts with.

use super::models::{Category, GeoPoint, HelpRequest, NewHelpRequest, PaymentType, Urgency};
use chrono::{Duration, Utc};

struct SeedEntry {
    title: &'static str,
    description: &'static str,
    category: Category,
    urgency: Urgency,
    location: &'static str,
    coordinates: Option<GeoPoint>,
    payment_type: PaymentType,
    suggested_amount: Option<f64>,
    owner: &'static str,
    hours_ago: i64,
}

const SEED_ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        title: "Need help with grocery shopping",
        description: "Recovering from surgery and could use a hand with my weekly \
                      grocery run. List is short, mostly produce and pantry staples.",
        category: Category::Errands,
        urgency: Urgency::Medium,
        location: "Mission District, San Francisco",
        coordinates: Some(GeoPoint {
            latitude: 37.7599,
            longitude: -122.4148,
        }),
        payment_type: PaymentType::Free,
        suggested_amount: None,
        owner: "seed-maria",
        hours_ago: 2,
    },
    SeedEntry {
        title: "Math tutoring for high school student",
        description: "Looking for someone to help my daughter with algebra twice a \
                      week. She is preparing for finals.",
        category: Category::Education,
        urgency: Urgency::High,
        location: "Sunset District, San Francisco",
        coordinates: Some(GeoPoint {
            latitude: 37.7431,
            longitude: -122.4869,
        }),
        payment_type: PaymentType::Paid,
        suggested_amount: Some(25.0),
        owner: "seed-james",
        hours_ago: 5,
    },
    SeedEntry {
        title: "Furniture donation pickup",
        description: "Giving away a couch and two chairs in good condition. Need \
                      someone with a truck to pick them up this weekend.",
        category: Category::Donations,
        urgency: Urgency::Low,
        location: "Oakland",
        coordinates: Some(GeoPoint {
            latitude: 37.8044,
            longitude: -122.2712,
        }),
        payment_type: PaymentType::Donation,
        suggested_amount: Some(15.0),
        owner: "seed-priya",
        hours_ago: 26,
    },
    SeedEntry {
        title: "Companion for elderly parent",
        description: "My father enjoys chess and short walks. Looking for a friendly \
                      visitor one afternoon a week.",
        category: Category::ElderCare,
        urgency: Urgency::Medium,
        location: "Berkeley",
        coordinates: None,
        payment_type: PaymentType::Paid,
        suggested_amount: Some(30.0),
        owner: "seed-linda",
        hours_ago: 49,
    },
    SeedEntry {
        title: "Computer repair assistance",
        description: "Laptop will not boot after an update. Happy to learn while \
                      someone walks me through the fix.",
        category: Category::Skills,
        urgency: Urgency::Low,
        location: "Daly City",
        coordinates: Some(GeoPoint {
            latitude: 37.6879,
            longitude: -122.4702,
        }),
        payment_type: PaymentType::Free,
        suggested_amount: None,
        owner: "seed-tomas",
        hours_ago: 73,
    },
];

/// Build the sample requests, newest first.
pub fn sample_requests() -> Vec<HelpRequest> {
    SEED_ENTRIES
        .iter()
        .map(|entry| {
            let mut request = HelpRequest::create(
                NewHelpRequest {
                    title: entry.title.to_string(),
                    description: entry.description.to_string(),
                    category: entry.category,
                    urgency: entry.urgency,
                    location: entry.location.to_string(),
                    coordinates: entry.coordinates,
                    payment_type: entry.payment_type,
                    suggested_amount: entry.suggested_amount,
                    currency: None,
                },
                entry.owner.to_string(),
                "en",
            )
            .expect("seed request is valid");
            request.created_at = Utc::now() - Duration::hours(entry.hours_ago);
            request
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_requests_are_newest_first() {
        let requests = sample_requests();
        assert!(requests.len() >= 4);
        for pair in requests.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn sample_requests_cover_paid_and_free_terms() {
        let requests = sample_requests();
        assert!(requests.iter().any(|r| r.payment_type == PaymentType::Free));
        assert!(
            requests
                .iter()
                .any(|r| r.payment_type == PaymentType::Paid && r.suggested_amount.is_some())
        );
    }
}
