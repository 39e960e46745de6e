//! Attribution ranking and display formatting
//!
//! Consumes the raw per-feature contributions from the classifier's
//! explanation step (local attribution for the current request only) and
//! produces the display-ready ordered list: human names, formatted
//! values, descending |weight| order, and bar widths normalized so the
//! largest contributor always renders at 100%.

use serde::{Deserialize, Serialize};

use crate::features::encoding::Encodings;
use crate::features::vector::{Feature, FeatureVector};
use crate::input::itinerary::ItineraryRequest;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const TIME_CATEGORY_LABELS: [&str; 5] =
    ["Early Morning", "Morning", "Afternoon", "Evening Rush", "Night"];

/// One ranked attribution entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    /// Training-time feature key
    pub feature: String,

    /// Human display name
    pub display_name: String,

    /// Human-formatted feature value (e.g., "17:00", "1946 mi")
    pub value: String,

    /// Signed attribution weight; sign drives styling, not order
    pub weight: f64,

    /// Bar width in percent of the largest |weight|, so the top entry is
    /// always exactly 100
    pub bar_width_pct: f64,
}

/// Request context needed to render attribution values
pub struct AttributionContext<'a> {
    /// The request being explained
    pub request: &'a ItineraryRequest,

    /// The vector the explanation was computed for
    pub vector: &'a FeatureVector,

    /// Encoding tables, for airline display names
    pub encodings: &'a Encodings,
}

/// Rank raw contributions for display
///
/// Sorts by descending |weight| with ties kept in first-seen order, then
/// normalizes bar widths against the maximum |weight|. An empty input
/// yields an empty list, and `limit` caps the ranked output.
pub fn rank_attributions(
    raw: &[(Feature, f64)],
    ctx: &AttributionContext<'_>,
    limit: Option<usize>,
) -> Vec<Attribution> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<(Feature, f64)> = raw.to_vec();
    // sort_by is stable, so equal magnitudes keep the classifier's order
    ordered.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(limit) = limit {
        ordered.truncate(limit);
    }

    let max_weight = ordered
        .iter()
        .map(|(_, w)| w.abs())
        .fold(0.0f64, f64::max);

    ordered
        .into_iter()
        .map(|(feature, weight)| Attribution {
            feature: feature.key().to_string(),
            display_name: feature.display_name().to_string(),
            value: display_value(feature, ctx),
            weight,
            bar_width_pct: if max_weight > 0.0 {
                weight.abs() / max_weight * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Human-formatted value for one feature
fn display_value(feature: Feature, ctx: &AttributionContext<'_>) -> String {
    let request = ctx.request;
    match feature {
        Feature::Month => MONTH_NAMES
            .get((request.month as usize).wrapping_sub(1))
            .map(|m| m.to_string())
            .unwrap_or_else(|| request.month.to_string()),
        Feature::Quarter => format!("Q{}", request.month.saturating_sub(1) / 3 + 1),
        Feature::DayOfMonth => request.day_of_month.to_string(),
        Feature::DayOfWeek => DAY_NAMES
            .get((request.day_of_week as usize).wrapping_sub(1))
            .map(|d| d.to_string())
            .unwrap_or_else(|| request.day_of_week.to_string()),
        Feature::Airline => ctx.encodings.airline_name(&request.airline).to_string(),
        Feature::Origin => request.origin.clone(),
        Feature::Dest => request.destination.clone(),
        Feature::Distance => {
            let miles = ctx.vector.get(Feature::Distance).unwrap_or(0.0);
            format!("{} mi", miles.round() as i64)
        }
        Feature::ElapsedTime => {
            let minutes = ctx.vector.get(Feature::ElapsedTime).unwrap_or(0.0);
            format!("{} min", minutes.round() as i64)
        }
        Feature::DepHour => format!("{}:00", request.dep_hour),
        Feature::ArrHour => format!("{}:00", request.arr_hour),
        Feature::DepTimeCategory => {
            let category = ctx.vector.get(Feature::DepTimeCategory).unwrap_or(0.0) as usize;
            TIME_CATEGORY_LABELS
                .get(category.wrapping_sub(1))
                .map(|l| l.to_string())
                .unwrap_or_else(|| category.to_string())
        }
        // Weather features display their numeric score
        _ => format!("{:.1}", ctx.vector.get(feature).unwrap_or(0.0)),
    }
}
