//! Popularity scoring and ranking for batch application results.
//!
//! Formula: `score = average_rating * ln(rating_count + 1)`
//!
//! Quality and popularity both raise the score, while the logarithm damps
//! very large rating counts. An item with rating 0 or count 0 scores 0.

use crate::types::AppItem;

/// Calculate the popularity score for one rating/count pair.
///
/// Non-finite or negative ratings score 0.
pub fn popularity_score(average_rating: f64, rating_count: u64) -> f64 {
    if !average_rating.is_finite() || average_rating <= 0.0 {
        return 0.0;
    }
    average_rating * (rating_count as f64 + 1.0).ln()
}

/// Score of an application item.
pub fn app_score(app: &AppItem) -> f64 {
    popularity_score(app.average_user_rating, app.user_rating_count)
}

/// Sort applications by descending popularity score.
///
/// The sort is stable: equal scores keep their merge order.
pub fn rank_by_popularity(apps: Vec<AppItem>) -> Vec<AppItem> {
    let mut scored: Vec<(f64, AppItem)> = apps.into_iter().map(|a| (app_score(&a), a)).collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, app)| app).collect()
}
