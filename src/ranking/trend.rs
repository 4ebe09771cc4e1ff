use crate::model::{HistoricalData, TrendDirection};

/// Average growth (percent) above which a commodity is trending up; the
/// negative of it marks a downtrend.
const TREND_THRESHOLD_PCT: f64 = 2.0;
/// Only the most recent points are considered.
const TREND_WINDOW: usize = 3;

/// Classify production trend from the last three yearly snapshots.
///
/// Fewer than two points is `Stable`. Growth from a zero-production year counts as 0%.
pub fn calculate_trend(historical: &[HistoricalData]) -> TrendDirection {
    if historical.len() < 2 {
        return TrendDirection::Stable;
    }

    let recent = &historical[historical.len().saturating_sub(TREND_WINDOW)..];
    let growth_rates: Vec<f64> = recent
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            if prev.production == 0.0 {
                0.0
            } else {
                (curr.production - prev.production) / prev.production * 100.0
            }
        })
        .collect();

    let avg_growth = growth_rates.iter().sum::<f64>() / growth_rates.len() as f64;

    if avg_growth > TREND_THRESHOLD_PCT {
        TrendDirection::Up
    } else if avg_growth < -TREND_THRESHOLD_PCT {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}
