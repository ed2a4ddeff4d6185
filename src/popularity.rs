use crate::error::NormalizeError;
use crate::models::{ScoredVisitor, VisitorRecord};

/// Lowest and highest popularity score.
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Min-max normalize year-to-date counts into the `1..=10` band, rounding up.
///
/// `score = ceil((ytd - min) / (max - min) * 9 + 1)`
///
/// Output order matches input order. Fails when the input is empty or when all
/// counts are equal, since the range would be zero.
pub fn normalize(ytd: &[u64]) -> Result<Vec<u8>, NormalizeError> {
    let min = *ytd.iter().min().ok_or(NormalizeError::Empty)?;
    let max = *ytd.iter().max().ok_or(NormalizeError::Empty)?;
    if max == min {
        return Err(NormalizeError::Degenerate { value: min });
    }

    let span = (max - min) as f64;
    let band = f64::from(MAX_SCORE - MIN_SCORE);
    Ok(ytd
        .iter()
        .map(|&v| {
            let scaled = ((v - min) as f64 / span) * band + f64::from(MIN_SCORE);
            // keep float rounding from leaving the band
            (scaled.ceil() as u8).clamp(MIN_SCORE, MAX_SCORE)
        })
        .collect())
}

/// Attach a popularity score to every visitor record.
pub fn score_visitors(visitors: &[VisitorRecord]) -> Result<Vec<ScoredVisitor>, NormalizeError> {
    let ytd: Vec<u64> = visitors.iter().map(|v| v.ytd).collect();
    let scores = normalize(&ytd)?;
    log::debug!(
        "normalized {} visitor counts into popularity {}..={}",
        scores.len(),
        MIN_SCORE,
        MAX_SCORE
    );
    Ok(visitors
        .iter()
        .zip(scores)
        .map(|(v, popularity)| ScoredVisitor {
            location: v.location.clone(),
            popularity,
        })
        .collect())
}
