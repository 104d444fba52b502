use crate::models::{FeedbackEntry, MoodStats};

/// Derives the average mood and per-score histogram from the entry list.
/// Reads the list only; every render recomputes from scratch.
pub fn aggregate(entries: &[FeedbackEntry]) -> MoodStats {
    let mut histogram = [0u64; 5];
    let mut sum = 0u64;
    for entry in entries {
        sum += u64::from(entry.mood);
        if (1..=5).contains(&entry.mood) {
            histogram[usize::from(entry.mood) - 1] += 1;
        }
    }

    let count = entries.len();
    let average = if count == 0 {
        0.0
    } else {
        (sum as f64 / count as f64 * 10.0).round() / 10.0
    };

    MoodStats {
        average,
        count,
        histogram,
    }
}

/// Qualitative label for an average (or single) mood score.
/// The same thresholds drive the emoji shown on the dashboard.
pub fn mood_label(score: f64) -> &'static str {
    if score >= 4.5 {
        "very positive"
    } else if score >= 3.5 {
        "positive"
    } else if score >= 2.5 {
        "neutral"
    } else if score >= 1.5 {
        "negative"
    } else {
        "very negative"
    }
}
