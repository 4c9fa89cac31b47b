use crate::stats::Stats;

/// Nearest multiple of ten. A tie goes to the even multiple, so 65 shows
/// as 60 and 75 as 80.
pub fn round_score(score: u32) -> u32 {
    let down = score - score % 10;
    let up = match score % 10 {
        0..=4 => false,
        5 => (down / 10) % 2 == 1,
        _ => true,
    };
    if up {
        down.checked_add(10).unwrap_or(down)
    } else {
        down
    }
}

/// `1234567` → `"1,234,567"`.
pub fn with_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub struct ScoreLines {
    pub score: String,
    pub high_score: String,
    pub level: String,
}

impl ScoreLines {
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            score: with_thousands(round_score(stats.score)),
            high_score: with_thousands(round_score(stats.high_score)),
            level: stats.level.to_string(),
        }
    }
}
