//! Console report for the prober

use crate::cli::config::USER_ID_ENV;
use crate::probe::prober::ProbeHit;

/// Placeholder for a missing value
const NOT_AVAILABLE: &str = "N/A";

/// Two indented lines: solved count and solve rate
pub fn hit_detail_lines(hit: &ProbeHit) -> [String; 2] {
    let solved = hit
        .stats
        .puzzles_solved
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string);
    let rate = hit
        .stats
        .solve_rate
        .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string());
    [
        format!("   Puzzles solved: {}", solved),
        format!("   Solve rate: {}", rate),
    ]
}

/// Final summary printed after all candidates were tried
pub fn summary_lines(hits: &[ProbeHit]) -> Vec<String> {
    if hits.is_empty() {
        return vec![
            "No valid user IDs found in the tested range.".to_string(),
            String::new(),
            "Try these manual methods:".to_string(),
            "1. Open browser dev tools (F12) -> Network tab".to_string(),
            "2. Visit nytimes.com/crosswords".to_string(),
            "3. Look for API calls to 'stats-and-streaks.json'".to_string(),
            "4. Your user ID will be in the URL".to_string(),
        ];
    }

    let mut lines = vec!["Success! Found valid user ID(s):".to_string()];
    for hit in hits {
        lines.push(format!("   User ID: {}", hit.user_id));
        lines.extend(hit_detail_lines(hit));
        lines.push(String::new());
    }

    if let [only] = hits {
        lines.push(format!(
            "Use this user ID as the {} secret: {}",
            USER_ID_ENV, only.user_id
        ));
    } else {
        lines.push("Multiple IDs found. Use the one with the most puzzles solved.".to_string());
    }
    lines
}
