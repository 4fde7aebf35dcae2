/// Longest bar drawn for a ranking row (contributors, hot files).
pub const RANKING_BAR_MAX: usize = 20;

/// Split `total` character cells between weighted items.
///
/// Each item gets `round(weight / sum * total)` cells, never more than what is
/// left. The last item with a positive weight absorbs the remainder, so the
/// widths add up to exactly `total`. Zero-weight items get nothing. When no
/// weight is positive there is nothing to draw and every width is zero.
pub fn allocate(weights: &[f64], total: usize) -> Vec<usize> {
    let mut widths = vec![0; weights.len()];
    let weight_sum: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    let last = match weights.iter().rposition(|w| *w > 0.0) {
        Some(idx) if weight_sum > 0.0 => idx,
        _ => return widths,
    };

    let mut remaining = total;
    for (idx, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        let width = if idx == last {
            remaining
        } else {
            ((weight / weight_sum * total as f64).round() as usize).min(remaining)
        };
        widths[idx] = width;
        remaining -= width;
    }
    widths
}

/// Bar length for a ranking row scaled against the top entry.
///
/// Truncates toward zero, but any nonzero value keeps at least one cell.
pub fn ranking_width(value: u32, max: u32) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    let width = (value as f64 / max as f64 * RANKING_BAR_MAX as f64) as usize;
    width.clamp(1, RANKING_BAR_MAX)
}
