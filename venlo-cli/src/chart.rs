//! Text charts for the terminal.

/// Block characters for 8 value levels.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block per value, scaled between the series minimum and maximum.
/// Missing values render as a space.
pub fn sparkline(values: &[Option<f64>]) -> String {
    let known = values.iter().flatten().copied();
    let (min, max) = known.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;

    values
        .iter()
        .map(|v| match v {
            Some(v) if span > 0.0 => {
                let normalized = ((v - min) / span).clamp(0.0, 1.0);
                BLOCKS[((normalized * 7.0).round() as usize).min(7)]
            }
            Some(_) => BLOCKS[3],
            None => ' ',
        })
        .collect()
}

/// Horizontal bar of 1 to `width` cells, scaled between `lo` and `hi`.
/// Values at or below `lo` still get one cell so negative readings stay
/// visible; an empty range draws every value at full width.
pub fn bar(value: f64, lo: f64, hi: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = hi - lo;
    let normalized = if span > 0.0 { ((value - lo) / span).clamp(0.0, 1.0) } else { 1.0 };
    let cells = 1 + (normalized * (width - 1) as f64).round() as usize;
    "█".repeat(cells)
}
