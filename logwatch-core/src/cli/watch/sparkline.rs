const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One bar per value, scaled to the largest one.
pub fn sparkline(values: &[u64]) -> String {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return BARS[0].to_string().repeat(values.len());
    }

    let top = (BARS.len() - 1) as u128;
    values
        .iter()
        .map(|&v| BARS[(u128::from(v) * top / u128::from(max)) as usize])
        .collect()
}
