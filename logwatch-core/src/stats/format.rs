const UNIT: u64 = 1000;
const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Render a byte count with SI units and one decimal place (`1000` -> `"1.0 kB"`).
pub fn format_byte_count(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}
