//! Number formatting for the KPI panel, map labels and chart axes.

/// Integer with comma thousands separators, e.g. `1,234,567`.
pub fn thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Value rounded to a whole number (ties to even) with thousands separators.
pub fn thousands_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let grouped = group_digits(&digits);
    if value < 0.0 && digits != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Dollar amount in trillions with two decimals, e.g. `$1.23 Trillion`.
pub fn trillions(value: f64) -> String {
    format!("${:.2} Trillion", value / 1e12)
}

/// Short dollar amount for axis ticks, e.g. `$340.0B`.
pub fn compact_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        return format!("{sign}${abs:.0}");
    };
    format!("{sign}${scaled:.1}{suffix}")
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn thousands_f64_rounds_without_decimals() {
        assert_eq!(thousands_f64(1234.4), "1,234");
        assert_eq!(thousands_f64(2500000.0), "2,500,000");
        assert_eq!(thousands_f64(-1234.0), "-1,234");
        assert_eq!(thousands_f64(-0.2), "0");
    }

    #[test]
    fn trillions_uses_two_decimals() {
        assert_eq!(trillions(350.0), "$0.00 Trillion");
        assert_eq!(trillions(1.234e12), "$1.23 Trillion");
        assert_eq!(trillions(2.5e13), "$25.00 Trillion");
    }

    #[test]
    fn compact_usd_picks_unit() {
        assert_eq!(compact_usd(0.0), "$0");
        assert_eq!(compact_usd(1500.0), "$1.5K");
        assert_eq!(compact_usd(3.4e11), "$340.0B");
        assert_eq!(compact_usd(1.2e12), "$1.2T");
        assert_eq!(compact_usd(-5e6), "-$5.0M");
    }
}
