//! Indonesian-locale number formatting shared by insight text and CLI output.

/// Format with `.` thousands separators, `,` decimal mark and at most three
/// fraction digits (trailing zeros dropped): `1234567.5` -> `"1.234.567,5"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = (value.abs() * 1000.0).round() as u128;
    let int_part = scaled / 1000;
    let frac_part = scaled % 1000;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if frac_part > 0 {
        let frac = format!("{:03}", frac_part);
        grouped.push(',');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `"12.5%"` with a fixed number of decimals.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Tonnage, switching to thousands ("ribu ton") from 1000 up.
pub fn format_weight(tons: f64) -> String {
    if tons >= 1000.0 {
        format!("{} ribu ton", format_number(tons / 1000.0))
    } else {
        format!("{} ton", format_number(tons))
    }
}

/// Short form for large values: `Rb` (thousand), `Jt` (million), `M` (billion).
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1} M", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1} Jt", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1} Rb", value / 1_000.0)
    } else {
        format_number(value)
    }
}
