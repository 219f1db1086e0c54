//! Number formatting for cards, chart axes and tooltips (en-US grouping)

/// Format with a comma thousands separator and fixed decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Card value: zero reads as "N/A" (nothing sold in the window)
pub fn format_or_na(value: f64, format: fn(f64) -> String) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        format(value)
    }
}

/// Short axis label: 950, 1.5k, 2.3M
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_zero(format!("{:.1}", value / 1_000_000.0)) + "M"
    } else if abs >= 1_000.0 {
        trim_zero(format!("{:.1}", value / 1_000.0)) + "k"
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn trim_zero(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}
