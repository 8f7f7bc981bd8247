use chrono::NaiveDate;

/// Group digits in threes with commas, e.g. `1250000` -> `1,250,000`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Render a number the way a browser locale formatter would: grouped integer
/// part and at most two fractional digits with trailing zeros dropped.
pub fn number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut rendered = thousands(whole);
    if fraction > 0 {
        let decimals = format!("{fraction:02}");
        rendered.push('.');
        rendered.push_str(decimals.trim_end_matches('0'));
    }

    if negative && cents > 0 {
        format!("-{rendered}")
    } else {
        rendered
    }
}

pub fn money(value: f64) -> String {
    format!("${}", number(value))
}

/// Short US-style date, `6/30/2024`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
