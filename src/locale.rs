// Number formatting used across the dashboard: Brazilian-Portuguese digit
// grouping for counts and a fixed two-decimal percentage.

pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}
