use chrono::NaiveDate;

/// Format an amount in cents as US dollars, e.g. `$15,795.00`
pub fn format_currency(amount_cents: i64) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let cents = amount_cents.unsigned_abs();
    let dollars = group_thousands(cents / 100);
    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

/// Format a date the way the dashboard shows it, e.g. `Dec 6, 2022`
pub fn format_date_to_local(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
