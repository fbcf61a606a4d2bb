use serde_json::Value;
use tracing::warn;

pub const UNKNOWN: &str = "Unknown";

/// Elapsed seconds into display form: `7265` becomes `"2h 1m"`. Absent
/// fields stay silent; malformed ones are logged.
pub fn playtime_display(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(raw) => match numeric(raw) {
            Some(secs) => format_playtime(secs),
            None => {
                warn!("malformed playtime field: {raw}");
                UNKNOWN.to_string()
            }
        },
    }
}

/// Currency into display form: `1500000` becomes `"$1,500,000"`.
pub fn balance_display(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(raw) => match numeric(raw) {
            Some(amount) => format_balance(amount),
            None => {
                warn!("malformed balance field: {raw}");
                UNKNOWN.to_string()
            }
        },
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

pub fn format_playtime(secs: f64) -> String {
    let secs = secs.max(0.0) as u64;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours}h {minutes}m")
}

pub fn format_balance(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let mut whole = amount.trunc() as u64;
    let mut cents = ((amount - amount.trunc()) * 100.0).round() as u64;
    if cents >= 100 {
        whole += 1;
        cents = 0;
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if cents > 0 {
        out.push_str(&format!(".{cents:02}"));
    }
    out
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rem = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(rem.to_string());
            break;
        }
        groups.push(format!("{rem:03}"));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn playtime_hours_and_minutes() {
        assert_eq!(format_playtime(7265.0), "2h 1m");
        assert_eq!(format_playtime(0.0), "0h 0m");
        assert_eq!(format_playtime(59.0), "0h 0m");
        assert_eq!(format_playtime(86400.0), "24h 0m");
    }

    #[test]
    fn balance_groups_thousands() {
        assert_eq!(format_balance(1_500_000.0), "$1,500,000");
        assert_eq!(format_balance(0.0), "$0");
        assert_eq!(format_balance(999.0), "$999");
        assert_eq!(format_balance(1000.0), "$1,000");
    }

    #[test]
    fn balance_shows_cents_only_when_fractional() {
        assert_eq!(format_balance(12.5), "$12.50");
        assert_eq!(format_balance(1234.56), "$1,234.56");
        assert_eq!(format_balance(-42.0), "-$42");
    }

    #[test]
    fn display_accepts_numeric_strings() {
        assert_eq!(playtime_display(Some(&json!("7265"))), "2h 1m");
        assert_eq!(balance_display(Some(&json!(" 1500000 "))), "$1,500,000");
    }

    #[test]
    fn display_degrades_to_unknown() {
        assert_eq!(playtime_display(None), UNKNOWN);
        assert_eq!(playtime_display(Some(&json!("soon"))), UNKNOWN);
        assert_eq!(balance_display(Some(&json!({"nested": true}))), UNKNOWN);
        assert_eq!(balance_display(Some(&json!(null))), UNKNOWN);
    }
}
