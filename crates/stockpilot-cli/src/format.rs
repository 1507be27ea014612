//! Display formatting for money, percentages, and sizes.

/// Format a dollar amount with thousands separators: `$1,234.56`.
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let grouped = group_thousands(dollars);
    if negative {
        format!("-${grouped}.{rem:02}")
    } else {
        format!("${grouped}.{rem:02}")
    }
}

/// Format a signed percentage: `+1.69%` / `-0.27%`.
pub fn percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Abbreviate a large dollar figure: `$2.95T`, `$1.20B`, `$45.00M`.
pub fn large_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::from("N/A");
    };

    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        currency(value)
    }
}

/// Abbreviate a share volume: `51.23M`, `1.20B`.
pub fn volume(value: Option<u64>) -> String {
    let Some(value) = value else {
        return String::from("N/A");
    };
    let value = value as f64;

    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Direction marker for a change value.
pub fn change_arrow(change: f64) -> &'static str {
    if change > 0.0 {
        "↑"
    } else if change < 0.0 {
        "↓"
    } else {
        "→"
    }
}

/// `N/A` fallback for optional display strings.
pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn group_thousands(mut value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }

    let mut groups = Vec::new();
    while value >= 1_000 {
        groups.push(format!("{:03}", value % 1_000));
        value /= 1_000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(",")
}
