//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `45.2` → `"45.20"`
pub fn litres2readable(litres: f64) -> String {
    format!("{:.2}", litres)
}

/// `123456` → `"123 456"`
pub fn km2readable(km: u64) -> String {
    let digits = km.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }

    out
}

/// Text and ANSI colour for a fill-up type label.
pub fn describe_fuel_type(label: &str) -> (String, &'static str) {
    match label {
        "Diesel" => ("Diesel".into(), "\x1b[33m"),
        "AdBlue" => ("AdBlue".into(), "\x1b[36m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
