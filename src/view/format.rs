const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];
const TOLERANCE: f64 = 0.01;

/// Number with at most two decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').to_string()
}

/// Ingredient quantity as a kitchen fraction when it is close to one
/// (`1.5` → `1 1/2`), otherwise as a plain number.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return format_number(value);
    }

    let whole = value.trunc();
    let frac = value - whole;
    if frac < TOLERANCE / 2.0 {
        return format_number(whole);
    }
    if 1.0 - frac < TOLERANCE / 2.0 {
        return format_number(whole + 1.0);
    }

    for denominator in DENOMINATORS {
        let scaled = frac * denominator as f64;
        if (scaled - scaled.round()).abs() < TOLERANCE {
            let numerator = scaled.round() as u32;
            let divisor = gcd(numerator, denominator);
            let fraction = format!("{}/{}", numerator / divisor, denominator / divisor);
            return if whole == 0.0 {
                fraction
            } else {
                format!("{} {}", whole as i64, fraction)
            };
        }
    }

    format_number(value)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
