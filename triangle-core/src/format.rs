/// Decimal places shown for computed values.
pub const DISPLAY_DECIMALS: usize = 2;

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Render a computed value for an input field, rounding like JavaScript's
/// `Number.prototype.toFixed(2)`: the exact binary value is rounded half away
/// from zero, so 0.625 shows as "0.63" while 1.005 (stored just below) shows
/// as "1.00".
pub fn format_display(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }

    // -0.0 prints without a sign, as in JavaScript.
    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(DISPLAY_DECIMALS))
        .map(|b| b - b'0')
        .collect();
    if frac.as_bytes().get(DISPLAY_DECIMALS).is_some_and(|&b| b >= b'5') {
        round_up(&mut digits);
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let split = text.len() - DISPLAY_DECIMALS;
    format!("{sign}{}.{}", &text[..split], &text[split..])
}

fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Read the text of an input field. Blank, unparseable and non-finite text
/// all count as an empty slot.
pub fn parse_field(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
