pub trait DecimalFormat {
    /// Fixed-point notation where exact binary halves round away from zero, 1.125 becomes `1.13`.
    fn to_fixed(self, digits: usize) -> String;

    fn to_plain(self) -> String;
}

// Enough decimals to print any finite f64 exactly
const EXACT_DIGITS: usize = 1100;

impl DecimalFormat for f64 {
    fn to_fixed(self, digits: usize) -> String {
        if !self.is_finite() {
            return self.to_plain();
        }

        let exact = format!("{:.*}", EXACT_DIGITS, self.abs());
        let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        let (kept, dropped) = fraction.split_at(digits.min(fraction.len()));

        let mut number: Vec<u8> = integer.bytes().chain(kept.bytes()).collect();
        number.resize(integer.len() + digits, b'0');
        if dropped.as_bytes().first().is_some_and(|digit| *digit >= b'5') {
            increment(&mut number);
        }

        let split = number.len() - digits;
        let sign = if self < 0.0 { "-" } else { "" };
        let integer = String::from_utf8_lossy(&number[..split]);
        if digits == 0 {
            return format!("{}{}", sign, integer);
        }
        format!("{}{}.{}", sign, integer, String::from_utf8_lossy(&number[split..]))
    }

    fn to_plain(self) -> String {
        match self {
            value if value.is_nan() => "NaN".to_string(),
            value if value == f64::INFINITY => "Infinity".to_string(),
            value if value == f64::NEG_INFINITY => "-Infinity".to_string(),
            value if value == 0.0 => "0".to_string(),
            value => value.to_string(),
        }
    }
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
