const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Formats a byte count with binary prefixes.
///
/// Counts below 1 KiB are printed as whole bytes. Larger counts use the biggest prefix
/// up to TiB that keeps the value below 1024, with four significant digits.
pub fn format_storage_units(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.;
    let mut unit = 0;
    while unit < UNITS.len() - 1 && value >= 1024. {
        value /= 1024.;
        unit += 1;
    }

    format!("{} {}", to_precision(value, 4), UNITS[unit])
}

/// Formats a positive `value` with `digits` significant digits, switching to exponent
/// notation once the integer part needs more than `digits` digits. Ties round away from zero.
fn to_precision(value: f64, digits: i32) -> String {
    let mut exp = value.log10().floor() as i32;
    let mut mantissa = round_shifted(value, digits - 1 - exp);
    // rounding can carry into the next power of ten, e.g. 9.9996 -> 10.00
    if mantissa >= 10u64.pow(digits as u32) {
        exp += 1;
        mantissa = round_shifted(value, digits - 1 - exp);
    }

    let mantissa = mantissa.to_string();
    if exp < digits {
        let decimals = (digits - 1 - exp).max(0) as usize;
        if decimals == 0 {
            return mantissa;
        }
        let (int, frac) = mantissa.split_at(mantissa.len() - decimals);
        format!("{}.{}", int, frac)
    } else {
        let (int, frac) = mantissa.split_at(1);
        format!("{}.{}e+{}", int, frac, exp)
    }
}

/// Rounds `value * 10^shift` to an integer.
fn round_shifted(value: f64, shift: i32) -> u64 {
    let scaled = if shift >= 0 {
        value * 10f64.powi(shift)
    } else {
        value / 10f64.powi(-shift)
    };
    scaled.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes() {
        assert_eq!(format_storage_units(0), "0 B");
        assert_eq!(format_storage_units(1023), "1023 B");
    }

    #[test]
    fn prefixes() {
        assert_eq!(format_storage_units(1024), "1.000 KiB");
        assert_eq!(format_storage_units(1536), "1.500 KiB");
        assert_eq!(format_storage_units(10 << 20), "10.00 MiB");
        assert_eq!(format_storage_units(300 << 30), "300.0 GiB");
        assert_eq!(format_storage_units(1023 << 40), "1023 TiB");
    }

    #[test]
    fn stays_below_next_prefix() {
        // 1023.9 KiB is not promoted to MiB
        assert_eq!(format_storage_units(1_048_474), "1024 KiB");
        assert_eq!(format_storage_units(1 << 20), "1.000 MiB");
    }

    #[test]
    fn rounding_carries() {
        // 9.999999 MiB
        assert_eq!(format_storage_units((10 << 20) - 1), "10.00 MiB");
        assert_eq!(format_storage_units(10_239), "9.999 KiB");
    }

    #[test]
    fn ties_round_up() {
        // 100.25, 10.125 and 1.0625 KiB are exact in binary
        assert_eq!(format_storage_units(102_656), "100.3 KiB");
        assert_eq!(format_storage_units(10_368), "10.13 KiB");
        assert_eq!(format_storage_units(1_088), "1.063 KiB");
    }

    #[test]
    fn beyond_tebibytes() {
        assert_eq!(format_storage_units(123_456 << 40), "1.235e+5 TiB");
        assert_eq!(format_storage_units(2048 << 40), "2048 TiB");
    }
}
