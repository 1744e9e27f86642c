//! Best-effort parser for single-line, comma-separated US addresses.
//!
//! Typical inputs look like `123 Main St, Springfield, IL 62701` or
//! `456 Oak Avenue, Unit 2B, Portland, OR 97201`. Parsing never fails;
//! under-specified or unrecognized input degrades to defined fallbacks.

use super::domain::Address;

/// Parse a free-text address into street/city/state/zip.
///
/// Fewer than three comma segments puts the whole trimmed input in
/// `street`. Otherwise the last segment is expected to be `ST 12345`
/// (optionally zip+4); when it is not, the raw segment passes through
/// as `zip` and `state` stays empty.
pub fn parse_address(raw: &str) -> Address {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Address::default();
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Address {
            street: trimmed.to_string(),
            ..Address::default()
        };
    }

    let street = parts[..parts.len() - 2].join(", ");
    let city = parts[parts.len() - 2].to_string();
    let last = parts[parts.len() - 1];

    match split_state_zip(last) {
        Some((state, zip)) => Address {
            street,
            city,
            state: state.to_string(),
            zip: zip.to_string(),
        },
        None => Address {
            street,
            city,
            state: String::new(),
            zip: last.to_string(),
        },
    }
}

/// Match `two uppercase letters, whitespace, 5 digits[-4 digits]` and
/// return the state code and zip on success.
fn split_state_zip(segment: &str) -> Option<(&str, &str)> {
    let bytes = segment.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
        return None;
    }

    let state = &segment[..2];
    let rest = &segment[2..];
    let zip = rest.trim_start();
    if zip.len() == rest.len() {
        // A separator between state and zip is mandatory.
        return None;
    }

    if is_valid_zip(zip) {
        Some((state, zip))
    } else {
        None
    }
}

fn is_valid_zip(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_street_city_state_zip() {
        let address = parse_address("123 Main St, Springfield, IL 62701");
        assert_eq!(address.street, "123 Main St");
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.state, "IL");
        assert_eq!(address.zip, "62701");
    }

    #[test]
    fn rejoins_multi_segment_streets() {
        let address = parse_address("456 Oak Avenue, Unit 2B, Portland, OR 97201");
        assert_eq!(address.street, "456 Oak Avenue, Unit 2B");
        assert_eq!(address.city, "Portland");
        assert_eq!(address.state, "OR");
        assert_eq!(address.zip, "97201");
    }

    #[test]
    fn accepts_zip_plus_four() {
        let address = parse_address("1 Plaza, Des Moines, IA 50309-1234");
        assert_eq!(address.state, "IA");
        assert_eq!(address.zip, "50309-1234");
    }

    #[test]
    fn empty_input_yields_empty_address() {
        assert_eq!(parse_address(""), Address::default());
        assert_eq!(parse_address("   "), Address::default());
    }

    #[test]
    fn short_input_lands_in_street() {
        let address = parse_address("just one segment");
        assert_eq!(address.street, "just one segment");
        assert_eq!(address.city, "");
        assert_eq!(address.state, "");
        assert_eq!(address.zip, "");

        let address = parse_address("123 Main St, Springfield");
        assert_eq!(address.street, "123 Main St, Springfield");
        assert_eq!(address.city, "");
    }

    #[test]
    fn unparseable_tail_passes_through_as_zip() {
        let address = parse_address("123 Main St, Springfield, Illinois 62701");
        assert_eq!(address.street, "123 Main St");
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.state, "");
        assert_eq!(address.zip, "Illinois 62701");
    }

    #[test]
    fn lowercase_state_code_falls_back() {
        let address = parse_address("123 Main St, Springfield, il 62701");
        assert_eq!(address.state, "");
        assert_eq!(address.zip, "il 62701");
    }

    #[test]
    fn missing_separator_between_state_and_zip_falls_back() {
        let address = parse_address("123 Main St, Springfield, IL62701");
        assert_eq!(address.state, "");
        assert_eq!(address.zip, "IL62701");
    }

    #[test]
    fn three_segments_degenerate_to_street_city_tail() {
        let address = parse_address("9 Elm, Ames, IA 50010");
        assert_eq!(address.street, "9 Elm");
        assert_eq!(address.city, "Ames");
        assert_eq!(address.state, "IA");
        assert_eq!(address.zip, "50010");
    }
}
