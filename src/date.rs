//! Multi-format date parsing used as the date sort key.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Formats tried in order; the first one that consumes the whole input wins.
///
/// Day-first `%d/%m/%Y` is deliberately tried before month-first `%m/%d/%Y`,
/// so `03/04/2023` is the 3rd of April.
pub const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
];

/// Parse `value` into a comparable point in time.
///
/// Never fails: anything that matches none of [`DATE_FORMATS`] (including the
/// empty string) maps to [`NaiveDateTime::MIN`], so it sorts first.
pub fn parse_date(value: &str) -> NaiveDateTime {
    for fmt in DATE_FORMATS.iter() {
        if let Some(t) = parse_with_format(value, fmt) {
            return t;
        }
    }

    tracing::trace!(value, "no date format matched");
    NaiveDateTime::MIN
}

fn parse_with_format(value: &str, fmt: &str) -> Option<NaiveDateTime> {
    if !matches_shape(value, fmt) {
        return None;
    }

    if fmt.contains("%H") {
        return NaiveDateTime::parse_from_str(value, fmt).ok();
    }

    match NaiveDate::parse_from_str(value, fmt) {
        Ok(d) => Some(d.and_time(NaiveTime::MIN)),
        Err(_) => None,
    }
}

/// Check the layout chrono is too lenient about: `%Y` is exactly four digits,
/// other fields one or two digits, a space needs at least one whitespace
/// character and every other literal must appear as is. No sign, no padding.
fn matches_shape(value: &str, fmt: &str) -> bool {
    let mut rest = value.as_bytes();
    let mut spec = fmt.as_bytes();

    while let Some((&c, tail)) = spec.split_first() {
        spec = tail;
        match c {
            b'%' => {
                let (field, tail) = match spec.split_first() {
                    Some(res) => res,
                    None => return false,
                };
                spec = tail;

                let (min, max) = if *field == b'Y' { (4, 4) } else { (1, 2) };
                let digits = rest
                    .iter()
                    .take(max)
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if digits < min {
                    return false;
                }
                rest = &rest[digits..];
            }
            b' ' => {
                let blanks = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
                if blanks == 0 {
                    return false;
                }
                rest = &rest[blanks..];
            }
            literal => match rest.split_first() {
                Some((&b, tail)) if b == literal => rest = tail,
                _ => return false,
            },
        }
    }

    rest.is_empty()
}
