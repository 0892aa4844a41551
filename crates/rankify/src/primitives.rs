use std::cmp::Ordering;

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// Returned by [`parse_timestamp`] for missing or unreadable dates. Sorts as the
/// earliest possible time.
pub const MISSING_TIMESTAMP: i64 = -1;

/// Values that may be "blank". Blank values sort after everything else.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(impl Blank for $ty {
            fn is_blank(&self) -> bool {
                false
            }
        })*
    };
}

never_blank!(i32, i64, u32, u64, usize);

/// Null-aware scalar comparison.
///
/// Equal values are equal, and so are two blanks. Otherwise a blank operand is
/// greater than anything, whichever side it is on, and the rest falls back to
/// the natural order.
pub fn compare_scalar<T: Ord + Blank + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.is_blank(), b.is_blank()) {
        (true, true) => Ordering::Equal,
        (true, _) => Ordering::Greater,
        (_, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// Epoch milliseconds of an ISO-8601 date or date-time, or
/// [`MISSING_TIMESTAMP`] when there is nothing usable.
pub fn parse_timestamp(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MISSING_TIMESTAMP;
    };

    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| {
            PrimitiveDateTime::parse(
                raw,
                format_description!(
                    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
                ),
            )
            .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|_| {
            Date::parse(raw, format_description!("[year]-[month]-[day]"))
                .map(|date| date.midnight().assume_utc())
        });

    match parsed {
        Ok(instant) => (instant.unix_timestamp_nanos() / 1_000_000) as i64,
        Err(_) => {
            tracing::trace!("unparsable timestamp {raw:?}");
            MISSING_TIMESTAMP
        }
    }
}
