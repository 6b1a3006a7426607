//! Zodiac sign table and the sun/moon/rising resolvers.
//!
//! The moon and rising calculations are deliberate coarse approximations
//! carried over from the original product: the moon sign cycles on a fixed
//! 27.3-day sidereal period from the Unix epoch, and the rising sign uses a
//! simplified local-sidereal-time heuristic. Behavioral compatibility wins
//! over astronomical accuracy here; do not "fix" the formulas.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Approximate lunar sidereal period in days.
const LUNAR_PERIOD_DAYS: f64 = 27.3;

/// The 12 zodiac signs in canonical order.
///
/// Ordering is significant: planetary and house placements are derived by
/// offset arithmetic modulo 12 over this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in canonical order.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in the canonical order (Aries = 0 .. Pisces = 11).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Sign at `index` in the canonical order, wrapping modulo 12.
    pub fn from_index(index: usize) -> ZodiacSign {
        ZodiacSign::ALL[index % 12]
    }

    /// Sign `offset` places after this one in the canonical order.
    pub fn offset(&self, offset: usize) -> ZodiacSign {
        ZodiacSign::from_index(self.index() + offset)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sun sign from fixed (month, day) boundary ranges. Year-invariant, total.
pub fn sun_sign(date: NaiveDate) -> ZodiacSign {
    match (date.month(), date.day()) {
        (3, 21..) | (4, ..=19) => ZodiacSign::Aries,
        (4, 20..) | (5, ..=20) => ZodiacSign::Taurus,
        (5, 21..) | (6, ..=20) => ZodiacSign::Gemini,
        (6, 21..) | (7, ..=22) => ZodiacSign::Cancer,
        (7, 23..) | (8, ..=22) => ZodiacSign::Leo,
        (8, 23..) | (9, ..=22) => ZodiacSign::Virgo,
        (9, 23..) | (10, ..=22) => ZodiacSign::Libra,
        (10, 23..) | (11, ..=21) => ZodiacSign::Scorpio,
        (11, 22..) | (12, ..=21) => ZodiacSign::Sagittarius,
        (12, 22..) | (1, ..=19) => ZodiacSign::Capricorn,
        (1, 20..) | (2, ..=18) => ZodiacSign::Aquarius,
        _ => ZodiacSign::Pisces,
    }
}

/// Moon sign from whole days elapsed since 1970-01-01, cycling through the
/// 12 signs on the fixed lunar period. Repeats every ~327.6 days.
pub fn moon_sign(date: NaiveDate) -> ZodiacSign {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    let days = date.signed_duration_since(epoch).num_days() as f64;
    let full_cycle = LUNAR_PERIOD_DAYS * 12.0;
    let index = (days.rem_euclid(full_cycle) / LUNAR_PERIOD_DAYS).floor() as usize;
    ZodiacSign::from_index(index)
}

/// Rising sign from a simplified local-sidereal-time approximation.
///
/// Callers without a geocoded birth place pass (0.0, 0.0), the documented
/// equator/prime-meridian default.
pub fn rising_sign(date: NaiveDate, time: NaiveTime, latitude: f64, longitude: f64) -> ZodiacSign {
    let day_of_year = date.ordinal() as f64;
    let ut = time.hour() as f64 + time.minute() as f64 / 60.0;

    let gst = (6.697374558 + 0.06570982441908 * day_of_year + 1.00273790935 * ut).rem_euclid(24.0);
    let lst = (gst + longitude / 15.0).rem_euclid(24.0);

    let base = ((lst / 24.0) * 12.0).floor() as usize;
    let latitude_offset = ((latitude.abs() / 90.0) * 2.0).floor() as usize;

    ZodiacSign::from_index(base + latitude_offset)
}
