//! Synthetic planetary-position and house-cusp generators.
//!
//! Signs and houses are deterministic offsets from the sun and rising signs;
//! only the degree within each sign is drawn from the injected random
//! source. Tests pass a seeded RNG to pin degree values.

use rand::Rng;

use crate::domain::{HouseCusp, Planet, PlanetPosition, ZodiacSign};

/// Place all 8 planets relative to the sun sign.
///
/// Planet `i` lands `i + 1` signs after the sun sign and in house `i + 1`,
/// with a uniform degree in `[0, 30)`.
pub fn generate_planets<R: Rng>(sun_sign: ZodiacSign, rng: &mut R) -> Vec<PlanetPosition> {
    Planet::ALL
        .iter()
        .enumerate()
        .map(|(i, planet)| PlanetPosition {
            planet: *planet,
            sign: sun_sign.offset(i + 1),
            degree: rng.gen_range(0.0..30.0),
            house: ((i % 12) + 1) as u8,
        })
        .collect()
}

/// Place the 12 house cusps relative to the rising sign.
///
/// House `n` carries the sign `n - 1` places after the rising sign, with a
/// uniform degree in `[0, 30)`.
pub fn generate_houses<R: Rng>(rising_sign: ZodiacSign, rng: &mut R) -> Vec<HouseCusp> {
    (0..12)
        .map(|i| HouseCusp {
            number: (i + 1) as u8,
            sign: rising_sign.offset(i),
            degree: rng.gen_range(0.0..30.0),
        })
        .collect()
}
