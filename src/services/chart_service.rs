//! Chart assembly orchestration.

use chrono::Utc;
use rand::Rng;

use crate::domain::{
    AppError, BirthInput, ChartRecord, generate_houses, generate_planets, moon_sign, rising_sign,
    sun_sign,
};
use crate::ports::TextGenerator;
use crate::services::interpretation::InterpretationProducer;
use crate::services::prompt::ChartContext;

/// Assembles complete chart records from validated birth input.
///
/// Assembly is all-or-nothing: the caller receives either a fully populated
/// record or an error, never a partial chart.
pub struct ChartService<'a> {
    producer: InterpretationProducer<'a>,
}

impl<'a> ChartService<'a> {
    /// Interpretations come from the built-in templates only.
    pub fn template_only() -> Self {
        Self { producer: InterpretationProducer::template_only() }
    }

    /// Interpretations come from the generator, with template fallback.
    pub fn with_generator(generator: &'a dyn TextGenerator) -> Self {
        Self { producer: InterpretationProducer::with_generator(generator) }
    }

    /// Assemble a chart using the process entropy source.
    pub fn assemble(&self, input: BirthInput) -> Result<ChartRecord, AppError> {
        self.assemble_with_rng(input, &mut rand::thread_rng())
    }

    /// Assemble a chart drawing degree values from the given random source.
    pub fn assemble_with_rng<R: Rng>(
        &self,
        input: BirthInput,
        rng: &mut R,
    ) -> Result<ChartRecord, AppError> {
        let sun = sun_sign(input.date_of_birth);
        let moon = moon_sign(input.date_of_birth);
        let (latitude, longitude) = input.coordinates();
        let rising = rising_sign(input.date_of_birth, input.time_of_birth, latitude, longitude);

        let planets = generate_planets(sun, rng);
        let houses = generate_houses(rising, rng);

        let interpretation = self.producer.produce(&ChartContext {
            sun_sign: sun,
            moon_sign: moon,
            rising_sign: rising,
            place_of_birth: &input.place_of_birth,
            planets: &planets,
            houses: &houses,
        });

        let chart = ChartRecord {
            id: None,
            owner: None,
            input,
            sun_sign: sun,
            moon_sign: moon,
            rising_sign: rising,
            planets,
            houses,
            interpretation,
            created_at: Utc::now(),
        };

        verify_invariants(&chart)?;
        Ok(chart)
    }
}

/// Guard against an internal generator defect leaking a malformed record.
fn verify_invariants(chart: &ChartRecord) -> Result<(), AppError> {
    if chart.planets.len() != 8 {
        return Err(AppError::ChartGeneration(format!(
            "expected 8 planets, got {}",
            chart.planets.len()
        )));
    }
    if chart.houses.len() != 12 {
        return Err(AppError::ChartGeneration(format!(
            "expected 12 houses, got {}",
            chart.houses.len()
        )));
    }
    for (i, house) in chart.houses.iter().enumerate() {
        if house.number as usize != i + 1 {
            return Err(AppError::ChartGeneration(format!(
                "house {} out of order at position {}",
                house.number, i
            )));
        }
    }
    if chart.interpretation.is_empty() {
        return Err(AppError::ChartGeneration("empty interpretation".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::{Planet, ZodiacSign};
    use crate::ports::FailingTextGenerator;

    fn ada() -> BirthInput {
        BirthInput::parse("Ada", "1990-03-21", "00:00", "London", Some(51.5), Some(-0.12)).unwrap()
    }

    #[test]
    fn assembles_a_complete_chart() {
        let chart = ChartService::template_only().assemble(ada()).unwrap();

        assert_eq!(chart.sun_sign, ZodiacSign::Aries);
        assert_eq!(chart.planets.len(), 8);
        assert_eq!(chart.houses.len(), 12);
        assert!(!chart.interpretation.is_empty());
        assert!(chart.id.is_none());
    }

    #[test]
    fn degree_draws_vary_but_structure_repeats() {
        let service = ChartService::template_only();
        let a = service.assemble(ada()).unwrap();
        let b = service.assemble(ada()).unwrap();

        // Signs and counts are idempotent; degrees are fresh draws.
        assert_eq!(a.sun_sign, b.sun_sign);
        assert_eq!(a.moon_sign, b.moon_sign);
        assert_eq!(a.rising_sign, b.rising_sign);
        for (pa, pb) in a.planets.iter().zip(&b.planets) {
            assert_eq!(pa.planet, pb.planet);
            assert_eq!(pa.sign, pb.sign);
            assert_eq!(pa.house, pb.house);
        }
    }

    #[test]
    fn seeded_assembly_is_reproducible() {
        let service = ChartService::template_only();
        let a = service.assemble_with_rng(ada(), &mut StdRng::seed_from_u64(11)).unwrap();
        let b = service.assemble_with_rng(ada(), &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(a.planets, b.planets);
        assert_eq!(a.houses, b.houses);
    }

    #[test]
    fn failing_generator_still_yields_a_populated_chart() {
        let generator = FailingTextGenerator;
        let chart = ChartService::with_generator(&generator).assemble(ada()).unwrap();

        assert!(chart.interpretation.contains("Aries"));
        assert_eq!(chart.planets[0].planet, Planet::Mercury);
    }
}
