//! Interpretation strategies.
//!
//! Two interchangeable strategies produce the narrative text: a pure
//! template strategy that always succeeds, and a generative strategy that
//! delegates to the text-generation port. [`InterpretationProducer`] fixes
//! the fallback order so chart assembly always gets text.

use crate::domain::{AppError, ZodiacSign};
use crate::ports::TextGenerator;
use crate::services::prompt::{ChartContext, render_interpretation_prompt};

/// A source of narrative interpretation text for a resolved chart.
pub trait InterpretationStrategy {
    fn interpret(&self, chart: &ChartContext<'_>) -> Result<String, AppError>;
}

/// Deterministic per-sign template interpretation. Total: never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStrategy;

impl InterpretationStrategy for TemplateStrategy {
    fn interpret(&self, chart: &ChartContext<'_>) -> Result<String, AppError> {
        Ok(compose_template(chart.sun_sign, chart.moon_sign, chart.rising_sign))
    }
}

/// Interpretation via the external text-generation collaborator.
pub struct GenerativeStrategy<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> GenerativeStrategy<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }
}

impl InterpretationStrategy for GenerativeStrategy<'_> {
    fn interpret(&self, chart: &ChartContext<'_>) -> Result<String, AppError> {
        let prompt = render_interpretation_prompt(chart)?;
        let text = self.generator.generate(&prompt)?;
        if text.trim().is_empty() {
            return Err(AppError::Generation("empty response".to_string()));
        }
        Ok(text)
    }
}

/// Produces the interpretation field with a fixed fallback order: the
/// generative strategy when configured, then templates on any failure.
///
/// The generation error is recovered here and never reaches the caller, so
/// producing an interpretation is infallible.
pub struct InterpretationProducer<'a> {
    generative: Option<GenerativeStrategy<'a>>,
}

impl<'a> InterpretationProducer<'a> {
    /// Template output only; no external call is attempted.
    pub fn template_only() -> Self {
        Self { generative: None }
    }

    /// Try the generator first, fall back to templates.
    pub fn with_generator(generator: &'a dyn TextGenerator) -> Self {
        Self { generative: Some(GenerativeStrategy::new(generator)) }
    }

    pub fn produce(&self, chart: &ChartContext<'_>) -> String {
        if let Some(generative) = &self.generative
            && let Ok(text) = generative.interpret(chart)
        {
            return text;
        }
        compose_template(chart.sun_sign, chart.moon_sign, chart.rising_sign)
    }
}

/// Concatenate the three per-sign sentences and the closing paragraph.
fn compose_template(sun: ZodiacSign, moon: ZodiacSign, rising: ZodiacSign) -> String {
    format!(
        "Your Sun in {sun} reveals that {sun_blurb}\n\n\
         With your Moon in {moon}, {moon_blurb}\n\n\
         Your {rising} Rising means that {rising_blurb}\n\n\
         This unique combination creates a multifaceted personality. Your {sun} core drives \
         your basic identity and life purpose, while your {moon} Moon shapes your emotional \
         responses and inner needs. Meanwhile, your {rising} Ascendant influences how you \
         approach new situations and how others initially perceive you.\n\n\
         The interplay between these three key placements forms the foundation of your \
         astrological identity, with each planetary position adding additional layers of \
         meaning to your cosmic blueprint.",
        sun = sun,
        moon = moon,
        rising = rising,
        sun_blurb = sun_blurb(sun),
        moon_blurb = moon_blurb(moon),
        rising_blurb = rising_blurb(rising),
    )
}

fn sun_blurb(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Bold and pioneering, you approach life with courage and enthusiasm.",
        ZodiacSign::Taurus => {
            "Grounded and reliable, you value stability and the finer things in life."
        }
        ZodiacSign::Gemini => {
            "Curious and communicative, you thrive on mental stimulation and variety."
        }
        ZodiacSign::Cancer => {
            "Nurturing and intuitive, you lead with your heart and value emotional connections."
        }
        ZodiacSign::Leo => {
            "Charismatic and creative, you shine brightest when expressing your authentic self."
        }
        ZodiacSign::Virgo => {
            "Analytical and service-oriented, you excel at bringing order and improvement to the world."
        }
        ZodiacSign::Libra => {
            "Diplomatic and harmonious, you seek balance and beauty in all aspects of life."
        }
        ZodiacSign::Scorpio => {
            "Intense and transformative, you possess remarkable depth and investigative power."
        }
        ZodiacSign::Sagittarius => {
            "Adventurous and philosophical, you seek truth and expansion through experience."
        }
        ZodiacSign::Capricorn => {
            "Ambitious and disciplined, you build lasting structures through determination and wisdom."
        }
        ZodiacSign::Aquarius => {
            "Innovative and humanitarian, you envision and create a better future for all."
        }
        ZodiacSign::Pisces => {
            "Compassionate and imaginative, you navigate life through intuition and spiritual connection."
        }
    }
}

fn moon_blurb(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "your emotional nature is direct and passionate.",
        ZodiacSign::Taurus => "you find emotional security through stability and comfort.",
        ZodiacSign::Gemini => {
            "your feelings are expressed through communication and intellectual connection."
        }
        ZodiacSign::Cancer => "deeply sensitive, you process emotions with profound care.",
        ZodiacSign::Leo => "you need recognition and warmth to feel emotionally fulfilled.",
        ZodiacSign::Virgo => "you analyze your feelings and seek practical ways to address them.",
        ZodiacSign::Libra => "emotional harmony and partnership are essential to your wellbeing.",
        ZodiacSign::Scorpio => "you experience emotions intensely and transformatively.",
        ZodiacSign::Sagittarius => "freedom and optimism fuel your emotional landscape.",
        ZodiacSign::Capricorn => "you approach emotions with maturity and self-control.",
        ZodiacSign::Aquarius => "your emotional needs are unique and often unconventional.",
        ZodiacSign::Pisces => "highly empathetic, you absorb the emotions of those around you.",
    }
}

fn rising_blurb(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "you present yourself as confident and action-oriented.",
        ZodiacSign::Taurus => "others see you as calm, reliable, and grounded.",
        ZodiacSign::Gemini => "your outward persona is witty, adaptable, and engaging.",
        ZodiacSign::Cancer => "you come across as caring, protective, and emotionally attuned.",
        ZodiacSign::Leo => "your presence is warm, dramatic, and naturally commanding.",
        ZodiacSign::Virgo => "you appear modest, helpful, and detail-focused to others.",
        ZodiacSign::Libra => "grace, charm, and diplomacy characterize your outward expression.",
        ZodiacSign::Scorpio => "you project intensity, mystery, and magnetic power.",
        ZodiacSign::Sagittarius => {
            "your approach to life appears optimistic, open, and adventurous."
        }
        ZodiacSign::Capricorn => "you present as responsible, mature, and ambitious.",
        ZodiacSign::Aquarius => "others perceive you as unique, progressive, and independent.",
        ZodiacSign::Pisces => "you appear gentle, artistic, and spiritually inclined.",
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::{generate_houses, generate_planets};
    use crate::ports::{FailingTextGenerator, MockTextGenerator};

    fn context_for<'a>(
        planets: &'a [crate::domain::PlanetPosition],
        houses: &'a [crate::domain::HouseCusp],
    ) -> ChartContext<'a> {
        ChartContext {
            sun_sign: ZodiacSign::Aries,
            moon_sign: ZodiacSign::Libra,
            rising_sign: ZodiacSign::Gemini,
            place_of_birth: "London",
            planets,
            houses,
        }
    }

    #[test]
    fn template_names_all_three_signs_for_every_combination() {
        for sun in ZodiacSign::ALL {
            for moon in [ZodiacSign::Aries, ZodiacSign::Virgo, ZodiacSign::Pisces] {
                let text = compose_template(sun, moon, ZodiacSign::Leo);
                assert!(text.contains(sun.as_str()));
                assert!(text.contains(moon.as_str()));
                assert!(text.contains("Leo"));
            }
        }
    }

    #[test]
    fn generative_strategy_returns_generator_text() {
        let mut rng = StdRng::seed_from_u64(5);
        let planets = generate_planets(ZodiacSign::Aries, &mut rng);
        let houses = generate_houses(ZodiacSign::Gemini, &mut rng);
        let generator = MockTextGenerator::with_response("A generated reading.");

        let producer = InterpretationProducer::with_generator(&generator);
        assert_eq!(producer.produce(&context_for(&planets, &houses)), "A generated reading.");
    }

    #[test]
    fn failed_generation_falls_back_to_template() {
        let mut rng = StdRng::seed_from_u64(5);
        let planets = generate_planets(ZodiacSign::Aries, &mut rng);
        let houses = generate_houses(ZodiacSign::Gemini, &mut rng);
        let generator = FailingTextGenerator;

        let producer = InterpretationProducer::with_generator(&generator);
        let text = producer.produce(&context_for(&planets, &houses));

        assert!(!text.is_empty());
        assert!(text.contains("Aries"));
        assert!(text.contains("Libra"));
        assert!(text.contains("Gemini"));
    }

    #[test]
    fn blank_generation_falls_back_to_template() {
        let mut rng = StdRng::seed_from_u64(5);
        let planets = generate_planets(ZodiacSign::Aries, &mut rng);
        let houses = generate_houses(ZodiacSign::Gemini, &mut rng);
        let generator = MockTextGenerator::with_response("   \n");

        let producer = InterpretationProducer::with_generator(&generator);
        let text = producer.produce(&context_for(&planets, &houses));
        assert!(text.contains("Aries"));
    }

    #[test]
    fn template_only_never_calls_a_generator() {
        let mut rng = StdRng::seed_from_u64(5);
        let planets = generate_planets(ZodiacSign::Aries, &mut rng);
        let houses = generate_houses(ZodiacSign::Gemini, &mut rng);

        let producer = InterpretationProducer::template_only();
        let text = producer.produce(&context_for(&planets, &houses));
        assert!(text.contains("Bold and pioneering"));
    }
}
