//! Prompt rendering for the text-generation collaborator.
//!
//! Templates are embedded constants rendered through minijinja with strict
//! undefined behavior. Only `{{ ... }}` interpolation is used; list sections
//! are preformatted into plain strings before rendering.

use std::sync::OnceLock;

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, ChartRecord, HouseCusp, PlanetPosition, ZodiacSign};

/// The chart facts a prompt or interpretation strategy works from.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
    pub place_of_birth: &'a str,
    pub planets: &'a [PlanetPosition],
    pub houses: &'a [HouseCusp],
}

impl<'a> ChartContext<'a> {
    pub fn from_chart(chart: &'a ChartRecord) -> Self {
        Self {
            sun_sign: chart.sun_sign,
            moon_sign: chart.moon_sign,
            rising_sign: chart.rising_sign,
            place_of_birth: &chart.input.place_of_birth,
            planets: &chart.planets,
            houses: &chart.houses,
        }
    }
}

const INTERPRETATION_PROMPT: &str = "\
You are an expert astrologer providing a personalized birth chart interpretation. \
Write a detailed, insightful, and empowering interpretation for someone with the \
following astrological placements:

**Birth Chart Details:**
- Sun Sign: {{ sun_sign }}
- Moon Sign: {{ moon_sign }}
- Rising Sign (Ascendant): {{ rising_sign }}
- Birth Location: {{ place_of_birth }}

**Planetary Positions:**
{{ planet_lines }}

**House Cusps:**
{{ house_lines }}

Please provide a comprehensive interpretation that:
1. Explains the significance of their Sun, Moon, and Rising signs and how they work together
2. Discusses key planetary positions and what they reveal about personality, relationships, career, and life path
3. Is written in second person (\"you\") and feels personal and insightful
4. Is approximately 300-400 words
5. Maintains a warm, encouraging, and professional tone
6. Focuses on strengths, potential, and self-understanding rather than predictions

Write the interpretation in a flowing paragraph format, not bullet points. Make it \
feel like a personalized reading from a professional astrologer.";

const HOROSCOPE_PROMPT: &str = "\
You are an expert astrologer providing a daily horoscope for {{ date }}.

Birth Chart Details:
- Sun Sign: {{ sun_sign }}
- Moon Sign: {{ moon_sign }}
- Rising Sign: {{ rising_sign }}
- Planetary Positions:
{{ planet_lines }}

Create a personalized daily horoscope for today focusing on:
1. Overall energy and mood for the day
2. Key opportunities or challenges based on current planetary transits
3. Practical advice for navigating the day
4. Areas of life to focus on (career, relationships, personal growth, etc.)
5. A brief affirmation or reflection

Keep the tone warm, supportive, and authentic. Write in 3-4 concise paragraphs \
(200-300 words total).
Do not use phrases like \"According to the stars\" or \"The cosmos suggests\" - speak \
directly and personally.";

/// Render the birth-chart interpretation prompt.
pub fn render_interpretation_prompt(chart: &ChartContext<'_>) -> Result<String, AppError> {
    let planet_lines: Vec<String> = chart
        .planets
        .iter()
        .map(|p| format!("- {} in {} ({:.1}\u{b0}) in House {}", p.planet, p.sign, p.degree, p.house))
        .collect();
    let house_lines: Vec<String> = chart
        .houses
        .iter()
        .map(|h| format!("- House {}: {} ({:.1}\u{b0})", h.number, h.sign, h.degree))
        .collect();

    render(
        INTERPRETATION_PROMPT,
        context! {
            sun_sign => chart.sun_sign.as_str(),
            moon_sign => chart.moon_sign.as_str(),
            rising_sign => chart.rising_sign.as_str(),
            place_of_birth => chart.place_of_birth,
            planet_lines => planet_lines.join("\n"),
            house_lines => house_lines.join("\n"),
        },
    )
}

/// Render the daily-horoscope prompt for a saved chart.
pub fn render_horoscope_prompt(chart: &ChartRecord, date: NaiveDate) -> Result<String, AppError> {
    let planet_lines: Vec<String> = chart
        .planets
        .iter()
        .map(|p| format!("  {} in {} (House {})", p.planet, p.sign, p.house))
        .collect();

    render(
        HOROSCOPE_PROMPT,
        context! {
            date => date.format("%Y-%m-%d").to_string(),
            sun_sign => chart.sun_sign.as_str(),
            moon_sign => chart.moon_sign.as_str(),
            rising_sign => chart.rising_sign.as_str(),
            planet_lines => planet_lines.join("\n"),
        },
    )
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, ctx)
        .map_err(|err| AppError::Generation(format!("prompt render failed: {}", err)))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::{generate_houses, generate_planets};

    fn sample_context<'a>(
        planets: &'a [PlanetPosition],
        houses: &'a [HouseCusp],
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
    fn interpretation_prompt_embeds_all_placements() {
        let mut rng = StdRng::seed_from_u64(1);
        let planets = generate_planets(ZodiacSign::Aries, &mut rng);
        let houses = generate_houses(ZodiacSign::Gemini, &mut rng);

        let prompt = render_interpretation_prompt(&sample_context(&planets, &houses)).unwrap();

        assert!(prompt.contains("Sun Sign: Aries"));
        assert!(prompt.contains("Moon Sign: Libra"));
        assert!(prompt.contains("Rising Sign (Ascendant): Gemini"));
        assert!(prompt.contains("Birth Location: London"));
        assert!(prompt.contains("- Mercury in Taurus"));
        assert!(prompt.contains("- House 12:"));
    }

    #[test]
    fn horoscope_prompt_embeds_date_and_planets() {
        let mut rng = StdRng::seed_from_u64(1);
        let planets = generate_planets(ZodiacSign::Leo, &mut rng);
        let houses = generate_houses(ZodiacSign::Leo, &mut rng);
        let input = crate::domain::BirthInput::parse(
            "Ada", "1990-03-21", "00:00", "London", None, None,
        )
        .unwrap();
        let chart = ChartRecord {
            id: None,
            owner: None,
            input,
            sun_sign: ZodiacSign::Leo,
            moon_sign: ZodiacSign::Virgo,
            rising_sign: ZodiacSign::Leo,
            planets,
            houses,
            interpretation: String::new(),
            created_at: chrono::Utc::now(),
        };

        let date = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let prompt = render_horoscope_prompt(&chart, date).unwrap();

        assert!(prompt.contains("daily horoscope for 2026-08-31"));
        assert!(prompt.contains("Sun Sign: Leo"));
        assert!(prompt.contains("  Mercury in Virgo (House 1)"));
    }
}
