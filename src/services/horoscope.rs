//! Daily horoscope service.
//!
//! Unlike chart interpretation there is no template fallback here: a failed
//! generation call surfaces to the caller. Generated horoscopes are cached
//! per (chart, date) so repeat requests on the same day make no new call.

use chrono::{NaiveDate, Utc};

use crate::domain::{AppError, DailyHoroscope};
use crate::ports::{ChartStore, TextGenerator};
use crate::services::prompt::render_horoscope_prompt;

/// Produce (or fetch from cache) the daily horoscope for a saved chart.
pub fn daily_horoscope(
    store: &dyn ChartStore,
    generator: &dyn TextGenerator,
    chart_id: &str,
    date: NaiveDate,
) -> Result<String, AppError> {
    if let Some(cached) = store.load_horoscope(chart_id, date)? {
        return Ok(cached.horoscope);
    }

    let chart = store.load(chart_id)?;
    let prompt = render_horoscope_prompt(&chart, date)?;
    let text = generator.generate(&prompt)?;

    let horoscope = DailyHoroscope {
        chart_id: chart_id.to_string(),
        date,
        horoscope: text.clone(),
        created_at: Utc::now(),
    };
    store.save_horoscope(&horoscope)?;

    Ok(text)
}
