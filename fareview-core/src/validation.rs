use chrono::NaiveDate;

use crate::airport::{max_selectable_date, normalize_airport_input, AirportCode};
use crate::search::{SearchForm, SearchParams};

/// Form validation failures. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid origin airport code (e.g., JFK)")]
    InvalidOrigin,
    #[error("Please enter a valid destination airport code (e.g., LAX)")]
    InvalidDestination,
    #[error("Origin and destination cannot be the same")]
    SameAirport,
    #[error("Please select a travel date")]
    MissingDate,
    #[error("Invalid date format. Please use YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("Travel date cannot be in the past")]
    DateInPast,
    #[error("Travel date cannot be more than 1 year in the future")]
    DateTooFar,
    #[error("At least one passenger is required")]
    InvalidPassengers,
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDateFormat)
}

/// Validate a submitted form against `today`.
///
/// Rules run in a fixed order and the first failure wins:
/// origin shape, destination shape, origin != destination, date present,
/// date not before today, date not past today + 1 year.
/// Both date bounds are inclusive.
pub fn validate_search(form: &SearchForm, today: NaiveDate) -> Result<SearchParams, ValidationError> {
    let origin = AirportCode::parse(&form.origin).ok_or(ValidationError::InvalidOrigin)?;
    let destination =
        AirportCode::parse(&form.destination).ok_or(ValidationError::InvalidDestination)?;

    if origin == destination {
        return Err(ValidationError::SameAirport);
    }

    let depart_raw = form
        .depart_date
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingDate)?;
    let depart_date = parse_date(depart_raw)?;

    if depart_date < today {
        return Err(ValidationError::DateInPast);
    }
    if depart_date > max_selectable_date(today) {
        return Err(ValidationError::DateTooFar);
    }

    let return_date = match form.return_date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => parse_date(raw)?,
        None => depart_date,
    };

    let passengers = form.passengers.unwrap_or(1);
    if passengers == 0 {
        return Err(ValidationError::InvalidPassengers);
    }

    let params = SearchParams {
        origin,
        destination,
        depart_date,
        return_date,
        passengers,
    };

    if params.return_date_precedes_departure() {
        tracing::warn!(
            "Return date {} precedes departure {} for {} -> {}",
            params.return_date,
            params.depart_date,
            params.origin,
            params.destination
        );
    }

    Ok(params)
}

/// Normalize the airport fields the way the input fields do, then validate.
pub fn normalize_and_validate(form: &SearchForm, today: NaiveDate) -> Result<SearchParams, ValidationError> {
    let normalized = SearchForm {
        origin: normalize_airport_input(&form.origin),
        destination: normalize_airport_input(&form.destination),
        ..form.clone()
    };
    validate_search(&normalized, today)
}
