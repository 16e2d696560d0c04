use time::macros::format_description;
use time::Date;
use tracing::info;
use crate::error::ResolveError;
use crate::models::hotel::{HotelRecord, HotelSearchParams, HotelSearchRequest};
use crate::repositories::hotel_repo::MockHotelRepo;

pub const SEARCH_TYPE_COORDINATES: &str = "coordinates";
pub const SEARCH_TYPE_LOCATION: &str = "location";

#[derive(Clone, Debug)]
pub struct HotelSearchOutcome {
    pub results: Vec<HotelRecord>,
    pub search_params: HotelSearchParams,
}

/// Full catalog unless the search is by location, which filters by substring.
pub fn search_hotels(
    hotel_repo: &MockHotelRepo,
    request: HotelSearchRequest,
) -> Result<HotelSearchOutcome, ResolveError> {
    let (Some(checkin), Some(checkout), Some(adults)) =
        (request.checkin, request.checkout, request.adults)
    else {
        return Err(ResolveError::validation("checkin, checkout and adults are required"));
    };

    let results = match request.search_type.as_deref() {
        Some(SEARCH_TYPE_COORDINATES) => {
            if request.coordinates.is_none() {
                return Err(ResolveError::validation("coordinates are required for a coordinates search"));
            }
            hotel_repo.all_hotels()
        }
        Some(SEARCH_TYPE_LOCATION) => match request.location.as_deref() {
            Some(location) if !location.is_empty() => hotel_repo.search_by_location(location),
            _ => return Err(ResolveError::validation("location is required for a location search")),
        },
        _ => hotel_repo.all_hotels(),
    };

    let nights = stay_length(&checkin, &checkout);
    Ok(HotelSearchOutcome {
        results,
        search_params: HotelSearchParams {
            checkin,
            checkout,
            adults,
            nights,
            search_type: request.search_type,
            coordinates: request.coordinates,
            location: request.location,
        },
    })
}

/// Nights between two `YYYY-MM-DD` dates, when both parse.
fn stay_length(checkin: &str, checkout: &str) -> Option<i64> {
    let format = format_description!("[year]-[month]-[day]");
    let (Ok(checkin_date), Ok(checkout_date)) =
        (Date::parse(checkin, format), Date::parse(checkout, format))
    else {
        info!("Skipping stay length for unparsed dates {} to {}", checkin, checkout);
        return None;
    };
    Some((checkout_date - checkin_date).whole_days())
}
