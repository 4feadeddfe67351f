use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoute {
    pub origin: &'static str,
    pub destination: &'static str,
    pub origin_city: &'static str,
    pub destination_city: &'static str,
}

const fn route(
    origin: &'static str,
    destination: &'static str,
    origin_city: &'static str,
    destination_city: &'static str,
) -> PopularRoute {
    PopularRoute { origin, destination, origin_city, destination_city }
}

pub const POPULAR_ROUTES: [PopularRoute; 10] = [
    route("JFK", "LAX", "New York", "Los Angeles"),
    route("SFO", "JFK", "San Francisco", "New York"),
    route("ORD", "MIA", "Chicago", "Miami"),
    route("LAX", "LAS", "Los Angeles", "Las Vegas"),
    route("SEA", "SFO", "Seattle", "San Francisco"),
    route("ATL", "MCO", "Atlanta", "Orlando"),
    route("DFW", "DEN", "Dallas", "Denver"),
    route("BOS", "ORD", "Boston", "Chicago"),
    route("LGA", "BOS", "New York", "Boston"),
    route("IAD", "ATL", "Washington", "Atlanta"),
];

pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Random suggestions for the search form, without repeats.
pub fn suggest_routes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PopularRoute> {
    POPULAR_ROUTES
        .choose_multiple(rng, count.min(POPULAR_ROUTES.len()))
        .copied()
        .collect()
}
