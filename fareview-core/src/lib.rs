pub mod airport;
pub mod client;
pub mod routes;
pub mod search;
pub mod validation;

pub use airport::AirportCode;
pub use client::{FlightSearchClient, SearchError};
pub use search::{InsightKind, PriceInsight, PriceTrendPoint, SearchForm, SearchParams, SearchResult};
pub use validation::{validate_search, ValidationError};

