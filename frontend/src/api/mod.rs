//! Client API layer. The hosted backend is mocked with static catalogs.

pub mod search_api;
