//! Route segment wrapper for structured state.
//!
//! The router only deals in strings, so structured values ride along as a
//! URL-safe base64 blob of their CBOR encoding. Any type used in a route
//! segment needs Display, FromStr and Default; this wrapper supplies the
//! first two for anything serde can handle.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RouteState<T>(pub T);

impl<T> From<T> for RouteState<T> {
    fn from(value: T) -> Self {
        RouteState(value)
    }
}

impl<T: Serialize> Display for RouteState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RouteStateParseError {
    Decode(base64::DecodeError),
    Deserialize(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for RouteStateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "failed to decode base64 segment: {}", err),
            Self::Deserialize(err) => write!(f, "failed to deserialize segment: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for RouteState<T> {
    type Err = RouteStateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(RouteStateParseError::Decode)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(RouteStateParseError::Deserialize)?;
        Ok(parsed)
    }
}
