use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{formats::PreferMany, serde_as, OneOrMany};

/// Claim name used to resolve roles unless overridden via [ClaimMappings].
pub const DEFAULT_ROLE_CLAIM: &str = "role";

/// Claim name used to resolve the display name unless overridden via [ClaimMappings].
pub const DEFAULT_NAME_CLAIM: &str = "unique_name";

/// A single decoded claim.
///
/// Claim names are not unique. A payload entry holding an array produces
/// one claim per element, e.g. several `role` claims.
#[derive(Clone, Debug, PartialEq)]
pub struct Claim {
    pub name: String,
    pub value: String,
}

impl Claim {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Claim {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Ordered collection of claims decoded from a token payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a JSON payload object into claims.
    ///
    /// Array values produce one claim per element, in payload order.
    /// Strings are taken verbatim, other scalars are stringified and nested
    /// structures are carried as their JSON text. Nulls produce no claim.
    pub fn from_object(payload: &serde_json::Map<String, Value>) -> Self {
        let mut claims = Vec::new();
        for (name, value) in payload {
            match value {
                Value::Array(elements) => {
                    for element in elements {
                        if let Some(value) = claim_value(element) {
                            claims.push(Claim::new(name, value));
                        }
                    }
                }
                other => {
                    if let Some(value) = claim_value(other) {
                        claims.push(Claim::new(name, value));
                    }
                }
            }
        }
        ClaimSet { claims }
    }

    pub fn push(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    /// First value of the claim named `name`, if any.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.name == name)
            .map(|claim| claim.value.as_str())
    }

    /// All values of the claim named `name`, in payload order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.claims
            .iter()
            .filter(|claim| claim.name == name)
            .map(|claim| claim.value.as_str())
            .collect()
    }

    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.claims
            .iter()
            .any(|claim| claim.name == name && claim.value == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

fn claim_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}

/// Claim names used to resolve a principal's display name and roles.
///
/// Defaults match tokens minted with `role` and `unique_name` claims.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimMappings {
    pub role_claim: String,
    pub name_claim: String,
}

impl ClaimMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the claim name that holds roles.
    pub fn role_claim(mut self, role_claim: impl Into<String>) -> Self {
        self.role_claim = role_claim.into();
        self
    }

    /// Set the claim name that holds the display name.
    pub fn name_claim(mut self, name_claim: impl Into<String>) -> Self {
        self.name_claim = name_claim.into();
        self
    }
}

impl Default for ClaimMappings {
    fn default() -> Self {
        ClaimMappings {
            role_claim: DEFAULT_ROLE_CLAIM.to_owned(),
            name_claim: DEFAULT_NAME_CLAIM.to_owned(),
        }
    }
}

impl Display for ClaimMappings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Registered claims implementation
///
/// Will be used by default when constructing a [TokenVerifier](crate::verify::TokenVerifier).
/// If you need other ones, an own struct can be provided
/// as generic parameter.
///
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegisteredClaims {
    pub iss: Option<String>,
    pub sub: Option<String>,
    #[serde(default)]
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    pub aud: Vec<String>,
    pub exp: Option<u64>,
    pub nbf: Option<u64>,
    pub jti: Option<String>,
}

impl Display for RegisteredClaims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
