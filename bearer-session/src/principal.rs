use crate::claims::{ClaimMappings, ClaimSet};

/// Authentication type assigned to principals derived from a decoded token.
pub const JWT_AUTHENTICATION_TYPE: &str = "jwt";

/// The identity derived from a decoded token, or the anonymous identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Principal {
    authentication_type: Option<String>,
    claims: ClaimSet,
    mappings: ClaimMappings,
}

impl Principal {
    /// The unauthenticated principal. Carries no claims.
    pub fn anonymous() -> Self {
        Principal {
            authentication_type: None,
            claims: ClaimSet::new(),
            mappings: ClaimMappings::default(),
        }
    }

    /// An authenticated principal holding `claims`.
    ///
    /// A token with an empty payload still yields an authenticated
    /// principal, it just carries no claims.
    pub fn authenticated(claims: ClaimSet, mappings: ClaimMappings) -> Self {
        Principal {
            authentication_type: Some(JWT_AUTHENTICATION_TYPE.to_owned()),
            claims,
            mappings,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication_type.is_some()
    }

    pub fn authentication_type(&self) -> Option<&str> {
        self.authentication_type.as_deref()
    }

    /// Display name, resolved via the configured name claim.
    pub fn name(&self) -> Option<&str> {
        self.claims.first_value(&self.mappings.name_claim)
    }

    /// All role claim values, in payload order.
    pub fn roles(&self) -> Vec<&str> {
        self.claims.values(&self.mappings.role_claim)
    }

    /// Whether the principal holds `role`.
    ///
    /// Comparison is exact string equality.
    pub fn has_role(&self, role: &str) -> bool {
        self.claims.contains(&self.mappings.role_claim, role)
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }
}
