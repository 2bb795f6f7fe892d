use std::collections::HashMap;

use crate::{error::PolicyError, principal::Principal};

/// Named policy granting access to principals that hold at least one of
/// the required roles.
///
/// Anonymous principals are always denied. Role comparison is exact string
/// equality, see [has_role](crate::principal::Principal::has_role).
#[derive(Clone, Debug, PartialEq)]
pub struct RolePolicy {
    name: String,
    required_roles: Vec<String>,
}

impl RolePolicy {
    pub fn new(name: impl Into<String>, required_roles: &[impl ToString]) -> Self {
        RolePolicy {
            name: name.into(),
            required_roles: required_roles
                .iter()
                .map(|role| role.to_string())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allows(&self, principal: &Principal) -> bool {
        principal.is_authenticated()
            && self
                .required_roles
                .iter()
                .any(|role| principal.has_role(role))
    }
}

/// Registry of named [RolePolicy] instances.
#[derive(Clone, Debug, Default)]
pub struct PolicySet {
    policies: HashMap<String, RolePolicy>,
}

impl PolicySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `policy` under its name. A policy registered earlier under
    /// the same name is replaced.
    pub fn add_policy(mut self, policy: RolePolicy) -> Self {
        self.policies.insert(policy.name().to_owned(), policy);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RolePolicy> {
        self.policies.get(name)
    }

    /// Evaluate the policy registered under `name` against `principal`.
    pub fn evaluate(&self, name: &str, principal: &Principal) -> Result<(), PolicyError> {
        let policy = self
            .policies
            .get(name)
            .ok_or_else(|| PolicyError::UnknownPolicy(name.to_owned()))?;
        if policy.allows(principal) {
            Ok(())
        } else {
            Err(PolicyError::AccessDenied(name.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::claims::{Claim, ClaimMappings, ClaimSet};

    use super::*;

    #[test]
    fn allows_principal_with_required_role() {
        let policy = RolePolicy::new("admin-only", &["Admin"]);

        assert!(policy.allows(&principal_with_roles(&["Admin"])));
    }

    #[test]
    fn denies_principal_without_required_role() {
        let policy = RolePolicy::new("admin-only", &["Admin"]);

        assert!(!policy.allows(&principal_with_roles(&["User"])));
    }

    #[test]
    fn denies_anonymous_principal() {
        let policy = RolePolicy::new("admin-only", &["Admin"]);

        assert!(!policy.allows(&Principal::anonymous()));
    }

    #[test]
    fn any_required_role_is_enough() {
        let policy = RolePolicy::new("staff", &["Admin", "Support"]);

        assert!(policy.allows(&principal_with_roles(&["Support"])));
    }

    #[test]
    fn role_comparison_is_case_sensitive() {
        let policy = RolePolicy::new("admin-only", &["Admin"]);

        assert!(!policy.allows(&principal_with_roles(&["admin"])));
    }

    #[test]
    fn evaluate_known_policy() {
        let policies = PolicySet::new()
            .add_policy(RolePolicy::new("admin-only", &["Admin"]))
            .add_policy(RolePolicy::new("user-only", &["User"]));
        let principal = principal_with_roles(&["Admin"]);

        assert_eq!(policies.evaluate("admin-only", &principal), Ok(()));
        assert_eq!(
            policies.evaluate("user-only", &principal),
            Err(PolicyError::AccessDenied("user-only".to_owned()))
        );
    }

    #[test]
    fn evaluate_unknown_policy() {
        let policies = PolicySet::new();

        assert_eq!(
            policies.evaluate("admin-only", &Principal::anonymous()),
            Err(PolicyError::UnknownPolicy("admin-only".to_owned()))
        );
    }

    #[test]
    fn later_policy_replaces_earlier_one() {
        let policies = PolicySet::new()
            .add_policy(RolePolicy::new("staff", &["Admin"]))
            .add_policy(RolePolicy::new("staff", &["Support"]));

        assert!(policies.evaluate("staff", &principal_with_roles(&["Support"])).is_ok());
        assert!(policies.evaluate("staff", &principal_with_roles(&["Admin"])).is_err());
    }

    fn principal_with_roles(roles: &[&str]) -> Principal {
        let mut claims = ClaimSet::new();
        for role in roles {
            claims.push(Claim::new("role", *role));
        }
        Principal::authenticated(claims, ClaimMappings::default())
    }
}
