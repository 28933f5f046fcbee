use crate::core::capabilities::MlCapability;
use crate::utils::error::CapabilityError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Identity of the caller behind one inbound request.
///
/// Built by the host once per request and only ever read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub space_id: Option<String>,
    pub request_id: Option<String>,
}

impl AuthorizationContext {
    pub fn new<I, S>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: Some(username.into()),
            roles: roles.into_iter().map(Into::into).collect(),
            space_id: None,
            request_id: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space_id: impl Into<String>) -> Self {
        self.space_id = Some(space_id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn display_user(&self) -> &str {
        self.username.as_deref().unwrap_or("<anonymous>")
    }
}

/// Request-bound check that the caller holds every listed capability.
#[async_trait]
pub trait CapabilityCheck: Send + Sync {
    async fn has_capabilities(&self, required: &[MlCapability]) -> Result<(), CapabilityError>;
}

/// Binds a request's [`AuthorizationContext`] to a [`CapabilityCheck`].
pub trait CapabilityBinder: Send + Sync {
    fn bind(&self, context: &AuthorizationContext) -> Box<dyn CapabilityCheck>;
}

impl<F> CapabilityBinder for F
where
    F: Fn(&AuthorizationContext) -> Box<dyn CapabilityCheck> + Send + Sync,
{
    fn bind(&self, context: &AuthorizationContext) -> Box<dyn CapabilityCheck> {
        self(context)
    }
}

/// Returns the required capabilities absent from `granted`, in request
/// order and without duplicates.
pub fn missing_capabilities(
    required: &[MlCapability],
    granted: &BTreeSet<MlCapability>,
) -> Vec<MlCapability> {
    let mut missing = Vec::new();
    for capability in required {
        if !granted.contains(capability) && !missing.contains(capability) {
            missing.push(*capability);
        }
    }
    missing
}

/// Role to capability grants, plus the security switch.
#[derive(Debug, Clone, Default)]
pub struct RolePolicy {
    pub security_enabled: bool,
    pub roles: HashMap<String, BTreeSet<MlCapability>>,
}

impl RolePolicy {
    pub fn grants_for(&self, context: &AuthorizationContext) -> BTreeSet<MlCapability> {
        if !self.security_enabled {
            return MlCapability::ALL.iter().copied().collect();
        }

        context
            .roles
            .iter()
            .filter_map(|role| self.roles.get(role))
            .flatten()
            .copied()
            .collect()
    }
}

/// Resolves capabilities from the roles carried in the request context.
#[derive(Debug, Clone)]
pub struct RoleCapabilityResolver {
    policy: Arc<RolePolicy>,
}

impl RoleCapabilityResolver {
    pub fn new(policy: RolePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl CapabilityBinder for RoleCapabilityResolver {
    fn bind(&self, context: &AuthorizationContext) -> Box<dyn CapabilityCheck> {
        Box::new(ResolvedCapabilities {
            user: context.display_user().to_string(),
            granted: self.policy.grants_for(context),
        })
    }
}

struct ResolvedCapabilities {
    user: String,
    granted: BTreeSet<MlCapability>,
}

#[async_trait]
impl CapabilityCheck for ResolvedCapabilities {
    async fn has_capabilities(&self, required: &[MlCapability]) -> Result<(), CapabilityError> {
        let missing = missing_capabilities(required, &self.granted);
        if missing.is_empty() {
            return Ok(());
        }

        let err = CapabilityError::new(missing);
        tracing::debug!(
            user = %self.user,
            granted = self.granted.len(),
            error = %err,
            "capability resolution failed"
        );
        Err(err)
    }
}
