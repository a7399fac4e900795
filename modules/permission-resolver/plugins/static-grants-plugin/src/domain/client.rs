//! `Authorizer` implementation for the static grants plugin.

use async_trait::async_trait;
use permission_resolver_sdk::{Authorizer, AuthorizerError, Principal};

use super::service::Service;

#[async_trait]
impl Authorizer for Service {
    async fn has_role(&self, principal: &Principal, role: &str) -> Result<bool, AuthorizerError> {
        Ok(self.has_role(principal, role))
    }

    async fn has_role_for_components(
        &self,
        principal: &Principal,
        role: &str,
        component_uuids: &[String],
    ) -> Result<Vec<bool>, AuthorizerError> {
        Ok(self.has_role_for_components(principal, role, component_uuids))
    }

    async fn on_logout(&self, principal: &Principal) -> Result<(), AuthorizerError> {
        self.on_logout(principal);
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::StaticGrantsConfig;

    #[tokio::test]
    async fn trait_object_answers_and_aligns() {
        let config: StaticGrantsConfig = serde_json::from_str(
            r#"{"components": {"AU-1": {"user": ["*"]}}}"#,
        )
        .unwrap();
        let service = Service::new(config);
        let authorizer: &dyn Authorizer = &service;

        let answers = authorizer
            .has_role_for_components(
                &Principal::anonymous(),
                "user",
                &["AU-1".to_owned(), "AU-2".to_owned()],
            )
            .await
            .unwrap();

        assert_eq!(answers, vec![true, false]);
        authorizer.on_logout(&Principal::anonymous()).await.unwrap();
    }
}
