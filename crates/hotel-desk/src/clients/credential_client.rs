//! # Credential Client
//!
//! Registration and sign-in checks against the [`CredentialStore`] actor.
use crate::credential_actor::{
    CredentialAction, CredentialActionResult, CredentialError, CredentialStore,
};
use crate::model::Credential;
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CredentialClient {
    inner: RecordClient<CredentialStore>,
}

impl CredentialClient {
    pub fn new(inner: RecordClient<CredentialStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CredentialStore> for CredentialClient {
    type Error = CredentialError;

    fn inner(&self) -> &RecordClient<CredentialStore> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CredentialError>()
            .unwrap_or_else(|e| CredentialError::ActorCommunicationError(e.to_string()))
    }
}

impl CredentialClient {
    /// Appends a credential. Existing entries with the same username are kept.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        debug!("Sending request");
        self.inner
            .append(Credential::new(username, password))
            .await
            .map_err(Self::map_error)
    }

    /// True when some stored credential matches both fields exactly.
    #[instrument(skip(self, password))]
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(CredentialAction::Verify(Credential::new(username, password)))
            .await
        {
            Ok(CredentialActionResult::Verify(verified)) => Ok(verified),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every readable credential in registration order.
    pub async fn credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecordFormatError;
    use record_actor::mock::{create_mock_client, expect_action, expect_append, MockClient};

    #[tokio::test]
    async fn test_register_sends_credential() {
        let (client, mut receiver) = create_mock_client::<CredentialStore>(10);
        let credential_client = CredentialClient::new(client);

        let task = tokio::spawn(async move { credential_client.register("mgr", "pw123").await });

        let (record, responder) = expect_append(&mut receiver)
            .await
            .expect("Expected Append request");
        assert_eq!(record, Credential::new("mgr", "pw123"));
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_verify_sends_both_fields() {
        let (client, mut receiver) = create_mock_client::<CredentialStore>(10);
        let credential_client = CredentialClient::new(client);

        let task = tokio::spawn(async move { credential_client.verify("mgr", "pw123").await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        let CredentialAction::Verify(attempt) = action;
        assert!(attempt.matches("mgr", "pw123"));
        responder
            .send(Ok(CredentialActionResult::Verify(false)))
            .unwrap();

        assert!(!task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_store_error_survives_the_round_trip() {
        let mut mock = MockClient::<CredentialStore>::new();
        mock.expect_append()
            .return_err(FrameworkError::EntityError(Box::new(CredentialError::Format(
                RecordFormatError::EmptyField { field: "username" },
            ))));

        let client = CredentialClient::new(mock.client());
        let err = client.register("", "pw").await.unwrap_err();

        assert!(matches!(
            err,
            CredentialError::Format(RecordFormatError::EmptyField { field: "username" })
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<CredentialStore>::new();
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let client = CredentialClient::new(mock.client());
        let err = client.verify("mgr", "pw123").await.unwrap_err();

        assert!(matches!(err, CredentialError::ActorCommunicationError(_)));
        mock.verify();
    }
}
