//! # Mock Framework
//!
//! Utilities for testing clients and flows in isolation.
//!
//! Use [`create_mock_client`] to get a collection client plus a receiver for
//! asserting the requests it sends, and the `Mock*` integration fakes to run
//! checkout without touching any hosted API.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::integrations::{
    Coordinates, Geocoder, IntegrationError, Mailer, ParcelShop, PaymentGateway, PaymentIntent,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock collection client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing client orchestration (e.g. the checkout flow) we don't spin
/// up real `ResourceActor`s. The mock client sends messages to a channel we
/// control; the test inspects each message and answers through its oneshot,
/// simulating success, absence, or failure deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::from_sender(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::CreateParams,
    oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

// =============================================================================
// Integration fakes
// =============================================================================

/// In-process payment gateway; records every intent it creates.
#[derive(Default)]
pub struct MockPaymentGateway {
    counter: AtomicU64,
    pub created: Mutex<Vec<i64>>,
    pub fail: bool,
}

impl MockPaymentGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(
        &self,
        amount_cents: i64,
        _currency: &str,
    ) -> Result<PaymentIntent, IntegrationError> {
        if self.fail {
            return Err(IntegrationError::Status {
                status: 402,
                body: "card declined".to_string(),
            });
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(amount_cents);
        Ok(PaymentIntent {
            id: format!("pi_test_{}", n),
            client_secret: format!("pi_test_{}_secret", n),
        })
    }
}

/// Mailer fake; captures (to, subject) pairs.
#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), IntegrationError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// Geocoder fake with one known address and a fixed set of shops.
pub struct MockGeocoder {
    pub known_address: String,
    pub shops: Vec<ParcelShop>,
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self {
            known_address: "1 Rue de la Paix, Paris".to_string(),
            shops: vec![ParcelShop {
                id: "shop_1".to_string(),
                name: "Relais Opera".to_string(),
                address: "3 Rue de la Paix, Paris".to_string(),
                lat: 48.869,
                lon: 2.331,
            }],
        }
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, IntegrationError> {
        if address == self.known_address {
            Ok(Coordinates {
                lat: 48.868,
                lon: 2.330,
            })
        } else {
            Err(IntegrationError::NoResult(address.to_string()))
        }
    }

    async fn nearby_parcel_shops(
        &self,
        _position: Coordinates,
    ) -> Result<Vec<ParcelShop>, IntegrationError> {
        Ok(self.shops.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserCreate};
    use crate::domain::Role;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(UserCreate {
                    email: "test@example.com".to_string(),
                    password_hash: "hash".to_string(),
                    name: "Test".to_string(),
                    role: Role::User,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.email, "test@example.com");
        responder.send(Ok("user_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("user_1".to_string()));
    }
}
