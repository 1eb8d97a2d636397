use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{event, Level};

use crate::{cqrs::{AddItemToCartCommand, AddItemToCartCommandHandler, CommandHandler}, error::ClientError, gateway::OrderGateway};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Rejected,
    Failed,
}

// notify resolves once the notice has been presented and acknowledged.
#[async_trait]
pub trait Notifier {
    async fn notify(&self, kind: NoticeKind, text: &str);
}

#[async_trait]
pub trait StatusDisplay {
    async fn set_status(&self, status: &str);
}

pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, kind: NoticeKind, text: &str) {
        match kind {
            NoticeKind::Info => println!("[notice] {}", text),
            NoticeKind::Error => println!("[error] {}", text),
        }
    }
}

pub struct ConsoleStatusDisplay;

#[async_trait]
impl StatusDisplay for ConsoleStatusDisplay {
    async fn set_status(&self, status: &str) {
        println!("Order status: {}", status);
    }
}

#[derive(Clone, Default)]
pub struct InMemoryNotifier {
    notices: Arc<Mutex<Vec<(NoticeKind, String)>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        InMemoryNotifier {
            notices: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn notices(&self) -> Vec<(NoticeKind, String)> {
        let lock = self.notices.lock().await;
        lock.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, kind: NoticeKind, text: &str) {
        let mut lock = self.notices.lock().await;
        lock.push((kind, String::from(text)));
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStatusDisplay {
    text: Arc<Mutex<String>>,
}

impl InMemoryStatusDisplay {
    pub fn new() -> Self {
        InMemoryStatusDisplay {
            text: Arc::new(Mutex::new(String::new())),
        }
    }

    pub async fn text(&self) -> String {
        let lock = self.text.lock().await;
        lock.clone()
    }
}

#[async_trait]
impl StatusDisplay for InMemoryStatusDisplay {
    async fn set_status(&self, status: &str) {
        let mut lock = self.text.lock().await;
        *lock = String::from(status);
    }
}

// Consumes the submission entirely: every outcome ends in exactly one notice,
// never in a propagated error.
pub async fn submit_cart_form<T1: OrderGateway, T2: Notifier>(
    handler: &AddItemToCartCommandHandler<T1>,
    notifier: &T2,
    command: AddItemToCartCommand,
) -> SubmitOutcome {
    match handler.handle(&command).await {
        Ok(_) => {
            notifier.notify(NoticeKind::Info, "Added to cart").await;
            SubmitOutcome::Added
        },
        Err(ClientError::Rejected { message }) => {
            let text = match message {
                Some(text) => text,
                None => String::from("Error")
            };

            notifier.notify(NoticeKind::Error, &text).await;
            SubmitOutcome::Rejected
        },
        Err(e) => {
            event!(Level::WARN, "Cart submission failed: {}", e);
            notifier.notify(NoticeKind::Error, "Network error").await;
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::CartAddResponse;
    use crate::gateway::InMemoryOrderGateway;

    fn command() -> AddItemToCartCommand {
        AddItemToCartCommand {
            action: String::from("/cart/add"),
            fields: vec![(String::from("menu_item_id"), String::from("3"))],
        }
    }

    async fn submit_with_reply(
        reply: Result<CartAddResponse, ClientError>,
    ) -> (SubmitOutcome, Vec<(NoticeKind, String)>) {
        let gateway = Arc::new(InMemoryOrderGateway::new());
        gateway.push_cart_reply(reply).await;
        let handler = AddItemToCartCommandHandler::new(gateway);
        let notifier = InMemoryNotifier::new();

        let outcome = submit_cart_form(&handler, &notifier, command()).await;
        (outcome, notifier.notices().await)
    }

    #[tokio::test]
    async fn confirmed_add_shows_exactly_one_added_notice() {
        let (outcome, notices) =
            submit_with_reply(Ok(CartAddResponse { ok: true, message: None })).await;

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(notices, vec![(NoticeKind::Info, String::from("Added to cart"))]);
    }

    #[tokio::test]
    async fn rejection_shows_exactly_one_notice_with_the_service_message() {
        let (outcome, notices) = submit_with_reply(Ok(CartAddResponse {
            ok: false,
            message: Some(String::from("Out of stock")),
        }))
        .await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(notices, vec![(NoticeKind::Error, String::from("Out of stock"))]);
    }

    #[tokio::test]
    async fn rejection_without_a_message_falls_back_to_a_generic_notice() {
        let (outcome, notices) =
            submit_with_reply(Ok(CartAddResponse { ok: false, message: None })).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(notices, vec![(NoticeKind::Error, String::from("Error"))]);
    }

    #[tokio::test]
    async fn transport_failure_shows_exactly_one_network_error_notice() {
        let (outcome, notices) = submit_with_reply(Err(ClientError::Transport {
            message: String::from("connection refused"),
        }))
        .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(notices, vec![(NoticeKind::Error, String::from("Network error"))]);
    }

    #[tokio::test]
    async fn decode_failure_shows_exactly_one_network_error_notice() {
        let (outcome, notices) = submit_with_reply(Err(ClientError::Decode {
            message: String::from("expected value at line 1 column 1"),
        }))
        .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(notices, vec![(NoticeKind::Error, String::from("Network error"))]);
    }
}
