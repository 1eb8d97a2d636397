use std::{collections::VecDeque, sync::Arc};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{event, Level};

use crate::{dtos::{CartAddResponse, OrderStatusResponse}, error::ClientError};

#[derive(Debug)]
pub struct HttpGatewayInitializationInfo {
    pub base_url: String
}

pub trait OrderGateway {
    async fn submit_cart_add(&self, action: &str, fields: &[(String, String)]) -> Result<CartAddResponse, ClientError>;
    async fn fetch_order_status<'a>(&self, order_id: &'a str) -> Result<OrderStatusResponse, ClientError>;
}

#[derive(Clone)]
pub struct HttpOrderGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpOrderGateway {
    pub fn new(info: &HttpGatewayInitializationInfo) -> Self {
        HttpOrderGateway {
            http_client: reqwest::Client::new(),
            base_url: info.base_url.trim_end_matches('/').to_string(),
        }
    }

    // A form declares its action as either an absolute URL or a path on the
    // storefront host.
    fn resolve(&self, action: &str) -> String {
        if action.starts_with("http://") || action.starts_with("https://") {
            String::from(action)
        } else {
            format!("{}{}", self.base_url, action)
        }
    }

    // The service reports failures inside the body, so non-2xx responses are
    // decoded like any other.
    async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        match response.text().await {
            Ok(body) => {
                match serde_json::from_str::<T>(&body) {
                    Ok(payload) => Ok(payload),
                    Err(e) => Err(ClientError::Decode { message: format!("{}", e) })
                }
            },
            Err(e) => Err(ClientError::Transport { message: format!("{}", e) })
        }
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn submit_cart_add(&self, action: &str, fields: &[(String, String)]) -> Result<CartAddResponse, ClientError> {
        let url = self.resolve(action);

        match self.http_client.post(&url).form(fields).send().await {
            Ok(response) => Self::decode_body(response).await,
            Err(e) => {
                event!(Level::WARN, "Failed to reach {}: {}", url, e);
                Err(ClientError::Transport { message: format!("{}", e) })
            }
        }
    }

    async fn fetch_order_status<'a>(&self, order_id: &'a str) -> Result<OrderStatusResponse, ClientError> {
        let url = format!("{}/api/order/{}/status", self.base_url, order_id);

        match self.http_client.get(&url).send().await {
            Ok(response) => Self::decode_body(response).await,
            Err(e) => Err(ClientError::Transport { message: format!("{}", e) })
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrderGateway {
    cart_replies: Arc<Mutex<VecDeque<Result<CartAddResponse, ClientError>>>>,
    status_replies: Arc<Mutex<VecDeque<Result<OrderStatusResponse, ClientError>>>>,
    submissions: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
    status_fetches: Arc<Mutex<Vec<(String, tokio::time::Instant)>>>,
}

impl InMemoryOrderGateway {
    pub fn new() -> Self {
        InMemoryOrderGateway {
            cart_replies: Arc::new(Mutex::new(VecDeque::new())),
            status_replies: Arc::new(Mutex::new(VecDeque::new())),
            submissions: Arc::new(Mutex::new(Vec::new())),
            status_fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn push_cart_reply(&self, reply: Result<CartAddResponse, ClientError>) {
        let mut lock = self.cart_replies.lock().await;
        lock.push_back(reply);
    }

    pub async fn push_status_reply(&self, reply: Result<OrderStatusResponse, ClientError>) {
        let mut lock = self.status_replies.lock().await;
        lock.push_back(reply);
    }

    pub async fn submissions(&self) -> Vec<(String, Vec<(String, String)>)> {
        let lock = self.submissions.lock().await;
        lock.clone()
    }

    pub async fn status_fetches(&self) -> Vec<(String, tokio::time::Instant)> {
        let lock = self.status_fetches.lock().await;
        lock.clone()
    }
}

impl OrderGateway for InMemoryOrderGateway {
    async fn submit_cart_add(&self, action: &str, fields: &[(String, String)]) -> Result<CartAddResponse, ClientError> {
        {
            let mut lock = self.submissions.lock().await;
            lock.push((String::from(action), fields.to_vec()));
        }

        let mut lock = self.cart_replies.lock().await;
        match lock.pop_front() {
            Some(reply) => reply,
            None => Err(ClientError::Transport { message: String::from("no scripted reply") })
        }
    }

    async fn fetch_order_status<'a>(&self, order_id: &'a str) -> Result<OrderStatusResponse, ClientError> {
        {
            let mut lock = self.status_fetches.lock().await;
            lock.push((String::from(order_id), tokio::time::Instant::now()));
        }

        let mut lock = self.status_replies.lock().await;
        match lock.pop_front() {
            Some(reply) => reply,
            None => Err(ClientError::Transport { message: String::from("no scripted reply") })
        }
    }
}
