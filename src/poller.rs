use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{event, Level};

use crate::{cqrs::{GetOrderStatusQuery, GetOrderStatusQueryHandler, QueryHandler}, frontend::StatusDisplay, gateway::OrderGateway};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct StatusPollerConfig {
    pub order_id: Option<String>,
    pub poll_interval: Duration,
}

impl Default for StatusPollerConfig {
    fn default() -> Self {
        StatusPollerConfig {
            order_id: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

pub struct OrderStatusPoller<T1: OrderGateway, T2: StatusDisplay> {
    query_handler: Arc<GetOrderStatusQueryHandler<T1>>,
    display: Arc<T2>,
    config: StatusPollerConfig,
}

impl<T1: OrderGateway, T2: StatusDisplay> OrderStatusPoller<T1, T2> {
    pub fn new(query_handler: Arc<GetOrderStatusQueryHandler<T1>>, display: Arc<T2>, config: StatusPollerConfig) -> Self {
        OrderStatusPoller {
            query_handler: query_handler,
            display: display,
            config: config
        }
    }

    // Without an order id no cycle runs and none is ever scheduled.
    pub async fn run(&self) {
        let order_id = match &self.config.order_id {
            Some(order_id) => order_id.clone(),
            None => {
                event!(Level::DEBUG, "No order id configured, status polling is disabled");
                return;
            }
        };

        loop {
            self.cycle(&order_id).await;
            sleep(self.config.poll_interval).await;
        }
    }

    // Every exit path falls through to the sleep in run: one cycle, one
    // follow-up, delay measured from completion.
    async fn cycle(&self, order_id: &str) {
        let query = GetOrderStatusQuery {
            order_id: String::from(order_id)
        };

        match self.query_handler.handle(&query).await {
            Ok(response) => {
                match response.status {
                    Some(status) => self.display.set_status(&status).await,
                    None => event!(Level::TRACE, "Status payload carried no status text")
                }
            },
            Err(e) => {
                event!(Level::TRACE, "Status poll cycle failed: {}", e);
            }
        }
    }
}
