use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::{domain::CartSelection, dtos::{AddItemToCartResponse, GetOrderStatusResponse, Response}, error::ClientError, gateway::OrderGateway};

// traits
pub trait Command{}
pub trait Query{}

pub trait CommandHandler<C: Command, R: Response>{
    async fn handle(&self, input: &C) -> Result<R, ClientError>;
}

pub trait QueryHandler<Q: Query, R: Response>{
    async fn handle(&self, input: &Q) -> Result<R, ClientError>;
}

#[derive(Serialize, Deserialize)]
pub struct AddItemToCartCommand {
    pub action: String,
    pub fields: Vec<(String, String)>,
}
impl Command for AddItemToCartCommand{}

impl AddItemToCartCommand {
    pub fn from_selection(action: String, selection: &CartSelection) -> Self {
        AddItemToCartCommand {
            action: action,
            fields: selection.to_form_fields()
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetOrderStatusQuery {
    pub order_id: String
}
impl Query for GetOrderStatusQuery{}

pub struct AddItemToCartCommandHandler<T1: OrderGateway>{
    gateway: Arc<T1>
}

impl<T1: OrderGateway> AddItemToCartCommandHandler<T1>{
    pub fn new(gateway: Arc<T1>) -> Self{
        AddItemToCartCommandHandler {
            gateway: gateway
        }
    }
}

impl<T1: OrderGateway> CommandHandler<AddItemToCartCommand, AddItemToCartResponse> for AddItemToCartCommandHandler<T1>{
    async fn handle(&self, input: &AddItemToCartCommand) -> Result<AddItemToCartResponse, ClientError> {
        if input.action.is_empty() {
            return Err(ClientError::Rejected {
                message: Some(String::from("Form action cannot be null or empty!!!"))
            });
        }

        match self.gateway.submit_cart_add(&input.action, &input.fields).await {
            Ok(payload) => {
                if payload.ok {
                    Ok(AddItemToCartResponse {
                        message: payload.message
                    })
                } else {
                    event!(Level::WARN, "Cart add was rejected: {:?}", payload.message);
                    Err(ClientError::Rejected {
                        message: payload.message
                    })
                }
            },
            Err(e) => {
                event!(Level::WARN, "Error occurred while adding item to cart: {}", e);
                Err(e)
            }
        }
    }
}

pub struct GetOrderStatusQueryHandler<T1: OrderGateway> {
    gateway: Arc<T1>
}

impl<T1: OrderGateway> GetOrderStatusQueryHandler<T1> {
    pub fn new(gateway: Arc<T1>) -> Self {
        GetOrderStatusQueryHandler {
            gateway: gateway
        }
    }
}

impl<T1: OrderGateway> QueryHandler<GetOrderStatusQuery, GetOrderStatusResponse> for GetOrderStatusQueryHandler<T1> {
    async fn handle(&self, input: &GetOrderStatusQuery) -> Result<GetOrderStatusResponse, ClientError> {
        if input.order_id.is_empty() {
            return Err(ClientError::Rejected {
                message: Some(String::from("Order ID cannot be null or empty!!!"))
            });
        }

        match self.gateway.fetch_order_status(input.order_id.as_str()).await {
            Ok(payload) => {
                if payload.ok {
                    Ok(GetOrderStatusResponse {
                        status: payload.status,
                        updated_at: payload.updated_at
                    })
                } else {
                    Err(ClientError::Rejected {
                        message: None
                    })
                }
            },
            Err(e) => {
                event!(Level::TRACE, "Error occurred while fetching order status: {}", e);
                Err(e)
            }
        }
    }
}
