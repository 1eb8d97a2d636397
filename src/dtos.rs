use serde::{Deserialize, Serialize};

pub trait Response{}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAddResponse {
    pub ok: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub ok: bool,
    pub status: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemToCartResponse {
    pub message: Option<String>,
}
impl Response for AddItemToCartResponse{}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderStatusResponse {
    pub status: Option<String>,
    pub updated_at: Option<String>,
}
impl Response for GetOrderStatusResponse{}
