//! Order params and order-shaped responses.

use serde::{Deserialize, Serialize};

use super::enums::{
    NewOrderRespType, OrderSide, OrderStatus, OrderType, PositionSide, TimeInForce, WorkingType,
};
use super::shared::{CodeMsg, opt_bool_str};

// ---------------------------------------------------------------------------
// New / modify order
// ---------------------------------------------------------------------------

/// `POST dapi/v1/order` params, also the element type of a batch submission.
///
/// Quantities and prices are strings so batch JSON carries them exactly as
/// the exchange expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderParams {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_side: Option<PositionSide>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "opt_bool_str")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Filled in with a generated id when left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "opt_bool_str")]
    pub close_position: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_type: Option<WorkingType>,
    #[serde(skip_serializing_if = "Option::is_none", with = "opt_bool_str")]
    pub price_protect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_order_resp_type: Option<NewOrderRespType>,
}

impl NewOrderParams {
    /// Limit order, good-till-cancel.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            time_in_force: Some(TimeInForce::Gtc),
            quantity: Some(quantity.into()),
            price: Some(price.into()),
            ..Self::new(symbol, side, OrderType::Limit)
        }
    }

    /// Market order.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: impl Into<String>) -> Self {
        Self { quantity: Some(quantity.into()), ..Self::new(symbol, side, OrderType::Market) }
    }

    /// Bare order with only the required fields set.
    pub fn new(symbol: impl Into<String>, side: OrderSide, order_type: OrderType) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            position_side: None,
            order_type,
            time_in_force: None,
            quantity: None,
            reduce_only: None,
            price: None,
            new_client_order_id: None,
            stop_price: None,
            close_position: None,
            activation_price: None,
            callback_rate: None,
            working_type: None,
            price_protect: None,
            new_order_resp_type: None,
        }
    }
}

/// `PUT dapi/v1/order` params. Either `order_id` or `orig_client_order_id`
/// must be set; the order keeps its client id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderParams {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Order as reported by submit, query, cancel and force-order endpoints.
///
/// `ACK` responses omit most fields, hence the liberal defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: u64,
    pub symbol: String,
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    pub client_order_id: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub avg_price: Option<String>,
    #[serde(default)]
    pub orig_qty: Option<String>,
    #[serde(default)]
    pub executed_qty: Option<String>,
    #[serde(default)]
    pub cum_qty: Option<String>,
    #[serde(default)]
    pub cum_base: Option<String>,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub reduce_only: Option<bool>,
    #[serde(default)]
    pub close_position: Option<bool>,
    #[serde(default)]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub position_side: Option<PositionSide>,
    #[serde(default)]
    pub stop_price: Option<String>,
    #[serde(default)]
    pub working_type: Option<WorkingType>,
    #[serde(default)]
    pub price_protect: Option<bool>,
    #[serde(default)]
    pub orig_type: Option<OrderType>,
    #[serde(default)]
    pub time: Option<u64>,
    #[serde(default)]
    pub update_time: Option<u64>,
}

// ---------------------------------------------------------------------------
// Query / cancel
// ---------------------------------------------------------------------------

/// Identifies one order by exchange id or client id. Used for query, open
/// order lookup and cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdParams {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
}

impl OrderIdParams {
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self { symbol: symbol.into(), order_id: Some(order_id), orig_client_order_id: None }
    }

    pub fn by_client_id(symbol: impl Into<String>, client_order_id: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), order_id: None, orig_client_order_id: Some(client_order_id.into()) }
    }
}

pub type GetOrderParams = OrderIdParams;
pub type CancelOrderParams = OrderIdParams;

/// `DELETE dapi/v1/batchOrders` params. At most 10 ids per list; the lists
/// go on the wire as JSON arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelMultipleOrdersParams {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id_list: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id_list: Option<Vec<String>>,
}

/// `{"code": 200, "msg": "The operation of cancel all open order is done."}`
pub type CancelAllOpenOrdersResult = CodeMsg;

/// `POST dapi/v1/countdownCancelAll` params. `countdown_time` of 0 disables
/// the timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrdersTimeoutParams {
    pub symbol: String,
    /// Milliseconds.
    pub countdown_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCancelTimeoutResult {
    pub symbol: String,
    pub countdown_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllOrdersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Position mode
// ---------------------------------------------------------------------------

/// `POST dapi/v1/positionSide/dual` params. `true` selects hedge mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPositionModeParams {
    pub dual_side_position: bool,
}

/// `GET dapi/v1/positionSide/dual` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMode {
    pub dual_side_position: bool,
}
