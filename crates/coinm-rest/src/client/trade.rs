//! Order placement, modification, query and cancellation.

use coinm_core::types::{
    CancelAllOpenOrdersResult, CancelMultipleOrdersParams, CancelOrderParams, CancelOrdersTimeoutParams,
    GetAllOrdersParams, GetOrderParams, ModifyOrderParams, NewOrderParams, OrderResponse, OrderResult,
    SetCancelTimeoutResult, SymbolOrPair, SymbolParam,
};
use tracing::warn;

use super::{CoinMClient, MAX_BATCH_ORDERS};
use crate::endpoints::private;
use crate::error::RestError;
use crate::order_id;
use crate::params::ParamBag;
use crate::transport::{Method, RestRequest, Security, SignedTransport};

impl<T: SignedTransport> CoinMClient<T> {
    /// Submit one order.
    ///
    /// An empty `new_client_order_id` is replaced with a generated id and
    /// left set on `params` after the call. A supplied id without the
    /// expected prefix is sent as is, with a logged warning.
    ///
    /// An inline exchange rejection in a 200 response comes back as
    /// [`OrderResponse::Rejected`], not as an error.
    pub async fn submit_new_order(&self, params: &mut NewOrderParams) -> Result<OrderResponse, RestError> {
        self.validate_order_id(&mut params.new_client_order_id, "newClientOrderId");
        self.post_private(private::ORDER, params).await
    }

    /// Submit up to [`MAX_BATCH_ORDERS`] orders in one request.
    ///
    /// Each order is copied, given a client order id if it has none, and
    /// serialized individually; `orders` itself is not modified. The batch is
    /// not atomic: the result list is index-aligned with `orders` and holds
    /// an [`OrderResponse::Rejected`] for every order the exchange refused.
    pub async fn submit_multiple_orders(&self, orders: &[NewOrderParams]) -> Result<Vec<OrderResponse>, RestError> {
        if orders.len() > MAX_BATCH_ORDERS {
            warn!(
                count = orders.len(),
                max = MAX_BATCH_ORDERS,
                "[{}] batch exceeds the exchange limit and will likely be rejected",
                self.category
            );
        }

        let serialized = orders
            .iter()
            .map(|order| {
                let mut order = order.clone();
                self.validate_order_id(&mut order.new_client_order_id, "newClientOrderId");
                serde_json::to_string(&order)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut params = ParamBag::new();
        params.push("batchOrders", format!("[{}]", serialized.join(",")));
        self.send(RestRequest::new(Method::Post, private::BATCH_ORDERS, Security::Signed).with_params(params))
            .await
    }

    /// Change price or quantity of an open limit order.
    pub async fn modify_order(&self, params: &ModifyOrderParams) -> Result<OrderResult, RestError> {
        self.put_private(private::ORDER, params).await
    }

    pub async fn get_order(&self, params: &GetOrderParams) -> Result<OrderResult, RestError> {
        self.get_private(private::ORDER, params).await
    }

    /// Cancel one order. A supplied `orig_client_order_id` is only linted;
    /// no id is ever generated here.
    pub async fn cancel_order(&self, params: &CancelOrderParams) -> Result<OrderResult, RestError> {
        if let Some(id) = params.orig_client_order_id.as_deref() {
            order_id::lint_order_id(id, "origClientOrderId", self.category);
        }
        self.delete_private(private::ORDER, params).await
    }

    pub async fn cancel_all_open_orders(&self, params: &SymbolParam) -> Result<CancelAllOpenOrdersResult, RestError> {
        self.delete_private(private::ALL_OPEN_ORDERS, params).await
    }

    /// Cancel several orders of one symbol. Per-order failures are returned
    /// inline, index-aligned with the id list.
    pub async fn cancel_multiple_orders(
        &self,
        params: &CancelMultipleOrdersParams,
    ) -> Result<Vec<OrderResponse>, RestError> {
        self.delete_private(private::BATCH_ORDERS, params).await
    }

    /// Arm (or disarm, with a zero countdown) the auto-cancel timer.
    pub async fn set_cancel_orders_on_timeout(
        &self,
        params: &CancelOrdersTimeoutParams,
    ) -> Result<SetCancelTimeoutResult, RestError> {
        self.post_private(private::COUNTDOWN_CANCEL_ALL, params).await
    }

    pub async fn get_current_open_order(&self, params: &GetOrderParams) -> Result<OrderResult, RestError> {
        self.get_private(private::OPEN_ORDER, params).await
    }

    pub async fn get_all_open_orders(&self, params: &SymbolOrPair) -> Result<Vec<OrderResult>, RestError> {
        self.get_private(private::OPEN_ORDERS, params).await
    }

    pub async fn get_all_orders(&self, params: &GetAllOrdersParams) -> Result<Vec<OrderResult>, RestError> {
        self.get_private(private::ALL_ORDERS, params).await
    }
}
