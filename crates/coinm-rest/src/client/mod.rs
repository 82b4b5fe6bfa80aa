//! COIN-M futures endpoint mapper.
//!
//! [`CoinMClient`] exposes one async method per REST endpoint. Each method
//! fixes the verb, path and security of its endpoint, flattens the typed
//! params into a [`ParamBag`], hands the request to the transport and decodes
//! the declared response type.
//!
//! | Group    | Module     | Security            |
//! |----------|------------|---------------------|
//! | Market   | `market`   | Public (one ApiKey) |
//! | Trade    | `trade`    | Signed              |
//! | Account  | `account`  | Signed, ApiKey      |
//!
//! The only local logic is the client order id guard on order submission
//! (see [`crate::order_id`]) and the array coercion of the book ticker.

mod account;
mod market;
mod trade;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{ApiCategory, RestClientOptions};
use crate::error::RestError;
use crate::order_id::{self, OrderIdCheck};
use crate::params::ParamBag;
use crate::rate_limit::RateLimitSnapshot;
use crate::transport::{HttpTransport, Method, RestRequest, Security, SignedTransport};

/// Maximum orders the exchange accepts in one batch submission.
pub const MAX_BATCH_ORDERS: usize = 5;

/// Typed client for the COIN-M futures REST API.
///
/// All methods take `&self`; the client holds no per-request state.
pub struct CoinMClient<T = HttpTransport> {
    transport: T,
    category: ApiCategory,
}

impl CoinMClient<HttpTransport> {
    /// Build a client with the production HTTP transport.
    pub fn new(options: RestClientOptions) -> Result<Self, RestError> {
        let transport = HttpTransport::new(&options)?;
        Ok(Self { transport, category: options.category() })
    }

    /// Measure the server clock offset used for signed request timestamps.
    pub async fn sync_time(&self) -> Result<i64, RestError> {
        self.transport.sync_time().await
    }

    /// Latest rate-limit usage reported by the exchange.
    pub fn rate_limits(&self) -> RateLimitSnapshot {
        self.transport.rate_limits()
    }
}

impl<T: SignedTransport> CoinMClient<T> {
    /// Build a client over an arbitrary transport.
    ///
    /// `category` must match the deployment the transport talks to; it
    /// selects the prefix of generated client order ids.
    pub fn with_transport(transport: T, category: ApiCategory) -> Self {
        Self { transport, category }
    }

    pub fn category(&self) -> ApiCategory {
        self.category
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -----------------------------------------------------------------------
    // Request helpers
    // -----------------------------------------------------------------------

    async fn request<R, P>(
        &self,
        method: Method,
        path: &'static str,
        security: Security,
        params: &P,
    ) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let params = ParamBag::from_serialize(params)?;
        self.send(RestRequest::new(method, path, security).with_params(params)).await
    }

    async fn send<R: DeserializeOwned>(&self, request: RestRequest) -> Result<R, RestError> {
        let body = self.transport.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn get<R, P>(&self, path: &'static str, params: &P) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Get, path, Security::Public, params).await
    }

    async fn get_private<R, P>(&self, path: &'static str, params: &P) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Get, path, Security::Signed, params).await
    }

    async fn post_private<R, P>(&self, path: &'static str, params: &P) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Post, path, Security::Signed, params).await
    }

    async fn put_private<R, P>(&self, path: &'static str, params: &P) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Put, path, Security::Signed, params).await
    }

    async fn delete_private<R, P>(&self, path: &'static str, params: &P) -> Result<R, RestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Delete, path, Security::Signed, params).await
    }

    /// Fill or lint a `newClientOrderId` slot for this client's category.
    fn validate_order_id(&self, slot: &mut Option<String>, property: &str) -> OrderIdCheck {
        order_id::validate_order_id(slot, property, self.category)
    }
}

#[cfg(test)]
mod tests {
    use coinm_core::types::*;
    use serde_json::{Value, json};

    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::endpoints::{market as m, private as p, stream as s};
    use crate::transport::mock::RecordingTransport;

    /// Collects formatted log lines for the current thread.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn warnings_naming(&self, property: &str) -> usize {
            let text = String::from_utf8_lossy(&self.0.lock().unwrap()).to_string();
            text.lines().filter(|l| l.contains("WARN") && l.contains(property)).count()
        }
    }

    fn capture_warnings() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        (buffer, tracing::subscriber::set_default(subscriber))
    }

    fn client(responses: Vec<Value>) -> CoinMClient<RecordingTransport> {
        CoinMClient::with_transport(RecordingTransport::with_responses(responses), ApiCategory::CoinM)
    }

    fn assert_route(client: &CoinMClient<RecordingTransport>, method: Method, path: &str, security: Security) {
        let req = client.transport().last();
        assert_eq!((req.method, req.path, req.security), (method, path, security), "{path}");
    }

    fn order_json(id: u64, client_id: &str) -> Value {
        json!({"orderId": id, "symbol": "BTCUSD_PERP", "clientOrderId": client_id, "status": "NEW"})
    }

    // -- Order id guard -----------------------------------------------------

    #[tokio::test]
    async fn submit_new_order_generates_prefixed_id() {
        for category in [ApiCategory::CoinM, ApiCategory::CoinMTest] {
            let client = CoinMClient::with_transport(
                RecordingTransport::with_responses([order_json(1, "x")]),
                category,
            );
            let mut order = NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1");
            client.submit_new_order(&mut order).await.unwrap();

            let generated = order.new_client_order_id.clone().unwrap();
            assert!(generated.starts_with(&order_id::expected_prefix(category)));
            assert_eq!(client.transport().last().params.get("newClientOrderId"), Some(generated.as_str()));
        }
    }

    #[tokio::test]
    async fn submit_new_order_keeps_foreign_id() {
        let client = client(vec![order_json(1, "my-id")]);
        let mut order = NewOrderParams::market("BTCUSD_PERP", OrderSide::Sell, "2");
        order.new_client_order_id = Some("my-id".into());
        let before = order.clone();

        let resp = client.submit_new_order(&mut order).await.unwrap();
        assert_eq!(order, before);
        assert_eq!(client.transport().last().params.get("newClientOrderId"), Some("my-id"));
        assert_eq!(resp.accepted().unwrap().client_order_id, "my-id");
    }

    #[tokio::test]
    async fn foreign_ids_are_logged_as_warnings() {
        let (logs, _guard) = capture_warnings();
        let client = client(vec![order_json(1, "my-id"), order_json(1, "my-id")]);

        let mut order = NewOrderParams::market("BTCUSD_PERP", OrderSide::Sell, "2");
        order.new_client_order_id = Some("my-id".into());
        client.submit_new_order(&mut order).await.unwrap();
        assert_eq!(logs.warnings_naming("newClientOrderId"), 1);

        client.cancel_order(&OrderIdParams::by_client_id("BTCUSD_PERP", "my-id")).await.unwrap();
        assert_eq!(logs.warnings_naming("origClientOrderId"), 1);
    }

    #[tokio::test]
    async fn prefixed_and_generated_ids_are_silent() {
        let (logs, _guard) = capture_warnings();
        let client = client(vec![order_json(1, "x"), order_json(2, "x")]);

        let mut generated = NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1");
        client.submit_new_order(&mut generated).await.unwrap();
        let mut prefixed = NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1");
        prefixed.new_client_order_id = Some("x-15PC4ZJymine".into());
        client.submit_new_order(&mut prefixed).await.unwrap();

        assert_eq!(logs.warnings_naming("newClientOrderId"), 0);
    }

    #[tokio::test]
    async fn submit_new_order_surfaces_inline_error() {
        let client = client(vec![json!({"code": -4164, "msg": "Order's notional must be no smaller than 5.0"})]);
        let mut order = NewOrderParams::limit("BTCUSD_PERP", OrderSide::Buy, "1", "1");
        let resp = client.submit_new_order(&mut order).await.unwrap();
        assert_eq!(resp.into_result().unwrap_err().code, -4164);
    }

    #[tokio::test]
    async fn cancel_order_never_generates_an_id() {
        let client = client(vec![order_json(9, "foreign")]);
        let params = OrderIdParams::by_order_id("BTCUSD_PERP", 9);
        client.cancel_order(&params).await.unwrap();
        let req = client.transport().last();
        assert_eq!(req.params.get("origClientOrderId"), None);
        assert_eq!(req.params.get("orderId"), Some("9"));
        assert_route(&client, Method::Delete, p::ORDER, Security::Signed);
    }

    // -- Batch submission ---------------------------------------------------

    #[tokio::test]
    async fn batch_is_one_call_with_individually_validated_orders() {
        let client = client(vec![json!([
            order_json(1, "a"),
            {"code": -2019, "msg": "Margin is insufficient."},
            order_json(3, "c"),
        ])]);
        let mut with_id = NewOrderParams::market("ETHUSD_PERP", OrderSide::Buy, "1");
        with_id.new_client_order_id = Some("x-15PC4ZJykept".into());
        let orders = vec![
            NewOrderParams::limit("BTCUSD_PERP", OrderSide::Buy, "1", "20000"),
            with_id,
            NewOrderParams::market("BTCUSD_PERP", OrderSide::Sell, "3"),
        ];

        let results = client.submit_multiple_orders(&orders).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_route(&client, Method::Post, p::BATCH_ORDERS, Security::Signed);

        let batch: Vec<Value> = serde_json::from_str(requests[0].params.get("batchOrders").unwrap()).unwrap();
        assert_eq!(batch.len(), 3);
        for item in &batch {
            assert!(item["newClientOrderId"].as_str().unwrap().starts_with("x-15PC4ZJy"));
        }
        assert_eq!(batch[1]["newClientOrderId"], "x-15PC4ZJykept");
        assert_eq!(batch[0]["price"], "20000");

        // Caller's orders are serialized from copies.
        assert!(orders[0].new_client_order_id.is_none());

        assert_eq!(results.len(), 3);
        assert!(results[0].accepted().is_some());
        assert!(results[1].accepted().is_none());
        assert_eq!(results[2].accepted().unwrap().order_id, 3);
    }

    #[tokio::test]
    async fn batch_survives_unlisted_order_values() {
        let mut odd = order_json(2, "b");
        odd["status"] = json!("SOME_FUTURE_STATUS");
        odd["type"] = json!("SOME_FUTURE_TYPE");
        odd["timeInForce"] = json!("GTD");
        let client = client(vec![json!([order_json(1, "a"), odd])]);
        let orders = vec![NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1"); 2];

        let results = client.submit_multiple_orders(&orders).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].accepted().unwrap().status, Some(OrderStatus::New));
        let second = results[1].accepted().unwrap();
        assert_eq!(second.order_id, 2);
        assert_eq!(second.status, Some(OrderStatus::Unknown));
        assert_eq!(second.order_type, Some(OrderType::Unknown));
        assert_eq!(second.time_in_force, Some(TimeInForce::Unknown));
    }

    #[tokio::test]
    async fn catch_all_income_type_is_not_sent() {
        let client = client(vec![json!([])]);
        let params = GetIncomeHistoryParams { income_type: Some(IncomeType::Other), ..Default::default() };
        let err = client.get_income_history(&params).await.unwrap_err();
        assert!(matches!(err, RestError::Core(_)));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn oversized_batch_is_still_forwarded() {
        let client = client(vec![json!([])]);
        let orders = vec![NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1"); MAX_BATCH_ORDERS + 1];
        client.submit_multiple_orders(&orders).await.unwrap();
        let batch: Vec<Value> =
            serde_json::from_str(client.transport().last().params.get("batchOrders").unwrap()).unwrap();
        assert_eq!(batch.len(), MAX_BATCH_ORDERS + 1);
    }

    // -- Response shape handling -------------------------------------------

    #[tokio::test]
    async fn book_ticker_is_always_an_array() {
        let ticker = json!({"symbol": "BTCUSD_PERP", "pair": "BTCUSD", "bidPrice": "1", "bidQty": "2",
                            "askPrice": "3", "askQty": "4", "time": 5});
        let client = client(vec![ticker.clone(), json!([ticker.clone(), ticker])]);

        let one = client.get_symbol_order_book_ticker(&SymbolOrPair::symbol("BTCUSD_PERP")).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].ask_qty, "4");

        let many = client.get_symbol_order_book_ticker(&SymbolOrPair::default()).await.unwrap();
        assert_eq!(many.len(), 2);
        assert_route(&client, Method::Get, m::TICKER_BOOK, Security::Public);
    }

    #[tokio::test]
    async fn leverage_brackets_pass_through_shape() {
        let bracket = json!({"pair": "BTCUSD", "brackets": [
            {"bracket": 1, "initialLeverage": 125, "qtyCap": 50, "qtylFloor": 0, "maintMarginRatio": 0.004}
        ]});
        let client = client(vec![bracket.clone(), json!([bracket])]);
        let one = client.get_notional_and_leverage_brackets(&SymbolOrPair::pair("BTCUSD")).await.unwrap();
        assert!(matches!(one, OneOrMany::One(_)));
        let many = client.get_notional_and_leverage_brackets(&SymbolOrPair::default()).await.unwrap();
        assert!(matches!(many, OneOrMany::Many(ref v) if v.len() == 1));
    }

    #[tokio::test]
    async fn server_time_is_unwrapped() {
        let client = client(vec![json!({"serverTime": 1_700_000_000_123u64})]);
        assert_eq!(client.get_server_time().await.unwrap(), 1_700_000_000_123);
        assert_route(&client, Method::Get, m::SERVER_TIME, Security::Public);
    }

    #[tokio::test]
    async fn decode_mismatch_is_reported() {
        let client = client(vec![json!({"unexpected": true})]);
        let err = client.get_open_interest(&SymbolParam::new("BTCUSD_PERP")).await.unwrap_err();
        assert!(matches!(err, RestError::Decode(_)));
    }

    // -- Routing table ------------------------------------------------------

    #[tokio::test]
    async fn read_endpoints_use_get() {
        let client = client(vec![]);
        let sym = SymbolParam::new("BTCUSD_PERP");
        let any = SymbolOrPair::default();
        let opt = OptionalSymbolParam::default();
        let by_id = OrderIdParams::by_order_id("BTCUSD_PERP", 1);

        // Responses are null, so decoding fails; only the routing matters.
        let _ = client.ping().await;
        assert_route(&client, Method::Get, m::PING, Security::Public);
        let _ = client.get_exchange_info().await;
        assert_route(&client, Method::Get, m::EXCHANGE_INFO, Security::Public);
        let _ = client.get_order_book(&OrderBookParams { symbol: "BTCUSD_PERP".into(), limit: Some(5) }).await;
        assert_route(&client, Method::Get, m::DEPTH, Security::Public);
        let _ = client.get_recent_trades(&RecentTradesParams { symbol: "BTCUSD_PERP".into(), limit: None }).await;
        assert_route(&client, Method::Get, m::TRADES, Security::Public);
        let _ = client.get_historical_trades(&HistoricalTradesParams::default()).await;
        assert_route(&client, Method::Get, m::HISTORICAL_TRADES, Security::ApiKey);
        let _ = client.get_aggregate_trades(&AggTradesParams::default()).await;
        assert_route(&client, Method::Get, m::AGG_TRADES, Security::Public);
        let _ = client.get_mark_price(&any).await;
        assert_route(&client, Method::Get, m::PREMIUM_INDEX, Security::Public);
        let _ = client.get_funding_rate_history(&FundingRateParams::default()).await;
        assert_route(&client, Method::Get, m::FUNDING_RATE, Security::Public);
        let klines = KlinesParams {
            symbol: "BTCUSD_PERP".into(),
            interval: KlineInterval::OneHour,
            start_time: None,
            end_time: None,
            limit: None,
        };
        let _ = client.get_klines(&klines).await;
        assert_route(&client, Method::Get, m::KLINES, Security::Public);
        assert_eq!(client.transport().last().params.get("interval"), Some("1h"));
        let _ = client.get_24hr_ticker(&any).await;
        assert_route(&client, Method::Get, m::TICKER_24HR, Security::Public);
        let _ = client.get_symbol_price_ticker(&any).await;
        assert_route(&client, Method::Get, m::TICKER_PRICE, Security::Public);
        let _ = client.get_open_interest(&sym).await;
        assert_route(&client, Method::Get, m::OPEN_INTEREST, Security::Public);

        let _ = client.get_current_position_mode().await;
        assert_route(&client, Method::Get, p::POSITION_MODE, Security::Signed);
        let _ = client.get_positions().await;
        assert_route(&client, Method::Get, p::POSITION_RISK, Security::Signed);
        let _ = client.get_account_trades(&AccountTradeParams::default()).await;
        assert_route(&client, Method::Get, p::USER_TRADES, Security::Signed);
        let _ = client.get_order(&by_id).await;
        assert_route(&client, Method::Get, p::ORDER, Security::Signed);
        let _ = client.get_current_open_order(&by_id).await;
        assert_route(&client, Method::Get, p::OPEN_ORDER, Security::Signed);
        let _ = client.get_all_open_orders(&any).await;
        assert_route(&client, Method::Get, p::OPEN_ORDERS, Security::Signed);
        let _ = client.get_all_orders(&GetAllOrdersParams::default()).await;
        assert_route(&client, Method::Get, p::ALL_ORDERS, Security::Signed);
        let _ = client.get_balance().await;
        assert_route(&client, Method::Get, p::BALANCE, Security::Signed);
        let _ = client.get_account_information().await;
        assert_route(&client, Method::Get, p::ACCOUNT, Security::Signed);
        let _ = client.get_position_margin_change_history(&GetPositionMarginChangeHistoryParams::default()).await;
        assert_route(&client, Method::Get, p::POSITION_MARGIN_HISTORY, Security::Signed);
        let _ = client.get_income_history(&GetIncomeHistoryParams::default()).await;
        assert_route(&client, Method::Get, p::INCOME, Security::Signed);
        let _ = client.get_adl_quantile_estimation(&opt).await;
        assert_route(&client, Method::Get, p::ADL_QUANTILE, Security::Signed);
        let _ = client.get_force_orders(&GetForceOrdersParams::default()).await;
        assert_route(&client, Method::Get, p::FORCE_ORDERS, Security::Signed);
        let _ = client.get_api_quantitative_rules_indicators(&opt).await;
        assert_route(&client, Method::Get, p::API_TRADING_STATUS, Security::Signed);
        let _ = client.get_account_commission_rate(&sym).await;
        assert_route(&client, Method::Get, p::COMMISSION_RATE, Security::Signed);
    }

    #[tokio::test]
    async fn mutations_never_use_get() {
        let client = client(vec![]);

        let _ = client.get_futures_user_data_listen_key().await;
        assert_route(&client, Method::Post, s::LISTEN_KEY, Security::ApiKey);
        let _ = client.keep_alive_futures_user_data_listen_key().await;
        assert_route(&client, Method::Put, s::LISTEN_KEY, Security::ApiKey);
        let _ = client.close_futures_user_data_listen_key().await;
        assert_route(&client, Method::Delete, s::LISTEN_KEY, Security::ApiKey);

        let _ = client.set_position_mode(&SetPositionModeParams { dual_side_position: true }).await;
        assert_route(&client, Method::Post, p::POSITION_MODE, Security::Signed);
        assert_eq!(client.transport().last().params.get("dualSidePosition"), Some("true"));

        let mut order = NewOrderParams::market("BTCUSD_PERP", OrderSide::Buy, "1");
        let _ = client.submit_new_order(&mut order).await;
        assert_route(&client, Method::Post, p::ORDER, Security::Signed);

        let modify = ModifyOrderParams {
            symbol: "BTCUSD_PERP".into(),
            side: OrderSide::Buy,
            order_id: Some(1),
            orig_client_order_id: None,
            quantity: Some("2".into()),
            price: Some("30000".into()),
        };
        let _ = client.modify_order(&modify).await;
        assert_route(&client, Method::Put, p::ORDER, Security::Signed);

        let _ = client.cancel_all_open_orders(&SymbolParam::new("BTCUSD_PERP")).await;
        assert_route(&client, Method::Delete, p::ALL_OPEN_ORDERS, Security::Signed);

        let cancel_many = CancelMultipleOrdersParams {
            symbol: "BTCUSD_PERP".into(),
            order_id_list: None,
            orig_client_order_id_list: Some(vec!["x-15PC4ZJya".into(), "x-15PC4ZJyb".into()]),
        };
        let _ = client.cancel_multiple_orders(&cancel_many).await;
        assert_route(&client, Method::Delete, p::BATCH_ORDERS, Security::Signed);
        assert_eq!(
            client.transport().last().params.get("origClientOrderIdList"),
            Some(r#"["x-15PC4ZJya","x-15PC4ZJyb"]"#)
        );

        let countdown = CancelOrdersTimeoutParams { symbol: "BTCUSD_PERP".into(), countdown_time: 120_000 };
        let _ = client.set_cancel_orders_on_timeout(&countdown).await;
        assert_route(&client, Method::Post, p::COUNTDOWN_CANCEL_ALL, Security::Signed);

        let _ = client.set_leverage(&SetLeverageParams { symbol: "BTCUSD_PERP".into(), leverage: 20 }).await;
        assert_route(&client, Method::Post, p::LEVERAGE, Security::Signed);

        let margin_type = SetMarginTypeParams { symbol: "BTCUSD_PERP".into(), margin_type: MarginType::Isolated };
        let _ = client.set_margin_type(&margin_type).await;
        assert_route(&client, Method::Post, p::MARGIN_TYPE, Security::Signed);
        assert_eq!(client.transport().last().params.get("marginType"), Some("ISOLATED"));

        let margin = SetIsolatedMarginParams {
            symbol: "BTCUSD_PERP".into(),
            position_side: None,
            amount: "0.1".into(),
            direction: MarginChangeDirection::Reduce,
        };
        let _ = client.set_isolated_position_margin(&margin).await;
        assert_route(&client, Method::Post, p::POSITION_MARGIN, Security::Signed);
        assert_eq!(client.transport().last().params.get("type"), Some("2"));
    }

    #[tokio::test]
    async fn listen_key_lifecycle_decodes() {
        let client = client(vec![json!({"listenKey": "abc"}), json!({}), json!({})]);
        assert_eq!(client.get_futures_user_data_listen_key().await.unwrap().listen_key, "abc");
        client.keep_alive_futures_user_data_listen_key().await.unwrap();
        client.close_futures_user_data_listen_key().await.unwrap();
    }

    #[test]
    fn testnet_options_select_test_category() {
        let options = RestClientOptions { use_testnet: true, ..Default::default() };
        let client = CoinMClient::new(options).unwrap();
        assert_eq!(client.category(), ApiCategory::CoinMTest);
        assert_eq!(client.transport().base_url(), "https://testnet.binancefuture.com");
    }
}
