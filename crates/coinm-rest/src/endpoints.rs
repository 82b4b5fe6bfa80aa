//! COIN-M REST endpoint paths, relative to the base URL.

/// Public market data endpoints.
pub mod market {
    pub const PING: &str = "dapi/v1/ping";
    pub const SERVER_TIME: &str = "dapi/v1/time";
    pub const EXCHANGE_INFO: &str = "dapi/v1/exchangeInfo";
    pub const DEPTH: &str = "dapi/v1/depth";
    pub const TRADES: &str = "dapi/v1/trades";
    /// Requires an API key header (`MARKET_DATA`).
    pub const HISTORICAL_TRADES: &str = "dapi/v1/historicalTrades";
    pub const AGG_TRADES: &str = "dapi/v1/aggTrades";
    pub const PREMIUM_INDEX: &str = "dapi/v1/premiumIndex";
    pub const FUNDING_RATE: &str = "dapi/v1/fundingRate";
    pub const KLINES: &str = "dapi/v1/klines";
    pub const TICKER_24HR: &str = "dapi/v1/ticker/24hr";
    pub const TICKER_PRICE: &str = "dapi/v1/ticker/price";
    pub const TICKER_BOOK: &str = "dapi/v1/ticker/bookTicker";
    pub const OPEN_INTEREST: &str = "dapi/v1/openInterest";
}

/// User data stream endpoints (`USER_STREAM`, API key only).
pub mod stream {
    pub const LISTEN_KEY: &str = "dapi/v1/listenKey";
}

/// Signed trade and account endpoints.
pub mod private {
    pub const POSITION_MODE: &str = "dapi/v1/positionSide/dual";
    pub const ORDER: &str = "dapi/v1/order";
    pub const BATCH_ORDERS: &str = "dapi/v1/batchOrders";
    pub const ALL_OPEN_ORDERS: &str = "dapi/v1/allOpenOrders";
    pub const COUNTDOWN_CANCEL_ALL: &str = "dapi/v1/countdownCancelAll";
    pub const OPEN_ORDER: &str = "dapi/v1/openOrder";
    pub const OPEN_ORDERS: &str = "dapi/v1/openOrders";
    pub const ALL_ORDERS: &str = "dapi/v1/allOrders";
    pub const POSITION_RISK: &str = "dapi/v1/positionRisk";
    pub const USER_TRADES: &str = "dapi/v1/userTrades";
    pub const BALANCE: &str = "dapi/v2/balance";
    pub const ACCOUNT: &str = "dapi/v2/account";
    pub const LEVERAGE: &str = "dapi/v1/leverage";
    pub const MARGIN_TYPE: &str = "dapi/v1/marginType";
    pub const POSITION_MARGIN: &str = "dapi/v1/positionMargin";
    pub const POSITION_MARGIN_HISTORY: &str = "dapi/v1/positionMargin/history";
    pub const INCOME: &str = "dapi/v1/income";
    pub const LEVERAGE_BRACKET: &str = "dapi/v1/leverageBracket";
    pub const ADL_QUANTILE: &str = "dapi/v1/adlQuantile";
    pub const FORCE_ORDERS: &str = "dapi/v1/forceOrders";
    pub const API_TRADING_STATUS: &str = "dapi/v1/apiTradingStatus";
    pub const COMMISSION_RATE: &str = "dapi/v1/commissionRate";
}
