//! Public market data endpoints.

use coinm_core::types::{
    AggTrade, AggTradesParams, ExchangeInfo, FundingRate, FundingRateParams, HistoricalTradesParams, Kline,
    KlinesParams, MarkPrice, OneOrMany, OpenInterest, OrderBook, OrderBookParams, PriceTicker, RecentTradesParams,
    ServerTime, SymbolOrPair, SymbolOrderBookTicker, SymbolParam, Ticker24h, Trade,
};
use serde_json::Value;

use super::CoinMClient;
use crate::endpoints::market;
use crate::error::RestError;
use crate::transport::{Method, Security, SignedTransport};

impl<T: SignedTransport> CoinMClient<T> {
    /// Test connectivity.
    pub async fn ping(&self) -> Result<(), RestError> {
        self.get::<Value, _>(market::PING, &()).await?;
        Ok(())
    }

    /// Exchange clock in milliseconds.
    pub async fn get_server_time(&self) -> Result<u64, RestError> {
        let time: ServerTime = self.get(market::SERVER_TIME, &()).await?;
        Ok(time.server_time)
    }

    pub async fn get_exchange_info(&self) -> Result<ExchangeInfo, RestError> {
        self.get(market::EXCHANGE_INFO, &()).await
    }

    pub async fn get_order_book(&self, params: &OrderBookParams) -> Result<OrderBook, RestError> {
        self.get(market::DEPTH, params).await
    }

    pub async fn get_recent_trades(&self, params: &RecentTradesParams) -> Result<Vec<Trade>, RestError> {
        self.get(market::TRADES, params).await
    }

    /// Older trades. Needs an API key, no signature.
    pub async fn get_historical_trades(&self, params: &HistoricalTradesParams) -> Result<Vec<Trade>, RestError> {
        self.request(Method::Get, market::HISTORICAL_TRADES, Security::ApiKey, params).await
    }

    pub async fn get_aggregate_trades(&self, params: &AggTradesParams) -> Result<Vec<AggTrade>, RestError> {
        self.get(market::AGG_TRADES, params).await
    }

    /// Mark price, index price and funding for one symbol, a pair, or all.
    pub async fn get_mark_price(&self, params: &SymbolOrPair) -> Result<Vec<MarkPrice>, RestError> {
        self.get(market::PREMIUM_INDEX, params).await
    }

    pub async fn get_funding_rate_history(&self, params: &FundingRateParams) -> Result<Vec<FundingRate>, RestError> {
        self.get(market::FUNDING_RATE, params).await
    }

    pub async fn get_klines(&self, params: &KlinesParams) -> Result<Vec<Kline>, RestError> {
        self.get(market::KLINES, params).await
    }

    pub async fn get_24hr_ticker(&self, params: &SymbolOrPair) -> Result<Vec<Ticker24h>, RestError> {
        self.get(market::TICKER_24HR, params).await
    }

    pub async fn get_symbol_price_ticker(&self, params: &SymbolOrPair) -> Result<Vec<PriceTicker>, RestError> {
        self.get(market::TICKER_PRICE, params).await
    }

    /// Best bid/ask. Always a vector, even when the exchange answers a
    /// single-symbol query with a bare object.
    pub async fn get_symbol_order_book_ticker(
        &self,
        params: &SymbolOrPair,
    ) -> Result<Vec<SymbolOrderBookTicker>, RestError> {
        let tickers: OneOrMany<SymbolOrderBookTicker> = self.get(market::TICKER_BOOK, params).await?;
        Ok(tickers.into_vec())
    }

    pub async fn get_open_interest(&self, params: &SymbolParam) -> Result<OpenInterest, RestError> {
        self.get(market::OPEN_INTEREST, params).await
    }
}
