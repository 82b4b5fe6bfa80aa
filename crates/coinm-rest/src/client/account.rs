//! Account, position and user-data stream endpoints.

use coinm_core::types::{
    AccountTrade, AccountTradeParams, AdlQuantile, CodeMsg, CommissionRate, FuturesAccountBalance,
    FuturesAccountInformation, GetForceOrdersParams, GetIncomeHistoryParams, GetPositionMarginChangeHistoryParams,
    IncomeHistory, ListenKey, OneOrMany, OptionalSymbolParam, OrderResult, PositionMarginChange, PositionMode,
    PositionRisk, SetIsolatedMarginParams, SetIsolatedMarginResult, SetLeverageParams, SetLeverageResult,
    SetMarginTypeParams, SetPositionModeParams, SymbolLeverageBrackets, SymbolOrPair, SymbolParam,
};
use serde_json::Value;

use super::CoinMClient;
use crate::endpoints::{private, stream};
use crate::error::RestError;
use crate::transport::{Method, Security, SignedTransport};

impl<T: SignedTransport> CoinMClient<T> {
    // -----------------------------------------------------------------------
    // User data stream
    // -----------------------------------------------------------------------

    /// Create (or return the active) listen key for the user data stream.
    pub async fn get_futures_user_data_listen_key(&self) -> Result<ListenKey, RestError> {
        self.request(Method::Post, stream::LISTEN_KEY, Security::ApiKey, &()).await
    }

    /// Extend the listen key validity by 60 minutes.
    pub async fn keep_alive_futures_user_data_listen_key(&self) -> Result<(), RestError> {
        self.request::<Value, _>(Method::Put, stream::LISTEN_KEY, Security::ApiKey, &()).await?;
        Ok(())
    }

    pub async fn close_futures_user_data_listen_key(&self) -> Result<(), RestError> {
        self.request::<Value, _>(Method::Delete, stream::LISTEN_KEY, Security::ApiKey, &()).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Position mode & positions
    // -----------------------------------------------------------------------

    /// Switch between one-way and hedge mode for every symbol.
    pub async fn set_position_mode(&self, params: &SetPositionModeParams) -> Result<CodeMsg, RestError> {
        self.post_private(private::POSITION_MODE, params).await
    }

    pub async fn get_current_position_mode(&self) -> Result<PositionMode, RestError> {
        self.get_private(private::POSITION_MODE, &()).await
    }

    pub async fn get_positions(&self) -> Result<Vec<PositionRisk>, RestError> {
        self.get_private(private::POSITION_RISK, &()).await
    }

    pub async fn get_account_trades(&self, params: &AccountTradeParams) -> Result<Vec<AccountTrade>, RestError> {
        self.get_private(private::USER_TRADES, params).await
    }

    // -----------------------------------------------------------------------
    // Balance & account
    // -----------------------------------------------------------------------

    pub async fn get_balance(&self) -> Result<Vec<FuturesAccountBalance>, RestError> {
        self.get_private(private::BALANCE, &()).await
    }

    pub async fn get_account_information(&self) -> Result<FuturesAccountInformation, RestError> {
        self.get_private(private::ACCOUNT, &()).await
    }

    // -----------------------------------------------------------------------
    // Leverage & margin
    // -----------------------------------------------------------------------

    pub async fn set_leverage(&self, params: &SetLeverageParams) -> Result<SetLeverageResult, RestError> {
        self.post_private(private::LEVERAGE, params).await
    }

    pub async fn set_margin_type(&self, params: &SetMarginTypeParams) -> Result<CodeMsg, RestError> {
        self.post_private(private::MARGIN_TYPE, params).await
    }

    pub async fn set_isolated_position_margin(
        &self,
        params: &SetIsolatedMarginParams,
    ) -> Result<SetIsolatedMarginResult, RestError> {
        self.post_private(private::POSITION_MARGIN, params).await
    }

    pub async fn get_position_margin_change_history(
        &self,
        params: &GetPositionMarginChangeHistoryParams,
    ) -> Result<Vec<PositionMarginChange>, RestError> {
        self.get_private(private::POSITION_MARGIN_HISTORY, params).await
    }

    /// Brackets come back as one object or an array depending on the
    /// filter; the shape is passed through.
    pub async fn get_notional_and_leverage_brackets(
        &self,
        params: &SymbolOrPair,
    ) -> Result<OneOrMany<SymbolLeverageBrackets>, RestError> {
        self.get_private(private::LEVERAGE_BRACKET, params).await
    }

    // -----------------------------------------------------------------------
    // History & risk
    // -----------------------------------------------------------------------

    pub async fn get_income_history(&self, params: &GetIncomeHistoryParams) -> Result<Vec<IncomeHistory>, RestError> {
        self.get_private(private::INCOME, params).await
    }

    pub async fn get_adl_quantile_estimation(
        &self,
        params: &OptionalSymbolParam,
    ) -> Result<Vec<AdlQuantile>, RestError> {
        self.get_private(private::ADL_QUANTILE, params).await
    }

    /// Liquidation and ADL orders of this account.
    pub async fn get_force_orders(&self, params: &GetForceOrdersParams) -> Result<Vec<OrderResult>, RestError> {
        self.get_private(private::FORCE_ORDERS, params).await
    }

    /// Trading quantitative rule indicators. Shape varies, returned untyped.
    pub async fn get_api_quantitative_rules_indicators(
        &self,
        params: &OptionalSymbolParam,
    ) -> Result<Value, RestError> {
        self.get_private(private::API_TRADING_STATUS, params).await
    }

    pub async fn get_account_commission_rate(&self, params: &SymbolParam) -> Result<CommissionRate, RestError> {
        self.get_private(private::COMMISSION_RATE, params).await
    }
}
