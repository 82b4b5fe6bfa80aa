//! Account, position and user-data params and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::{IncomeType, MarginChangeDirection, MarginType, OrderSide, PositionSide};

// ---------------------------------------------------------------------------
// User data stream
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKey {
    pub listen_key: String,
}

// ---------------------------------------------------------------------------
// Positions & trades
// ---------------------------------------------------------------------------

/// `GET dapi/v1/positionRisk` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    pub symbol: String,
    pub position_amt: String,
    pub entry_price: String,
    pub mark_price: String,
    #[serde(rename = "unRealizedProfit")]
    pub unrealized_profit: String,
    pub liquidation_price: String,
    pub leverage: String,
    #[serde(default)]
    pub max_qty: Option<String>,
    /// `"cross"` or `"isolated"`.
    pub margin_type: MarginType,
    pub isolated_margin: String,
    /// `"true"` / `"false"` as a string.
    pub is_auto_add_margin: String,
    pub position_side: PositionSide,
    #[serde(default)]
    pub notional_value: Option<String>,
    #[serde(default)]
    pub isolated_wallet: Option<String>,
    #[serde(default)]
    pub update_time: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTradeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `GET dapi/v1/userTrades` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrade {
    pub symbol: String,
    pub id: u64,
    pub order_id: u64,
    pub pair: String,
    pub side: OrderSide,
    pub price: String,
    pub qty: String,
    pub realized_pnl: String,
    pub margin_asset: String,
    pub base_qty: String,
    pub commission: String,
    pub commission_asset: String,
    pub time: u64,
    pub position_side: PositionSide,
    pub buyer: bool,
    pub maker: bool,
}

// ---------------------------------------------------------------------------
// Balance & account information
// ---------------------------------------------------------------------------

/// `GET dapi/v2/balance` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAccountBalance {
    pub account_alias: String,
    pub asset: String,
    pub balance: String,
    pub withdraw_available: String,
    pub cross_wallet_balance: String,
    pub cross_un_pnl: String,
    pub available_balance: String,
    pub update_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    pub asset: String,
    pub wallet_balance: String,
    pub unrealized_profit: String,
    pub margin_balance: String,
    pub maint_margin: String,
    pub initial_margin: String,
    pub position_initial_margin: String,
    pub open_order_initial_margin: String,
    pub max_withdraw_amount: String,
    pub cross_wallet_balance: String,
    pub cross_un_pnl: String,
    pub available_balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPosition {
    pub symbol: String,
    pub initial_margin: String,
    pub maint_margin: String,
    pub unrealized_profit: String,
    pub position_initial_margin: String,
    pub open_order_initial_margin: String,
    pub leverage: String,
    pub isolated: bool,
    pub position_side: PositionSide,
    pub entry_price: String,
    #[serde(default)]
    pub max_qty: Option<String>,
    #[serde(default)]
    pub update_time: Option<u64>,
}

/// `GET dapi/v2/account` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAccountInformation {
    pub assets: Vec<AccountAsset>,
    pub positions: Vec<AccountPosition>,
    pub can_deposit: bool,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub fee_tier: u32,
    pub update_time: u64,
}

// ---------------------------------------------------------------------------
// Leverage & margin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeverageParams {
    pub symbol: String,
    /// 1 to 125.
    pub leverage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeverageResult {
    pub leverage: u32,
    pub max_qty: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMarginTypeParams {
    pub symbol: String,
    pub margin_type: MarginType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIsolatedMarginParams {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_side: Option<PositionSide>,
    pub amount: String,
    #[serde(rename = "type")]
    pub direction: MarginChangeDirection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetIsolatedMarginResult {
    pub amount: f64,
    pub code: i64,
    pub msg: String,
    #[serde(rename = "type")]
    pub direction: MarginChangeDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPositionMarginChangeHistoryParams {
    pub symbol: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub direction: Option<MarginChangeDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMarginChange {
    pub amount: String,
    pub asset: String,
    pub symbol: String,
    pub time: u64,
    #[serde(rename = "type")]
    pub direction: MarginChangeDirection,
    pub position_side: PositionSide,
}

/// One tier of a leverage bracket table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageBracket {
    pub bracket: u32,
    pub initial_leverage: u32,
    pub qty_cap: f64,
    /// Spelled `qtylFloor` by the exchange.
    #[serde(alias = "qtylFloor")]
    pub qty_floor: f64,
    pub maint_margin_ratio: f64,
    #[serde(default)]
    pub cum: Option<f64>,
}

/// Brackets for one pair (or symbol, depending on the API version).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolLeverageBrackets {
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    pub brackets: Vec<LeverageBracket>,
}

/// `GET dapi/v1/adlQuantile` entry. Keys are `LONG`, `SHORT`, `BOTH` or
/// `HEDGE`, values 0-4.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdlQuantile {
    pub symbol: String,
    pub adl_quantile: HashMap<String, u8>,
}

// ---------------------------------------------------------------------------
// Income, force orders, commission
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIncomeHistoryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_type: Option<IncomeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeHistory {
    pub symbol: String,
    pub income_type: IncomeType,
    pub income: String,
    pub asset: String,
    pub info: String,
    pub time: u64,
    pub tran_id: serde_json::Value,
    pub trade_id: String,
}

/// Close type filter for force orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoCloseType {
    Liquidation,
    Adl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetForceOrdersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_type: Option<AutoCloseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `GET dapi/v1/commissionRate` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRate {
    pub symbol: String,
    pub maker_commission_rate: String,
    pub taker_commission_rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_risk_decodes_lowercase_margin_type() {
        let raw = r#"{"symbol":"BTCUSD_201225","positionAmt":"0","entryPrice":"0.0",
            "markPrice":"0.00000000","unRealizedProfit":"0.00000000","liquidationPrice":"0",
            "leverage":"125","maxQty":"50","marginType":"cross","isolatedMargin":"0.00000000",
            "isAutoAddMargin":"false","positionSide":"BOTH","notionalValue":"0",
            "isolatedWallet":"0","updateTime":0}"#;
        let p: PositionRisk = serde_json::from_str(raw).unwrap();
        assert_eq!(p.margin_type, MarginType::Crossed);
        assert_eq!(p.position_side, PositionSide::Both);
    }

    #[test]
    fn leverage_bracket_accepts_exchange_spelling() {
        let raw = r#"{"pair":"BTCUSD","brackets":[{"bracket":1,"initialLeverage":125,
            "qtyCap":50,"qtylFloor":0,"maintMarginRatio":0.004}]}"#;
        let b: SymbolLeverageBrackets = serde_json::from_str(raw).unwrap();
        assert_eq!(b.brackets[0].initial_leverage, 125);
        assert_eq!(b.brackets[0].qty_floor, 0.0);
    }

    #[test]
    fn isolated_margin_params_use_numeric_type() {
        let p = SetIsolatedMarginParams {
            symbol: "BTCUSD_PERP".into(),
            position_side: None,
            amount: "0.01".into(),
            direction: MarginChangeDirection::Add,
        };
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["type"], serde_json::json!(1));
    }
}
