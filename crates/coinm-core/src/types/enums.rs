//! Enumerations used in COIN-M request params and responses.
//!
//! The exchange spells every variant in SCREAMING_SNAKE_CASE on the wire;
//! each enum carries the matching serde rename so params serialize straight
//! into the query string and responses deserialize without adapters.
//!
//! Enums that appear in responses carry a catch-all variant so a value added
//! by the exchange does not fail the whole response. The catch-all refuses to
//! serialize where the enum is also a request param.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Order enums
// ---------------------------------------------------------------------------

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Position side. `Both` is the one-way mode side; `Long`/`Short` apply in
/// hedge mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionSide {
    Both,
    Long,
    Short,
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    Stop,
    StopMarket,
    TakeProfit,
    TakeProfitMarket,
    TrailingStopMarket,
    Liquidation,
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Time in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    #[serde(rename = "GTC")]
    Gtc,
    #[serde(rename = "IOC")]
    Ioc,
    #[serde(rename = "FOK")]
    Fok,
    #[serde(rename = "GTX")]
    Gtx,
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Price used to trigger stop orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingType {
    MarkPrice,
    ContractPrice,
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Order status as reported by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Rejected,
    Expired,
    NewInsurance,
    NewAdl,
    ExpiredInMatch,
    #[serde(other)]
    Unknown,
}

/// Response detail requested on order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewOrderRespType {
    Ack,
    Result,
}

// ---------------------------------------------------------------------------
// Account enums
// ---------------------------------------------------------------------------

/// Margin mode of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginType {
    #[serde(alias = "isolated")]
    Isolated,
    #[serde(alias = "cross")]
    Crossed,
}

/// Direction of an isolated margin adjustment. Sent as the integer `1`
/// (add) or `2` (reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginChangeDirection {
    Add,
    Reduce,
}

impl MarginChangeDirection {
    fn code(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Reduce => 2,
        }
    }
}

impl Serialize for MarginChangeDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for MarginChangeDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(Self::Add),
            2 => Ok(Self::Reduce),
            other => Err(serde::de::Error::custom(format!("unknown margin change type {other}"))),
        }
    }
}

/// Income record category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeType {
    Transfer,
    WelcomeBonus,
    FundingFee,
    RealizedPnl,
    Commission,
    InsuranceClear,
    DeliveredSettelment,
    #[serde(other, skip_serializing)]
    Other,
}

// ---------------------------------------------------------------------------
// Market data enums
// ---------------------------------------------------------------------------

/// Kline / candlestick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spellings() {
        assert_eq!(serde_json::to_string(&OrderType::TakeProfitMarket).unwrap(), "\"TAKE_PROFIT_MARKET\"");
        assert_eq!(serde_json::to_string(&TimeInForce::Gtx).unwrap(), "\"GTX\"");
        assert_eq!(serde_json::to_string(&KlineInterval::OneMonth).unwrap(), "\"1M\"");
        assert_eq!(serde_json::to_string(&PositionSide::Both).unwrap(), "\"BOTH\"");
    }

    #[test]
    fn margin_type_accepts_lowercase_responses() {
        let t: MarginType = serde_json::from_str("\"cross\"").unwrap();
        assert_eq!(t, MarginType::Crossed);
        let t: MarginType = serde_json::from_str("\"ISOLATED\"").unwrap();
        assert_eq!(t, MarginType::Isolated);
    }

    #[test]
    fn margin_change_direction_is_numeric() {
        assert_eq!(serde_json::to_string(&MarginChangeDirection::Reduce).unwrap(), "2");
        let d: MarginChangeDirection = serde_json::from_str("1").unwrap();
        assert_eq!(d, MarginChangeDirection::Add);
        assert!(serde_json::from_str::<MarginChangeDirection>("3").is_err());
    }

    #[test]
    fn unknown_income_type_falls_back() {
        let t: IncomeType = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(t, IncomeType::Other);
        assert!(serde_json::to_string(&IncomeType::Other).is_err());
    }

    #[test]
    fn unknown_order_values_fall_back() {
        let s: OrderStatus = serde_json::from_str("\"SOME_FUTURE_STATUS\"").unwrap();
        assert_eq!(s, OrderStatus::Unknown);
        let s: OrderStatus = serde_json::from_str("\"EXPIRED_IN_MATCH\"").unwrap();
        assert_eq!(s, OrderStatus::ExpiredInMatch);
        let t: OrderType = serde_json::from_str("\"SOME_FUTURE_TYPE\"").unwrap();
        assert_eq!(t, OrderType::Unknown);
        let tif: TimeInForce = serde_json::from_str("\"GTD\"").unwrap();
        assert_eq!(tif, TimeInForce::Unknown);
        let w: WorkingType = serde_json::from_str("\"INDEX_PRICE\"").unwrap();
        assert_eq!(w, WorkingType::Unknown);
    }

    #[test]
    fn request_side_catch_alls_do_not_serialize() {
        assert!(serde_json::to_string(&OrderType::Unknown).is_err());
        assert!(serde_json::to_string(&TimeInForce::Unknown).is_err());
        assert!(serde_json::to_string(&WorkingType::Unknown).is_err());
    }
}
