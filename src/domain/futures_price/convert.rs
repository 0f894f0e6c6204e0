//! Conversions from raw API records to futures price records.

use super::FuturesPrice;
use crate::domain::{normalize, RecordKind};
use crate::error::SdkError;
use crate::shared::normalize::{NormalizedRecord, RawRecord};
use serde_json::Value;

impl FuturesPrice {
    /// Build from a raw API record (camelCase keys, reserved price names).
    pub fn from_raw(raw: RawRecord) -> Result<Self, SdkError> {
        Self::from_normalized(normalize(raw, RecordKind::FuturesPrice))
    }

    /// Build from an already-normalized record.
    pub fn from_normalized(normalized: NormalizedRecord) -> Result<Self, SdkError> {
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::test_support::{install_sample_registry, registry_guard};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn sample_raw() -> RawRecord {
        let Value::Object(map) = json!({
            "close": 645.25,
            "dayCode": 5,
            "dollarVolume": 0.0,
            "flag": "s",
            "highPrice": 652.0,
            "lastPrice": 648.5,
            "lowPrice": 640.75,
            "mode": "I",
            "name": "Soybean Meal",
            "netChange": 3.25,
            "numTrades": 1840,
            "openPrice": 642.0,
            "percentChange": 0.5,
            "previousVolume": 20500,
            "serverTimestamp": "2022-12-16T15:30:00+00:00",
            "symbol": "ZMZ22",
            "tradeTimestamp": "2022-12-16T15:29:58+00:00",
            "unitCode": -1,
            "volume": 18200
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn maps_every_documented_attribute() {
        let price = FuturesPrice::from_raw(sample_raw()).unwrap();

        assert_eq!(price.close, Some(645.25));
        assert_eq!(price.day_code, Some(5));
        assert_eq!(price.dollar_volume, Some(0.0));
        assert_eq!(price.flag.as_deref(), Some("s"));
        assert_eq!(price.high_price, Some(652.0));
        assert_eq!(price.last_price, Some(648.5));
        assert_eq!(price.low_price, Some(640.75));
        assert_eq!(price.mode.as_deref(), Some("I"));
        assert_eq!(price.name.as_deref(), Some("Soybean Meal"));
        assert_eq!(price.net_change, Some(3.25));
        assert_eq!(price.num_trades, Some(1840));
        assert_eq!(price.open_price, Some(642.0));
        assert_eq!(price.percent_change, Some(0.5));
        assert_eq!(price.previous_volume, Some(20500));
        assert_eq!(
            price.server_timestamp,
            Utc.with_ymd_and_hms(2022, 12, 16, 15, 30, 0).single()
        );
        assert_eq!(price.symbol.as_deref(), Some("ZMZ22"));
        assert_eq!(
            price.trade_timestamp,
            Utc.with_ymd_and_hms(2022, 12, 16, 15, 29, 58).single()
        );
        assert_eq!(price.unit_code, Some(-1));
        assert_eq!(price.volume, Some(18200));
        assert!(price.extra.is_empty());
    }

    #[test]
    fn reserved_raw_keys_land_on_price_fields() {
        // getQuote can also surface bare `open`/`high`/`low`/`last` keys.
        let Value::Object(raw) = json!({
            "symbol": "ZCZ22",
            "open": 410.0,
            "high": 415.5,
            "low": 405.0,
            "last": 100
        }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();

        assert_eq!(price.open_price, Some(410.0));
        assert_eq!(price.high_price, Some(415.5));
        assert_eq!(price.low_price, Some(405.0));
        assert_eq!(price.last_price, Some(100.0));
    }

    #[test]
    fn adjusted_last_price_uses_the_symbol_key() {
        let _lock = registry_guard();
        install_sample_registry();

        let Value::Object(raw) = json!({ "lastPrice": 100, "symbol": "ZCZ22" }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();
        // Symbol ZCZ22 → key ZC → DivideBy100Price.
        assert_eq!(price.adjusted_last_price().unwrap(), Some(1.0));
    }

    #[test]
    fn adjusted_last_price_falls_back_to_the_default_strategy() {
        let _lock = registry_guard();
        install_sample_registry();

        let Value::Object(raw) = json!({ "lastPrice": 100, "symbol": "ZMZ22" }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();
        assert_eq!(price.adjusted_last_price().unwrap(), Some(100.0));
    }

    #[test]
    fn adjusted_net_change_follows_the_same_resolution() {
        let _lock = registry_guard();
        install_sample_registry();

        let Value::Object(raw) = json!({ "netChange": 25, "symbol": "ZCZ22" }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();
        assert_eq!(price.adjusted_net_change().unwrap(), Some(0.25));
    }

    #[test]
    fn adjustment_is_recomputed_on_every_call() {
        let _lock = registry_guard();
        install_sample_registry();

        let Value::Object(raw) = json!({ "lastPrice": 100, "symbol": "ZMZ22" }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();
        assert_eq!(price.adjusted_last_price().unwrap(), Some(100.0));

        // Swapping the registry changes the next call on the same record.
        crate::pricing::install(
            crate::pricing::PriceConversionRegistry::from_names(
                [("ZM", "DivideBy100Price")],
                "OriginalPrice",
            )
            .unwrap(),
        );
        assert_eq!(price.adjusted_last_price().unwrap(), Some(1.0));
    }

    #[test]
    fn adjustment_without_configuration_is_a_config_error() {
        let _lock = registry_guard();
        crate::pricing::test_support::uninstall();

        let Value::Object(raw) = json!({ "lastPrice": 100, "symbol": "ZCZ22" }) else {
            unreachable!()
        };
        let price = FuturesPrice::from_raw(raw).unwrap();
        assert!(price.adjusted_last_price().is_err());
    }
}
