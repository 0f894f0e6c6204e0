//! Integration tests for the Barchart OnDemand client.
//!
//! The offline sections exercise the public surface end to end: outcome
//! classification, results extraction, record construction, and adjusted
//! price resolution through the process-wide registry.
//!
//! The live sections hit the real API and are `#[ignore]` because they need
//! network access and credentials. Run with:
//! ```bash
//! BARCHART_API_KEY=xxx cargo test --test api_integration -- --ignored
//! ```

use barchart::prelude::*;
use serde_json::json;

fn outcome(status: u16, body: &str) -> HttpOutcome {
    HttpOutcome {
        status,
        body: body.to_string(),
        parsed: serde_json::from_str(body).ok(),
    }
}

// ─── Classification ──────────────────────────────────────────────────────────

mod classification {
    use super::*;

    #[test]
    fn bad_request_carries_the_body_and_parsed_context() {
        let body = r#"{"error": "Input: exchange, root, contract or symbols is required."}"#;
        let err = classify(&outcome(400, body)).unwrap_err();

        match err {
            HttpError::BadRequest { message, response } => {
                assert_eq!(message, body);
                assert_eq!(
                    response.unwrap()["error"],
                    json!("Input: exchange, root, contract or symbols is required.")
                );
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn unauthorized_carries_the_body() {
        let err = classify(&outcome(401, "API key is missing or not valid.")).unwrap_err();
        assert!(
            matches!(err, HttpError::Unauthorized(body) if body == "API key is missing or not valid.")
        );

        let err = classify(&outcome(403, "Forbidden")).unwrap_err();
        assert!(matches!(err, HttpError::Unauthorized(_)));
    }

    #[test]
    fn success_passes_through_to_results_extraction() {
        let body = json!({
            "status": { "code": 200, "message": "Success." },
            "results": [{ "symbol": "ZCZ22", "last": 100 }]
        })
        .to_string();
        let outcome = outcome(200, &body);

        classify(&outcome).unwrap();
        let records = extract_results(outcome).unwrap();
        assert_eq!(records.len(), 1);
    }
}

// ─── End-to-end record pipeline ──────────────────────────────────────────────

mod record_pipeline {
    use super::*;

    #[test]
    fn raw_quote_results_become_typed_records_with_adjusted_prices() {
        barchart::configure(
            Config::new()
                .price_conversion("ZC", "DivideBy100Price")
                .default_price_conversion("OriginalPrice"),
        )
        .unwrap();

        let body = json!({
            "status": { "code": 200, "message": "Success." },
            "results": [
                { "symbol": "ZCZ22", "lastPrice": 100, "netChange": 25 },
                { "symbol": "ZMZ22", "lastPrice": 100, "netChange": 25 }
            ]
        })
        .to_string();

        let records: Vec<FuturesPrice> = extract_results(outcome(200, &body))
            .unwrap()
            .into_iter()
            .map(|raw| FuturesPrice::from_raw(raw).unwrap())
            .collect();

        // ZC is mapped to DivideBy100Price, ZM falls back to the default.
        assert_eq!(records[0].adjusted_last_price().unwrap(), Some(1.0));
        assert_eq!(records[0].adjusted_net_change().unwrap(), Some(0.25));
        assert_eq!(records[1].adjusted_last_price().unwrap(), Some(100.0));
        assert_eq!(records[1].adjusted_net_change().unwrap(), Some(25.0));
    }

    #[test]
    fn build_record_dispatches_on_kind() {
        let serde_json::Value::Object(raw) = json!({
            "contract": "ZCK20",
            "last": 412.75,
            "type": "Call"
        }) else {
            unreachable!()
        };

        let normalized = barchart::domain::normalize(raw, RecordKind::FuturesOption);
        let record = barchart::domain::build_record(normalized, RecordKind::FuturesOption).unwrap();

        match record {
            Record::FuturesOption(option) => {
                assert_eq!(option.contract.as_deref(), Some("ZCK20"));
                assert_eq!(option.last_price, Some(412.75));
                assert_eq!(option.options_type(), OptionsType::American);
            }
            other => panic!("expected a futures option, got {other:?}"),
        }
    }
}

// ─── Live API ────────────────────────────────────────────────────────────────

mod live {
    use super::*;

    fn live_client() -> BarchartClient {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("BARCHART_API_KEY").expect("BARCHART_API_KEY is set");
        BarchartClient::builder()
            .api_key(&api_key)
            .build()
            .expect("client builds")
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_corn_quotes() {
        let client = live_client();
        let quotes = client
            .futures_prices()
            .fetch(&FuturesPricesQuery::new().symbols("ZCZ26"))
            .await
            .expect("getQuote succeeds");

        assert!(!quotes.is_empty());
        assert!(quotes[0].symbol.is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_futures_options_by_root() {
        let client = live_client();
        let options = client
            .futures_options()
            .fetch(&FuturesOptionsQuery::new().root("ZC"))
            .await
            .expect("getFuturesOptions succeeds");

        assert!(options.iter().all(|o| o.contract.is_some()));
    }

    #[tokio::test]
    #[ignore]
    async fn bad_credentials_fail_as_unauthorized() {
        let client = BarchartClient::builder().api_key("").build().unwrap();
        let err = client
            .futures_options()
            .fetch(&FuturesOptionsQuery::new().root("ZC"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Http(HttpError::Unauthorized(_) | HttpError::BadRequest { .. })
        ));
    }
}
