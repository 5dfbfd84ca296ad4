//! Pool state hydration.

use crate::decode::OnChainNumber;
use crate::error::ProtocolError;
use crate::resilient::resilient;
use crate::{ObjectReader, content_fields};
use serde_json::{Map, Value};
use std::sync::Arc;
use tormentor_domain::value_objects::scale_raw;
use tormentor_domain::{Pool, PoolState};
use tracing::{debug, warn};

/// Enriches pool descriptors with their live on-chain state.
pub struct PoolStateHydrator<R: ?Sized> {
    reader: Option<Arc<R>>,
}

impl<R: ObjectReader + ?Sized> PoolStateHydrator<R> {
    pub fn new(reader: Option<Arc<R>>) -> Self {
        Self { reader }
    }

    /// Fetches each pool object in turn and attaches its [`PoolState`].
    ///
    /// The output has the same length and order as `pools`. A pool that
    /// cannot be read is returned as given.
    pub async fn hydrate(&self, pools: Vec<Pool>) -> Vec<Pool> {
        let Some(reader) = &self.reader else {
            return pools;
        };

        let mut hydrated = Vec::with_capacity(pools.len());
        for pool in pools {
            let pool_id = pool.pool_id.clone();
            let metadata_only = pool.clone();
            let result = resilient(
                hydrate_one(reader.as_ref(), pool),
                move || metadata_only,
                |e: &ProtocolError| {
                    warn!(
                        pool_id = %pool_id,
                        error = %e,
                        "Failed to fetch pool, keeping metadata only"
                    )
                },
            )
            .await;
            hydrated.push(result);
        }

        debug!(
            total = hydrated.len(),
            live = hydrated.iter().filter(|p| p.is_hydrated()).count(),
            "Pool hydration complete"
        );
        hydrated
    }
}

async fn hydrate_one<R: ObjectReader + ?Sized>(reader: &R, pool: Pool) -> Result<Pool, ProtocolError> {
    let object = reader.get_object(&pool.pool_id).await?;
    let fields = content_fields(&object)
        .ok_or_else(|| ProtocolError::MissingContent(pool.pool_id.clone()))?;
    let state = read_pool_state(&pool, fields)?;
    Ok(pool.with_state(state))
}

/// Extracts reserves, fees and LP supply from a pool object's fields.
///
/// # Errors
/// Returns an error if a reserve cannot be scaled to the coin's decimals.
pub fn read_pool_state(pool: &Pool, fields: &Map<String, Value>) -> Result<PoolState, ProtocolError> {
    let raw = |name: &str| {
        let number = OnChainNumber::decode(fields.get(name));
        if !number.is_recognized() {
            warn!(
                pool_id = %pool.pool_id,
                field = name,
                "Unrecognized numeric field shape, reading as zero"
            );
        }
        number.value()
    };

    if pool.token_a.is_synthesized() || pool.token_b.is_synthesized() {
        debug!(
            pool_id = %pool.pool_id,
            "Pool uses unlisted coins, reserves scaled with assumed decimals"
        );
    }

    let decimals_a = pool.token_a.decimals;
    let decimals_b = pool.token_b.decimals;

    Ok(PoolState {
        reserve_a: scale_raw(raw("reserve_a"), decimals_a)?,
        reserve_b: scale_raw(raw("reserve_b"), decimals_b)?,
        fee_reserve_a: scale_raw(raw("fee_reserve_a"), decimals_a)?,
        fee_reserve_b: scale_raw(raw("fee_reserve_b"), decimals_b)?,
        protocol_reserve_a: scale_raw(raw("protocol_reserve_a"), decimals_a)?,
        protocol_reserve_b: scale_raw(raw("protocol_reserve_b"), decimals_b)?,
        lp_supply: raw("lp_supply"),
        fee_recipient: fields
            .get("fee_recipient")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockObjectReader;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tormentor_domain::Coin;

    fn pool(id: &str) -> Pool {
        Pool::new(
            id,
            Coin::new("0x1::a::A", "A", "a.png", 6),
            Coin::new("0x1::b::B", "B", "b.png", 0),
        )
    }

    fn pool_object() -> Value {
        json!({
            "data": { "content": { "fields": {
                "reserve_a": "1500000",
                "reserve_b": 250,
                "fee_reserve_a": { "value": "3000" },
                "fee_reserve_b": { "fields": { "value": 7 } },
                "protocol_reserve_a": "1000",
                "protocol_reserve_b": null,
                "lp_supply": "612",
                "fee_recipient": "0xfee"
            } } }
        })
    }

    #[tokio::test]
    async fn test_hydrate_scales_reserves() {
        let mock = MockObjectReader::new().with_object("0xp1", pool_object());
        let hydrator = PoolStateHydrator::new(Some(Arc::new(mock)));

        let pools = hydrator.hydrate(vec![pool("0xp1")]).await;
        let state = pools[0].state.as_ref().unwrap();

        assert_eq!(state.reserve_a, dec!(1.5));
        assert_eq!(state.reserve_b, dec!(250));
        assert_eq!(state.fee_reserve_a, dec!(0.003));
        assert_eq!(state.fee_reserve_b, dec!(7));
        assert_eq!(state.protocol_reserve_a, dec!(0.001));
        assert_eq!(state.protocol_reserve_b, dec!(0));
        assert_eq!(state.lp_supply, 612);
        assert_eq!(state.fee_recipient.as_deref(), Some("0xfee"));
    }

    #[tokio::test]
    async fn test_hydrate_keeps_order_and_length_on_partial_failure() {
        let mock = Arc::new(
            MockObjectReader::new()
                .with_object("0xp1", pool_object())
                .with_object("0xp3", json!({ "data": { "objectId": "0xp3" } }))
                .with_object("0xp4", pool_object()),
        );
        let hydrator = PoolStateHydrator::new(Some(mock.clone()));
        let input = vec![pool("0xp1"), pool("0xp2"), pool("0xp3"), pool("0xp4")];

        let output = hydrator.hydrate(input.clone()).await;

        let ids: Vec<&str> = output.iter().map(|p| p.pool_id.as_str()).collect();
        assert_eq!(ids, vec!["0xp1", "0xp2", "0xp3", "0xp4"]);
        assert!(output[0].is_hydrated());
        assert_eq!(output[1], input[1]);
        assert_eq!(output[2], input[2]);
        assert!(output[3].is_hydrated());
        assert_eq!(mock.calls(), vec!["0xp1", "0xp2", "0xp3", "0xp4"]);
    }

    #[tokio::test]
    async fn test_hydrate_without_client_is_identity() {
        let hydrator: PoolStateHydrator<MockObjectReader> = PoolStateHydrator::new(None);
        let input = vec![pool("0xp1")];
        assert_eq!(hydrator.hydrate(input.clone()).await, input);
    }

    #[test]
    fn test_read_pool_state_unsupported_decimals() {
        let mut p = pool("0xp1");
        p.token_a.decimals = 40;
        let object = pool_object();
        let fields = content_fields(&object).unwrap();
        assert!(matches!(
            read_pool_state(&p, fields),
            Err(ProtocolError::Domain(_))
        ));
    }
}
