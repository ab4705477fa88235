//! Message codec — framing and serialization for cross-ledger payloads.
//!
//! Messages travel as length-prefixed JSON: a 4-byte big-endian length
//! followed by the JSON body. Anything that fails to decode is an
//! `InvalidMessage` and never reaches the ledger.

use crate::error::GatewayError;
use crate::message::CrossLedgerMessage;

/// Maximum encoded message size in bytes.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Encode a message for transmission (length-prefixed JSON).
pub fn encode(message: &CrossLedgerMessage) -> Result<Vec<u8>, GatewayError> {
    let body = serde_json::to_vec(message)
        .map_err(|e| GatewayError::InvalidMessage(format!("encode failed: {e}")))?;
    if body.len() > MAX_MESSAGE_SIZE {
        return Err(GatewayError::InvalidMessage(format!(
            "message too large: {} bytes",
            body.len()
        )));
    }
    let mut framed = Vec::with_capacity(4 + body.len());
    framed.extend_from_slice(&(body.len() as u32).to_be_bytes());
    framed.extend_from_slice(&body);
    Ok(framed)
}

/// Decode a framed message from raw bytes.
pub fn decode(data: &[u8]) -> Result<CrossLedgerMessage, GatewayError> {
    if data.len() < 4 {
        return Err(GatewayError::InvalidMessage(
            "truncated frame: missing length prefix".into(),
        ));
    }
    let len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(GatewayError::InvalidMessage(format!(
            "declared length {len} exceeds maximum"
        )));
    }
    let body = data
        .get(4..4 + len)
        .ok_or_else(|| GatewayError::InvalidMessage("truncated frame: short body".into()))?;
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::InvalidMessage(format!("malformed body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::WIRE_VERSION;
    use rbx_types::{AccountAddress, ChainId, Rate};

    fn sample() -> CrossLedgerMessage {
        CrossLedgerMessage {
            version: WIRE_VERSION,
            origin_chain: ChainId::new(1),
            destination_chain: ChainId::new(2),
            nonce: 7,
            amount: 100_000,
            origin_rate: Rate::new(50_000_000_000),
            destination_account: AccountAddress::new("rbx_alice"),
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let msg = sample();
        let framed = encode(&msg).unwrap();
        assert_eq!(decode(&framed).unwrap(), msg);
    }

    #[test]
    fn truncated_prefix_is_rejected() {
        assert!(matches!(
            decode(&[0, 0]),
            Err(GatewayError::InvalidMessage(_))
        ));
    }

    #[test]
    fn short_body_is_rejected() {
        let mut framed = encode(&sample()).unwrap();
        framed.truncate(framed.len() - 1);
        assert!(matches!(
            decode(&framed),
            Err(GatewayError::InvalidMessage(_))
        ));
    }

    #[test]
    fn oversized_declared_length_is_rejected() {
        let mut framed = vec![0xFF, 0xFF, 0xFF, 0xFF];
        framed.extend_from_slice(b"{}");
        assert!(matches!(
            decode(&framed),
            Err(GatewayError::InvalidMessage(_))
        ));
    }

    #[test]
    fn garbage_body_is_rejected() {
        let body = b"not json at all";
        let mut framed = (body.len() as u32).to_be_bytes().to_vec();
        framed.extend_from_slice(body);
        assert!(matches!(
            decode(&framed),
            Err(GatewayError::InvalidMessage(_))
        ));
    }
}
