#![no_main]

use libfuzzer_sys::fuzz_target;

use rbx_gateway::{codec, CrossLedgerMessage, WIRE_VERSION};
use rbx_types::{AccountAddress, ChainId, Rate};

// Fuzz the framed message codec with arbitrary payloads.
fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    let _ = codec::decode(data);

    // A message built from input-derived fields must roundtrip exactly.
    if data.len() >= 32 {
        let word = |i: usize| {
            u64::from_le_bytes([
                data[i],
                data[i + 1],
                data[i + 2],
                data[i + 3],
                data[i + 4],
                data[i + 5],
                data[i + 6],
                data[i + 7],
            ])
        };
        let message = CrossLedgerMessage {
            version: WIRE_VERSION,
            origin_chain: ChainId::new(word(0)),
            destination_chain: ChainId::new(word(8)),
            nonce: word(16),
            amount: word(24) as u128,
            origin_rate: Rate::new(word(24) as u128),
            destination_account: AccountAddress::new("rbx_fuzz"),
        };
        if let Ok(encoded) = codec::encode(&message) {
            let decoded = codec::decode(&encoded).expect("roundtrip must succeed");
            assert_eq!(decoded, message);
        }
    }
});
