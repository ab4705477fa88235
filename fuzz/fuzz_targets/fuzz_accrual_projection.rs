#![no_main]

use libfuzzer_sys::fuzz_target;

use rbx_ledger::{Account, AccrualLedger, AMOUNT_MAX};
use rbx_types::{AccountAddress, Rate, Timestamp};

// Fuzz balance projection and the mutation paths with arbitrary principals,
// rates, and timestamps. None of it may panic; overflow must surface as an
// error, never as wraparound.
fuzz_target!(|data: &[u8]| {
    if data.len() < 48 {
        return;
    }

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

    let principal = ((word(0) as u128) << 64) | word(8) as u128;
    let rate = ((word(16) as u128) << 64) | word(24) as u128;
    let opened_at = word(32);
    let query_at = word(40);

    let mut account = Account::new(Rate::new(rate), Timestamp::new(opened_at));
    account.principal = principal;

    // These must never panic, regardless of magnitudes or time ordering.
    let _ = account.projected_balance_checked(Timestamp::new(query_at));
    let _ = account.materialize(Timestamp::new(query_at));

    // Drive the whole engine with the same inputs.
    let admin = AccountAddress::new("rbx_admin");
    let holder = AccountAddress::new("rbx_holder");
    let mut ledger = AccrualLedger::new(admin.clone());
    if ledger.grant_mint_and_burn(&admin, &admin).is_err() {
        return;
    }
    let _ = ledger.mint(
        &admin,
        &holder,
        principal,
        Rate::new(rate),
        Timestamp::new(opened_at),
    );
    let _ = ledger.balance_of(&holder, Timestamp::new(query_at));
    let _ = ledger.burn(&admin, &holder, AMOUNT_MAX, Timestamp::new(query_at));
});
