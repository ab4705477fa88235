use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rbx_ledger::AccrualLedger;
use rbx_types::{AccountAddress, Rate, Timestamp};

const RATE_5E8: u128 = 50_000_000_000;

fn make_ledger(accounts: usize) -> (AccrualLedger, AccountAddress) {
    let admin = AccountAddress::new("rbx_admin");
    let custody = AccountAddress::new("rbx_custody");
    let mut ledger = AccrualLedger::new(admin.clone());
    ledger
        .grant_mint_and_burn(&admin, &custody)
        .expect("admin grants custody");
    for i in 0..accounts {
        let holder = AccountAddress::new(format!("rbx_holder_{i}"));
        ledger
            .mint(
                &custody,
                &holder,
                1_000_000_000 + i as u128,
                Rate::new(RATE_5E8),
                Timestamp::new(0),
            )
            .expect("seed mint");
    }
    (ledger, custody)
}

fn bench_balance_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance_projection");
    let (ledger, _) = make_ledger(1);
    let holder = AccountAddress::new("rbx_holder_0");

    for elapsed_secs in [1u64, 3_600, 86_400, 31_536_000] {
        let now = Timestamp::new(elapsed_secs);
        group.bench_with_input(
            BenchmarkId::new("balance_of", elapsed_secs),
            &elapsed_secs,
            |b, _| {
                b.iter(|| black_box(ledger.balance_of(black_box(&holder), black_box(now))));
            },
        );
    }

    group.finish();
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");
    let from = AccountAddress::new("rbx_holder_0");
    let to = AccountAddress::new("rbx_holder_1");

    group.bench_function("transfer_between_accrued_accounts", |b| {
        b.iter_batched(
            || make_ledger(2).0,
            |mut ledger| {
                ledger
                    .transfer(
                        black_box(&from),
                        black_box(&from),
                        black_box(&to),
                        black_box(1_000),
                        black_box(Timestamp::new(86_400)),
                    )
                    .expect("transfer succeeds");
                ledger
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_mint_into_active_account(c: &mut Criterion) {
    let mut group = c.benchmark_group("mint");
    let holder = AccountAddress::new("rbx_holder_0");

    group.bench_function("mint_materializes_pending_interest", |b| {
        b.iter_batched(
            || make_ledger(1),
            |(mut ledger, custody)| {
                ledger
                    .mint(
                        black_box(&custody),
                        black_box(&holder),
                        black_box(500),
                        Rate::new(RATE_5E8),
                        black_box(Timestamp::new(86_400)),
                    )
                    .expect("mint succeeds");
                ledger
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_balance_projection,
    bench_transfer,
    bench_mint_into_active_account
);
criterion_main!(benches);
