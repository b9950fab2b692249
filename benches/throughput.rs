use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use std::thread;
use std::time::Duration;
use stockroom::{Product, Shop};

const CUSTOMERS: usize = 64;
const PRODUCTS: usize = 16;
const ROUNDS: usize = 100;

fn seeded_shop() -> Shop {
    let shop = Shop::new();
    for p in 0..PRODUCTS {
        shop.add_product(Product::new(format!("product-{p}"), Decimal::new(999, 2), u32::MAX))
            .unwrap();
    }
    for c in 0..CUSTOMERS {
        shop.add_customer(&format!("Customer {c}"), &format!("c{c}@example.com"))
            .unwrap();
    }
    shop
}

/// Every customer reserves each product once per round, then checks out.
fn session(shop: &Shop, customer: usize) {
    let email = format!("c{customer}@example.com");
    for _ in 0..ROUNDS {
        for p in 0..PRODUCTS {
            shop.add_to_cart(&email, &format!("product-{p}"), 1).unwrap();
        }
        shop.checkout(&email).unwrap();
    }
}

fn reservations(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // One unit = one add_to_cart call
    group.throughput(Throughput::Elements((CUSTOMERS * PRODUCTS * ROUNDS) as u64));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(20);

    group.bench_function("sequential_64_customers", |b| {
        b.iter(|| {
            let shop = seeded_shop();
            for customer in 0..CUSTOMERS {
                session(&shop, customer);
            }
        });
    });

    group.bench_function("threaded_64_customers", |b| {
        b.iter(|| {
            let shop = seeded_shop();
            thread::scope(|s| {
                for customer in 0..CUSTOMERS {
                    let shop = shop.clone();
                    s.spawn(move || session(&shop, customer));
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, reservations);
criterion_main!(benches);
