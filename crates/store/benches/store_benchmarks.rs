use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;
use std::thread;

use materials_inventory::{InventoryItem, InventoryItemId, NewInventoryItem};
use materials_parties::{NewVendor, Vendor, VendorId};
use materials_products::ProductId;
use materials_store::{InMemoryStore, Store};

fn new_vendor(n: usize) -> NewVendor {
    NewVendor {
        id: VendorId::new(format!("v{n}")).unwrap(),
        name: format!("Vendor {n}"),
        email: "orders@vendor.test".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Depot Way".to_string(),
    }
}

fn seeded_store(vendors: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    for n in 0..vendors {
        store.create::<Vendor>(new_vendor(n)).unwrap();
    }
    store
        .create::<InventoryItem>(NewInventoryItem {
            id: InventoryItemId::new("i1").unwrap(),
            product_id: ProductId::new("p1").unwrap(),
            quantity: 0,
            location: "Bay 1".to_string(),
        })
        .unwrap();
    store
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_vendor");
    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let store = InMemoryStore::new();
                for n in 0..size {
                    store.create::<Vendor>(black_box(new_vendor(n))).unwrap();
                }
                store
            });
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_vendors");
    for size in [100usize, 1_000, 10_000] {
        let store = seeded_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.list::<Vendor>()));
        });
    }
    group.finish();
}

/// Readers on one kind contending with quantity writes on another (single coarse lock).
fn bench_mixed_contention(c: &mut Criterion) {
    let store = Arc::new(seeded_store(1_000));
    let item = InventoryItemId::new("i1").unwrap();

    c.bench_function("mixed_read_write_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let store = store.clone();
                    let item = item.clone();
                    thread::spawn(move || {
                        for n in 0..100 {
                            if t == 0 {
                                store.update_quantity(&item, n).unwrap();
                            } else {
                                black_box(store.get::<Vendor>(&VendorId::new(format!("v{n}")).unwrap()).ok());
                            }
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_create, bench_list, bench_mixed_contention);
criterion_main!(benches);
