//! 路由意图构造与编码的吞吐基准。
//!
//! 关注两条热路径：每条命令都会经过的槽位键路由，以及需要字符串切分的直连地址路由。

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use spark_cluster_routing::{RouteEncoder, RouteIntent, SlotSelector};

fn bench_slot_key(c: &mut Criterion) {
    c.bench_function("slot_key_route/construct+encode", |b| {
        b.iter(|| {
            let intent = RouteIntent::slot_key_route(SlotSelector::Primary, black_box("user:1001"))
                .expect("非空键");
            black_box(RouteEncoder::encode(&intent))
        })
    });
}

fn bench_address(c: &mut Criterion) {
    c.bench_function("by_address_route/parse+encode", |b| {
        b.iter(|| {
            let intent = RouteIntent::by_address_route_from_str(black_box("10.0.0.8:7000"))
                .expect("合法地址");
            black_box(RouteEncoder::encode(&intent))
        })
    });
}

fn bench_broadcast(c: &mut Criterion) {
    c.bench_function("all_nodes/encode", |b| {
        b.iter(|| black_box(RouteEncoder::encode(black_box(&RouteIntent::ALL_NODES))))
    });
}

criterion_group!(benches, bench_slot_key, bench_address, bench_broadcast);
criterion_main!(benches);
