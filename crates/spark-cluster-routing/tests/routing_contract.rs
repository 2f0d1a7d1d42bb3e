//! `routing_contract` 集成测试：以派发引擎的视角验证路由意图的构造、校验与编码契约。
//!
//! # 测试目标（Why）
//! - 只经由 crate 公开 API 调用，模拟客户端在发送命令前的真实路径；
//! - 每个用例对应一条可观察的契约：广播标记、槽位编号、槽位键、直连地址以及各类输入错误。

use spark_cluster_routing::{
    AddressRecord, AddressSpec, DEFAULT_HOST, DEFAULT_PORT, RouteEncoder, RouteError, RouteIntent,
    SimpleRoute, SlotRouteRecord, SlotSelector, SlotTarget, SlotType, WireRoute,
};

#[test]
fn simple_node_route_encodes_to_all_nodes_marker() {
    let first = RouteEncoder::encode(&RouteIntent::all_nodes());
    let second = RouteEncoder::encode(&RouteIntent::ALL_NODES);
    assert_eq!(first, WireRoute::Simple(SimpleRoute::AllNodes));
    assert_eq!(first, second);
}

#[test]
fn slot_id_route_encodes_selector_and_id() {
    let intent = RouteIntent::slot_id_route(SlotSelector::Primary, 100).expect("槽位 100 合法");
    assert_eq!(
        RouteEncoder::encode(&intent),
        WireRoute::Slot(SlotRouteRecord {
            slot_type: SlotType::Primary,
            target: SlotTarget::SlotId(100),
        })
    );
}

#[test]
fn slot_id_route_rejects_both_ends_of_range() {
    for slot_id in [-1, 16384] {
        assert_eq!(
            RouteIntent::slot_id_route(SlotSelector::Primary, slot_id),
            Err(RouteError::InvalidSlotId { slot_id })
        );
    }
}

#[test]
fn slot_key_route_encodes_key_verbatim() {
    let intent = RouteIntent::slot_key_route(SlotSelector::Primary, "Slot1").expect("非空键");
    assert_eq!(
        RouteEncoder::encode(&intent),
        WireRoute::Slot(SlotRouteRecord {
            slot_type: SlotType::Primary,
            target: SlotTarget::SlotKey("Slot1".to_owned()),
        })
    );
    assert_eq!(
        RouteIntent::slot_key_route(SlotSelector::Primary, ""),
        Err(RouteError::EmptyKey)
    );
}

#[test]
fn by_address_route_from_parts() {
    let address = AddressSpec::from_parts(DEFAULT_HOST, i64::from(DEFAULT_PORT)).expect("默认地址");
    assert_eq!(
        RouteEncoder::encode(&RouteIntent::by_address_route(address)),
        WireRoute::Address(AddressRecord {
            host: DEFAULT_HOST.to_owned(),
            port: i32::from(DEFAULT_PORT),
        })
    );
}

#[test]
fn by_address_route_from_combined_string() {
    let intent = RouteIntent::by_address_route_from_str(&format!("{DEFAULT_HOST}:{DEFAULT_PORT}"))
        .expect("组合串合法");
    assert_eq!(
        RouteEncoder::encode(&intent),
        WireRoute::Address(AddressRecord {
            host: DEFAULT_HOST.to_owned(),
            port: i32::from(DEFAULT_PORT),
        })
    );
}

#[test]
fn by_address_route_rejects_multiple_ports() {
    let combined = format!("{DEFAULT_HOST}:{DEFAULT_PORT}:{}", DEFAULT_PORT + 1);
    assert!(matches!(
        RouteIntent::by_address_route_from_str(&combined),
        Err(RouteError::InvalidAddressFormat { .. })
    ));
}

#[test]
fn by_address_route_rejects_missing_port() {
    assert!(matches!(
        RouteIntent::by_address_route_from_str(DEFAULT_HOST),
        Err(RouteError::InvalidAddressFormat { .. })
    ));
}

#[test]
fn loopback_scenario_end_to_end() {
    let address: AddressSpec = "127.0.0.1:6379".parse().expect("回环地址");
    assert_eq!(address.host(), "127.0.0.1");
    assert_eq!(address.port(), 6379);
    assert_eq!(
        RouteEncoder::encode(&address.into()),
        WireRoute::Address(AddressRecord {
            host: "127.0.0.1".to_owned(),
            port: 6379,
        })
    );
}

#[test]
fn concurrent_construction_and_encoding_agree() {
    let handles: Vec<_> = (0..8i64)
        .map(|worker| {
            std::thread::spawn(move || {
                (0..256i64)
                    .map(|offset| {
                        let slot = (worker * 256 + offset) % 16384;
                        let intent = RouteIntent::slot_id_route(SlotSelector::Replica, slot)
                            .expect("槽位在范围内");
                        RouteEncoder::encode(&intent)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let encoded = handle.join().expect("工作线程未 panic");
        let first = i32::try_from(worker * 256).expect("小整数");
        assert_eq!(
            encoded[0],
            WireRoute::Slot(SlotRouteRecord {
                slot_type: SlotType::Replica,
                target: SlotTarget::SlotId(first),
            })
        );
    }
}
