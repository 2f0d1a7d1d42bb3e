//! 路由意图到线格式的转换。
//!
//! # 契约说明（What）
//! - [`RouteEncoder::encode`] 是六种意图上的全函数，不会失败：参数已在构造阶段校验；
//! - 映射是无损的结构变换，[`RouteEncoder::decode`] 可据此还原出等价意图；
//! - `decode` 面向不可信输入，会重新执行全部构造校验。

use crate::address::AddressSpec;
use crate::error::Result;
use crate::intent::RouteIntent;
use crate::slot::SlotSelector;
use crate::wire::{AddressRecord, SimpleRoute, SlotRouteRecord, SlotTarget, SlotType, WireRoute};

/// 无状态编码器，所有方法均为关联函数。
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteEncoder;

impl RouteEncoder {
    /// 将路由意图转换为派发引擎消费的 [`WireRoute`]。
    pub fn encode(intent: &RouteIntent) -> WireRoute {
        tracing::trace!(route.kind = intent.kind(), "encoding route intent");
        match intent {
            RouteIntent::AllNodes => WireRoute::Simple(SimpleRoute::AllNodes),
            RouteIntent::AllPrimaries => WireRoute::Simple(SimpleRoute::AllPrimaries),
            RouteIntent::Random => WireRoute::Simple(SimpleRoute::Random),
            RouteIntent::SlotId(selector, id) => WireRoute::Slot(SlotRouteRecord {
                slot_type: slot_type(*selector),
                target: SlotTarget::SlotId(i32::from(id.get())),
            }),
            RouteIntent::SlotKey(selector, key) => WireRoute::Slot(SlotRouteRecord {
                slot_type: slot_type(*selector),
                target: SlotTarget::SlotKey(key.as_str().to_owned()),
            }),
            RouteIntent::ByAddress(address) => WireRoute::Address(AddressRecord {
                host: address.host().to_owned(),
                port: i32::from(address.port()),
            }),
        }
    }

    /// 由线格式还原路由意图。
    ///
    /// # 逻辑解析（How）
    /// - 广播标记直接映射；
    /// - 槽位与地址记录分别交给对应构造函数，越界编号、空键、非法端口都会按构造期错误返回。
    pub fn decode(route: WireRoute) -> Result<RouteIntent> {
        match route {
            WireRoute::Simple(SimpleRoute::AllNodes) => Ok(RouteIntent::AllNodes),
            WireRoute::Simple(SimpleRoute::AllPrimaries) => Ok(RouteIntent::AllPrimaries),
            WireRoute::Simple(SimpleRoute::Random) => Ok(RouteIntent::Random),
            WireRoute::Slot(SlotRouteRecord { slot_type, target }) => {
                let selector = slot_selector(slot_type);
                match target {
                    SlotTarget::SlotId(id) => RouteIntent::slot_id_route(selector, i64::from(id)),
                    SlotTarget::SlotKey(key) => RouteIntent::slot_key_route(selector, key),
                }
            }
            WireRoute::Address(AddressRecord { host, port }) => {
                AddressSpec::from_parts(host, i64::from(port)).map(RouteIntent::ByAddress)
            }
        }
    }
}

fn slot_type(selector: SlotSelector) -> SlotType {
    match selector {
        SlotSelector::Primary => SlotType::Primary,
        SlotSelector::Replica => SlotType::Replica,
    }
}

fn slot_selector(slot_type: SlotType) -> SlotSelector {
    match slot_type {
        SlotType::Primary => SlotSelector::Primary,
        SlotType::Replica => SlotSelector::Replica,
    }
}

/// 可转换为 [`WireRoute`] 的类型，派发入口据此同时接受意图的所有权与引用。
pub trait IntoWireRoute {
    fn into_wire_route(self) -> WireRoute;
}

impl IntoWireRoute for RouteIntent {
    fn into_wire_route(self) -> WireRoute {
        RouteEncoder::encode(&self)
    }
}

impl IntoWireRoute for &RouteIntent {
    fn into_wire_route(self) -> WireRoute {
        RouteEncoder::encode(self)
    }
}

impl IntoWireRoute for WireRoute {
    fn into_wire_route(self) -> WireRoute {
        self
    }
}
