//! 路由意图的线格式表示，是与下游派发引擎共享的 Schema。
//!
//! # 契约说明（What）
//! - [`WireRoute`] 是交给派发引擎的唯一载荷，五种形态互斥；
//! - 枚举的数值取值由共享 Schema 固定：`SimpleRoute` 为 AllNodes=0 / AllPrimaries=1 / Random=2，
//!   `SlotType` 为 Primary=0 / Replica=1；
//! - 两个枚举在序列化形式中直接以上述数值出现，反序列化遇到 Schema 之外的数值时报
//!   [`RouteError::UnknownWireValue`]；
//! - `slot_id` 与 `port` 以 `i32` 承载，对齐派发引擎的 32 位有符号字段。
//!
//! # 风险提示（Trade-offs）
//! - 本模块只描述结构，不做校验；从外部收到的 `WireRoute` 须经
//!   [`crate::encoder::RouteEncoder::decode`] 才能还原为可信的路由意图。

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// 广播类路由标记。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum SimpleRoute {
    AllNodes,
    AllPrimaries,
    Random,
}

impl SimpleRoute {
    pub fn as_i32(self) -> i32 {
        match self {
            SimpleRoute::AllNodes => 0,
            SimpleRoute::AllPrimaries => 1,
            SimpleRoute::Random => 2,
        }
    }
}

impl TryFrom<i32> for SimpleRoute {
    type Error = RouteError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(SimpleRoute::AllNodes),
            1 => Ok(SimpleRoute::AllPrimaries),
            2 => Ok(SimpleRoute::Random),
            _ => Err(RouteError::UnknownWireValue {
                field: "simple_route",
                value,
            }),
        }
    }
}

impl From<SimpleRoute> for i32 {
    fn from(route: SimpleRoute) -> i32 {
        route.as_i32()
    }
}

impl fmt::Display for SimpleRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimpleRoute::AllNodes => "AllNodes",
            SimpleRoute::AllPrimaries => "AllPrimaries",
            SimpleRoute::Random => "Random",
        })
    }
}

/// 槽位路由的目标角色在线格式中的取值。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum SlotType {
    Primary,
    Replica,
}

impl SlotType {
    pub fn as_i32(self) -> i32 {
        match self {
            SlotType::Primary => 0,
            SlotType::Replica => 1,
        }
    }
}

impl TryFrom<i32> for SlotType {
    type Error = RouteError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(SlotType::Primary),
            1 => Ok(SlotType::Replica),
            _ => Err(RouteError::UnknownWireValue {
                field: "slot_type",
                value,
            }),
        }
    }
}

impl From<SlotType> for i32 {
    fn from(slot_type: SlotType) -> i32 {
        slot_type.as_i32()
    }
}

/// 槽位路由的定位方式：直接给出编号，或给出由派发引擎负责哈希的键。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotTarget {
    SlotId(i32),
    SlotKey(String),
}

/// 按槽位路由的结构化记录。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRouteRecord {
    pub slot_type: SlotType,
    pub target: SlotTarget,
}

/// 按地址路由的结构化记录。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRecord {
    pub host: String,
    pub port: i32,
}

/// 交给派发引擎的路由载荷。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireRoute {
    Simple(SimpleRoute),
    Slot(SlotRouteRecord),
    Address(AddressRecord),
}

impl WireRoute {
    /// 供日志使用的稳定类别名，与 [`crate::intent::RouteIntent::kind`] 一一对应，不含键或主机等载荷。
    pub fn kind(&self) -> &'static str {
        match self {
            WireRoute::Simple(SimpleRoute::AllNodes) => "all_nodes",
            WireRoute::Simple(SimpleRoute::AllPrimaries) => "all_primaries",
            WireRoute::Simple(SimpleRoute::Random) => "random",
            WireRoute::Slot(SlotRouteRecord {
                target: SlotTarget::SlotId(_),
                ..
            }) => "slot_id",
            WireRoute::Slot(SlotRouteRecord {
                target: SlotTarget::SlotKey(_),
                ..
            }) => "slot_key",
            WireRoute::Address(_) => "by_address",
        }
    }

    pub const ALL_NODES: WireRoute = WireRoute::Simple(SimpleRoute::AllNodes);
    pub const ALL_PRIMARIES: WireRoute = WireRoute::Simple(SimpleRoute::AllPrimaries);
    pub const RANDOM: WireRoute = WireRoute::Simple(SimpleRoute::Random);
}
