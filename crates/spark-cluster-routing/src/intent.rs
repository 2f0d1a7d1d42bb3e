//! 路由意图：一条命令应当被发往哪里。
//!
//! # 设计蓝图（Why）
//! - 路由策略是封闭集合：三种广播形态、两种槽位形态、一种直连地址形态；
//!   以和类型表达后，编码器与任何消费者都必须穷尽匹配，不存在“未知变体落入默认路由”的路径；
//! - 所有参数在构造时完成校验，持有 [`RouteIntent`] 即代表参数合法，下游不再重复检查。
//!
//! # 契约说明（What）
//! - 构造函数均为纯函数，失败时返回 [`RouteError`]，不会产出半成品；
//! - 实例不可变、无共享可变状态，可在任意线程间自由复制与传递。

use core::fmt;

use crate::address::AddressSpec;
use crate::error::{Result, RouteError};
use crate::slot::{SlotId, SlotSelector};

/// 路由意图。
///
/// | 变体 | 参数 | 不变式 |
/// |---|---|---|
/// | `AllNodes` / `AllPrimaries` / `Random` | 无 | — |
/// | `SlotId` | 角色 + 槽位编号 | 编号在 `[0, 16383]` |
/// | `SlotKey` | 角色 + 键 | 键非空，本层不做哈希 |
/// | `ByAddress` | 地址 | 地址已通过 [`AddressSpec`] 校验 |
///
/// 带参变体的字段都是已校验类型，只能经由校验路径得到。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteIntent {
    AllNodes,
    AllPrimaries,
    Random,
    SlotId(SlotSelector, SlotId),
    SlotKey(SlotSelector, SlotKey),
    ByAddress(AddressSpec),
}

/// 已校验的非空槽位键。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(RouteError::EmptyKey);
        }
        Ok(SlotKey(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RouteIntent {
    pub const ALL_NODES: RouteIntent = RouteIntent::AllNodes;
    pub const ALL_PRIMARIES: RouteIntent = RouteIntent::AllPrimaries;
    pub const RANDOM: RouteIntent = RouteIntent::Random;

    /// 广播到集群全部节点。
    pub fn all_nodes() -> Self {
        RouteIntent::AllNodes
    }

    /// 广播到全部主节点。
    pub fn all_primaries() -> Self {
        RouteIntent::AllPrimaries
    }

    /// 交由派发引擎随机挑选一个节点。
    pub fn random() -> Self {
        RouteIntent::Random
    }

    /// 按槽位编号路由。
    ///
    /// # 契约说明
    /// - **参数**：`selector` 选择主/副本；`slot_id` 为任意整数，便于直接透传调用方输入；
    /// - **错误**：编号不在 `[0, 16383]` 时返回 [`RouteError::InvalidSlotId`]。
    pub fn slot_id_route(selector: SlotSelector, slot_id: i64) -> Result<Self> {
        let slot_id = SlotId::new(slot_id).map_err(|err| err.traced("intent.slot_id_route"))?;
        Ok(RouteIntent::SlotId(selector, slot_id))
    }

    /// 按键路由，键的哈希由派发引擎完成。
    ///
    /// 空键返回 [`RouteError::EmptyKey`]。
    pub fn slot_key_route(selector: SlotSelector, key: impl Into<String>) -> Result<Self> {
        let key = SlotKey::new(key).map_err(|err| err.traced("intent.slot_key_route"))?;
        Ok(RouteIntent::SlotKey(selector, key))
    }

    /// 直连一个已校验的地址，永远成功。
    pub fn by_address_route(address: AddressSpec) -> Self {
        RouteIntent::ByAddress(address)
    }

    /// 从 `host:port` 组合串构造直连路由，解析错误原样透传。
    pub fn by_address_route_from_str(combined: &str) -> Result<Self> {
        AddressSpec::parse(combined).map(RouteIntent::ByAddress)
    }

    /// 是否为广播类路由（全部节点、全部主节点、随机节点）。
    pub fn is_broadcast(&self) -> bool {
        matches!(
            self,
            RouteIntent::AllNodes | RouteIntent::AllPrimaries | RouteIntent::Random
        )
    }

    /// 供日志使用的稳定类别名。
    pub fn kind(&self) -> &'static str {
        match self {
            RouteIntent::AllNodes => "all_nodes",
            RouteIntent::AllPrimaries => "all_primaries",
            RouteIntent::Random => "random",
            RouteIntent::SlotId(..) => "slot_id",
            RouteIntent::SlotKey(..) => "slot_key",
            RouteIntent::ByAddress(_) => "by_address",
        }
    }
}

impl From<AddressSpec> for RouteIntent {
    fn from(address: AddressSpec) -> Self {
        RouteIntent::by_address_route(address)
    }
}

impl fmt::Display for RouteIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteIntent::AllNodes => f.write_str("all-nodes"),
            RouteIntent::AllPrimaries => f.write_str("all-primaries"),
            RouteIntent::Random => f.write_str("random"),
            RouteIntent::SlotId(selector, id) => write!(f, "{selector}@slot:{id}"),
            RouteIntent::SlotKey(selector, key) => write!(f, "{selector}@key:{}", key.as_str()),
            RouteIntent::ByAddress(address) => write!(f, "address:{address}"),
        }
    }
}
