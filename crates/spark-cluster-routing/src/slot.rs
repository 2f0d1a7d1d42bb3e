//! 槽位编号与节点角色。
//!
//! # 设计动机（Why）
//! - 集群键空间固定划分为 [`SLOT_COUNT`] 个哈希槽，槽位路由只需要“哪个槽 + 主还是副本”两项信息；
//! - 编号校验收敛在 [`SlotId::new`]，持有 `SlotId` 即代表取值合法。
//!
//! # 契约说明（What）
//! - 本模块不计算键的哈希槽，也不跟踪槽位归属，这些由派发引擎负责。

use core::fmt;
use core::str::FromStr;

use crate::error::{Result, RouteError};

/// 集群键空间固定划分的哈希槽数量。
pub const SLOT_COUNT: u16 = 16384;

/// 合法槽位编号的上界（含）。
pub const MAX_SLOT_ID: u16 = SLOT_COUNT - 1;

/// 按槽位路由时选择的节点角色。
///
/// # 契约说明（What）
/// - `Primary`：槽位所属分片的主节点，承担写入；
/// - `Replica`：同一分片的副本节点，可承担读流量。
/// - 该枚举封闭，新增角色必须同步更新线格式 [`crate::wire::SlotType`]。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotSelector {
    Primary,
    Replica,
}

impl SlotSelector {
    /// 小写名称，与 `FromStr` 接受的形式一致。
    pub fn as_str(self) -> &'static str {
        match self {
            SlotSelector::Primary => "primary",
            SlotSelector::Replica => "replica",
        }
    }
}

impl fmt::Display for SlotSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotSelector {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("primary") {
            Ok(SlotSelector::Primary)
        } else if s.eq_ignore_ascii_case("replica") {
            Ok(SlotSelector::Replica)
        } else {
            Err(RouteError::UnknownSlotSelector { input: s.to_owned() })
        }
    }
}

/// 已校验的槽位编号，取值恒在 `[0, MAX_SLOT_ID]`。
///
/// 只能通过 [`SlotId::new`] 构造，持有即代表校验已完成。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u16);

impl SlotId {
    /// 校验并构造槽位编号。
    ///
    /// - **输入**：任意整数，负数与超过 [`MAX_SLOT_ID`] 的值都会被拒绝；
    /// - **错误**：[`RouteError::InvalidSlotId`]，携带原始取值。
    pub fn new(raw: i64) -> Result<Self> {
        match u16::try_from(raw) {
            Ok(id) if id <= MAX_SLOT_ID => Ok(SlotId(id)),
            _ => Err(RouteError::InvalidSlotId { slot_id: raw }),
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
