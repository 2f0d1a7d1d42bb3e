//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 路由层的全部校验失败都在构造阶段抛出，调用方据此决定修正输入重试还是直接放弃请求；
//! - 编码器只接收已校验的意图，因此本模块中除 [`RouteError::UnknownWireValue`] 外的错误都不会在编码路径出现。
//!
//! ## 设计要求（What）
//! - 所有错误派生 `thiserror::Error`，可直接接入 `std::error::Error` 生态；
//! - 每个变体提供稳定错误码（`route.<域>.<语义>`），便于日志聚合与告警；
//! - 错误均为局部、不可重试、对进程无害，绝不以另一种路由策略兜底。

use thiserror::Error;

/// 路由层统一返回类型。
pub type Result<T, E = RouteError> = core::result::Result<T, E>;

/// 路由意图构造与线格式映射过程中的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：将地址解析、槽位校验、键校验的失败集中到一个枚举，调用方只需匹配一次即可完成诊断；
/// - **契约 (What)**：
///   - 变体携带原始输入，方便在日志中还原现场；
///   - 派生 `Clone`/`PartialEq`，测试可直接断言具体错误；
/// - **风险 (Trade-offs)**：输入以 `String` 保存，错误路径多一次分配，换取排障时的可读性。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// `host:port` 组合串缺少端口分隔符、出现多个端口段，或主机部分为空。
    #[error("address `{input}` is not in `host:port` form")]
    InvalidAddressFormat { input: String },

    /// 端口段不是十进制整数，或超出 `[0, 65535]`。
    #[error("port `{input}` is not an integer in [0, 65535]")]
    InvalidPort { input: String },

    /// 槽位编号超出 `[0, 16383]`。
    #[error("slot id {slot_id} is outside [0, 16383]")]
    InvalidSlotId { slot_id: i64 },

    /// 按键路由时传入了空字符串。
    #[error("slot key must not be empty")]
    EmptyKey,

    /// 角色名称既不是 `primary` 也不是 `replica`。
    #[error("slot selector `{input}` is neither `primary` nor `replica`")]
    UnknownSlotSelector { input: String },

    /// 线格式中的枚举取值不在共享 Schema 之内，仅在反向映射时出现。
    #[error("wire field `{field}` carries unknown value {value}")]
    UnknownWireValue { field: &'static str, value: i32 },
}

impl RouteError {
    /// 返回稳定错误码，供日志字段 `error.code` 与指标标签使用。
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::InvalidAddressFormat { .. } => "route.address.format",
            RouteError::InvalidPort { .. } => "route.address.port",
            RouteError::InvalidSlotId { .. } => "route.slot.id",
            RouteError::EmptyKey => "route.slot.empty_key",
            RouteError::UnknownSlotSelector { .. } => "route.slot.selector",
            RouteError::UnknownWireValue { .. } => "route.wire.unknown_value",
        }
    }

    /// 记录一次被拒绝的构造并原样返回错误。
    ///
    /// 构造失败属于调用方输入问题，统一落在 `debug` 级别，避免在高频路径上刷屏。
    pub(crate) fn traced(self, operation: &'static str) -> Self {
        tracing::debug!(
            error.code = self.code(),
            operation,
            error = %self,
            "rejected route construction"
        );
        self
    }

    pub(crate) fn invalid_address(input: &str) -> Self {
        RouteError::InvalidAddressFormat {
            input: input.to_owned(),
        }
    }

    pub(crate) fn invalid_port(input: impl ToString) -> Self {
        RouteError::InvalidPort {
            input: input.to_string(),
        }
    }
}
