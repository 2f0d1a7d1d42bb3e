//! 调用方持有的默认地址配置。
//!
//! # 设计背景（Why）
//! - 路由层本身没有进程级状态，默认主机与端口属于调用方配置；
//!   本模块只提供常量与一个可从 TOML 片段加载的载体，便于测试夹具与示例共享同一份默认值。
//!
//! # 契约说明（What）
//! - 缺省字段回落到 [`DEFAULT_HOST`] / [`DEFAULT_PORT`]；
//! - 加载阶段只做类型检查，主机与端口的业务校验在 [`RouteDefaults::address`] 中完成。

use serde::Deserialize;

use crate::address::AddressSpec;
use crate::error::Result;
use crate::intent::RouteIntent;

/// 测试与示例使用的默认主机。
pub const DEFAULT_HOST: &str = "localhost";

/// 测试与示例使用的默认端口。
pub const DEFAULT_PORT: u16 = 6379;

/// 默认直连地址配置。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteDefaults {
    pub host: String,
    pub port: i64,
}

impl Default for RouteDefaults {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: i64::from(DEFAULT_PORT),
        }
    }
}

impl RouteDefaults {
    /// 从 TOML 片段加载，例如：
    ///
    /// ```toml
    /// host = "10.0.0.8"
    /// port = 7000
    /// ```
    pub fn from_toml_str(source: &str) -> core::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// 校验并生成地址。
    pub fn address(&self) -> Result<AddressSpec> {
        AddressSpec::from_parts(self.host.as_str(), self.port)
    }

    /// 生成指向默认地址的直连路由。
    pub fn route(&self) -> Result<RouteIntent> {
        self.address().map(RouteIntent::by_address_route)
    }
}
