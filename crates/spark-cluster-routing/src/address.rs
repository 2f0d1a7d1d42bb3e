//! 网络地址解析与校验。
//!
//! # 设计动机（Why）
//! - 所有字符串切分都收敛在本模块，路由层其余部分只接触已校验的 [`AddressSpec`]，不会再看到原始 `host:port` 文本；
//! - 与 `Endpoint` 的物理地址概念对齐：主机名 + 必填端口，不做 DNS 解析。
//!
//! # 契约说明（What）
//! - 组合串必须恰好包含一个 `:`，左侧为非空主机，右侧为十进制端口；
//! - 端口取值范围 `[0, 65535]`，正负号、空白、十六进制均被拒绝；
//! - 含多个 `:` 的输入（包括未加括号的 IPv6 字面量）一律视为格式错误。

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// 已校验的 `host:port` 地址。
///
/// # 前置/后置条件
/// - **前置**：只能经由 [`AddressSpec::parse`] 或 [`AddressSpec::from_parts`] 构造；
/// - **后置**：`host` 非空且不含 `:`，`port` 在 `u16` 范围内，实例构造后不可变。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AddressSpec {
    host: String,
    port: u16,
}

impl AddressSpec {
    /// 解析形如 `host:port` 的组合串。
    ///
    /// # 逻辑解析（How）
    /// 1. 以 `:` 切分，要求恰好得到主机与端口两段，且主机非空，否则返回 [`RouteError::InvalidAddressFormat`]；
    /// 2. 端口段须全部由 ASCII 数字组成且不超过 65535，否则返回 [`RouteError::InvalidPort`]。
    ///
    /// # 边界注意
    /// - `"127.0.0.1:6379:6380"` 属于多端口段，按格式错误处理，而非端口错误；
    /// - `"host:"` 的端口段为空，按端口错误处理。
    pub fn parse(combined: &str) -> Result<Self> {
        let mut segments = combined.split(':');
        let (host, port) = match (segments.next(), segments.next(), segments.next()) {
            (Some(host), Some(port), None) if !host.is_empty() => (host, port),
            _ => return Err(RouteError::invalid_address(combined).traced("address.parse")),
        };
        let port = parse_port(port).map_err(|err| err.traced("address.parse"))?;
        Ok(Self {
            host: host.to_owned(),
            port,
        })
    }

    /// 由主机与端口直接构造，不做字符串切分。
    ///
    /// - 主机不做 DNS 或语法校验，但不得为空，也不得含 `:`（[`RouteError::InvalidAddressFormat`]），
    ///   保证 `Display` 输出总能经 `FromStr` 解析回同一地址；
    /// - 端口须落在 `[0, 65535]`，否则返回 [`RouteError::InvalidPort`]。
    pub fn from_parts(host: impl Into<String>, port: i64) -> Result<Self> {
        let host = host.into();
        if host.is_empty() || host.contains(':') {
            return Err(RouteError::invalid_address(&host).traced("address.from_parts"));
        }
        let port = u16::try_from(port)
            .map_err(|_| RouteError::invalid_port(port).traced("address.from_parts"))?;
        Ok(Self { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn parse_port(segment: &str) -> Result<u16> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(RouteError::invalid_port(segment));
    }
    segment
        .parse::<u16>()
        .map_err(|_| RouteError::invalid_port(segment))
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for AddressSpec {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// 反序列化同样走校验路径，配置文件中的非法地址不会绕过不变式。
impl<'de> Deserialize<'de> for AddressSpec {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            host: String,
            port: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        AddressSpec::from_parts(raw.host, raw.port).map_err(serde::de::Error::custom)
    }
}
