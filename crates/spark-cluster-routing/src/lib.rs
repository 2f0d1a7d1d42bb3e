//! # spark-cluster-routing
//!
//! ## 定位与职责（Why）
//! - 为集群键值存储客户端的每条命令确定“发往哪里”：单个节点、一类节点（全部主节点、全部节点、随机节点）、
//!   某个槽位的所属节点，或一个显式网络地址；
//! - 在请求进入网络之前完成全部领域校验：槽位范围、节点角色、`host:port` 语法、路由策略互斥；
//! - 将选定的意图转换为派发引擎消费的规范线格式。
//!
//! ## 架构嵌入（Where）
//! - [`address`]：`host:port` 解析与校验；
//! - [`slot`]：槽位编号与主/副本角色；
//! - [`intent`]：封闭的路由意图集合及其校验构造函数；
//! - [`wire`] / [`encoder`]：线格式 Schema 与意图到线格式的无损映射；
//! - [`dispatch`]：与外部派发引擎之间的窄接口；
//! - [`config`]：调用方持有的默认地址；
//! - [`error`]：统一错误域。
//!
//! ## 边界（Trade-offs）
//! - 本层不计算键的哈希槽、不跟踪槽位归属、不处理 MOVED/ASK 重定向，也不重试；
//! - 所有类型都是不可变值对象，无全局状态，可在任意线程中并发构造与编码。
//!
//! ```
//! use spark_cluster_routing::{RouteEncoder, RouteIntent, wire::{AddressRecord, WireRoute}};
//!
//! let intent = RouteIntent::by_address_route_from_str("127.0.0.1:6379")?;
//! assert_eq!(
//!     RouteEncoder::encode(&intent),
//!     WireRoute::Address(AddressRecord { host: "127.0.0.1".to_owned(), port: 6379 }),
//! );
//! # Ok::<(), spark_cluster_routing::RouteError>(())
//! ```

pub mod address;
pub mod config;
pub mod dispatch;
pub mod encoder;
pub mod error;
pub mod intent;
pub mod slot;
pub mod wire;

pub use address::AddressSpec;
pub use config::{DEFAULT_HOST, DEFAULT_PORT, RouteDefaults};
pub use dispatch::{DispatchEngine, RoutedRequest, send_routed};
pub use encoder::{IntoWireRoute, RouteEncoder};
pub use error::{Result, RouteError};
pub use intent::{RouteIntent, SlotKey};
pub use slot::{MAX_SLOT_ID, SLOT_COUNT, SlotId, SlotSelector};
pub use wire::{AddressRecord, SimpleRoute, SlotRouteRecord, SlotTarget, SlotType, WireRoute};
