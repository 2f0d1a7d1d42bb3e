//! 与外部派发引擎之间的窄接口。
//!
//! # 架构嵌入（Where）
//! - 派发引擎持有集群拓扑与连接，负责扇出、重定向与重试；路由层只负责把意图编码后连同命令交给它；
//! - [`DispatchEngine`] 是两者之间唯一的接缝，测试中可用记录型实现替身。
//!
//! # 契约说明（What）
//! - [`send_routed`] 对每个请求只编码一次，原样返回引擎结果；
//! - 引擎失败不会触发重试，也不会替换为其他路由策略。

use crate::encoder::IntoWireRoute;
use crate::wire::WireRoute;

/// 携带已编码路由的请求。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutedRequest<C> {
    pub command: C,
    pub route: WireRoute,
}

impl<C> RoutedRequest<C> {
    pub fn new(command: C, route: impl IntoWireRoute) -> Self {
        Self {
            command,
            route: route.into_wire_route(),
        }
    }
}

/// 派发引擎契约。
///
/// # 教案式说明
/// - **意图 (Why)**：路由层不依赖具体传输实现，只要求对方能接收“命令 + 线格式路由”；
/// - **契约 (What)**：实现者对 `route` 的解释必须与 [`WireRoute`] 的 Schema 一致；
///   `send` 的错误由实现者定义，路由层只负责透传。
pub trait DispatchEngine {
    type Command;
    type Response;
    type Error: core::fmt::Display;

    fn send(
        &self,
        request: RoutedRequest<Self::Command>,
    ) -> Result<Self::Response, Self::Error>;
}

/// 编码路由并把请求交给派发引擎。
pub fn send_routed<E>(
    engine: &E,
    command: E::Command,
    route: impl IntoWireRoute,
) -> Result<E::Response, E::Error>
where
    E: DispatchEngine,
{
    let request = RoutedRequest::new(command, route);
    tracing::debug!(route.kind = request.route.kind(), "dispatching routed request");
    engine.send(request).map_err(|err| {
        tracing::warn!(error = %err, "dispatch engine rejected routed request");
        err
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tracing_test::traced_test;

    use super::*;
    use crate::intent::RouteIntent;

    #[derive(Default)]
    struct RecordingEngine {
        sent: Mutex<Vec<RoutedRequest<&'static str>>>,
    }

    impl DispatchEngine for RecordingEngine {
        type Command = &'static str;
        type Response = usize;
        type Error = String;

        fn send(&self, request: RoutedRequest<&'static str>) -> Result<usize, String> {
            let mut sent = self.sent.lock().map_err(|err| err.to_string())?;
            sent.push(request);
            Ok(sent.len())
        }
    }

    #[test]
    fn send_routed_encodes_once_and_forwards() {
        let engine = RecordingEngine::default();
        let intent = RouteIntent::all_primaries();
        assert_eq!(send_routed(&engine, "PING", &intent), Ok(1));
        assert_eq!(send_routed(&engine, "INFO", RouteIntent::random()), Ok(2));

        let sent = engine.sent.lock().expect("锁未中毒");
        assert_eq!(sent[0], RoutedRequest::new("PING", WireRoute::ALL_PRIMARIES));
        assert_eq!(sent[1].route, WireRoute::RANDOM);
    }

    #[traced_test]
    #[test]
    fn dispatch_log_names_route_kind_without_payload() {
        let engine = RecordingEngine::default();
        let intent =
            RouteIntent::slot_key_route(crate::slot::SlotSelector::Primary, "tenant-42:session")
                .expect("非空键");
        assert_eq!(send_routed(&engine, "GET", &intent), Ok(1));
        assert!(logs_contain("slot_key"));
        assert!(!logs_contain("tenant-42:session"));
    }

    struct FailingEngine;

    impl DispatchEngine for FailingEngine {
        type Command = ();
        type Response = ();
        type Error = &'static str;

        fn send(&self, _request: RoutedRequest<()>) -> Result<(), &'static str> {
            Err("connection refused")
        }
    }

    #[test]
    fn engine_errors_are_returned_unchanged() {
        assert_eq!(
            send_routed(&FailingEngine, (), RouteIntent::all_nodes()),
            Err("connection refused")
        );
    }
}
