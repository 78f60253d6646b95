// src/profile/handlers/mod.rs
//
// Entry points for /api/profile. Both methods authenticate first (the
// `Session` extractor), then hand the request to the action registered
// under the method and the `action` parameter.

pub mod profile;
pub mod resume;
pub mod stats;

use axum::{
    extract::Extension,
    http::{header::ALLOW, Method},
    response::IntoResponse,
};
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::params::ActionParams;
use crate::auth::Session;
use crate::common::{ActionResult, ApiError, AppState};

/// Everything an action needs; no ambient request state
pub struct ActionContext {
    pub state: AppState,
    pub session: Session,
    pub params: ActionParams,
}

pub type ActionHandler = fn(ActionContext) -> BoxFuture<'static, ActionResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionMethod {
    Get,
    Post,
}

impl fmt::Display for ActionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionMethod::Get => write!(f, "GET"),
            ActionMethod::Post => write!(f, "POST"),
        }
    }
}

/// Action name lookup per HTTP method
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<ActionMethod, HashMap<&'static str, ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        method: ActionMethod,
        action: &'static str,
        handler: ActionHandler,
    ) -> Self {
        self.handlers
            .entry(method)
            .or_default()
            .insert(action, handler);
        self
    }

    /// The actions served by /api/profile
    pub fn profile_actions() -> Self {
        Self::new()
            .register(ActionMethod::Post, "update_profile", |ctx| {
                profile::update_profile(ctx).boxed()
            })
            .register(ActionMethod::Post, "save_resume", |ctx| {
                resume::save_resume(ctx).boxed()
            })
            .register(ActionMethod::Get, "get_profile", |ctx| {
                profile::get_profile(ctx).boxed()
            })
            .register(ActionMethod::Get, "get_stats", |ctx| {
                stats::get_stats(ctx).boxed()
            })
    }

    pub fn resolve(&self, method: ActionMethod, action: &str) -> Option<ActionHandler> {
        self.handlers.get(&method)?.get(action).copied()
    }

    pub fn actions(&self, method: ActionMethod) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .handlers
            .get(&method)
            .map(|actions| actions.keys().copied().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

/// GET /api/profile?action=...
pub async fn dispatch_get(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: Session,
    params: ActionParams,
) -> ActionResult {
    dispatch(state_lock, ActionMethod::Get, session, params).await
}

/// POST /api/profile with `action` in the body
pub async fn dispatch_post(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: Session,
    params: ActionParams,
) -> ActionResult {
    dispatch(state_lock, ActionMethod::Post, session, params).await
}

/// Any other method on /api/profile; the session is still checked first
pub async fn reject_method(session: Session, method: Method) -> impl IntoResponse {
    warn!(
        user_id = %session.user_id,
        method = %method,
        "Rejected unsupported method on profile endpoint"
    );
    ([(ALLOW, "GET, HEAD, POST")], ApiError::MethodNotAllowed)
}

async fn dispatch(
    state_lock: Arc<RwLock<AppState>>,
    method: ActionMethod,
    session: Session,
    params: ActionParams,
) -> ActionResult {
    let state = state_lock.read().await.clone();
    let action = params.action();

    let Some(handler) = state.actions.resolve(method, &action) else {
        warn!(
            user_id = %session.user_id,
            method = %method,
            action = %action,
            empty_request = params.is_empty(),
            "Rejected unknown profile action"
        );
        return Err(ApiError::InvalidAction);
    };

    info!(
        user_id = %session.user_id,
        role = %session.role,
        method = %method,
        action = %action,
        param_count = params.len(),
        "Dispatching profile action"
    );

    handler(ActionContext {
        state,
        session,
        params,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::success_message;

    #[test]
    fn test_profile_actions_per_method() {
        let registry = ActionRegistry::profile_actions();
        assert_eq!(
            registry.actions(ActionMethod::Post),
            vec!["save_resume", "update_profile"]
        );
        assert_eq!(
            registry.actions(ActionMethod::Get),
            vec!["get_profile", "get_stats"]
        );
    }

    #[test]
    fn test_resolve_is_method_scoped() {
        let registry = ActionRegistry::profile_actions();
        assert!(registry.resolve(ActionMethod::Get, "get_profile").is_some());
        assert!(registry.resolve(ActionMethod::Post, "get_profile").is_none());
        assert!(registry.resolve(ActionMethod::Get, "update_profile").is_none());
        assert!(registry.resolve(ActionMethod::Get, "").is_none());
        assert!(registry.resolve(ActionMethod::Get, "GET_PROFILE").is_none());
    }

    #[test]
    fn test_register_extends_registry() {
        let registry = ActionRegistry::new().register(ActionMethod::Post, "ping", |_ctx| {
            async { Ok::<_, ApiError>(success_message("pong")) }.boxed()
        });
        assert_eq!(registry.actions(ActionMethod::Post), vec!["ping"]);
        assert!(registry.actions(ActionMethod::Get).is_empty());
    }

    #[test]
    fn test_same_name_under_both_methods() {
        let registry = ActionRegistry::new()
            .register(ActionMethod::Get, "ping", |_ctx| {
                async { Ok::<_, ApiError>(success_message("get")) }.boxed()
            })
            .register(ActionMethod::Post, "ping", |_ctx| {
                async { Ok::<_, ApiError>(success_message("post")) }.boxed()
            });

        assert!(registry.resolve(ActionMethod::Get, "ping").is_some());
        assert!(registry.resolve(ActionMethod::Post, "ping").is_some());
        assert!(registry.resolve(ActionMethod::Post, "pong").is_none());
        assert_eq!(registry.actions(ActionMethod::Get), vec!["ping"]);
    }
}
