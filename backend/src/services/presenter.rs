//! Logic for assembling the props handed to the page bridge.
//!
//! This module is responsible for converting database records into the
//! client-facing view types, and is the only place where that conversion
//! happens, so credential material can never reach a page by construction.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::database::models::{Role, UserWithRoles};

/// User as the rendering layer sees it: identity and profile fields only,
/// never the stored credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub terms_accepted_version: Option<String>,
    pub roles: Vec<RoleView>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleView {
    pub id: i64,
    pub name: String,
}

impl From<&Role> for RoleView {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

impl From<&UserWithRoles> for UserView {
    fn from(loaded: &UserWithRoles) -> Self {
        Self {
            id: loaded.user.id,
            full_name: loaded.user.full_name.clone(),
            email: loaded.user.email.clone(),
            terms_accepted_version: loaded.user.terms_accepted_version.clone(),
            roles: loaded.roles.iter().map(RoleView::from).collect(),
            created_at: loaded.user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardProps {
    pub user: UserView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationsProps {
    pub pending_evaluations: Vec<serde_json::Value>,
    pub stats: EvaluationStats,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EvaluationStats {
    pub total: u64,
    pub pending: u64,
    pub graded: u64,
}

pub fn dashboard_props(loaded: &UserWithRoles) -> DashboardProps {
    DashboardProps {
        user: UserView::from(loaded),
    }
}

/// Placeholder until the evaluations data source lands: nothing pending and
/// zeroed counters, rebuilt fresh for every request.
pub fn evaluations_props() -> EvaluationsProps {
    EvaluationsProps {
        pending_evaluations: Vec::new(),
        stats: EvaluationStats {
            total: 0,
            pending: 0,
            graded: 0,
        },
    }
}
