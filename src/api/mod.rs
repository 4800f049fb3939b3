// This file is part of the terraform-provider-uptimerobot project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! UptimeRobot v2 API

use async_trait::async_trait;
use thiserror::Error;

mod client;
pub mod model;
mod wire;

#[cfg(test)]
pub(crate) mod fake;

pub use client::Client;
pub use model::{
    Account, AlertContact, AlertContactParams, Monitor, MonitorAlertContact, MonitorParams,
    StatusPage, StatusPageParams,
};
pub use wire::Failure;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Monitor not found: {0}")]
    MonitorNotFound(i64),

    #[error("Alert contact not found: {0}")]
    AlertContactNotFound(String),

    #[error("Status page not found: {0}")]
    StatusPageNotFound(i64),

    #[error("UptimeRobot API key is empty")]
    MissingApiKey,

    #[error("Invalid value for `{field}`: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("UptimeRobot API call `{method}` failed: {failure}")]
    Failed { method: &'static str, failure: Failure },

    #[error("UptimeRobot API call `{method}` returned HTTP {status}: {body}")]
    Status {
        method: &'static str,
        status: u16,
        body: String,
    },

    #[error("UptimeRobot API call `{method}` returned an unexpected payload: {detail}")]
    Unexpected { method: &'static str, detail: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the object targeted by the call does not exist (anymore)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MonitorNotFound(_) | Self::AlertContactNotFound(_) | Self::StatusPageNotFound(_)
        )
    }

    /// Replace a `not_found` failure of the API with a typed error
    fn or_not_found(self, not_found: impl FnOnce() -> ApiError) -> ApiError {
        match &self {
            Self::Failed { failure, .. } if failure.kind == "not_found" => not_found(),
            _ => self,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Operations of the UptimeRobot API used by the provider
#[async_trait]
pub trait UptimeRobotApi: Send + Sync {
    async fn get_account_details(&self) -> Result<Account>;

    async fn get_monitor(&self, id: i64) -> Result<Monitor>;
    async fn create_monitor(&self, params: &MonitorParams) -> Result<Monitor>;
    async fn update_monitor(&self, id: i64, params: &MonitorParams) -> Result<Monitor>;
    async fn delete_monitor(&self, id: i64) -> Result<()>;

    async fn get_alert_contacts(&self) -> Result<Vec<AlertContact>>;
    async fn get_alert_contact(&self, id: &str) -> Result<AlertContact>;
    async fn create_alert_contact(&self, params: &AlertContactParams) -> Result<AlertContact>;
    async fn update_alert_contact(
        &self,
        id: &str,
        params: &AlertContactParams,
    ) -> Result<AlertContact>;
    async fn delete_alert_contact(&self, id: &str) -> Result<()>;

    async fn get_status_page(&self, id: i64) -> Result<StatusPage>;
    async fn create_status_page(&self, params: &StatusPageParams) -> Result<StatusPage>;
    async fn update_status_page(&self, id: i64, params: &StatusPageParams) -> Result<StatusPage>;
    async fn delete_status_page(&self, id: i64) -> Result<()>;
}
