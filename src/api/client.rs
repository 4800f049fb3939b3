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

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::model::{ALERT_CONTACT_TYPE, MONITOR_TYPE};
use super::wire::{
    AccountDetails, AlertContactCreated, AlertContacts, Envelope, MonitorCreated, Monitors,
    StatusPageCreated, StatusPages,
};
use super::{
    Account, AlertContact, AlertContactParams, ApiError, Monitor, MonitorParams, Result,
    StatusPage, StatusPageParams, UptimeRobotApi,
};

/// Base URL of the UptimeRobot v2 API
pub const DEFAULT_API_URL: &str = "https://api.uptimerobot.com/v2";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client of the UptimeRobot API
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Call an API method and decode the payload of a successful response
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T> {
        debug!(method, "calling UptimeRobot API");

        let mut form = Vec::with_capacity(params.len() + 2);
        form.push(("api_key", self.api_key.clone()));
        form.push(("format", "json".to_owned()));
        form.extend(params);

        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(method, status = status.as_u16(), "UptimeRobot API call failed");
            return Err(ApiError::Status {
                method,
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = serde_json::from_str(&body)?;
        let envelope = Envelope::deserialize(&payload)?;
        match envelope.stat.as_str() {
            "ok" => Ok(T::deserialize(payload)?),
            "fail" => Err(ApiError::Failed {
                method,
                failure: envelope.error.unwrap_or_default(),
            }),
            stat => Err(ApiError::Unexpected {
                method,
                detail: format!("unknown `stat` {stat:?}"),
            }),
        }
    }
}

#[async_trait]
impl UptimeRobotApi for Client {
    async fn get_account_details(&self) -> Result<Account> {
        let details: AccountDetails = self.call("getAccountDetails", vec![]).await?;
        Ok(details.account.into())
    }

    async fn get_monitor(&self, id: i64) -> Result<Monitor> {
        let monitors: Monitors = self
            .call(
                "getMonitors",
                vec![
                    ("monitors", id.to_string()),
                    ("alert_contacts", "1".to_owned()),
                    ("custom_http_headers", "1".to_owned()),
                ],
            )
            .await
            .map_err(|err| err.or_not_found(|| ApiError::MonitorNotFound(id)))?;

        monitors
            .monitors
            .into_iter()
            .find(|monitor| monitor.id == Some(id))
            .map(Into::into)
            .ok_or(ApiError::MonitorNotFound(id))
    }

    async fn create_monitor(&self, params: &MonitorParams) -> Result<Monitor> {
        let created: MonitorCreated = self.call("newMonitor", params.form()?).await?;
        let id = created.monitor.id.ok_or_else(|| ApiError::Unexpected {
            method: "newMonitor",
            detail: "missing monitor id".to_owned(),
        })?;
        debug!(id, monitor_type = %params.monitor_type, "monitor created");
        self.get_monitor(id).await
    }

    async fn update_monitor(&self, id: i64, params: &MonitorParams) -> Result<Monitor> {
        let mut form = vec![("id", id.to_string())];
        form.extend(params.form()?);
        // The type of a monitor cannot be changed
        form.retain(|(field, _)| *field != MONITOR_TYPE.field);

        let _: serde_json::Value = self
            .call("editMonitor", form)
            .await
            .map_err(|err| err.or_not_found(|| ApiError::MonitorNotFound(id)))?;
        self.get_monitor(id).await
    }

    async fn delete_monitor(&self, id: i64) -> Result<()> {
        let _: serde_json::Value = self
            .call("deleteMonitor", vec![("id", id.to_string())])
            .await
            .map_err(|err| err.or_not_found(|| ApiError::MonitorNotFound(id)))?;
        Ok(())
    }

    async fn get_alert_contacts(&self) -> Result<Vec<AlertContact>> {
        let contacts: AlertContacts = self.call("getAlertContacts", vec![]).await?;
        Ok(contacts
            .alert_contacts
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_alert_contact(&self, id: &str) -> Result<AlertContact> {
        let contacts: AlertContacts = self
            .call("getAlertContacts", vec![("alert_contacts", id.to_owned())])
            .await
            .map_err(|err| err.or_not_found(|| ApiError::AlertContactNotFound(id.to_owned())))?;

        contacts
            .alert_contacts
            .into_iter()
            .find(|contact| contact.id == id)
            .map(Into::into)
            .ok_or_else(|| ApiError::AlertContactNotFound(id.to_owned()))
    }

    async fn create_alert_contact(&self, params: &AlertContactParams) -> Result<AlertContact> {
        let form = vec![
            (
                "type",
                ALERT_CONTACT_TYPE.encode(&params.contact_type)?.to_string(),
            ),
            ("friendly_name", params.friendly_name.clone()),
            ("value", params.value.clone()),
        ];
        let created: AlertContactCreated = self.call("newAlertContact", form).await?;
        if created.alertcontact.id.is_empty() {
            return Err(ApiError::Unexpected {
                method: "newAlertContact",
                detail: "missing alert contact id".to_owned(),
            });
        }
        self.get_alert_contact(&created.alertcontact.id).await
    }

    async fn update_alert_contact(
        &self,
        id: &str,
        params: &AlertContactParams,
    ) -> Result<AlertContact> {
        let form = vec![
            ("id", id.to_owned()),
            ("friendly_name", params.friendly_name.clone()),
            ("value", params.value.clone()),
        ];
        let _: serde_json::Value = self
            .call("editAlertContact", form)
            .await
            .map_err(|err| err.or_not_found(|| ApiError::AlertContactNotFound(id.to_owned())))?;
        self.get_alert_contact(id).await
    }

    async fn delete_alert_contact(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .call("deleteAlertContact", vec![("id", id.to_owned())])
            .await
            .map_err(|err| err.or_not_found(|| ApiError::AlertContactNotFound(id.to_owned())))?;
        Ok(())
    }

    async fn get_status_page(&self, id: i64) -> Result<StatusPage> {
        let pages: StatusPages = self
            .call("getPSPs", vec![("psps", id.to_string())])
            .await
            .map_err(|err| err.or_not_found(|| ApiError::StatusPageNotFound(id)))?;

        pages
            .psps
            .into_iter()
            .find(|page| page.id == Some(id))
            .map(Into::into)
            .ok_or(ApiError::StatusPageNotFound(id))
    }

    async fn create_status_page(&self, params: &StatusPageParams) -> Result<StatusPage> {
        let mut form = vec![("type", "1".to_owned())];
        form.extend(params.form()?);
        let created: StatusPageCreated = self.call("newPSP", form).await?;
        let id = created.psp.id.ok_or_else(|| ApiError::Unexpected {
            method: "newPSP",
            detail: "missing status page id".to_owned(),
        })?;
        self.get_status_page(id).await
    }

    async fn update_status_page(&self, id: i64, params: &StatusPageParams) -> Result<StatusPage> {
        let mut form = vec![("id", id.to_string())];
        form.extend(params.form()?);
        let _: serde_json::Value = self
            .call("editPSP", form)
            .await
            .map_err(|err| err.or_not_found(|| ApiError::StatusPageNotFound(id)))?;
        self.get_status_page(id).await
    }

    async fn delete_status_page(&self, id: i64) -> Result<()> {
        let _: serde_json::Value = self
            .call("deletePSP", vec![("id", id.to_string())])
            .await
            .map_err(|err| err.or_not_found(|| ApiError::StatusPageNotFound(id)))?;
        Ok(())
    }
}
