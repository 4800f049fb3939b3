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

//! Raw JSON payloads of the UptimeRobot API
//!
//! The API is loose with its types: integers are sometimes strings, absent
//! values are empty strings, and empty objects are sometimes empty arrays.
//! Every field is therefore decoded leniently before being converted into
//! the types of [`super::model`].

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use super::model::{
    Account, AlertContact, Monitor, MonitorAlertContact, StatusPage, ALERT_CONTACT_STATUS,
    ALERT_CONTACT_TYPE, MONITOR_KEYWORD_TYPE, MONITOR_STATUS, MONITOR_SUB_TYPE, MONITOR_TYPE,
    STATUS_PAGE_SORT, STATUS_PAGE_STATUS,
};

fn int_of(value: &Json) -> Option<i64> {
    match value {
        Json::Number(n) => n.as_i64(),
        Json::String(s) => s.trim().parse().ok(),
        Json::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

fn string_of(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        Json::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(int_of(&Json::deserialize(deserializer)?))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_of(&Json::deserialize(deserializer)?))
}

fn lenient_headers<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    Ok(match Json::deserialize(deserializer)? {
        Json::Object(map) => map
            .into_iter()
            .map(|(k, v)| {
                let v = string_of(&v);
                (k, v)
            })
            .collect(),
        _ => Default::default(),
    })
}

/// Monitor list of a status page: `0` means every monitor
fn lenient_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    Ok(match Json::deserialize(deserializer)? {
        Json::Array(ids) => ids.iter().filter_map(int_of).collect(),
        Json::String(ids) => ids
            .split('-')
            .filter_map(|id| id.trim().parse().ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Error payload of a `fail` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Failure {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub parameter_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub passed_value: String,
}

impl Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.kind.is_empty() {
            "unknown"
        } else {
            self.kind.as_str()
        };
        write!(f, "{kind}")?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if !self.parameter_name.is_empty() {
            write!(
                f,
                " (parameter `{}`, passed value {:?})",
                self.parameter_name, self.passed_value
            )?;
        }
        Ok(())
    }
}

/// Common envelope of every response
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub stat: String,
    #[serde(default)]
    pub error: Option<Failure>,
}

#[derive(Debug, Deserialize)]
pub struct Created {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedText {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct MonitorCreated {
    pub monitor: Created,
}

#[derive(Debug, Deserialize)]
pub struct AlertContactCreated {
    pub alertcontact: CreatedText,
}

#[derive(Debug, Deserialize)]
pub struct StatusPageCreated {
    pub psp: Created,
}

#[derive(Debug, Deserialize)]
pub struct AccountDetails {
    pub account: RawAccount,
}

#[derive(Debug, Deserialize)]
pub struct Monitors {
    #[serde(default)]
    pub monitors: Vec<RawMonitor>,
}

#[derive(Debug, Deserialize)]
pub struct AlertContacts {
    #[serde(default)]
    pub alert_contacts: Vec<RawAlertContact>,
}

#[derive(Debug, Deserialize)]
pub struct StatusPages {
    #[serde(default)]
    pub psps: Vec<RawStatusPage>,
}

#[derive(Debug, Deserialize)]
pub struct RawAccount {
    #[serde(default, deserialize_with = "lenient_string")]
    email: String,
    #[serde(default, deserialize_with = "lenient_int")]
    monitor_limit: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    monitor_interval: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    up_monitors: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    down_monitors: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    paused_monitors: Option<i64>,
}

impl From<RawAccount> for Account {
    fn from(raw: RawAccount) -> Self {
        Self {
            email: raw.email,
            monitor_limit: raw.monitor_limit.unwrap_or_default(),
            monitor_interval: raw.monitor_interval.unwrap_or_default(),
            up_monitors: raw.up_monitors.unwrap_or_default(),
            down_monitors: raw.down_monitors.unwrap_or_default(),
            paused_monitors: raw.paused_monitors.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawMonitorAlertContact {
    #[serde(default, deserialize_with = "lenient_string")]
    id: String,
    #[serde(default, deserialize_with = "lenient_int")]
    threshold: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    recurrence: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawMonitor {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    friendly_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    url: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_int")]
    monitor_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    sub_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    port: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    keyword_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    keyword_value: String,
    #[serde(default, deserialize_with = "lenient_int")]
    interval: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    http_username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    http_password: String,
    #[serde(default, deserialize_with = "lenient_int")]
    status: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    ignore_ssl_errors: Option<i64>,
    #[serde(default)]
    alert_contacts: Vec<RawMonitorAlertContact>,
    #[serde(default, deserialize_with = "lenient_headers")]
    custom_http_headers: BTreeMap<String, String>,
}

impl From<RawMonitor> for Monitor {
    fn from(raw: RawMonitor) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            friendly_name: raw.friendly_name,
            url: raw.url,
            monitor_type: raw
                .monitor_type
                .map(|code| MONITOR_TYPE.decode(code))
                .unwrap_or_default(),
            // 0 is how the API says "no sub type" and "no keyword type"
            sub_type: raw
                .sub_type
                .filter(|code| *code != 0)
                .map(|code| MONITOR_SUB_TYPE.decode(code)),
            port: raw.port.filter(|port| *port != 0),
            keyword_type: raw
                .keyword_type
                .filter(|code| *code != 0)
                .map(|code| MONITOR_KEYWORD_TYPE.decode(code)),
            keyword_value: non_empty(raw.keyword_value),
            interval: raw.interval,
            http_username: non_empty(raw.http_username),
            http_password: non_empty(raw.http_password),
            status: raw
                .status
                .map(|code| MONITOR_STATUS.decode(code))
                .unwrap_or_default(),
            ignore_ssl_errors: raw.ignore_ssl_errors.map(|flag| flag != 0),
            alert_contacts: raw
                .alert_contacts
                .into_iter()
                .filter(|contact| !contact.id.is_empty())
                .map(|contact| MonitorAlertContact {
                    id: contact.id,
                    threshold: contact.threshold.unwrap_or_default(),
                    recurrence: contact.recurrence.unwrap_or_default(),
                })
                .collect(),
            custom_http_headers: raw.custom_http_headers,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawAlertContact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    friendly_name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_int")]
    contact_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    status: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    value: String,
}

impl From<RawAlertContact> for AlertContact {
    fn from(raw: RawAlertContact) -> Self {
        Self {
            id: raw.id,
            friendly_name: raw.friendly_name,
            contact_type: raw
                .contact_type
                .map(|code| ALERT_CONTACT_TYPE.decode(code))
                .unwrap_or_default(),
            status: raw
                .status
                .map(|code| ALERT_CONTACT_STATUS.decode(code))
                .unwrap_or_default(),
            value: raw.value,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawStatusPage {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    friendly_name: String,
    #[serde(default, deserialize_with = "lenient_ids")]
    monitors: Vec<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    sort: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    status: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    standard_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    custom_url: String,
}

impl From<RawStatusPage> for StatusPage {
    fn from(raw: RawStatusPage) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            friendly_name: raw.friendly_name,
            sort: raw.sort.map(|code| STATUS_PAGE_SORT.decode(code)),
            status: raw
                .status
                .map(|code| STATUS_PAGE_STATUS.decode(code))
                .unwrap_or_default(),
            monitors: raw.monitors.into_iter().filter(|id| *id != 0).collect(),
            standard_url: raw.standard_url,
            custom_url: raw.custom_url,
        }
    }
}
