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

//! Typed view of the UptimeRobot objects and of the parameters sent to the API

use std::collections::BTreeMap;

use super::{ApiError, Result};

/// Mapping between the names exposed to Terraform and the integer codes of the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumeration {
    /// Name of the API field
    pub field: &'static str,
    entries: &'static [(&'static str, i64)],
}

impl Enumeration {
    pub const fn new(field: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        Self { field, entries }
    }

    /// Code of `name`, if `name` is a valid choice
    pub fn code(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }

    /// Name associated to `code`
    pub fn name(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Code of `name`, or an error naming the field
    pub fn encode(&self, name: &str) -> Result<i64> {
        self.code(name).ok_or_else(|| ApiError::InvalidValue {
            field: self.field,
            value: name.to_owned(),
        })
    }

    /// Name associated to `code`, falling back to the code itself for values unknown to the provider
    pub fn decode(&self, code: i64) -> String {
        self.name(code)
            .map(str::to_owned)
            .unwrap_or_else(|| code.to_string())
    }
}

pub const MONITOR_TYPE: Enumeration = Enumeration::new(
    "type",
    &[
        ("http", 1),
        ("keyword", 2),
        ("ping", 3),
        ("port", 4),
        ("heartbeat", 5),
    ],
);

pub const MONITOR_SUB_TYPE: Enumeration = Enumeration::new(
    "sub_type",
    &[
        ("http", 1),
        ("https", 2),
        ("ftp", 3),
        ("smtp", 4),
        ("pop3", 5),
        ("imap", 6),
        ("custom", 99),
    ],
);

pub const MONITOR_KEYWORD_TYPE: Enumeration =
    Enumeration::new("keyword_type", &[("exists", 1), ("not exists", 2)]);

pub const MONITOR_HTTP_METHOD: Enumeration = Enumeration::new(
    "http_method",
    &[
        ("HEAD", 1),
        ("GET", 2),
        ("POST", 3),
        ("PUT", 4),
        ("PATCH", 5),
        ("DELETE", 6),
        ("OPTIONS", 7),
    ],
);

pub const MONITOR_HTTP_AUTH_TYPE: Enumeration =
    Enumeration::new("http_auth_type", &[("basic", 1), ("digest", 2)]);

pub const MONITOR_POST_TYPE: Enumeration =
    Enumeration::new("post_type", &[("key-value", 1), ("raw data", 2)]);

pub const MONITOR_POST_CONTENT_TYPE: Enumeration = Enumeration::new(
    "post_content_type",
    &[("text/html", 0), ("application/json", 1)],
);

pub const MONITOR_STATUS: Enumeration = Enumeration::new(
    "status",
    &[
        ("paused", 0),
        ("not checked yet", 1),
        ("up", 2),
        ("seems down", 8),
        ("down", 9),
    ],
);

pub const ALERT_CONTACT_TYPE: Enumeration = Enumeration::new(
    "type",
    &[
        ("sms", 1),
        ("e-mail", 2),
        ("twitter-dm", 3),
        ("boxcar", 4),
        ("web-hook", 5),
        ("pushbullet", 6),
        ("zapier", 7),
        ("pushover", 9),
        ("hipchat", 10),
        ("slack", 11),
    ],
);

pub const ALERT_CONTACT_STATUS: Enumeration = Enumeration::new(
    "status",
    &[("not activated", 0), ("paused", 1), ("active", 2)],
);

pub const STATUS_PAGE_SORT: Enumeration = Enumeration::new(
    "sort",
    &[
        ("a-z", 1),
        ("z-a", 2),
        ("up-down-paused", 3),
        ("down-up-paused", 4),
    ],
);

pub const STATUS_PAGE_STATUS: Enumeration =
    Enumeration::new("status", &[("paused", 0), ("active", 1)]);

/// Account details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub monitor_limit: i64,
    pub monitor_interval: i64,
    pub up_monitors: i64,
    pub down_monitors: i64,
    pub paused_monitors: i64,
}

/// Alert contact attached to a monitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorAlertContact {
    pub id: String,
    pub threshold: i64,
    pub recurrence: i64,
}

/// Monitor as returned by `getMonitors`
///
/// Optional fields are `None` when the API returns them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Monitor {
    pub id: i64,
    pub friendly_name: String,
    pub url: String,
    pub monitor_type: String,
    pub sub_type: Option<String>,
    pub port: Option<i64>,
    pub keyword_type: Option<String>,
    pub keyword_value: Option<String>,
    pub interval: Option<i64>,
    pub http_username: Option<String>,
    pub http_password: Option<String>,
    pub status: String,
    pub ignore_ssl_errors: Option<bool>,
    pub alert_contacts: Vec<MonitorAlertContact>,
    pub custom_http_headers: BTreeMap<String, String>,
}

/// Parameters of `newMonitor` and `editMonitor`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorParams {
    pub friendly_name: String,
    pub url: String,
    pub monitor_type: String,
    pub sub_type: Option<String>,
    pub port: Option<i64>,
    pub keyword_type: Option<String>,
    pub keyword_value: Option<String>,
    pub interval: Option<i64>,
    pub http_method: Option<String>,
    pub http_username: Option<String>,
    pub http_password: Option<String>,
    pub http_auth_type: Option<String>,
    pub post_value: Option<String>,
    pub post_type: Option<String>,
    pub post_content_type: Option<String>,
    pub ignore_ssl_errors: bool,
    pub alert_contacts: Vec<MonitorAlertContact>,
    pub custom_http_headers: BTreeMap<String, String>,
}

impl MonitorParams {
    /// Form fields understood by the API
    pub fn form(&self) -> Result<Vec<(&'static str, String)>> {
        let mut form = vec![
            ("friendly_name", self.friendly_name.clone()),
            ("url", self.url.clone()),
            ("type", MONITOR_TYPE.encode(&self.monitor_type)?.to_string()),
        ];

        let enums = [
            (&self.sub_type, MONITOR_SUB_TYPE),
            (&self.keyword_type, MONITOR_KEYWORD_TYPE),
            (&self.http_method, MONITOR_HTTP_METHOD),
            (&self.http_auth_type, MONITOR_HTTP_AUTH_TYPE),
            (&self.post_type, MONITOR_POST_TYPE),
            (&self.post_content_type, MONITOR_POST_CONTENT_TYPE),
        ];
        for (value, enumeration) in enums {
            if let Some(value) = value {
                form.push((enumeration.field, enumeration.encode(value)?.to_string()));
            }
        }

        // editMonitor keeps any field left out of the form, so the text fields
        // used by the monitor type are always sent and an empty one clears it
        let texts = [
            ("keyword_value", &self.keyword_value, &["keyword"][..]),
            ("http_username", &self.http_username, &["http", "keyword"][..]),
            ("http_password", &self.http_password, &["http", "keyword"][..]),
            ("post_value", &self.post_value, &["http"][..]),
        ];
        for (field, value, types) in texts {
            match value {
                Some(value) => form.push((field, value.clone())),
                None if types.contains(&self.monitor_type.as_str()) => {
                    form.push((field, String::new()))
                }
                None => (),
            }
        }

        if let Some(port) = self.port {
            form.push(("port", port.to_string()));
        }
        if let Some(interval) = self.interval {
            form.push(("interval", interval.to_string()));
        }
        form.push((
            "ignore_ssl_errors",
            if self.ignore_ssl_errors { "1" } else { "0" }.to_owned(),
        ));

        let contacts = self
            .alert_contacts
            .iter()
            .map(|c| format!("{}_{}_{}", c.id, c.threshold, c.recurrence))
            .collect::<Vec<_>>()
            .join("-");
        form.push(("alert_contacts", contacts));
        form.push((
            "custom_http_headers",
            serde_json::to_string(&self.custom_http_headers)?,
        ));

        Ok(form)
    }
}

/// Alert contact as returned by `getAlertContacts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertContact {
    pub id: String,
    pub friendly_name: String,
    pub contact_type: String,
    pub status: String,
    pub value: String,
}

/// Parameters of `newAlertContact` and `editAlertContact`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertContactParams {
    pub friendly_name: String,
    pub contact_type: String,
    pub value: String,
}

/// Public status page as returned by `getPSPs`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPage {
    pub id: i64,
    pub friendly_name: String,
    pub sort: Option<String>,
    pub status: String,
    /// Empty when the page shows every monitor
    pub monitors: Vec<i64>,
    pub standard_url: String,
    pub custom_url: String,
}

/// Parameters of `newPSP` and `editPSP`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPageParams {
    pub friendly_name: String,
    pub custom_domain: Option<String>,
    pub password: Option<String>,
    pub sort: Option<String>,
    pub status: Option<String>,
    pub monitors: Vec<i64>,
}

impl StatusPageParams {
    pub fn form(&self) -> Result<Vec<(&'static str, String)>> {
        let monitors = if self.monitors.is_empty() {
            "0".to_owned()
        } else {
            self.monitors
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join("-")
        };
        let mut form = vec![
            ("friendly_name", self.friendly_name.clone()),
            ("monitors", monitors),
        ];
        // An empty value removes the custom domain or the password
        form.push((
            "custom_domain",
            self.custom_domain.clone().unwrap_or_default(),
        ));
        form.push(("password", self.password.clone().unwrap_or_default()));
        if let Some(sort) = &self.sort {
            form.push(("sort", STATUS_PAGE_SORT.encode(sort)?.to_string()));
        }
        if let Some(status) = &self.status {
            form.push(("status", STATUS_PAGE_STATUS.encode(status)?.to_string()));
        }
        Ok(form)
    }
}
