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

//! In-memory UptimeRobot account used by the resource tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    Account, AlertContact, AlertContactParams, ApiError, Monitor, MonitorParams, Result,
    StatusPage, StatusPageParams, UptimeRobotApi,
};

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    monitors: BTreeMap<i64, Monitor>,
    alert_contacts: BTreeMap<String, AlertContact>,
    status_pages: BTreeMap<i64, StatusPage>,
    last_monitor_params: Option<MonitorParams>,
    last_status_page_params: Option<StatusPageParams>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    store: Mutex<Store>,
}

impl FakeApi {
    fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        let mut store = self.store.lock().unwrap();
        f(&mut store)
    }

    pub(crate) fn insert_monitor(&self, monitor: Monitor) {
        self.with_store(|store| store.monitors.insert(monitor.id, monitor));
    }

    pub(crate) fn remove_monitor(&self, id: i64) {
        self.with_store(|store| store.monitors.remove(&id));
    }

    pub(crate) fn monitor(&self, id: i64) -> Option<Monitor> {
        self.with_store(|store| store.monitors.get(&id).cloned())
    }

    pub(crate) fn last_monitor_params(&self) -> Option<MonitorParams> {
        self.with_store(|store| store.last_monitor_params.clone())
    }

    pub(crate) fn insert_alert_contact(&self, contact: AlertContact) {
        self.with_store(|store| store.alert_contacts.insert(contact.id.clone(), contact));
    }

    pub(crate) fn alert_contact(&self, id: &str) -> Option<AlertContact> {
        self.with_store(|store| store.alert_contacts.get(id).cloned())
    }

    pub(crate) fn status_page(&self, id: i64) -> Option<StatusPage> {
        self.with_store(|store| store.status_pages.get(&id).cloned())
    }

    pub(crate) fn last_status_page_params(&self) -> Option<StatusPageParams> {
        self.with_store(|store| store.last_status_page_params.clone())
    }
}

fn monitor_from(id: i64, params: &MonitorParams, status: String) -> Monitor {
    Monitor {
        id,
        friendly_name: params.friendly_name.clone(),
        url: params.url.clone(),
        monitor_type: params.monitor_type.clone(),
        sub_type: params.sub_type.clone(),
        port: params.port,
        keyword_type: params.keyword_type.clone(),
        keyword_value: params.keyword_value.clone(),
        interval: params.interval,
        http_username: params.http_username.clone(),
        http_password: params.http_password.clone(),
        status,
        ignore_ssl_errors: Some(params.ignore_ssl_errors),
        alert_contacts: params.alert_contacts.clone(),
        custom_http_headers: params.custom_http_headers.clone(),
    }
}

fn status_page_from(id: i64, params: &StatusPageParams) -> StatusPage {
    StatusPage {
        id,
        friendly_name: params.friendly_name.clone(),
        sort: params.sort.clone(),
        status: params.status.clone().unwrap_or_else(|| "active".to_owned()),
        monitors: params.monitors.clone(),
        standard_url: format!("https://stats.uptimerobot.com/page{id}"),
        custom_url: params.custom_domain.clone().unwrap_or_default(),
    }
}

#[async_trait]
impl UptimeRobotApi for FakeApi {
    async fn get_account_details(&self) -> Result<Account> {
        self.with_store(|store| {
            Ok(Account {
                email: "test@example.com".to_owned(),
                monitor_limit: 50,
                monitor_interval: 5,
                up_monitors: store
                    .monitors
                    .values()
                    .filter(|monitor| monitor.status == "up")
                    .count() as i64,
                down_monitors: 0,
                paused_monitors: store
                    .monitors
                    .values()
                    .filter(|monitor| monitor.status == "paused")
                    .count() as i64,
            })
        })
    }

    async fn get_monitor(&self, id: i64) -> Result<Monitor> {
        self.monitor(id).ok_or(ApiError::MonitorNotFound(id))
    }

    async fn create_monitor(&self, params: &MonitorParams) -> Result<Monitor> {
        params.form()?;
        self.with_store(|store| {
            let id = store.next_id();
            let monitor = monitor_from(id, params, "not checked yet".to_owned());
            store.monitors.insert(id, monitor.clone());
            store.last_monitor_params = Some(params.clone());
            Ok(monitor)
        })
    }

    /// Like `editMonitor`, fields missing from the form keep their value
    async fn update_monitor(&self, id: i64, params: &MonitorParams) -> Result<Monitor> {
        let form = params.form()?;
        let sent = |field: &str| form.iter().any(|(name, _)| *name == field);
        self.with_store(|store| {
            let monitor = store
                .monitors
                .get_mut(&id)
                .ok_or(ApiError::MonitorNotFound(id))?;

            monitor.friendly_name = params.friendly_name.clone();
            monitor.url = params.url.clone();
            if sent("sub_type") {
                monitor.sub_type = params.sub_type.clone();
            }
            if sent("port") {
                monitor.port = params.port;
            }
            if sent("keyword_type") {
                monitor.keyword_type = params.keyword_type.clone();
            }
            if sent("keyword_value") {
                monitor.keyword_value = params.keyword_value.clone();
            }
            if sent("interval") {
                monitor.interval = params.interval;
            }
            if sent("http_username") {
                monitor.http_username = params.http_username.clone();
            }
            if sent("http_password") {
                monitor.http_password = params.http_password.clone();
            }
            if sent("ignore_ssl_errors") {
                monitor.ignore_ssl_errors = Some(params.ignore_ssl_errors);
            }
            if sent("alert_contacts") {
                monitor.alert_contacts = params.alert_contacts.clone();
            }
            if sent("custom_http_headers") {
                monitor.custom_http_headers = params.custom_http_headers.clone();
            }

            let monitor = monitor.clone();
            store.last_monitor_params = Some(params.clone());
            Ok(monitor)
        })
    }

    async fn delete_monitor(&self, id: i64) -> Result<()> {
        self.with_store(|store| {
            store
                .monitors
                .remove(&id)
                .map(|_| ())
                .ok_or(ApiError::MonitorNotFound(id))
        })
    }

    async fn get_alert_contacts(&self) -> Result<Vec<AlertContact>> {
        self.with_store(|store| Ok(store.alert_contacts.values().cloned().collect()))
    }

    async fn get_alert_contact(&self, id: &str) -> Result<AlertContact> {
        self.alert_contact(id)
            .ok_or_else(|| ApiError::AlertContactNotFound(id.to_owned()))
    }

    async fn create_alert_contact(&self, params: &AlertContactParams) -> Result<AlertContact> {
        super::model::ALERT_CONTACT_TYPE.encode(&params.contact_type)?;
        self.with_store(|store| {
            let id = store.next_id().to_string();
            let contact = AlertContact {
                id: id.clone(),
                friendly_name: params.friendly_name.clone(),
                contact_type: params.contact_type.clone(),
                status: "not activated".to_owned(),
                value: params.value.clone(),
            };
            store.alert_contacts.insert(id, contact.clone());
            Ok(contact)
        })
    }

    async fn update_alert_contact(
        &self,
        id: &str,
        params: &AlertContactParams,
    ) -> Result<AlertContact> {
        self.with_store(|store| {
            let contact = store
                .alert_contacts
                .get_mut(id)
                .ok_or_else(|| ApiError::AlertContactNotFound(id.to_owned()))?;
            contact.friendly_name = params.friendly_name.clone();
            contact.value = params.value.clone();
            Ok(contact.clone())
        })
    }

    async fn delete_alert_contact(&self, id: &str) -> Result<()> {
        self.with_store(|store| {
            store
                .alert_contacts
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| ApiError::AlertContactNotFound(id.to_owned()))
        })
    }

    async fn get_status_page(&self, id: i64) -> Result<StatusPage> {
        self.status_page(id).ok_or(ApiError::StatusPageNotFound(id))
    }

    async fn create_status_page(&self, params: &StatusPageParams) -> Result<StatusPage> {
        params.form()?;
        self.with_store(|store| {
            let id = store.next_id();
            let page = status_page_from(id, params);
            store.status_pages.insert(id, page.clone());
            store.last_status_page_params = Some(params.clone());
            Ok(page)
        })
    }

    async fn update_status_page(&self, id: i64, params: &StatusPageParams) -> Result<StatusPage> {
        params.form()?;
        self.with_store(|store| {
            let prior = store
                .status_pages
                .get(&id)
                .ok_or(ApiError::StatusPageNotFound(id))?;
            let page = StatusPage {
                sort: params.sort.clone().or_else(|| prior.sort.clone()),
                status: params.status.clone().unwrap_or_else(|| prior.status.clone()),
                ..status_page_from(id, params)
            };
            store.status_pages.insert(id, page.clone());
            store.last_status_page_params = Some(params.clone());
            Ok(page)
        })
    }

    async fn delete_status_page(&self, id: i64) -> Result<()> {
        self.with_store(|store| {
            store
                .status_pages
                .remove(&id)
                .map(|_| ())
                .ok_or(ApiError::StatusPageNotFound(id))
        })
    }
}
