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

use std::borrow::Cow;

use tf_provider::value::{Value, ValueNumber, ValueString};

use crate::api::Monitor;
use crate::utils::{refresh, refresh_text};

use super::state::{AlertContactBlock, MonitorState};

/// Number sent as 0 when unset: keep it null if it was null
fn refresh_minutes(prior: Option<ValueNumber>, fetched: i64) -> ValueNumber {
    match prior {
        Some(Value::Null) | None if fetched == 0 => Value::Null,
        _ => Value::Value(fetched),
    }
}

impl<'a> MonitorState<'a> {
    /// Reconcile the state with a monitor fetched from the API
    ///
    /// `http_auth_type` is left untouched as the API never returns it.
    pub(super) fn refresh(&mut self, monitor: Monitor) {
        self.id = ValueString::from(monitor.id.to_string());
        refresh_text(&mut self.friendly_name, non_empty(monitor.friendly_name));
        refresh_text(&mut self.url, non_empty(monitor.url));
        refresh_text(&mut self.monitor_type, non_empty(monitor.monitor_type));
        refresh_text(&mut self.status, non_empty(monitor.status));
        refresh(&mut self.interval, monitor.interval);

        refresh_text(&mut self.sub_type, monitor.sub_type);
        refresh(&mut self.port, monitor.port);

        refresh_text(&mut self.keyword_type, monitor.keyword_type);
        refresh_text(&mut self.keyword_value, monitor.keyword_value);

        refresh_text(&mut self.http_username, monitor.http_username);
        refresh_text(&mut self.http_password, monitor.http_password);

        refresh(&mut self.ignore_ssl_errors, monitor.ignore_ssl_errors);

        if !monitor.custom_http_headers.is_empty() || self.custom_http_headers.is_value() {
            self.custom_http_headers = Value::Value(
                monitor
                    .custom_http_headers
                    .into_iter()
                    .map(|(name, value)| (Cow::Owned(name), ValueString::from(value)))
                    .collect(),
            );
        }

        if !monitor.alert_contacts.is_empty() || self.alert_contact.is_value() {
            let prior = self.alert_contact.as_ref_option().cloned().unwrap_or_default();
            let prior_of = |id: &str| {
                prior
                    .iter()
                    .filter_map(|block| block.as_ref_option())
                    .find(|block| block.id.as_deref_option() == Some(id))
            };
            self.alert_contact = Value::Value(
                monitor
                    .alert_contacts
                    .into_iter()
                    .map(|contact| {
                        let prior = prior_of(&contact.id);
                        Value::Value(AlertContactBlock {
                            threshold: refresh_minutes(
                                prior.map(|block| block.threshold),
                                contact.threshold,
                            ),
                            recurrence: refresh_minutes(
                                prior.map(|block| block.recurrence),
                                contact.recurrence,
                            ),
                            id: ValueString::from(contact.id),
                        })
                    })
                    .collect(),
            );
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
