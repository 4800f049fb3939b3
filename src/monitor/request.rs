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

use crate::api::{MonitorAlertContact, MonitorParams};
use crate::utils::text;

use super::state::MonitorState;

const DEFAULT_HTTP_METHOD: &str = "GET";

impl MonitorState<'_> {
    /// Parameters of `newMonitor` and `editMonitor`
    ///
    /// Only the attributes relevant to the monitor type are sent.
    pub(super) fn to_params(&self) -> MonitorParams {
        let mut params = MonitorParams {
            friendly_name: self.friendly_name.to_string(),
            url: self.url.to_string(),
            monitor_type: self.monitor_type.to_string(),
            interval: self.interval.as_ref_option().copied(),
            ignore_ssl_errors: self.ignore_ssl_errors.unwrap_or(false),
            ..Default::default()
        };

        match self.monitor_type.as_deref_option().unwrap_or_default() {
            "port" => {
                params.sub_type = text(&self.sub_type);
                params.port = self.port.as_ref_option().copied();
            }
            "keyword" => {
                params.keyword_type = text(&self.keyword_type);
                params.keyword_value = text(&self.keyword_value);
                self.http_params(&mut params);
            }
            "http" => {
                self.http_params(&mut params);
                // Sent on update as well, an empty post_value clears the body
                params.post_value = text(&self.post_value);
                params.post_type = text(&self.post_type);
                params.post_content_type = text(&self.post_content_type);
            }
            _ => (),
        }

        params.alert_contacts = self
            .alert_contact
            .iter()
            .flatten()
            .filter_map(|block| block.as_ref_option())
            .map(|block| MonitorAlertContact {
                id: block.id.to_string(),
                threshold: block.threshold.unwrap_or(0),
                recurrence: block.recurrence.unwrap_or(0),
            })
            .collect();

        params.custom_http_headers = self
            .custom_http_headers
            .iter()
            .flatten()
            .filter_map(|(name, value)| {
                Some((name.to_string(), value.as_deref_option()?.to_owned()))
            })
            .collect();

        params
    }

    fn http_params(&self, params: &mut MonitorParams) {
        params.http_method =
            Some(text(&self.http_method).unwrap_or_else(|| DEFAULT_HTTP_METHOD.to_owned()));
        params.http_username = text(&self.http_username);
        params.http_password = text(&self.http_password);
        params.http_auth_type = text(&self.http_auth_type);
    }
}
