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

use tf_provider::{AttributePath, Diagnostics};
use tf_provider::value::Value;

use crate::api::model::{
    MONITOR_HTTP_AUTH_TYPE, MONITOR_HTTP_METHOD, MONITOR_KEYWORD_TYPE, MONITOR_POST_CONTENT_TYPE,
    MONITOR_POST_TYPE, MONITOR_SUB_TYPE, MONITOR_TYPE,
};
use crate::utils::{validate_enum, WithValidate};

use super::state::{AlertContactBlock, MonitorState};

fn require(
    diags: &mut Diagnostics,
    value: &Value<impl Sized>,
    name: &'static str,
    reason: &str,
    attr_path: &AttributePath,
) {
    if value.is_null() {
        diags.error(
            format!("Missing `{name}`"),
            format!("`{name}` is required {reason}"),
            attr_path.clone().attribute(name),
        );
    }
}

impl WithValidate for MonitorState<'_> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        let enums = [
            ("type", &self.monitor_type, MONITOR_TYPE),
            ("sub_type", &self.sub_type, MONITOR_SUB_TYPE),
            ("keyword_type", &self.keyword_type, MONITOR_KEYWORD_TYPE),
            ("http_method", &self.http_method, MONITOR_HTTP_METHOD),
            ("http_auth_type", &self.http_auth_type, MONITOR_HTTP_AUTH_TYPE),
            ("post_type", &self.post_type, MONITOR_POST_TYPE),
            ("post_content_type", &self.post_content_type, MONITOR_POST_CONTENT_TYPE),
        ];
        for (name, value, enumeration) in enums {
            validate_enum(diags, value, &enumeration, attr_path.clone().attribute(name));
        }

        match self.monitor_type.as_deref_option() {
            Some("port") => {
                require(
                    diags,
                    &self.sub_type,
                    "sub_type",
                    "for `port` monitors",
                    &attr_path,
                );
                if self.sub_type.as_deref_option() == Some("custom") {
                    require(
                        diags,
                        &self.port,
                        "port",
                        "for `port` monitors of `custom` sub type",
                        &attr_path,
                    );
                }
            }
            Some("keyword") => {
                require(
                    diags,
                    &self.keyword_type,
                    "keyword_type",
                    "for `keyword` monitors",
                    &attr_path,
                );
                require(
                    diags,
                    &self.keyword_value,
                    "keyword_value",
                    "for `keyword` monitors",
                    &attr_path,
                );
            }
            _ => (),
        }

        if let Value::Value(interval) = self.interval {
            if interval <= 0 {
                diags.error(
                    "Invalid `interval`",
                    format!("`interval` must be a positive number of seconds, got {interval}"),
                    attr_path.clone().attribute("interval"),
                );
            }
        }
        if let Value::Value(port) = self.port {
            if !(1..=65535).contains(&port) {
                diags.error(
                    "Invalid `port`",
                    format!("`port` must be between 1 and 65535, got {port}"),
                    attr_path.clone().attribute("port"),
                );
            }
        }

        for (index, alert_contact) in self.alert_contact.iter().flatten().enumerate() {
            if let Value::Value(alert_contact) = alert_contact {
                alert_contact.validate(
                    diags,
                    attr_path
                        .clone()
                        .attribute("alert_contact")
                        .index(index as i64),
                );
            }
        }
    }
}

impl WithValidate for AlertContactBlock<'_> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if self.id.as_deref_option() == Some("") {
            diags.error_short(
                "`alert_contact.id` cannot be empty",
                attr_path.clone().attribute("id"),
            );
        }
        for (name, value) in [("threshold", self.threshold), ("recurrence", self.recurrence)] {
            if let Value::Value(minutes) = value {
                if minutes < 0 {
                    diags.error(
                        format!("Invalid `alert_contact.{name}`"),
                        format!("`{name}` cannot be negative, got {minutes}"),
                        attr_path.clone().attribute(name),
                    );
                }
            }
        }
    }
}

/// Check a configuration that is not known to be a monitor yet
pub(super) fn validate_config(diags: &mut Diagnostics, config: &Value<MonitorState<'_>>) {
    if let Value::Value(config) = config {
        config.validate(diags, AttributePath::default());
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::value::ValueString;

    use super::*;

    fn monitor(monitor_type: &'static str) -> MonitorState<'static> {
        MonitorState {
            friendly_name: ValueString::from("test"),
            url: ValueString::from("example.com"),
            monitor_type: ValueString::from(monitor_type),
            ..Default::default()
        }
    }

    fn errors(state: &MonitorState) -> Vec<AttributePath> {
        let mut diags = Diagnostics::default();
        state.validate(&mut diags, AttributePath::default());
        diags.errors.into_iter().map(|diag| diag.attribute).collect()
    }

    #[test]
    fn http_monitor_is_valid() {
        assert!(errors(&monitor("http")).is_empty());
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            errors(&monitor("dns")),
            vec![AttributePath::default().attribute("type")]
        );
    }

    #[test]
    fn unknown_values_are_not_checked() {
        let state = MonitorState {
            monitor_type: ValueString::Unknown,
            http_method: ValueString::Unknown,
            ..monitor("http")
        };
        assert!(errors(&state).is_empty());
    }

    #[test]
    fn port_monitor_requirements() {
        assert_eq!(
            errors(&monitor("port")),
            vec![AttributePath::default().attribute("sub_type")]
        );

        let custom = MonitorState {
            sub_type: ValueString::from("custom"),
            ..monitor("port")
        };
        assert_eq!(
            errors(&custom),
            vec![AttributePath::default().attribute("port")]
        );

        let smtp = MonitorState {
            sub_type: ValueString::from("smtp"),
            ..monitor("port")
        };
        assert!(errors(&smtp).is_empty());
    }

    #[test]
    fn keyword_monitor_requirements() {
        assert_eq!(
            errors(&monitor("keyword")),
            vec![
                AttributePath::default().attribute("keyword_type"),
                AttributePath::default().attribute("keyword_value"),
            ]
        );

        let keyword = MonitorState {
            keyword_type: ValueString::from("not exists"),
            keyword_value: ValueString::from("error"),
            ..monitor("keyword")
        };
        assert!(errors(&keyword).is_empty());
    }

    #[test]
    fn enumerations_are_checked() {
        let state = MonitorState {
            http_method: ValueString::from("get"),
            post_type: ValueString::from("raw data"),
            post_content_type: ValueString::from("text/plain"),
            ..monitor("http")
        };
        assert_eq!(
            errors(&state),
            vec![
                AttributePath::default().attribute("http_method"),
                AttributePath::default().attribute("post_content_type"),
            ]
        );
    }

    #[test]
    fn numbers_are_checked() {
        let state = MonitorState {
            interval: Value::Value(0),
            alert_contact: Value::Value(vec![Value::Value(AlertContactBlock {
                id: ValueString::from("123"),
                threshold: Value::Value(-1),
                recurrence: Value::Null,
            })]),
            ..monitor("http")
        };
        assert_eq!(
            errors(&state),
            vec![
                AttributePath::default().attribute("interval"),
                AttributePath::default()
                    .attribute("alert_contact")
                    .index(0)
                    .attribute("threshold"),
            ]
        );
    }
}
