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

use tf_provider::{AttributePath, Diagnostics};
use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueString};

use crate::api::model::Enumeration;
use crate::api::ApiError;

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

pub(crate) trait WithValidate {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath);
}

/// Extract a known state, reporting an error otherwise
pub(crate) fn known<T>(diags: &mut Diagnostics, state: Value<T>) -> Option<T> {
    match state {
        Value::Value(state) => Some(state),
        Value::Null => {
            diags.root_error_short("Resource state is null");
            None
        }
        Value::Unknown => {
            diags.root_error_short("Resource state is unknown");
            None
        }
    }
}

/// Check that a string attribute holds one of the names of `enumeration`
///
/// Null and unknown values are accepted.
pub(crate) fn validate_enum(
    diags: &mut Diagnostics,
    value: &ValueString,
    enumeration: &Enumeration,
    attr_path: AttributePath,
) {
    if let Some(name) = value.as_deref_option() {
        if enumeration.code(name).is_none() {
            diags.error(
                format!("Invalid {}", enumeration.field),
                format!(
                    "{:?} is not a valid {}, expected one of: {}",
                    name,
                    enumeration.field,
                    enumeration
                        .names()
                        .map(|name| format!("{name:?}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                attr_path,
            );
        }
    }
}

/// Parse the integer id of an UptimeRobot object from its Terraform id
pub(crate) fn parse_id(diags: &mut Diagnostics, id: &ValueString) -> Option<i64> {
    let text = id.as_deref_option().unwrap_or_default();
    match text.parse::<i64>() {
        Ok(id) => Some(id),
        Err(err) => {
            diags.error(
                "Invalid id",
                format!("{text:?} is not a valid UptimeRobot id: {err}"),
                AttributePath::new("id"),
            );
            None
        }
    }
}

/// Report a failed API call
pub(crate) fn api_error(diags: &mut Diagnostics, summary: &'static str, err: ApiError) {
    diags.root_error(summary, err.to_string());
}

/// Owned content of a string attribute, `None` when null, unknown or empty
pub(crate) fn text(value: &ValueString) -> Option<String> {
    value
        .as_deref_option()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Overwrite `value` with what the API returned, keeping it when the API returned nothing
pub(crate) fn refresh<T>(value: &mut Value<T>, fetched: Option<T>) {
    if let Some(fetched) = fetched {
        *value = Value::Value(fetched);
    }
}

pub(crate) fn refresh_text<'a>(value: &mut ValueString<'a>, fetched: Option<String>) {
    refresh(value, fetched.map(Cow::Owned));
}

#[cfg(test)]
mod tests {
    use crate::api::model::MONITOR_TYPE;

    use super::*;

    #[test]
    fn parse_valid_id() {
        let mut diags = Diagnostics::default();
        assert_eq!(parse_id(&mut diags, &ValueString::from("777")), Some(777));
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn parse_invalid_id() {
        let mut diags = Diagnostics::default();
        assert_eq!(parse_id(&mut diags, &ValueString::from("abc")), None);
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].attribute, AttributePath::new("id"));

        let mut diags = Diagnostics::default();
        assert_eq!(parse_id(&mut diags, &ValueString::Null), None);
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn enum_validation() {
        let mut diags = Diagnostics::default();
        validate_enum(
            &mut diags,
            &ValueString::from("keyword"),
            &MONITOR_TYPE,
            AttributePath::new("type"),
        );
        validate_enum(
            &mut diags,
            &ValueString::Unknown,
            &MONITOR_TYPE,
            AttributePath::new("type"),
        );
        assert!(diags.errors.is_empty());

        validate_enum(
            &mut diags,
            &ValueString::from("HTTP"),
            &MONITOR_TYPE,
            AttributePath::new("type"),
        );
        assert_eq!(diags.errors.len(), 1);
        assert!(diags.errors[0].detail.contains("\"heartbeat\""));
    }

    #[test]
    fn refresh_keeps_prior_when_empty() {
        let mut value = ValueString::Null;
        refresh_text(&mut value, None);
        assert_eq!(value, ValueString::Null);

        refresh_text(&mut value, Some("up".to_owned()));
        assert_eq!(value.as_deref_option(), Some("up"));
    }
}
