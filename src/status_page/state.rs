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

use serde::{Deserialize, Serialize};

use tf_provider::{map, AttributePath, Diagnostics};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{Value, ValueNumber, ValueSet, ValueString};

use crate::api::model::{STATUS_PAGE_SORT, STATUS_PAGE_STATUS};
use crate::api::{StatusPage, StatusPageParams};
use crate::utils::{refresh_text, text, validate_enum, WithSchema, WithValidate};

pub const DNS_ADDRESS: &str = "stats.uptimerobot.com";
pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusPageState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub friendly_name: ValueString<'a>,
    pub custom_domain: ValueString<'a>,
    pub password: ValueString<'a>,
    pub sort: ValueString<'a>,
    pub status: ValueString<'a>,
    pub monitors: ValueSet<ValueNumber>,
    pub dns_address: ValueString<'a>,
    pub standard_url: ValueString<'a>,
    pub custom_url: ValueString<'a>,
}

impl StatusPageState<'_> {
    pub(super) fn to_params(&self) -> StatusPageParams {
        StatusPageParams {
            friendly_name: self.friendly_name.to_string(),
            custom_domain: text(&self.custom_domain),
            password: text(&self.password),
            sort: text(&self.sort),
            status: text(&self.status),
            monitors: self
                .monitors
                .iter()
                .flatten()
                .filter_map(|id| id.as_ref_option().copied())
                .collect(),
        }
    }

    /// Reconcile the state with a status page fetched from the API
    ///
    /// The API does not return the custom domain nor the password: they keep their prior value.
    pub(super) fn refresh(&mut self, page: StatusPage) {
        self.id = ValueString::from(page.id.to_string());
        refresh_text(&mut self.friendly_name, Some(page.friendly_name));
        refresh_text(&mut self.sort, page.sort);
        refresh_text(&mut self.status, Some(page.status));

        // An empty list means every monitor, which is also what a null attribute means
        if !page.monitors.is_empty() || self.monitors.is_value() {
            self.monitors = Value::Value(page.monitors.into_iter().map(Value::Value).collect());
        }

        self.dns_address = ValueString::from(DNS_ADDRESS);
        self.standard_url = ValueString::from(page.standard_url);
        self.custom_url = ValueString::from(page.custom_url);
    }
}

impl WithValidate for StatusPageState<'_> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        validate_enum(
            diags,
            &self.sort,
            &STATUS_PAGE_SORT,
            attr_path.clone().attribute("sort"),
        );
        validate_enum(
            diags,
            &self.status,
            &STATUS_PAGE_STATUS,
            attr_path.clone().attribute("status"),
        );

        for id in self.monitors.iter().flatten() {
            if let Value::Value(id) = id {
                if *id <= 0 {
                    diags.error(
                        "Invalid monitor ID",
                        format!("Monitor ID must be positive, got {id}"),
                        attr_path.clone().attribute("monitors"),
                    );
                }
            }
        }
    }
}

impl WithSchema for StatusPageState<'_> {
    fn schema() -> Schema {
        let computed_string = |description: &str| Attribute {
            attr_type: AttributeType::String,
            description: Description::plain(description),
            constraint: AttributeConstraint::Computed,
            ..Default::default()
        };
        let optional_string = |description: String| Attribute {
            attr_type: AttributeType::String,
            description: Description::plain(description),
            constraint: AttributeConstraint::Optional,
            ..Default::default()
        };
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => computed_string("ID of the status page"),
                    "friendly_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the status page"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "custom_domain" => optional_string("Custom domain serving the status page".to_owned()),
                    "password" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Password protecting the status page"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "sort" => optional_string(format!(
                        "Order of the monitors on the page, one of: {}",
                        STATUS_PAGE_SORT.names().collect::<Vec<_>>().join(", ")
                    )),
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "Status of the page, one of: {}, defaults to {DEFAULT_STATUS}",
                            STATUS_PAGE_STATUS.names().collect::<Vec<_>>().join(", ")
                        )),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "monitors" => Attribute {
                        attr_type: AttributeType::Set(AttributeType::Number.into()),
                        description: Description::plain("IDs of the monitors shown, all monitors when empty"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "dns_address" => computed_string("DNS target of the custom domain CNAME record"),
                    "standard_url" => computed_string("URL of the status page on UptimeRobot"),
                    "custom_url" => computed_string("URL of the status page on the custom domain"),
                },
                description: Description::plain("UptimeRobot public status page"),
                ..Default::default()
            },
        }
    }
}
