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

use tf_provider::map;
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, NestedBlock, Schema,
};
use tf_provider::value::{Value, ValueBool, ValueList, ValueMap, ValueNumber, ValueString};

use crate::api::model::{
    Enumeration, MONITOR_HTTP_AUTH_TYPE, MONITOR_HTTP_METHOD, MONITOR_KEYWORD_TYPE,
    MONITOR_POST_CONTENT_TYPE, MONITOR_POST_TYPE, MONITOR_SUB_TYPE, MONITOR_TYPE,
};
use crate::utils::WithSchema;

pub const DEFAULT_INTERVAL: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonitorState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub friendly_name: ValueString<'a>,
    pub url: ValueString<'a>,
    #[serde(rename = "type")]
    pub monitor_type: ValueString<'a>,
    pub sub_type: ValueString<'a>,
    pub port: ValueNumber,
    pub keyword_type: ValueString<'a>,
    pub keyword_value: ValueString<'a>,
    pub interval: ValueNumber,
    pub http_method: ValueString<'a>,
    pub http_username: ValueString<'a>,
    pub http_password: ValueString<'a>,
    pub http_auth_type: ValueString<'a>,
    pub post_value: ValueString<'a>,
    pub post_type: ValueString<'a>,
    pub post_content_type: ValueString<'a>,
    pub status: ValueString<'a>,
    pub ignore_ssl_errors: ValueBool,
    pub custom_http_headers: ValueMap<'a, ValueString<'a>>,
    pub alert_contact: ValueList<Value<AlertContactBlock<'a>>>,
}

/// Alert contact notified by a monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AlertContactBlock<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub threshold: ValueNumber,
    pub recurrence: ValueNumber,
}

fn choice(description: &str, enumeration: &Enumeration) -> Description {
    Description::plain(format!(
        "{description}, one of: {}",
        enumeration.names().collect::<Vec<_>>().join(", ")
    ))
}

impl<'a> WithSchema for MonitorState<'a> {
    fn schema() -> Schema {
        let optional_string = |description: Description| Attribute {
            attr_type: AttributeType::String,
            description,
            constraint: AttributeConstraint::Optional,
            ..Default::default()
        };
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("ID of the monitor"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "friendly_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the monitor"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "url" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("URL or IP address to monitor"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: choice("Type of the monitor", &MONITOR_TYPE),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "sub_type" => optional_string(choice("Port sub type, required by `port` monitors", &MONITOR_SUB_TYPE)),
                    "port" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Port to monitor, required by `port` monitors of `custom` sub type"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "keyword_type" => optional_string(choice("Keyword condition, required by `keyword` monitors", &MONITOR_KEYWORD_TYPE)),
                    "keyword_value" => optional_string(Description::plain("Keyword to look for, required by `keyword` monitors")),
                    "interval" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain(format!("Interval between checks in seconds, defaults to {DEFAULT_INTERVAL}")),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "http_method" => optional_string(choice("HTTP method, GET when unset", &MONITOR_HTTP_METHOD)),
                    "http_username" => optional_string(Description::plain("HTTP username")),
                    "http_password" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("HTTP password"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "http_auth_type" => optional_string(choice("HTTP authentication scheme", &MONITOR_HTTP_AUTH_TYPE)),
                    "post_value" => optional_string(Description::plain("Body sent by `http` monitors")),
                    "post_type" => optional_string(choice("Encoding of `post_value`", &MONITOR_POST_TYPE)),
                    "post_content_type" => optional_string(choice("Content type of `post_value`", &MONITOR_POST_CONTENT_TYPE)),
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Status of the monitor"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "ignore_ssl_errors" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Ignore SSL certificate errors, defaults to false"),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "custom_http_headers" => Attribute {
                        attr_type: AttributeType::Map(AttributeType::String.into()),
                        description: Description::plain("Custom HTTP headers sent with each check"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                blocks: map! {
                    "alert_contact" => NestedBlock::Set(Block {
                        attributes: map! {
                            "id" => Attribute {
                                attr_type: AttributeType::String,
                                description: Description::plain("ID of the alert contact"),
                                constraint: AttributeConstraint::Required,
                                ..Default::default()
                            },
                            "threshold" => Attribute {
                                attr_type: AttributeType::Number,
                                description: Description::plain("Minutes to wait before notifying"),
                                constraint: AttributeConstraint::Optional,
                                ..Default::default()
                            },
                            "recurrence" => Attribute {
                                attr_type: AttributeType::Number,
                                description: Description::plain("Minutes between repeated notifications"),
                                constraint: AttributeConstraint::Optional,
                                ..Default::default()
                            },
                        },
                        description: Description::plain("Alert contact notified when the monitor changes state"),
                        ..Default::default()
                    }),
                },
                description: Description::plain("UptimeRobot monitor"),
                deprecated: false,
            },
        }
    }
}
