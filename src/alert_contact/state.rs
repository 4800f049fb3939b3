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
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::ValueString;

use crate::api::model::ALERT_CONTACT_TYPE;
use crate::api::{AlertContact, AlertContactParams};
use crate::utils::WithSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub friendly_name: ValueString<'a>,
    #[serde(rename = "type")]
    pub contact_type: ValueString<'a>,
    pub value: ValueString<'a>,
    pub status: ValueString<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DataSourceState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub friendly_name: ValueString<'a>,
    #[serde(rename = "type")]
    pub contact_type: ValueString<'a>,
    pub value: ValueString<'a>,
    pub status: ValueString<'a>,
}

impl ResourceState<'_> {
    pub(super) fn to_params(&self) -> AlertContactParams {
        AlertContactParams {
            friendly_name: self.friendly_name.to_string(),
            contact_type: self.contact_type.to_string(),
            value: self.value.to_string(),
        }
    }

    pub(super) fn refresh(&mut self, contact: AlertContact) {
        self.id = ValueString::from(contact.id);
        self.friendly_name = ValueString::from(contact.friendly_name);
        self.contact_type = ValueString::from(contact.contact_type);
        self.value = ValueString::from(contact.value);
        self.status = ValueString::from(contact.status);
    }
}

impl From<AlertContact> for DataSourceState<'_> {
    fn from(contact: AlertContact) -> Self {
        Self {
            id: ValueString::from(contact.id),
            friendly_name: ValueString::from(contact.friendly_name),
            contact_type: ValueString::from(contact.contact_type),
            value: ValueString::from(contact.value),
            status: ValueString::from(contact.status),
        }
    }
}

fn type_description() -> Description {
    Description::plain(format!(
        "Type of the alert contact, one of: {}",
        ALERT_CONTACT_TYPE.names().collect::<Vec<_>>().join(", ")
    ))
}

impl WithSchema for ResourceState<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("ID of the alert contact"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "friendly_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the alert contact"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: type_description(),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "value" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("E-mail address, phone number or URL notified"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Status of the alert contact"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("UptimeRobot alert contact"),
                ..Default::default()
            },
        }
    }
}

impl WithSchema for DataSourceState<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("ID of the alert contact"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "friendly_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the alert contact to look up"),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: type_description(),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "value" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("E-mail address, phone number or URL notified"),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Status of the alert contact"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("Look up an UptimeRobot alert contact by name"),
                ..Default::default()
            },
        }
    }
}
