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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tf_provider::{map, DataSource, Diagnostics};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{Value, ValueEmpty, ValueNumber, ValueString};

use crate::api::Account;
use crate::provider::SharedApi;
use crate::utils::{api_error, WithSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountState<'a> {
    #[serde(borrow = "'a")]
    pub id: ValueString<'a>,
    pub email: ValueString<'a>,
    pub monitor_limit: ValueNumber,
    pub monitor_interval: ValueNumber,
    pub up_monitors: ValueNumber,
    pub down_monitors: ValueNumber,
    pub paused_monitors: ValueNumber,
}

impl From<Account> for AccountState<'_> {
    fn from(account: Account) -> Self {
        Self {
            id: ValueString::from(account.email.clone()),
            email: ValueString::from(account.email),
            monitor_limit: Value::Value(account.monitor_limit),
            monitor_interval: Value::Value(account.monitor_interval),
            up_monitors: Value::Value(account.up_monitors),
            down_monitors: Value::Value(account.down_monitors),
            paused_monitors: Value::Value(account.paused_monitors),
        }
    }
}

impl WithSchema for AccountState<'_> {
    fn schema() -> Schema {
        let number = |description: &str| Attribute {
            attr_type: AttributeType::Number,
            description: Description::plain(description),
            constraint: AttributeConstraint::Computed,
            ..Default::default()
        };
        let string = |description: &str| Attribute {
            attr_type: AttributeType::String,
            description: Description::plain(description),
            constraint: AttributeConstraint::Computed,
            ..Default::default()
        };
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "id" => string("E-mail of the account"),
                    "email" => string("E-mail of the account"),
                    "monitor_limit" => number("Maximum number of monitors"),
                    "monitor_interval" => number("Minimum monitoring interval, in minutes"),
                    "up_monitors" => number("Number of monitors currently up"),
                    "down_monitors" => number("Number of monitors currently down"),
                    "paused_monitors" => number("Number of paused monitors"),
                },
                description: Description::plain("Details of the UptimeRobot account owning the API key"),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AccountDataSource {
    api: SharedApi,
}

impl AccountDataSource {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for AccountDataSource {
    type State<'a> = AccountState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(AccountState::schema())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags)?;

        match api.get_account_details().await {
            Ok(account) => {
                debug!(monitor_limit = account.monitor_limit, "fetched account details");
                Some(account.into())
            }
            Err(err) => {
                api_error(diags, "Failed to read account details", err);
                None
            }
        }
    }
}
