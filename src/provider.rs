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

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use tf_provider::{map, AttributePath, Diagnostics, DynamicDataSource, DynamicResource, Provider};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{ValueEmpty, ValueString};

use crate::{
    account::AccountDataSource,
    alert_contact::{AlertContactDataSource, AlertContactResource},
    api::{Client, UptimeRobotApi},
    monitor::MonitorResource,
    status_page::StatusPageResource,
};

/// Environment variable read when the provider block has no `api_key`
pub const API_KEY_ENV: &str = "UPTIMEROBOT_API_KEY";

/// API client shared by the provider and every resource and data source
///
/// Resources are instantiated before the provider is configured, so the
/// client is installed afterwards by `configure`.
#[derive(Default, Clone)]
pub struct SharedApi(Arc<RwLock<Option<Arc<dyn UptimeRobotApi>>>>);

impl std::fmt::Debug for SharedApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configured = self.0.read().map(|api| api.is_some()).unwrap_or(false);
        f.debug_struct("SharedApi")
            .field("configured", &configured)
            .finish()
    }
}

impl SharedApi {
    pub fn new(api: Arc<dyn UptimeRobotApi>) -> Self {
        let shared = Self::default();
        shared.install(api);
        shared
    }

    pub fn install(&self, api: Arc<dyn UptimeRobotApi>) {
        match self.0.write() {
            Ok(mut slot) => *slot = Some(api),
            Err(poisoned) => *poisoned.into_inner() = Some(api),
        }
    }

    /// Get the configured client, or report that the provider is not configured
    pub fn get(&self, diags: &mut Diagnostics) -> Option<Arc<dyn UptimeRobotApi>> {
        let api = match self.0.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        if api.is_none() {
            diags.root_error(
                "Provider is not configured",
                "The UptimeRobot provider must be configured before managing resources",
            );
        }
        api
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub api_key: ValueString<'a>,
}

/// Pick the API key from the configuration, then from the environment
pub(crate) fn resolve_api_key(config: &ProviderConfig, env: Option<String>) -> Option<String> {
    match config.api_key.as_deref_option() {
        Some(api_key) => Some(api_key.to_owned()),
        None => env,
    }
    .filter(|api_key| !api_key.is_empty())
}

#[derive(Debug, Default, Clone)]
pub struct UptimeRobotProvider {
    api: SharedApi,
}

#[async_trait]
impl Provider for UptimeRobotProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "api_key" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "UptimeRobot main API key, defaults to the `{API_KEY_ENV}` environment variable"
                        )),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                },
                description: Description::plain("Manage UptimeRobot monitors, alert contacts and status pages"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        if config.api_key.as_deref_option() == Some("") {
            diags.error_short("`api_key` must not be empty", AttributePath::new("api_key"));
        }

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let Some(api_key) = resolve_api_key(&config, std::env::var(API_KEY_ENV).ok()) else {
            diags.error(
                "Missing UptimeRobot API key",
                format!("Set `api_key` in the provider block or the `{API_KEY_ENV}` environment variable"),
                AttributePath::new("api_key"),
            );
            return None;
        };

        match Client::new(&api_key) {
            Ok(client) => {
                info!(terraform_version, "UptimeRobot provider configured");
                self.api.install(Arc::new(client));
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to create the UptimeRobot client", err.to_string());
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn DynamicResource>>>
    {
        Some(map! {
            "monitor"       => MonitorResource::new(self.api.clone()),
            "alert_contact" => AlertContactResource::new(self.api.clone()),
            "status_page"   => StatusPageResource::new(self.api.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<
        std::collections::HashMap<String, Box<dyn DynamicDataSource>>,
    > {
        Some(map! {
            "account"       => AccountDataSource::new(self.api.clone()),
            "alert_contact" => AlertContactDataSource::new(self.api.clone()),
        })
    }
}
