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
use tracing::debug;

use tf_provider::{AttributePath, DataSource, Diagnostics};
use tf_provider::schema::Schema;
use tf_provider::value::ValueEmpty;

use crate::provider::SharedApi;
use crate::utils::{api_error, text, WithSchema};

use super::state::DataSourceState;

/// Look up an existing alert contact by its friendly name
#[derive(Debug, Default, Clone)]
pub struct AlertContactDataSource {
    api: SharedApi,
}

impl AlertContactDataSource {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for AlertContactDataSource {
    type State<'a> = DataSourceState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(DataSourceState::schema())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let name = text(&config.friendly_name).unwrap_or_default();
        let api = self.api.get(diags)?;

        let contacts = match api.get_alert_contacts().await {
            Ok(contacts) => contacts,
            Err(err) => {
                api_error(diags, "Failed to list alert contacts", err);
                return None;
            }
        };
        debug!(count = contacts.len(), name = %name, "looking up alert contact");

        let found = if name.is_empty() {
            None
        } else {
            contacts
                .into_iter()
                .find(|contact| contact.friendly_name == name)
        };

        match found {
            Some(contact) => Some(contact.into()),
            None => {
                diags.error(
                    "Alert contact not found",
                    format!("failed to find alert contact by name {name}"),
                    AttributePath::new("friendly_name"),
                );
                None
            }
        }
    }
}
