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
use tracing::{info, warn};

use tf_provider::{AttributePath, Diagnostics, Resource};
use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueEmpty, ValueString};

use crate::api::StatusPage;
use crate::provider::SharedApi;
use crate::utils::{api_error, known, parse_id, WithSchema, WithValidate};

use super::state::{StatusPageState, DEFAULT_STATUS, DNS_ADDRESS};

#[derive(Debug, Default, Clone)]
pub struct StatusPageResource {
    api: SharedApi,
}

impl StatusPageResource {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

impl StatusPageState<'_> {
    fn normalize(&mut self, config: &StatusPageState) {
        if config.status.is_null() {
            self.status = ValueString::from(DEFAULT_STATUS);
        }
        self.dns_address = ValueString::from(DNS_ADDRESS);
    }

    fn set_computed(&mut self, page: StatusPage) {
        self.id = ValueString::from(page.id.to_string());
        self.standard_url = ValueString::from(page.standard_url);
        self.custom_url = ValueString::from(page.custom_url);
    }
}

#[async_trait]
impl Resource for StatusPageResource {
    type State<'a> = Value<StatusPageState<'a>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(StatusPageState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(config) = &config {
            config.validate(diags, AttributePath::default());
        }

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = match state {
            Value::Value(state) => state,
            state => return Some((state, private_state)),
        };
        let id = parse_id(diags, &state.id)?;
        let api = self.api.get(diags)?;

        match api.get_status_page(id).await {
            Ok(page) => {
                state.refresh(page);
                Some((Value::Value(state), private_state))
            }
            Err(err) if err.is_not_found() => {
                warn!(id, "status page does not exist anymore, removing it from the state");
                Some((Value::Null, private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to read status page", err);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = known(diags, proposed_state)?;
        state.normalize(&config_state.unwrap_or_default());
        state.id = ValueString::Unknown;
        state.standard_url = ValueString::Unknown;
        state.custom_url = ValueString::Unknown;

        Some((Value::Value(state), Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>, Vec<AttributePath>)> {
        let prior = known(diags, prior_state)?;
        let mut state = known(diags, proposed_state)?;
        state.normalize(&config_state.unwrap_or_default());
        state.id = prior.id.clone();
        state.standard_url = prior.standard_url.clone();
        state.custom_url = if state.custom_domain == prior.custom_domain {
            prior.custom_url.clone()
        } else {
            ValueString::Unknown
        };

        Some((Value::Value(state), prior_private_state, vec![]))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = known(diags, planned_state)?;
        let api = self.api.get(diags)?;

        match api.create_status_page(&state.to_params()).await {
            Ok(page) => {
                info!(id = page.id, "status page created");
                state.set_computed(page);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to create status page", err);
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let prior = known(diags, prior_state)?;
        let mut state = known(diags, planned_state)?;
        let id = parse_id(diags, &prior.id)?;
        let api = self.api.get(diags)?;

        match api.update_status_page(id, &state.to_params()).await {
            Ok(page) => {
                info!(id, "status page updated");
                state.set_computed(page);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to update status page", err);
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let prior = known(diags, prior_state)?;
        let id = parse_id(diags, &prior.id)?;
        let api = self.api.get(diags)?;

        match api.delete_status_page(id).await {
            Ok(()) => {
                info!(id, "status page deleted");
                Some(())
            }
            Err(err) => {
                api_error(diags, "Failed to delete status page", err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = StatusPageState {
            id: ValueString::from(id),
            ..Default::default()
        };
        parse_id(diags, &state.id)?;

        Some((Value::Value(state), Default::default()))
    }
}
