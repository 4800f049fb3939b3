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

use crate::api::model::ALERT_CONTACT_TYPE;
use crate::provider::SharedApi;
use crate::utils::{api_error, known, parse_id, validate_enum, WithSchema};

use super::state::ResourceState;

#[derive(Debug, Default, Clone)]
pub struct AlertContactResource {
    api: SharedApi,
}

impl AlertContactResource {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resource for AlertContactResource {
    type State<'a> = Value<ResourceState<'a>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ResourceState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(config) = &config {
            validate_enum(
                diags,
                &config.contact_type,
                &ALERT_CONTACT_TYPE,
                AttributePath::new("type"),
            );
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
        parse_id(diags, &state.id)?;
        let api = self.api.get(diags)?;

        match api.get_alert_contact(&state.id).await {
            Ok(contact) => {
                state.refresh(contact);
                Some((Value::Value(state), private_state))
            }
            Err(err) if err.is_not_found() => {
                warn!(id = %state.id, "alert contact does not exist anymore, removing it from the state");
                Some((Value::Null, private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to read alert contact", err);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = known(diags, proposed_state)?;
        state.id = ValueString::Unknown;
        state.status = ValueString::Unknown;

        Some((Value::Value(state), Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>, Vec<AttributePath>)> {
        let prior = known(diags, prior_state)?;
        let mut state = known(diags, proposed_state)?;
        state.id = prior.id.clone();
        state.status = prior.status.clone();

        let mut trigger_replace = Vec::new();
        if state.contact_type != prior.contact_type {
            trigger_replace.push(AttributePath::new("type"));
        }
        if state != prior {
            state.status = ValueString::Unknown;
        }

        Some((Value::Value(state), prior_private_state, trigger_replace))
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

        match api.create_alert_contact(&state.to_params()).await {
            Ok(contact) => {
                info!(id = %contact.id, "alert contact created");
                state.id = ValueString::from(contact.id);
                state.status = ValueString::from(contact.status);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to create alert contact", err);
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
        parse_id(diags, &prior.id)?;
        let api = self.api.get(diags)?;

        match api.update_alert_contact(&prior.id, &state.to_params()).await {
            Ok(contact) => {
                info!(id = %contact.id, "alert contact updated");
                state.id = prior.id;
                state.status = ValueString::from(contact.status);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to update alert contact", err);
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
        parse_id(diags, &prior.id)?;
        let api = self.api.get(diags)?;

        match api.delete_alert_contact(&prior.id).await {
            Ok(()) => {
                info!(id = %prior.id, "alert contact deleted");
                Some(())
            }
            Err(err) => {
                api_error(diags, "Failed to delete alert contact", err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = ResourceState {
            id: ValueString::from(id),
            ..Default::default()
        };
        parse_id(diags, &state.id)?;

        Some((Value::Value(state), Default::default()))
    }
}
