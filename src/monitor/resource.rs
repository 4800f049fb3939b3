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
use tracing::{debug, info, warn};

use tf_provider::{AttributePath, Diagnostics, Resource};
use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueEmpty, ValueString};

use crate::provider::SharedApi;
use crate::utils::{api_error, known, parse_id, WithSchema};

use super::state::MonitorState;
use super::validate::validate_config;

#[derive(Debug, Default, Clone)]
pub struct MonitorResource {
    api: SharedApi,
}

impl MonitorResource {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resource for MonitorResource {
    type State<'a> = Value<MonitorState<'a>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(MonitorState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        validate_config(diags, &config);

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

        match api.get_monitor(id).await {
            Ok(monitor) => {
                state.refresh(monitor);
                Some((Value::Value(state), private_state))
            }
            Err(err) if err.is_not_found() => {
                warn!(id, "monitor does not exist anymore, removing it from the state");
                Some((Value::Null, private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to read monitor", err);
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
        let config = config_state.unwrap_or_default();
        state.normalize(&config);
        state.id = ValueString::Unknown;
        state.status = ValueString::Unknown;

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
        let config = config_state.unwrap_or_default();
        state.normalize(&config);
        state.id = prior.id.clone();
        state.status = prior.status.clone();

        let mut trigger_replace = Vec::new();
        if state.monitor_type != prior.monitor_type {
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

        debug!(friendly_name = %state.friendly_name, "creating monitor");
        match api.create_monitor(&state.to_params()).await {
            Ok(monitor) => {
                info!(id = monitor.id, "monitor created");
                state.id = ValueString::from(monitor.id.to_string());
                state.status = ValueString::from(monitor.status);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to create monitor", err);
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

        match api.update_monitor(id, &state.to_params()).await {
            Ok(monitor) => {
                info!(id, "monitor updated");
                state.id = prior.id;
                state.status = ValueString::from(monitor.status);
                Some((Value::Value(state), planned_private_state))
            }
            Err(err) => {
                api_error(diags, "Failed to update monitor", err);
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

        match api.delete_monitor(id).await {
            Ok(()) => {
                info!(id, "monitor deleted");
                Some(())
            }
            Err(err) => {
                api_error(diags, "Failed to delete monitor", err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = MonitorState {
            id: ValueString::from(id),
            ..Default::default()
        };
        parse_id(diags, &state.id)?;

        Some((Value::Value(state), Default::default()))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::sync::Arc;

    use crate::api::fake::FakeApi;
    use crate::api::Monitor;
    use crate::monitor::state::AlertContactBlock;

    use super::*;

    fn resource() -> (Arc<FakeApi>, MonitorResource) {
        let fake = Arc::new(FakeApi::default());
        let resource = MonitorResource::new(SharedApi::new(fake.clone()));
        (fake, resource)
    }

    fn config() -> MonitorState<'static> {
        MonitorState {
            friendly_name: ValueString::from("Example"),
            url: ValueString::from("https://example.com"),
            monitor_type: ValueString::from("http"),
            ..Default::default()
        }
    }

    fn id_of(state: &MonitorState) -> i64 {
        state.id.as_deref_option().unwrap().parse().unwrap()
    }

    async fn create(
        resource: &MonitorResource,
        config: MonitorState<'static>,
    ) -> MonitorState<'static> {
        let mut diags = Diagnostics::default();
        let (planned, private) = resource
            .plan_create(
                &mut diags,
                Value::Value(config.clone()),
                Value::Value(config.clone()),
                ValueEmpty::Null,
            )
            .await
            .unwrap();
        let (state, _) = resource
            .create(
                &mut diags,
                planned,
                Value::Value(config),
                private,
                ValueEmpty::Null,
            )
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        state.unwrap()
    }

    #[tokio::test]
    async fn plan_create_applies_defaults() {
        let (_, resource) = resource();
        let mut diags = Diagnostics::default();
        let (planned, _) = resource
            .plan_create(
                &mut diags,
                Value::Value(config()),
                Value::Value(config()),
                ValueEmpty::Null,
            )
            .await
            .unwrap();
        let planned = planned.unwrap();

        assert!(planned.id.is_unknown());
        assert!(planned.status.is_unknown());
        assert_eq!(planned.interval, Value::Value(300));
        assert_eq!(planned.ignore_ssl_errors, Value::Value(false));
        assert_eq!(planned.http_method, ValueString::Null);
    }

    #[tokio::test]
    async fn create_stores_id_and_status() {
        let (fake, resource) = resource();
        let state = create(&resource, config()).await;

        let id = id_of(&state);
        assert_eq!(state.status.as_deref_option(), Some("not checked yet"));

        let params = fake.last_monitor_params().unwrap();
        assert_eq!(params.http_method.as_deref(), Some("GET"));
        assert_eq!(params.interval, Some(300));
        assert_eq!(fake.monitor(id).unwrap().friendly_name, "Example");
    }

    #[tokio::test]
    async fn read_reconciles_remote_changes() {
        let (fake, resource) = resource();
        let state = create(&resource, config()).await;
        let id = id_of(&state);

        let mut remote = fake.monitor(id).unwrap();
        remote.friendly_name = "Renamed".to_owned();
        remote.status = "down".to_owned();
        fake.insert_monitor(remote);

        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .read(&mut diags, Value::Value(state), ValueEmpty::Null, ValueEmpty::Null)
            .await
            .unwrap();
        let state = state.unwrap();

        assert_eq!(state.friendly_name.as_deref_option(), Some("Renamed"));
        assert_eq!(state.status.as_deref_option(), Some("down"));
        assert_eq!(state.interval, Value::Value(300));
    }

    #[tokio::test]
    async fn read_missing_monitor_clears_state() {
        let (fake, resource) = resource();
        let state = create(&resource, config()).await;
        fake.remove_monitor(id_of(&state));

        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .read(&mut diags, Value::Value(state), ValueEmpty::Null, ValueEmpty::Null)
            .await
            .unwrap();

        assert!(state.is_null());
        assert!(diags.errors.is_empty());
    }

    #[tokio::test]
    async fn read_with_invalid_id_fails() {
        let (_, resource) = resource();
        let state = MonitorState {
            id: ValueString::from("not-a-number"),
            ..config()
        };

        let mut diags = Diagnostics::default();
        let result = resource
            .read(&mut diags, Value::Value(state), ValueEmpty::Null, ValueEmpty::Null)
            .await;

        assert!(result.is_none());
        assert_eq!(diags.errors[0].attribute, AttributePath::new("id"));
    }

    #[tokio::test]
    async fn plan_update_replaces_on_type_change() {
        let (_, resource) = resource();
        let prior = create(&resource, config()).await;

        let proposed = MonitorState {
            monitor_type: ValueString::from("ping"),
            ..prior.clone()
        };
        let mut diags = Diagnostics::default();
        let (planned, _, replace) = resource
            .plan_update(
                &mut diags,
                Value::Value(prior.clone()),
                Value::Value(proposed.clone()),
                Value::Value(proposed),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await
            .unwrap();

        assert_eq!(replace, vec![AttributePath::new("type")]);
        let planned = planned.unwrap();
        assert_eq!(planned.id, prior.id);
        assert!(planned.status.is_unknown());
    }

    #[tokio::test]
    async fn plan_update_without_change_keeps_status() {
        let (_, resource) = resource();
        let prior = create(&resource, config()).await;

        let mut diags = Diagnostics::default();
        let (planned, _, replace) = resource
            .plan_update(
                &mut diags,
                Value::Value(prior.clone()),
                Value::Value(prior.clone()),
                Value::Value(config()),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await
            .unwrap();

        assert!(replace.is_empty());
        assert_eq!(planned, Value::Value(prior));
    }

    #[tokio::test]
    async fn update_sends_new_values() {
        let (fake, resource) = resource();
        let prior = create(&resource, config()).await;
        let planned = MonitorState {
            friendly_name: ValueString::from("Updated"),
            interval: Value::Value(60),
            status: ValueString::Unknown,
            ..prior.clone()
        };

        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .update(
                &mut diags,
                Value::Value(prior.clone()),
                Value::Value(planned.clone()),
                Value::Value(planned),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await
            .unwrap();
        let state = state.unwrap();

        assert_eq!(state.id, prior.id);
        assert_eq!(state.status.as_deref_option(), Some("not checked yet"));
        let params = fake.last_monitor_params().unwrap();
        assert_eq!(params.friendly_name, "Updated");
        assert_eq!(params.interval, Some(60));
    }

    #[tokio::test]
    async fn update_clears_removed_contacts_and_headers() {
        let (fake, resource) = resource();
        let prior = create(
            &resource,
            MonitorState {
                alert_contact: Value::Value(vec![Value::Value(AlertContactBlock {
                    id: ValueString::from("123"),
                    threshold: Value::Null,
                    recurrence: Value::Null,
                })]),
                custom_http_headers: Value::Value(
                    [(Cow::from("X-Api-Key"), ValueString::from("abc"))]
                        .into_iter()
                        .collect(),
                ),
                http_username: ValueString::from("admin"),
                ..config()
            },
        )
        .await;
        let id = id_of(&prior);
        assert_eq!(fake.monitor(id).unwrap().alert_contacts.len(), 1);
        assert_eq!(fake.monitor(id).unwrap().custom_http_headers.len(), 1);

        let planned = MonitorState {
            alert_contact: Value::Value(vec![]),
            custom_http_headers: Value::Value(Default::default()),
            http_username: ValueString::Null,
            status: ValueString::Unknown,
            ..prior.clone()
        };
        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .update(
                &mut diags,
                Value::Value(prior),
                Value::Value(planned.clone()),
                Value::Value(planned),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await
            .unwrap();
        let (state, _) = resource
            .read(&mut diags, state, ValueEmpty::Null, ValueEmpty::Null)
            .await
            .unwrap();
        let state = state.unwrap();

        assert!(diags.errors.is_empty());
        let remote = fake.monitor(id).unwrap();
        assert!(remote.alert_contacts.is_empty());
        assert!(remote.custom_http_headers.is_empty());
        assert_eq!(remote.http_username, None);
        assert_eq!(state.alert_contact, Value::Value(vec![]));
        assert_eq!(state.custom_http_headers, Value::Value(Default::default()));
        assert_eq!(state.http_username, ValueString::Null);
    }

    #[tokio::test]
    async fn destroy_deletes_monitor() {
        let (fake, resource) = resource();
        let state = create(&resource, config()).await;
        let id = id_of(&state);

        let mut diags = Diagnostics::default();
        resource
            .destroy(
                &mut diags,
                Value::Value(state),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await
            .unwrap();

        assert!(fake.monitor(id).is_none());
    }

    #[tokio::test]
    async fn import_then_read() {
        let (fake, resource) = resource();
        fake.insert_monitor(Monitor {
            id: 4242,
            friendly_name: "Imported".to_owned(),
            url: "example.org".to_owned(),
            monitor_type: "ping".to_owned(),
            interval: Some(900),
            status: "up".to_owned(),
            ..Default::default()
        });

        let mut diags = Diagnostics::default();
        let (state, private) = resource
            .import(&mut diags, "4242".to_owned())
            .await
            .unwrap();
        let (state, _) = resource
            .read(&mut diags, state, private, ValueEmpty::Null)
            .await
            .unwrap();
        let state = state.unwrap();

        assert_eq!(state.id.as_deref_option(), Some("4242"));
        assert_eq!(state.monitor_type.as_deref_option(), Some("ping"));
        assert_eq!(state.interval, Value::Value(900));
        assert_eq!(state.status.as_deref_option(), Some("up"));
    }

    #[tokio::test]
    async fn import_rejects_invalid_id() {
        let (_, resource) = resource();
        let mut diags = Diagnostics::default();
        let result = resource.import(&mut diags, "monitor-1".to_owned()).await;

        assert!(result.is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn unconfigured_provider_reports_error() {
        let resource = MonitorResource::default();
        let mut diags = Diagnostics::default();
        let result = resource
            .destroy(
                &mut diags,
                Value::Value(MonitorState {
                    id: ValueString::from("1"),
                    ..config()
                }),
                ValueEmpty::Null,
                ValueEmpty::Null,
            )
            .await;

        assert!(result.is_none());
        assert_eq!(diags.errors[0].summary, "Provider is not configured");
    }
}
