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

use tf_provider::value::Value;

use super::state::{MonitorState, DEFAULT_INTERVAL};

impl MonitorState<'_> {
    /// Fill the defaults of the attributes left null by the configuration
    pub(super) fn normalize(&mut self, config: &MonitorState) {
        if config.interval.is_null() {
            self.interval = Value::Value(DEFAULT_INTERVAL);
        }
        if config.ignore_ssl_errors.is_null() {
            self.ignore_ssl_errors = Value::Value(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_null_config() {
        let mut state = MonitorState {
            interval: Value::Value(600),
            ..Default::default()
        };
        state.normalize(&MonitorState::default());

        assert_eq!(state.interval, Value::Value(300));
        assert_eq!(state.ignore_ssl_errors, Value::Value(false));
    }

    #[test]
    fn configured_values_are_kept() {
        let config = MonitorState {
            interval: Value::Value(60),
            ignore_ssl_errors: Value::Unknown,
            ..Default::default()
        };
        let mut state = config.clone();
        state.normalize(&config);

        assert_eq!(state.interval, Value::Value(60));
        assert_eq!(state.ignore_ssl_errors, Value::Unknown);
    }
}
