// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Where the widget mounts and how its control is labeled.

use std::borrow::Cow;

/// Widget configuration. The defaults match a page with a `<div id="app">`.
///
/// ```
/// # use tally::Config;
/// let config = Config::default()
///     .with_container_id("counter")
///     .with_label("+1");
///
/// assert_eq!(config.container_id(), "counter");
/// assert_eq!(config.control_id(), "inc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    container_id: Cow<'static, str>,
    control_id: Cow<'static, str>,
    label: Cow<'static, str>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            container_id: Cow::Borrowed("app"),
            control_id: Cow::Borrowed("inc"),
            label: Cow::Borrowed("Increment"),
        }
    }
}

impl Config {
    /// Id of the element whose content the widget owns.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Id given to the increment button on every render.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_container_id<S>(mut self, id: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.container_id = id.into();
        self
    }

    pub fn with_control_id<S>(mut self, id: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.control_id = id.into();
        self
    }

    pub fn with_label<S>(mut self, label: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.label = label.into();
        self
    }
}
