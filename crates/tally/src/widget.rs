// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # The render/update loop
//!
//! Every render throws away the previous content of the container and writes a
//! fresh [markup fragment](crate::markup::fragment). That destroys the increment
//! button along with its click listener, so the listener is bound again to the
//! new button each time:
//!
//! ```text
//! render ─> waiting for click ─(click)─> count += 1 ─> render ─> ...
//! ```

use std::cell::RefCell;
use std::mem::ManuallyDrop;
use std::rc::{Rc, Weak};

use log::{debug, error, trace, warn};

use crate::config::Config;
use crate::host::Host;
use crate::markup;
use crate::state::{Store, ViewState};
use crate::Error;

/// A counter widget that owns its state and renders into a [`Host`].
///
/// ```
/// # use tally::{Config, ViewState, Widget};
/// # use tally::host::MemoryHost;
/// let host = MemoryHost::new().with_container("app");
/// let widget = Widget::mount(host.clone(), Config::default(), ViewState::new("Hello", 0))?;
///
/// host.click("inc");
///
/// assert_eq!(widget.state()?.count, 1);
/// assert!(host.text_content("app").unwrap().contains("Count: 1"));
/// # Ok::<(), tally::Error>(())
/// ```
pub struct Widget<H: Host> {
    inner: Rc<Inner<H>>,
}

struct Inner<H: Host> {
    host: H,
    config: Config,
    store: Store,
    /// Listener bound to the current increment button
    listener: RefCell<Option<H::Listener>>,
}

impl<H: Host> Widget<H> {
    /// Create a widget without rendering it.
    pub fn new(host: H, config: Config, state: ViewState) -> Self {
        Widget {
            inner: Rc::new(Inner {
                host,
                config,
                store: Store::new(state),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Create a widget and render it for the first time.
    pub fn mount(host: H, config: Config, state: ViewState) -> Result<Self, Error> {
        let widget = Widget::new(host, config, state);

        widget.render()?;

        Ok(widget)
    }

    /// Replace the content of the container with the current state, and bind
    /// the click listener to the new increment button.
    pub fn render(&self) -> Result<(), Error> {
        self.inner.render()
    }

    /// Do what a click on the increment button does: bump the count and render.
    pub fn increment(&self) -> Result<(), Error> {
        self.update(ViewState::increment)
    }

    /// Mutate the state and render.
    pub fn update<F>(&self, mutator: F) -> Result<(), Error>
    where
        F: FnOnce(&mut ViewState),
    {
        self.inner.store.update(mutator)?;
        self.render()
    }

    /// Snapshot of the current state. Fails with [`Error::StateBorrowed`] when
    /// called from inside [`update`](Widget::update).
    pub fn state(&self) -> Result<ViewState, Error> {
        self.inner.store.get()
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Keep the widget, and with it its click listener, alive until the page
    /// goes away.
    pub fn keep_alive(self) {
        let _ = ManuallyDrop::new(self);
    }
}

impl<H: Host> Inner<H> {
    fn render(self: &Rc<Self>) -> Result<(), Error> {
        let host = &self.host;
        let config = &self.config;

        let container = host
            .element_by_id(config.container_id())
            .ok_or_else(|| Error::ContainerMissing(config.container_id().to_owned()))?;

        let (html, count) = self
            .store
            .with(|state| (markup::fragment(state, config), state.count))?;

        host.set_inner_html(&container, &html);

        // The old button is gone, and its listener with it
        drop(self.listener.take());

        let control = host
            .element_by_id(config.control_id())
            .ok_or_else(|| Error::ControlMissing(config.control_id().to_owned()))?;

        let widget = Rc::downgrade(self);
        let listener = host.on_click(&control, move || on_click(&widget));

        trace!("Bound click listener to `#{}`", config.control_id());

        *self.listener.borrow_mut() = Some(listener);

        debug!("Rendered `#{}` with count {count}", config.container_id());

        Ok(())
    }
}

fn on_click<H: Host>(widget: &Weak<Inner<H>>) {
    let Some(inner) = widget.upgrade() else {
        warn!("Click on a counter widget that was already dropped");
        return;
    };

    let res = inner
        .store
        .update(ViewState::increment)
        .and_then(|()| inner.render());

    if let Err(err) = res {
        error!("Failed to update counter: {err}");
    }
}
