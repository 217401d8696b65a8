// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # The page a widget renders into
//!
//! A [`Widget`](crate::Widget) needs exactly three things from its environment:
//! finding an element by id, replacing an element's content with markup, and
//! being told when an element is clicked. The [`Host`] trait captures those.
//!
//! * [`DomHost`] renders into the browser `document`.
//! * [`MemoryHost`] keeps the page in memory. It is what the tests use, and
//!   works anywhere Rust does.

mod dom;
mod memory;

pub use dom::DomHost;
pub use memory::{ElementRef, MemoryHost, MemoryListener};

/// Environment capable of hosting a widget.
pub trait Host: 'static {
    /// Reference to a single element instance. Replacing the content of a parent
    /// destroys the instances inside it, lookups after that yield new ones.
    type Element;

    /// Guard for a registered click callback. Dropping it unregisters the callback.
    type Listener: 'static;

    /// Find an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Replace all children of `element` with the parsed `html`.
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Invoke `handler` every time `element` is clicked, for as long as the
    /// returned listener is alive.
    fn on_click<F>(&self, element: &Self::Element, handler: F) -> Self::Listener
    where
        F: FnMut() + 'static;
}
