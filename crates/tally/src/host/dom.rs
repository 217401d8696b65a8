// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::host::Host;
use crate::Error;

/// [`Host`] backed by the browser document.
#[derive(Clone, Debug)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Use the document of the current `window`.
    ///
    /// Returns [`Error::NoDocument`] in a Wasm context without a `window` or
    /// `document`, such as a worker. Only usable on `wasm32` targets: anywhere
    /// else `web-sys` itself panics on the first call.
    pub fn new() -> Result<Self, Error> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::NoDocument)?;

        Ok(DomHost { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for DomHost {
    fn from(document: Document) -> Self {
        DomHost { document }
    }
}

impl Host for DomHost {
    type Element = Element;
    type Listener = EventListener;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn on_click<F>(&self, element: &Element, mut handler: F) -> EventListener
    where
        F: FnMut() + 'static,
    {
        EventListener::new(element, "click", move |_| handler())
    }
}
