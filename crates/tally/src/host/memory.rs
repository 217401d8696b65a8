// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

use log::{trace, warn};

use crate::host::Host;
use crate::markup;

/// A single element instance in a [`MemoryHost`] page.
///
/// Elements nested in a container's markup share the generation of that markup.
/// Once the container content is replaced, refs to the old elements are stale:
/// they no longer resolve, and clicking them does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef {
    id: String,
    generation: u64,
}

impl ElementRef {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// In-memory [`Host`].
///
/// The page is a flat list of containers, each holding a string of markup.
/// Elements inside that markup are only tracked by their `id` attributes, which
/// is enough to look them up and click them.
///
/// ```
/// # use tally::host::{Host, MemoryHost};
/// let host = MemoryHost::new().with_container("app");
/// let app = host.element_by_id("app").unwrap();
///
/// host.set_inner_html(&app, r#"<p>Hi</p><button id="go">Go</button>"#);
///
/// assert_eq!(host.text_content("app").as_deref(), Some("HiGo"));
/// assert_eq!(host.count_id("go"), 1);
/// ```
///
/// Cloning a `MemoryHost` clones a handle to the same page.
#[derive(Clone, Default)]
pub struct MemoryHost {
    page: Rc<RefCell<Page>>,
}

#[derive(Default)]
struct Page {
    containers: Vec<Container>,
    listeners: BTreeMap<u64, Slot>,
    next_generation: u64,
    next_listener: u64,
}

struct Container {
    id: String,
    /// Generation of the container element itself
    generation: u64,
    /// Generation of the elements currently inside it
    content: u64,
    html: String,
    ids: Vec<String>,
}

struct Slot {
    element: ElementRef,
    /// `None` while the handler is running
    handler: Option<Box<dyn FnMut()>>,
}

impl Page {
    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn find(&self, id: &str) -> Option<ElementRef> {
        if let Some(container) = self.containers.iter().find(|c| c.id == id) {
            return Some(ElementRef {
                id: container.id.clone(),
                generation: container.generation,
            });
        }

        self.containers
            .iter()
            .find(|c| c.ids.iter().any(|child| child == id))
            .map(|container| ElementRef {
                id: id.to_owned(),
                generation: container.content,
            })
    }

    fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    fn is_live(&self, element: &ElementRef) -> bool {
        self.find(&element.id).as_ref() == Some(element)
    }
}

impl MemoryHost {
    /// Create an empty page.
    pub fn new() -> Self {
        MemoryHost::default()
    }

    /// Builder variant of [`add_container`](MemoryHost::add_container).
    pub fn with_container(self, id: &str) -> Self {
        self.add_container(id);
        self
    }

    /// Add an empty top-level container with the given `id`, unless one exists already.
    pub fn add_container(&self, id: &str) {
        let mut page = self.page.borrow_mut();

        if page.container(id).is_some() {
            return;
        }

        let generation = page.next_generation();

        page.containers.push(Container {
            id: id.to_owned(),
            generation,
            content: generation,
            html: String::new(),
            ids: Vec::new(),
        });
    }

    /// Remove a top-level container along with everything inside it.
    pub fn remove_container(&self, id: &str) -> bool {
        let mut page = self.page.borrow_mut();
        let before = page.containers.len();

        page.containers.retain(|c| c.id != id);
        page.containers.len() != before
    }

    /// Markup currently inside the container `id`.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.page.borrow().container(id).map(|c| c.html.clone())
    }

    /// Text of the container `id` with all tags stripped, like the DOM `textContent`.
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.page
            .borrow()
            .container(id)
            .map(|c| strip_tags(&c.html))
    }

    /// Number of live elements with the given `id` anywhere on the page.
    pub fn count_id(&self, id: &str) -> usize {
        let page = self.page.borrow();

        page.containers
            .iter()
            .map(|c| (c.id == id) as usize + c.ids.iter().filter(|child| *child == id).count())
            .sum()
    }

    /// Number of registered click listeners, live or stale.
    pub fn listener_count(&self) -> usize {
        self.page.borrow().listeners.len()
    }

    /// Click the element currently carrying `id`. Returns the number of
    /// listeners that fired.
    pub fn click(&self, id: &str) -> usize {
        let element = self.page.borrow().find(id);

        match element {
            Some(element) => self.click_element(&element),
            None => {
                warn!("Clicked on missing element `#{id}`");
                0
            }
        }
    }

    /// Click a specific element instance. Stale instances don't fire anything.
    pub fn click_element(&self, element: &ElementRef) -> usize {
        let keys: Vec<u64> = {
            let page = self.page.borrow();

            if !page.is_live(element) {
                trace!("Ignoring click on stale element `#{}`", element.id);
                return 0;
            }

            page.listeners
                .iter()
                .filter(|(_, slot)| slot.element == *element)
                .map(|(key, _)| *key)
                .collect()
        };

        let mut fired = 0;

        for key in keys {
            // Handlers are free to touch the page, so the page can't stay
            // borrowed while they run.
            let handler = self
                .page
                .borrow_mut()
                .listeners
                .get_mut(&key)
                .and_then(|slot| slot.handler.take());

            let Some(mut handler) = handler else {
                continue;
            };

            handler();
            fired += 1;

            // Put it back unless the listener was dropped while it ran
            if let Some(slot) = self.page.borrow_mut().listeners.get_mut(&key) {
                slot.handler = Some(handler);
            }
        }

        fired
    }
}

impl Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page.borrow();

        f.debug_struct("MemoryHost")
            .field(
                "containers",
                &page.containers.iter().map(|c| &c.id).collect::<Vec<_>>(),
            )
            .field("listeners", &page.listeners.len())
            .finish()
    }
}

impl Host for MemoryHost {
    type Element = ElementRef;
    type Listener = MemoryListener;

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.page.borrow().find(id)
    }

    fn set_inner_html(&self, element: &ElementRef, html: &str) {
        let mut page = self.page.borrow_mut();
        let generation = page.next_generation();

        let container = page
            .containers
            .iter_mut()
            .find(|c| c.id == element.id && c.generation == element.generation);

        match container {
            Some(container) => {
                container.html = html.to_owned();
                container.ids = parse_ids(html);
                container.content = generation;
            }
            None => warn!(
                "Only top-level containers can be written to, ignoring write to `#{}`",
                element.id
            ),
        }
    }

    fn on_click<F>(&self, element: &ElementRef, handler: F) -> MemoryListener
    where
        F: FnMut() + 'static,
    {
        let mut page = self.page.borrow_mut();
        let key = page.next_listener;

        page.next_listener += 1;
        page.listeners.insert(
            key,
            Slot {
                element: element.clone(),
                handler: Some(Box::new(handler)),
            },
        );

        MemoryListener {
            page: Rc::downgrade(&self.page),
            key,
        }
    }
}

/// Click listener registered on a [`MemoryHost`]. Unregisters on drop.
pub struct MemoryListener {
    page: Weak<RefCell<Page>>,
    key: u64,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        let removed = self.page.upgrade().and_then(|page| {
            let mut page = page.try_borrow_mut().ok()?;

            page.listeners.remove(&self.key)
        });

        // The handler may own anything, drop it after the page is released
        drop(removed);
    }
}

fn parse_ids(html: &str) -> Vec<String> {
    const ATTR: &str = " id=\"";

    let mut ids = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(ATTR) {
        rest = &rest[start + ATTR.len()..];

        let Some(end) = rest.find('"') else {
            break;
        };

        ids.push(markup::unescape(&rest[..end]));
        rest = &rest[end + 1..];
    }

    ids
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);

        rest = match rest[open..].find('>') {
            Some(close) => &rest[open + close + 1..],
            None => "",
        };
    }

    text.push_str(rest);
    markup::unescape(&text)
}
