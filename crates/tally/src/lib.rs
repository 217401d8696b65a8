// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tally
//!
//! _A single counter widget for the web._
//!
//! The widget displays a message and a count, and increments the count when its
//! button is clicked. There is no diffing here: every render replaces the whole
//! content of the container element and binds a fresh click listener to the new
//! button.
//!
//! ### Example
//!
//! In the browser, mount the widget into `<div id="app">`:
//!
//! ```no_run
//! use tally::ViewState;
//!
//! fn main() -> Result<(), tally::Error> {
//!     tally::start(ViewState::new("Hello", 0))
//! }
//! ```
//!
//! Anywhere else, or when you want to own the widget, pick a [`Host`](host::Host)
//! and use a [`Widget`] directly:
//!
//! ```
//! use tally::host::MemoryHost;
//! use tally::{Config, ViewState, Widget};
//!
//! let host = MemoryHost::new().with_container("app");
//! let widget = Widget::mount(host.clone(), Config::default(), ViewState::new("Hello", 5))?;
//!
//! host.click("inc");
//! host.click("inc");
//!
//! assert_eq!(widget.state()?.count, 7);
//! assert!(host.text_content("app").unwrap().contains("Count: 7"));
//! # Ok::<(), tally::Error>(())
//! ```
//!
//! The message is rendered as text, not markup: characters like `<` and `&`
//! show up on the page exactly as they are in [`ViewState::message`].
//!
//! ### Features
//!
//! * `serde`: derive `Serialize` and `Deserialize` for [`ViewState`].
//! * `rlsf`: use a small TLSF global allocator on Wasm.

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod config;
pub mod host;
pub mod markup;
pub mod state;
pub mod widget;

mod error;

pub use config::Config;
pub use error::Error;
pub use state::{Store, ViewState};
pub use widget::Widget;

use host::DomHost;

/// Mount the counter into the `<div id="app">` of the current document and keep
/// it alive for the lifetime of the page.
pub fn start(state: ViewState) -> Result<(), Error> {
    start_with(Config::default(), state)
}

/// Same as [`start`], with a custom [`Config`].
pub fn start_with(config: Config, state: ViewState) -> Result<(), Error> {
    init_panic_hook();

    Widget::mount(DomHost::new()?, config, state)?.keep_alive();

    Ok(())
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    {
        use std::cell::Cell;

        thread_local! {
            static INIT: Cell<bool> = const { Cell::new(false) };
        }
        if !INIT.with(|init| init.get()) {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));

            INIT.with(|init| init.set(true));
        }
    }
}
