// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error type returned by [`Widget`](crate::Widget) operations and the
/// [`start`](crate::start) functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The container element was not found in the page. Nothing was rendered.
    #[error("Container element `#{0}` not found")]
    ContainerMissing(String),

    /// The markup was written, but the increment control could not be found in it.
    #[error("Increment control `#{0}` not found after render")]
    ControlMissing(String),

    /// There is no `window` or `document` to render into.
    #[error("No document available, is this running in a browser?")]
    NoDocument,

    /// Attempted to touch the state while it is borrowed for another update.
    #[error("Cycle detected: Attempting to update state during an ongoing update")]
    StateBorrowed,
}
