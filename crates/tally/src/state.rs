// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # The state behind a counter widget
//!
//! A widget owns exactly one [`ViewState`]. The renderer and the click handler
//! both need to reach it, so it lives behind a [`Store`], a shared cell that
//! can be cheaply cloned into event listeners.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Error;

/// The values displayed by the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub message: String,
    pub count: i64,
}

impl ViewState {
    pub fn new<M>(message: M, count: i64) -> Self
    where
        M: Into<String>,
    {
        ViewState {
            message: message.into(),
            count,
        }
    }

    /// Bump the count by one. Saturates at [`i64::MAX`].
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

/// Shared, single-threaded handle to a [`ViewState`].
#[derive(Clone, Debug, Default)]
pub struct Store {
    inner: Rc<RefCell<ViewState>>,
}

impl Store {
    pub fn new(state: ViewState) -> Self {
        Store {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Clone out the current state.
    pub fn get(&self) -> Result<ViewState, Error> {
        self.with(ViewState::clone)
    }

    /// Read the state without cloning it.
    pub fn with<F, R>(&self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&ViewState) -> R,
    {
        let state = self.inner.try_borrow().map_err(|_| Error::StateBorrowed)?;

        Ok(f(&*state))
    }

    /// Mutate the state in place.
    ///
    /// ```
    /// # use tally::state::{Store, ViewState};
    /// let store = Store::new(ViewState::new("Hello", 5));
    ///
    /// store.update(|state| state.count += 2).unwrap();
    ///
    /// assert_eq!(store.get().unwrap().count, 7);
    /// ```
    pub fn update<F, R>(&self, mutator: F) -> Result<R, Error>
    where
        F: FnOnce(&mut ViewState) -> R,
    {
        let mut state = self
            .inner
            .try_borrow_mut()
            .map_err(|_| Error::StateBorrowed)?;

        Ok(mutator(&mut *state))
    }
}

impl From<ViewState> for Store {
    fn from(state: ViewState) -> Self {
        Store::new(state)
    }
}
