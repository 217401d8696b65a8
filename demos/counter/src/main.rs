// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tally::ViewState;
use wasm_bindgen::UnwrapThrowExt;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    tally::start(ViewState::new("Hello", 0)).unwrap_throw();
}
