// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;

use tally::host::{Host, MemoryHost};
use tally::{markup, Config, Error, ViewState, Widget};

fn mount(message: &str, count: i64) -> (MemoryHost, Widget<MemoryHost>) {
    let host = MemoryHost::new().with_container("app");
    let widget = Widget::mount(
        host.clone(),
        Config::default(),
        ViewState::new(message, count),
    )
    .unwrap();

    (host, widget)
}

fn displayed(host: &MemoryHost) -> String {
    host.text_content("app").unwrap()
}

#[test]
fn hello_then_one_click() {
    let (host, _widget) = mount("Hello", 0);

    let text = displayed(&host);
    assert!(text.contains("Hello"));
    assert!(text.contains("Count: 0"));

    assert_eq!(host.click("inc"), 1);

    assert!(displayed(&host).contains("Count: 1"));
}

#[test]
fn five_then_two_clicks() {
    let (host, widget) = mount("Hello", 5);

    host.click("inc");
    host.click("inc");

    assert!(displayed(&host).contains("Count: 7"));
    assert_eq!(widget.state().unwrap(), ViewState::new("Hello", 7));
}

#[test]
fn old_button_instance_does_not_fire() {
    let (host, widget) = mount("Hello", 0);
    let first = host.element_by_id("inc").unwrap();

    host.click("inc");

    assert_eq!(host.click_element(&first), 0);
    assert_eq!(widget.state().unwrap().count, 1);
}

#[test]
fn missing_container_leaves_page_untouched() {
    let host = MemoryHost::new().with_container("elsewhere");
    let res = Widget::mount(host.clone(), Config::default(), ViewState::new("Hello", 0));

    assert_eq!(res.err(), Some(Error::ContainerMissing("app".into())));
    assert_eq!(host.inner_html("elsewhere").as_deref(), Some(""));
}

#[test]
fn custom_config() {
    let host = MemoryHost::new().with_container("counter");
    let config = Config::default()
        .with_container_id("counter")
        .with_control_id("plus")
        .with_label("+1");

    let _widget = Widget::mount(host.clone(), config, ViewState::new("Clicks", 0)).unwrap();

    assert_eq!(host.click("inc"), 0);
    assert_eq!(host.click("plus"), 1);
    assert_eq!(host.text_content("counter").as_deref(), Some("ClicksCount: 1+1"));
}

#[test]
fn markup_special_characters_survive_clicks() {
    let message = "<Tom> & \"Jerry\"";
    let (host, widget) = mount(message, 0);

    host.click("inc");

    assert!(displayed(&host).starts_with(message));
    assert_eq!(widget.state().unwrap().message, message);
}

#[test]
fn two_widgets_on_separate_containers() {
    let host = MemoryHost::new().with_container("a").with_container("b");

    let a = Widget::mount(
        host.clone(),
        Config::default().with_container_id("a").with_control_id("inc-a"),
        ViewState::new("A", 0),
    )
    .unwrap();
    let b = Widget::mount(
        host.clone(),
        Config::default().with_container_id("b").with_control_id("inc-b"),
        ViewState::new("B", 10),
    )
    .unwrap();

    host.click("inc-a");
    host.click("inc-b");
    host.click("inc-b");

    assert_eq!(a.state().unwrap().count, 1);
    assert_eq!(b.state().unwrap().count, 12);
}

proptest! {
    #[test]
    fn one_click_adds_one(count in any::<i64>().prop_filter("room to grow", |c| *c < i64::MAX)) {
        let (host, widget) = mount("Hello", count);

        host.click("inc");

        prop_assert_eq!(widget.state().unwrap().count, count + 1);
        prop_assert_eq!(
            host.inner_html("app"),
            Some(markup::fragment(&ViewState::new("Hello", count + 1), &Config::default()))
        );
    }

    #[test]
    fn n_clicks_add_n(count in -1000_i64..1000, clicks in 0_usize..50, message in ".*") {
        let (host, widget) = mount(&message, count);

        for _ in 0..clicks {
            prop_assert_eq!(host.click("inc"), 1);
        }

        let expected = ViewState::new(message.clone(), count + clicks as i64);

        prop_assert_eq!(widget.state().unwrap(), expected.clone());
        prop_assert_eq!(
            host.inner_html("app"),
            Some(markup::fragment(&expected, &Config::default()))
        );
    }

    #[test]
    fn exactly_one_control_after_any_render(clicks in 0_usize..20, renders in 0_usize..5) {
        let (host, widget) = mount("Hello", 0);

        for _ in 0..clicks {
            host.click("inc");
        }
        for _ in 0..renders {
            widget.render().unwrap();
        }

        prop_assert_eq!(host.count_id("inc"), 1);
        prop_assert_eq!(host.listener_count(), 1);
        prop_assert_eq!(
            host.inner_html("app").unwrap().matches("<button").count(),
            1
        );
    }

    #[test]
    fn clicking_never_changes_message(message in "\\PC*", clicks in 1_usize..10) {
        let (host, widget) = mount(&message, 0);

        for _ in 0..clicks {
            host.click("inc");
        }

        prop_assert_eq!(widget.state().unwrap().message, message);
    }
}
