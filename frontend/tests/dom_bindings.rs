#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use investza_frontend::dom::layout::LayoutElements;
use investza_frontend::dom::media::VideoPair;
use investza_frontend::dom::scroller::SmoothScroller;
use investza_frontend::motion::choreography::{compose_frame, FounderPhase, PageGeometry, SectionBox};
use investza_frontend::motion::crossfade::{VideoCommand, VideoSlot};
use investza_frontend::motion::smooth_scroll::{ScrollEvent, ScrollOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, HtmlElement, HtmlVideoElement, WheelEvent, WheelEventInit};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn element(style: &str) -> HtmlElement {
    let document = window().unwrap().document().unwrap();
    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn geometry() -> PageGeometry {
    PageGeometry {
        viewport_height: 800.0,
        hero: Some(SectionBox::new(0.0, 800.0)),
        ..PageGeometry::default()
    }
}

#[wasm_bindgen_test]
fn header_classes_follow_the_scroll() {
    let header = element("");
    let overlay = element("");
    let widget = element("");
    let elements = LayoutElements {
        header: Some(header.clone()),
        video_overlay: Some(overlay.clone()),
        download_widget: Some(widget.clone()),
        ..LayoutElements::default()
    };

    let mut phase = FounderPhase::default();
    elements.apply(&compose_frame(900.0, &geometry(), &mut phase).assignments());
    assert!(header.class_list().contains("scrolled"));
    assert!(header.class_list().contains("past-video"));
    assert!(widget.class_list().contains("visible"));
    assert_eq!(
        overlay.style().get_property_value("--scroll-tint-opacity").unwrap().trim(),
        "0.6"
    );

    elements.apply(&compose_frame(0.0, &geometry(), &mut phase).assignments());
    assert!(!header.class_list().contains("scrolled"));
    assert!(!header.class_list().contains("past-video"));
    assert!(!widget.class_list().contains("visible"));
    assert_eq!(
        overlay.style().get_property_value("--scroll-tint-opacity").unwrap().trim(),
        "0"
    );

    for el in [header, overlay, widget] {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
    let elements = LayoutElements::default();
    let mut phase = FounderPhase::default();
    elements.apply(&compose_frame(400.0, &geometry(), &mut phase).assignments());
    assert_eq!(elements.geometry(800.0), PageGeometry {
        viewport_height: 800.0,
        ..PageGeometry::default()
    });
}

#[wasm_bindgen_test]
fn stage_sections_need_their_image() {
    let backdrop = element("position: absolute; top: 1200px; height: 400px;");
    let image = element("");
    let founder = element("position: absolute; top: 2000px; height: 400px;");

    let elements = LayoutElements {
        backdrop_section: Some(backdrop.clone()),
        backdrop_image: Some(image.clone()),
        founder_section: Some(founder.clone()),
        ..LayoutElements::default()
    };
    let geometry = elements.geometry(800.0);
    assert_eq!(geometry.backdrop, Some(SectionBox::new(1200.0, 400.0)));
    assert_eq!(geometry.founder, None);

    for el in [backdrop, image, founder] {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn hidden_approach_title_starts_above_its_slot() {
    let title = element("");
    let elements = LayoutElements {
        approach_title: Some(title.clone()),
        ..LayoutElements::default()
    };
    elements.hide_approach_title();
    assert_eq!(title.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        title.style().get_property_value("transform").unwrap(),
        "translateY(-100px)"
    );
    title.remove();
}

fn video() -> HtmlVideoElement {
    let document = window().unwrap().document().unwrap();
    let el = document
        .create_element("video")
        .unwrap()
        .dyn_into::<HtmlVideoElement>()
        .unwrap();
    el.set_muted(true);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn style_of(video: &HtmlVideoElement, name: &str) -> String {
    video.style().get_property_value(name).unwrap()
}

#[wasm_bindgen_test]
fn crossfade_commands_write_opacity_filter_and_time() {
    let pair = VideoPair {
        primary: video(),
        secondary: video(),
    };

    pair.apply(VideoCommand::Restart(VideoSlot::Secondary));
    assert_eq!(pair.secondary.current_time(), 0.0);

    pair.apply(VideoCommand::Reveal(VideoSlot::Secondary));
    assert_eq!(style_of(&pair.secondary, "opacity"), "1");
    assert_eq!(style_of(&pair.secondary, "filter"), "blur(0px)");

    pair.apply(VideoCommand::Conceal(VideoSlot::Primary));
    assert_eq!(style_of(&pair.primary, "opacity"), "0");
    assert_eq!(style_of(&pair.primary, "filter"), "blur(1px)");

    pair.apply(VideoCommand::Rewind(VideoSlot::Primary));
    assert_eq!(pair.primary.current_time(), 0.0);
    assert_eq!(style_of(&pair.primary, "filter"), "blur(0px)");
    // Rewinding leaves the outgoing video hidden.
    assert_eq!(style_of(&pair.primary, "opacity"), "0");

    pair.primary.remove();
    pair.secondary.remove();
}

#[wasm_bindgen_test]
fn loaded_secondary_starts_hidden() {
    let pair = VideoPair {
        primary: video(),
        secondary: video(),
    };

    pair.on_loaded(VideoSlot::Secondary, VideoSlot::Primary);
    assert_eq!(style_of(&pair.secondary, "opacity"), "0");

    pair.on_loaded(VideoSlot::Primary, VideoSlot::Secondary);
    assert_eq!(style_of(&pair.primary, "opacity"), "");

    pair.primary.remove();
    pair.secondary.remove();
}

fn wheel(ctrl: bool) -> WheelEvent {
    let init = WheelEventInit::new();
    init.set_delta_y(120.0);
    init.set_ctrl_key(ctrl);
    init.set_cancelable(true);
    WheelEvent::new_with_event_init_dict("wheel", &init).unwrap()
}

fn dispatch(event: &WheelEvent) -> bool {
    window().unwrap().dispatch_event(event).unwrap();
    event.default_prevented()
}

fn root_has(class: &str) -> bool {
    window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
        .class_list()
        .contains(class)
}

#[wasm_bindgen_test]
fn scroller_marks_the_root_and_detaches_on_drop() {
    let events = Rc::new(RefCell::new(Vec::<ScrollEvent>::new()));
    let on_scroll = {
        let events = Rc::clone(&events);
        Callback::from(move |event| events.borrow_mut().push(event))
    };

    let scroller = SmoothScroller::attach(ScrollOptions::default(), on_scroll).unwrap();
    assert!(root_has("lenis"));
    assert!(root_has("lenis-smooth"));

    scroller.emit_current();
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(events.borrow()[0].direction, 0);

    assert!(dispatch(&wheel(false)), "plain wheel is taken over");
    assert!(!dispatch(&wheel(true)), "ctrl+wheel is left to the browser zoom");

    drop(scroller);
    assert!(!root_has("lenis"));
    assert!(!root_has("lenis-smooth"));
    assert!(!dispatch(&wheel(false)), "no listener after drop");
}

#[wasm_bindgen_test]
fn native_scroll_follows_content_that_grew_after_attach() {
    let first = element("height: 4000px;");
    let events = Rc::new(RefCell::new(Vec::<ScrollEvent>::new()));
    let on_scroll = {
        let events = Rc::clone(&events);
        Callback::from(move |event| events.borrow_mut().push(event))
    };
    let scroller = SmoothScroller::attach(ScrollOptions::default(), on_scroll).unwrap();

    let second = element("height: 4000px;");
    let window = window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 6000.0);
    let native = window.scroll_y().unwrap();
    assert!(native > 4000.0);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();

    let last = *events.borrow().last().expect("a scroll event");
    assert_eq!(last.scroll, native);
    assert!(last.limit >= native);

    drop(scroller);
    window.scroll_to_with_x_and_y(0.0, 0.0);
    first.remove();
    second.remove();
}
