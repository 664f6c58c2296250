//! Folio Live entry point
//!
//! On wasm32 this wires every page feature to the DOM at module start; each
//! feature quietly skips itself when its element is missing, so the same
//! bundle works on every page of the site. The native build runs a headless
//! smoke demo of the ball simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, Element, HtmlCanvasElement, HtmlElement,
        HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
        ScrollBehavior, ScrollToOptions,
    };

    use folio_live::consts::*;
    use folio_live::form::{self, ContactSubmission, FieldErrors};
    use folio_live::page;
    use folio_live::render::{self, CanvasSurface, Surface};
    use folio_live::sim::{self, Ball, Bounds, RunState, Tuning};
    use folio_live::slider::Slider;
    use folio_live::theme::{self, Theme};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Folio Live starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        update_footer_year(&document);
        setup_skill_bars(&document);
        setup_contact_form(&document);
        setup_project_cards(&document);
        setup_theme_toggle(&document);
        setup_ball_demo(&document);
        setup_slider(&document);
        setup_back_to_top(&document);

        log::info!("Folio Live ready");
    }

    // ---- footer year -------------------------------------------------------

    fn update_footer_year(document: &Document) {
        if let Some(el) = document.get_element_by_id("year") {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
    }

    // ---- animated skill bars ----------------------------------------------

    fn setup_skill_bars(document: &Document) {
        let Ok(fills) = document.query_selector_all(".progress-fill") else {
            return;
        };
        if fills.length() == 0 {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if target.class_list().contains("animated") {
                        continue;
                    }
                    let width =
                        page::skill_bar_width(target.get_attribute("data-percent").as_deref());
                    if let (Some(width), Ok(el)) = (width, target.dyn_into::<HtmlElement>()) {
                        let _ = el.style().set_property("width", &width);
                        let _ = el.class_list().add_1("animated");
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(SKILL_BAR_THRESHOLD));

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            callback.forget();
            return;
        };
        for i in 0..fills.length() {
            if let Some(el) = fills.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
        callback.forget();
        // The registration must outlive this function; the observer lives for
        // the page like every other handler here.
        std::mem::forget(observer);
    }

    // ---- contact form ------------------------------------------------------

    fn setup_contact_form(document: &Document) {
        let Some(form_el) = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let document = document.clone();
        let form_reset = form_el.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let name = field_value(&document, "name");
            let email = field_value(&document, "email");
            let message = field_value(&document, "message");

            let errors = form::validate(&name, &email, &message);
            clear_error_messages(&document);
            if !errors.is_clean() {
                display_error_messages(&document, &errors);
                return;
            }

            let timestamp = String::from(
                js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED),
            );
            ContactSubmission::new(&name, &email, &message, timestamp).save();

            if let Some(el) = document
                .get_element_by_id("successMessage")
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", "block");
            }
            form_reset.reset();
            schedule_redirect("form-details.html", REDIRECT_DELAY_MS);
        });
        let _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn field_value(document: &Document, id: &str) -> String {
        let Some(el) = document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn clear_error_messages(document: &Document) {
        if let Ok(slots) = document.query_selector_all(".error-message") {
            for i in 0..slots.length() {
                if let Some(el) = slots
                    .get(i)
                    .and_then(|n| n.dyn_into::<HtmlElement>().ok())
                {
                    el.set_text_content(None);
                    let _ = el.style().set_property("display", "none");
                }
            }
        }
    }

    fn display_error_messages(document: &Document, errors: &FieldErrors) {
        for (field, message) in errors.iter() {
            let id = format!("{field}Error");
            if let Some(el) = document
                .get_element_by_id(&id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                el.set_text_content(Some(message));
                let _ = el.style().set_property("display", "block");
            }
        }
    }

    fn schedule_redirect(url: &str, delay_ms: i32) {
        let url = url.to_string();
        let closure = Closure::once(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            );
        }
        closure.forget();
    }

    // ---- project cards -----------------------------------------------------

    fn setup_project_cards(document: &Document) {
        let Ok(cards) = document.query_selector_all(".project-item") else {
            return;
        };
        for i in 0..cards.length() {
            let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let live_url = card.get_attribute("data-live");

            {
                let live_url = live_url.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    let Some(target) =
                        event.target().and_then(|t| t.dyn_into::<Element>().ok())
                    else {
                        return;
                    };
                    // Inner anchors and the source-code button keep their own
                    // behavior; only a plain card click navigates.
                    let on_anchor = target.closest("a").ok().flatten().is_some();
                    let on_live_btn = target.closest("button.btn-live").ok().flatten().is_some();
                    if on_anchor && !on_live_btn {
                        return;
                    }
                    if target.closest(".btn-secondary").ok().flatten().is_some() {
                        return;
                    }
                    navigate_to(live_url.as_deref());
                });
                let _ =
                    card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            {
                let live_url = live_url.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    let key = event.key();
                    if key != "Enter" && key != " " {
                        return;
                    }
                    if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                    {
                        if target.closest("a").ok().flatten().is_some()
                            || target.closest("button.btn-secondary").ok().flatten().is_some()
                        {
                            return;
                        }
                    }
                    event.prevent_default();
                    navigate_to(live_url.as_deref());
                });
                let _ = card
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn navigate_to(url: Option<&str>) {
        match url {
            Some(url) if !url.is_empty() && url != "#" => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(url);
                }
            }
            _ => log::warn!("No live URL configured for this project."),
        }
    }

    // ---- theme toggle ------------------------------------------------------

    fn setup_theme_toggle(document: &Document) {
        let toggle = document.get_element_by_id("themeToggle");

        // Stored choice wins, then the OS preference.
        let initial = Theme::load().unwrap_or_else(Theme::system_preference);
        apply_theme(document, toggle.as_ref(), initial);

        let Some(toggle) = toggle else {
            return;
        };
        let document = document.clone();
        let toggle_el = toggle.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let is_light = document
                .document_element()
                .map(|root| root.class_list().contains(theme::LIGHT_CLASS))
                .unwrap_or(false);
            let next = if is_light { Theme::Dark } else { Theme::Light };
            apply_theme(&document, Some(&toggle_el), next);
            next.save();
        });
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn apply_theme(document: &Document, toggle: Option<&Element>, theme: Theme) {
        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let _ = if theme.is_light() {
                classes.add_1(theme::LIGHT_CLASS)
            } else {
                classes.remove_1(theme::LIGHT_CLASS)
            };
        }
        if let Some(toggle) = toggle {
            let pressed = if theme.is_light() { "true" } else { "false" };
            let _ = toggle.set_attribute("aria-pressed", pressed);
            toggle.set_text_content(Some(theme.icon()));
        }
    }

    // ---- canvas ball demo --------------------------------------------------

    struct BallDemo {
        ball: Ball,
        bounds: Bounds,
        tuning: Tuning,
        surface: CanvasSurface,
        run_state: RunState,
        /// Handle of the pending animation frame, if one is scheduled
        frame_handle: Option<i32>,
    }

    fn setup_ball_demo(document: &Document) {
        let Some(canvas) = document
            .get_element_by_id("demoCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return;
        };
        // No 2D context means no demo on this page; that is not an error.
        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            return;
        };

        let bounds = Bounds::new(surface.width(), surface.height());
        let demo = Rc::new(RefCell::new(BallDemo {
            ball: Ball::spawn(bounds),
            bounds,
            tuning: Tuning::default(),
            surface,
            run_state: RunState::Running,
            frame_handle: None,
        }));

        // First frame runs immediately; while running, each frame schedules
        // the next one.
        frame(demo.clone());

        let demo_click = demo.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let next = {
                let mut d = demo_click.borrow_mut();
                d.run_state = d.run_state.toggled();
                d.run_state
            };
            match next {
                RunState::Running => frame(demo_click.clone()),
                RunState::Paused => {
                    let handle = demo_click.borrow_mut().frame_handle.take();
                    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
                        let _ = window.cancel_animation_frame(handle);
                    }
                }
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        log::info!("Canvas demo running ({}x{})", bounds.width, bounds.height);
    }

    /// One step of the demo loop: advance, paint, reschedule while running.
    fn frame(demo: Rc<RefCell<BallDemo>>) {
        let running = {
            let mut guard = demo.borrow_mut();
            let d = &mut *guard;
            d.frame_handle = None;
            sim::tick(&mut d.ball, d.bounds, &d.tuning);
            render::draw_frame(&mut d.surface, &d.ball);
            d.run_state.is_running()
        };
        if running {
            schedule_frame(&demo);
        }
    }

    fn schedule_frame(demo: &Rc<RefCell<BallDemo>>) {
        let demo_next = demo.clone();
        let closure = Closure::once(move |_time: f64| {
            frame(demo_next);
        });
        if let Some(window) = web_sys::window() {
            if let Ok(handle) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                demo.borrow_mut().frame_handle = Some(handle);
            }
        }
        closure.forget();
    }

    // ---- image slider ------------------------------------------------------

    struct SliderControl {
        state: Slider,
        track: Option<HtmlElement>,
        indicators: Vec<Element>,
        autoplay_handle: Option<i32>,
        autoplay_cb: Option<js_sys::Function>,
    }

    impl SliderControl {
        /// Push the current index into the DOM: slide the track, mark the
        /// active indicator.
        fn update(&self) {
            if let Some(track) = &self.track {
                let transform = format!("translateX({}%)", self.state.offset_percent());
                let _ = track.style().set_property("transform", &transform);
            }
            for (i, indicator) in self.indicators.iter().enumerate() {
                let _ = indicator
                    .class_list()
                    .toggle_with_force("active", self.state.is_active(i));
            }
        }
    }

    fn setup_slider(document: &Document) {
        let Some(slider_el) = document.query_selector(".image-slider").ok().flatten() else {
            return;
        };
        let track = slider_el
            .query_selector(".slider-track")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let total = slider_el
            .query_selector_all(".slide")
            .map(|list| list.length() as usize)
            .unwrap_or(0);
        let indicators = collect_elements(&slider_el, ".indicator");

        let ctl = Rc::new(RefCell::new(SliderControl {
            state: Slider::new(total),
            track,
            indicators,
            autoplay_handle: None,
            autoplay_cb: None,
        }));

        // The autoplay callback is created once and reused across start/stop
        // cycles; intervals are cancelled by handle.
        {
            let ctl_tick = ctl.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut c = ctl_tick.borrow_mut();
                c.state.next();
                c.update();
            });
            let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
            ctl.borrow_mut().autoplay_cb = Some(function);
            closure.forget();
        }

        if let Some(btn) = slider_el.query_selector(".slider-next").ok().flatten() {
            hook_step_button(&btn, ctl.clone(), 1);
        }
        if let Some(btn) = slider_el.query_selector(".slider-prev").ok().flatten() {
            hook_step_button(&btn, ctl.clone(), -1);
        }

        // Indicator buttons jump straight to their slide.
        let indicators = ctl.borrow().indicators.clone();
        for indicator in indicators {
            let ctl_ind = ctl.clone();
            let index = indicator
                .get_attribute("data-index")
                .and_then(|v| v.parse::<isize>().ok())
                .unwrap_or(0);
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                {
                    let mut c = ctl_ind.borrow_mut();
                    c.state.go_to(index);
                    c.update();
                }
                reset_autoplay(&ctl_ind);
            });
            let _ =
                indicator.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Arrow keys while the slider has focus
        {
            let ctl_keys = ctl.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let step: isize = match event.key().as_str() {
                    "ArrowRight" => 1,
                    "ArrowLeft" => -1,
                    _ => return,
                };
                {
                    let mut c = ctl_keys.borrow_mut();
                    if step > 0 {
                        c.state.next();
                    } else {
                        c.state.prev();
                    }
                    c.update();
                }
                reset_autoplay(&ctl_keys);
            });
            let _ = slider_el
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Autoplay pauses while hovered or focused
        for event_name in ["mouseenter", "focusin"] {
            let ctl_stop = ctl.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                stop_autoplay(&ctl_stop);
            });
            let _ = slider_el
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for event_name in ["mouseleave", "focusout"] {
            let ctl_start = ctl.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                start_autoplay(&ctl_start);
            });
            let _ = slider_el
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        ctl.borrow().update();
        start_autoplay(&ctl);
    }

    fn hook_step_button(btn: &Element, ctl: Rc<RefCell<SliderControl>>, step: isize) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.stop_propagation();
            {
                let mut c = ctl.borrow_mut();
                if step > 0 {
                    c.state.next();
                } else {
                    c.state.prev();
                }
                c.update();
            }
            reset_autoplay(&ctl);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_autoplay(ctl: &Rc<RefCell<SliderControl>>) {
        let mut c = ctl.borrow_mut();
        if c.autoplay_handle.is_some() {
            return;
        }
        let Some(cb) = c.autoplay_cb.clone() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            c.autoplay_handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(&cb, AUTOPLAY_DELAY_MS)
                .ok();
        }
    }

    fn stop_autoplay(ctl: &Rc<RefCell<SliderControl>>) {
        if let Some(handle) = ctl.borrow_mut().autoplay_handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn reset_autoplay(ctl: &Rc<RefCell<SliderControl>>) {
        stop_autoplay(ctl);
        start_autoplay(ctl);
    }

    fn collect_elements(root: &Element, selector: &str) -> Vec<Element> {
        let mut out = Vec::new();
        if let Ok(list) = root.query_selector_all(selector) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    out.push(el);
                }
            }
        }
        out
    }

    // ---- back to top -------------------------------------------------------

    fn setup_back_to_top(document: &Document) {
        let Some(btn) = document.get_element_by_id("backToTop") else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let apply = {
            let btn = btn.clone();
            let window = window.clone();
            move || {
                let depth = window.scroll_y().unwrap_or(0.0);
                let classes = btn.class_list();
                let _ = if page::back_to_top_visible(depth) {
                    classes.add_1("show")
                } else {
                    classes.remove_1("show")
                };
            }
        };

        // Reflect the restored scroll position before the first scroll event.
        apply();

        {
            let apply = apply.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                apply();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        {
            let document = document.clone();
            let window_click = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window_click.scroll_to_with_scroll_to_options(&options);
                // Move focus to the top for keyboard users.
                if let Some(root) = document
                    .document_element()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let _ = root.focus();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter/Space activate the control like a click.
        if let Some(btn_html) = btn.dyn_ref::<HtmlElement>().cloned() {
            let target = btn_html.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" || key == " " {
                    event.prevent_default();
                    target.click();
                }
            });
            let _ = btn_html
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio Live (native) starting...");
    log::info!("DOM wiring is wasm-only - build with trunk for the web version");

    println!("\nRunning headless ball demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use folio_live::sim::{Ball, Bounds, Tuning, tick};

    let bounds = Bounds::new(400.0, 300.0);
    let tuning = Tuning::default();
    let mut ball = Ball::spawn(bounds);

    let mut contacts = 0;
    for _ in 0..600 {
        if tick(&mut ball, bounds, &tuning).any() {
            contacts += 1;
        }
        assert!(ball.pos.x >= ball.radius && ball.pos.x <= bounds.width - ball.radius);
        assert!(ball.pos.y >= ball.radius && ball.pos.y <= bounds.height - ball.radius);
    }
    println!(
        "✓ 600 ticks, {} wall contacts, ball at ({:.1}, {:.1})",
        contacts, ball.pos.x, ball.pos.y
    );
}
