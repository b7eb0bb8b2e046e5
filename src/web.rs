//! Browser host built on `web-sys`.
//!
//! [`WebCard::attach`] wires a [`ProfileCard`] to a DOM element:
//! click, enter, leave and move listeners on the element itself, a
//! document-wide `mousemove` listener attached and detached by the card,
//! `requestAnimationFrame` for the frame loop and `setTimeout` for the
//! flip lock. Painting is left to a render hook that receives fresh
//! [`Presentation`] parameters after every callback.
//!
//! All JS callbacks live in one shared block that outlives the card, so
//! no closure is ever dropped while it is running.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, MouseEvent, Window};
use web_time::{Duration, Instant};

use crate::card::ProfileCard;
use crate::compositor::Presentation;
use crate::error::CardError;
use crate::host::{CardHost, FrameToken, ListenerId, TimerToken};
use crate::input::{Bounds, CardEvent, DeviceProfile, ListenerScope};
use crate::options::Options;

type MouseCallback = Closure<dyn FnMut(MouseEvent)>;
type RenderHook = Box<dyn FnMut(&Presentation)>;

/// Element events forwarded to the card for its whole lifetime.
const ELEMENT_EVENTS: [&str; 4] = ["click", "mouseenter", "mouseleave", "mousemove"];

struct Shared {
    card: RefCell<Option<ProfileCard<WebHost>>>,
    render: RefCell<Option<RenderHook>>,
    frame_callback: Closure<dyn FnMut(f64)>,
    timer_callback: Closure<dyn FnMut(JsValue)>,
    listeners: RefCell<HashMap<ListenerId, (ListenerScope, MouseCallback)>>,
    element_listeners: RefCell<Vec<(&'static str, MouseCallback)>>,
}

/// Run `f` against the mounted card, then hand the resulting
/// presentation to the render hook once the card borrow is released.
fn with_card(
    shared: &Weak<Shared>,
    f: impl FnOnce(&mut ProfileCard<WebHost>),
) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let presentation = {
        let Ok(mut slot) = shared.card.try_borrow_mut() else {
            log::warn!("dropping re-entrant card callback");
            return;
        };
        let Some(card) = slot.as_mut() else {
            return;
        };
        f(card);
        card.presentation()
    };
    if let Ok(mut render) = shared.render.try_borrow_mut() {
        if let Some(hook) = render.as_mut() {
            hook(&presentation);
        }
    }
}

fn client_position(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

/// Probe touch support the way browsers expose it. Probes that throw
/// count as unavailable.
#[must_use]
pub fn detect_device(window: &Window) -> DeviceProfile {
    let has_touch_events =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).ok();
    let max_touch_points =
        u32::try_from(window.navigator().max_touch_points()).ok();
    DeviceProfile::from_probe(has_touch_events, max_touch_points)
}

/// Install the panic hook and route `log` to the browser console.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// [`CardHost`] backed by the browser window.
pub struct WebHost {
    window: Window,
    document: Document,
    element: Element,
    shared: Weak<Shared>,
    next_id: u64,
    frames: VecDeque<(FrameToken, i32)>,
    timers: HashMap<TimerToken, i32>,
}

impl WebHost {
    fn next_raw(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Oldest outstanding frame request; rAF fires in request order.
    fn pop_frame(&mut self) -> Option<FrameToken> {
        self.frames.pop_front().map(|(token, _)| token)
    }

    fn forget_timer(&mut self, token: TimerToken) {
        let _ = self.timers.remove(&token);
    }

    fn scope_target(&self, scope: ListenerScope) -> &web_sys::EventTarget {
        match scope {
            ListenerScope::Surface => self.element.as_ref(),
            ListenerScope::Viewport => self.document.as_ref(),
        }
    }
}

impl CardHost for WebHost {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken::new(self.next_raw());
        let Some(shared) = self.shared.upgrade() else {
            return token;
        };
        match self
            .window
            .request_animation_frame(shared.frame_callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.frames.push_back((token, id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
        }
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Some(pos) = self.frames.iter().position(|(t, _)| *t == token) {
            if let Some((_, id)) = self.frames.remove(pos) {
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
        }
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken::new(self.next_raw());
        let Some(shared) = self.shared.upgrade() else {
            return token;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                shared.timer_callback.as_ref().unchecked_ref(),
                millis,
                &JsValue::from_f64(token.raw() as f64),
            ) {
            Ok(id) => {
                let _ = self.timers.insert(token, id);
            }
            Err(e) => log::warn!("setTimeout failed: {e:?}"),
        }
        token
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        if let Some(id) = self.timers.remove(&token) {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn attach_pointer_listener(&mut self, scope: ListenerScope) -> ListenerId {
        let id = ListenerId::new(self.next_raw());
        let Some(shared) = self.shared.upgrade() else {
            return id;
        };
        let weak = self.shared.clone();
        let callback: MouseCallback =
            Closure::new(move |event: MouseEvent| {
                let (x, y) = client_position(&event);
                with_card(&weak, |card| {
                    card.handle_event(CardEvent::PointerMoved { x, y, scope });
                });
            });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = self
            .scope_target(scope)
            .add_event_listener_with_callback_and_add_event_listener_options(
                "mousemove",
                callback.as_ref().unchecked_ref(),
                &options,
            )
        {
            log::warn!("failed to attach {scope:?} listener: {e:?}");
        }
        let _ = shared.listeners.borrow_mut().insert(id, (scope, callback));
        id
    }

    fn detach_pointer_listener(&mut self, id: ListenerId) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let removed = shared.listeners.borrow_mut().remove(&id);
        if let Some((scope, callback)) = removed {
            if let Err(e) = self.scope_target(scope).remove_event_listener_with_callback(
                "mousemove",
                callback.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to detach {scope:?} listener: {e:?}");
            }
        }
    }

    fn card_bounds(&self) -> Option<Bounds> {
        let rect = self.element.get_bounding_client_rect();
        let bounds = Bounds::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        bounds.is_measured().then_some(bounds)
    }
}

/// A profile card mounted on a DOM element.
///
/// Dropping the handle unmounts the card and removes every listener.
pub struct WebCard {
    shared: Rc<Shared>,
    element: Element,
}

impl WebCard {
    /// Mount a card on `element`, detecting touch support from the window.
    pub fn attach(element: Element, options: Options) -> Result<Self, CardError> {
        let window = web_sys::window()
            .ok_or_else(|| CardError::Host("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| CardError::Host("window has no document".into()))?;
        let device = detect_device(&window);

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let on_frame = weak.clone();
            let on_timer = weak.clone();
            Shared {
                card: RefCell::new(None),
                render: RefCell::new(None),
                frame_callback: Closure::new(move |_timestamp: f64| {
                    with_card(&on_frame, |card| {
                        if let Some(token) = card.host_mut().pop_frame() {
                            card.on_frame(token, Instant::now());
                        }
                    });
                }),
                timer_callback: Closure::new(move |raw: JsValue| {
                    let Some(raw) = raw.as_f64() else {
                        return;
                    };
                    let token = TimerToken::new(raw as u64);
                    with_card(&on_timer, |card| {
                        card.host_mut().forget_timer(token);
                        card.on_timeout(token);
                    });
                }),
                listeners: RefCell::new(HashMap::new()),
                element_listeners: RefCell::new(Vec::new()),
            }
        });

        let host = WebHost {
            window,
            document,
            element: element.clone(),
            shared: Rc::downgrade(&shared),
            next_id: 1,
            frames: VecDeque::new(),
            timers: HashMap::new(),
        };
        let card = ProfileCard::mount(host, device, options);
        *shared.card.borrow_mut() = Some(card);

        let web_card = Self { shared, element };
        web_card.attach_element_listeners()?;
        Ok(web_card)
    }

    fn attach_element_listeners(&self) -> Result<(), CardError> {
        for kind in ELEMENT_EVENTS {
            let weak = Rc::downgrade(&self.shared);
            let callback: MouseCallback =
                Closure::new(move |event: MouseEvent| {
                    let card_event = match kind {
                        "click" => CardEvent::Activate,
                        "mouseenter" => CardEvent::PointerEntered,
                        "mouseleave" => CardEvent::PointerLeft,
                        _ => {
                            let (x, y) = client_position(&event);
                            CardEvent::PointerMoved {
                                x,
                                y,
                                scope: ListenerScope::Surface,
                            }
                        }
                    };
                    with_card(&weak, |card| card.handle_event(card_event));
                });
            self.element
                .add_event_listener_with_callback(
                    kind,
                    callback.as_ref().unchecked_ref(),
                )
                .map_err(|e| CardError::Host(format!("{kind} listener: {e:?}")))?;
            self.shared.element_listeners.borrow_mut().push((kind, callback));
        }
        Ok(())
    }

    /// Install the hook that paints presentation parameters.
    pub fn set_render_hook(&self, hook: impl FnMut(&Presentation) + 'static) {
        *self.shared.render.borrow_mut() = Some(Box::new(hook));
    }

    /// Current presentation parameters, if the card is not mid-callback.
    #[must_use]
    pub fn presentation(&self) -> Option<Presentation> {
        let slot = self.shared.card.try_borrow().ok()?;
        slot.as_ref().map(ProfileCard::presentation)
    }

    /// Change the reduced-motion preference.
    pub fn set_reduced_motion(&self, reduced: bool) {
        if let Ok(mut slot) = self.shared.card.try_borrow_mut() {
            if let Some(card) = slot.as_mut() {
                card.set_reduced_motion(reduced);
            }
        }
    }

    /// Unmount the card and remove the element listeners. Idempotent.
    pub fn detach(&self) {
        if let Ok(mut slot) = self.shared.card.try_borrow_mut() {
            if let Some(card) = slot.as_mut() {
                card.unmount();
            }
        }
        for (kind, callback) in self.shared.element_listeners.borrow_mut().drain(..) {
            if let Err(e) = self
                .element
                .remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {kind} listener: {e:?}");
            }
        }
    }
}

impl Drop for WebCard {
    fn drop(&mut self) {
        self.detach();
    }
}
