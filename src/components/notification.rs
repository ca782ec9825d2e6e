use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const DEFAULT_DISMISS_MS: u32 = 5_000;
const STYLE_ELEMENT_ID: &str = "notification-styles";

const TOAST_CSS: &str = "\
@keyframes slideInRight {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

.notification-close {
    background: none;
    border: none;
    color: white;
    font-size: 20px;
    cursor: pointer;
    margin-left: 10px;
    padding: 0;
    line-height: 1;
}

.notification-close:hover {
    opacity: 0.8;
}

.notification-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.notification-message {
    flex: 1;
}
";

/// Classification of a toast's intent; picks the presentation color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#2196F3",
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
        }
    }
}

struct ActiveToast {
    element: Element,
    // Dropping the handle cancels the pending auto-dismiss.
    _timer: Timeout,
    _on_close: Closure<dyn FnMut()>,
}

/// Owns the single on-screen toast. Showing a new one replaces the current
/// one and cancels its pending auto-dismiss timer; at most one toast is
/// mounted at any time.
pub struct NotificationManager {
    document: Document,
    dismiss_after_ms: u32,
    current: Option<ActiveToast>,
}

impl NotificationManager {
    pub fn new(document: Document) -> Self {
        Self::with_dismiss_after(document, DEFAULT_DISMISS_MS)
    }

    /// Same as [`NotificationManager::new`] with a custom auto-dismiss delay.
    pub fn with_dismiss_after(document: Document, dismiss_after_ms: u32) -> Self {
        register_styles(&document);
        Self {
            document,
            dismiss_after_ms,
            current: None,
        }
    }

    /// Replaces any visible toast with one carrying `message`, styled per
    /// `severity`. The toast stays up until its close button is clicked or
    /// the auto-dismiss delay elapses.
    pub fn notify(&mut self, message: &str, severity: Severity) {
        self.dismiss();
        match self.mount_toast(message, severity) {
            Ok(toast) => self.current = Some(toast),
            Err(err) => log::error!("failed to mount notification: {:?}", err),
        }
    }

    /// Removes the current toast, if any. Safe to call when nothing is
    /// visible or the element was already detached by its close button.
    pub fn dismiss(&mut self) {
        if let Some(toast) = self.current.take() {
            toast.element.remove();
        }
    }

    fn mount_toast(&self, message: &str, severity: Severity) -> Result<ActiveToast, JsValue> {
        let notification = self.document.create_element("div")?;
        notification.set_class_name(&format!("notification {}", severity.css_class()));
        if let Some(styled) = notification.dyn_ref::<HtmlElement>() {
            styled.style().set_css_text(&format!(
                "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
                 padding: 16px 20px; border-radius: 8px; \
                 box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 10000; \
                 max-width: 400px; animation: slideInRight 0.3s ease-out;",
                severity.color()
            ));
        }

        let content = self.document.create_element("div")?;
        content.set_class_name("notification-content");

        let text = self.document.create_element("span")?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));

        let close = self.document.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text)?;
        content.append_child(&close)?;
        notification.append_child(&content)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&notification)?;

        // The close button detaches the element directly. A dismiss timer
        // firing afterwards removes an already detached node, a no-op.
        let on_close = {
            let element = notification.clone();
            Closure::wrap(Box::new(move || element.remove()) as Box<dyn FnMut()>)
        };
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        let timer = {
            let element = notification.clone();
            Timeout::new(self.dismiss_after_ms, move || element.remove())
        };

        Ok(ActiveToast {
            element: notification,
            _timer: timer,
            _on_close: on_close,
        })
    }
}

// Toast styles are registered once per document, at manager construction.
fn register_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(TOAST_CSS));
        if let Some(head) = document.head() {
            let _ = head.append_child(&style);
        }
    }
}

/// Cloneable handle components use to raise toasts; shared through a
/// `ContextProvider` at the app root.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<RefCell<NotificationManager>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Notifier {
    pub fn new() -> Self {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect_throw("no document to mount notifications on");
        Self::with_manager(NotificationManager::new(document))
    }

    pub fn with_manager(manager: NotificationManager) -> Self {
        Self {
            inner: Rc::new(RefCell::new(manager)),
        }
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.inner.borrow_mut().notify(message, severity);
    }

    pub fn dismiss(&self) {
        self.inner.borrow_mut().dismiss();
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
