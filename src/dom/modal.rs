//! Shared information dialog and its `.interactive-element` triggers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::{body, clear_style, listen, query_all, set_style, window};
use crate::error::EnhanceError;
use crate::modal::{ModalState, OpenModal, trigger_content};

const MODAL_ID: &str = "infoModal";

const MODAL_HTML: &str = r#"<div id="infoModal" class="modal">
    <div class="modal-content">
        <span class="close">&times;</span>
        <h2 id="modalTitle">Information</h2>
        <div id="modalBody"></div>
    </div>
</div>"#;

/// Owns the dialog markup and its [`ModalState`].
pub struct ModalController {
    state: ModalState,
    root: HtmlElement,
    title: Element,
    content: Element,
    page_body: HtmlElement,
}

impl ModalController {
    /// Insert the dialog at the end of `<body>` and wire its close triggers.
    pub fn mount(document: &Document) -> Result<Rc<RefCell<Self>>, EnhanceError> {
        let page_body = body(document)?;
        page_body.insert_adjacent_html("beforeend", MODAL_HTML)?;

        let root = document
            .get_element_by_id(MODAL_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(EnhanceError::MissingAnchor("#infoModal"))?;
        let title = document
            .get_element_by_id("modalTitle")
            .ok_or(EnhanceError::MissingAnchor("#modalTitle"))?;
        let content = document
            .get_element_by_id("modalBody")
            .ok_or(EnhanceError::MissingAnchor("#modalBody"))?;
        let close_button = root
            .query_selector(".close")?
            .ok_or(EnhanceError::MissingAnchor(".modal .close"))?;

        let backdrop: Element = root.clone().into();
        let modal = Rc::new(RefCell::new(Self { state: ModalState::new(), root, title, content, page_body }));

        let on_close = Rc::clone(&modal);
        listen(&close_button, "click", move |_| on_close.borrow_mut().close())?;

        let on_backdrop = Rc::clone(&modal);
        let win = window()?;
        listen(&win, "click", move |ev| {
            let on_backdrop_el = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el == backdrop);
            if on_backdrop_el {
                on_backdrop.borrow_mut().close();
            }
        })?;

        let on_escape = Rc::clone(&modal);
        listen(document, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let mut modal = on_escape.borrow_mut();
            if modal.state.closes_on_key(&key) {
                modal.close();
            }
        })?;

        Ok(modal)
    }

    pub fn open(&mut self, title: &str, body_html: &str) {
        let prior = self.page_body.style().get_property_value("overflow").unwrap_or_default();
        let overflow = self.state.open(title, body_html, &prior);
        self.title.set_text_content(Some(title));
        self.content.set_inner_html(body_html);
        set_style(&self.root, "display", "block");
        set_style(&self.page_body, "overflow", overflow);
        log::debug!("modal opened: {title}");
    }

    pub fn close(&mut self) {
        let Some(restore) = self.state.close() else {
            return;
        };
        set_style(&self.root, "display", "none");
        if restore.is_empty() {
            clear_style(&self.page_body, "overflow");
        } else {
            set_style(&self.page_body, "overflow", &restore);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.open
    }
}

impl OpenModal for ModalController {
    fn open_modal(&mut self, title: &str, body_html: &str) {
        self.open(title, body_html);
    }
}

/// Route `.interactive-element` clicks to the dialog.
pub fn setup_triggers(document: &Document, modal: &Rc<RefCell<ModalController>>) -> Result<(), EnhanceError> {
    let triggers: Vec<Element> = query_all(document, ".interactive-element")?;
    if triggers.is_empty() {
        return Err(EnhanceError::MissingAnchor(".interactive-element"));
    }
    for trigger in triggers {
        let modal = Rc::clone(modal);
        let source = trigger.clone();
        listen(&trigger, "click", move |ev| {
            ev.prevent_default();
            let (title, content) =
                trigger_content(source.get_attribute("data-title"), source.get_attribute("data-content"));
            modal.borrow_mut().open(&title, &content);
        })?;
    }
    Ok(())
}
