//! DOM rendering and event wiring (WASM only)
//!
//! The tree is built once. Toggle and reset go through the component and then
//! resync every checkbox from its state, so the DOM never drifts from it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::component::SelectionList;
use crate::persistence::LocalStore;
use crate::view::ViewModel;

/// Component shared between event handlers
pub type SharedList = Rc<RefCell<SelectionList<LocalStore>>>;

type Checkboxes = Rc<Vec<(String, HtmlInputElement)>>;

/// Render the widget into the element with id `mount_id`
pub fn mount(list: SharedList) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mount_id = list.borrow().config().mount_id.clone();
    let root = document
        .get_element_by_id(&mount_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", mount_id)))?;

    let view = ViewModel::from_list(&*list.borrow());

    let container = document.create_element("div")?;
    container.set_class_name("App");
    container.set_text_content(Some(&view.heading));

    let reset_btn = document.create_element("button")?;
    reset_btn.set_text_content(Some(&view.reset_label));
    container.append_child(&reset_btn)?;

    let mut boxes = Vec::with_capacity(view.rows.len());
    for row in &view.rows {
        let (label, input) = build_row(&document, &row.name, row.checked)?;
        container.append_child(&label)?;
        boxes.push((row.id.clone(), input));
    }
    let boxes: Checkboxes = Rc::new(boxes);

    for (id, input) in boxes.iter() {
        let list = list.clone();
        let all = boxes.clone();
        let id = id.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            list.borrow_mut().toggle(&id);
            sync(&list, &all);
        });
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let list = list.clone();
        let all = boxes.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            list.borrow_mut().reset();
            sync(&list, &all);
        });
        reset_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    root.set_inner_html("");
    root.append_child(&container)?;
    log::info!("Rendered {} options into #{}", view.rows.len(), mount_id);
    Ok(())
}

fn build_row(
    document: &Document,
    name: &str,
    checked: bool,
) -> Result<(Element, HtmlInputElement), JsValue> {
    let label = document.create_element("label")?;
    let text = document.create_element("p")?;
    text.set_text_content(Some(name));
    label.append_child(&text)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("checkbox");
    input.set_class_name("uk-checkbox");
    input.set_checked(checked);
    label.append_child(&input)?;

    Ok((label, input))
}

/// Push component state into every checkbox
fn sync(list: &SharedList, boxes: &Checkboxes) {
    let list = list.borrow();
    for (id, input) in boxes.iter() {
        input.set_checked(list.state().is_selected(id));
    }
}
