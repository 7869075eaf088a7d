//! My Selections entry point
//!
//! Web: mounts the widget into the page. Native: replays a short session
//! against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use my_selections::persistence::LocalStore;
    use my_selections::platform::dom;
    use my_selections::{SelectionList, WidgetConfig};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("My Selections starting...");

        let config = WidgetConfig::load();
        let store = LocalStore::open(config.namespace.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut list = SelectionList::new(store, config);
        list.mount();

        dom::mount(Rc::new(RefCell::new(list)))
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use my_selections::{MemoryStore, SelectionList, ViewModel, WidgetConfig};

    env_logger::init();
    log::info!("My Selections (native) starting...");
    log::info!("Native mode uses an in-memory store - run with `trunk serve` for the web version");

    let mut list = SelectionList::new(MemoryStore::new(), WidgetConfig::load());

    list.mount();
    report("mount", &list);

    list.toggle("1");
    report("toggle 1", &list);

    list.toggle("2");
    report("toggle 2", &list);

    list.reset();
    report("reset", &list);

    println!("\n{}", ViewModel::from_list(&list).to_html());
}

#[cfg(not(target_arch = "wasm32"))]
fn report(step: &str, list: &my_selections::SelectionList<my_selections::MemoryStore>) {
    use my_selections::SelectionStore;
    use my_selections::consts::STORAGE_KEY;

    let flags: Vec<String> = list
        .selections()
        .iter()
        .map(|s| format!("{}:{}", s.name, s.selected))
        .collect();
    let stored = list.store().get(STORAGE_KEY).ok().flatten().unwrap_or_default();
    println!("{:<10} [{}] store={}", step, flags.join(", "), stored);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
