use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::util::cwarn;

fn long_date_options() -> Result<js_sys::Object, JsValue> {
    let opts = js_sys::Object::new();
    for (key, value) in [("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        js_sys::Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str(value))?;
    }
    Ok(opts)
}

// e.g. "October 19, 2026"; falls back to the browser's default date format.
fn today_long() -> String {
    let date = js_sys::Date::new_0();
    match long_date_options() {
        Ok(opts) => date.to_locale_date_string("en-US", &opts).into(),
        Err(err) => {
            cwarn(&format!("date options unavailable: {:?}", err));
            date.to_locale_date_string("en-US", &JsValue::UNDEFINED).into()
        }
    }
}

#[function_component(DateStamp)]
pub fn date_stamp() -> Html {
    let today = use_state(today_long);
    html! { <div id="current-date" style="font-size:13px; opacity:0.7; text-align:center;">{ (*today).clone() }</div> }
}
