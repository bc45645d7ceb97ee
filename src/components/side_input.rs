use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Side, SideField};

#[derive(Properties, PartialEq, Clone)]
pub struct SideInputProps {
    pub field: SideField,
    pub on_input: Callback<(Side, String)>,
    pub on_focus: Callback<Side>,
    pub on_blur: Callback<Side>,
    /// Enter pressed inside the field.
    pub on_submit: Callback<()>,
}

#[function_component(SideInput)]
pub fn side_input(props: &SideInputProps) -> Html {
    let side = props.field.side;
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((side, input.value()));
        })
    };
    let onfocus = {
        let cb = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| cb.emit(side))
    };
    let onblur = {
        let cb = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| cb.emit(side))
    };
    let onkeypress = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit(());
            }
        })
    };
    html! {
        <label style="display:flex; flex-direction:column; gap:4px; font-size:12px; color:#8b949e;">
            { side.label() }
            <input
                class="side-input"
                id={side.input_id()}
                type="text"
                autocomplete="off"
                value={props.field.value.clone()}
                placeholder={props.field.placeholder.clone()}
                data-placeholder={props.field.template()}
                {oninput}
                {onfocus}
                {onblur}
                {onkeypress}
                style="padding:6px 10px; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#e6edf3; font-size:16px; text-transform:uppercase; width:140px;"
            />
        </label>
    }
}
