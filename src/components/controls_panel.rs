use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_enter: Callback<()>,
    pub on_restart: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_auto_populate: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let enter_cb = {
        let cb = props.on_enter.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let delete_cb = {
        let cb = props.on_delete.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let populate_cb = {
        let cb = props.on_auto_populate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button_style = "padding:8px 16px; border-radius:20px; border:1px solid #30363d; background:#161b22; color:#e6edf3; font-size:14px; cursor:pointer;";
    html! {<div style="display:flex; gap:10px; justify-content:center; flex-wrap:wrap; margin:16px 0;">
        <button class="btn-restart" style={button_style} onclick={restart_cb}>{"Restart"}</button>
        <button class="btn-delete" style={button_style} onclick={delete_cb}>{"Delete"}</button>
        <button class="btn-enter" style={format!("{} background:#238636; border-color:#2ea043;", button_style)} onclick={enter_cb}>{"Enter"}</button>
        <button id="autoPopulate" style={button_style} onclick={populate_cb}>{"Auto Populate"}</button>
    </div>}
}
