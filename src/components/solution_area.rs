use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::solution::{NYT_HEADING, SolutionView, THREE_WORD_HEADING, TWO_WORD_HEADING};

#[derive(Properties, PartialEq, Clone)]
pub struct SolutionAreaProps {
    pub solution: Option<SolutionView>,
    pub node_ref: NodeRef,
}

fn scroll_options() -> ScrollIntoViewOptions {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    opts
}

/// Smooth, top-aligned scroll to the element behind `node_ref`.
pub fn scroll_into_view(node_ref: &NodeRef) {
    let Some(el) = node_ref.cast::<Element>() else { return; };
    el.scroll_into_view_with_scroll_into_view_options(&scroll_options());
}

fn candidate_list(entries: &[String]) -> Html {
    html! { <ul style="margin:4px 0 12px 18px; padding:0;">{ for entries.iter().map(|e| html!{ <li>{ e.clone() }</li> }) }</ul> }
}

#[function_component(SolutionArea)]
pub fn solution_area(props: &SolutionAreaProps) -> Html {
    let content = match &props.solution {
        Some(view) => html! {<>
            <h3>{ NYT_HEADING }</h3>
            <p>{ view.nyt_line.clone() }</p>
            <h3>{ TWO_WORD_HEADING }</h3>
            { candidate_list(&view.two_word) }
            <h3>{ THREE_WORD_HEADING }</h3>
            { candidate_list(&view.three_word) }
        </>},
        None => html! {},
    };
    html! {
        <div id="solution-area" ref={props.node_ref.clone()} style="max-width:520px; margin:0 auto 48px auto; font-size:15px; line-height:1.5;">
            { content }
        </div>
    }
}
