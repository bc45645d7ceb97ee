use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel,
    date_stamp::DateStamp,
    side_input::SideInput,
    solution_area::{SolutionArea, scroll_into_view},
    tile_ring::TileRing,
};
use crate::api::{self, ApiError, SolveResponse};
use crate::model::{PuzzleAction, PuzzleState, Side};
use crate::util::{cerror, clog, cwarn};

/// Maps a finished solve call to the action to dispatch; failures are only logged.
fn settle_solve(result: Result<SolveResponse, ApiError>) -> Option<PuzzleAction> {
    match result {
        Ok(resp) => {
            clog(&format!(
                "Solution: {} two-word, {} three-word",
                resp.two_word_solutions.len(),
                resp.three_word_solutions.len()
            ));
            Some(PuzzleAction::ShowSolution(resp))
        }
        Err(err) => {
            cerror(&format!("Error: {}", err));
            None
        }
    }
}

fn settle_populate(result: Result<[String; 4], ApiError>) -> Option<PuzzleAction> {
    match result {
        Ok(sides) => Some(PuzzleAction::Populate(sides)),
        Err(err) if err.is_validation() => {
            cwarn(&format!("Error fetching data for auto population: {}", err));
            None
        }
        Err(err) => {
            cerror(&format!("Autofill Error: {}", err));
            None
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let puzzle = use_reducer(PuzzleState::default);
    let solution_ref = use_node_ref();

    // Scroll each freshly rendered solution into view
    {
        let solution_ref = solution_ref.clone();
        use_effect_with(puzzle.solution_version, move |version| {
            if *version > 0 {
                scroll_into_view(&solution_ref);
            }
            || ()
        });
    }

    let on_input = {
        let puzzle = puzzle.clone();
        Callback::from(move |(side, value): (Side, String)| {
            clog(&format!("Input for {}: {}", side.input_id(), value));
            puzzle.dispatch(PuzzleAction::Input { side, value });
        })
    };
    let on_focus = {
        let puzzle = puzzle.clone();
        Callback::from(move |side: Side| puzzle.dispatch(PuzzleAction::Focus(side)))
    };
    let on_blur = {
        let puzzle = puzzle.clone();
        Callback::from(move |side: Side| puzzle.dispatch(PuzzleAction::Blur(side)))
    };

    // Requests are not sequenced: whichever response lands last is what stays on screen.
    let on_submit = {
        let puzzle = puzzle.clone();
        Callback::from(move |_| {
            let request = puzzle.solve_request();
            clog(&format!("Sending data to server: {:?}", request));
            let puzzle = puzzle.clone();
            spawn_local(async move {
                if let Some(action) = settle_solve(api::solve(&request).await) {
                    puzzle.dispatch(action);
                }
            });
        })
    };
    let on_auto_populate = {
        let puzzle = puzzle.clone();
        Callback::from(move |_| {
            let puzzle = puzzle.clone();
            spawn_local(async move {
                if let Some(action) = settle_populate(api::populate().await) {
                    puzzle.dispatch(action);
                }
            });
        })
    };
    let on_restart = {
        let puzzle = puzzle.clone();
        Callback::from(move |_| {
            puzzle.dispatch(PuzzleAction::Restart);
            clog("Puzzle reset");
        })
    };
    let on_delete = {
        let puzzle = puzzle.clone();
        Callback::from(move |_| puzzle.dispatch(PuzzleAction::DeleteFocused))
    };

    let inputs = Side::ALL.iter().map(|&side| {
        html! { <SideInput
            field={puzzle.side(side).clone()}
            on_input={on_input.clone()}
            on_focus={on_focus.clone()}
            on_blur={on_blur.clone()}
            on_submit={on_submit.clone()}
        /> }
    });
    let tiles = Side::ALL.map(|side| puzzle.tiles(side));

    html! {
        <div style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif; padding:16px;">
            <h2 style="margin:0; text-align:center; color:#58a6ff;">{"Letter Boxed Solver"}</h2>
            <DateStamp />
            <TileRing {tiles} />
            <div style="display:flex; gap:12px; justify-content:center; flex-wrap:wrap;">{ for inputs }</div>
            <ControlsPanel
                on_enter={on_submit.clone()}
                {on_restart}
                {on_delete}
                {on_auto_populate}
            />
            <SolutionArea solution={puzzle.solution.clone()} node_ref={solution_ref} />
        </div>
    }
}
