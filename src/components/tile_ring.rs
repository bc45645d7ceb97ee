use yew::prelude::*;

use crate::model::Side;

#[derive(Properties, PartialEq, Clone)]
pub struct TileRingProps {
    /// Rendered tiles per side, indexed by `Side::index`.
    pub tiles: [Vec<String>; 4],
}

// Grid cell (row, column), 1-based, of tile `i` on `side` for a box with `n` tiles per side.
fn cell(side: Side, i: usize, n: usize) -> (usize, usize) {
    let last = n + 2;
    match side {
        Side::Top => (1, i + 2),
        Side::Right => (i + 2, last),
        Side::Bottom => (last, i + 2),
        Side::Left => (i + 2, 1),
    }
}

#[function_component(TileRing)]
pub fn tile_ring(props: &TileRingProps) -> Html {
    let n = props.tiles.iter().map(Vec::len).max().unwrap_or(0);
    let tile_style = "width:48px; height:48px; border-radius:50%; background:#161b22; border:2px solid #58a6ff; display:flex; align-items:center; justify-content:center;";
    let letter_style = "font-size:22px; font-weight:700; color:#e6edf3;";
    let sides = Side::ALL.iter().map(|&side| {
        let tiles = props.tiles[side.index()].iter().enumerate().map(|(i, letter)| {
            let (row, col) = cell(side, i, n);
            html! {
                <div class="tile" style={format!("{} grid-row:{}; grid-column:{};", tile_style, row, col)}>
                    <span class="letter" style={letter_style}>{ letter.clone() }</span>
                </div>
            }
        });
        html! { <div class={format!("{}-side", side.name())} style="display:contents;">{ for tiles }</div> }
    });
    html! {
        <div id="puzzle-area" style={format!("display:grid; grid-template-columns:repeat({0}, 56px); grid-template-rows:repeat({0}, 56px); justify-content:center; margin:24px auto; position:relative;", n + 2)}>
            <div style={format!("grid-row:2 / {0}; grid-column:2 / {0}; border:3px solid #e6edf3;", n + 2)}></div>
            { for sides }
        </div>
    }
}
