//! Core data models for the Letter Boxed board.
//! The raw text of each side is the only stored letter state; tiles and the
//! uppercase form are always derived from it.

use std::rc::Rc;
use yew::Reducible;

use crate::api::{SolveRequest, SolveResponse};
use crate::config;
use crate::solution::SolutionView;
use crate::state::FocusTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Wire and populate order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    pub fn input_id(self) -> String {
        format!("{}-input", self.name())
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideField {
    pub side: Side,
    /// Exactly what the player typed.
    pub value: String,
    /// Placeholder currently shown; empty while the input has focus.
    pub placeholder: String,
    /// Whether the input holds DOM focus right now (unlike the focus tracker).
    pub has_focus: bool,
}

impl SideField {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            value: String::new(),
            placeholder: config::placeholder_template(side).to_string(),
            has_focus: false,
        }
    }

    pub fn template(&self) -> &'static str {
        config::placeholder_template(self.side)
    }

    /// Uppercased letters, one entry per character. No filtering.
    pub fn letters(&self) -> Vec<String> {
        self.value
            .to_uppercase()
            .chars()
            .map(String::from)
            .collect()
    }

    fn restore_placeholder(&mut self) {
        self.placeholder = self.template().to_string();
    }

    fn settle_placeholder(&mut self) {
        if self.value.is_empty() && !self.has_focus {
            self.restore_placeholder();
        }
    }
}

/// Lays `letters` over `slot_count` tiles; missing letters are blank, extras are dropped.
pub fn render_tiles(letters: &[String], slot_count: usize) -> Vec<String> {
    (0..slot_count)
        .map(|i| letters.get(i).cloned().unwrap_or_default())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleState {
    pub slot_count: usize,
    pub sides: [SideField; 4],
    pub focus: FocusTracker,
    pub solution: Option<SolutionView>,
    /// Bumped on every rendered solution so the view can scroll even for identical content.
    pub solution_version: u64,
}

impl PuzzleState {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            sides: Side::ALL.map(SideField::new),
            focus: FocusTracker::default(),
            solution: None,
            solution_version: 0,
        }
    }

    pub fn side(&self, side: Side) -> &SideField {
        &self.sides[side.index()]
    }

    fn side_mut(&mut self, side: Side) -> &mut SideField {
        &mut self.sides[side.index()]
    }

    pub fn tiles(&self, side: Side) -> Vec<String> {
        render_tiles(&self.side(side).letters(), self.slot_count)
    }

    pub fn solve_request(&self) -> SolveRequest {
        SolveRequest {
            top: self.side(Side::Top).value.clone(),
            right: self.side(Side::Right).value.clone(),
            bottom: self.side(Side::Bottom).value.clone(),
            left: self.side(Side::Left).value.clone(),
        }
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new(config::SLOT_COUNT)
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PuzzleAction {
    Input { side: Side, value: String },
    Focus(Side),
    Blur(Side),
    /// Drop the last character of the most recently focused side.
    DeleteFocused,
    Restart,
    Populate([String; 4]),
    ShowSolution(SolveResponse),
}

impl Reducible for PuzzleState {
    type Action = PuzzleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PuzzleAction::*;
        let mut new = (*self).clone();
        match action {
            Input { side, value } => {
                let field = new.side_mut(side);
                field.value = value;
                field.settle_placeholder();
            }
            Focus(side) => {
                new.focus.focus(side);
                let field = new.side_mut(side);
                field.has_focus = true;
                field.placeholder.clear();
            }
            Blur(side) => {
                let field = new.side_mut(side);
                field.has_focus = false;
                field.settle_placeholder();
            }
            DeleteFocused => {
                let Some(side) = new.focus.current() else { return self; };
                let field = new.side_mut(side);
                if field.value.pop().is_none() {
                    return self;
                }
                if field.value.is_empty() {
                    field.restore_placeholder();
                }
            }
            Restart => {
                for field in new.sides.iter_mut() {
                    field.value.clear();
                    field.restore_placeholder();
                }
                new.solution = None;
            }
            Populate(values) => {
                for (field, value) in new.sides.iter_mut().zip(values) {
                    field.value = value;
                    field.settle_placeholder();
                }
            }
            ShowSolution(resp) => {
                new.solution = Some(SolutionView::from(&resp));
                new.solution_version = new.solution_version.wrapping_add(1);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NytSolution;

    fn state() -> Rc<PuzzleState> {
        Rc::new(PuzzleState::new(3))
    }

    fn apply(state: Rc<PuzzleState>, actions: Vec<PuzzleAction>) -> Rc<PuzzleState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn input(side: Side, value: &str) -> PuzzleAction {
        PuzzleAction::Input { side, value: value.to_string() }
    }

    fn response(nyt: &[&str], two: &[&[&str]]) -> SolveResponse {
        let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        SolveResponse {
            nyt_solution: NytSolution { our_solution: words(nyt), sides: Vec::new() },
            two_word_solutions: two.iter().map(|&c| words(c)).collect(),
            three_word_solutions: Vec::new(),
        }
    }

    #[test]
    fn tiles_show_min_of_length_and_slots() {
        for text in ["", "a", "ab", "abc", "abcd", "abcdefgh", "éa", "éèêë", "ñ"] {
            let s = state().reduce(input(Side::Right, text));
            let tiles = s.tiles(Side::Right);
            assert_eq!(tiles.len(), 3);
            let filled = tiles.iter().filter(|t| !t.is_empty()).count();
            assert_eq!(filled, text.chars().count().min(3), "text {:?}", text);
            assert!(tiles[filled..].iter().all(|t| t.is_empty()));
        }
    }

    #[test]
    fn accented_letters_take_one_tile_each() {
        let s = state().reduce(input(Side::Bottom, "éa"));
        assert_eq!(s.tiles(Side::Bottom), vec!["É", "A", ""]);
    }

    #[test]
    fn tiles_are_uppercased_without_filtering() {
        let s = state().reduce(input(Side::Top, "a1?"));
        assert_eq!(s.tiles(Side::Top), vec!["A", "1", "?"]);
        assert_eq!(s.side(Side::Top).value, "a1?");
        assert_eq!(s.tiles(Side::Left), vec!["", "", ""]);
    }

    #[test]
    fn render_tiles_honours_slot_count() {
        let letters: Vec<String> = ["X", "Y"].iter().map(|l| l.to_string()).collect();
        assert_eq!(render_tiles(&letters, 4), vec!["X", "Y", "", ""]);
        assert_eq!(render_tiles(&letters, 1), vec!["X"]);
        assert_eq!(render_tiles(&letters, 4), render_tiles(&letters, 4));
    }

    #[test]
    fn delete_removes_one_char_from_last_focused_side() {
        let s = apply(
            state(),
            vec![
                PuzzleAction::Focus(Side::Bottom),
                input(Side::Bottom, "xyz"),
                PuzzleAction::Blur(Side::Bottom),
                PuzzleAction::DeleteFocused,
            ],
        );
        assert_eq!(s.side(Side::Bottom).value, "xy");
        assert_eq!(s.tiles(Side::Bottom), vec!["X", "Y", ""]);
    }

    #[test]
    fn delete_without_focus_is_a_noop() {
        let before = state().reduce(input(Side::Top, "abc"));
        let after = before.clone().reduce(PuzzleAction::DeleteFocused);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn delete_on_empty_field_is_a_noop() {
        let before = state().reduce(PuzzleAction::Focus(Side::Left));
        let after = before.clone().reduce(PuzzleAction::DeleteFocused);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn delete_to_empty_restores_placeholder() {
        let s = apply(
            state(),
            vec![
                PuzzleAction::Focus(Side::Top),
                input(Side::Top, "q"),
                PuzzleAction::Blur(Side::Top),
                PuzzleAction::DeleteFocused,
            ],
        );
        let field = s.side(Side::Top);
        assert!(field.value.is_empty());
        assert_eq!(field.placeholder, config::placeholder_template(Side::Top));
    }

    #[test]
    fn focus_hides_placeholder_and_blur_restores_it_only_when_empty() {
        let s = state().reduce(PuzzleAction::Focus(Side::Right));
        assert_eq!(s.side(Side::Right).placeholder, "");

        let s = s.reduce(input(Side::Right, "mno")).reduce(PuzzleAction::Blur(Side::Right));
        assert_eq!(s.side(Side::Right).placeholder, "");

        let s = s
            .reduce(PuzzleAction::Focus(Side::Right))
            .reduce(input(Side::Right, ""))
            .reduce(PuzzleAction::Blur(Side::Right));
        assert_eq!(s.side(Side::Right).placeholder, "Right letters");
    }

    #[test]
    fn blur_keeps_the_tracked_side() {
        let s = apply(
            state(),
            vec![PuzzleAction::Focus(Side::Left), PuzzleAction::Blur(Side::Left)],
        );
        assert_eq!(s.focus.current(), Some(Side::Left));
    }

    #[test]
    fn populate_assigns_sides_in_order() {
        let s = state().reduce(PuzzleAction::Populate(
            ["abc", "def", "ghi", "jkl"].map(String::from),
        ));
        assert_eq!(s.solve_request().top, "abc");
        assert_eq!(s.solve_request().left, "jkl");
        assert_eq!(s.tiles(Side::Right), vec!["D", "E", "F"]);
        assert_eq!(s.tiles(Side::Bottom), vec!["G", "H", "I"]);
    }

    #[test]
    fn solve_request_reads_raw_values() {
        let s = apply(
            state(),
            vec![
                input(Side::Top, "ABC"),
                input(Side::Right, "DEF"),
                input(Side::Bottom, "GHI"),
                input(Side::Left, "JKL"),
            ],
        );
        assert_eq!(
            s.solve_request(),
            SolveRequest {
                top: "ABC".into(),
                right: "DEF".into(),
                bottom: "GHI".into(),
                left: "JKL".into(),
            }
        );
    }

    #[test]
    fn restart_clears_everything_but_focus() {
        let s = apply(
            state(),
            vec![
                PuzzleAction::Focus(Side::Top),
                input(Side::Top, "abc"),
                input(Side::Left, "xyz"),
                PuzzleAction::ShowSolution(response(&["ABC"], &[])),
                PuzzleAction::Restart,
            ],
        );
        for side in Side::ALL {
            let field = s.side(side);
            assert!(field.value.is_empty());
            assert_eq!(field.placeholder, config::placeholder_template(side));
            assert!(s.tiles(side).iter().all(|t| t.is_empty()));
        }
        assert_eq!(s.solution, None);
        assert_eq!(s.focus.current(), Some(Side::Top));
    }

    #[test]
    fn latest_arriving_solution_wins() {
        let first = response(&["FIRST"], &[]);
        let second = response(&["SECOND"], &[&["A", "B"]]);
        // Second request resolves before the first.
        let s = apply(
            state(),
            vec![PuzzleAction::ShowSolution(second), PuzzleAction::ShowSolution(first)],
        );
        let view = s.solution.as_ref().unwrap();
        assert_eq!(view.nyt_line, "FIRST");
        assert!(view.two_word.is_empty());
        assert_eq!(s.solution_version, 2);
    }
}
