use crate::api::SolveResponse;

pub const NYT_HEADING: &str = "NYT Solution";
pub const TWO_WORD_HEADING: &str = "Two-Word Solutions";
pub const THREE_WORD_HEADING: &str = "Three-Word Solutions";

/// Text content of the solution area, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionView {
    pub nyt_line: String,
    pub two_word: Vec<String>,
    pub three_word: Vec<String>,
}

fn join_words(words: &[String]) -> String {
    words.join(", ")
}

impl From<&SolveResponse> for SolutionView {
    fn from(resp: &SolveResponse) -> Self {
        Self {
            nyt_line: join_words(&resp.nyt_solution.our_solution),
            two_word: resp.two_word_solutions.iter().map(|c| join_words(c)).collect(),
            three_word: resp.three_word_solutions.iter().map(|c| join_words(c)).collect(),
        }
    }
}
