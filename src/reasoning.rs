//! Reasoning Engine — explains a code letter by letter.
//!
//! Independent of search. Each dimension contributes one clause chosen by
//! the letter at its position; the description comes from the registry.

use serde::Serialize;

use crate::model::{Code, Dimension, description};
use crate::Result;

/// Breakdown of a single code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub code: Code,
    pub description: &'static str,
    /// One clause per dimension, in dimension order.
    pub clauses: [&'static str; 4],
}

/// Clause table: `[dimension][letter slot]`, slots following `Dimension::letters`.
static CLAUSES: [[&str; 2]; 4] = [
    [
        "Extraverted: draws energy from social interaction",
        "Introverted: draws energy from time alone",
    ],
    [
        "Intuitive: focuses on ideas and abstract patterns",
        "Sensing: prefers concrete facts and real experiences",
    ],
    [
        "Thinking: makes decisions based on logic and objectivity",
        "Feeling: makes decisions based on values and empathy",
    ],
    [
        "Judging: prefers planning, structure and closure",
        "Perceiving: prefers flexibility and spontaneity",
    ],
];

/// The canned clause for `letter` at `dim`, or `None` if the letter does
/// not belong to that dimension.
pub fn clause(dim: Dimension, letter: char) -> Option<&'static str> {
    let slot = dim.letters().iter().position(|&l| l == letter)?;
    Some(CLAUSES[dim.index()][slot])
}

/// Validate `code` and explain it.
///
/// ```rust
/// let why = typeflip::explain("INTJ").unwrap();
/// assert_eq!(why.clauses[0], "Introverted: draws energy from time alone");
/// ```
pub fn explain(code: &str) -> Result<Explanation> {
    Ok(explain_code(Code::parse(code)?))
}

/// Explain an already-validated code.
pub fn explain_code(code: Code) -> Explanation {
    let clauses = Dimension::ALL.map(|dim| {
        let [first, _] = dim.letters();
        let slot = usize::from(code.letter(dim) != first);
        CLAUSES[dim.index()][slot]
    });
    Explanation {
        code,
        description: description(code.as_str()),
        clauses,
    }
}
