use std::num::ParseIntError;

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Input does not start with an `aag` header.
    #[snafu(display("missing 'aag' header"))]
    MissingHeader,

    /// Header line is malformed.
    #[snafu(display("invalid header on line {line}: expected 'aag M I L O A'"))]
    InvalidHeader { line: usize },

    /// A token that should be an unsigned integer is not.
    #[snafu(display("invalid number '{token}' on line {line}: {source}"))]
    InvalidNumber { line: usize, token: String, source: ParseIntError },

    /// A body line holds the wrong number of fields.
    #[snafu(display("line {line}: expected {expected} number(s)"))]
    MalformedLine { line: usize, expected: usize },

    /// Sequential elements are outside the combinational model.
    #[snafu(display("latches are not supported (found {count})"))]
    LatchesUnsupported { count: u32 },

    /// Inputs and AND outputs must be defined by an even, non-constant literal.
    #[snafu(display("literal {literal} cannot be defined (must be even and non-zero)"))]
    InvalidDefinition { literal: u32 },

    /// A literal is used but never defined by an input or an AND.
    #[snafu(display("literal {literal} is used but never defined"))]
    UndefinedLiteral { literal: u32 },

    /// A variable is defined twice.
    #[snafu(display("variable {variable} is defined more than once"))]
    DuplicateDefinition { variable: u32 },

    /// AND definitions form a cycle.
    #[snafu(display("combinational cycle through variable {variable}"))]
    CyclicDefinition { variable: u32 },

    /// A literal exceeds the maximum variable index from the header.
    #[snafu(display("literal {literal} exceeds maximum variable index {max_variable}"))]
    LiteralOutOfRange { literal: u32, max_variable: u32 },

    /// File ended before all declared lines were read.
    #[snafu(display("truncated file: expected {expected} more line(s) in the {section} section"))]
    TruncatedFile { expected: u32, section: &'static str },

    /// Networks compared for equivalence expose different interfaces.
    #[snafu(display(
        "interface mismatch: {lhs_pis} inputs / {lhs_pos} outputs vs {rhs_pis} inputs / {rhs_pos} outputs"
    ))]
    InterfaceMismatch { lhs_pis: usize, rhs_pis: usize, lhs_pos: usize, rhs_pos: usize },

    /// Exhaustive simulation would be too large.
    #[snafu(display("too many primary inputs for exhaustive simulation: {count} (max {max})"))]
    TooManyInputs { count: usize, max: usize },
}
