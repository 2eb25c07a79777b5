//! ASCII AIGER (`aag`) reading and writing.
//!
//! Only the combinational subset is supported: a header, input literals,
//! output literals and AND definitions. Latches are rejected. Anything after
//! the AND section (symbol table, comments) is ignored on input and not
//! produced on output.

use std::collections::HashMap;

use snafu::{OptionExt, ResultExt, ensure};

use crate::aig::Aig;
use crate::error::*;
use crate::network::Network;
use crate::signal::Signal;

struct Header {
    max_variable: u32,
    inputs: u32,
    latches: u32,
    outputs: u32,
    ands: u32,
}

struct Lines<'s> {
    inner: std::iter::Enumerate<std::str::Lines<'s>>,
}

impl<'s> Lines<'s> {
    fn new(source: &'s str) -> Self {
        Self { inner: source.lines().enumerate() }
    }

    /// Next non-empty line with its 1-based number.
    fn next_line(&mut self) -> Option<(usize, &'s str)> {
        self.inner.by_ref().map(|(i, l)| (i + 1, l.trim())).find(|(_, l)| !l.is_empty())
    }

    /// Next line, which must hold exactly `K` numbers.
    fn expect_numbers<const K: usize>(&mut self, remaining: u32, section: &'static str) -> Result<[u32; K]> {
        let (line, text) = self.next_line().context(TruncatedFileSnafu { expected: remaining, section })?;
        let numbers = parse_numbers(line, text)?;
        <[u32; K]>::try_from(numbers).ok().context(MalformedLineSnafu { line, expected: K })
    }
}

fn parse_numbers(line: usize, text: &str) -> Result<Vec<u32>> {
    text.split_whitespace().map(|token| token.parse::<u32>().context(InvalidNumberSnafu { line, token })).collect()
}

fn parse_header(lines: &mut Lines<'_>) -> Result<Header> {
    let (line, text) = lines.next_line().context(MissingHeaderSnafu)?;
    let mut tokens = text.split_whitespace();
    ensure!(tokens.next() == Some("aag"), MissingHeaderSnafu);

    let numbers = tokens
        .map(|token| token.parse::<u32>().context(InvalidNumberSnafu { line, token }))
        .collect::<Result<Vec<_>>>()?;
    let &[max_variable, inputs, latches, outputs, ands] = &numbers[..] else {
        return InvalidHeaderSnafu { line }.fail();
    };
    Ok(Header { max_variable, inputs, latches, outputs, ands })
}

fn check_range(literal: u32, max_variable: u32) -> Result<()> {
    ensure!(literal >> 1 <= max_variable, LiteralOutOfRangeSnafu { literal, max_variable });
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Maps AIGER variables to network signals, building AND gates on demand.
///
/// All tables are keyed by variable and only hold the ones seen so far.
struct Builder {
    aig: Aig,
    signals: HashMap<u32, Signal>,
    definitions: HashMap<u32, (u32, u32)>,
    marks: HashMap<u32, Mark>,
}

impl Builder {
    fn new() -> Self {
        Self {
            aig: Aig::new(),
            signals: HashMap::from([(0, Signal::FALSE)]),
            definitions: HashMap::new(),
            marks: HashMap::new(),
        }
    }

    fn lookup(&self, literal: u32) -> Option<Signal> {
        self.signals.get(&(literal >> 1)).map(|&s| s ^ (literal & 1 == 1))
    }

    fn is_resolved(&self, variable: u32) -> bool {
        self.signals.contains_key(&variable)
    }

    fn resolve(&mut self, literal: u32) -> Result<Signal> {
        if let Some(signal) = self.lookup(literal) {
            return Ok(signal);
        }

        let mut stack = vec![(literal >> 1, false)];
        while let Some((variable, expanded)) = stack.pop() {
            if self.is_resolved(variable) {
                continue;
            }
            let (rhs0, rhs1) =
                *self.definitions.get(&variable).context(UndefinedLiteralSnafu { literal: variable << 1 })?;

            if expanded {
                // Both operands were resolved before this entry resurfaced.
                let a = self.lookup(rhs0).context(UndefinedLiteralSnafu { literal: rhs0 })?;
                let b = self.lookup(rhs1).context(UndefinedLiteralSnafu { literal: rhs1 })?;
                self.signals.insert(variable, self.aig.create_and(a, b));
                self.marks.insert(variable, Mark::Done);
                continue;
            }

            ensure!(!self.marks.contains_key(&variable), CyclicDefinitionSnafu { variable });
            self.marks.insert(variable, Mark::InProgress);
            stack.push((variable, true));
            for rhs in [rhs1, rhs0] {
                let child = rhs >> 1;
                if self.is_resolved(child) {
                    continue;
                }
                ensure!(self.marks.get(&child) != Some(&Mark::InProgress), CyclicDefinitionSnafu { variable: child });
                stack.push((child, false));
            }
        }

        self.lookup(literal).context(UndefinedLiteralSnafu { literal })
    }
}

/// Parse an ASCII AIGER file into a fresh [`Aig`].
pub fn read_aag(source: &str) -> Result<Aig> {
    let mut lines = Lines::new(source);
    let header = parse_header(&mut lines)?;
    ensure!(header.latches == 0, LatchesUnsupportedSnafu { count: header.latches });
    tracing::debug!(
        max_variable = header.max_variable,
        inputs = header.inputs,
        outputs = header.outputs,
        ands = header.ands,
        "parsed aag header"
    );

    let mut builder = Builder::new();

    for i in 0..header.inputs {
        let [literal] = lines.expect_numbers::<1>(header.inputs - i, "input")?;
        ensure!(literal >= 2 && literal & 1 == 0, InvalidDefinitionSnafu { literal });
        check_range(literal, header.max_variable)?;
        let variable = literal >> 1;
        ensure!(!builder.is_resolved(variable), DuplicateDefinitionSnafu { variable });
        let pi = builder.aig.create_pi();
        builder.signals.insert(variable, pi);
        builder.marks.insert(variable, Mark::Done);
    }

    let mut outputs = Vec::new();
    for i in 0..header.outputs {
        let [literal] = lines.expect_numbers::<1>(header.outputs - i, "output")?;
        check_range(literal, header.max_variable)?;
        outputs.push(literal);
    }

    for i in 0..header.ands {
        let [lhs, rhs0, rhs1] = lines.expect_numbers::<3>(header.ands - i, "and")?;
        ensure!(lhs >= 2 && lhs & 1 == 0, InvalidDefinitionSnafu { literal: lhs });
        for literal in [lhs, rhs0, rhs1] {
            check_range(literal, header.max_variable)?;
        }
        let variable = lhs >> 1;
        ensure!(
            !builder.is_resolved(variable) && !builder.definitions.contains_key(&variable),
            DuplicateDefinitionSnafu { variable }
        );
        builder.definitions.insert(variable, (rhs0, rhs1));
    }

    for literal in outputs {
        let signal = builder.resolve(literal)?;
        builder.aig.create_po(signal);
    }
    Ok(builder.aig)
}

/// Render the live part of `aig` as ASCII AIGER.
///
/// The network is compacted first, so variables are numbered densely:
/// inputs first, then gates in topological order.
pub fn write_aag(aig: &Aig) -> String {
    let compact = aig.compact();
    let gates = compact.gates();
    let max_variable = compact.size() - 1;

    let header = format!("aag {} {} 0 {} {}", max_variable, compact.num_pis(), compact.num_pos(), gates.len());
    let inputs = compact.pis().iter().map(|&pi| Signal::from(pi).literal().to_string());
    let outputs = compact.pos().iter().map(|po| po.literal().to_string());
    let ands = gates.iter().map(|&gate| {
        let fanins = compact.fanins(gate);
        // AIGER lists the larger operand first.
        format!("{} {} {}", Signal::from(gate).literal(), fanins[1].literal(), fanins[0].literal())
    });

    std::iter::once(header).chain(inputs).chain(outputs).chain(ands).map(|line| line + "\n").collect()
}
