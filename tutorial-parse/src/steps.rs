//! Line-oriented state machine that splits the steps section into [`Step`]s.
//!
//! ```text
//! ///            <- opens step N (OutsideDef -> InsideDef)
//! key: value     <- parameter text
//! ///            <- closes the parameter block (InsideDef -> OutsideDef)
//! body text      <- markdown body, until the next `///` or end of input
//! ```

use tracing::{debug, trace};

use crate::block::parse_block_at;
use crate::error::ParseError;
use crate::markup::MarkupRenderer;
use crate::types::Step;

/// A line consisting solely of this marker opens a step or closes its parameters.
pub const STEP_DELIMITER: &str = "///";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Accumulating a step body, or leading text before the first step.
    OutsideDef,
    /// Accumulating a step's parameter block.
    InsideDef,
}

/// The step currently being accumulated.
struct OpenStep {
    step: Step,
    params: String,
    params_line: usize,
    body: String,
}

/// Incremental step scanner. Feed it lines with [`StepParser::line`] and
/// collect the result with [`StepParser::finish`].
///
/// Steps are numbered from 1 in the order their opening delimiter appears,
/// whether or not their parameter block is ever closed.
pub struct StepParser<'r, R: MarkupRenderer + ?Sized> {
    renderer: &'r R,
    mode: Mode,
    open: Option<OpenStep>,
    next_number: usize,
    steps: Vec<Step>,
}

impl<'r, R: MarkupRenderer + ?Sized> StepParser<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self {
            renderer,
            mode: Mode::OutsideDef,
            open: None,
            next_number: 1,
            steps: Vec::new(),
        }
    }

    /// Consume one line, including its trailing newline if it has one.
    /// `line_number` is the 1-based position of the line in the document.
    pub fn line(&mut self, line: &str, line_number: usize) -> Result<(), ParseError> {
        let is_delimiter = line.trim() == STEP_DELIMITER;

        match (self.mode, is_delimiter) {
            (Mode::OutsideDef, true) => {
                self.finalize();

                let number = self.next_number;
                self.next_number += 1;
                debug!(number, line = line_number, "opening step");

                self.open = Some(OpenStep {
                    step: Step::new(number),
                    params: String::new(),
                    params_line: line_number + 1,
                    body: String::new(),
                });
                self.mode = Mode::InsideDef;
            }
            (Mode::InsideDef, true) => {
                if let Some(open) = self.open.as_mut() {
                    open.step.params = parse_block_at(&open.params, open.params_line)?;
                }
                self.mode = Mode::OutsideDef;
            }
            (Mode::InsideDef, false) => {
                if let Some(open) = self.open.as_mut() {
                    open.params.push_str(line);
                }
            }
            (Mode::OutsideDef, false) => match self.open.as_mut() {
                Some(open) => open.body.push_str(line),
                None => trace!(line = line_number, "ignoring text before first step"),
            },
        }

        Ok(())
    }

    /// Finalize the open step, if any, and return all steps in order.
    ///
    /// A step whose parameter block was never closed keeps empty params and
    /// an empty body.
    pub fn finish(mut self) -> Vec<Step> {
        self.finalize();
        self.steps
    }

    /// Attach the accumulated body and its rendered HTML to the open step and
    /// move it to the output.
    fn finalize(&mut self) {
        let Some(OpenStep { mut step, body, .. }) = self.open.take() else {
            return;
        };

        step.rendered_body = self.renderer.render(&body);
        step.body = body;
        debug!(number = step.number, "finalized step");
        self.steps.push(step);
    }
}

/// Parse the steps section. `first_line` is the 1-based document line on
/// which `text` begins and is used only for error locations.
pub fn parse_steps<R: MarkupRenderer + ?Sized>(
    text: &str,
    first_line: usize,
    renderer: &R,
) -> Result<Vec<Step>, ParseError> {
    let mut parser = StepParser::new(renderer);
    for (offset, line) in text.split_inclusive('\n').enumerate() {
        parser.line(line, first_line + offset)?;
    }
    Ok(parser.finish())
}
