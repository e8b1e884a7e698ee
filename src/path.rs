//! Path command interpreter
//!
//! A single pass over one path's token stream. The walker keeps two points
//! of state: the cursor (where the previous command left off) and the start
//! of the current subpath. Curve commands emit one expression each; close
//! commands emit the line connecting the cursor back to the subpath start.
//! All emitted y-values are negated so the image is upright on the
//! calculator's upward y-axis.

use glam::DVec2;
use tracing::{debug, warn};

use crate::errors::{PathError, path_source};
use crate::formula::{self, fixed};
use crate::graph::Plot;
use crate::lexer::{Token, TokenKind, TokenStream};

/// The commands the interpreter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// `M`: start a new subpath.
    MoveTo,
    /// `C`/`c`: cubic Bézier segment. The relative form is recognized but
    /// currently interpreted with absolute coordinates.
    Curve { relative: bool },
    /// `Z`/`z`: close the current subpath.
    Close,
    /// `L`: recognized but not yet converted.
    Line,
}

impl Command {
    fn classify(letter: char) -> Option<Command> {
        match letter {
            'M' => Some(Command::MoveTo),
            'C' => Some(Command::Curve { relative: false }),
            'c' => Some(Command::Curve { relative: true }),
            'Z' | 'z' => Some(Command::Close),
            'L' => Some(Command::Line),
            _ => None,
        }
    }
}

/// Everything one path element produced.
#[derive(Debug)]
pub struct PathTrace {
    /// Expressions in emission order, all black.
    pub plots: Vec<Plot>,
    /// Where the cursor ended up.
    pub cursor: DVec2,
}

/// Interpret a path "d" attribute.
pub fn trace(data: &str) -> Result<PathTrace, PathError> {
    let mut tokens = TokenStream::lex(data)?;
    let mut walker = Walker::default();
    while let Some(token) = tokens.next() {
        if token.kind == TokenKind::Letter {
            walker.run(&mut tokens, token)?;
        }
        // stray numbers and separators between commands are skipped
    }
    Ok(PathTrace {
        plots: walker.plots,
        cursor: walker.cursor,
    })
}

#[derive(Debug, Default)]
struct Walker {
    cursor: DVec2,
    subpath_start: DVec2,
    plots: Vec<Plot>,
}

impl Walker {
    fn run(&mut self, tokens: &mut TokenStream, token: Token) -> Result<(), PathError> {
        let letter = token
            .text
            .chars()
            .next()
            .expect("letter tokens are single characters");
        let command = Command::classify(letter).ok_or_else(|| PathError::UnrecognizedCommand {
            command: letter,
            src: path_source(tokens.source()),
            span: token.span(),
        })?;

        match command {
            Command::MoveTo => {
                let point = parse_pair(tokens)?;
                self.cursor = point;
                self.subpath_start = point;
            }
            Command::Curve { relative } => {
                if relative {
                    debug!("interpreting relative curve with absolute coordinates");
                }
                self.curve(tokens, token)?;
            }
            Command::Close => self.close_subpath(),
            Command::Line => {
                warn!("lineto command is not converted, skipping");
            }
        }
        Ok(())
    }

    /// Parse exactly three coordinate pairs and emit one cubic expression.
    fn curve(&mut self, tokens: &mut TokenStream, command: Token) -> Result<(), PathError> {
        let mut points = Vec::new();
        while matches!(tokens.peek(), Some(t) if t.kind == TokenKind::Number) {
            points.push(parse_pair(tokens)?);
            tokens.consume_whitespace();
            tokens.consume_comma();
        }
        let [control1, control2, end] = points[..] else {
            return Err(PathError::UnexpectedPointCount {
                found: points.len(),
                src: path_source(tokens.source()),
                span: command.span(),
            });
        };

        let latex = formula::substitute(
            formula::CUBIC_BEZIER,
            &[
                ("x1", fixed(self.cursor.x).as_str()),
                ("y1", fixed(-self.cursor.y).as_str()),
                ("x2", fixed(control1.x).as_str()),
                ("y2", fixed(-control1.y).as_str()),
                ("x3", fixed(control2.x).as_str()),
                ("y3", fixed(-control2.y).as_str()),
                ("x4", fixed(end.x).as_str()),
                ("y4", fixed(-end.y).as_str()),
            ],
        );
        self.plots.push(Plot::black(latex));
        self.cursor = end;
        Ok(())
    }

    /// Connect the cursor back to the subpath start.
    ///
    /// Runs the same vertical/horizontal/point-slope ladder as straight
    /// lines, on unflipped coordinates; the point-slope bounds flip y at
    /// substitution time. A close at the subpath start still emits a
    /// degenerate vertical segment.
    fn close_subpath(&mut self) {
        let from = self.cursor;
        let to = self.subpath_start;

        let latex = if to.x == from.x {
            formula::substitute(
                formula::VERTICAL_LINE,
                &[
                    ("x1", fixed(from.x).as_str()),
                    ("top", fixed(from.y.min(to.y)).as_str()),
                    ("bottom", fixed(from.y.max(to.y)).as_str()),
                ],
            )
        } else if to.y == from.y {
            formula::substitute(
                formula::HORIZONTAL_LINE,
                &[
                    ("y1", fixed(from.y).as_str()),
                    ("left", fixed(from.x.min(to.x)).as_str()),
                    ("right", fixed(from.x.max(to.x)).as_str()),
                ],
            )
        } else {
            formula::substitute(
                formula::POINT_SLOPE,
                &[
                    ("x1", fixed(from.x).as_str()),
                    ("x2", fixed(to.x).as_str()),
                    ("y1", fixed(from.y).as_str()),
                    ("y2", fixed(to.y).as_str()),
                    ("top", fixed(-from.y.min(to.y)).as_str()),
                    ("bottom", fixed(-from.y.max(to.y)).as_str()),
                    ("left", fixed(from.x.min(to.x)).as_str()),
                    ("right", fixed(from.x.max(to.x)).as_str()),
                ],
            )
        };

        self.plots.push(Plot::black(latex));
        self.cursor = self.subpath_start;
    }
}

/// Parse one coordinate pair, allowing a single whitespace or comma
/// separator between the two numbers.
fn parse_pair(tokens: &mut TokenStream) -> Result<DVec2, PathError> {
    tokens.consume_whitespace();
    let x = expect_number(tokens)?;
    if matches!(
        tokens.peek(),
        Some(t) if t.kind == TokenKind::Whitespace || t.kind == TokenKind::Comma
    ) {
        tokens.next();
    }
    let y = expect_number(tokens)?;
    Ok(DVec2::new(x, y))
}

fn expect_number(tokens: &mut TokenStream) -> Result<f64, PathError> {
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Number => {
            token.text.parse().map_err(|_| PathError::MalformedNumber {
                src: path_source(tokens.source()),
                span: token.span(),
            })
        }
        Some(token) => Err(PathError::ExpectedNumber {
            found: format!("{:?}", token.text),
            src: path_source(tokens.source()),
            span: token.span(),
        }),
        None => Err(PathError::ExpectedNumber {
            found: "end of path data".to_string(),
            src: path_source(tokens.source()),
            span: tokens.end_span(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn moveto_places_cursor_and_subpath_start() {
        let trace = trace("M3,4").unwrap();
        assert!(trace.plots.is_empty());
        assert_eq!(trace.cursor, pt(3.0, 4.0));
    }

    #[test]
    fn curve_emits_one_flipped_expression() {
        let trace = trace("M0,0 C1,1 2,2 3,3").unwrap();
        assert_eq!(trace.plots.len(), 1);
        assert_eq!(
            trace.plots[0].latex,
            r"\left(B_x\left(t,0.000000,1.000000,2.000000,3.000000\right),B_y\left(t,-0.000000,-1.000000,-2.000000,-3.000000\right)\right)"
        );
        assert_eq!(trace.plots[0].color, "#000000");
        assert_eq!(trace.cursor, pt(3.0, 3.0));
    }

    #[test]
    fn relative_curve_is_interpreted_like_absolute() {
        let absolute = trace("M5,5 C6,6 7,7 8,8").unwrap();
        let relative = trace("M5,5 c6,6 7,7 8,8").unwrap();
        assert_eq!(absolute.plots[0].latex, relative.plots[0].latex);
        assert_eq!(relative.cursor, pt(8.0, 8.0));
    }

    #[test]
    fn curve_with_two_pairs_is_rejected() {
        let err = trace("M0,0 C1,1 2,2").unwrap_err();
        assert!(matches!(err, PathError::UnexpectedPointCount { found: 2, .. }));
    }

    #[test]
    fn curve_with_four_pairs_is_rejected() {
        let err = trace("M0,0 C1,1 2,2 3,3 4,4").unwrap_err();
        assert!(matches!(err, PathError::UnexpectedPointCount { found: 4, .. }));
    }

    #[test]
    fn chained_curves_advance_the_cursor() {
        let trace = trace("M0,0 C0,1 1,1 1,0 C1,-1 2,-1 2,0").unwrap();
        assert_eq!(trace.plots.len(), 2);
        // second segment starts where the first ended
        assert!(trace.plots[1].latex.starts_with(r"\left(B_x\left(t,1.000000"));
        assert_eq!(trace.cursor, pt(2.0, 0.0));
    }

    #[test]
    fn close_on_shared_x_emits_vertical() {
        let trace = trace("M1,5 C2,6 3,7 1,9 Z").unwrap();
        assert_eq!(trace.plots.len(), 2);
        assert_eq!(
            trace.plots[1].latex,
            r"x=v\left(y,1.000000,-9.000000,5.000000\right)"
        );
    }

    #[test]
    fn close_on_shared_y_emits_horizontal() {
        let trace = trace("M1,1 C2,0 4,0 5,1 Z").unwrap();
        assert_eq!(trace.plots.len(), 2);
        assert_eq!(
            trace.plots[1].latex,
            r"y=h\left(x,-1.000000,1.000000,5.000000\right)"
        );
    }

    #[test]
    fn close_on_diagonal_emits_point_slope_with_flipped_bounds() {
        let trace = trace("M0,0 C1,1 2,2 3,4 Z").unwrap();
        assert_eq!(
            trace.plots[1].latex,
            r"-y-4.000000=\frac{0.000000-4.000000}{0.000000-3.000000}\left(x-3.000000\right)\left\{0.000000<x<3.000000\right\}\left\{-4.000000<y<-0.000000\right\}"
        );
    }

    #[test]
    fn degenerate_close_still_emits() {
        let trace = trace("M2,3 Z").unwrap();
        assert_eq!(trace.plots.len(), 1);
        assert_eq!(
            trace.plots[0].latex,
            r"x=v\left(y,2.000000,-3.000000,3.000000\right)"
        );
    }

    #[test]
    fn close_returns_the_cursor_to_the_subpath_start() {
        let trace = trace("M1,1 C2,0 4,0 5,1 Z").unwrap();
        assert_eq!(trace.cursor, pt(1.0, 1.0));
    }

    #[test]
    fn lineto_is_recognized_but_skipped() {
        let trace = trace("M0,0 L5,5").unwrap();
        assert!(trace.plots.is_empty());
        // the unconsumed coordinates are stray tokens, not commands
        assert_eq!(trace.cursor, pt(0.0, 0.0));
    }

    #[test]
    fn unrecognized_command_is_fatal() {
        let err = trace("M0,0 Q1,1 2,2").unwrap_err();
        assert!(matches!(err, PathError::UnrecognizedCommand { command: 'Q', .. }));
    }

    #[test]
    fn tokenizer_error_is_fatal() {
        let err = trace("M0,0 # C1,1 2,2 3,3").unwrap_err();
        assert!(matches!(err, PathError::InvalidToken { .. }));
    }

    #[test]
    fn incomplete_pair_is_fatal() {
        let err = trace("M1").unwrap_err();
        assert!(matches!(err, PathError::ExpectedNumber { .. }));
    }

    #[test]
    fn empty_path_yields_nothing() {
        let trace = trace("").unwrap();
        assert!(trace.plots.is_empty());
        assert_eq!(trace.cursor, pt(0.0, 0.0));
    }
}
