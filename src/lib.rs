//! svg2desmos converts simple SVG line art into a Desmos graph.
//!
//! Each supported shape becomes one or more LaTeX expressions that redraw
//! it on the calculator: straight lines as clamped implicit lines, path
//! curves as bounded cubic Bézier parametrizations, ellipses as implicit
//! equations. The expressions are collected into an uploadable graph
//! document behind a set of shared helper functions.
//!
//! ```no_run
//! let source = std::fs::read_to_string("drawing.svg").unwrap();
//! let graph = svg2desmos::convert(&source).unwrap();
//! println!("{}", graph.to_json().unwrap());
//! ```

pub mod dom;
pub mod errors;
pub mod formula;
pub mod graph;
pub mod lexer;
pub mod path;
pub mod style;
pub mod translate;
pub mod upload;

pub use errors::ConvertError;
pub use graph::{Expression, GraphDocument, Plot, Viewport};

/// Convert SVG source into a complete graph document.
///
/// Helpers occupy ids 0..=3, then one block of expressions per shape
/// element in document order. Any unsupported or malformed input aborts
/// the whole conversion.
pub fn convert(source: &str) -> Result<GraphDocument, ConvertError> {
    let tree = dom::parse(source)?;
    let plots = translate::translate(&tree)?;
    let mut builder = graph::GraphBuilder::new();
    builder.extend(plots);
    Ok(builder.build())
}
