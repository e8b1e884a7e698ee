//! Error types with rich diagnostics using miette
//!
//! Conversion never panics on bad input: every malformed SVG, style string,
//! or path command maps to one of the closed error sets below, and any one
//! of them aborts the whole document. Path errors carry source spans into
//! the offending "d" attribute.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Wrap a path "d" string as a named source for span-carrying diagnostics.
pub(crate) fn path_source(data: &str) -> NamedSource<String> {
    NamedSource::new("path data", data.to_string())
}

// ============================================================================
// Element Tree Errors
// ============================================================================

/// Errors reading the SVG element tree
#[derive(Error, Diagnostic, Debug)]
pub enum DomError {
    #[error("invalid XML: {0}")]
    #[diagnostic(code(svg2desmos::dom::invalid_xml))]
    InvalidXml(#[from] roxmltree::Error),

    #[error("root element is <{found}>, expected <svg>")]
    #[diagnostic(code(svg2desmos::dom::not_an_svg))]
    NotAnSvg { found: String },

    #[error("missing canvas {attribute} on the root element")]
    #[diagnostic(code(svg2desmos::dom::missing_canvas_size))]
    MissingCanvasSize { attribute: &'static str },

    #[error("canvas {attribute} is not a number: {value:?}")]
    #[diagnostic(
        code(svg2desmos::dom::invalid_canvas_size),
        help("unit suffixes like \"100px\" are not supported; use a bare number")
    )]
    InvalidCanvasSize {
        attribute: &'static str,
        value: String,
    },
}

// ============================================================================
// Style Errors
// ============================================================================

/// Errors parsing inline styles and colors
#[derive(Error, Diagnostic, Debug)]
pub enum StyleError {
    #[error("malformed style declaration: {declaration:?}")]
    #[diagnostic(
        code(svg2desmos::style::malformed_declaration),
        help("declarations are `;`-separated `key:value` pairs")
    )]
    MalformedDeclaration { declaration: String },

    #[error("no stroke color in style attribute")]
    #[diagnostic(code(svg2desmos::style::missing_stroke))]
    MissingStroke,

    #[error("unsupported color: {value:?}")]
    #[diagnostic(
        code(svg2desmos::style::unsupported_color),
        help("supported forms are #rrggbb and rgb(r,g,b)")
    )]
    UnsupportedColor { value: String },
}

// ============================================================================
// Path Data Errors
// ============================================================================

/// Errors tokenizing or interpreting a path "d" attribute
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("invalid path data")]
    #[diagnostic(code(svg2desmos::path::invalid_token))]
    InvalidToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("no path token matches here")]
        span: SourceSpan,
    },

    #[error("malformed number")]
    #[diagnostic(code(svg2desmos::path::malformed_number))]
    MalformedNumber {
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot be read as a decimal value")]
        span: SourceSpan,
    },

    #[error("expected a number, found {found}")]
    #[diagnostic(code(svg2desmos::path::expected_number))]
    ExpectedNumber {
        found: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("coordinate pair is incomplete")]
        span: SourceSpan,
    },

    #[error("unexpected point count: {found}")]
    #[diagnostic(
        code(svg2desmos::path::unexpected_point_count),
        help("a cubic curve takes exactly three coordinate pairs")
    )]
    UnexpectedPointCount {
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this curve command")]
        span: SourceSpan,
    },

    #[error("unrecognized path command {command:?}")]
    #[diagnostic(code(svg2desmos::path::unrecognized_command))]
    UnrecognizedCommand {
        command: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a supported command")]
        span: SourceSpan,
    },
}

// ============================================================================
// Translation Errors
// ============================================================================

/// Errors translating one shape element into expressions
#[derive(Error, Diagnostic, Debug)]
pub enum TranslateError {
    #[error("unsupported element <{name}>")]
    #[diagnostic(
        code(svg2desmos::translate::unsupported_element),
        help("only <line>, <ellipse> and <path> elements are converted")
    )]
    UnsupportedElement { name: String },

    #[error("missing attribute {attribute:?} on <{element}>")]
    #[diagnostic(code(svg2desmos::translate::missing_attribute))]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("attribute {attribute:?} on <{element}> is not a number: {value:?}")]
    #[diagnostic(code(svg2desmos::translate::malformed_number))]
    MalformedNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),
}

// ============================================================================
// Top-Level Conversion Error
// ============================================================================

/// Any failure while converting an SVG document into a graph
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),
}

// ============================================================================
// Upload Errors
// ============================================================================

/// Errors talking to the calculator service
#[derive(Error, Diagnostic, Debug)]
pub enum UploadError {
    #[error("could not serialize the graph document")]
    #[diagnostic(code(svg2desmos::upload::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("request to the calculator service failed")]
    #[diagnostic(code(svg2desmos::upload::http))]
    Http(#[from] reqwest::Error),

    #[error("upload rejected with status {status}")]
    #[diagnostic(
        code(svg2desmos::upload::rejected),
        help("the session cookie may have expired")
    )]
    Rejected { status: u16, body: String },
}
