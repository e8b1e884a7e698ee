//! Per-element shape translation
//!
//! Dispatches on the element tag: straight lines go through the axis
//! decision ladder, ellipses substitute directly into the implicit-equation
//! template, paths hand off to the command interpreter. Any other tag
//! aborts the conversion.

use tracing::debug;

use crate::dom::{SvgElement, SvgTree};
use crate::errors::{StyleError, TranslateError};
use crate::formula::{self, fixed};
use crate::graph::Plot;
use crate::path;
use crate::style;

/// Translate every element of the image, in document order.
pub fn translate(tree: &SvgTree) -> Result<Vec<Plot>, TranslateError> {
    let mut plots = Vec::new();
    for element in &tree.elements {
        debug!(element = %element.name, "translating");
        match element.name.as_str() {
            "line" => plots.push(translate_line(element, tree.width, tree.height)?),
            "ellipse" => plots.push(translate_ellipse(element)?),
            "path" => {
                let data = attribute(element, "d")?;
                plots.extend(path::trace(data)?.plots);
            }
            other => {
                return Err(TranslateError::UnsupportedElement {
                    name: other.to_string(),
                });
            }
        }
    }
    Ok(plots)
}

/// Translate a `<line>` element.
///
/// Axis alignment is decided by comparing the raw attribute strings, so
/// "0" and "0.0" count as different x-coordinates and fall through to the
/// point-slope form. The aligned forms substitute the raw strings for the
/// anchor coordinate and fixed-format floats for the bounds; point-slope
/// substitutes all four raw coordinates and clips to the whole canvas.
fn translate_line(element: &SvgElement, width: f64, height: f64) -> Result<Plot, TranslateError> {
    let x1 = attribute(element, "x1")?;
    let y1 = attribute(element, "y1")?;
    let x2 = attribute(element, "x2")?;
    let y2 = attribute(element, "y2")?;
    let x1_val = coordinate(element, "x1", x1)?;
    let y1_val = coordinate(element, "y1", y1)?;
    let x2_val = coordinate(element, "x2", x2)?;
    let y2_val = coordinate(element, "y2", y2)?;

    let properties = style::parse_declarations(attribute(element, "style")?)?;
    let stroke = properties.get("stroke").ok_or(StyleError::MissingStroke)?;
    let color = style::normalize_color(stroke)?;

    let latex = if x2 == x1 {
        formula::substitute(
            formula::VERTICAL_LINE,
            &[
                ("x1", x1),
                ("top", fixed(y1_val.min(y2_val)).as_str()),
                ("bottom", fixed(y1_val.max(y2_val)).as_str()),
            ],
        )
    } else if y2 == y1 {
        formula::substitute(
            formula::HORIZONTAL_LINE,
            &[
                ("y1", y1),
                ("left", fixed(x1_val.min(x2_val)).as_str()),
                ("right", fixed(x1_val.max(x2_val)).as_str()),
            ],
        )
    } else {
        formula::substitute(
            formula::POINT_SLOPE,
            &[
                ("x1", x1),
                ("x2", x2),
                ("y1", y1),
                ("y2", y2),
                ("top", "0"),
                ("bottom", fixed(-height).as_str()),
                ("left", "0"),
                ("right", fixed(width).as_str()),
            ],
        )
    };

    Ok(Plot::new(color, latex))
}

/// Translate an `<ellipse>` element.
///
/// Center and radii are substituted verbatim; the template's `(y+[cy])`
/// flips the center into the plotting convention. No style lookup: ellipses
/// draw black.
fn translate_ellipse(element: &SvgElement) -> Result<Plot, TranslateError> {
    let latex = formula::substitute(
        formula::ELLIPSE,
        &[
            ("cx", attribute(element, "cx")?),
            ("cy", attribute(element, "cy")?),
            ("rx", attribute(element, "rx")?),
            ("ry", attribute(element, "ry")?),
        ],
    );
    Ok(Plot::black(latex))
}

fn attribute<'e>(
    element: &'e SvgElement,
    name: &'static str,
) -> Result<&'e str, TranslateError> {
    element
        .attribute(name)
        .ok_or_else(|| TranslateError::MissingAttribute {
            element: element.name.clone(),
            attribute: name,
        })
}

fn coordinate(
    element: &SvgElement,
    name: &'static str,
    value: &str,
) -> Result<f64, TranslateError> {
    value.parse().map_err(|_| TranslateError::MalformedNumber {
        element: element.name.clone(),
        attribute: name,
        value: value.to_string(),
    })
}
