//! SVG element tree reading
//!
//! The converter only needs a flat view of the image: the canvas size from
//! the root element plus each direct child as a tag name and an attribute
//! map. Nested groups, transforms and the rest of SVG are out of scope.

use std::collections::HashMap;

use crate::errors::DomError;

/// One shape element: a tag name plus its attributes as raw strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl SvgElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// The parsed image: canvas size and top-level shape elements in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgTree {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<SvgElement>,
}

/// Parse SVG source into the flat element view.
pub fn parse(source: &str) -> Result<SvgTree, DomError> {
    let doc = roxmltree::Document::parse(source)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(DomError::NotAnSvg {
            found: root.tag_name().name().to_string(),
        });
    }

    let width = canvas_dimension(&root, "width")?;
    let height = canvas_dimension(&root, "height")?;

    let elements = root
        .children()
        .filter(|node| node.is_element())
        .map(|node| SvgElement {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
        })
        .collect();

    Ok(SvgTree {
        width,
        height,
        elements,
    })
}

fn canvas_dimension(root: &roxmltree::Node, attribute: &'static str) -> Result<f64, DomError> {
    let value = root
        .attribute(attribute)
        .ok_or(DomError::MissingCanvasSize { attribute })?;
    value
        .trim()
        .parse()
        .map_err(|_| DomError::InvalidCanvasSize {
            attribute,
            value: value.to_string(),
        })
}
