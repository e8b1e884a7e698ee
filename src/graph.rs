//! Graph document model and assembly
//!
//! The wire shape mirrors the calculator's calc_state JSON: a version, a
//! viewport, and a flat expression list where the id doubles as the ordering
//! key. Ids are assigned here and nowhere else.

use serde::Serialize;

use crate::formula::HELPER_FUNCTIONS;
use crate::style::BLACK;

/// Calc-state format version understood by the service.
pub const GRAPH_VERSION: u32 = 7;

/// Every graph is framed to the same fixed window.
pub const VIEWPORT: Viewport = Viewport {
    xmin: -10.0,
    ymin: -10.0,
    xmax: 10.0,
    ymax: 10.0,
};

/// Visible axis bounds of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

/// A finished formula with its draw color, awaiting an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub color: String,
    pub latex: String,
}

impl Plot {
    pub fn new(color: impl Into<String>, latex: impl Into<String>) -> Self {
        Plot {
            color: color.into(),
            latex: latex.into(),
        }
    }

    /// A black plot, the default for everything without a stroke color.
    pub fn black(latex: impl Into<String>) -> Self {
        Plot::new(BLACK, latex)
    }
}

/// One entry of the expression list. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub color: String,
    pub latex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct GraphMeta {
    viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ExpressionList {
    list: Vec<Expression>,
}

/// The complete uploadable graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument {
    version: u32,
    graph: GraphMeta,
    expressions: ExpressionList,
}

impl GraphDocument {
    /// The assembled expression list, helpers first.
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions.list
    }

    pub fn viewport(&self) -> Viewport {
        self.graph.viewport
    }

    /// Serialize to the calc_state JSON the upload endpoint expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Collects plots in discovery order and assigns sequential ids.
///
/// The four helper functions are seeded on construction, so they always
/// occupy ids 0..=3 in catalog order no matter what the image contains.
#[derive(Debug)]
pub struct GraphBuilder {
    next_id: u32,
    list: Vec<Expression>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        let mut builder = GraphBuilder {
            next_id: 0,
            list: Vec::with_capacity(HELPER_FUNCTIONS.len()),
        };
        for helper in HELPER_FUNCTIONS {
            builder.push(Plot::black(helper));
        }
        builder
    }

    /// Append one plot, assigning it the next id.
    pub fn push(&mut self, plot: Plot) {
        self.list.push(Expression {
            kind: "expression".to_string(),
            id: self.next_id.to_string(),
            color: plot.color,
            latex: plot.latex,
        });
        self.next_id += 1;
    }

    /// Append plots in order.
    pub fn extend(&mut self, plots: impl IntoIterator<Item = Plot>) {
        for plot in plots {
            self.push(plot);
        }
    }

    pub fn build(self) -> GraphDocument {
        GraphDocument {
            version: GRAPH_VERSION,
            graph: GraphMeta { viewport: VIEWPORT },
            expressions: ExpressionList { list: self.list },
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_occupy_the_first_four_ids() {
        let doc = GraphBuilder::new().build();
        let exprs = doc.expressions();
        assert_eq!(exprs.len(), 4);
        for (i, expr) in exprs.iter().enumerate() {
            assert_eq!(expr.id, i.to_string());
            assert_eq!(expr.latex, HELPER_FUNCTIONS[i]);
            assert_eq!(expr.color, BLACK);
        }
    }

    #[test]
    fn ids_are_contiguous_across_helpers_and_plots() {
        let mut builder = GraphBuilder::new();
        builder.extend([Plot::black("x=1"), Plot::new("#ff0000", "y=2")]);
        let doc = builder.build();

        let ids: Vec<&str> = doc.expressions().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4", "5"]);
        assert_eq!(doc.expressions()[5].color, "#ff0000");
    }

    #[test]
    fn serializes_the_calculator_wire_shape() {
        let doc = GraphBuilder::new().build();
        let value: serde_json::Value =
            serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["version"], 7);
        assert_eq!(value["graph"]["viewport"]["xmin"], -10.0);
        assert_eq!(value["graph"]["viewport"]["ymax"], 10.0);
        let list = value["expressions"]["list"].as_array().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["type"], "expression");
        assert_eq!(list[0]["id"], "0");
        assert_eq!(list[0]["color"], "#000000");
        assert_eq!(list[2]["latex"].as_str().unwrap(), HELPER_FUNCTIONS[2]);
    }
}
