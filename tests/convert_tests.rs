//! End-to-end conversion tests over whole SVG documents.

use svg2desmos::convert;

const DRAWING: &str = r#"<svg width="100" height="100">
    <line x1="10" y1="10" x2="10" y2="90" style="stroke:rgb(255,0,0)"/>
    <line x1="10" y1="90" x2="90" y2="90" style="stroke:#00ff00"/>
    <line x1="10" y1="10" x2="90" y2="90" style="stroke:#0000ff"/>
    <ellipse cx="50" cy="40" rx="20" ry="10"/>
    <path d="M20,60 C30,80 70,80 80,60 Z"/>
</svg>"#;

#[test]
fn converts_a_small_drawing() {
    let doc = convert(DRAWING).unwrap();
    let exprs = doc.expressions();
    // 4 helpers + 3 lines + 1 ellipse + (1 curve + 1 close)
    assert_eq!(exprs.len(), 10);

    insta::assert_snapshot!(
        exprs[4].latex,
        @r"x=v\left(y,10,-90.000000,10.000000\right)"
    );
    insta::assert_snapshot!(
        exprs[5].latex,
        @r"y=h\left(x,-90,10.000000,90.000000\right)"
    );
    insta::assert_snapshot!(
        exprs[6].latex,
        @r"-y-10=\frac{90-10}{90-10}\left(x-10\right)\left\{0<x<100.000000\right\}\left\{-100.000000<y<0\right\}"
    );
    insta::assert_snapshot!(
        exprs[7].latex,
        @r"\frac{\left(x-50\right)^2}{20^2}+\frac{\left(y+40\right)^2}{10^2}=1"
    );
    insta::assert_snapshot!(
        exprs[8].latex,
        @r"\left(B_x\left(t,20.000000,30.000000,70.000000,80.000000\right),B_y\left(t,-60.000000,-80.000000,-80.000000,-60.000000\right)\right)"
    );
    insta::assert_snapshot!(
        exprs[9].latex,
        @r"y=h\left(x,-60.000000,20.000000,80.000000\right)"
    );
}

#[test]
fn colors_come_from_the_stroke_property() {
    let doc = convert(DRAWING).unwrap();
    let colors: Vec<&str> = doc
        .expressions()
        .iter()
        .skip(4)
        .map(|e| e.color.as_str())
        .collect();
    assert_eq!(
        colors,
        ["#ff0000", "#00ff00", "#0000ff", "#000000", "#000000", "#000000"]
    );
}

#[test]
fn helpers_are_identical_for_every_image() {
    let empty = convert(r#"<svg width="10" height="10"></svg>"#).unwrap();
    let full = convert(DRAWING).unwrap();
    assert_eq!(&empty.expressions()[..4], &full.expressions()[..4]);
}

#[test]
fn ids_are_contiguous() {
    let doc = convert(DRAWING).unwrap();
    for (i, expr) in doc.expressions().iter().enumerate() {
        assert_eq!(expr.id, i.to_string());
    }
}

#[test]
fn path_without_close_emits_no_closing_line() {
    let doc = convert(
        r#"<svg width="10" height="10">
            <path d="M0,0 C1,1 2,2 3,3"/>
        </svg>"#,
    )
    .unwrap();
    assert_eq!(doc.expressions().len(), 5);
    insta::assert_snapshot!(
        doc.expressions()[4].latex,
        @r"\left(B_x\left(t,0.000000,1.000000,2.000000,3.000000\right),B_y\left(t,-0.000000,-1.000000,-2.000000,-3.000000\right)\right)"
    );
}

#[test]
fn multiple_subpaths_close_independently() {
    let doc = convert(
        r#"<svg width="10" height="10">
            <path d="M1,1 C2,0 4,0 5,1 Z M6,6 C7,5 8,5 6,7 Z"/>
        </svg>"#,
    )
    .unwrap();
    let exprs = doc.expressions();
    assert_eq!(exprs.len(), 8);
    // first subpath closes horizontally, second vertically
    insta::assert_snapshot!(exprs[5].latex, @r"y=h\left(x,-1.000000,1.000000,5.000000\right)");
    insta::assert_snapshot!(exprs[7].latex, @r"x=v\left(y,6.000000,-7.000000,6.000000\right)");
}

#[test]
fn unsupported_color_aborts_the_document() {
    let err = convert(
        r#"<svg width="10" height="10">
            <line x1="0" y1="0" x2="0" y2="5" style="stroke:papayawhip"/>
        </svg>"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unsupported color"));
}

#[test]
fn graph_json_is_uploadable_calc_state() {
    let doc = convert(DRAWING).unwrap();
    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(value["version"], 7);
    assert_eq!(value["graph"]["viewport"]["ymin"], -10.0);
    assert_eq!(
        value["expressions"]["list"].as_array().unwrap().len(),
        10
    );
    assert_eq!(value["expressions"]["list"][4]["color"], "#ff0000");
}
