//! Formula template catalog
//!
//! Every expression the converter emits is one of five LaTeX skeletons with
//! `[name]` placeholders substituted in, bounded by the helper functions
//! below. The templates assume the calculator's y-axis points up while SVG's
//! points down, so the line and curve templates negate their vertical inputs
//! (`-[bottom]`, `-[y1]`, `(y+[cy])`); callers feed them image-space values.

/// General-case line through two points, clipped to a bounding rectangle.
pub const POINT_SLOPE: &str = r"-y-[y1]=\frac{[y2]-[y1]}{[x2]-[x1]}\left(x-[x1]\right)\left\{[left]<x<[right]\right\}\left\{[bottom]<y<[top]\right\}";

/// Axis-aligned vertical segment, via the `v` helper.
pub const VERTICAL_LINE: &str = r"x=v\left(y,[x1],-[bottom],[top]\right)";

/// Axis-aligned horizontal segment, via the `h` helper.
pub const HORIZONTAL_LINE: &str = r"y=h\left(x,-[y1],[left],[right]\right)";

/// Parametric cubic Bézier, combining the two per-axis helpers.
pub const CUBIC_BEZIER: &str = r"\left(B_x\left(t,[x1],[x2],[x3],[x4]\right),B_y\left(t,[y1],[y2],[y3],[y4]\right)\right)";

/// Implicit ellipse equation.
pub const ELLIPSE: &str = r"\frac{\left(x-[cx]\right)^2}{[rx]^2}+\frac{\left(y+[cy]\right)^2}{[ry]^2}=1";

/// Helper functions referenced by the templates above.
///
/// These are prepended to every graph in this order and the rest of the
/// document relies on their ids being 0..3: `v` (clamped vertical value),
/// `h` (clamped horizontal value), and the two axis projections of a cubic
/// Bézier. `B_x` carries the shared `0 < t <= 1` parameter restriction.
pub const HELPER_FUNCTIONS: [&str; 4] = [
    r"v\left(y,p,b,t\right)=p\left\{b<y<t\right\}",
    r"h\left(x,p,l,r\right)=p\left\{l<x<r\right\}",
    r"B_x\left(t,c_1,c_2,c_3,c_4\right)=\left(1-t\right)^3c_1+3t\left(1-t\right)^2c_2+3t^2\left(1-t\right)c_3+t^3c_4\ \left\{0<t\le1\right\}",
    r"B_y\left(t,v_1,v_2,v_3,v_4\right)=\left(1-t\right)^3v_1+3t\left(1-t\right)^2v_2+3t^2\left(1-t\right)v_3+t^3v_4",
];

/// Replace every `[name]` placeholder with its value.
///
/// Substitution is plain text replacement; a placeholder left over because
/// the caller forgot a pair is a programming error, not a runtime one.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("[{name}]"), value);
    }
    out
}

/// Render a coordinate with fixed six-digit precision, no trimming.
pub fn fixed(value: f64) -> String {
    format!("{value:.6}")
}
