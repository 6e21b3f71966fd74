use std::collections::BTreeMap;

use crate::config::{Config, GroupRef, default_cache_size};
use crate::shape::ClassShape;
use crate::shapes;
use crate::validators::Validator::{Any, ArbitraryValue, Integer, Length};

fn sizes_simple() -> Vec<ClassShape> {
    shapes!["sm", "md", "lg", "xl", "2xl"]
}

fn sizes_extended() -> Vec<ClassShape> {
    shapes!["3xl", "4xl", "5xl", "6xl", "7xl"]
}

fn overscroll() -> Vec<ClassShape> {
    shapes!["auto", "contain", "none"]
}

fn overflow() -> Vec<ClassShape> {
    shapes!["auto", "hidden", "visible", "scroll"]
}

fn length() -> Vec<ClassShape> {
    shapes![Length]
}

fn length_with_auto() -> Vec<ClassShape> {
    shapes!["auto", Length]
}

fn integer() -> Vec<ClassShape> {
    shapes![Integer]
}

fn integer_with_auto() -> Vec<ClassShape> {
    shapes!["auto", Integer]
}

fn any() -> Vec<ClassShape> {
    shapes![Any]
}

fn positions() -> Vec<ClassShape> {
    shapes![
        "bottom",
        "center",
        "left",
        "left-bottom",
        "left-top",
        "right",
        "right-bottom",
        "right-top",
        "top",
    ]
}

fn rounded() -> Vec<ClassShape> {
    [shapes!["none", ""], sizes_simple(), shapes!["3xl", "full"]].concat()
}

fn border_styles() -> Vec<ClassShape> {
    shapes!["solid", "dashed", "dotted", "double", "none"]
}

fn blend_modes() -> Vec<ClassShape> {
    shapes![ClassShape::keyed(
        "blend",
        shapes![
            "normal",
            "multiply",
            "screen",
            "overlay",
            "darken",
            "lighten",
            "color-dodge",
            "color-burn",
            "hard-light",
            "soft-light",
            "difference",
            "exclusion",
            "hue",
            "saturation",
            "color",
            "luminosity",
        ],
    )]
}

fn align() -> Vec<ClassShape> {
    shapes!["start", "end", "center", "between", "around", "evenly"]
}

fn group(shapes: Vec<ClassShape>) -> ClassShape {
    ClassShape::Composite(shapes)
}

fn keyed(key: &str, shapes: Vec<ClassShape>) -> ClassShape {
    group(vec![ClassShape::keyed(key, shapes)])
}

fn standalone(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn prefixes() -> Vec<String> {
    let mut prefixes = standalone(&["sm", "md", "lg", "xl", "2xl"]);
    prefixes.extend(standalone(&[
        "dark",
        "motion-safe",
        "motion-reduce",
        "first",
        "last",
        "odd",
        "even",
        "visited",
        "checked",
        "group-hover",
        "group-focus",
        "focus-within",
        "hover",
        "focus",
        "focus-visible",
        "active",
        "disabled",
        "before",
        "after",
        "first-letter",
        "first-line",
        "selection",
        "marker",
        "only",
        "first-of-type",
        "last-of-type",
        "only-of-type",
        "target",
        "default",
        "indeterminate",
        "placeholder-shown",
        "autofill",
        "required",
        "valid",
        "invalid",
        "in-range",
        "out-of-range",
        "peer-hover",
        "peer-focus",
        "peer-checked",
        "peer-disabled",
    ]));
    prefixes
}

fn dynamic_classes() -> BTreeMap<String, Vec<ClassShape>> {
    let roots: Vec<(&str, Vec<ClassShape>)> = vec![
        // Layout
        ("decoration", vec![group(shapes!["slice", "clone"])]),
        ("box", vec![group(shapes!["border", "content"])]),
        ("float", vec![group(shapes!["right", "left", "none"])]),
        ("clear", vec![group(shapes!["left", "right", "both", "none"])]),
        (
            "object",
            vec![
                group(shapes!["contain", "cover", "fill", "none", "scale-down"]),
                group(positions()),
            ],
        ),
        (
            "overflow",
            vec![
                group(overflow()),
                keyed("x", overflow()),
                keyed("y", overflow()),
            ],
        ),
        (
            "overscroll",
            vec![
                group(overscroll()),
                keyed("x", overscroll()),
                keyed("y", overscroll()),
            ],
        ),
        (
            "inset",
            vec![
                keyed("x", length_with_auto()),
                keyed("y", length_with_auto()),
                group(length_with_auto()),
            ],
        ),
        ("top", vec![group(length_with_auto())]),
        ("right", vec![group(length_with_auto())]),
        ("bottom", vec![group(length_with_auto())]),
        ("left", vec![group(length_with_auto())]),
        ("z", vec![group(length())]),
        // Flexbox and Grid
        (
            "flex",
            vec![
                group(shapes!["row", "row-reverse", "col", "col-reverse"]),
                group(shapes!["wrap", "wrap-reverse", "nowrap"]),
                group(shapes!["1", "auto", "initial", "none"]),
                keyed("grow", shapes!["", Integer]),
                keyed("shrink", shapes!["", Integer]),
            ],
        ),
        ("order", vec![group(shapes!["first", "last", "none", Integer])]),
        (
            "grid",
            vec![
                keyed("cols", any()),
                keyed("rows", any()),
                keyed("flow", shapes!["row", "col", "row-dense", "col-dense"]),
            ],
        ),
        (
            "col",
            vec![
                group(shapes!["auto", ClassShape::keyed("span", integer())]),
                keyed("start", integer_with_auto()),
                keyed("end", integer_with_auto()),
            ],
        ),
        (
            "row",
            vec![
                group(shapes!["auto", ClassShape::keyed("span", integer())]),
                keyed("start", integer_with_auto()),
                keyed("end", integer_with_auto()),
            ],
        ),
        (
            "auto",
            vec![
                keyed("cols", shapes!["auto", "min", "max", "fr"]),
                keyed("rows", shapes!["auto", "min", "max", "fr"]),
            ],
        ),
        (
            "gap",
            vec![keyed("x", length()), keyed("y", length()), group(length())],
        ),
        (
            "justify",
            vec![
                group(align()),
                keyed("items", shapes!["start", "end", "center", "stretch"]),
                keyed("self", shapes!["auto", "start", "end", "center", "stretch"]),
            ],
        ),
        ("content", vec![group(align()), group(shapes![ArbitraryValue])]),
        (
            "items",
            vec![group(shapes!["start", "end", "center", "baseline", "stretch"])],
        ),
        (
            "self",
            vec![group(shapes!["auto", "start", "end", "center", "stretch"])],
        ),
        (
            "place",
            vec![
                keyed("content", [align(), shapes!["stretch"]].concat()),
                keyed("items", shapes!["start", "end", "center", "stretch"]),
                keyed("self", shapes!["auto", "start", "end", "center", "stretch"]),
            ],
        ),
        // Spacing
        ("p", vec![group(length())]),
        ("px", vec![group(length())]),
        ("py", vec![group(length())]),
        ("pt", vec![group(length())]),
        ("pr", vec![group(length())]),
        ("pb", vec![group(length())]),
        ("pl", vec![group(length())]),
        ("m", vec![group(length_with_auto())]),
        ("mx", vec![group(length_with_auto())]),
        ("my", vec![group(length_with_auto())]),
        ("mt", vec![group(length_with_auto())]),
        ("mr", vec![group(length_with_auto())]),
        ("mb", vec![group(length_with_auto())]),
        ("ml", vec![group(length_with_auto())]),
        (
            "space",
            vec![
                group(shapes!["x-reverse"]),
                keyed("x", length()),
                group(shapes!["y-reverse"]),
                keyed("y", length()),
            ],
        ),
        // Sizing
        ("w", vec![group(shapes!["auto", "min", "max", Length])]),
        (
            "min",
            vec![
                keyed("w", shapes!["full", "min", "max", Length]),
                keyed("h", shapes!["full", "screen", Length]),
            ],
        ),
        (
            "max",
            vec![
                keyed(
                    "w",
                    [
                        shapes!["0", "none"],
                        sizes_simple(),
                        sizes_extended(),
                        shapes![
                            "full",
                            "min",
                            "max",
                            "prose",
                            ClassShape::keyed("screen", sizes_simple()),
                        ],
                    ]
                    .concat(),
                ),
                keyed("h", length()),
            ],
        ),
        ("h", vec![group(length_with_auto())]),
        // Typography
        (
            "font",
            vec![
                group(shapes!["sans", "serif", "mono"]),
                group(shapes![
                    "thin",
                    "extralight",
                    "light",
                    "normal",
                    "medium",
                    "semibold",
                    "bold",
                    "extrabold",
                    "black",
                ]),
            ],
        ),
        (
            "text",
            vec![
                group(
                    [
                        shapes!["xs"],
                        sizes_simple(),
                        shapes!["base"],
                        sizes_extended(),
                        shapes!["8xl", "9xl"],
                    ]
                    .concat(),
                ),
                group(shapes!["left", "center", "right", "justify"]),
                keyed("opacity", integer()),
                group(any()),
            ],
        ),
        (
            "tracking",
            vec![group(shapes![
                "tighter", "tight", "normal", "wide", "wider", "widest",
            ])],
        ),
        (
            "leading",
            vec![group(shapes![
                "none", "tight", "snug", "normal", "relaxed", "loose", Length,
            ])],
        ),
        (
            "list",
            vec![
                group(shapes!["none", "disc", "decimal"]),
                group(shapes!["inside", "outside"]),
            ],
        ),
        (
            "placeholder",
            vec![keyed("opacity", integer()), group(any())],
        ),
        (
            "align",
            vec![group(shapes![
                "baseline",
                "top",
                "middle",
                "bottom",
                "text-top",
                "text-bottom",
            ])],
        ),
        (
            "whitespace",
            vec![group(shapes![
                "normal", "nowrap", "pre", "pre-line", "pre-wrap",
            ])],
        ),
        ("break", vec![group(shapes!["normal", "words", "all"])]),
        // Backgrounds
        (
            "bg",
            vec![
                group(shapes!["fixed", "local", "scroll"]),
                keyed("clip", shapes!["border", "padding", "content", "text"]),
                keyed("opacity", integer()),
                keyed("origin", shapes!["border", "padding", "content"]),
                group(positions()),
                group(shapes![
                    "no-repeat",
                    ClassShape::keyed("repeat", shapes!["", "x", "y", "round", "space"]),
                ]),
                group(shapes!["auto", "cover", "contain"]),
                group(shapes![
                    "none",
                    ClassShape::keyed(
                        "gradient-to",
                        shapes!["t", "tr", "r", "br", "b", "bl", "l", "tl"],
                    ),
                ]),
                group(blend_modes()),
                group(any()),
            ],
        ),
        ("from", vec![group(any())]),
        ("via", vec![group(any())]),
        ("to", vec![group(any())]),
        // Borders
        (
            "rounded",
            vec![
                group(rounded()),
                keyed("t", rounded()),
                keyed("r", rounded()),
                keyed("b", rounded()),
                keyed("l", rounded()),
                keyed("tl", rounded()),
                keyed("tr", rounded()),
                keyed("br", rounded()),
                keyed("bl", rounded()),
            ],
        ),
        (
            "border",
            vec![
                group(length()),
                keyed("t", length()),
                keyed("r", length()),
                keyed("b", length()),
                keyed("l", length()),
                keyed("opacity", integer()),
                group(border_styles()),
                group(shapes!["collapse", "separate"]),
                keyed("t", any()),
                keyed("r", any()),
                keyed("b", any()),
                keyed("l", any()),
                group(any()),
            ],
        ),
        (
            "divide",
            vec![
                group(shapes!["x-reverse"]),
                keyed("x", length()),
                group(shapes!["y-reverse"]),
                keyed("y", length()),
                keyed("opacity", integer()),
                group(border_styles()),
                group(any()),
            ],
        ),
        (
            "ring",
            vec![
                group(shapes!["", Length]),
                group(shapes!["inset"]),
                keyed("opacity", integer()),
                keyed("offset", length()),
                keyed("offset", any()),
                group(any()),
            ],
        ),
        // Effects
        (
            "shadow",
            vec![group([shapes![""], sizes_simple(), shapes!["inner", "none"]].concat())],
        ),
        ("opacity", vec![group(integer())]),
        ("mix", vec![group(blend_modes())]),
        // Filters
        ("filter", vec![group(shapes!["", "none"])]),
        (
            "blur",
            vec![group([shapes!["none", ""], sizes_simple(), shapes!["3xl"]].concat())],
        ),
        ("brightness", vec![group(integer())]),
        ("contrast", vec![group(integer())]),
        (
            "drop",
            vec![keyed(
                "shadow",
                [shapes![""], sizes_simple(), shapes!["none"]].concat(),
            )],
        ),
        ("grayscale", vec![group(shapes!["0", ""])]),
        ("hue", vec![keyed("rotate", integer())]),
        ("invert", vec![group(shapes!["0", ""])]),
        ("saturate", vec![group(integer())]),
        ("sepia", vec![group(shapes!["0", ""])]),
        (
            "backdrop",
            vec![
                keyed("filter", shapes!["", "none"]),
                keyed(
                    "blur",
                    [shapes!["none", ""], sizes_simple(), shapes!["3xl"]].concat(),
                ),
                keyed("brightness", integer()),
                keyed("contrast", integer()),
                keyed("grayscale", shapes!["0", ""]),
                keyed("hue-rotate", integer()),
                keyed("invert", shapes!["0", ""]),
                keyed("opacity", integer()),
                keyed("saturate", integer()),
                keyed("sepia", shapes!["0", ""]),
            ],
        ),
        // Tables
        ("table", vec![group(shapes!["auto", "fixed"])]),
        // Transitions and Animation
        (
            "transition",
            vec![group(shapes![
                "none",
                "all",
                "",
                "colors",
                "opacity",
                "shadow",
                "transform",
            ])],
        ),
        ("duration", vec![group(integer())]),
        ("ease", vec![group(shapes!["linear", "in", "out", "in-out"])]),
        ("delay", vec![group(integer())]),
        (
            "animate",
            vec![group(shapes!["none", "spin", "ping", "pulse", "bounce"])],
        ),
        // Transforms
        (
            "transform",
            vec![
                group(shapes!["", "gpu", "none"]),
                keyed(
                    "origin",
                    shapes![
                        "center",
                        "top",
                        "top-right",
                        "right",
                        "bottom-right",
                        "bottom",
                        "bottom-left",
                        "left",
                        "top-left",
                    ],
                ),
            ],
        ),
        (
            "scale",
            vec![group(integer()), keyed("x", integer()), keyed("y", integer())],
        ),
        ("rotate", vec![group(integer())]),
        ("translate", vec![keyed("x", length()), keyed("y", length())]),
        ("skew", vec![keyed("x", integer()), keyed("y", integer())]),
        // Interactivity
        (
            "cursor",
            vec![group(shapes![
                "auto",
                "default",
                "pointer",
                "wait",
                "text",
                "move",
                "help",
                "not-allowed",
            ])],
        ),
        ("outline", vec![group(shapes!["none", "white", "black"])]),
        ("pointer", vec![keyed("events", shapes!["none", "auto"])]),
        ("resize", vec![group(shapes!["none", "y", "x", ""])]),
        ("select", vec![group(shapes!["none", "text", "all", "auto"])]),
        // SVG
        ("stroke", vec![group(shapes!["current"]), group(length())]),
        // Accessibility
        ("caret", vec![group(any())]),
    ];

    roots
        .into_iter()
        .map(|(root, groups)| (root.to_string(), groups))
        .collect()
}

fn standalone_classes() -> Vec<Vec<String>> {
    vec![
        // Layout
        standalone(&["container"]),
        standalone(&[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ]),
        standalone(&["isolate", "isolation-auto"]),
        standalone(&["static", "fixed", "absolute", "relative", "sticky"]),
        standalone(&["visible", "invisible"]),
        // Typography
        standalone(&["antialiased", "subpixel-antialiased"]),
        standalone(&["italic", "not-italic"]),
        standalone(&[
            "normal-nums",
            "ordinal",
            "slashed-zero",
            "lining-nums",
            "oldstyle-nums",
            "tabular-nums",
            "diagonal-nums",
            "stacked-fractions",
        ]),
        standalone(&["underline", "line-through", "no-underline"]),
        standalone(&["uppercase", "lowercase", "capitalize", "normal-case"]),
        standalone(&["truncate", "overflow-ellipsis", "overflow-clip"]),
        // Interactivity
        standalone(&["appearance-none"]),
        // SVG
        standalone(&["fill-current"]),
        // Accessibility
        standalone(&["sr-only", "not-sr-only"]),
    ]
}

fn conflicting_groups() -> BTreeMap<GroupRef, Vec<GroupRef>> {
    let dynamic = GroupRef::dynamic;
    let relations = vec![
        // Overflow
        (
            dynamic("overflow", 0),
            vec![dynamic("overflow", 1), dynamic("overflow", 2)],
        ),
        // Overscroll
        (
            dynamic("overscroll", 0),
            vec![dynamic("overscroll", 1), dynamic("overscroll", 2)],
        ),
        // Inset
        (
            dynamic("inset", 2),
            vec![
                dynamic("inset", 0),
                dynamic("inset", 1),
                dynamic("top", 0),
                dynamic("right", 0),
                dynamic("bottom", 0),
                dynamic("left", 0),
            ],
        ),
        (
            dynamic("inset", 0),
            vec![dynamic("right", 0), dynamic("left", 0)],
        ),
        (
            dynamic("inset", 1),
            vec![dynamic("top", 0), dynamic("bottom", 0)],
        ),
        // Flex
        (
            dynamic("flex", 2),
            vec![dynamic("flex", 3), dynamic("flex", 4)],
        ),
        // Grid
        (
            dynamic("col", 0),
            vec![dynamic("col", 1), dynamic("col", 2)],
        ),
        (
            dynamic("row", 0),
            vec![dynamic("row", 1), dynamic("row", 2)],
        ),
        // Gap
        (
            dynamic("gap", 2),
            vec![dynamic("gap", 0), dynamic("gap", 1)],
        ),
        // Padding
        (
            dynamic("p", 0),
            vec![
                dynamic("px", 0),
                dynamic("py", 0),
                dynamic("pt", 0),
                dynamic("pr", 0),
                dynamic("pb", 0),
                dynamic("pl", 0),
            ],
        ),
        (dynamic("px", 0), vec![dynamic("pr", 0), dynamic("pl", 0)]),
        (dynamic("py", 0), vec![dynamic("pt", 0), dynamic("pb", 0)]),
        // Margin
        (
            dynamic("m", 0),
            vec![
                dynamic("mx", 0),
                dynamic("my", 0),
                dynamic("mt", 0),
                dynamic("mr", 0),
                dynamic("mb", 0),
                dynamic("ml", 0),
            ],
        ),
        (dynamic("mx", 0), vec![dynamic("mr", 0), dynamic("ml", 0)]),
        (dynamic("my", 0), vec![dynamic("mt", 0), dynamic("mb", 0)]),
        // Font size sets a line height
        (dynamic("text", 0), vec![dynamic("leading", 0)]),
        // Border radius
        (
            dynamic("rounded", 0),
            (1..=8).map(|index| dynamic("rounded", index)).collect(),
        ),
        (
            dynamic("rounded", 1),
            vec![dynamic("rounded", 5), dynamic("rounded", 6)],
        ),
        (
            dynamic("rounded", 2),
            vec![dynamic("rounded", 6), dynamic("rounded", 7)],
        ),
        (
            dynamic("rounded", 3),
            vec![dynamic("rounded", 7), dynamic("rounded", 8)],
        ),
        (
            dynamic("rounded", 4),
            vec![dynamic("rounded", 5), dynamic("rounded", 8)],
        ),
        // Border width
        (
            dynamic("border", 0),
            (1..=4).map(|index| dynamic("border", index)).collect(),
        ),
        // Border color
        (
            dynamic("border", 12),
            (8..=11).map(|index| dynamic("border", index)).collect(),
        ),
        // Ring width and box shadow share the box-shadow property
        (
            dynamic("ring", 0),
            vec![dynamic("ring", 0), dynamic("shadow", 0)],
        ),
        (
            dynamic("shadow", 0),
            vec![dynamic("ring", 0), dynamic("shadow", 0)],
        ),
    ];

    relations.into_iter().collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache_size: default_cache_size(),
            prefixes: prefixes(),
            dynamic_classes: dynamic_classes(),
            standalone_classes: standalone_classes(),
            conflicting_groups: conflicting_groups(),
        }
    }
}
