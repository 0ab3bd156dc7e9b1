// End-to-end: datasets in, scene and SVG out, hover state on top.

use choropleth::{
    Config, EducationRecord, GREENS_9, RenderContext, Source, Tooltip, parse_records, parse_topology,
};

/// Three planar counties. A and B share arc 0; C carries a string id.
const COUNTIES: &str = r#"{
    "type": "Topology",
    "arcs": [
        [[1, 0], [1, 1]],
        [[1, 1], [0, 1], [0, 0], [1, 0]],
        [[1, 0], [2, 0], [2, 1], [1, 1]],
        [[5, 5], [6, 5], [6, 6], [5, 5]]
    ],
    "objects": {
        "counties": {
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Polygon", "id": 1001, "arcs": [[1, 0]]},
                {"type": "Polygon", "id": 1003, "arcs": [[2, -1]]},
                {"type": "Polygon", "id": "2000", "arcs": [[3]]}
            ]
        }
    }
}"#;

const EDUCATION: &str = r#"[
    {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 10},
    {"fips": 1003, "state": "AL", "area_name": "Baldwin County", "bachelorsOrHigher": 50},
    {"fips": 2000, "state": "AK", "area_name": "Nowhere", "bachelorsOrHigher": 30},
    {"fips": 1001, "state": "AL", "area_name": "Duplicate", "bachelorsOrHigher": 12}
]"#;

fn context_with(records: Vec<EducationRecord>) -> RenderContext {
    let topology = parse_topology(COUNTIES.as_bytes()).unwrap();
    RenderContext::new(Config::default(), records, &topology).unwrap()
}

fn context() -> RenderContext {
    context_with(parse_records(EDUCATION.as_bytes()).unwrap())
}

#[test]
fn counties_are_drawn_in_topology_order_with_matched_values() {
    let scene = context().scene();
    assert_eq!(scene.counties.len(), 3);

    let a = &scene.counties[0];
    assert_eq!(a.d, "M1,1L0,1L0,0L1,0Z");
    assert_eq!(a.county.education, 10.0);
    assert_eq!(a.fill, GREENS_9[1]);

    let b = &scene.counties[1];
    assert_eq!(b.county.education, 50.0);
    assert_eq!(b.fill, GREENS_9[8]);

    // string ids never match a record
    let c = &scene.counties[2];
    assert_eq!(c.county.fips(), None);
    assert_eq!(c.county.education, 0.0);
    assert_eq!(c.fill, GREENS_9[0]);
}

#[test]
fn legend_has_one_swatch_per_color_and_one_tick_per_breakpoint() {
    let legend = context().legend();
    assert_eq!(legend.offset, (0.0, 40.0));
    assert_eq!(legend.rects.len(), 9);

    let first = &legend.rects[0];
    assert_eq!((first.x, first.width), (600.0, 0.0));
    let second = &legend.rects[1];
    assert_eq!((second.x, second.width, second.height), (600.0, 32.5, 8.0));
    let last = &legend.rects[8];
    assert_eq!((last.x, last.width), (827.5, 0.0));

    let labels: Vec<&str> = legend.axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["10%", "15%", "20%", "25%", "30%", "35%", "40%", "45%"]);
    assert_eq!(legend.axis.ticks[0].position, 600.5);
}

#[test]
fn svg_carries_the_expected_markup() {
    let svg = context().scene().to_svg_string().unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0,0,960,600""#));
    assert_eq!(svg.matches(r#"class="county""#).count(), 3);
    assert_eq!(svg.matches(r#"class="legend-rect""#).count(), 9);
    assert!(svg.contains(r#"data-fips="1001""#));
    assert!(svg.contains(r#"data-education="50""#));
    assert!(svg.contains(r#"<g id="legend""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn html_page_includes_hidden_tooltip() {
    let mut out = Vec::new();
    context().scene().write_html(&mut out, "Education <US>").unwrap();
    let html = String::from_utf8(out).unwrap();
    assert!(html.contains("<title>Education &lt;US&gt;</title>"));
    assert!(html.contains(r#"<div id="tooltip" class="tooltip" opacity="0">"#));
}

#[test]
fn hover_shows_first_matching_record_and_leave_hides() {
    let context = context();
    let scene = context.scene();
    let mut tooltip = Tooltip::default();

    assert!(context.pointer_enter(&mut tooltip, &scene.counties[0].county, (100.0, 100.0)));
    assert_eq!(tooltip.text, "Autauga County, AL: 10%");
    assert_eq!(tooltip.opacity, Tooltip::VISIBLE_OPACITY);
    assert_eq!((tooltip.left, tooltip.top), (Some(110.0), Some(72.0)));
    assert_eq!(tooltip.education, Some(10.0));

    context.pointer_leave(&mut tooltip);
    assert_eq!(tooltip.opacity, 0.0);
}

#[test]
fn hover_without_record_keeps_previous_content() {
    let context = context();
    let scene = context.scene();
    let mut tooltip = Tooltip::default();

    context.pointer_enter(&mut tooltip, &scene.counties[1].county, (5.0, 5.0));
    context.pointer_leave(&mut tooltip);
    let before = tooltip.clone();

    assert!(!context.pointer_enter(&mut tooltip, &scene.counties[2].county, (400.0, 400.0)));
    assert_eq!(tooltip, before);
    assert_eq!(tooltip.text, "Baldwin County, AL: 50%");
}

#[test]
fn empty_dataset_draws_everything_in_the_lowest_color() {
    let context = context_with(Vec::new());
    let scene = context.scene();

    assert!(scene.counties.iter().all(|c| c.fill == GREENS_9[0] && c.county.education == 0.0));
    assert_eq!(scene.legend.rects.len(), 9);
    assert!(scene.legend.rects.iter().all(|r| r.width == 0.0 && r.x == 600.0));
    assert!(scene.legend.axis.ticks.is_empty());
}

#[test]
fn loads_both_datasets_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let education = dir.path().join("education.json");
    let counties = dir.path().join("counties.json");
    std::fs::write(&education, EDUCATION).unwrap();
    std::fs::write(&counties, COUNTIES).unwrap();

    let context = RenderContext::load(Config::default(), &Source::Path(education), &Source::Path(counties)).unwrap();
    assert_eq!(context.features().len(), 3);
    assert_eq!(context.num_matched(), 2);
}

#[test]
fn unknown_counties_object_is_an_error() {
    let topology = parse_topology(COUNTIES.as_bytes()).unwrap();
    let config = Config { counties_object: "states".into(), ..Config::default() };
    assert!(RenderContext::new(config, Vec::new(), &topology).is_err());
}

#[test]
fn null_county_geometry_renders_an_empty_path_with_its_data() {
    let counties = r#"{
        "type": "Topology",
        "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]]],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": 1001, "arcs": [[0]]},
                    {"type": null, "id": 1003}
                ]
            }
        }
    }"#;
    let topology = parse_topology(counties.as_bytes()).unwrap();
    let records = parse_records(EDUCATION.as_bytes()).unwrap();
    let context = RenderContext::new(Config::default(), records, &topology).unwrap();

    let scene = context.scene();
    assert_eq!(scene.counties.len(), 2);
    assert_eq!(scene.counties[1].d, "");
    assert_eq!(scene.counties[1].county.education, 50.0);
    assert_eq!(scene.counties[1].fill, GREENS_9[8]);

    let svg = scene.to_svg_string().unwrap();
    assert!(svg.contains(r##"d="" fill="#00441b" data-fips="1003" data-education="50""##));
}

#[test]
fn leave_without_prior_hover_keeps_tooltip_hidden() {
    let context = context();
    let mut tooltip = Tooltip::default();

    context.pointer_leave(&mut tooltip);
    assert_eq!(tooltip.opacity, 0.0);
    assert_eq!(tooltip.text, "");
    assert_eq!(tooltip.left, None);
}
