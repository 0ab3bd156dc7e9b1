//! Live DOM for a scene: county paths, legend, tooltip, pan/zoom.

use std::{cell::RefCell, rc::Rc};

use anyhow::{Result, anyhow};
use choropleth::{
    CountyContext, DeltaMode, Legend, RenderContext, Tooltip, ZoomBehavior, js_number,
};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, HtmlElement, MouseEvent, WheelEvent};

use crate::common::console_error;

pub(crate) const DEFAULT_SELECTOR: &str = ".choropleth-map";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn dom_err(e: JsValue) -> anyhow::Error {
    anyhow!("DOM error: {e:?}")
}

/// Event handlers have no caller to return to; failures go to the console.
fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        console_error(&dom_err(e));
    }
}

/// Build the whole map under the element matching `selector`.
pub(crate) fn mount(selector: &str, context: RenderContext) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("document not available"))?;
    let root = document.query_selector(selector).map_err(dom_err)?
        .ok_or_else(|| anyhow!("no element matches {selector:?}"))?;

    let context = Rc::new(context);
    let scene = context.scene();

    root.set_attribute("viewBox", &scene.view_box()).map_err(dom_err)?;
    root.set_attribute("width", &js_number(scene.width)).map_err(dom_err)?;
    root.set_attribute("height", &js_number(scene.height)).map_err(dom_err)?;

    let tooltip = Rc::new(TooltipNode::create(&document)?);

    let group = svg_element(&document, "g")?;
    for path in &scene.counties {
        let el = svg_element(&document, "path")?;
        set_attrs(&el, &[
            ("class", "county"),
            ("d", &path.d),
            ("fill", &path.fill.to_string()),
            ("data-education", &js_number(path.county.education)),
        ])?;
        if let Some(id) = &path.county.id {
            el.set_attribute("data-fips", &id.to_string()).map_err(dom_err)?;
        }
        attach_hover(&el, context.clone(), path.county.clone(), tooltip.clone())?;
        group.append_child(&el).map_err(dom_err)?;
    }
    root.append_child(&group).map_err(dom_err)?;

    root.append_child(&legend_element(&document, &scene.legend)?).map_err(dom_err)?;

    attach_zoom(&root, group, ZoomBehavior::new(context.config().scale_extent), (scene.width, scene.height))?;
    Ok(())
}

fn svg_element(document: &Document, tag: &str) -> Result<Element> {
    document.create_element_ns(Some(SVG_NS), tag).map_err(dom_err)
}

fn set_attrs(el: &Element, attrs: &[(&str, &str)]) -> Result<()> {
    for (name, value) in attrs {
        el.set_attribute(name, value).map_err(dom_err)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

fn legend_element(document: &Document, legend: &Legend) -> Result<Element> {
    let g = svg_element(document, "g")?;
    set_attrs(&g, &[
        ("id", "legend"),
        ("class", "legend"),
        ("transform", &format!("translate({}, {})", js_number(legend.offset.0), js_number(legend.offset.1))),
    ])?;

    for rect in &legend.rects {
        let el = svg_element(document, "rect")?;
        set_attrs(&el, &[
            ("class", "legend-rect"),
            ("fill", &rect.fill.to_string()),
            ("x", &js_number(rect.x)),
            ("width", &js_number(rect.width)),
            ("height", &js_number(rect.height)),
        ])?;
        g.append_child(&el).map_err(dom_err)?;
    }

    let axis = &legend.axis;
    let axis_g = svg_element(document, "g")?;
    set_attrs(&axis_g, &[
        ("fill", "none"),
        ("font-size", "10"),
        ("font-family", "sans-serif"),
        ("text-anchor", "middle"),
    ])?;
    for tick in &axis.ticks {
        let tick_g = svg_element(document, "g")?;
        set_attrs(&tick_g, &[
            ("class", "tick"),
            ("opacity", "1"),
            ("transform", &format!("translate({},0)", js_number(tick.position))),
        ])?;

        let line = svg_element(document, "line")?;
        set_attrs(&line, &[("stroke", "currentColor"), ("y2", &js_number(axis.tick_size_inner))])?;

        let text = svg_element(document, "text")?;
        set_attrs(&text, &[("fill", "currentColor"), ("y", &js_number(axis.spacing())), ("dy", "0.71em")])?;
        text.set_text_content(Some(&tick.label));

        tick_g.append_child(&line).map_err(dom_err)?;
        tick_g.append_child(&text).map_err(dom_err)?;
        axis_g.append_child(&tick_g).map_err(dom_err)?;
    }
    g.append_child(&axis_g).map_err(dom_err)?;

    Ok(g)
}

// ---------------------------------------------------------------------------
// Tooltip
// ---------------------------------------------------------------------------

/// The tooltip's state and the `<div id="tooltip">` mirroring it.
struct TooltipNode {
    state: RefCell<Tooltip>,
    div: HtmlElement,
    span: Element,
}

impl TooltipNode {
    fn create(document: &Document) -> Result<Self> {
        let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;

        let div: HtmlElement = document.create_element("div").map_err(dom_err)?
            .dyn_into()
            .map_err(|_| anyhow!("div is not an HtmlElement"))?;
        set_attrs(&div, &[("id", "tooltip"), ("class", "tooltip"), ("opacity", "0")])?;

        let span = document.create_element("span").map_err(dom_err)?;
        div.append_child(&span).map_err(dom_err)?;
        body.append_child(&div).map_err(dom_err)?;

        Ok(Self { state: RefCell::new(Tooltip::default()), div, span })
    }

    /// Copy the state onto the element.
    fn sync(&self) -> Result<(), JsValue> {
        let state = self.state.borrow();
        let style = self.div.style();
        style.set_property("opacity", &js_number(state.opacity))?;
        if let Some(left) = state.left_css() { style.set_property("left", &left)? }
        if let Some(top) = state.top_css() { style.set_property("top", &top)? }
        if let Some(education) = state.education {
            self.div.set_attribute("data-education", &js_number(education))?;
        }
        self.span.set_text_content(Some(&state.text));
        Ok(())
    }
}

/// Each path gets its own `CountyContext`, moved into its handlers.
fn attach_hover(el: &Element, context: Rc<RenderContext>, county: CountyContext, tooltip: Rc<TooltipNode>) -> Result<()> {
    let enter = {
        let context = context.clone();
        let tooltip = tooltip.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let page = (event.page_x() as f64, event.page_y() as f64);
            let changed = context.pointer_enter(&mut tooltip.state.borrow_mut(), &county, page);
            if changed { report(tooltip.sync()) }
        })
    };
    el.add_event_listener_with_callback("mouseover", enter.as_ref().unchecked_ref()).map_err(dom_err)?;
    enter.forget();

    let leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        context.pointer_leave(&mut tooltip.state.borrow_mut());
        report(tooltip.sync());
    });
    el.add_event_listener_with_callback("mouseout", leave.as_ref().unchecked_ref()).map_err(dom_err)?;
    leave.forget();

    Ok(())
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

/// Pointer position in viewBox units.
fn viewport_point(root: &Element, event: &MouseEvent, (width, height): (f64, f64)) -> (f64, f64) {
    let rect = root.get_bounding_client_rect();
    let (x, y) = (event.client_x() as f64 - rect.left(), event.client_y() as f64 - rect.top());
    if rect.width() > 0.0 && rect.height() > 0.0 {
        (x * width / rect.width(), y * height / rect.height())
    } else {
        (x, y)
    }
}

fn attach_zoom(root: &Element, group: Element, zoom: ZoomBehavior, size: (f64, f64)) -> Result<()> {
    let zoom = Rc::new(RefCell::new(zoom));
    let group = Rc::new(group);
    let window = web_sys::window().ok_or_else(|| anyhow!("window not available"))?;

    let apply = {
        let group = group.clone();
        move |transform: choropleth::ZoomTransform| {
            report(group.set_attribute("transform", &transform.to_string()));
        }
    };

    let wheel = {
        let (root_el, zoom, apply) = (root.clone(), zoom.clone(), apply.clone());
        Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            event.prevent_default();
            let p = viewport_point(&root_el, &event, size);
            let mode = DeltaMode::from_dom(event.delta_mode());
            if let Some(t) = zoom.borrow_mut().wheel(event.delta_y(), mode, event.ctrl_key(), p) {
                apply(t);
            }
        })
    };
    root.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref()).map_err(dom_err)?;
    wheel.forget();

    let down = {
        let (root_el, zoom) = (root.clone(), zoom.clone());
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.button() != 0 { return }
            zoom.borrow_mut().drag_start(viewport_point(&root_el, &event, size));
        })
    };
    root.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref()).map_err(dom_err)?;
    down.forget();

    let moved = {
        let (root_el, zoom, apply) = (root.clone(), zoom.clone(), apply.clone());
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let p = viewport_point(&root_el, &event, size);
            if let Some(t) = zoom.borrow_mut().drag_move(p) {
                apply(t);
            }
        })
    };
    window.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref()).map_err(dom_err)?;
    moved.forget();

    let up = {
        let zoom = zoom.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| zoom.borrow_mut().drag_end())
    };
    window.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref()).map_err(dom_err)?;
    up.forget();

    let dblclick = {
        let root_el = root.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let p = viewport_point(&root_el, &event, size);
            let t = zoom.borrow_mut().double_click(event.shift_key(), p);
            apply(t);
        })
    };
    root.add_event_listener_with_callback("dblclick", dblclick.as_ref().unchecked_ref()).map_err(dom_err)?;
    dblclick.forget();

    Ok(())
}
