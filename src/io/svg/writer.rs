//! SVG writing operations.

use std::io::Write;

use anyhow::{Context, Result};

use crate::{common::js_number, scene::{Legend, Scene}};

/// String-based SVG writer for WASM/browser use
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    /// Create a new string-based SVG writer
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Opening `<svg>` tag with the canvas size.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, scene: &Scene) -> Result<()> {
    writeln!(writer, r#"<svg xmlns="http://www.w3.org/2000/svg" class="choropleth-map" viewBox="{}" width="{}" height="{}">"#,
        scene.view_box(),
        js_number(scene.width),
        js_number(scene.height),
    )?;
    Ok(())
}

/// The zoomable map group: one path per county.
pub(crate) fn write_counties<W: Write>(writer: &mut W, scene: &Scene) -> Result<()> {
    writeln!(writer, "<g>")?;
    for path in &scene.counties {
        write!(writer, r#"<path class="county" d="{}" fill="{}""#, path.d, path.fill)?;
        if let Some(id) = &path.county.id {
            write!(writer, r#" data-fips="{}""#, escape(&id.to_string()))?;
        }
        writeln!(writer, r#" data-education="{}"></path>"#, js_number(path.county.education))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

/// Legend group: swatches, then the axis without its domain line.
pub(crate) fn write_legend<W: Write>(writer: &mut W, legend: &Legend) -> Result<()> {
    writeln!(writer, r#"<g id="legend" class="legend" transform="translate({}, {})">"#,
        js_number(legend.offset.0),
        js_number(legend.offset.1),
    )?;

    for rect in &legend.rects {
        writeln!(writer, r#"<rect class="legend-rect" fill="{}" x="{}" width="{}" height="{}"></rect>"#,
            rect.fill,
            js_number(rect.x),
            js_number(rect.width),
            js_number(rect.height),
        )?;
    }

    let axis = &legend.axis;
    writeln!(writer, r#"<g fill="none" font-size="10" font-family="sans-serif" text-anchor="middle">"#)?;
    for tick in &axis.ticks {
        writeln!(writer, r#"<g class="tick" opacity="1" transform="translate({},0)"><line stroke="currentColor" y2="{}"></line><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
            js_number(tick.position),
            js_number(axis.tick_size_inner),
            js_number(axis.spacing()),
            escape(&tick.label),
        )?;
    }
    writeln!(writer, "</g>")?;

    writeln!(writer, "</g>")?;
    Ok(())
}

/// Write SVG footer to any writer (standalone function).
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// The complete `<svg>` element.
pub(crate) fn write_scene<W: Write>(writer: &mut W, scene: &Scene) -> Result<()> {
    write_svg_header(writer, scene)?;
    write_counties(writer, scene)?;
    write_legend(writer, &scene.legend)?;
    write_svg_footer(writer)
}

/// Standalone page: the map plus the (hidden) tooltip container.
pub(crate) fn write_html<W: Write>(writer: &mut W, scene: &Scene, title: &str) -> Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, r#"<html lang="en">"#)?;
    writeln!(writer, r#"<head><meta charset="utf-8"><title>{}</title>"#, escape(title))?;
    writeln!(writer, r##"<style>
    .county {{ stroke: none; }}
    .county:hover {{ stroke: #111827; stroke-width: 0.5; }}
    .tooltip {{ position: absolute; pointer-events: none; padding: 4px 8px; background: #ffffff; border: 1px solid #9ca3af; font: 12px sans-serif; opacity: 0; }}
</style></head>"##)?;
    writeln!(writer, "<body>")?;
    write_scene(writer, scene)?;
    writeln!(writer, r#"<div id="tooltip" class="tooltip" opacity="0"><span></span></div>"#)?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

impl Scene {
    /// Write the scene as an SVG document.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_scene(writer, self)
    }

    /// Write the scene inside a standalone HTML page.
    pub fn write_html<W: Write>(&self, writer: &mut W, title: &str) -> Result<()> {
        write_html(writer, self, title)
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        write_scene(&mut writer, self)?;
        writer.into_string()
    }
}
