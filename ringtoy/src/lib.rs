// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! An interactive ring chart mounted into the DOM, with a controls
//! panel for adjusting geometry and per-segment styling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use ringchart::{
    animation_frames, layout_segments,
    svg::{cap_name, ring_path_d},
    ChartError, ChartOptions, ColorSource, FrameState, PaletteColors, Segment, SegmentAnimation,
    SETTLE_DELAY_MS,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One rendered path and its adjustable styling.
struct PathEntry {
    element: Element,
    stroke_width: f64,
    stroke_color: String,
}

/// All mutable state for one mounted chart.
///
/// Control handlers share it through an `Rc<RefCell>`; nothing else
/// writes to it.
struct ChartState {
    svg: Element,
    radius: f64,
    padding: f64,
    paths: Vec<PathEntry>,
    border_visible: bool,
}

/// Handle to a mounted chart.
pub struct RingChart {
    state: Rc<RefCell<ChartState>>,
}

impl RingChart {
    /// Renders a chart into the container matched by `selector`.
    ///
    /// Fails with [`ChartError::ContainerNotFound`] before touching the
    /// DOM when the selector matches nothing.
    pub fn mount(
        document: &Document,
        selector: &str,
        segments: &[Segment],
        options: &ChartOptions,
        colors: &mut dyn ColorSource,
        controls: bool,
    ) -> Result<RingChart, JsValue> {
        let container = match document.query_selector(selector) {
            Ok(Some(element)) => element,
            _ => {
                return Err(chart_error(ChartError::ContainerNotFound {
                    selector: selector.to_string(),
                }))
            }
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let resolved = options.resolve();
        let layouts = layout_segments(segments, &resolved, colors);

        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        set_svg_size(&svg, resolved.svg_size)?;
        container.append_child(&svg)?;

        let d = ring_path_d(resolved.radius, resolved.padding);
        let mut paths = Vec::with_capacity(layouts.len());
        for layout in &layouts {
            let path = document.create_element_ns(Some(SVG_NS), "path")?;
            path.set_attribute("d", &d)?;
            path.set_attribute("fill", "none")?;
            path.set_attribute("stroke", &layout.color)?;
            path.set_attribute("stroke-linecap", cap_name(resolved.stroke_line_cap))?;
            path.set_attribute(
                "style",
                &format!("transition: all {}ms ease", resolved.animation_duration_ms),
            )?;

            let mut anim = SegmentAnimation::new(animation_frames(layout, &resolved));
            apply_frame(&path, anim.frame(), resolved.circumference)?;
            // Prepend keeps earlier segments on top of later ones.
            svg.prepend_with_node_1(&path)?;

            if !anim.is_settled() {
                let staged = path.clone();
                let circumference = resolved.circumference;
                let callback = Closure::<dyn FnMut()>::new(move || {
                    let frame = anim.advance_to_settled();
                    let _ = apply_frame(&staged, frame, circumference);
                });
                window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    SETTLE_DELAY_MS as i32,
                )?;
                callback.forget();
            }

            paths.push(PathEntry {
                element: path,
                stroke_width: layout.stroke_width,
                stroke_color: layout.color.clone(),
            });
        }

        if resolved.show_legend {
            for layout in &layouts {
                append_legend_row(document, &container, &layout.color, layout.value)?;
            }
        }

        let state = Rc::new(RefCell::new(ChartState {
            svg,
            radius: resolved.radius,
            padding: resolved.padding,
            paths,
            border_visible: false,
        }));

        if controls {
            add_controls(document, &container, &state)?;
        }

        Ok(RingChart { state })
    }

    /// Toggles the debug outline around the SVG.
    pub fn set_border_visible(&self, visible: bool) {
        let mut chart = self.state.borrow_mut();
        chart.border_visible = visible;
        apply_border(&chart);
    }

    /// Adjusts the ring geometry in place, rewriting the SVG dimensions
    /// and every path.
    pub fn resize(&self, radius: f64, padding: f64) {
        let mut chart = self.state.borrow_mut();
        chart.radius = radius;
        chart.padding = padding;
        resize_chart(&chart);
    }
}

fn chart_error(err: ChartError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn apply_frame(path: &Element, frame: FrameState, circumference: f64) -> Result<(), JsValue> {
    path.set_attribute(
        "stroke-dasharray",
        &format!("{}, {}", frame.dash_length, circumference),
    )?;
    path.set_attribute("stroke-width", &frame.stroke_width.to_string())
}

fn set_svg_size(svg: &Element, size: f64) -> Result<(), JsValue> {
    svg.set_attribute("width", &size.to_string())?;
    svg.set_attribute("height", &size.to_string())?;
    svg.set_attribute("viewBox", &format!("0 0 {size} {size}"))
}

fn apply_border(chart: &ChartState) {
    let border = if chart.border_visible {
        "border: 1px solid red"
    } else {
        "border: none"
    };
    let _ = chart.svg.set_attribute("style", border);
}

/// Rewrites the SVG dimensions and every path for the current radius and
/// padding. Stroke styling is untouched.
fn resize_chart(chart: &ChartState) {
    let _ = set_svg_size(&chart.svg, 2.0 * chart.radius + chart.padding);
    let d = ring_path_d(chart.radius, chart.padding);
    for entry in &chart.paths {
        let _ = entry.element.set_attribute("d", &d);
    }
}

fn append_legend_row(
    document: &Document,
    container: &Element,
    color: &str,
    value: f64,
) -> Result<(), JsValue> {
    let row = document.create_element("div")?;
    row.set_attribute(
        "style",
        "display: flex; align-items: center; margin-bottom: 5px;",
    )?;
    let swatch = document.create_element("div")?;
    swatch.set_attribute(
        "style",
        &format!("width: 20px; height: 20px; background-color: {color}; margin-right: 10px;"),
    )?;
    let label = document.create_element("span")?;
    label.set_text_content(Some(&format!("{value}%")));
    row.append_child(&swatch)?;
    row.append_child(&label)?;
    container.append_child(&row)?;
    Ok(())
}

fn event_input(event: &Event) -> Option<HtmlInputElement> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
}

fn add_controls(
    document: &Document,
    container: &Element,
    state: &Rc<RefCell<ChartState>>,
) -> Result<(), JsValue> {
    let panel = document.create_element("div")?;
    panel.set_attribute(
        "style",
        "width: fit-content; padding: 10px; margin-top: 20px; \
         background-color: #2e2e2e; color: #fff; font-family: Arial, sans-serif;",
    )?;

    let toggle = document.create_element("input")?;
    toggle.set_attribute("type", "checkbox")?;
    toggle.set_attribute("id", "toggle-border")?;
    {
        let state = Rc::clone(state);
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event_input(&event) else {
                return;
            };
            let mut chart = state.borrow_mut();
            chart.border_visible = input.checked();
            apply_border(&chart);
        });
        toggle.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    let toggle_label = document.create_element("label")?;
    toggle_label.set_attribute("for", "toggle-border")?;
    toggle_label.set_text_content(Some("Show SVG Border"));
    panel.append_child(&toggle)?;
    panel.append_child(&toggle_label)?;

    let (padding, radius, path_count, max_width) = {
        let chart = state.borrow();
        (
            chart.padding,
            chart.radius,
            chart.paths.len(),
            chart.padding / 2.0,
        )
    };

    {
        let state = Rc::clone(state);
        add_range_input(
            document,
            &panel,
            "Padding",
            padding,
            0.0,
            100.0,
            1.0,
            move |value| {
                let mut chart = state.borrow_mut();
                chart.padding = value;
                resize_chart(&chart);
            },
        )?;
    }
    {
        let state = Rc::clone(state);
        add_range_input(
            document,
            &panel,
            "Radius",
            radius,
            10.0,
            100.0,
            1.0,
            move |value| {
                let mut chart = state.borrow_mut();
                chart.radius = value;
                resize_chart(&chart);
            },
        )?;
    }

    for idx in 0..path_count {
        let state = Rc::clone(state);
        let initial = state.borrow().paths[idx].stroke_width;
        add_range_input(
            document,
            &panel,
            &format!("Stroke Width for Path {}", idx + 1),
            initial,
            1.0,
            max_width,
            1.0,
            move |value| {
                let mut chart = state.borrow_mut();
                let entry = &mut chart.paths[idx];
                entry.stroke_width = value;
                let _ = entry.element.set_attribute("stroke-width", &value.to_string());
            },
        )?;
    }

    for idx in 0..path_count {
        let picker = document.create_element("input")?;
        picker.set_attribute("type", "color")?;
        picker.set_attribute("value", &state.borrow().paths[idx].stroke_color)?;
        {
            let state = Rc::clone(state);
            let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(input) = event_input(&event) else {
                    return;
                };
                let mut chart = state.borrow_mut();
                let entry = &mut chart.paths[idx];
                entry.stroke_color = input.value();
                let _ = entry.element.set_attribute("stroke", &entry.stroke_color);
            });
            picker.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }
        let label = document.create_element("label")?;
        label.set_text_content(Some(&format!("Stroke Color for Path {}", idx + 1)));
        panel.append_child(&label)?;
        panel.append_child(&picker)?;
    }

    container.append_child(&panel)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add_range_input(
    document: &Document,
    parent: &Element,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    mut on_change: impl FnMut(f64) + 'static,
) -> Result<(), JsValue> {
    let wrapper = document.create_element("div")?;
    let text = document.create_element("label")?;
    text.set_text_content(Some(label));
    let range = document.create_element("input")?;
    range.set_attribute("type", "range")?;
    range.set_attribute("min", &min.to_string())?;
    range.set_attribute("max", &max.to_string())?;
    range.set_attribute("step", &step.to_string())?;
    range.set_attribute("value", &value.to_string())?;
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(input) = event_input(&event) {
            if let Ok(parsed) = input.value().parse::<f64>() {
                on_change(parsed);
            }
        }
    });
    range.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
    handler.forget();
    wrapper.append_child(&text)?;
    wrapper.append_child(&range)?;
    parent.append_child(&wrapper)?;
    Ok(())
}

/// Mounts a demo chart with controls into `#ringtoy-container`.
#[wasm_bindgen]
pub fn run_ringtoy() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let segments = [
        Segment::new(25.0).with_color("#3366BB"),
        Segment::new(35.0).with_color("#EE9944"),
        Segment::new(40.0),
    ];
    let options = ChartOptions::default();
    let mut colors = PaletteColors::rainbow();
    RingChart::mount(
        &document,
        "#ringtoy-container",
        &segments,
        &options,
        &mut colors,
        true,
    )?;
    Ok(())
}
