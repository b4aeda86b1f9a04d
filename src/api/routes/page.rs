//! Page Routes
//!
//! - GET / - The dashboard page
//! - GET /_dash-layout - Page layout JSON consumed by the page script
//!
//! The page itself is static: it fetches the layout, renders the controls,
//! and posts to `/_dash-update-component` whenever a control changes.

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::PageLayout;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /_dash-layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Launch Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 1.5rem; }
        select { width: 100%; padding: 0.4rem; font-size: 1rem; }
        .slider { display: flex; gap: 1rem; align-items: center; }
        .slider input[type=range] { flex: 1; }
        .slider .value { min-width: 10rem; text-align: right; font-variant-numeric: tabular-nums; }
        .graph { min-height: 450px; }
    </style>
</head>
<body>
<div id="root"></div>
<script>
const controls = {};
const pending = {};
let callbacks = [];

function el(tag, props, children) {
    const node = document.createElement(tag);
    Object.assign(node, props || {});
    (children || []).forEach(c => node.appendChild(c));
    return node;
}

function renderDropdown(c) {
    const select = el('select', { id: c.id, title: c.placeholder });
    c.options.forEach(o => select.appendChild(el('option', { value: o.value, textContent: o.label })));
    select.value = c.value;
    controls[c.id] = c.value;
    select.addEventListener('change', () => {
        controls[c.id] = select.value;
        changed(c.id);
    });
    return select;
}

function renderRangeSlider(c) {
    const bounds = { type: 'range', min: c.min, max: c.max, step: c.step };
    const low = el('input', Object.assign({ value: c.value[0] }, bounds));
    const high = el('input', Object.assign({ value: c.value[1] }, bounds));
    const label = el('span', { className: 'value' });
    controls[c.id] = [c.value[0], c.value[1]];

    const show = () => { label.textContent = controls[c.id][0] + ' to ' + controls[c.id][1] + ' kg'; };
    const update = () => {
        controls[c.id] = [Number(low.value), Number(high.value)];
        show();
        changed(c.id);
    };
    low.addEventListener('change', update);
    high.addEventListener('change', update);
    show();

    return el('div', { id: c.id, className: 'slider' }, [low, high, label]);
}

function render(c) {
    switch (c.type) {
        case 'heading': {
            const h = el('h1', { textContent: c.text });
            h.style.textAlign = c.text_align;
            h.style.color = c.color;
            h.style.fontSize = c.font_size_px + 'px';
            return h;
        }
        case 'dropdown': return renderDropdown(c);
        case 'break': return el('br');
        case 'graph': return el('div', {}, [el('div', { id: c.id, className: 'graph' })]);
        case 'paragraph': return el('p', { textContent: c.text });
        case 'range_slider': return renderRangeSlider(c);
        default:
            console.warn('unknown component', c);
            return el('div');
    }
}

function draw(id, fig) {
    if (fig.kind === 'pie') {
        Plotly.react(id, [{
            type: 'pie',
            labels: fig.slices.map(s => s.label),
            values: fig.slices.map(s => s.count),
        }], { title: fig.title, legend: { title: { text: fig.names_field } } });
    } else {
        Plotly.react(id, fig.series.map(s => ({
            type: 'scatter',
            mode: 'markers',
            name: s.name,
            x: s.points.map(p => p.x),
            y: s.points.map(p => p.y),
        })), {
            title: fig.title,
            xaxis: { title: fig.x_field },
            yaxis: { title: fig.y_field },
            legend: { title: { text: fig.color_field } },
        });
    }
}

async function refresh(cb) {
    // Last request per graph wins.
    const seq = (pending[cb.output] || 0) + 1;
    pending[cb.output] = seq;

    const body = {
        output: cb.output,
        inputs: cb.inputs.map(id => ({ id: id, value: controls[id] })),
    };
    const res = await fetch('/_dash-update-component', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
    });
    if (!res.ok) {
        console.error('callback failed', cb.output, await res.text());
        return;
    }
    const data = await res.json();
    if (pending[cb.output] === seq) {
        draw(data.output, data.figure);
    }
}

function changed(id) {
    callbacks.filter(cb => cb.inputs.includes(id)).forEach(refresh);
}

async function init() {
    const layout = await (await fetch('/_dash-layout')).json();
    document.title = layout.title;
    const root = document.getElementById('root');
    layout.components.forEach(c => root.appendChild(render(c)));
    callbacks = layout.callbacks;
    callbacks.forEach(refresh);
}

init();
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_wires_endpoints() {
        let Html(body) = index().await;
        assert!(body.contains("/_dash-layout"));
        assert!(body.contains("/_dash-update-component"));
        assert!(body.contains("plotly"));
    }
}
