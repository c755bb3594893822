//! Embedded dashboard page
//!
//! The whole front-end is one static HTML page baked into the binary.
//! It carries no data of its own: on load it fetches the layout JSON,
//! builds the controls from it, and re-fetches chart specifications
//! through the bindings the layout declares. Plotly.js comes from the
//! CDN and renders the specifications as-is.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
*{box-sizing:border-box;margin:0;padding:0}
:root{
  --bg:#f7f7fb;--panel:#ffffff;--border:#d9d9e3;
  --text:#2b2b38;--dim:#6a6a7a;--accent:#503d36;--focus:#4a8aff;
}
body{background:var(--bg);color:var(--text);font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;font-size:14px}
#wrap{max-width:1100px;margin:0 auto;padding:24px 16px 48px}
h1{color:var(--accent);font-size:26px;text-align:center;margin-bottom:24px}

/* CONTROLS */
.panel{background:var(--panel);border:1px solid var(--border);border-radius:8px;padding:16px 20px;margin-bottom:20px}
.ctl-label{font-size:12px;color:var(--dim);text-transform:uppercase;letter-spacing:.06em;margin-bottom:6px}
select{width:100%;max-width:420px;background:var(--panel);border:1px solid var(--border);color:var(--text);padding:7px 10px;border-radius:4px;font-size:14px}
select:focus{outline:none;border-color:var(--focus)}
.slider-row{display:flex;align-items:center;gap:12px;margin-top:4px}
input[type=range]{flex:1;accent-color:var(--accent);height:18px}
#payload-readout{min-width:150px;font-size:13px;color:var(--dim);text-align:right}
#slider-marks{display:flex;justify-content:space-between;font-size:10px;color:var(--dim);margin-top:2px}

/* CHARTS */
.chart{background:var(--panel);border:1px solid var(--border);border-radius:8px;margin-bottom:20px;min-height:420px}
#status{font-size:12px;color:var(--dim);text-align:center;min-height:16px}
</style>
</head>
<body>

<div id="wrap">
  <h1 id="page-title">SpaceX Launch Records Dashboard</h1>

  <!-- SITE SELECTOR -->
  <div class="panel">
    <div class="ctl-label" id="site-label">Launch Site:</div>
    <select id="site-dropdown"></select>
  </div>

  <!-- CHART: success proportion -->
  <div class="chart" id="success-pie-chart"></div>

  <!-- PAYLOAD RANGE -->
  <div class="panel">
    <div class="ctl-label" id="payload-label">Payload range (Kg):</div>
    <div class="slider-row" id="payload-slider">
      <input type="range" id="payload-low">
      <input type="range" id="payload-high">
      <span id="payload-readout"></span>
    </div>
    <div id="slider-marks"></div>
  </div>

  <!-- CHART: payload correlation -->
  <div class="chart" id="success-payload-scatter-chart"></div>

  <div id="status"></div>
</div>

<script>
// ── Helpers ──────────────────────────────────────────────────────────
const $=id=>document.getElementById(id);
async function getJson(url){
  const r=await fetch(url);
  if(!r.ok)throw new Error(url+' -> '+r.status);
  return r.json();
}

let L=null; // layout, fetched once

// ── Controls ─────────────────────────────────────────────────────────
function buildDropdown(){
  const d=L.site_dropdown,el=$(d.id);
  el.innerHTML='';
  for(const o of d.options){
    const opt=document.createElement('option');
    opt.value=o.value;opt.textContent=o.label;
    el.appendChild(opt);
  }
  el.value=d.value;
  el.title=d.placeholder;
}

function buildSlider(){
  const s=L.payload_slider;
  $('payload-label').textContent=s.label;
  for(const el of [$('payload-low'),$('payload-high')]){
    el.min=s.min;el.max=s.max;el.step=s.step;
  }
  $('payload-low').value=s.value[0];
  $('payload-high').value=s.value[1];
  $('slider-marks').innerHTML=s.marks.map(m=>`<span>${m.label}</span>`).join('');
  updateReadout();
}

function updateReadout(){
  const [lo,hi]=rangeValues();
  $('payload-readout').textContent=lo+' to '+hi+' kg';
}

function rangeValues(){
  const lo=+$('payload-low').value,hi=+$('payload-high').value;
  return [Math.min(lo,hi),Math.max(lo,hi)];
}

function controlState(){
  const [lo,hi]=rangeValues();
  return {site:$(L.site_dropdown.id).value,low:lo,high:hi};
}

// ── Charts ───────────────────────────────────────────────────────────
async function refresh(outputs){
  const s=controlState();
  const qs=new URLSearchParams({site:s.site,low:s.low,high:s.high});
  for(const id of outputs){
    try{
      const spec=await getJson(`/api/v1/charts/${id}?`+qs);
      Plotly.react(id,spec.data,spec.layout,{responsive:true});
      $('status').textContent='';
    }catch(e){
      // keep the previous chart on error
      $('status').textContent='Chart update failed: '+e.message;
    }
  }
}

function outputsFor(controlId){
  return L.bindings.filter(b=>b.inputs.includes(controlId)).map(b=>b.output);
}

// ── Wiring ───────────────────────────────────────────────────────────
async function init(){
  L=await getJson('/api/v1/layout');
  document.title=L.title;
  $('page-title').textContent=L.title;
  buildDropdown();
  buildSlider();

  $(L.site_dropdown.id).addEventListener('change',()=>refresh(outputsFor(L.site_dropdown.id)));
  for(const el of [$('payload-low'),$('payload-high')]){
    el.addEventListener('input',updateReadout);
    el.addEventListener('change',()=>refresh(outputsFor(L.payload_slider.id)));
  }

  await refresh(L.outputs);
}

init().catch(e=>{$('status').textContent='Failed to load dashboard: '+e.message});
</script>
</body>
</html>
"##;
