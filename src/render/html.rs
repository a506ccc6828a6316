use htmlize::escape_text;

use super::{MapOptions, MapView, RenderError};

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    body { font-family: ui-sans-serif, system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1rem; }
    #map { width: 100%; height: {{HEIGHT}}px; }
    .numbered-marker {
      background-color: gray;
      border-radius: 50%;
      width: 28px;
      height: 28px;
      display: flex;
      align-items: center;
      justify-content: center;
      color: white;
      font-weight: bold;
      border: 2px solid black;
      box-sizing: border-box;
    }
    table.record { border-collapse: collapse; margin-top: 1rem; font-size: 0.9rem; }
    table.record th, table.record td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }
    table.record th { background: #f3f4f6; }
    footer { color: #6b7280; font-size: 0.8rem; margin-top: 1rem; }
  </style>
</head>

<body>
  <h1>{{TITLE}}</h1>
  <p>{{CAPTION}}</p>
  <div id="map"></div>

  <h2>Selected record</h2>
  <table class="record">
    <tbody>
{{ROWS}}
    </tbody>
  </table>
  <footer>Generated {{GENERATED}}</footer>

  <script>
    const view = {{PAYLOAD}};

    function textNode(text) {
      const el = document.createElement('div');
      el.textContent = text;
      return el;
    }

    const map = L.map('map', { zoomControl: true }).setView([view.center.lat, view.center.lng], view.zoom);
    L.control.scale().addTo(map);
    L.tileLayer(view.tiles.url, { attribution: view.tiles.attribution, maxZoom: 19 }).addTo(map);

    for (const m of view.markers) {
      const badge = document.createElement('div');
      badge.className = 'numbered-marker';
      badge.style.backgroundColor = m.fill;
      badge.textContent = String(m.number);
      const icon = L.divIcon({ className: '', html: badge, iconSize: [28, 28], iconAnchor: [14, 14] });
      L.marker([m.position.lat, m.position.lng], { icon })
        .bindTooltip(textNode(m.tooltip))
        .bindPopup(textNode(m.popup))
        .addTo(map);
    }

    if (view.line) {
      L.polyline(view.line.points.map(p => [p.lat, p.lng]), {
        weight: view.line.weight,
        opacity: view.line.opacity,
      }).addTo(map);
    }

    if (view.bounds) {
      map.fitBounds([
        [view.bounds.south_west.lat, view.bounds.south_west.lng],
        [view.bounds.north_east.lat, view.bounds.north_east.lng],
      ]);
    }
  </script>
</body>

</html>
"#;

/// Serialize the view for inline `<script>` use.
///
/// `</` is split so a cell value cannot close the script element, and the
/// two line separators JSON allows but older JS parsers reject are escaped.
fn script_payload(view: &MapView) -> Result<String, RenderError> {
    let json = serde_json::to_string(view)?;
    Ok(json
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

fn record_rows(row: &[(String, String)]) -> String {
    row.iter()
        .map(|(header, value)| {
            format!(
                "      <tr><th>{}</th><td>{}</td></tr>",
                escape_text(header.as_str()),
                escape_text(value.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a standalone Leaflet page: the map followed by the raw record.
pub fn render_page(
    view: &MapView,
    caption: &str,
    row: &[(String, String)],
    options: &MapOptions,
) -> Result<String, RenderError> {
    let payload = script_payload(view)?;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let height = options.height.to_string();
    let title = escape_text(options.title.as_str());
    let caption = escape_text(caption);
    let rows = record_rows(row);

    Ok(fill(
        PAGE_TEMPLATE,
        &[
            ("TITLE", &*title),
            ("CAPTION", &*caption),
            ("HEIGHT", height.as_str()),
            ("ROWS", rows.as_str()),
            ("GENERATED", generated.as_str()),
            ("PAYLOAD", payload.as_str()),
        ],
    ))
}

impl MapView {
    /// Standalone page with just the map, captioned with the page title.
    pub fn to_html(&self, options: &MapOptions) -> Result<String, RenderError> {
        render_page(self, &options.title, &[], options)
    }
}

/// Single-pass `{{KEY}}` substitution; substituted text is never rescanned.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
