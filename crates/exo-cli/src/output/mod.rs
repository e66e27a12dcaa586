use exo_core::PlanetRecord;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Columns shown when a planet listing is rendered as a table.
const PLANET_COLUMNS: [&str; 8] = [
    "name", "type", "score", "radius", "mass", "temp_k", "dist_pc", "year",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value, TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render planets as JSON, or as a summary table with one row per planet.
pub fn render_planets(planets: &[PlanetRecord], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&planets, format);
    }
    if planets.is_empty() {
        return Ok(String::from("(no planets)"));
    }

    let rows = planets.iter().map(planet_row).collect::<Vec<_>>();
    Ok(render_table(&PLANET_COLUMNS, &rows, TableOptions::from_env()))
}

pub fn output_planets(planets: &[PlanetRecord], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_planets(planets, format)?;
    println!("{rendered}");
    Ok(())
}

fn planet_row(planet: &PlanetRecord) -> Vec<String> {
    vec![
        planet.name.clone(),
        planet.planet_type.to_string(),
        planet.habitability_score.to_string(),
        measurement(planet.radius, 2),
        measurement(planet.mass, 2),
        measurement(planet.temperature, 0),
        measurement(planet.distance, 1),
        planet
            .discovery_year
            .map_or_else(|| String::from("-"), |year| year.to_string()),
    ]
}

fn measurement(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| String::from("-"), |v| format!("{v:.precision$}"))
}

fn render_value_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(render_table(&headers, &rows, options))
        }
        scalar => Ok(render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
