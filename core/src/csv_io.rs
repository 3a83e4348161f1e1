// core/src/csv_io.rs
// CSV-format for kretsparametre: header `name,ep,fp`, én rad per krets i indeksrekkefølge.
use base64::prelude::*;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use log::{debug, warn};

use crate::error::{CurveError, ParseError};
use crate::models::{CircuitRegistry, CircuitSettings};

pub const HEADER: [&str; 3] = ["name", "ep", "fp"];

/// Skriv alle kretser som CSV. Flyttall skrives med korteste
/// round-trip-representasjon, så import gir nøyaktig samme verdier.
pub fn export_csv(registry: &CircuitRegistry) -> Result<String, CurveError> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;

    for c in registry.iter() {
        let ep = c.settings.endpoint.to_string();
        let fp = c.settings.footpoint.to_string();
        wtr.write_record([c.name.as_str(), ep.as_str(), fp.as_str()])?;
    }

    let bytes = wtr.into_inner().map_err(|e| CurveError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ParseError::new(e.to_string()).into())
}

fn column(headers: &StringRecord, name: &str) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ParseError::new(format!("kolonne '{name}' mangler")))
}

fn number(record: &StringRecord, col: usize, name: &str, row: usize) -> Result<f64, ParseError> {
    let raw = record
        .get(col)
        .ok_or_else(|| ParseError::new(format!("rad {}: felt '{name}' mangler", row + 1)))?;
    raw.parse::<f64>()
        .map_err(|_| ParseError::new(format!("rad {}: '{raw}' er ikke et tall ({name})", row + 1)))
}

/// Les `name,ep,fp`-CSV inn i registeret. Rad i oppdaterer krets i.
///
/// Rader utover antall kretser ignoreres; manglende rader lar kretsene stå.
/// Rader er uavhengige: ved feil står allerede anvendte rader, og raden
/// som feiler endrer ingenting. Returnerer antall anvendte rader.
pub fn import_csv(text: &str, registry: &mut CircuitRegistry) -> Result<usize, ParseError> {
    let text = text.trim_start_matches('\u{feff}');
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| ParseError::new(format!("kunne ikke lese header: {e}")))?
        .clone();
    let ep_col = column(&headers, "ep")?;
    let fp_col = column(&headers, "fp")?;

    let mut applied = 0usize;
    for (i, record) in rdr.records().enumerate() {
        if i >= registry.len() {
            warn!("CSV har flere rader enn {} kretser, resten ignoreres", registry.len());
            break;
        }
        let record = record.map_err(|e| ParseError::new(format!("rad {}: {e}", i + 1)))?;

        let settings = CircuitSettings {
            endpoint: number(&record, ep_col, "ep", i)?,
            footpoint: number(&record, fp_col, "fp", i)?,
        };
        registry
            .set(i, settings)
            .map_err(|e| ParseError::new(e.to_string()))?;
        applied += 1;
    }

    debug!("CSV-import: {applied} rader anvendt");
    Ok(applied)
}

/// Dekod filinnhold fra Dash-upload (`data:<mime>;base64,<payload>`
/// eller ren base64) til UTF-8-tekst.
pub fn decode_upload(contents: &str) -> Result<String, ParseError> {
    let payload = match contents.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, p)| p)
            .ok_or_else(|| ParseError::new("data-URL uten innhold"))?,
        None => contents,
    };

    let bytes = BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|e| ParseError::new(format!("base64-dekoding feilet: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ParseError::new(format!("filen er ikke UTF-8: {e}")))
}

pub fn import_upload(contents: &str, registry: &mut CircuitRegistry) -> Result<usize, ParseError> {
    let text = decode_upload(contents)?;
    import_csv(&text, registry)
}

/// Bygg et register med én krets per CSV-rekord (ikke per tekstlinje –
/// quotede navn kan inneholde linjeskift). Navn hentes fra `name`-kolonnen
/// hvis den finnes og ikke er tom, ellers "Heizkreis i".
pub fn registry_from_csv(text: &str) -> Result<CircuitRegistry, ParseError> {
    let text = text.trim_start_matches('\u{feff}');
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| ParseError::new(format!("kunne ikke lese header: {e}")))?
        .clone();
    let name_col = headers.iter().position(|h| h == "name");

    let mut names = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| ParseError::new(format!("rad {}: {e}", i + 1)))?;
        let name = name_col
            .and_then(|c| record.get(c))
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Heizkreis {}", i + 1));
        names.push(name);
    }

    let mut registry = CircuitRegistry::new(names);
    import_csv(text, &mut registry)?;
    Ok(registry)
}

/// Filnavn for nedlasting, f.eks. `heizkurven_2024-01-31.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("heizkurven_{}.csv", date.format("%Y-%m-%d"))
}
