//! Backend upload-error classifier.
//!
//! A pure function turning the raw backend error string into structured
//! user guidance. It only changes how a rejection is explained, never the
//! accept/reject decision itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Structured explanation of an upload failure, consumed by the error modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorExplanation {
    pub title: String,
    pub message: String,
    pub technical: Option<String>,
    pub suggestions: Vec<String>,
}

static RESOLUTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"resolution (\d+x\d+)").unwrap());
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"duration ([\d.]+) seconds").unwrap());
static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"range ([\d.]+)-([\d.]+) seconds").unwrap());
static EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"invalid file extension: (\.\w+)").unwrap());
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"file size ([\d.]+\w+) exceeds maximum ([\d.]+\w+)").unwrap());

/// Map a raw backend error message to user-facing remediation guidance.
///
/// Recognizes the four known validation categories (resolution, duration,
/// extension, size) and extracts the embedded numeric values; anything else
/// falls back to a generic explanation carrying the raw text verbatim as
/// technical detail.
pub fn explain_upload_error(raw: &str) -> ErrorExplanation {
    if raw.contains("resolution") && raw.contains("minimum") {
        return explain_resolution(raw);
    }
    if raw.contains("duration") && raw.contains("range") {
        return explain_duration(raw);
    }
    if raw.contains("invalid file extension") {
        return explain_extension(raw);
    }
    if raw.contains("file size") && raw.contains("exceeds") {
        return explain_size(raw);
    }

    ErrorExplanation {
        title: "Error al subir el video".to_string(),
        message: if raw.is_empty() {
            "Error desconocido al subir el video".to_string()
        } else {
            raw.to_string()
        },
        technical: Some(raw.to_string()),
        suggestions: Vec::new(),
    }
}

fn explain_resolution(raw: &str) -> ErrorExplanation {
    let message = match RESOLUTION_RE.captures(raw).map(|c| c[1].to_string()) {
        Some(resolution) => format!(
            "Tu video tiene resolución {}. Se requiere mínimo 1920x1080 (Full HD)",
            resolution
        ),
        None => "La resolución de tu video es muy baja".to_string(),
    };

    ErrorExplanation {
        title: "Resolución muy baja".to_string(),
        message,
        technical: Some(raw.to_string()),
        suggestions: vec![
            "Graba tu video en calidad Full HD (1920x1080) o superior".to_string(),
            "Verifica la configuración de tu cámara antes de grabar".to_string(),
            "Usa la cámara trasera de tu teléfono para mejor calidad".to_string(),
        ],
    }
}

fn explain_duration(raw: &str) -> ErrorExplanation {
    let duration = DURATION_RE
        .captures(raw)
        .and_then(|c| c[1].parse::<f64>().ok());
    let range = RANGE_RE.captures(raw).and_then(|c| {
        let min = c[1].parse::<f64>().ok()?;
        let max = c[2].parse::<f64>().ok()?;
        Some((min, max))
    });

    let (message, suggestions) = match (duration, range) {
        (Some(current), Some((min, max))) => {
            let message = format!(
                "Tu video dura {} segundos. Debe durar entre {} y {} segundos",
                current, min, max
            );
            let suggestions = if current < min {
                vec![
                    "Graba un video más largo con más jugadas".to_string(),
                    "Incluye más movimientos y técnicas".to_string(),
                ]
            } else {
                vec![
                    "Edita tu video para reducir la duración".to_string(),
                    "Enfócate en tus mejores jugadas".to_string(),
                ]
            };
            (message, suggestions)
        }
        _ => (
            "La duración de tu video está fuera del rango permitido".to_string(),
            Vec::new(),
        ),
    };

    ErrorExplanation {
        title: "Duración incorrecta".to_string(),
        message,
        technical: Some(raw.to_string()),
        suggestions,
    }
}

fn explain_extension(raw: &str) -> ErrorExplanation {
    let message = match EXTENSION_RE.captures(raw).map(|c| c[1].to_string()) {
        Some(extension) => format!("Archivo {} no permitido. Solo se acepta MP4", extension),
        None => "Solo se acepta formato MP4".to_string(),
    };

    ErrorExplanation {
        title: "Formato no válido".to_string(),
        message,
        technical: Some(raw.to_string()),
        suggestions: vec![
            "Convierte tu video a formato MP4".to_string(),
            "Usa aplicaciones como VLC o convertidores online".to_string(),
            "Graba directamente en formato MP4".to_string(),
        ],
    }
}

fn explain_size(raw: &str) -> ErrorExplanation {
    let message = match SIZE_RE.captures(raw) {
        Some(c) => format!("Tamaño actual: {}. Máximo: {}", &c[1], &c[2]),
        None => "El archivo supera el tamaño máximo permitido (100MB)".to_string(),
    };

    ErrorExplanation {
        title: "Archivo muy grande".to_string(),
        message,
        technical: Some(raw.to_string()),
        suggestions: vec![
            "Reduce la calidad de video a 1080p".to_string(),
            "Acorta la duración del video".to_string(),
            "Usa un compresor de video online".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_extracts_dimensions() {
        let explanation =
            explain_upload_error("resolution 1280x720 below minimum 1920x1080");
        assert_eq!(explanation.title, "Resolución muy baja");
        assert!(explanation.message.contains("1280x720"));
        assert!(explanation.message.contains("1920x1080"));
        assert!(!explanation.suggestions.is_empty());
    }

    #[test]
    fn resolution_error_without_match_keeps_generic_message() {
        let explanation = explain_upload_error("resolution below minimum allowed");
        assert_eq!(explanation.title, "Resolución muy baja");
        assert_eq!(explanation.message, "La resolución de tu video es muy baja");
    }

    #[test]
    fn duration_too_short_suggests_longer_video() {
        let explanation =
            explain_upload_error("duration 12.5 seconds outside range 20-60 seconds");
        assert_eq!(explanation.title, "Duración incorrecta");
        assert!(explanation.message.contains("12.5"));
        assert!(explanation.message.contains("20"));
        assert!(explanation.message.contains("60"));
        assert!(explanation.suggestions[0].contains("más largo"));
    }

    #[test]
    fn duration_too_long_suggests_editing() {
        let explanation =
            explain_upload_error("duration 75 seconds outside range 20-60 seconds");
        assert!(explanation.suggestions[0].contains("reducir"));
    }

    #[test]
    fn extension_error_extracts_extension() {
        let explanation = explain_upload_error("invalid file extension: .avi");
        assert_eq!(explanation.title, "Formato no válido");
        assert!(explanation.message.contains(".avi"));
    }

    #[test]
    fn size_error_extracts_both_sizes() {
        let explanation =
            explain_upload_error("file size 150.3MB exceeds maximum 100MB");
        assert_eq!(explanation.title, "Archivo muy grande");
        assert!(explanation.message.contains("150.3MB"));
        assert!(explanation.message.contains("100MB"));
    }

    #[test]
    fn unrecognized_message_falls_back_verbatim() {
        let explanation = explain_upload_error("corrupted container atom");
        assert_eq!(explanation.title, "Error al subir el video");
        assert_eq!(explanation.message, "corrupted container atom");
        assert_eq!(
            explanation.technical.as_deref(),
            Some("corrupted container atom")
        );
        assert!(explanation.suggestions.is_empty());
    }

    #[test]
    fn empty_message_uses_unknown_error_text() {
        let explanation = explain_upload_error("");
        assert_eq!(explanation.message, "Error desconocido al subir el video");
    }
}
