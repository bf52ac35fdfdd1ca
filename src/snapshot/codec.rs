use crate::element::element_model::Screen;
use crate::snapshot::error::SnapshotError;

// ============================================================================
// JSON snapshot codec
// ============================================================================

/// Serialize a finalized screen to pretty JSON.
pub fn to_json(screen: &Screen) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(screen).map_err(|e| SnapshotError::JsonSerialize {
        context: format!("screen '{}'", screen.id()),
        source: e,
    })
}

/// Parse a screen snapshot back from JSON. The result is already-finalized
/// data; there is no way back into a builder.
pub fn from_json(json: &str) -> Result<Screen, SnapshotError> {
    serde_json::from_str(json).map_err(|e| SnapshotError::JsonParse {
        context: "screen snapshot".to_string(),
        source: e,
    })
}

/// Write a screen snapshot to a file.
pub fn save_screen(path: &str, screen: &Screen) -> Result<(), SnapshotError> {
    let json = to_json(screen)?;
    std::fs::write(path, json).map_err(|e| SnapshotError::Io {
        path: path.to_string(),
        source: e,
    })
}

/// Load a screen snapshot from a file.
pub fn load_screen(path: &str) -> Result<Screen, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.to_string(),
        source: e,
    })?;
    from_json(&content)
}

/// SHA-1 hex digest over the compact JSON form of a screen.
///
/// Stable for structurally equal trees, so two independently built screens
/// with the same content fingerprint identically.
pub fn screen_fingerprint(screen: &Screen) -> Result<String, SnapshotError> {
    use sha1::{Digest, Sha1};

    let json = serde_json::to_string(screen).map_err(|e| SnapshotError::JsonSerialize {
        context: format!("fingerprint of screen '{}'", screen.id()),
        source: e,
    })?;

    let mut hasher = Sha1::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
