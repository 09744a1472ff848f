//! Status composer: a pure read projection over the session, diagnostics,
//! cursor, and wall clock. Owns no state and cannot fail.

use chrono::{DateTime, Local};

use crate::workspace::{DiagnosticsState, EditorSession};

/// Fallback language label when the active path has no extension, or no file
/// is active.
const FALLBACK_LANGUAGE: &str = "TEXT";

/// Everything the status bar displays, recomputed per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branch: String,
    pub errors: usize,
    pub warnings: usize,
    pub line: usize,
    pub col: usize,
    pub language: String,
    pub encoding: String,
    pub clock: String,
}

/// Compose the status line from current state.
pub fn compose(
    session: &EditorSession,
    diagnostics: &DiagnosticsState,
    cursor: (usize, usize),
    now: DateTime<Local>,
) -> StatusInfo {
    StatusInfo {
        branch: "main".to_string(),
        errors: diagnostics.error_count(),
        warnings: diagnostics.warning_count(),
        line: cursor.0,
        col: cursor.1,
        language: language_label(session.active_path()),
        encoding: "UTF-8".to_string(),
        clock: now.format("%H:%M:%S").to_string(),
    }
}

/// The string after the last `.` of the active path, uppercased.
fn language_label(active_path: Option<&str>) -> String {
    match active_path {
        Some(path) => match path.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
            _ => FALLBACK_LANGUAGE.to_string(),
        },
        None => FALLBACK_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 12, 34, 56).unwrap()
    }

    #[test]
    fn language_comes_from_extension() {
        let mut session = EditorSession::default();
        session.open("portfolio/about.java");
        let info = compose(&session, &DiagnosticsState::default(), (1, 1), at_noon());
        assert_eq!(info.language, "JAVA");
        assert_eq!(info.clock, "12:34:56");
        assert_eq!(info.branch, "main");
        assert_eq!(info.encoding, "UTF-8");
    }

    #[test]
    fn fallback_when_no_active_file() {
        let session = EditorSession::default();
        let info = compose(&session, &DiagnosticsState::default(), (1, 1), at_noon());
        assert_eq!(info.language, "TEXT");
    }

    #[test]
    fn fallback_when_no_extension() {
        let mut session = EditorSession::default();
        session.open("portfolio/LICENSE");
        let info = compose(&session, &DiagnosticsState::default(), (3, 7), at_noon());
        assert_eq!(info.language, "TEXT");
        assert_eq!((info.line, info.col), (3, 7));
    }

    #[test]
    fn counts_mirror_diagnostics() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        let mut diags = DiagnosticsState::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            diags.regenerate("a/b.md", &mut rng);
            let info = compose(&EditorSession::default(), &diags, (1, 1), at_noon());
            assert_eq!(info.warnings, diags.warning_count());
            assert_eq!(info.errors, 0);
        }
    }
}
