use crate::model::record_id::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An academic program ("prodi") as returned by the programs endpoint.
///
/// Only `id` and `nama` are needed to fill the selection control; every
/// other field the server sends is kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProgram")]
pub struct Program {
    pub id: RecordId,
    pub nama: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of a program: `id` and `_id` may both be present.
#[derive(Deserialize)]
struct RawProgram {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    document_id: Option<RecordId>,
    nama: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawProgram> for Program {
    type Error = String;

    fn try_from(raw: RawProgram) -> Result<Self, Self::Error> {
        Ok(Program {
            id: resolve_id(raw.id, raw.document_id)?,
            nama: raw.nama,
            extra: raw.extra,
        })
    }
}

/// Picks the record key, preferring `id` over `_id`.
pub(crate) fn resolve_id(
    id: Option<RecordId>,
    document_id: Option<RecordId>,
) -> Result<RecordId, String> {
    id.or(document_id)
        .ok_or_else(|| "missing field `id` (or `_id`)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_fields() {
        let json = r#"{"id":2,"nama":"Sistem Informasi","singkatan":"SI","fakultas_id":1}"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.id, RecordId::Number(2));
        assert_eq!(program.nama, "Sistem Informasi");
        assert_eq!(program.extra.get("singkatan"), Some(&Value::from("SI")));
        assert!(!program.extra.contains_key("id"));
    }

    #[test]
    fn accepts_document_ids() {
        let program: Program = serde_json::from_str(r#"{"_id":"p-9","nama":"Informatika"}"#).unwrap();
        assert_eq!(program.id, RecordId::Text("p-9".into()));
    }

    #[test]
    fn accepts_both_key_spellings_at_once() {
        let json = r#"[{"_id":"65a1","id":"65a1","nama":"Informatika"},{"_id":"65a2","id":7,"nama":"Hukum"}]"#;
        let programs: Vec<Program> = serde_json::from_str(json).unwrap();
        assert_eq!(programs[0].id, RecordId::Text("65a1".into()));
        assert_eq!(programs[1].id, RecordId::Number(7));
        assert!(!programs[1].extra.contains_key("_id"));
    }

    #[test]
    fn rejects_missing_key() {
        assert!(serde_json::from_str::<Program>(r#"{"nama":"Informatika"}"#).is_err());
    }

    #[test]
    fn rejects_missing_name() {
        assert!(serde_json::from_str::<Program>(r#"{"id":1}"#).is_err());
        assert!(serde_json::from_str::<Program>(r#"{"id":1,"nama":5}"#).is_err());
    }
}
