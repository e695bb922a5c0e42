//! Student records and the payload used to create one.
//!
//! `Student` is what the list endpoint returns. It is decoded strictly for
//! the fields the roster renders (`id`, `npm`, `nama`) and leniently for the
//! rest, so records created by older clients (missing gender or school)
//! still show up. Anything else the server attaches ends up in `extra`.

use crate::model::program::{resolve_id, Program};
use crate::model::record_id::RecordId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStudent")]
pub struct Student {
    pub id: RecordId,
    /// Student number. Some records carry it as a JSON number.
    pub npm: String,
    pub nama: String,
    pub prodi_id: Option<ProgramRef>,
    pub jenis_kelamin: Option<String>,
    pub asal_sekolah: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of a student: `id` and `_id` may both be present.
#[derive(Deserialize)]
struct RawStudent {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    document_id: Option<RecordId>,
    #[serde(deserialize_with = "string_or_number")]
    npm: String,
    nama: String,
    #[serde(default)]
    prodi_id: Option<ProgramRef>,
    #[serde(default)]
    jenis_kelamin: Option<String>,
    #[serde(default)]
    asal_sekolah: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawStudent> for Student {
    type Error = String;

    fn try_from(raw: RawStudent) -> Result<Self, Self::Error> {
        Ok(Student {
            id: resolve_id(raw.id, raw.document_id)?,
            npm: raw.npm,
            nama: raw.nama,
            prodi_id: raw.prodi_id,
            jenis_kelamin: raw.jenis_kelamin,
            asal_sekolah: raw.asal_sekolah,
            extra: raw.extra,
        })
    }
}

/// Reference from a student to its program: either the bare key, or the
/// whole program object when the server populates the relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramRef {
    Id(RecordId),
    Populated(Program),
}

impl ProgramRef {
    pub fn id(&self) -> &RecordId {
        match self {
            ProgramRef::Id(id) => id,
            ProgramRef::Populated(program) => &program.id,
        }
    }
}

/// Values of the "add student" form, posted as-is to the students endpoint.
///
/// `Default` is the blank form: empty strings and no program selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub npm: String,
    pub nama: String,
    pub prodi_id: Option<RecordId>,
    pub jenis_kelamin: String,
    pub asal_sekolah: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
