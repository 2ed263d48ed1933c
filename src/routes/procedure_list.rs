use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcedureInfo {
    pub name: &'static str,
    /// `query` for GET procedures, `mutation` otherwise.
    pub kind: &'static str,
    pub method: &'static str,
    pub source: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/procedures_generated.rs"));

pub fn procedures() -> &'static [ProcedureInfo] {
    PROCEDURES
}
