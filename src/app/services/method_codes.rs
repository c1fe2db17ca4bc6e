//! KOF tema code <-> method type mapping
//!
//! Tema codes classify the survey method of a coordinate block. Several codes
//! and textual aliases may map to the same method; each method has at most
//! one canonical code that is used when writing.
//!
//! ```text
//! 2251 / F     berg i dagen              RO
//! 2401         dreiesondering            RWS
//! 2402         prøvetaking               SA
//! 2403         prøvegrop                 TP
//! 2405         enkelsondering            SS
//! 2406         dreietrykksondering       RP
//! 2407         trykksondering            CPT
//! 2409         rammesondering            RS
//! 2410         setningsmåling            SR
//! 2411         standard penetration      SPT
//! 2412         fjellkontrollboring       RCD
//! 2413 / GVR   grunnvannsrør, piezometer PZ
//! 2414         permeabilitetsmåling      PT
//! 2415 / VB    vingeboring               SVT
//! 2417         inklinometer              INC
//! 2418         totalsondering            TOT
//! ```
//!
//! 2430 covers core drilling, water loss tests and environmental sampling
//! alike, so it is not mapped in either direction.

use crate::app::models::MethodType;
use std::collections::HashMap;

/// Canonical tema code for each method that has one
const CANONICAL_CODES: &[(&str, MethodType)] = &[
    ("2251", MethodType::Ro),
    ("2401", MethodType::Rws),
    ("2402", MethodType::Sa),
    ("2403", MethodType::Tp),
    ("2405", MethodType::Ss),
    ("2406", MethodType::Rp),
    ("2407", MethodType::Cpt),
    ("2409", MethodType::Rs),
    ("2410", MethodType::Sr),
    ("2411", MethodType::Spt),
    ("2412", MethodType::Rcd),
    ("2413", MethodType::Pz),
    ("2414", MethodType::Pt),
    ("2415", MethodType::Svt),
    ("2417", MethodType::Inc),
    ("2418", MethodType::Tot),
];

/// Codes accepted on read only
const ALIASES: &[(&str, MethodType)] = &[
    ("F", MethodType::Ro),
    ("GVR", MethodType::Pz),
    ("VB", MethodType::Svt),
];

/// Bidirectional tema code table
#[derive(Debug, Clone)]
pub struct MethodCodeTable {
    to_method: HashMap<String, MethodType>,
    to_code: HashMap<MethodType, String>,
}

impl MethodCodeTable {
    /// The standard KOF tema code table
    pub fn standard() -> Self {
        let mut to_method = HashMap::new();
        let mut to_code = HashMap::new();

        for &(code, method) in CANONICAL_CODES {
            to_method.insert(code.to_string(), method);
            to_code.insert(method, code.to_string());
        }
        for &(code, method) in ALIASES {
            to_method.insert(code.to_string(), method);
        }

        Self { to_method, to_code }
    }

    /// Method for a tema code; `None` for blank or unknown codes
    pub fn tema_code_to_method(&self, code: &str) -> Option<MethodType> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.to_method.get(code).copied()
    }

    /// Canonical tema code for a method; `None` if KOF has no code for it
    pub fn method_to_tema_code(&self, method: MethodType) -> Option<&str> {
        self.to_code.get(&method).map(String::as_str)
    }

    /// All (code, method) pairs accepted on read, sorted by code
    pub fn entries(&self) -> Vec<(&str, MethodType)> {
        let mut entries: Vec<_> = self
            .to_method
            .iter()
            .map(|(code, method)| (code.as_str(), *method))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for MethodCodeTable {
    fn default() -> Self {
        Self::standard()
    }
}
