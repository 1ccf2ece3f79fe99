use serde::{Deserialize, Serialize};

use crate::capabilities::{ShareOutcome, ToneSpec};
use crate::content::Formula;
use crate::tasbih::Marker;

#[derive(Debug, Serialize)]
pub struct TasbihResponse {
    pub tally: u32,
    pub cycle_len: u32,
    pub upper_bound: u32,
    pub formula_index: usize,
    pub formulas: Vec<Formula>,
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<ToneSpec>,
}

#[derive(Debug, Deserialize)]
pub struct SetTallyRequest {
    pub position: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectFormulaRequest {
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub index: usize,
    pub arabic: &'static str,
    pub translation: &'static str,
    pub reference: &'static str,
    pub topic: &'static str,
    pub reflection: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub text: String,
    pub outcome: ShareOutcome,
}

#[derive(Debug, Deserialize)]
pub struct SelectCategoryRequest {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct NameView {
    pub arabic: &'static str,
    pub latin: &'static str,
    pub meaning: &'static str,
    pub category: &'static str,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct NamesResponse {
    pub selected: String,
    pub categories: Vec<&'static str>,
    pub entries: Vec<NameView>,
}
