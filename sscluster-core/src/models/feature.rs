use crate::models::interval::Interval;

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
pub enum Strand {
    Plus,
    Minus,
    #[default]
    Unstranded,
}

impl Strand {
    pub fn from_char(c: char) -> Self {
        match c {
            '+' => Strand::Plus,
            '-' => Strand::Minus,
            _ => Strand::Unstranded,
        }
    }
}

///
/// A gene or annotation entry: one row of a results file, GTF or GFF3.
///
/// Strand is carried along for completeness; overlap classification never
/// looks at it.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Feature {
    pub chr: String,
    pub id: String,
    pub interval: Interval,
    pub feature_type: Option<String>,
    pub strand: Strand,

    /// pass-through columns, never interpreted
    pub rest: Vec<String>,
}
