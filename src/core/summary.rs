use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FootType {
    Iambic,
    Trochaic,
    Anapestic,
    Dactylic,
    Undetermined,
}

impl FootType {
    fn template(self) -> &'static str {
        match self {
            FootType::Iambic => "-+",
            FootType::Trochaic => "+-",
            FootType::Anapestic => "--+",
            FootType::Dactylic => "+--",
            FootType::Undetermined => "",
        }
    }

    fn size(self) -> usize {
        self.template().len()
    }
}

impl fmt::Display for FootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FootType::Iambic => "iambic",
            FootType::Trochaic => "trochaic",
            FootType::Anapestic => "anapestic",
            FootType::Dactylic => "dactylic",
            FootType::Undetermined => "undetermined",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeterSummary {
    pub foot: FootType,
    pub feet: usize,
    pub name: String,
}

const CANDIDATES: [FootType; 4] = [
    FootType::Iambic,
    FootType::Trochaic,
    FootType::Anapestic,
    FootType::Dactylic,
];

pub fn meter_name(feet: usize) -> String {
    match feet {
        1 => "monometer".to_string(),
        2 => "dimeter".to_string(),
        3 => "trimeter".to_string(),
        4 => "tetrameter".to_string(),
        5 => "pentameter".to_string(),
        6 => "hexameter".to_string(),
        7 => "heptameter".to_string(),
        8 => "octameter".to_string(),
        n => format!("{}-foot", n),
    }
}

fn alignment_score(pattern: &[u8], foot: FootType) -> usize {
    let template = foot.template().as_bytes();
    pattern
        .iter()
        .enumerate()
        .filter(|(i, symbol)| template[i % template.len()] == **symbol)
        .count()
}

/// Names the foot that best explains a `+`/`-` pattern, e.g. "iambic tetrameter".
pub fn summarize(meter: &str) -> MeterSummary {
    let pattern = meter.as_bytes();
    if pattern.is_empty() {
        return MeterSummary {
            foot: FootType::Undetermined,
            feet: 0,
            name: FootType::Undetermined.to_string(),
        };
    }

    let mut best = (FootType::Iambic, alignment_score(pattern, FootType::Iambic));
    for foot in &CANDIDATES[1..] {
        let score = alignment_score(pattern, *foot);
        if score > best.1 {
            best = (*foot, score);
        }
    }

    let foot = best.0;
    let feet = pattern.len().div_ceil(foot.size());
    MeterSummary {
        foot,
        feet,
        name: format!("{} {}", foot, meter_name(feet)),
    }
}
