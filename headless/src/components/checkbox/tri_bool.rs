use serde::{Deserialize, Serialize};

/// A checkbox value: checked, unchecked, or indeterminate.
///
/// Serializes as `true`, `false` or `"indeterminate"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TriBoolRepr", into = "TriBoolRepr")]
pub enum TriBool {
    #[default]
    False,
    True,
    Indeterminate,
}

impl TriBool {
    pub fn is_checked(&self) -> bool {
        matches!(self, TriBool::True)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, TriBool::Indeterminate)
    }

    /// Value after a click: indeterminate becomes checked.
    pub fn toggled(&self) -> TriBool {
        match self {
            TriBool::True => TriBool::False,
            TriBool::False | TriBool::Indeterminate => TriBool::True,
        }
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value { TriBool::True } else { TriBool::False }
    }
}

/// Aggregate child states into one tri-state value.
///
/// All true gives `True`, all false gives `False`. A mix gives
/// `Indeterminate`, and so does an empty collection.
pub fn tri_bool<I: IntoIterator<Item = bool>>(values: I) -> TriBool {
    let mut any_true = false;
    let mut any_false = false;
    for value in values {
        if value {
            any_true = true;
        } else {
            any_false = true;
        }
        if any_true && any_false {
            return TriBool::Indeterminate;
        }
    }

    match (any_true, any_false) {
        (true, false) => TriBool::True,
        (false, true) => TriBool::False,
        _ => TriBool::Indeterminate,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TriBoolRepr {
    Bool(bool),
    Text(String),
}

impl From<TriBool> for TriBoolRepr {
    fn from(value: TriBool) -> Self {
        match value {
            TriBool::True => TriBoolRepr::Bool(true),
            TriBool::False => TriBoolRepr::Bool(false),
            TriBool::Indeterminate => TriBoolRepr::Text("indeterminate".to_string()),
        }
    }
}

impl TryFrom<TriBoolRepr> for TriBool {
    type Error = String;

    fn try_from(repr: TriBoolRepr) -> Result<Self, Self::Error> {
        match repr {
            TriBoolRepr::Bool(value) => Ok(value.into()),
            TriBoolRepr::Text(text) if text == "indeterminate" => Ok(TriBool::Indeterminate),
            TriBoolRepr::Text(text) => Err(format!("unknown tri-state value {text:?}")),
        }
    }
}
