use serde::{Deserialize, Serialize};

/// Review state of a bill as the store records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Raw code stored by the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "En attente" => Some(BillStatus::Pending),
            "Accepté" => Some(BillStatus::Accepted),
            "Refusé" => Some(BillStatus::Refused),
            _ => None,
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A status string tagged with the side of the display boundary it is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusField {
    Raw(String),
    Display(String),
}

impl StatusField {
    /// Classifies a free-form status string.
    ///
    /// Known labels are `Display`; everything else, including unknown codes,
    /// is treated as `Raw` and passes through translation unchanged.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        if BillStatus::from_label(value).is_some() {
            StatusField::Display(value.to_string())
        } else {
            StatusField::Raw(value.to_string())
        }
    }

    #[must_use]
    pub fn into_display(self) -> String {
        match self {
            StatusField::Raw(code) => match BillStatus::from_code(&code) {
                Some(status) => status.label().to_string(),
                None => code,
            },
            StatusField::Display(label) => label,
        }
    }
}

/// Maps a raw status code to its label; any other input is returned unchanged.
#[must_use]
pub fn translate_status(status: &str) -> String {
    StatusField::classify(status).into_display()
}
