/// Cosmetic marker for required fields, updated on blur.
///
/// Browser `required` validation still guards the submit; this only colours
/// the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMarker {
    /// Not blurred yet.
    #[default]
    Untouched,
    Valid,
    Invalid,
}

const INVALID_CLASS: &str = "border-red-300";
const VALID_CLASS: &str = "border-gray-300";

impl FieldMarker {
    pub fn on_blur(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldMarker::Invalid
        } else {
            FieldMarker::Valid
        }
    }

    /// Border class; untouched fields keep the neutral border.
    pub fn border_class(&self) -> &'static str {
        match self {
            FieldMarker::Invalid => INVALID_CLASS,
            FieldMarker::Untouched | FieldMarker::Valid => VALID_CLASS,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldMarker::Invalid)
    }
}
