use crate::core::form::FieldId;

#[derive(Debug, Clone)]
pub enum FormEvent {
    ValueChanged {
        id: FieldId,
        value: String,
    },
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    SubmitRequested,
    ErrorCancelled {
        id: FieldId,
    },
}
